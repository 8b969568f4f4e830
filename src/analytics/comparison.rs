//! Side-by-side comparison of two trade cohorts, each selected by symbol and a
//! date range resolved against a caller-supplied "today".

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::analytics::aggregation::Aggregate;
use crate::core::{pair_key, EquityTracker};
use crate::models::Trade;

/// Reported when a cohort has gross profit but no gross loss.
pub const PROFIT_FACTOR_CAP: f64 = 9.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    All,
    ThisMonth,
    LastMonth,
    ThisYear,
}

/// A concrete calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    All,
    Month { year: i32, month: u32 },
    Year(i32),
}

impl Period {
    pub fn resolve(range: DateRange, now: NaiveDate) -> Period {
        match range {
            DateRange::All => Period::All,
            DateRange::ThisMonth => Period::Month {
                year: now.year(),
                month: now.month(),
            },
            DateRange::LastMonth => {
                let (year, month) = month_before(now.year(), now.month());
                Period::Month { year, month }
            }
            DateRange::ThisYear => Period::Year(now.year()),
        }
    }

    /// The window a trend is measured against; `All` has none.
    pub fn previous(&self) -> Option<Period> {
        match *self {
            Period::All => None,
            Period::Month { year, month } => {
                let (year, month) = month_before(year, month);
                Some(Period::Month { year, month })
            }
            Period::Year(year) => Some(Period::Year(year - 1)),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Period::All => true,
            Period::Month { year, month } => date.year() == year && date.month() == month,
            Period::Year(year) => date.year() == year,
        }
    }
}

fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortSpec {
    /// None selects every symbol. Matched on the cleaned pair key.
    pub symbol: Option<String>,
    pub range: DateRange,
}

impl CohortSpec {
    pub fn new(symbol: Option<&str>, range: DateRange) -> Self {
        Self {
            symbol: symbol.map(str::to_string),
            range,
        }
    }

    fn matches_symbol(&self, trade: &Trade) -> bool {
        match &self.symbol {
            Some(symbol) => pair_key(symbol) == pair_key(&trade.pair),
            None => true,
        }
    }

    fn select<'a>(&self, trades: &'a [Trade], period: Period) -> Vec<&'a Trade> {
        trades
            .iter()
            .filter(|t| self.matches_symbol(t) && period.contains(t.date))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CohortStats {
    pub net_profit: f64,
    pub gross_profit: f64,
    pub gross_loss: f64,
    /// Percentage of trades whose result is Win.
    pub win_rate: f64,
    pub profit_factor: f64,
    pub total_trades: usize,
}

impl CohortStats {
    pub fn from_trades<'a, I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let mut fold = Aggregate::empty("cohort");
        for t in trades {
            fold.push(t);
        }
        Self::from_aggregate(&fold)
    }

    pub fn from_aggregate(fold: &Aggregate) -> Self {
        Self {
            net_profit: fold.net,
            gross_profit: fold.profit,
            gross_loss: fold.loss,
            win_rate: fold.win_rate * 100.0,
            profit_factor: profit_factor(fold.profit, fold.loss),
            total_trades: fold.count,
        }
    }
}

pub fn profit_factor(gross_profit: f64, gross_loss: f64) -> f64 {
    if gross_loss > 0.0 {
        gross_profit / gross_loss
    } else if gross_profit > 0.0 {
        PROFIT_FACTOR_CAP
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Absolute percent change of net profit against the previous period.
    pub percent_magnitude: f64,
}

impl Trend {
    /// None when the previous net profit is zero; the change would be unbounded.
    pub fn between(previous: f64, current: f64) -> Option<Trend> {
        if previous == 0.0 {
            return None;
        }
        let change = (current - previous) / previous.abs() * 100.0;
        let direction = if change > 0.0 {
            TrendDirection::Up
        } else if change < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };
        Some(Trend {
            direction,
            percent_magnitude: change.abs(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortReport {
    pub cohort: CohortSpec,
    pub period: Period,
    pub stats: CohortStats,
    /// Cumulative P&L from zero, one point per trade plus the seed.
    pub equity_curve: Vec<f64>,
    pub trend: Option<Trend>,
}

impl CohortReport {
    pub fn build(trades: &[Trade], cohort: &CohortSpec, now: NaiveDate) -> Self {
        let period = Period::resolve(cohort.range, now);
        let selected = cohort.select(trades, period);
        let stats = CohortStats::from_trades(selected.iter().copied());
        let equity_curve = EquityTracker::new(0.0).curve(selected.iter().copied());

        let trend = period.previous().and_then(|prev| {
            let previous = CohortStats::from_trades(cohort.select(trades, prev).into_iter());
            Trend::between(previous.net_profit, stats.net_profit)
        });

        Self {
            cohort: cohort.clone(),
            period,
            stats,
            equity_curve,
            trend,
        }
    }
}

/// Second cohort minus first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortDelta {
    pub net_profit: f64,
    pub win_rate: f64,
    pub profit_factor: f64,
    pub total_trades: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub first: CohortReport,
    pub second: CohortReport,
    pub delta: CohortDelta,
}

pub fn compare(
    trades: &[Trade],
    first: &CohortSpec,
    second: &CohortSpec,
    now: NaiveDate,
) -> Comparison {
    let first = CohortReport::build(trades, first, now);
    let second = CohortReport::build(trades, second, now);
    let delta = CohortDelta {
        net_profit: second.stats.net_profit - first.stats.net_profit,
        win_rate: second.stats.win_rate - first.stats.win_rate,
        profit_factor: second.stats.profit_factor - first.stats.profit_factor,
        total_trades: second.stats.total_trades as i64 - first.stats.total_trades as i64,
    };
    Comparison {
        first,
        second,
        delta,
    }
}
