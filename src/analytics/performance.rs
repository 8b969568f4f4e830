//! Per-dimension performance breakdowns built on the aggregation fold.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analytics::aggregation::{aggregate_by, aggregate_with_keys, Aggregate};
use crate::core::{pair_key, EquityTracker, Session};
use crate::models::{Mindset, PlanAdherence, Trade};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Journal calendar weeks start on Sunday.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Pair,
    Hour,
    Weekday,
    Session,
    Mindset,
    PlanAdherence,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Pair,
        Dimension::Hour,
        Dimension::Weekday,
        Dimension::Session,
        Dimension::Mindset,
        Dimension::PlanAdherence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Pair => "pair",
            Dimension::Hour => "hour",
            Dimension::Weekday => "weekday",
            Dimension::Session => "session",
            Dimension::Mindset => "mindset",
            Dimension::PlanAdherence => "plan_adherence",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    /// 1 = January.
    pub month: u32,
    pub label: String,
    pub aggregate: Aggregate,
    /// Deepest dip below the month's own running peak, in currency units (<= 0).
    pub max_drawdown: f64,
}

/// Keyed by the cleaned symbol, so "EUR/USD" and "eurusd" fall together. Every
/// trade lands somewhere, parseable into currencies or not.
pub fn pair_performance<'a, I>(trades: I) -> BTreeMap<String, Aggregate>
where
    I: IntoIterator<Item = &'a Trade>,
{
    aggregate_by(trades, |t| pair_key(&t.pair))
}

/// One row per calendar month of `year`, January first, including empty months.
pub fn monthly_performance<'a, I>(trades: I, year: i32) -> Vec<MonthlyPerformance>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut by_month: BTreeMap<u32, Vec<&Trade>> = BTreeMap::new();
    for t in trades.into_iter().filter(|t| t.date.year() == year) {
        by_month.entry(t.date.month()).or_default().push(t);
    }

    // peak-tracking restarts from zero every month
    let tracker = EquityTracker::new(0.0);
    (1..=12u32)
        .zip(MONTH_LABELS)
        .map(|(month, label)| {
            let month_trades = by_month.remove(&month).unwrap_or_default();
            let mut aggregate = Aggregate::empty(label);
            for t in &month_trades {
                aggregate.push(t);
            }
            MonthlyPerformance {
                month,
                label: label.to_string(),
                aggregate,
                max_drawdown: tracker.max_drawdown_amount(month_trades.iter().copied()),
            }
        })
        .collect()
}

/// Keyed by hour of day; trades without a time count as 00:00.
pub fn hourly_performance<'a, I>(trades: I) -> BTreeMap<u32, Aggregate>
where
    I: IntoIterator<Item = &'a Trade>,
{
    aggregate_by(trades, |t| t.hour())
}

/// Seven rows, Sunday first, each present even without trades.
pub fn weekday_performance<'a, I>(trades: I) -> Vec<Aggregate>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let by_day = aggregate_with_keys(trades, 0..7u32, |t| {
        t.date.weekday().num_days_from_sunday()
    });
    by_day
        .into_values()
        .zip(WEEKDAYS)
        .map(|(mut agg, day)| {
            agg.key = format!("{:?}", day);
            agg
        })
        .collect()
}

pub fn session_performance<'a, I>(trades: I) -> BTreeMap<Session, Aggregate>
where
    I: IntoIterator<Item = &'a Trade>,
{
    aggregate_by(trades, |t| Session::from_hour(t.hour()))
}

/// All five mindsets, including those with no trades.
pub fn mindset_performance<'a, I>(trades: I) -> BTreeMap<Mindset, Aggregate>
where
    I: IntoIterator<Item = &'a Trade>,
{
    aggregate_with_keys(trades, Mindset::ALL, |t| t.mindset)
}

/// All four adherence levels, including those with no trades.
pub fn plan_adherence_performance<'a, I>(trades: I) -> BTreeMap<PlanAdherence, Aggregate>
where
    I: IntoIterator<Item = &'a Trade>,
{
    aggregate_with_keys(trades, PlanAdherence::ALL, |t| t.plan_adherence)
}

/// Buckets for any dimension, in the dimension's natural order.
pub fn breakdown(trades: &[Trade], dimension: Dimension) -> Vec<Aggregate> {
    match dimension {
        Dimension::Pair => pair_performance(trades).into_values().collect(),
        Dimension::Hour => hourly_performance(trades).into_values().collect(),
        Dimension::Weekday => weekday_performance(trades),
        Dimension::Session => session_performance(trades).into_values().collect(),
        Dimension::Mindset => mindset_performance(trades).into_values().collect(),
        Dimension::PlanAdherence => plan_adherence_performance(trades).into_values().collect(),
    }
}

/// Buckets with at least `min_trades`, most profitable first.
pub fn strongest_buckets(buckets: &[Aggregate], min_trades: usize) -> Vec<Aggregate> {
    let mut out: Vec<Aggregate> = buckets
        .iter()
        .filter(|b| b.count >= min_trades.max(1))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.net.total_cmp(&a.net));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeResult::*;
    use crate::models::{Mindset, PlanAdherence, Trade};
    use crate::test_helpers::{approx, make_trade, make_trade_at};

    fn journal() -> Vec<Trade> {
        vec![
            make_trade_at("EUR/USD", "2024-03-04", "09:30", 120.0, Win),
            make_trade_at("eurusd", "2024-03-05", "13:15", -40.0, Loss),
            make_trade_at("US30", "2024-03-20", "14:00", 75.0, Win),
            make_trade_at("XYZAB", "2024-04-02", "09:05", -15.0, Loss),
            make_trade("GBPJPY", "2024-04-10", 0.0, Breakeven),
            make_trade("GBPJPY", "2023-12-29", 300.0, Win),
        ]
    }

    #[test]
    fn pair_nets_sum_to_overall_net() {
        let trades = journal();
        let pairs = pair_performance(&trades);
        assert_eq!(pairs["EURUSD"].count, 2);
        assert!(pairs.contains_key("XYZAB"));
        let total: f64 = pairs.values().map(|a| a.net).sum();
        let overall: f64 = trades.iter().map(|t| t.pnl).sum();
        assert!(approx(total, overall));
    }

    #[test]
    fn monthly_rows_cover_the_whole_year() {
        let trades = journal();
        let months = monthly_performance(&trades, 2024);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].label, "Jan");
        assert!(!months[0].aggregate.has_trades());
        assert_eq!(months[2].aggregate.count, 3);
        assert!(approx(months[2].aggregate.net, 155.0));
        // December 2023 trade is outside the year
        assert_eq!(months[11].aggregate.count, 0);
    }

    #[test]
    fn monthly_drawdown_resets_each_month() {
        let trades = vec![
            make_trade("EURUSD", "2024-05-01", 100.0, Win),
            make_trade("EURUSD", "2024-05-02", -150.0, Loss),
            make_trade("EURUSD", "2024-06-01", -20.0, Loss),
            make_trade("EURUSD", "2024-06-02", 50.0, Win),
        ];
        let months = monthly_performance(&trades, 2024);
        assert_eq!(months[4].max_drawdown, -150.0);
        assert_eq!(months[5].max_drawdown, -20.0);
        assert_eq!(months[6].max_drawdown, 0.0);
    }

    #[test]
    fn hourly_defaults_missing_time_to_midnight() {
        let trades = journal();
        let hours = hourly_performance(&trades);
        assert_eq!(hours[&9].count, 2);
        assert_eq!(hours[&0].count, 2);
        assert_eq!(hours[&13].net, -40.0);
    }

    #[test]
    fn weekday_rows_start_on_sunday() {
        let trades = journal();
        let days = weekday_performance(&trades);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].key, "Sun");
        // 2024-03-04 is a Monday
        assert_eq!(days[1].key, "Mon");
        assert_eq!(days[1].count, 1);
        let total: usize = days.iter().map(|d| d.count).sum();
        assert_eq!(total, trades.len());
    }

    #[test]
    fn sessions_follow_trade_hour() {
        let trades = journal();
        let sessions = session_performance(&trades);
        assert_eq!(sessions[&Session::London].count, 2);
        assert_eq!(sessions[&Session::NewYork].count, 2);
        assert_eq!(sessions[&Session::Tokyo].count, 2);
    }

    #[test]
    fn fixed_categories_always_present() {
        let mut trades = journal();
        trades[0].mindset = Mindset::Fomo;
        trades[1].plan_adherence = PlanAdherence::FollowedExactly;

        let mindsets = mindset_performance(&trades);
        assert_eq!(mindsets.len(), 5);
        assert_eq!(mindsets[&Mindset::Fomo].count, 1);
        assert_eq!(mindsets[&Mindset::Neutral].count, 5);
        assert_eq!(mindsets[&Mindset::Anxious].net, 0.0);
        assert_eq!(mindsets[&Mindset::Fomo].key, "FOMO");

        let plans = plan_adherence_performance(&trades);
        assert_eq!(plans.len(), 4);
        assert_eq!(plans[&PlanAdherence::NoPlan].count, 5);
        assert_eq!(plans[&PlanAdherence::MajorDeviation].count, 0);
    }

    #[test]
    fn strongest_buckets_filters_and_sorts() {
        let trades = journal();
        let buckets = breakdown(&trades, Dimension::Pair);
        let best = strongest_buckets(&buckets, 1);
        assert_eq!(best[0].key, "GBPJPY");
        assert_eq!(best.last().map(|b| b.key.as_str()), Some("XYZAB"));
        assert!(strongest_buckets(&buckets, 3).is_empty());
    }
}
