//! Auto-tracked goals: a metric measured over the trades inside a date window,
//! optionally narrowed to trades carrying a matching tag.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::EquityTracker;
use crate::models::Trade;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalMetric {
    Pnl,
    WinRate,
    TradeCount,
    /// Deepest dip below the running peak, in currency units, from a zero seed.
    Drawdown,
}

impl GoalMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalMetric::Pnl => "pnl",
            GoalMetric::WinRate => "win_rate",
            GoalMetric::TradeCount => "trade_count",
            GoalMetric::Drawdown => "drawdown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRule {
    pub metric: GoalMetric,
    /// Substring matched against each trade tag.
    #[serde(default)]
    pub filter_tag: Option<String>,
}

impl GoalRule {
    pub fn new(metric: GoalMetric) -> Self {
        Self {
            metric,
            filter_tag: None,
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.filter_tag = Some(tag.to_string());
        self
    }

    fn matches(&self, trade: &Trade) -> bool {
        match self.filter_tag.as_deref() {
            Some(filter) if !filter.is_empty() => trade.tags.iter().any(|tag| tag.contains(filter)),
            _ => true,
        }
    }

    /// Measures the metric over trades dated within `[start, end]`.
    pub fn measure(&self, trades: &[Trade], start: NaiveDate, end: NaiveDate) -> f64 {
        let relevant: Vec<&Trade> = trades
            .iter()
            .filter(|t| t.date >= start && t.date <= end && self.matches(t))
            .collect();

        match self.metric {
            GoalMetric::Pnl => relevant.iter().map(|t| t.pnl).sum(),
            GoalMetric::TradeCount => relevant.len() as f64,
            GoalMetric::WinRate => {
                if relevant.is_empty() {
                    return 0.0;
                }
                let wins = relevant.iter().filter(|t| t.is_win()).count();
                wins as f64 / relevant.len() as f64 * 100.0
            }
            GoalMetric::Drawdown => EquityTracker::new(0.0)
                .max_drawdown_amount(relevant.iter().copied())
                .abs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub target_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub title: String,
    pub rule: GoalRule,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub start_value: f64,
    pub target_value: f64,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub current: f64,
    pub percent_complete: f64,
    pub target_reached: bool,
    /// Titles of milestones whose target the current value has met.
    pub milestones_achieved: Vec<String>,
}

impl Goal {
    pub fn progress(&self, trades: &[Trade]) -> GoalProgress {
        let current = self.rule.measure(trades, self.start, self.end);
        let percent = percent_complete(self.start_value, self.target_value, current);
        GoalProgress {
            current,
            percent_complete: percent,
            target_reached: percent >= 100.0,
            milestones_achieved: self
                .milestones
                .iter()
                .filter(|m| current >= m.target_value)
                .map(|m| m.title.clone())
                .collect(),
        }
    }
}

/// Share of the way from `start_value` to `target_value`, clamped to [0, 100].
pub fn percent_complete(start_value: f64, target_value: f64, current: f64) -> f64 {
    let span = target_value - start_value;
    if span == 0.0 {
        return if current >= target_value { 100.0 } else { 0.0 };
    }
    ((current - start_value) / span * 100.0).clamp(0.0, 100.0)
}
