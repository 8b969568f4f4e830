use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analytics::aggregation::Aggregate;
use crate::analytics::performance::weekday_performance;
use crate::models::Trade;

/// Net P&L per calendar day. Days without trades are absent.
pub fn daily_pnl<'a, I>(trades: I) -> BTreeMap<NaiveDate, f64>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut days = BTreeMap::new();
    for t in trades {
        *days.entry(t.date).or_insert(0.0) += t.pnl;
    }
    days
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthStats {
    pub year: i32,
    pub month: u32,
    pub total_pnl: f64,
    pub total_count: usize,
    pub win_trades: usize,
    /// Percentage, 0-100.
    pub win_rate: f64,
    /// Days closing with net > 0.
    pub win_days: usize,
    /// Days closing with net < 0. Flat days count as neither.
    pub loss_days: usize,
    /// Sunday first, all seven present.
    pub weekdays: Vec<Aggregate>,
}

pub fn month_stats(trades: &[Trade], year: i32, month: u32) -> MonthStats {
    let month_trades: Vec<&Trade> = trades
        .iter()
        .filter(|t| t.date.year() == year && t.date.month() == month)
        .collect();

    let total_count = month_trades.len();
    let total_pnl: f64 = month_trades.iter().map(|t| t.pnl).sum();
    let win_trades = month_trades.iter().filter(|t| t.is_win()).count();
    let win_rate = if total_count > 0 {
        win_trades as f64 / total_count as f64 * 100.0
    } else {
        0.0
    };

    let days = daily_pnl(month_trades.iter().copied());
    let win_days = days.values().filter(|&&p| p > 0.0).count();
    let loss_days = days.values().filter(|&&p| p < 0.0).count();

    MonthStats {
        year,
        month,
        total_pnl,
        total_count,
        win_trades,
        win_rate,
        win_days,
        loss_days,
        weekdays: weekday_performance(month_trades.iter().copied()),
    }
}
