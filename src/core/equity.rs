use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{sorted_chronologically, Trade};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    /// 0 is the seed balance; i is the balance after the i-th trade.
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub balance: f64,
    pub peak: f64,
    /// Distance below the running peak, in [0, 100].
    pub drawdown_pct: f64,
}

/// Replays trades in chronological order from a seed balance.
#[derive(Debug, Clone, Copy)]
pub struct EquityTracker {
    pub seed: f64,
}

impl EquityTracker {
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    /// Balance after each trade, seed first. Length is always `trades + 1`.
    pub fn curve<'a, I>(&self, trades: I) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let sorted = sorted_chronologically(trades);
        let mut balance = self.seed;
        let mut curve = Vec::with_capacity(sorted.len() + 1);
        curve.push(balance);
        for t in sorted {
            balance += t.pnl;
            curve.push(balance);
        }
        curve
    }

    pub fn drawdown_series<'a, I>(&self, trades: I) -> Vec<DrawdownPoint>
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let sorted = sorted_chronologically(trades);
        let mut balance = self.seed;
        let mut peak = self.seed;
        let mut series = Vec::with_capacity(sorted.len() + 1);
        series.push(DrawdownPoint {
            index: 0,
            date: None,
            balance,
            peak,
            drawdown_pct: drawdown_pct(peak, balance),
        });

        for (i, t) in sorted.into_iter().enumerate() {
            balance += t.pnl;
            peak = peak.max(balance);
            series.push(DrawdownPoint {
                index: i + 1,
                date: Some(t.date),
                balance,
                peak,
                drawdown_pct: drawdown_pct(peak, balance),
            });
        }
        series
    }

    /// Largest percentage drop below a running peak.
    pub fn max_drawdown_pct<'a, I>(&self, trades: I) -> f64
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        self.drawdown_series(trades)
            .iter()
            .map(|p| p.drawdown_pct)
            .fold(0.0, f64::max)
    }

    /// Most negative `balance - peak` in currency units (0 when never under water).
    pub fn max_drawdown_amount<'a, I>(&self, trades: I) -> f64
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        self.drawdown_series(trades)
            .iter()
            .map(|p| p.balance - p.peak)
            .fold(0.0, f64::min)
    }
}

pub fn drawdown_pct(peak: f64, balance: f64) -> f64 {
    if peak > 0.0 {
        ((peak - balance) / peak * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}
