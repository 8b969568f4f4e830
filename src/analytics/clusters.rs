use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Trade;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyAggregate {
    pub tag: String,
    pub pnl: f64,
    pub count: usize,
    pub wins: usize,
    /// Percentage, 0-100.
    pub win_rate: f64,
    pub avg_pnl: f64,
}

/// Per-tag performance. A trade carrying several tags counts in full toward each
/// of them, so the tag P&Ls do not sum to the account P&L.
pub fn cluster_by_tag<'a, I>(trades: I) -> Vec<StrategyAggregate>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut by_tag: BTreeMap<&str, (f64, usize, usize)> = BTreeMap::new();
    for t in trades {
        for tag in &t.tags {
            let entry = by_tag.entry(tag.as_str()).or_default();
            entry.0 += t.pnl;
            entry.1 += 1;
            if t.is_win() {
                entry.2 += 1;
            }
        }
    }

    let mut out: Vec<StrategyAggregate> = by_tag
        .into_iter()
        .map(|(tag, (pnl, count, wins))| StrategyAggregate {
            tag: tag.to_string(),
            pnl,
            count,
            wins,
            win_rate: wins as f64 / count as f64 * 100.0,
            avg_pnl: pnl / count as f64,
        })
        .collect();
    out.sort_by(|a, b| b.pnl.total_cmp(&a.pnl));
    out
}
