use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::models::Trade;

/// P&L fold over one bucket of trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub key: String,
    /// Sum of positive pnl.
    pub profit: f64,
    /// Sum of the magnitudes of negative pnl.
    pub loss: f64,
    pub net: f64,
    pub count: usize,
    pub wins: usize,
    /// Share of trades whose result is Win, in [0, 1]. 0 for an empty bucket.
    pub win_rate: f64,
}

impl Aggregate {
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            profit: 0.0,
            loss: 0.0,
            net: 0.0,
            count: 0,
            wins: 0,
            win_rate: 0.0,
        }
    }

    pub fn push(&mut self, trade: &Trade) {
        if trade.pnl > 0.0 {
            self.profit += trade.pnl;
        } else if trade.pnl < 0.0 {
            self.loss += trade.pnl.abs();
        }
        self.net = self.profit - self.loss;
        self.count += 1;
        if trade.is_win() {
            self.wins += 1;
        }
        self.win_rate = self.wins as f64 / self.count as f64;
    }

    pub fn avg_pnl(&self) -> f64 {
        if self.count > 0 {
            self.net / self.count as f64
        } else {
            0.0
        }
    }

    pub fn has_trades(&self) -> bool {
        self.count > 0
    }
}

/// Groups trades by `key_fn` and folds each group. Only observed keys appear.
pub fn aggregate_by<'a, I, K, F>(trades: I, key_fn: F) -> BTreeMap<K, Aggregate>
where
    I: IntoIterator<Item = &'a Trade>,
    K: Ord + Display,
    F: Fn(&Trade) -> K,
{
    let mut buckets: BTreeMap<K, Aggregate> = BTreeMap::new();
    for t in trades {
        let key = key_fn(t);
        buckets
            .entry(key)
            .or_insert_with_key(|k| Aggregate::empty(k.to_string()))
            .push(t);
    }
    buckets
}

/// Like [`aggregate_by`], but every key in `keys` is present even with no trades.
/// Trades whose key is not in `keys` are dropped, so callers should map unknown
/// values onto a catch-all key first.
pub fn aggregate_with_keys<'a, I, K, F>(
    trades: I,
    keys: impl IntoIterator<Item = K>,
    key_fn: F,
) -> BTreeMap<K, Aggregate>
where
    I: IntoIterator<Item = &'a Trade>,
    K: Ord + Display,
    F: Fn(&Trade) -> K,
{
    let mut buckets: BTreeMap<K, Aggregate> = keys
        .into_iter()
        .map(|k| {
            let agg = Aggregate::empty(k.to_string());
            (k, agg)
        })
        .collect();
    for t in trades {
        if let Some(agg) = buckets.get_mut(&key_fn(t)) {
            agg.push(t);
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeResult::*;
    use crate::test_helpers::{approx, make_trade};

    #[test]
    fn fold_splits_profit_and_loss() {
        let trades = vec![
            make_trade("EURUSD", "2024-01-01", 120.0, Win),
            make_trade("EURUSD", "2024-01-02", -45.0, Loss),
            make_trade("EURUSD", "2024-01-03", 0.0, Breakeven),
            make_trade("GBPUSD", "2024-01-03", 10.0, Win),
        ];
        let by_pair = aggregate_by(&trades, |t| t.pair.clone());
        let eu = &by_pair["EURUSD"];
        assert_eq!(eu.profit, 120.0);
        assert_eq!(eu.loss, 45.0);
        assert_eq!(eu.net, 75.0);
        assert_eq!(eu.count, 3);
        assert!(approx(eu.win_rate, 1.0 / 3.0));
        assert!(approx(eu.avg_pnl(), 25.0));
        assert_eq!(by_pair.len(), 2);
    }

    #[test]
    fn seeded_keys_survive_without_trades() {
        let trades = vec![make_trade("EURUSD", "2024-01-01", 5.0, Win)];
        let buckets = aggregate_with_keys(&trades, ["a", "b"], |_| "a");
        assert_eq!(buckets["a"].count, 1);
        let b = &buckets["b"];
        assert_eq!((b.profit, b.loss, b.net, b.count), (0.0, 0.0, 0.0, 0));
        assert_eq!(b.win_rate, 0.0);
        assert_eq!(b.avg_pnl(), 0.0);
        assert!(!b.has_trades());
    }
}
