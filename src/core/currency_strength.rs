use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::core::pair::normalize_pair;
use crate::models::Trade;

/// Number of currencies shown by the strength meter when the caller has no preference.
pub const DEFAULT_TOP_N: usize = 8;

const MIDPOINT: f64 = 5.0;
const SCALE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyScore {
    pub currency: String,
    pub raw_score: f64,
    /// Raw score rescaled across all observed currencies to [0, 10].
    pub normalized_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrencyStrength {
    /// Every observed currency, strongest first.
    pub scores: Vec<CurrencyScore>,
}

impl CurrencyStrength {
    /// Attributes each trade's P&L to the two legs of its pair: a winning long
    /// strengthens the base and weakens the quote, a short does the opposite.
    pub fn from_trades<'a, I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let mut raw: BTreeMap<String, f64> = BTreeMap::new();

        for t in trades {
            let Some(pair) = normalize_pair(&t.pair) else {
                debug!("Skipping unparseable pair '{}' for strength scoring", t.pair);
                continue;
            };

            let sign = t.direction.sign();
            *raw.entry(pair.base).or_insert(0.0) += sign.map_or(0.0, |s| s * t.pnl);
            *raw.entry(pair.quote).or_insert(0.0) -= sign.map_or(0.0, |s| s * t.pnl);
        }

        if raw.is_empty() {
            return Self::default();
        }

        let min = raw.values().copied().fold(f64::INFINITY, f64::min);
        let max = raw.values().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        let mut scores: Vec<CurrencyScore> = raw
            .into_iter()
            .map(|(currency, raw_score)| CurrencyScore {
                currency,
                raw_score,
                normalized_score: if range == 0.0 {
                    MIDPOINT
                } else {
                    (raw_score - min) / range * SCALE
                },
            })
            .collect();
        // BTreeMap iteration already orders ties by currency code
        scores.sort_by(|a, b| b.normalized_score.total_cmp(&a.normalized_score));

        Self { scores }
    }

    pub fn top(&self, n: usize) -> &[CurrencyScore] {
        &self.scores[..n.min(self.scores.len())]
    }

    pub fn get(&self, currency: &str) -> Option<&CurrencyScore> {
        self.scores.iter().find(|s| s.currency == currency)
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use crate::test_helpers::{approx, make_directional};

    #[test]
    fn single_long_spans_full_scale() {
        let trades = vec![make_directional("EURUSD", Direction::Long, 100.0)];
        let s = CurrencyStrength::from_trades(&trades);
        let eur = s.get("EUR").unwrap();
        let usd = s.get("USD").unwrap();
        assert_eq!(eur.raw_score, 100.0);
        assert_eq!(usd.raw_score, -100.0);
        assert!(approx(eur.normalized_score, 10.0));
        assert!(approx(usd.normalized_score, 0.0));
        assert_eq!(s.scores[0].currency, "EUR");
    }

    #[test]
    fn short_and_sell_invert_attribution() {
        let trades = vec![
            make_directional("GBP/JPY", Direction::Sell, 40.0),
            make_directional("gbpjpy", Direction::Short, -10.0),
        ];
        let s = CurrencyStrength::from_trades(&trades);
        assert_eq!(s.get("GBP").unwrap().raw_score, -30.0);
        assert_eq!(s.get("JPY").unwrap().raw_score, 30.0);
    }

    #[test]
    fn unknown_direction_registers_without_score() {
        let trades = vec![
            make_directional("EURUSD", Direction::Buy, 50.0),
            make_directional("AUDCAD", Direction::Unknown, 500.0),
        ];
        let s = CurrencyStrength::from_trades(&trades);
        assert_eq!(s.scores.len(), 4);
        assert_eq!(s.get("AUD").unwrap().raw_score, 0.0);
        assert_eq!(s.get("CAD").unwrap().raw_score, 0.0);
        // equal raw scores always share a normalized score
        assert_eq!(
            s.get("AUD").unwrap().normalized_score,
            s.get("CAD").unwrap().normalized_score
        );
        assert!(approx(s.get("AUD").unwrap().normalized_score, 5.0));
    }

    #[test]
    fn flat_scores_sit_at_midpoint() {
        let trades = vec![make_directional("EURUSD", Direction::Unknown, 10.0)];
        let s = CurrencyStrength::from_trades(&trades);
        assert!(s.scores.iter().all(|c| c.normalized_score == 5.0));
    }

    #[test]
    fn unparseable_pairs_are_skipped() {
        let trades = vec![make_directional("XYZAB", Direction::Long, 100.0)];
        assert!(CurrencyStrength::from_trades(&trades).is_empty());
    }

    #[test]
    fn top_truncates_without_rescoring() {
        let trades = vec![
            make_directional("EURUSD", Direction::Long, 100.0),
            make_directional("GBPJPY", Direction::Long, 60.0),
            make_directional("AUDNZD", Direction::Short, 20.0),
            make_directional("CADCHF", Direction::Long, -30.0),
            make_directional("BTCUSDT", Direction::Long, 10.0),
        ];
        let s = CurrencyStrength::from_trades(&trades);
        assert_eq!(s.scores.len(), 10);
        let top = s.top(DEFAULT_TOP_N);
        assert_eq!(top.len(), 8);
        assert_eq!(top[0], s.scores[0]);
        assert_eq!(s.top(50).len(), 10);
        assert!(s
            .scores
            .windows(2)
            .all(|w| w[0].normalized_score >= w[1].normalized_score));
    }
}
