use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::{Direction, Mindset, PlanAdherence, Trade, TradeResult};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A trade with only the fields the engine reads; everything else defaulted.
pub fn make_trade(pair: &str, day: &str, pnl: f64, result: TradeResult) -> Trade {
    Trade {
        id: format!("{}-{}-{}", pair, day, pnl),
        pair: pair.to_string(),
        date: date(day),
        time: None,
        direction: Direction::Unknown,
        pnl,
        result,
        lots: 1.0,
        mindset: Mindset::default(),
        plan_adherence: PlanAdherence::default(),
        tags: BTreeSet::new(),
        notes: None,
        exit_comment: None,
    }
}

pub fn make_trade_at(pair: &str, day: &str, time: &str, pnl: f64, result: TradeResult) -> Trade {
    Trade {
        time: Some(time.to_string()),
        ..make_trade(pair, day, pnl, result)
    }
}

pub fn make_directional(pair: &str, direction: Direction, pnl: f64) -> Trade {
    Trade {
        direction,
        ..make_trade(pair, "2024-01-15", pnl, result_for(pnl))
    }
}

pub fn make_tagged(tags: &[&str], pnl: f64, result: TradeResult) -> Trade {
    Trade {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_trade("EURUSD", "2024-01-15", pnl, result)
    }
}

/// Chronological trades on consecutive days from (pnl, result) tuples.
pub fn make_sequence(data: &[(f64, TradeResult)]) -> Vec<Trade> {
    let base = date("2024-01-01");
    data.iter()
        .enumerate()
        .map(|(i, &(pnl, result))| Trade {
            date: base + chrono::Duration::days(i as i64),
            ..make_trade("EURUSD", "2024-01-01", pnl, result)
        })
        .collect()
}

pub fn result_for(pnl: f64) -> TradeResult {
    if pnl > 0.0 {
        TradeResult::Win
    } else if pnl < 0.0 {
        TradeResult::Loss
    } else {
        TradeResult::Breakeven
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
