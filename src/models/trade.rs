use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::JournalError;
use crate::models::{Direction, Mindset, PlanAdherence, TradeResult};

pub const DEFAULT_TIME: &str = "00:00";

/// One journaled trade, as exported by the journal's persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub pair: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub direction: Direction,
    pub pnl: f64,
    pub result: TradeResult,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lots: f64,
    #[serde(default)]
    pub mindset: Mindset,
    #[serde(default)]
    pub plan_adherence: PlanAdherence,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exit_comment: Option<String>,
}

impl Trade {
    /// Raw time string, "00:00" when absent or blank.
    pub fn time_str(&self) -> &str {
        match self.time.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_TIME,
        }
    }

    /// Time of day, falling back to midnight for malformed strings.
    pub fn time_of_day(&self) -> NaiveTime {
        match parse_clock(self.time_str()) {
            Ok(t) => t,
            Err(e) => {
                warn!("Trade {} ({}): {}; bucketing at 00:00", self.id, self.pair, e);
                NaiveTime::MIN
            }
        }
    }

    pub fn hour(&self) -> u32 {
        self.time_of_day().hour()
    }

    /// Chronological ordering key: calendar day, then time of day.
    pub fn sort_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time_of_day())
    }

    pub fn is_win(&self) -> bool {
        self.result == TradeResult::Win
    }

    pub fn is_loss(&self) -> bool {
        self.result == TradeResult::Loss
    }
}

/// Exports write `null` for fields the user never filled in.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parses "HH:MM" or "HH:MM:SS".
pub fn parse_clock(s: &str) -> Result<NaiveTime, JournalError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| JournalError::InvalidTime(s.to_string()))
}

/// Returns references to the trades sorted ascending by (date, time). The sort is
/// stable, so trades sharing a timestamp keep their input order.
pub fn sorted_chronologically<'a, I>(trades: I) -> Vec<&'a Trade>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut keyed: Vec<_> = trades.into_iter().map(|t| (t.sort_key(), t)).collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, t)| t).collect()
}

pub fn load_trades_from_str(json: &str) -> Result<Vec<Trade>, JournalError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_trades(path: impl AsRef<Path>) -> Result<Vec<Trade>, JournalError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| JournalError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_trades_from_str(&content)
}
