use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a journaled trade. Brokers and manual entries disagree on wording, so
/// both Long/Short and Buy/Sell are kept; anything else lands in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    Long,
    Short,
    Buy,
    Sell,
    #[default]
    Unknown,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "Long",
            Direction::Short => "Short",
            Direction::Buy => "Buy",
            Direction::Sell => "Sell",
            Direction::Unknown => "Unknown",
        }
    }

    pub fn from_str_loose(s: &str) -> Direction {
        match s.trim().to_lowercase().as_str() {
            "long" => Direction::Long,
            "short" => Direction::Short,
            "buy" => Direction::Buy,
            "sell" => Direction::Sell,
            _ => Direction::Unknown,
        }
    }

    /// +1 for the long side, -1 for the short side, None when the side is unknown.
    pub fn sign(&self) -> Option<f64> {
        match self {
            Direction::Long | Direction::Buy => Some(1.0),
            Direction::Short | Direction::Sell => Some(-1.0),
            Direction::Unknown => None,
        }
    }
}

impl From<String> for Direction {
    fn from(s: String) -> Self {
        Direction::from_str_loose(&s)
    }
}

impl From<Direction> for String {
    fn from(d: Direction) -> Self {
        d.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeResult {
    Win,
    Loss,
    #[serde(rename = "BE", alias = "Breakeven")]
    Breakeven,
    Pending,
}

impl TradeResult {
    pub const ALL: [TradeResult; 4] = [
        TradeResult::Win,
        TradeResult::Loss,
        TradeResult::Breakeven,
        TradeResult::Pending,
    ];
}

impl fmt::Display for TradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeResult::Win => write!(f, "Win"),
            TradeResult::Loss => write!(f, "Loss"),
            TradeResult::Breakeven => write!(f, "BE"),
            TradeResult::Pending => write!(f, "Pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!(Direction::from_str_loose(" LONG "), Direction::Long);
        assert_eq!(Direction::from_str_loose("sell"), Direction::Sell);
        assert_eq!(Direction::from_str_loose("hedge"), Direction::Unknown);
    }

    #[test]
    fn direction_sign() {
        assert_eq!(Direction::Buy.sign(), Some(1.0));
        assert_eq!(Direction::Short.sign(), Some(-1.0));
        assert_eq!(Direction::Unknown.sign(), None);
    }

    #[test]
    fn result_uses_journal_labels() {
        let r: TradeResult = serde_json::from_str("\"BE\"").unwrap();
        assert_eq!(r, TradeResult::Breakeven);
        assert_eq!(serde_json::to_string(&TradeResult::Breakeven).unwrap(), "\"BE\"");
    }
}
