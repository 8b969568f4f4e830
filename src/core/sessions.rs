use serde::{Deserialize, Serialize};
use std::fmt;

/// Forex session a trade was opened in, judged from the hour of its logged time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Session {
    Sydney,
    Tokyo,
    TokyoLondonOverlap,
    London,
    LondonNyOverlap,
    NewYork,
}

impl Session {
    pub fn from_hour(hour: u32) -> Session {
        match hour {
            0..=4 => Session::Tokyo,
            5..=7 => Session::TokyoLondonOverlap,
            8..=11 => Session::London,
            12 => Session::LondonNyOverlap,
            13..=16 => Session::NewYork,
            22..=23 => Session::Sydney,
            // 17:00-21:59 has no dedicated session and is attributed to New York
            _ => Session::NewYork,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Sydney => "Sydney Session",
            Session::Tokyo => "Tokyo Session",
            Session::TokyoLondonOverlap => "Tokyo/London Overlap",
            Session::London => "London Session",
            Session::LondonNyOverlap => "London/NY Overlap",
            Session::NewYork => "New York Session",
        }
    }

    pub fn is_overlap(&self) -> bool {
        matches!(
            self,
            Session::TokyoLondonOverlap | Session::LondonNyOverlap
        )
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
