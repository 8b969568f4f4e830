use serde::{Deserialize, Serialize};
use std::fmt;

/// Trader mindset recorded with each trade. Unrecognized labels collapse to
/// `Neutral`, which is also the default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(from = "Option<String>", into = "String")]
pub enum Mindset {
    #[default]
    Neutral,
    Confident,
    Hesitant,
    Anxious,
    Fomo,
}

impl Mindset {
    pub const ALL: [Mindset; 5] = [
        Mindset::Neutral,
        Mindset::Confident,
        Mindset::Hesitant,
        Mindset::Anxious,
        Mindset::Fomo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mindset::Neutral => "Neutral",
            Mindset::Confident => "Confident",
            Mindset::Hesitant => "Hesitant",
            Mindset::Anxious => "Anxious",
            Mindset::Fomo => "FOMO",
        }
    }

    pub fn from_label(label: &str) -> Mindset {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(label))
            .unwrap_or_default()
    }
}

impl fmt::Display for Mindset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Option<String>> for Mindset {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(Mindset::from_label).unwrap_or_default()
    }
}

impl From<Mindset> for String {
    fn from(m: Mindset) -> Self {
        m.as_str().to_string()
    }
}

/// How closely the trade followed the written plan. `NoPlan` is the catch-all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(from = "Option<String>", into = "String")]
pub enum PlanAdherence {
    FollowedExactly,
    MinorDeviation,
    MajorDeviation,
    #[default]
    NoPlan,
}

impl PlanAdherence {
    pub const ALL: [PlanAdherence; 4] = [
        PlanAdherence::FollowedExactly,
        PlanAdherence::MinorDeviation,
        PlanAdherence::MajorDeviation,
        PlanAdherence::NoPlan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanAdherence::FollowedExactly => "Followed Exactly",
            PlanAdherence::MinorDeviation => "Minor Deviation",
            PlanAdherence::MajorDeviation => "Major Deviation",
            PlanAdherence::NoPlan => "No Plan",
        }
    }

    pub fn from_label(label: &str) -> PlanAdherence {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(label))
            .unwrap_or_default()
    }
}

impl fmt::Display for PlanAdherence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Option<String>> for PlanAdherence {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(PlanAdherence::from_label).unwrap_or_default()
    }
}

impl From<PlanAdherence> for String {
    fn from(p: PlanAdherence) -> Self {
        p.as_str().to_string()
    }
}
