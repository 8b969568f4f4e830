pub mod currency_strength;
pub mod equity;
pub mod pair;
pub mod sessions;
pub mod streaks;

pub use currency_strength::{CurrencyScore, CurrencyStrength};
pub use equity::{DrawdownPoint, EquityTracker};
pub use pair::{normalize_pair, pair_key, NormalizedPair};
pub use sessions::Session;
pub use streaks::StreakState;
