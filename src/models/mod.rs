pub mod direction;
pub mod profile;
pub mod psychology;
pub mod trade;

pub use direction::*;
pub use profile::Profile;
pub use psychology::{Mindset, PlanAdherence};
pub use trade::{load_trades, load_trades_from_str, sorted_chronologically, Trade};
