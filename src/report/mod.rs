pub mod summary;

pub use summary::{OutcomeDistribution, OutcomeShare, PerformanceSummary};
