pub mod aggregation;
pub mod calendar;
pub mod clusters;
pub mod comparison;
pub mod goals;
pub mod performance;

pub use aggregation::{aggregate_by, aggregate_with_keys, Aggregate};
pub use calendar::{daily_pnl, month_stats, MonthStats};
pub use clusters::{cluster_by_tag, StrategyAggregate};
pub use comparison::{
    compare, CohortReport, CohortSpec, CohortStats, Comparison, DateRange, Period, Trend,
    TrendDirection,
};
pub use goals::{Goal, GoalMetric, GoalProgress, GoalRule, Milestone};
pub use performance::{breakdown, monthly_performance, Dimension, MonthlyPerformance};
