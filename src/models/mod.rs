//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod metrics;

pub use indicators::{
    IndicatorPoint, Ma7Point, RsiLabel, RsiPoint, TrendDirection, TrendSummary, VsiLabel,
    VsiPoint,
};
pub use metrics::{
    Anomaly, Channel, DailyMetric, DatedValue, ExclusionMetadata, ExclusionReason,
};
