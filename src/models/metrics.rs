//! Raw metric records, channels, and exclusion state.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One sample of a daily series: a calendar day and a non-negative value.
///
/// Within one series dates are unique; the caller supplies at most one value
/// per day per entity. Gaps (missing dates) mean "no sample", never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

impl DatedValue {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Why a record is excluded from indicator computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Excluded by an operator, outside the engine.
    Manual,
    /// Excluded by the spike detector.
    AutoAnomalyDetection,
}

/// Detection context persisted alongside an auto-exclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusionMetadata {
    pub previous_day: NaiveDate,
    pub previous_views: f64,
    pub spike_threshold: f64,
    pub detection_time: DateTime<Utc>,
}

/// A stored per-channel daily metric with its exclusion state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetric {
    pub id: i64,
    pub channel_id: i64,
    pub date: NaiveDate,
    /// Peak concurrent viewership observed that day.
    pub peak_views: f64,
    pub is_excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_reason: Option<ExclusionReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_metadata: Option<ExclusionMetadata>,
}

impl DailyMetric {
    /// A fresh, non-excluded record.
    pub fn new(id: i64, channel_id: i64, date: NaiveDate, peak_views: f64) -> Self {
        Self {
            id,
            channel_id,
            date,
            peak_views,
            is_excluded: false,
            exclusion_reason: None,
            exclusion_metadata: None,
        }
    }

    pub fn as_dated_value(&self) -> DatedValue {
        DatedValue::new(self.date, self.peak_views)
    }
}

/// A tracked channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub handle: String,
    pub name: String,
    pub is_active: bool,
}

impl Channel {
    pub fn new(id: i64, handle: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            handle: handle.into(),
            name: name.into(),
            is_active: true,
        }
    }
}

/// A detected single-day spike, not yet (or never, in dry-run) persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub record_id: i64,
    pub channel_id: i64,
    pub date: NaiveDate,
    pub views: f64,
    pub previous_date: NaiveDate,
    pub previous_views: f64,
    pub ratio: f64,
    pub percentage_increase: f64,
}
