//! Storage boundary for metric reads and exclusion writes.
//!
//! The engine never talks to a database directly; the anomaly detector and
//! the orchestrator consume this trait. Production backs it with the
//! persistence service; tests and the demo binary use
//! [`InMemoryMetricsStore`].

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::models::{Channel, DailyMetric, ExclusionMetadata, ExclusionReason};

/// Read/write access to per-channel daily metrics and their exclusion state.
///
/// `set_exclusion` and `clear_exclusion` must be safely retryable: the
/// detector may be re-run over ranges it has already processed.
#[async_trait]
pub trait MetricsStore {
    /// Fetch one channel's records, date-ordered, optionally bounded.
    async fn fetch_series(
        &self,
        channel_id: i64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<DailyMetric>, Box<dyn std::error::Error + Send + Sync>>;

    /// Mark a record excluded with a reason and optional detection context.
    async fn set_exclusion(
        &self,
        record_id: i64,
        reason: ExclusionReason,
        metadata: Option<ExclusionMetadata>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Clear a record's exclusion state entirely.
    async fn clear_exclusion(
        &self,
        record_id: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// All records currently excluded by the detector (never manual ones).
    async fn find_auto_excluded(
        &self,
    ) -> Result<Vec<DailyMetric>, Box<dyn std::error::Error + Send + Sync>>;

    /// Channels eligible for batch detection.
    async fn active_channels(
        &self,
    ) -> Result<Vec<Channel>, Box<dyn std::error::Error + Send + Sync>>;
}

/// In-memory `MetricsStore` used by tests and the demo binary.
#[derive(Default)]
pub struct InMemoryMetricsStore {
    channels: RwLock<Vec<Channel>>,
    metrics: RwLock<HashMap<i64, DailyMetric>>,
    next_id: AtomicI64,
}

impl InMemoryMetricsStore {
    pub fn new() -> Self {
        Self {
            channels: RwLock::new(Vec::new()),
            metrics: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn add_channel(&self, channel: Channel) {
        self.channels.write().await.push(channel);
    }

    /// Insert a metric, assigning it a fresh record id.
    pub async fn add_metric(&self, channel_id: i64, date: NaiveDate, peak_views: f64) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let metric = DailyMetric::new(id, channel_id, date, peak_views);
        self.metrics.write().await.insert(id, metric);
        id
    }

    pub async fn get_metric(&self, record_id: i64) -> Option<DailyMetric> {
        self.metrics.read().await.get(&record_id).cloned()
    }
}

#[async_trait]
impl MetricsStore for InMemoryMetricsStore {
    async fn fetch_series(
        &self,
        channel_id: i64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<DailyMetric>, Box<dyn std::error::Error + Send + Sync>> {
        let metrics = self.metrics.read().await;
        let mut series: Vec<DailyMetric> = metrics
            .values()
            .filter(|m| m.channel_id == channel_id)
            .filter(|m| start_date.map_or(true, |s| m.date >= s))
            .filter(|m| end_date.map_or(true, |e| m.date <= e))
            .cloned()
            .collect();
        series.sort_by_key(|m| m.date);
        Ok(series)
    }

    async fn set_exclusion(
        &self,
        record_id: i64,
        reason: ExclusionReason,
        metadata: Option<ExclusionMetadata>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut metrics = self.metrics.write().await;
        let metric = metrics
            .get_mut(&record_id)
            .ok_or_else(|| format!("Record not found: {}", record_id))?;
        metric.is_excluded = true;
        metric.exclusion_reason = Some(reason);
        metric.exclusion_metadata = metadata;
        Ok(())
    }

    async fn clear_exclusion(
        &self,
        record_id: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut metrics = self.metrics.write().await;
        let metric = metrics
            .get_mut(&record_id)
            .ok_or_else(|| format!("Record not found: {}", record_id))?;
        metric.is_excluded = false;
        metric.exclusion_reason = None;
        metric.exclusion_metadata = None;
        Ok(())
    }

    async fn find_auto_excluded(
        &self,
    ) -> Result<Vec<DailyMetric>, Box<dyn std::error::Error + Send + Sync>> {
        let metrics = self.metrics.read().await;
        let mut excluded: Vec<DailyMetric> = metrics
            .values()
            .filter(|m| {
                m.is_excluded
                    && m.exclusion_reason == Some(ExclusionReason::AutoAnomalyDetection)
            })
            .cloned()
            .collect();
        excluded.sort_by_key(|m| (m.channel_id, m.date));
        Ok(excluded)
    }

    async fn active_channels(
        &self,
    ) -> Result<Vec<Channel>, Box<dyn std::error::Error + Send + Sync>> {
        let channels = self.channels.read().await;
        Ok(channels.iter().filter(|c| c.is_active).cloned().collect())
    }
}
