//! Spike detector over per-channel daily series.
//!
//! A record is a spike when its value exceeds `spike_threshold` times the
//! nearest prior non-excluded day within the lookback window. Walking
//! backward past exclusions keeps one genuine anomaly from poisoning the
//! baseline for the days that follow it. Detected spikes are auto-excluded
//! (unless running dry) through the caller-supplied store; manually excluded
//! records are never entered and never restored by the bulk restore.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config;
use crate::models::{Anomaly, Channel, DailyMetric, ExclusionMetadata, ExclusionReason};
use crate::services::MetricsStore;

/// Detection tunables. `Default` reads the environment-backed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Ratio above which a jump counts as a spike (strictly greater-than).
    pub spike_threshold: f64,
    /// How many records to walk backward when searching for a baseline.
    pub lookback_days: usize,
    /// Report anomalies without writing exclusions.
    pub dry_run: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            spike_threshold: config::get_spike_threshold(),
            lookback_days: config::get_lookback_days(),
            dry_run: config::get_dry_run(),
        }
    }
}

/// Detection outcome for one channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelDetection {
    pub channel: Channel,
    pub anomalies: Vec<Anomaly>,
    /// Records scanned.
    pub checked: usize,
    /// Records newly auto-excluded this pass.
    pub excluded: usize,
    /// Exclusion writes that failed (logged, never fatal).
    pub write_failures: usize,
}

/// Aggregate outcome of a batch run across all active channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDetection {
    pub channels: Vec<ChannelDetection>,
    pub total_checked: usize,
    pub total_anomalies: usize,
    pub total_excluded: usize,
    pub total_write_failures: usize,
    /// Channels whose scan errored and was skipped.
    pub failed_channels: usize,
    pub configuration: DetectorConfig,
}

/// Outcome of a bulk restore of auto-excluded records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreResult {
    pub restored: usize,
    pub failures: usize,
    /// The records the restore targeted.
    pub metrics: Vec<DailyMetric>,
}

pub struct AnomalyDetector {
    store: Arc<dyn MetricsStore + Send + Sync>,
    config: DetectorConfig,
}

impl AnomalyDetector {
    pub fn new(store: Arc<dyn MetricsStore + Send + Sync>, config: DetectorConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Scan one channel's series in chronological order.
    ///
    /// Records already excluded are skipped outright: auto-excluded ones so
    /// a re-run never re-applies the same exclusion, manual ones because the
    /// detector must not touch them. A missing or zero-valued baseline skips
    /// the record without error.
    pub async fn detect_for_channel(
        &self,
        channel: &Channel,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<ChannelDetection, Box<dyn std::error::Error + Send + Sync>> {
        let mut metrics = self
            .store
            .fetch_series(channel.id, start_date, end_date)
            .await?;
        metrics.sort_by_key(|m| m.date);

        // Exclusion state as seen by this pass; successful writes made
        // earlier in the pass count toward later baseline searches.
        let mut excluded_state: Vec<bool> = metrics.iter().map(|m| m.is_excluded).collect();

        let mut anomalies = Vec::new();
        let mut excluded = 0usize;
        let mut write_failures = 0usize;

        for i in 0..metrics.len() {
            if excluded_state[i] {
                continue;
            }

            let Some(baseline_idx) = self.find_baseline(&metrics, &excluded_state, i) else {
                continue;
            };

            let current = &metrics[i];
            let baseline = &metrics[baseline_idx];
            let ratio = current.peak_views / baseline.peak_views;

            if ratio <= self.config.spike_threshold {
                continue;
            }

            let anomaly = Anomaly {
                record_id: current.id,
                channel_id: channel.id,
                date: current.date,
                views: current.peak_views,
                previous_date: baseline.date,
                previous_views: baseline.peak_views,
                ratio,
                percentage_increase: (ratio - 1.0) * 100.0,
            };
            anomalies.push(anomaly);

            if self.config.dry_run {
                continue;
            }

            let metadata = ExclusionMetadata {
                previous_day: baseline.date,
                previous_views: baseline.peak_views,
                spike_threshold: self.config.spike_threshold,
                detection_time: Utc::now(),
            };
            match self
                .store
                .set_exclusion(
                    current.id,
                    ExclusionReason::AutoAnomalyDetection,
                    Some(metadata),
                )
                .await
            {
                Ok(()) => {
                    excluded_state[i] = true;
                    excluded += 1;
                    info!(
                        channel = %channel.handle,
                        date = %current.date,
                        views = current.peak_views,
                        ratio = ratio,
                        "Auto-excluded spike ({:.1}% above {} baseline)",
                        (ratio - 1.0) * 100.0,
                        baseline.date
                    );
                }
                Err(e) => {
                    write_failures += 1;
                    error!(
                        channel = %channel.handle,
                        record_id = current.id,
                        error = %e,
                        "Failed to write exclusion"
                    );
                }
            }
        }

        Ok(ChannelDetection {
            channel: channel.clone(),
            checked: metrics.len(),
            excluded,
            write_failures,
            anomalies,
        })
    }

    /// Nearest prior non-excluded record with a positive value, at most
    /// `lookback_days` steps back.
    fn find_baseline(
        &self,
        metrics: &[DailyMetric],
        excluded_state: &[bool],
        index: usize,
    ) -> Option<usize> {
        let lo = index.saturating_sub(self.config.lookback_days);
        (lo..index)
            .rev()
            .find(|&j| !excluded_state[j] && metrics[j].peak_views > 0.0)
    }

    /// Run detection across every active channel.
    ///
    /// A channel whose scan errors is logged and counted; the batch carries
    /// on.
    pub async fn detect_for_all_channels(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<BatchDetection, Box<dyn std::error::Error + Send + Sync>> {
        let channels = self.store.active_channels().await?;

        if channels.is_empty() {
            warn!("No active channels found");
        } else {
            info!(
                channel_count = channels.len(),
                spike_threshold = self.config.spike_threshold,
                lookback_days = self.config.lookback_days,
                dry_run = self.config.dry_run,
                "Starting anomaly detection for {} channels",
                channels.len()
            );
        }

        let mut results = Vec::new();
        let mut failed_channels = 0usize;

        for channel in &channels {
            match self.detect_for_channel(channel, start_date, end_date).await {
                Ok(result) => {
                    if !result.anomalies.is_empty() {
                        info!(
                            channel = %channel.handle,
                            anomalies = result.anomalies.len(),
                            excluded = result.excluded,
                            "Found {} anomalies ({} excluded)",
                            result.anomalies.len(),
                            result.excluded
                        );
                    }
                    results.push(result);
                }
                Err(e) => {
                    failed_channels += 1;
                    error!(channel = %channel.handle, error = %e, "Channel scan failed");
                }
            }
        }

        let batch = BatchDetection {
            total_checked: results.iter().map(|r| r.checked).sum(),
            total_anomalies: results.iter().map(|r| r.anomalies.len()).sum(),
            total_excluded: results.iter().map(|r| r.excluded).sum(),
            total_write_failures: results.iter().map(|r| r.write_failures).sum(),
            failed_channels,
            channels: results,
            configuration: self.config.clone(),
        };

        info!(
            checked = batch.total_checked,
            anomalies = batch.total_anomalies,
            excluded = batch.total_excluded,
            failed_channels = batch.failed_channels,
            "Detection completed"
        );

        Ok(batch)
    }

    /// Restore auto-excluded records back to included.
    ///
    /// Selects only records with reason `AutoAnomalyDetection`; manual
    /// exclusions are never touched. Filters are optional and independent:
    /// a channel id, a start date, an end date, or any combination.
    pub async fn restore_auto_excluded(
        &self,
        channel_id: Option<i64>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<RestoreResult, Box<dyn std::error::Error + Send + Sync>> {
        let auto_excluded = self.store.find_auto_excluded().await?;

        let targets: Vec<DailyMetric> = auto_excluded
            .into_iter()
            .filter(|m| channel_id.map_or(true, |c| m.channel_id == c))
            .filter(|m| start_date.map_or(true, |s| m.date >= s))
            .filter(|m| end_date.map_or(true, |e| m.date <= e))
            .collect();

        let mut restored = 0usize;
        let mut failures = 0usize;

        for metric in &targets {
            match self.store.clear_exclusion(metric.id).await {
                Ok(()) => {
                    restored += 1;
                    info!(
                        channel_id = metric.channel_id,
                        date = %metric.date,
                        "Restored auto-excluded record"
                    );
                }
                Err(e) => {
                    failures += 1;
                    error!(
                        record_id = metric.id,
                        error = %e,
                        "Failed to restore record"
                    );
                }
            }
        }

        Ok(RestoreResult {
            restored,
            failures,
            metrics: targets,
        })
    }
}
