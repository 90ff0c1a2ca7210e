//! Composes the indicators per channel and merges them onto raw records.
//!
//! Each consumer makes its exclusion choice explicitly:
//! - MA7 and VSI are exclusion-aware: they run over non-excluded records, so
//!   restored or newly excluded spikes change them on the next run;
//! - RSI is exclusion-unaware: it runs over the full published series;
//! - the trend summary is exclusion-aware, so a single excluded spike cannot
//!   dominate a half-range mean.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

use crate::indicators::{
    calculate_ma7, calculate_rsi_with_dates, calculate_vsi, classify_rsi, summarize_trend,
};
use crate::models::{
    Channel, DailyMetric, DatedValue, IndicatorPoint, TrendSummary, VsiLabel,
};
use crate::services::MetricsStore;

/// Full indicator view of one channel over a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelAnalysis {
    pub channel: Channel,
    /// One point per raw record, date-ordered, indicators merged on.
    pub points: Vec<IndicatorPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendSummary>,
    /// Currently excluded records in range, with reason and metadata.
    pub exclusions: Vec<DailyMetric>,
}

/// Analysis across all active channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalysis {
    pub channels: Vec<ChannelAnalysis>,
    /// Channels whose analysis errored and was skipped.
    pub failed_channels: usize,
}

pub struct IndicatorOrchestrator {
    store: Arc<dyn MetricsStore + Send + Sync>,
    rsi_period: usize,
}

impl IndicatorOrchestrator {
    pub fn new(store: Arc<dyn MetricsStore + Send + Sync>, rsi_period: usize) -> Self {
        Self { store, rsi_period }
    }

    /// Compute MA7, VSI and RSI for one channel and merge them onto the raw
    /// records, together with a trend summary and the active exclusions.
    pub async fn analyze_channel(
        &self,
        channel: &Channel,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<ChannelAnalysis, Box<dyn std::error::Error + Send + Sync>> {
        let mut metrics = self
            .store
            .fetch_series(channel.id, start_date, end_date)
            .await?;
        metrics.sort_by_key(|m| m.date);

        let included: Vec<DatedValue> = metrics
            .iter()
            .filter(|m| !m.is_excluded)
            .map(|m| m.as_dated_value())
            .collect();
        let full: Vec<DatedValue> = metrics.iter().map(|m| m.as_dated_value()).collect();

        let ma7_points = calculate_ma7(&included);
        let vsi_points = calculate_vsi(&ma7_points);
        let rsi_points = calculate_rsi_with_dates(&full, self.rsi_period);

        let ma7_by_date: HashMap<NaiveDate, f64> = ma7_points
            .iter()
            .filter_map(|p| p.ma7.map(|v| (p.date, v)))
            .collect();
        let vsi_by_date: HashMap<NaiveDate, (u32, VsiLabel)> = vsi_points
            .iter()
            .filter_map(|p| p.vsi.zip(p.vsi_label).map(|v| (p.date, v)))
            .collect();
        let rsi_by_date: HashMap<NaiveDate, f64> =
            rsi_points.iter().map(|p| (p.date, p.rsi)).collect();

        let points: Vec<IndicatorPoint> = metrics
            .iter()
            .map(|m| {
                let vsi = vsi_by_date.get(&m.date).copied();
                let rsi = rsi_by_date.get(&m.date).copied();
                IndicatorPoint {
                    date: m.date,
                    value: m.peak_views,
                    is_excluded: m.is_excluded,
                    exclusion_reason: m.exclusion_reason,
                    ma7: ma7_by_date.get(&m.date).copied(),
                    vsi: vsi.map(|(v, _)| v),
                    vsi_label: vsi.map(|(_, l)| l),
                    rsi,
                    rsi_label: rsi.map(classify_rsi),
                }
            })
            .collect();

        let trend = summarize_trend(&included);
        let exclusions: Vec<DailyMetric> =
            metrics.into_iter().filter(|m| m.is_excluded).collect();

        Ok(ChannelAnalysis {
            channel: channel.clone(),
            points,
            trend,
            exclusions,
        })
    }

    /// Analyze every active channel; a failing channel is logged and
    /// skipped, never aborting the batch.
    pub async fn analyze_all_channels(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<BatchAnalysis, Box<dyn std::error::Error + Send + Sync>> {
        let channels = self.store.active_channels().await?;

        let mut results = Vec::new();
        let mut failed_channels = 0usize;

        for channel in &channels {
            match self.analyze_channel(channel, start_date, end_date).await {
                Ok(analysis) => results.push(analysis),
                Err(e) => {
                    failed_channels += 1;
                    error!(channel = %channel.handle, error = %e, "Channel analysis failed");
                }
            }
        }

        info!(
            channels = results.len(),
            failed_channels, "Analyzed {} channels", results.len()
        );

        Ok(BatchAnalysis {
            channels: results,
            failed_channels,
        })
    }
}
