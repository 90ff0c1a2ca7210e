//! Environment-based configuration accessors.
//!
//! Defaults mirror the production deployment: a 10x single-day jump trips
//! the spike detector, baselines are searched up to 7 days back, and RSI
//! uses the standard 14-sample Wilder period.

use std::env;

/// Default ratio above which a single-day jump is treated as a spike (10x = 900%).
pub const DEFAULT_SPIKE_THRESHOLD: f64 = 10.0;

/// Default number of days to walk backward when searching for a baseline.
pub const DEFAULT_LOOKBACK_DAYS: usize = 7;

/// Default Wilder smoothing period for the momentum oscillator.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Deployment environment name (`ENVIRONMENT`, defaults to `development`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// Spike ratio threshold (`ANOMALY_SPIKE_THRESHOLD`).
pub fn get_spike_threshold() -> f64 {
    env::var("ANOMALY_SPIKE_THRESHOLD")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_SPIKE_THRESHOLD)
}

/// Baseline lookback window in days (`ANOMALY_LOOKBACK_DAYS`).
pub fn get_lookback_days() -> usize {
    env::var("ANOMALY_LOOKBACK_DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LOOKBACK_DAYS)
}

/// Whether detection runs report-only, without writing exclusions (`ANOMALY_DRY_RUN`).
pub fn get_dry_run() -> bool {
    env::var("ANOMALY_DRY_RUN")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

/// RSI period (`RSI_PERIOD`).
pub fn get_rsi_period() -> usize {
    env::var("RSI_PERIOD")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_RSI_PERIOD)
}
