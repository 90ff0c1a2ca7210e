//! Viewtrix indicator and anomaly-detection engine
//!
//! Turns per-channel daily peak-viewership series (and the external market
//! series tracked alongside them) into sentiment and momentum indicators:
//! a 7-day moving average, a percentile-rank sentiment index (VSI), a
//! Wilder-smoothed momentum oscillator (RSI), single-day spike detection
//! with auto-exclusion, and half-range trend summaries.
//!
//! The engine owns no storage: reads and exclusion writes go through the
//! [`services::metrics_store::MetricsStore`] trait supplied by the caller.

pub mod analysis;
pub mod anomaly;
pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
