//! Single-day spike detection and exclusion management.

pub mod detector;

pub use detector::{
    AnomalyDetector, BatchDetection, ChannelDetection, DetectorConfig, RestoreResult,
};
