//! Per-channel indicator composition.

pub mod orchestrator;

pub use orchestrator::{BatchAnalysis, ChannelAnalysis, IndicatorOrchestrator};
