//! Service boundaries consumed by the engine.

pub mod metrics_store;

pub use metrics_store::{InMemoryMetricsStore, MetricsStore};
