//! Shared helpers used across the indicator modules.

pub mod math;
