//! Pure indicator calculations over daily series.

pub mod moving_average;
pub mod rsi;
pub mod trend;
pub mod vsi;

pub use moving_average::{calculate_ma7, MA7_WINDOW};
pub use rsi::{calculate_rsi, calculate_rsi_default, calculate_rsi_with_dates, classify_rsi};
pub use trend::summarize_trend;
pub use vsi::{calculate_vsi, classify_vsi};
