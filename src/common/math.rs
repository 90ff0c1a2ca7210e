//! Basic numeric helpers shared by the indicator calculations.

/// Arithmetic mean of a slice. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Round to 2 decimal places (indicator display precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
