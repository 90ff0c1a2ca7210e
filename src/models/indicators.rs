//! Computed indicator outputs and their classification labels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::metrics::ExclusionReason;

/// Moving-average output for one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ma7Point {
    pub date: NaiveDate,
    pub value: f64,
    /// Trailing 7-sample mean, `None` for the first 6 samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma7: Option<f64>,
}

/// Percentile sentiment output for one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VsiPoint {
    pub date: NaiveDate,
    /// Percentile rank 0..=100, `None` where no MA7 exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsi: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsi_label: Option<VsiLabel>,
}

/// Momentum oscillator output for one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub rsi: f64,
}

/// VSI classification buckets (closed, ordered, non-overlapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VsiLabel {
    ExtremeDisinterest,
    VeryLowInterest,
    NormalRange,
    HighInterest,
    ExtremeHype,
}

impl VsiLabel {
    /// Human-facing label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            VsiLabel::ExtremeDisinterest => "Extreme Disinterest",
            VsiLabel::VeryLowInterest => "Very Low Interest",
            VsiLabel::NormalRange => "Normal Range",
            VsiLabel::HighInterest => "High Interest",
            VsiLabel::ExtremeHype => "Extreme Hype",
        }
    }
}

/// RSI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiLabel {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiLabel {
    /// Human-facing label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            RsiLabel::Overbought => "Heated/Euphoric",
            RsiLabel::Oversold => "Cooling/Fear",
            RsiLabel::Neutral => "Neutral",
        }
    }
}

/// All computed indicators merged onto one raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub is_excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_reason: Option<ExclusionReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma7: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsi: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vsi_label: Option<VsiLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_label: Option<RsiLabel>,
}

/// Direction of a half-range trend comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Mean comparison between the two halves of a date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub direction: TrendDirection,
    /// Absolute percentage change between the half means, 2 decimals.
    pub percentage: f64,
    pub first_period_avg: f64,
    pub second_period_avg: f64,
}
