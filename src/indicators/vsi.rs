//! VSI (Viewership Sentiment Index) percentile indicator.
//!
//! A rank-based percentile of each day's MA7 against the channel's own full
//! MA7 history. Deliberately relative rather than absolute, so the score is
//! meaningful regardless of a channel's scale. Because the distribution is
//! the entire supplied history, a fixed day's score shifts retroactively as
//! history accumulates; callers must treat that as expected.

use crate::models::{Ma7Point, VsiLabel, VsiPoint};

/// Compute the percentile-rank VSI for each MA7 point.
///
/// `vsi = round(100 * |{v <= ma7}| / |V|)` where `V` is the multiset of all
/// non-`None` MA7 values in the input. The maximum of `V` ranks exactly 100
/// (duplicate maxima all do); a unique minimum ranks `round(100 / |V|)`, not
/// 0. Points without an MA7 value, or an empty `V`, yield `None`.
pub fn calculate_vsi(points: &[Ma7Point]) -> Vec<VsiPoint> {
    let history: Vec<f64> = points.iter().filter_map(|p| p.ma7).collect();

    points
        .iter()
        .map(|point| {
            let vsi = match (point.ma7, history.len()) {
                (Some(ma7), n) if n > 0 => {
                    let rank = history.iter().filter(|&&v| v <= ma7).count();
                    Some((100.0 * rank as f64 / n as f64).round() as u32)
                }
                _ => None,
            };
            VsiPoint {
                date: point.date,
                vsi,
                vsi_label: vsi.map(classify_vsi),
            }
        })
        .collect()
}

/// Classify a VSI value into its sentiment bucket.
pub fn classify_vsi(vsi: u32) -> VsiLabel {
    match vsi {
        0..=10 => VsiLabel::ExtremeDisinterest,
        11..=30 => VsiLabel::VeryLowInterest,
        31..=70 => VsiLabel::NormalRange,
        71..=90 => VsiLabel::HighInterest,
        _ => VsiLabel::ExtremeHype,
    }
}
