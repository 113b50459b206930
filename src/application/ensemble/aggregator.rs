use crate::domain::category::Category;
use crate::domain::scoring::CategoryScore;
use std::collections::HashMap;
use tracing::warn;

/// Composite score returned when no usable signal is present
pub const NEUTRAL_SCORE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleOutput {
    pub composite_score: f64,
    pub confidence: f64,
}

impl EnsembleOutput {
    /// Neutral default: total data unavailability must not fail the request
    pub fn neutral() -> Self {
        Self {
            composite_score: NEUTRAL_SCORE,
            confidence: 0.0,
        }
    }
}

/// Combine the available per-category scores into one composite score and
/// confidence.
///
/// The composite is a weight renormalization over the available
/// categories: Σ(value·w) / Σ(w), so a missing model shifts influence to
/// the models that did report instead of dragging the score toward the
/// neutral default. Categories absent from `weights` contribute weight 0
/// and drop out of the denominator; transient model unavailability never
/// requires a weight update.
///
/// Confidence is the mean of the available confidences scaled by the
/// fraction of the configured signal mix actually present, so a composite
/// assembled from a minority of the mix reports low confidence even when
/// each present signal is individually confident.
pub fn aggregate(
    scores: &[CategoryScore],
    weights: &HashMap<Category, f64>,
) -> EnsembleOutput {
    let available: Vec<&CategoryScore> = scores.iter().filter(|s| s.available).collect();
    if available.is_empty() {
        return EnsembleOutput::neutral();
    }

    let mut weighted_sum = 0.0;
    let mut present_weight = 0.0;
    let mut confidence_sum = 0.0;

    for score in &available {
        let value = clamp_unit(score.value, score.category, "value");
        confidence_sum += clamp_unit(score.confidence, score.category, "confidence");

        if let Some(weight) = weights.get(&score.category) {
            weighted_sum += value * weight;
            present_weight += weight;
        }
    }

    if present_weight <= 0.0 {
        // Every available category carries zero weight: no usable signal.
        return EnsembleOutput::neutral();
    }

    let total_weight: f64 = weights.values().sum();
    let weight_share = if total_weight > 0.0 {
        present_weight / total_weight
    } else {
        0.0
    };

    let composite_score = weighted_sum / present_weight;
    let mean_confidence = confidence_sum / available.len() as f64;

    EnsembleOutput {
        composite_score: composite_score.clamp(0.0, 1.0),
        confidence: (mean_confidence * weight_share).clamp(0.0, 1.0),
    }
}

/// Malformed model outputs are clamped, not rejected: aggregation stays
/// total and the condition is surfaced through the logs.
fn clamp_unit(raw: f64, category: Category, field: &str) -> f64 {
    if raw.is_nan() {
        warn!("Malformed {} from {} scorer: NaN, using 0.0", field, category);
        return 0.0;
    }
    if !(0.0..=1.0).contains(&raw) {
        warn!(
            "Malformed {} from {} scorer: {} clamped into [0,1]",
            field, category, raw
        );
    }
    raw.clamp(0.0, 1.0)
}
