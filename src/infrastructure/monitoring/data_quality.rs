use crate::domain::features::{FeatureBundle, FeatureValue};
use crate::domain::prediction::PredictionRecord;
use std::collections::HashMap;

/// Compute data-quality metrics for a prediction's input bundle.
///
/// Metric keys are part of the report contract consumed by dashboards:
/// `completeness`, `feature_count`, `invalid_value_fraction`,
/// `unavailable_categories`, `prediction_confidence`.
pub fn check_data_quality(
    features: &FeatureBundle,
    record: &PredictionRecord,
) -> HashMap<String, f64> {
    let mut feature_count = 0usize;
    let mut invalid_count = 0usize;

    for category in features.categories() {
        if let Some(set) = features.features(category) {
            for value in set.values() {
                feature_count += 1;
                if let FeatureValue::Number(n) = value
                    && !n.is_finite()
                {
                    invalid_count += 1;
                }
            }
        }
    }

    let invalid_fraction = if feature_count > 0 {
        invalid_count as f64 / feature_count as f64
    } else {
        0.0
    };

    let unavailable = record
        .category_breakdown
        .values()
        .filter(|score| !score.available)
        .count();

    HashMap::from([
        ("completeness".to_string(), features.completeness()),
        ("feature_count".to_string(), feature_count as f64),
        ("invalid_value_fraction".to_string(), invalid_fraction),
        ("unavailable_categories".to_string(), unavailable as f64),
        ("prediction_confidence".to_string(), record.confidence),
    ])
}
