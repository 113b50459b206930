use crate::domain::category::Category;
use thiserror::Error;

/// Errors rejected at the weight registry boundary.
///
/// All variants are recoverable: a failed update leaves the committed
/// mapping untouched.
#[derive(Debug, Error)]
pub enum WeightError {
    #[error("Negative weight for {category}: {weight}")]
    NegativeWeight { category: Category, weight: f64 },

    #[error("Weights must sum to 1.0 (±{tolerance}), got {sum:.4}")]
    NotNormalized { sum: f64, tolerance: f64 },

    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },
}

/// Errors that fail a prediction request outright
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Scorer for {category} failed: {source}")]
    ScoringFailure {
        category: Category,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_error_formatting() {
        let error = WeightError::NotNormalized {
            sum: 0.5,
            tolerance: 0.01,
        };
        let msg = error.to_string();
        assert!(msg.contains("0.5000"));
        assert!(msg.contains("0.01"));

        let error = WeightError::NegativeWeight {
            category: Category::Onchain,
            weight: -0.2,
        };
        assert!(error.to_string().contains("onchain"));
    }

    #[test]
    fn test_scoring_failure_preserves_cause() {
        let error = PredictionError::ScoringFailure {
            category: Category::Technical,
            source: anyhow::anyhow!("model file missing"),
        };
        let msg = error.to_string();
        assert!(msg.contains("technical"));
        assert!(msg.contains("model file missing"));
    }
}
