use crate::domain::category::Category;
use crate::domain::errors::WeightError;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};
use tracing::info;

/// Committed weights must sum to 1.0 within this tolerance
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Default signal mix applied at startup
pub fn default_weights() -> HashMap<Category, f64> {
    HashMap::from([
        (Category::Technical, 0.4),
        (Category::Sentiment, 0.3),
        (Category::Fundamental, 0.2),
        (Category::Onchain, 0.1),
    ])
}

/// Shared category→weight mapping used by every aggregation call.
///
/// Updates are all-or-nothing: the candidate is validated in full, then
/// swapped in under the write guard in a single assignment, so readers
/// only ever observe fully-committed mappings.
pub struct WeightRegistry {
    weights: RwLock<HashMap<Category, f64>>,
}

impl WeightRegistry {
    pub fn new() -> Self {
        Self {
            weights: RwLock::new(default_weights()),
        }
    }

    /// Start from a custom mapping, e.g. weights loaded from config
    pub fn with_weights(candidate: HashMap<Category, f64>) -> Result<Self, WeightError> {
        Self::validate(&candidate)?;
        Ok(Self {
            weights: RwLock::new(candidate),
        })
    }

    /// Defensive copy of the committed mapping
    pub fn get_weights(&self) -> HashMap<Category, f64> {
        // A panicked writer never commits a half-built mapping (the swap is
        // one assignment after validation), so the poisoned state is safe to
        // read.
        self.weights
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update_weights(&self, candidate: HashMap<Category, f64>) -> Result<(), WeightError> {
        Self::validate(&candidate)?;

        let mut weights = self
            .weights
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *weights = candidate;
        drop(weights);

        info!("Ensemble weights updated: {:?}", self.get_weights());
        Ok(())
    }

    /// Update path for string-keyed candidates, as submitted by the API
    /// layer. Unknown category names are rejected before validation.
    pub fn update_named_weights(
        &self,
        candidate: HashMap<String, f64>,
    ) -> Result<(), WeightError> {
        let mut typed = HashMap::with_capacity(candidate.len());
        for (name, weight) in candidate {
            let category =
                Category::from_str(&name).map_err(|_| WeightError::UnknownCategory {
                    name: name.clone(),
                })?;
            typed.insert(category, weight);
        }
        self.update_weights(typed)
    }

    fn validate(candidate: &HashMap<Category, f64>) -> Result<(), WeightError> {
        for (category, weight) in candidate {
            if *weight < 0.0 {
                return Err(WeightError::NegativeWeight {
                    category: *category,
                    weight: *weight,
                });
            }
        }

        let sum: f64 = candidate.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightError::NotNormalized {
                sum,
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }

        Ok(())
    }
}

impl Default for WeightRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_normalized() {
        let registry = WeightRegistry::new();
        let sum: f64 = registry.get_weights().values().sum();
        assert!((sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
    }

    #[test]
    fn test_update_replaces_mapping() {
        let registry = WeightRegistry::new();
        let candidate = HashMap::from([
            (Category::Technical, 0.5),
            (Category::Sentiment, 0.5),
        ]);

        registry.update_weights(candidate.clone()).unwrap();
        assert_eq!(registry.get_weights(), candidate);
    }

    #[test]
    fn test_rejected_update_leaves_state_unchanged() {
        let registry = WeightRegistry::new();
        let before = registry.get_weights();

        let candidate = HashMap::from([
            (Category::Technical, 0.3),
            (Category::Sentiment, 0.2),
        ]);
        let result = registry.update_weights(candidate);

        assert!(matches!(result, Err(WeightError::NotNormalized { .. })));
        assert_eq!(registry.get_weights(), before);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let registry = WeightRegistry::new();
        let candidate = HashMap::from([
            (Category::Technical, 1.2),
            (Category::Sentiment, -0.2),
        ]);

        let result = registry.update_weights(candidate);
        assert!(matches!(
            result,
            Err(WeightError::NegativeWeight {
                category: Category::Sentiment,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_category_rejected_on_named_path() {
        let registry = WeightRegistry::new();
        let before = registry.get_weights();

        let candidate = HashMap::from([
            ("technical".to_string(), 0.5),
            ("astrology".to_string(), 0.5),
        ]);
        let result = registry.update_named_weights(candidate);

        match result {
            Err(WeightError::UnknownCategory { name }) => assert_eq!(name, "astrology"),
            other => panic!("Expected UnknownCategory, got {:?}", other.err()),
        }
        assert_eq!(registry.get_weights(), before);
    }

    #[test]
    fn test_named_path_accepts_valid_mapping() {
        let registry = WeightRegistry::new();
        let candidate = HashMap::from([
            ("technical".to_string(), 0.6),
            ("onchain".to_string(), 0.4),
        ]);

        registry.update_named_weights(candidate).unwrap();
        let weights = registry.get_weights();
        assert_eq!(weights[&Category::Technical], 0.6);
        assert_eq!(weights[&Category::Onchain], 0.4);
        assert!(!weights.contains_key(&Category::Sentiment));
    }

    #[test]
    fn test_sum_within_tolerance_accepted() {
        let registry = WeightRegistry::new();
        let candidate = HashMap::from([
            (Category::Technical, 0.505),
            (Category::Sentiment, 0.5),
        ]);

        assert!(registry.update_weights(candidate).is_ok());
    }
}
