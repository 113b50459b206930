use crate::domain::category::Category;
use serde::{Deserialize, Serialize};

/// Output of a single per-category model.
///
/// `value` is conventionally in [0,1] but models are not trusted to stay
/// in range; the aggregator clamps. When `available` is false the model
/// produced no usable score and `value`/`confidence` carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub value: f64,
    pub confidence: f64,
    pub available: bool,
}

impl CategoryScore {
    pub fn available(category: Category, value: f64, confidence: f64) -> Self {
        Self {
            category,
            value,
            confidence,
            available: true,
        }
    }

    pub fn unavailable(category: Category) -> Self {
        Self {
            category,
            value: 0.0,
            confidence: 0.0,
            available: false,
        }
    }
}
