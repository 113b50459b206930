use crate::domain::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single named feature value. Most features are numeric (prices,
/// ratios, counts); a few sources emit labels (e.g. trend direction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Text(String),
}

impl FeatureValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) => Some(*n),
            FeatureValue::Text(_) => None,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

pub type FeatureSet = HashMap<String, FeatureValue>;

/// Per-request snapshot of everything the scorers get to see.
///
/// Built once per prediction request and never mutated afterwards; the
/// category keys are the fixed `Category` enum, so an unknown category
/// cannot enter a bundle past the string-parsing boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureBundle {
    pub ticker: String,
    pub timestamp: DateTime<Utc>,
    categories: HashMap<Category, FeatureSet>,
}

impl FeatureBundle {
    pub fn new(ticker: impl Into<String>, categories: HashMap<Category, FeatureSet>) -> Self {
        Self {
            ticker: ticker.into(),
            timestamp: Utc::now(),
            categories,
        }
    }

    /// Bundle with no feature data at all. Scorers are expected to report
    /// themselves unavailable rather than fail on it.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self::new(ticker, HashMap::new())
    }

    pub fn features(&self, category: Category) -> Option<&FeatureSet> {
        self.categories.get(&category)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Fraction of the fixed category set present in this bundle, in [0,1]
    pub fn completeness(&self) -> f64 {
        self.categories.len() as f64 / Category::ALL.len() as f64
    }
}
