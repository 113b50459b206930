use crate::domain::features::{FeatureBundle, FeatureValue};
use statrs::statistics::{Data, Distribution};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

/// Rolling per-feature drift detection.
///
/// Keeps a bounded window of recent values for every numeric feature and
/// scores each new observation as a z-score against that baseline. Keys
/// are `category.feature` so the same feature name in two categories
/// tracks independently.
pub struct DriftDetector {
    window: usize,
    history: Mutex<HashMap<String, VecDeque<f64>>>,
}

impl DriftDetector {
    /// Minimum baseline samples before a z-score is reported
    const MIN_BASELINE: usize = 5;

    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(Self::MIN_BASELINE),
            history: Mutex::new(HashMap::new()),
        }
    }

    /// Score the bundle's numeric features against the rolling baseline,
    /// then fold them into it. Features without enough history score 0.
    pub fn observe(&self, features: &FeatureBundle) -> HashMap<String, f64> {
        let mut history = self
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut z_scores = HashMap::new();

        for category in features.categories() {
            let Some(set) = features.features(category) else {
                continue;
            };
            for (name, value) in set {
                let FeatureValue::Number(value) = value else {
                    continue;
                };
                if !value.is_finite() {
                    continue;
                }

                let key = format!("{}.{}", category, name);
                let baseline = history.entry(key.clone()).or_default();

                z_scores.insert(key, Self::z_score(baseline, *value));

                baseline.push_back(*value);
                if baseline.len() > self.window {
                    baseline.pop_front();
                }
            }
        }

        z_scores
    }

    fn z_score(baseline: &VecDeque<f64>, value: f64) -> f64 {
        if baseline.len() < Self::MIN_BASELINE {
            return 0.0;
        }

        let data = Data::new(baseline.iter().copied().collect::<Vec<f64>>());
        let (Some(mean), Some(std_dev)) = (data.mean(), data.std_dev()) else {
            return 0.0;
        };
        if std_dev == 0.0 {
            return 0.0;
        }

        (value - mean) / std_dev
    }
}
