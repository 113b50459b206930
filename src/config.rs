use crate::domain::category::Category;
use crate::infrastructure::monitoring::MonitoringConfig;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;

/// Runtime configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial ensemble weights committed to the registry at startup
    pub initial_weights: HashMap<Category, f64>,
    pub drift_window: usize,
    pub drift_z_threshold: f64,
    pub min_completeness: f64,
    pub observability_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let weight_technical = env::var("WEIGHT_TECHNICAL")
            .unwrap_or_else(|_| "0.4".to_string())
            .parse::<f64>()
            .context("Failed to parse WEIGHT_TECHNICAL")?;

        let weight_sentiment = env::var("WEIGHT_SENTIMENT")
            .unwrap_or_else(|_| "0.3".to_string())
            .parse::<f64>()
            .context("Failed to parse WEIGHT_SENTIMENT")?;

        let weight_fundamental = env::var("WEIGHT_FUNDAMENTAL")
            .unwrap_or_else(|_| "0.2".to_string())
            .parse::<f64>()
            .context("Failed to parse WEIGHT_FUNDAMENTAL")?;

        let weight_onchain = env::var("WEIGHT_ONCHAIN")
            .unwrap_or_else(|_| "0.1".to_string())
            .parse::<f64>()
            .context("Failed to parse WEIGHT_ONCHAIN")?;

        let drift_window = env::var("DRIFT_WINDOW")
            .unwrap_or_else(|_| "64".to_string())
            .parse::<usize>()
            .context("Failed to parse DRIFT_WINDOW")?;

        let drift_z_threshold = env::var("DRIFT_Z_THRESHOLD")
            .unwrap_or_else(|_| "3.0".to_string())
            .parse::<f64>()
            .context("Failed to parse DRIFT_Z_THRESHOLD")?;

        let min_completeness = env::var("MIN_COMPLETENESS")
            .unwrap_or_else(|_| "0.75".to_string())
            .parse::<f64>()
            .context("Failed to parse MIN_COMPLETENESS")?;

        let observability_enabled = env::var("OBSERVABILITY_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .context("Failed to parse OBSERVABILITY_ENABLED")?;

        Ok(Self {
            initial_weights: HashMap::from([
                (Category::Technical, weight_technical),
                (Category::Sentiment, weight_sentiment),
                (Category::Fundamental, weight_fundamental),
                (Category::Onchain, weight_onchain),
            ]),
            drift_window,
            drift_z_threshold,
            min_completeness,
            observability_enabled,
        })
    }

    pub fn monitoring(&self) -> MonitoringConfig {
        MonitoringConfig {
            drift_window: self.drift_window,
            drift_z_threshold: self.drift_z_threshold,
            min_completeness: self.min_completeness,
        }
    }
}
