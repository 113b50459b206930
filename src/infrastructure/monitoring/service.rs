use crate::domain::features::FeatureBundle;
use crate::domain::monitoring::{Alert, AlertSeverity, MonitoringReport};
use crate::domain::ports::PredictionMonitor;
use crate::domain::prediction::PredictionRecord;
use crate::infrastructure::monitoring::data_quality::check_data_quality;
use crate::infrastructure::monitoring::drift_detector::DriftDetector;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    /// Rolling window size for drift baselines
    pub drift_window: usize,
    /// |z| above this raises a Warning, above 2x a Critical
    pub drift_z_threshold: f64,
    /// Bundle completeness below this raises a Warning
    pub min_completeness: f64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            drift_window: 64,
            drift_z_threshold: 3.0,
            min_completeness: 0.75,
        }
    }
}

/// Production monitoring hook: data quality plus feature drift, with a
/// threshold policy that turns breaches into alerts.
pub struct MonitoringService {
    config: MonitoringConfig,
    detector: DriftDetector,
}

impl MonitoringService {
    pub fn new(config: MonitoringConfig) -> Self {
        let detector = DriftDetector::new(config.drift_window);
        Self { config, detector }
    }

    fn generate_alerts(
        &self,
        quality: &HashMap<String, f64>,
        drift: &HashMap<String, f64>,
    ) -> Vec<Alert> {
        let mut alerts = Vec::new();

        if let Some(completeness) = quality.get("completeness")
            && *completeness < self.config.min_completeness
        {
            alerts.push(Alert::new(
                AlertSeverity::Warning,
                "completeness",
                format!(
                    "Feature bundle completeness {:.2} below minimum {:.2}",
                    completeness, self.config.min_completeness
                ),
            ));
        }

        for (feature, z_score) in drift {
            let magnitude = z_score.abs();
            if magnitude <= self.config.drift_z_threshold {
                continue;
            }
            let severity = if magnitude > 2.0 * self.config.drift_z_threshold {
                AlertSeverity::Critical
            } else {
                AlertSeverity::Warning
            };
            alerts.push(Alert::new(
                severity,
                feature.clone(),
                format!("Feature drift detected: z-score {:.2}", z_score),
            ));
        }

        alerts
    }
}

impl Default for MonitoringService {
    fn default() -> Self {
        Self::new(MonitoringConfig::default())
    }
}

#[async_trait]
impl PredictionMonitor for MonitoringService {
    async fn evaluate(
        &self,
        record: &PredictionRecord,
        features: &FeatureBundle,
    ) -> Result<MonitoringReport> {
        let quality = check_data_quality(features, record);
        let drift = self.detector.observe(features);
        let alerts = self.generate_alerts(&quality, &drift);

        Ok(MonitoringReport::new(quality, drift, alerts))
    }
}
