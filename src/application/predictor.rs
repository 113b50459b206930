use crate::application::ensemble::{WeightRegistry, aggregate};
use crate::domain::category::Category;
use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureBundle;
use crate::domain::ports::{CategoryScorer, PredictionMonitor};
use crate::domain::prediction::PredictionRecord;
use crate::domain::scoring::CategoryScore;
use crate::infrastructure::observability::Metrics;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Orchestrates one prediction: fan out to the scorers, snapshot the
/// weights, aggregate, classify, then attach monitoring diagnostics.
///
/// The service itself is stateless between calls; the only shared state
/// it touches is the weight registry, and only to read.
pub struct PredictionService {
    scorers: Vec<Arc<dyn CategoryScorer>>,
    registry: Arc<WeightRegistry>,
    monitor: Option<Arc<dyn PredictionMonitor>>,
    metrics: Option<Metrics>,
}

impl PredictionService {
    pub fn new(scorers: Vec<Arc<dyn CategoryScorer>>, registry: Arc<WeightRegistry>) -> Self {
        Self {
            scorers,
            registry,
            monitor: None,
            metrics: None,
        }
    }

    pub fn with_monitor(mut self, monitor: Arc<dyn PredictionMonitor>) -> Self {
        self.monitor = Some(monitor);
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn registry(&self) -> &Arc<WeightRegistry> {
        &self.registry
    }

    /// Run one prediction over the bundle.
    ///
    /// A scorer returning an unavailable score is absorbed into the
    /// confidence; a scorer returning `Err` fails the request. The weight
    /// registry is read exactly once so the whole call sees one snapshot.
    pub async fn predict(
        &self,
        features: &FeatureBundle,
    ) -> Result<PredictionRecord, PredictionError> {
        let started = Instant::now();

        let mut scores = Vec::with_capacity(self.scorers.len());
        for scorer in &self.scorers {
            let category = scorer.category();
            match scorer.score(features).await {
                Ok(score) => {
                    if !score.available {
                        debug!("{} scorer reported no data for {}", category, features.ticker);
                    }
                    scores.push(score);
                }
                Err(source) => {
                    if let Some(metrics) = &self.metrics {
                        metrics
                            .scorer_failures_total
                            .with_label_values(&[category.as_str()])
                            .inc();
                    }
                    error!(
                        "{} scorer failed for {}, aborting prediction: {:#}",
                        category, features.ticker, source
                    );
                    return Err(PredictionError::ScoringFailure { category, source });
                }
            }
        }

        let weights = self.registry.get_weights();
        let mut record = Self::compose(&features.ticker, scores, &weights);

        if let Some(monitor) = &self.monitor {
            match monitor.evaluate(&record, features).await {
                Ok(report) => {
                    for alert in &report.alerts {
                        warn!(
                            "[{}] {} alert for {}: {}",
                            alert.severity, alert.metric, features.ticker, alert.message
                        );
                    }
                    record = record.with_diagnostics(report);
                }
                // The record stands on its own; diagnostics are best-effort.
                Err(e) => warn!("Monitoring hook failed for {}: {:#}", features.ticker, e),
            }
        }

        if let Some(metrics) = &self.metrics {
            metrics.observe_prediction(&record, started.elapsed());
        }

        info!(
            "Prediction for {}: score={:.4}, risk={}, confidence={:.4}",
            record.ticker, record.composite_score, record.risk_tier, record.confidence
        );
        Ok(record)
    }

    /// Pure composition step: aggregate, classify, package the breakdown
    /// verbatim (unavailable entries included). Identical inputs produce
    /// identical scores; only id and timestamp differ between calls.
    pub fn compose(
        ticker: &str,
        scores: Vec<CategoryScore>,
        weights: &HashMap<Category, f64>,
    ) -> PredictionRecord {
        let output = aggregate(&scores, weights);
        PredictionRecord::new(ticker, output.composite_score, output.confidence, scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ensemble::default_weights;

    #[test]
    fn test_compose_is_idempotent_modulo_identity() {
        let scores = vec![
            CategoryScore::available(Category::Technical, 0.8, 0.9),
            CategoryScore::unavailable(Category::Sentiment),
        ];
        let weights = default_weights();

        let first = PredictionService::compose("BTC", scores.clone(), &weights);
        let second = PredictionService::compose("BTC", scores, &weights);

        assert_eq!(first.composite_score, second.composite_score);
        assert_eq!(first.risk_tier, second.risk_tier);
        assert_eq!(first.confidence, second.confidence);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_compose_keeps_unavailable_entries_in_breakdown() {
        let scores = vec![
            CategoryScore::available(Category::Technical, 0.8, 0.9),
            CategoryScore::unavailable(Category::Onchain),
        ];

        let record = PredictionService::compose("ETH", scores, &default_weights());
        assert_eq!(record.category_breakdown.len(), 2);
        assert!(!record.category_breakdown[&Category::Onchain].available);
    }
}
