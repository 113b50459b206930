//! Prometheus metrics definitions for Coinsight
//!
//! All metrics use the `coinsight_` prefix. Push-based: `gather()` renders
//! the text exposition format, no HTTP server is run here.

use crate::domain::prediction::PredictionRecord;
use prometheus::{
    CounterVec, GaugeVec, Histogram, HistogramOpts, Opts, Registry, TextEncoder,
};
use std::sync::Arc;
use std::time::Duration;

/// Prometheus metrics for the prediction pipeline
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Total predictions served, by risk tier
    pub predictions_total: CounterVec,
    /// Time spent producing a prediction
    pub prediction_latency_seconds: Histogram,
    /// Latest composite score per ticker
    pub composite_score: GaugeVec,
    /// Latest prediction confidence per ticker
    pub prediction_confidence: GaugeVec,
    /// Feature drift z-score per feature
    pub feature_drift_score: GaugeVec,
    /// Hard scorer failures by category
    pub scorer_failures_total: CounterVec,
}

impl Metrics {
    /// Create a new Metrics instance with all collectors registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new("coinsight_predictions_total", "Total predictions served"),
            &["risk"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let prediction_latency_seconds = Histogram::with_opts(HistogramOpts::new(
            "coinsight_prediction_latency_seconds",
            "Time spent producing a prediction",
        ))?;
        registry.register(Box::new(prediction_latency_seconds.clone()))?;

        let composite_score = GaugeVec::new(
            Opts::new(
                "coinsight_composite_score",
                "Latest composite investment score per ticker",
            ),
            &["ticker"],
        )?;
        registry.register(Box::new(composite_score.clone()))?;

        let prediction_confidence = GaugeVec::new(
            Opts::new(
                "coinsight_prediction_confidence",
                "Latest prediction confidence per ticker",
            ),
            &["ticker"],
        )?;
        registry.register(Box::new(prediction_confidence.clone()))?;

        let feature_drift_score = GaugeVec::new(
            Opts::new(
                "coinsight_feature_drift_score",
                "Feature drift z-score per feature",
            ),
            &["feature"],
        )?;
        registry.register(Box::new(feature_drift_score.clone()))?;

        let scorer_failures_total = CounterVec::new(
            Opts::new(
                "coinsight_scorer_failures_total",
                "Hard scorer failures by category",
            ),
            &["category"],
        )?;
        registry.register(Box::new(scorer_failures_total.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            prediction_latency_seconds,
            composite_score,
            prediction_confidence,
            feature_drift_score,
            scorer_failures_total,
        })
    }

    /// Record a completed prediction
    pub fn observe_prediction(&self, record: &PredictionRecord, latency: Duration) {
        let tier = record.risk_tier.to_string();
        self.predictions_total
            .with_label_values(&[tier.as_str()])
            .inc();
        self.prediction_latency_seconds
            .observe(latency.as_secs_f64());
        self.composite_score
            .with_label_values(&[record.ticker.as_str()])
            .set(record.composite_score);
        self.prediction_confidence
            .with_label_values(&[record.ticker.as_str()])
            .set(record.confidence);

        if let Some(report) = &record.diagnostics {
            for (feature, z_score) in &report.drift {
                self.feature_drift_score
                    .with_label_values(&[feature.as_str()])
                    .set(*z_score);
            }
        }
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn gather(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        Ok(encoder.encode_to_string(&self.registry.gather())?)
    }
}
