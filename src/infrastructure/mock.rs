use crate::domain::category::Category;
use crate::domain::features::FeatureBundle;
use crate::domain::monitoring::MonitoringReport;
use crate::domain::ports::{CategoryScorer, PredictionMonitor, PredictionRepository};
use crate::domain::prediction::PredictionRecord;
use crate::domain::scoring::CategoryScore;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Scorer that always returns the same score, regardless of features.
///
/// Stands in for the real model-backed scorers in tests and in the
/// headless runner.
pub struct FixedScorer {
    category: Category,
    value: f64,
    confidence: f64,
}

impl FixedScorer {
    pub fn new(category: Category, value: f64, confidence: f64) -> Self {
        Self {
            category,
            value,
            confidence,
        }
    }
}

#[async_trait]
impl CategoryScorer for FixedScorer {
    fn category(&self) -> Category {
        self.category
    }

    async fn score(&self, _features: &FeatureBundle) -> Result<CategoryScore> {
        Ok(CategoryScore::available(
            self.category,
            self.value,
            self.confidence,
        ))
    }
}

/// Scorer that always reports "no data"
pub struct UnavailableScorer {
    category: Category,
}

impl UnavailableScorer {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

#[async_trait]
impl CategoryScorer for UnavailableScorer {
    fn category(&self) -> Category {
        self.category
    }

    async fn score(&self, _features: &FeatureBundle) -> Result<CategoryScore> {
        Ok(CategoryScore::unavailable(self.category))
    }
}

/// Scorer that always fails hard, for exercising the fatal path
pub struct FailingScorer {
    category: Category,
    message: String,
}

impl FailingScorer {
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

#[async_trait]
impl CategoryScorer for FailingScorer {
    fn category(&self) -> Category {
        self.category
    }

    async fn score(&self, _features: &FeatureBundle) -> Result<CategoryScore> {
        anyhow::bail!("{}", self.message)
    }
}

/// Monitor that returns an empty report
pub struct NullMonitor;

#[async_trait]
impl PredictionMonitor for NullMonitor {
    async fn evaluate(
        &self,
        _record: &PredictionRecord,
        _features: &FeatureBundle,
    ) -> Result<MonitoringReport> {
        Ok(MonitoringReport::empty())
    }
}

/// Monitor that always fails, for exercising the absorbed-failure path
pub struct FailingMonitor;

#[async_trait]
impl PredictionMonitor for FailingMonitor {
    async fn evaluate(
        &self,
        _record: &PredictionRecord,
        _features: &FeatureBundle,
    ) -> Result<MonitoringReport> {
        anyhow::bail!("monitoring backend unreachable")
    }
}

/// In-memory record store for tests and the headless runner
#[derive(Clone, Default)]
pub struct InMemoryPredictionRepository {
    records: Arc<RwLock<Vec<PredictionRecord>>>,
}

impl InMemoryPredictionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<PredictionRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl PredictionRepository for InMemoryPredictionRepository {
    async fn save(&self, record: &PredictionRecord) -> Result<()> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}
