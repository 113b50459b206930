use crate::domain::category::Category;
use crate::domain::features::FeatureBundle;
use crate::domain::monitoring::MonitoringReport;
use crate::domain::prediction::PredictionRecord;
use crate::domain::scoring::CategoryScore;
use anyhow::Result;
use async_trait::async_trait;

/// A per-category predictive model.
///
/// "No data" is not a failure: implementations should return an
/// unavailable `CategoryScore` when they cannot produce a score. An `Err`
/// is a hard integration failure and fails the whole prediction request.
#[async_trait]
pub trait CategoryScorer: Send + Sync {
    fn category(&self) -> Category;

    async fn score(&self, features: &FeatureBundle) -> Result<CategoryScore>;
}

/// Quality/drift evaluation invoked after a record is built.
///
/// Failures here never invalidate the record; the orchestrator logs and
/// moves on.
#[async_trait]
pub trait PredictionMonitor: Send + Sync {
    async fn evaluate(
        &self,
        record: &PredictionRecord,
        features: &FeatureBundle,
    ) -> Result<MonitoringReport>;
}

/// Persistence collaborator, called by the orchestrator's caller
#[async_trait]
pub trait PredictionRepository: Send + Sync {
    async fn save(&self, record: &PredictionRecord) -> Result<()>;
}
