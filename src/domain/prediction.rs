use crate::domain::category::Category;
use crate::domain::monitoring::MonitoringReport;
use crate::domain::scoring::CategoryScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Discrete risk classification derived from the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Extreme,
}

impl RiskTier {
    /// Classify a composite score into a tier.
    ///
    /// Total over all of f64: out-of-range input is clamped into [0,1]
    /// first, each tier's lower bound is inclusive.
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };
        if score >= 0.8 {
            Self::Low
        } else if score >= 0.6 {
            Self::Medium
        } else if score >= 0.4 {
            Self::High
        } else {
            Self::Extreme
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Extreme => write!(f, "EXTREME"),
        }
    }
}

/// Immutable result of one prediction call.
///
/// The breakdown keeps unavailable entries verbatim so callers can see
/// which models sat out of the composite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: Uuid,
    pub ticker: String,
    pub timestamp: DateTime<Utc>,
    pub composite_score: f64,
    pub risk_tier: RiskTier,
    pub category_breakdown: HashMap<Category, CategoryScore>,
    pub confidence: f64,
    pub diagnostics: Option<MonitoringReport>,
}

impl PredictionRecord {
    pub fn new(
        ticker: impl Into<String>,
        composite_score: f64,
        confidence: f64,
        breakdown: impl IntoIterator<Item = CategoryScore>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticker: ticker.into(),
            timestamp: Utc::now(),
            composite_score,
            risk_tier: RiskTier::from_score(composite_score),
            category_breakdown: breakdown
                .into_iter()
                .map(|score| (score.category, score))
                .collect(),
            confidence,
            diagnostics: None,
        }
    }

    pub fn with_diagnostics(mut self, report: MonitoringReport) -> Self {
        self.diagnostics = Some(report);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskTier::from_score(0.8), RiskTier::Low);
        assert_eq!(RiskTier::from_score(0.79999), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(0.6), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(0.4), RiskTier::High);
        assert_eq!(RiskTier::from_score(0.39999), RiskTier::Extreme);
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Extreme);
        assert_eq!(RiskTier::from_score(1.0), RiskTier::Low);
    }

    #[test]
    fn test_out_of_range_scores_clamped_before_classification() {
        assert_eq!(RiskTier::from_score(1.05), RiskTier::Low);
        assert_eq!(RiskTier::from_score(-0.3), RiskTier::Extreme);
        assert_eq!(RiskTier::from_score(f64::NAN), RiskTier::Extreme);
    }

    #[test]
    fn test_record_derives_tier_from_score() {
        let record = PredictionRecord::new(
            "BTC",
            0.72,
            0.5,
            [CategoryScore::available(Category::Technical, 0.72, 0.9)],
        );
        assert_eq!(record.risk_tier, RiskTier::Medium);
        assert!(record.category_breakdown.contains_key(&Category::Technical));
        assert!(record.diagnostics.is_none());
    }
}
