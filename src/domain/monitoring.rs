use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A single threshold breach raised by the monitoring hook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub metric: String,
    pub message: String,
}

impl Alert {
    pub fn new(
        severity: AlertSeverity,
        metric: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            metric: metric.into(),
            message: message.into(),
        }
    }
}

/// Quality/drift diagnostics attached to a prediction record.
///
/// The field names inside `quality` and `drift` are owned by the
/// monitoring implementation; the core treats them as opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringReport {
    pub timestamp: DateTime<Utc>,
    pub quality: HashMap<String, f64>,
    pub drift: HashMap<String, f64>,
    pub alerts: Vec<Alert>,
}

impl MonitoringReport {
    pub fn new(
        quality: HashMap<String, f64>,
        drift: HashMap<String, f64>,
        alerts: Vec<Alert>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            quality,
            drift,
            alerts,
        }
    }

    pub fn empty() -> Self {
        Self::new(HashMap::new(), HashMap::new(), Vec::new())
    }

    pub fn has_critical_alerts(&self) -> bool {
        self.alerts
            .iter()
            .any(|alert| alert.severity == AlertSeverity::Critical)
    }
}
