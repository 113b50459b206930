// Data-quality and drift monitoring hook
pub mod data_quality;
pub mod drift_detector;
pub mod service;

pub use drift_detector::DriftDetector;
pub use service::{MonitoringConfig, MonitoringService};
