// Ensemble aggregation core
pub mod aggregator;
pub mod weight_registry;

pub use aggregator::{EnsembleOutput, NEUTRAL_SCORE, aggregate};
pub use weight_registry::{WEIGHT_SUM_TOLERANCE, WeightRegistry, default_weights};
