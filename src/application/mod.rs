// Ensemble aggregation and weight management
pub mod ensemble;

// Prediction orchestration
pub mod predictor;
