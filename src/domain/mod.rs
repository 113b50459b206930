// Analysis categories
pub mod category;

// Domain-specific error types
pub mod errors;

// Per-request feature snapshots
pub mod features;

// Monitoring diagnostics
pub mod monitoring;

// Port interfaces
pub mod ports;

// Prediction results and risk tiers
pub mod prediction;

// Per-model score values
pub mod scoring;
