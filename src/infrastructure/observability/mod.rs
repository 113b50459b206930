//! Push-based observability for Coinsight
//!
//! Metrics are collected in a local Prometheus registry and rendered on
//! demand in the text exposition format. No HTTP server, no incoming
//! requests; the (out-of-scope) API layer decides how to expose them.

pub mod metrics;

pub use metrics::Metrics;
