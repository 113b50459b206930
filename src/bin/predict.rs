//! Coinsight Predict - Headless one-shot prediction runner
//!
//! Runs the full ensemble pipeline once with fixed per-category scores
//! and prints the resulting prediction record as JSON. Stands in for the
//! API layer during development and smoke testing.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- BTC --technical 0.8 --sentiment 0.6
//! ```

use anyhow::Result;
use clap::Parser;
use coinsight::application::ensemble::WeightRegistry;
use coinsight::application::predictor::PredictionService;
use coinsight::config::Config;
use coinsight::domain::category::Category;
use coinsight::domain::features::FeatureBundle;
use coinsight::domain::ports::{CategoryScorer, PredictionRepository};
use coinsight::infrastructure::mock::{FixedScorer, InMemoryPredictionRepository, UnavailableScorer};
use coinsight::infrastructure::monitoring::MonitoringService;
use coinsight::infrastructure::observability::Metrics;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "predict", about = "Run one ensemble prediction")]
struct Args {
    /// Cryptocurrency ticker to analyze
    ticker: String,

    /// Technical model score in [0,1]; omit to mark the model unavailable
    #[arg(long)]
    technical: Option<f64>,

    /// Sentiment model score in [0,1]
    #[arg(long)]
    sentiment: Option<f64>,

    /// Fundamental model score in [0,1]
    #[arg(long)]
    fundamental: Option<f64>,

    /// On-chain model score in [0,1]
    #[arg(long)]
    onchain: Option<f64>,

    /// Confidence reported by every fixed scorer
    #[arg(long, default_value_t = 0.85)]
    confidence: f64,

    /// Print Prometheus metrics after the prediction
    #[arg(long)]
    metrics: bool,
}

fn scorer_for(category: Category, value: Option<f64>, confidence: f64) -> Arc<dyn CategoryScorer> {
    match value {
        Some(value) => Arc::new(FixedScorer::new(category, value, confidence)),
        None => Arc::new(UnavailableScorer::new(category)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();

    info!("Coinsight Predict {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let registry = Arc::new(WeightRegistry::with_weights(config.initial_weights.clone())?);
    info!("Ensemble weights: {:?}", registry.get_weights());

    let scorers = vec![
        scorer_for(Category::Technical, args.technical, args.confidence),
        scorer_for(Category::Sentiment, args.sentiment, args.confidence),
        scorer_for(Category::Fundamental, args.fundamental, args.confidence),
        scorer_for(Category::Onchain, args.onchain, args.confidence),
    ];

    let mut service = PredictionService::new(scorers, registry)
        .with_monitor(Arc::new(MonitoringService::new(config.monitoring())));

    let metrics = if config.observability_enabled {
        let metrics = Metrics::new()?;
        service = service.with_metrics(metrics.clone());
        Some(metrics)
    } else {
        None
    };

    let bundle = FeatureBundle::empty(&args.ticker);
    let record = service.predict(&bundle).await?;

    let repository = InMemoryPredictionRepository::new();
    repository.save(&record).await?;

    println!("{}", serde_json::to_string_pretty(&record)?);

    if args.metrics
        && let Some(metrics) = metrics
    {
        println!("{}", metrics.gather()?);
    }

    Ok(())
}
