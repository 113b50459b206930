pub mod mock;
pub mod monitoring;
pub mod observability;

pub use mock::InMemoryPredictionRepository;
