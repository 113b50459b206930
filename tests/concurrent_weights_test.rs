use coinsight::application::ensemble::{WEIGHT_SUM_TOLERANCE, WeightRegistry};
use coinsight::domain::category::Category;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Test: concurrent readers never observe a torn weight mapping
///
/// A writer alternates between two valid mappings (and periodically
/// submits an invalid one) while reader threads continuously snapshot the
/// registry. Every observed snapshot must satisfy the normalization
/// invariant.
#[test]
fn test_readers_never_observe_torn_mapping() {
    let registry = Arc::new(WeightRegistry::new());
    let stop = Arc::new(AtomicBool::new(false));

    let mut readers = Vec::new();
    for _ in 0..4 {
        let registry = registry.clone();
        let stop = stop.clone();
        readers.push(thread::spawn(move || {
            let mut observed = 0usize;
            while !stop.load(Ordering::Relaxed) {
                let weights = registry.get_weights();
                let sum: f64 = weights.values().sum();
                assert!(
                    (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE,
                    "Observed torn mapping with sum {}",
                    sum
                );
                observed += 1;
            }
            observed
        }));
    }

    let writer = {
        let registry = registry.clone();
        thread::spawn(move || {
            let first = HashMap::from([
                (Category::Technical, 0.7),
                (Category::Sentiment, 0.3),
            ]);
            let second = HashMap::from([
                (Category::Technical, 0.25),
                (Category::Sentiment, 0.25),
                (Category::Fundamental, 0.25),
                (Category::Onchain, 0.25),
            ]);
            let invalid = HashMap::from([(Category::Technical, 0.5)]);

            for i in 0..500 {
                let candidate = if i % 2 == 0 { &first } else { &second };
                registry.update_weights(candidate.clone()).unwrap();

                // Invalid candidates must bounce without touching state.
                if i % 10 == 0 {
                    assert!(registry.update_weights(invalid.clone()).is_err());
                }
            }
        })
    };

    writer.join().unwrap();
    stop.store(true, Ordering::Relaxed);

    for reader in readers {
        let observed = reader.join().unwrap();
        assert!(observed > 0, "Reader thread made no observations");
    }

    // Final state is whichever valid mapping was committed last.
    let sum: f64 = registry.get_weights().values().sum();
    assert!((sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE);
}

/// Test: the registry hands out defensive copies, not live views
#[test]
fn test_get_weights_returns_defensive_copy() {
    let registry = WeightRegistry::new();

    let mut snapshot = registry.get_weights();
    snapshot.insert(Category::Technical, 99.0);

    assert_eq!(registry.get_weights()[&Category::Technical], 0.4);
}
