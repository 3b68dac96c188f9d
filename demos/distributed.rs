use flakeid::FlakeId;
use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // One generator shared by every worker on this node; no external lock needed
    let shared = Arc::new(FlakeId::new(1).unwrap());
    let mut handles = vec![];

    for worker in 0..4u16 {
        let shared = Arc::clone(&shared);
        handles.push(thread::spawn(move || {
            // Plus a private generator per worker, as a separate node would have
            let own = FlakeId::new(100 + worker).unwrap();
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                for generator in [&*shared, &own] {
                    let id = generator.generate_id_safe();
                    let (ts, node, seq) = generator.extract.decompose(id);
                    println!(
                        "Worker {} generated ID {} (ts={}, node={}, seq={})",
                        worker, i, ts, node, seq
                    );
                    assert!(ids.insert(id), "Duplicate ID generated!");
                }

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let worker_ids = handle.join().unwrap();
        for id in worker_ids {
            assert!(all_ids.insert(id), "Duplicate ID across workers!");
        }
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 4 * 5 * 2);
    println!("All IDs are unique across nodes and workers!");
}
