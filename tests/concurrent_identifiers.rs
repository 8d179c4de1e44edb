//! Runs in its own process so the fill counter starts from zero.

use annotation_plugin::{CoreElementProvider, FillElementProvider};
use std::collections::BTreeSet;
use std::thread;

const THREADS: usize = 10;
const PER_THREAD: usize = 10;

#[test]
fn test_concurrent_providers_draw_every_value_once() {
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| {
                (0..PER_THREAD)
                    .map(|_| FillElementProvider::new())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut suffixes = BTreeSet::new();
    for handle in handles {
        for provider in handle.join().unwrap() {
            let n: u64 = provider
                .layer_id()
                .strip_prefix("mapbox-android-fill-layer-")
                .unwrap()
                .parse()
                .unwrap();
            assert_eq!(provider.source_id(), format!("mapbox-android-fill-source-{n}"));
            assert!(suffixes.insert(n), "value {n} handed out twice");
        }
    }

    assert_eq!(suffixes, (1..=(THREADS * PER_THREAD) as u64).collect::<BTreeSet<_>>());
}
