//! Runs in its own process so the circle counter starts from zero.

use annotation_plugin::{CircleElementProvider, CoreElementProvider};

#[test]
fn test_first_circle_identifiers() {
    let a = CircleElementProvider::new();
    assert_eq!(a.layer_id(), "mapbox-android-circle-layer-1");
    assert_eq!(a.source_id(), "mapbox-android-circle-source-1");

    let b = CircleElementProvider::new();
    assert_eq!(b.layer_id(), "mapbox-android-circle-layer-2");
    assert_eq!(b.source_id(), "mapbox-android-circle-source-2");

    // Clones reuse identifiers instead of drawing new ones
    let a2 = a.clone();
    assert_eq!(a2.layer_id(), a.layer_id());

    let c = CircleElementProvider::new();
    assert_eq!(c.layer_id(), "mapbox-android-circle-layer-3");
}
