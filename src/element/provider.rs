use log::{debug, trace};
use std::fmt;
use std::marker::PhantomData;

use super::CoreElementProvider;
use crate::error::StyleResult;
use crate::geometry::{Circle, Fill, GeometryKind, GeometryType, Line, Symbol};
use crate::style::{GeoJsonOptions, GeoJsonSource};

/// Identity provider for one annotation layer of geometry kind `K`.
///
/// Construction draws the next value `n` from the kind's process-wide counter
/// and fixes the identifiers `mapbox-android-<kind>-layer-<n>` and
/// `mapbox-android-<kind>-source-<n>` for the provider's lifetime.
pub struct ElementProvider<K: GeometryKind> {
    layer_id: String,
    source_id: String,
    kind: PhantomData<fn() -> K>,
}

pub type CircleElementProvider = ElementProvider<Circle>;
pub type FillElementProvider = ElementProvider<Fill>;
pub type LineElementProvider = ElementProvider<Line>;
pub type SymbolElementProvider = ElementProvider<Symbol>;

impl<K: GeometryKind> ElementProvider<K> {
    pub fn new() -> Self {
        let id = K::id_generator().next();
        let layer_id = format!("{}{}", K::LAYER_ID_PREFIX, id);
        let source_id = format!("{}{}", K::SOURCE_ID_PREFIX, id);

        debug!(
            "Created {} element provider: layer={}, source={}",
            K::TYPE,
            layer_id,
            source_id
        );

        Self {
            layer_id,
            source_id,
            kind: PhantomData,
        }
    }

    pub fn kind(&self) -> GeometryType {
        K::TYPE
    }
}

impl<K: GeometryKind> Default for ElementProvider<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: derives would demand the same traits of the marker type `K`.
impl<K: GeometryKind> Clone for ElementProvider<K> {
    fn clone(&self) -> Self {
        Self {
            layer_id: self.layer_id.clone(),
            source_id: self.source_id.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: GeometryKind> PartialEq for ElementProvider<K> {
    fn eq(&self, other: &Self) -> bool {
        self.layer_id == other.layer_id && self.source_id == other.source_id
    }
}

impl<K: GeometryKind> Eq for ElementProvider<K> {}

impl<K: GeometryKind> fmt::Debug for ElementProvider<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementProvider")
            .field("kind", &K::TYPE)
            .field("layer_id", &self.layer_id)
            .field("source_id", &self.source_id)
            .finish()
    }
}

impl<K: GeometryKind> CoreElementProvider for ElementProvider<K> {
    type Layer = K::Layer;

    fn layer_id(&self) -> &str {
        &self.layer_id
    }

    fn source_id(&self) -> &str {
        &self.source_id
    }

    fn layer(&self) -> Self::Layer {
        trace!("Building {} layer {}", K::TYPE, self.layer_id);
        K::create_layer(&self.layer_id, &self.source_id)
    }

    fn source(&self, options: Option<GeoJsonOptions>) -> StyleResult<GeoJsonSource> {
        GeoJsonSource::new(self.source_id.as_str(), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleLayer;

    // Other tests in this binary share the counters, so only relative
    // properties are asserted here.

    fn suffix(id: &str) -> u64 {
        id.rsplit('-').next().unwrap().parse().unwrap()
    }

    #[test]
    fn test_identifiers_share_suffix() {
        let provider = LineElementProvider::new();

        assert!(provider.layer_id().starts_with("mapbox-android-line-layer-"));
        assert!(provider.source_id().starts_with("mapbox-android-line-source-"));
        assert_eq!(suffix(provider.layer_id()), suffix(provider.source_id()));
    }

    #[test]
    fn test_later_provider_gets_larger_suffix() {
        let first = SymbolElementProvider::new();
        let second = SymbolElementProvider::new();

        assert!(suffix(second.layer_id()) > suffix(first.layer_id()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_clone_keeps_identifiers() {
        let provider = FillElementProvider::default();
        let clone = provider.clone();

        assert_eq!(provider, clone);
        assert_eq!(clone.layer_id(), provider.layer_id());
    }

    #[test]
    fn test_layer_uses_stored_ids() {
        let provider = CircleElementProvider::new();
        let layer = provider.layer();

        assert_eq!(layer.id(), provider.layer_id());
        assert_eq!(layer.source_id(), provider.source_id());
        assert_eq!(layer.layer_type(), provider.kind());
    }

    #[test]
    fn test_providers_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CircleElementProvider>();
        assert_send_sync::<SymbolElementProvider>();
    }
}
