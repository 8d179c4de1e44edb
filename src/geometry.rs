use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id_generator::IdGenerator;
use crate::style::{CircleLayer, FillLayer, LineLayer, StyleLayer, SymbolLayer};

/// Prefix shared by every identifier a provider mints
pub const ID_NAMESPACE: &str = "mapbox-android";

/// Annotation shape category, for choosing a kind at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    Circle,
    Fill,
    Line,
    Symbol,
}

impl GeometryType {
    pub const ALL: [GeometryType; 4] = [
        GeometryType::Circle,
        GeometryType::Fill,
        GeometryType::Line,
        GeometryType::Symbol,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GeometryType::Circle => "circle",
            GeometryType::Fill => "fill",
            GeometryType::Line => "line",
            GeometryType::Symbol => "symbol",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

mod sealed {
    use crate::id_generator::IdGenerator;

    pub trait Sealed {
        /// Counter shared by every provider of this kind in the process
        fn id_generator() -> &'static IdGenerator;
    }
}

/// Compile-time description of one geometry kind: its identifier templates,
/// its own counter and the layer type it renders with.
///
/// Implemented by the marker types [`Circle`], [`Fill`], [`Line`] and [`Symbol`].
pub trait GeometryKind: sealed::Sealed + Send + Sync + 'static {
    const TYPE: GeometryType;

    /// Layer identifiers are this prefix followed by the counter value
    const LAYER_ID_PREFIX: &'static str;

    /// Source identifiers are this prefix followed by the counter value
    const SOURCE_ID_PREFIX: &'static str;

    type Layer: StyleLayer;

    fn create_layer(layer_id: &str, source_id: &str) -> Self::Layer;
}

macro_rules! geometry_kind {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $layer:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {}

        impl sealed::Sealed for $name {
            fn id_generator() -> &'static IdGenerator {
                static ID_GENERATOR: IdGenerator = IdGenerator::new();
                &ID_GENERATOR
            }
        }

        impl GeometryKind for $name {
            const TYPE: GeometryType = GeometryType::$name;
            const LAYER_ID_PREFIX: &'static str = concat!("mapbox-android-", $kind, "-layer-");
            const SOURCE_ID_PREFIX: &'static str = concat!("mapbox-android-", $kind, "-source-");

            type Layer = $layer;

            fn create_layer(layer_id: &str, source_id: &str) -> Self::Layer {
                $layer::new(layer_id, source_id)
            }
        }
    };
}

geometry_kind!(
    /// Point annotations drawn as circles
    Circle, "circle", CircleLayer
);
geometry_kind!(
    /// Polygon annotations drawn as filled areas
    Fill, "fill", FillLayer
);
geometry_kind!(
    /// Line annotations
    Line, "line", LineLayer
);
geometry_kind!(
    /// Point annotations drawn as icons and text
    Symbol, "symbol", SymbolLayer
);

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes<K: GeometryKind>() -> (&'static str, &'static str) {
        (K::LAYER_ID_PREFIX, K::SOURCE_ID_PREFIX)
    }

    #[test]
    fn test_prefixes_embed_namespace_and_kind() {
        for (ty, (layer, source)) in [
            (GeometryType::Circle, prefixes::<Circle>()),
            (GeometryType::Fill, prefixes::<Fill>()),
            (GeometryType::Line, prefixes::<Line>()),
            (GeometryType::Symbol, prefixes::<Symbol>()),
        ] {
            assert_eq!(layer, format!("{ID_NAMESPACE}-{ty}-layer-"));
            assert_eq!(source, format!("{ID_NAMESPACE}-{ty}-source-"));
        }
    }

    #[test]
    fn test_geometry_type_serde() {
        assert_eq!(serde_json::to_string(&GeometryType::Fill).unwrap(), "\"fill\"");
        let ty: GeometryType = serde_json::from_str("\"symbol\"").unwrap();
        assert_eq!(ty, GeometryType::Symbol);
    }

    #[test]
    fn test_layer_constructor_matches_kind() {
        let layer = Line::create_layer("l", "s");
        assert_eq!(layer.layer_type(), Line::TYPE);
        assert_eq!(layer.id(), "l");
        assert_eq!(layer.source_id(), "s");
    }
}
