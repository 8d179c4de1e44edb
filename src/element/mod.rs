use crate::error::StyleResult;
use crate::geometry::GeometryType;
use crate::style::{GeoJsonOptions, GeoJsonSource, Layer, StyleLayer};

mod provider;

pub use provider::{
    CircleElementProvider, ElementProvider, FillElementProvider, LineElementProvider,
    SymbolElementProvider,
};

/// Hands out the identifiers of one annotation layer and builds the style
/// objects that carry them
pub trait CoreElementProvider {
    type Layer: StyleLayer;

    /// Identifier of the style layer, fixed at construction
    fn layer_id(&self) -> &str;

    /// Identifier of the GeoJSON source, fixed at construction
    fn source_id(&self) -> &str;

    /// Builds a new layer rendering from [`source_id`](Self::source_id).
    ///
    /// Every call returns a fresh value owned by the caller; the layer is not
    /// added to any style.
    fn layer(&self) -> Self::Layer;

    /// Builds a new, empty GeoJSON source.
    ///
    /// `None` selects default options. Errors come from
    /// [`GeoJsonSource::new`] unchanged.
    fn source(&self, options: Option<GeoJsonOptions>) -> StyleResult<GeoJsonSource>;
}

/// Provider of any geometry kind, for when the kind is only known at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyElementProvider {
    Circle(CircleElementProvider),
    Fill(FillElementProvider),
    Line(LineElementProvider),
    Symbol(SymbolElementProvider),
}

impl AnyElementProvider {
    pub fn kind(&self) -> GeometryType {
        match self {
            AnyElementProvider::Circle(p) => p.kind(),
            AnyElementProvider::Fill(p) => p.kind(),
            AnyElementProvider::Line(p) => p.kind(),
            AnyElementProvider::Symbol(p) => p.kind(),
        }
    }
}

impl CoreElementProvider for AnyElementProvider {
    type Layer = Layer;

    fn layer_id(&self) -> &str {
        match self {
            AnyElementProvider::Circle(p) => p.layer_id(),
            AnyElementProvider::Fill(p) => p.layer_id(),
            AnyElementProvider::Line(p) => p.layer_id(),
            AnyElementProvider::Symbol(p) => p.layer_id(),
        }
    }

    fn source_id(&self) -> &str {
        match self {
            AnyElementProvider::Circle(p) => p.source_id(),
            AnyElementProvider::Fill(p) => p.source_id(),
            AnyElementProvider::Line(p) => p.source_id(),
            AnyElementProvider::Symbol(p) => p.source_id(),
        }
    }

    fn layer(&self) -> Layer {
        match self {
            AnyElementProvider::Circle(p) => p.layer().into(),
            AnyElementProvider::Fill(p) => p.layer().into(),
            AnyElementProvider::Line(p) => p.layer().into(),
            AnyElementProvider::Symbol(p) => p.layer().into(),
        }
    }

    fn source(&self, options: Option<GeoJsonOptions>) -> StyleResult<GeoJsonSource> {
        match self {
            AnyElementProvider::Circle(p) => p.source(options),
            AnyElementProvider::Fill(p) => p.source(options),
            AnyElementProvider::Line(p) => p.source(options),
            AnyElementProvider::Symbol(p) => p.source(options),
        }
    }
}

impl From<CircleElementProvider> for AnyElementProvider {
    fn from(provider: CircleElementProvider) -> Self {
        AnyElementProvider::Circle(provider)
    }
}

impl From<FillElementProvider> for AnyElementProvider {
    fn from(provider: FillElementProvider) -> Self {
        AnyElementProvider::Fill(provider)
    }
}

impl From<LineElementProvider> for AnyElementProvider {
    fn from(provider: LineElementProvider) -> Self {
        AnyElementProvider::Line(provider)
    }
}

impl From<SymbolElementProvider> for AnyElementProvider {
    fn from(provider: SymbolElementProvider) -> Self {
        AnyElementProvider::Symbol(provider)
    }
}

/// Factory functions for creating providers
pub mod factory {
    use super::*;

    /// Create a provider for `kind`, drawing from that kind's counter
    pub fn create_provider(kind: GeometryType) -> AnyElementProvider {
        match kind {
            GeometryType::Circle => CircleElementProvider::new().into(),
            GeometryType::Fill => FillElementProvider::new().into(),
            GeometryType::Line => LineElementProvider::new().into(),
            GeometryType::Symbol => SymbolElementProvider::new().into(),
        }
    }
}
