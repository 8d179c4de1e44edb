#![warn(clippy::all, rust_2018_idioms)]

//! Identity providers for map annotation layers.
//!
//! Each provider mints a process-unique layer/source identifier pair for one
//! geometry kind and builds the style layer and GeoJSON source that carry
//! those identifiers.

pub mod element;
pub mod error;
pub mod geometry;
pub mod style;

mod id_generator;

pub use element::{
    AnyElementProvider, CircleElementProvider, CoreElementProvider, ElementProvider,
    FillElementProvider, LineElementProvider, SymbolElementProvider,
};
pub use error::{StyleError, StyleResult};
pub use geometry::{GeometryKind, GeometryType};
pub use style::{GeoJsonOptions, GeoJsonSource, Layer, StyleLayer};
