//! Style-spec models of the layers and sources an element provider hands out.
//!
//! These are plain values. Nothing here talks to a renderer; attaching a layer
//! or source to a live map style is up to whoever owns the style.

pub mod layer;
pub mod source;

pub use layer::{CircleLayer, FillLayer, Layer, LayerProperties, LineLayer, StyleLayer, SymbolLayer};
pub use source::{GeoJsonOptions, GeoJsonSource};
