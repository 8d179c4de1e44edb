use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StyleResult;
use crate::geometry::GeometryType;

const VISIBILITY: &str = "visibility";

/// Members shared by every style layer, named as in the style spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerProperties {
    /// Unique identifier of the layer within a style
    pub id: String,
    /// Identifier of the source the layer renders from
    pub source: String,
    #[serde(rename = "minzoom", default, skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    #[serde(rename = "maxzoom", default, skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
    /// Filter expression applied to the source's features
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub layout: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub paint: Map<String, Value>,
}

impl LayerProperties {
    pub fn new(layer_id: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            id: layer_id.into(),
            source: source_id.into(),
            min_zoom: None,
            max_zoom: None,
            filter: None,
            layout: Map::new(),
            paint: Map::new(),
        }
    }
}

/// Common behaviour of all layer kinds
pub trait StyleLayer: Clone + Into<Layer> {
    /// Geometry kind this layer draws
    fn layer_type(&self) -> GeometryType;

    fn properties(&self) -> &LayerProperties;

    fn properties_mut(&mut self) -> &mut LayerProperties;

    fn id(&self) -> &str {
        &self.properties().id
    }

    fn source_id(&self) -> &str {
        &self.properties().source
    }

    fn set_paint_property(&mut self, name: &str, value: Value) {
        self.properties_mut().paint.insert(name.to_string(), value);
    }

    fn set_layout_property(&mut self, name: &str, value: Value) {
        self.properties_mut().layout.insert(name.to_string(), value);
    }

    fn set_filter(&mut self, filter: Value) {
        self.properties_mut().filter = Some(filter);
    }

    fn set_min_zoom(&mut self, zoom: f64) {
        self.properties_mut().min_zoom = Some(zoom);
    }

    fn set_max_zoom(&mut self, zoom: f64) {
        self.properties_mut().max_zoom = Some(zoom);
    }

    fn set_visible(&mut self, visible: bool) {
        let value = if visible { "visible" } else { "none" };
        self.set_layout_property(VISIBILITY, Value::from(value));
    }

    /// Layers are visible unless their layout says `"none"`
    fn is_visible(&self) -> bool {
        self.properties().layout.get(VISIBILITY).and_then(Value::as_str) != Some("none")
    }

    /// Serializes the layer as a style-spec layer object, `type` included
    fn to_style_json(&self) -> StyleResult<Value> {
        let layer: Layer = self.clone().into();
        Ok(serde_json::to_value(layer)?)
    }
}

macro_rules! style_layer {
    ($(#[$meta:meta])* $name:ident => $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            properties: LayerProperties,
        }

        impl $name {
            /// Creates a layer drawing from the source named `source_id`
            pub fn new(layer_id: impl Into<String>, source_id: impl Into<String>) -> Self {
                Self {
                    properties: LayerProperties::new(layer_id, source_id),
                }
            }
        }

        impl StyleLayer for $name {
            fn layer_type(&self) -> GeometryType {
                GeometryType::$variant
            }

            fn properties(&self) -> &LayerProperties {
                &self.properties
            }

            fn properties_mut(&mut self) -> &mut LayerProperties {
                &mut self.properties
            }
        }

        impl From<$name> for Layer {
            fn from(layer: $name) -> Self {
                Layer::$variant(layer)
            }
        }
    };
}

style_layer!(
    /// Draws point features as filled circles
    CircleLayer => Circle
);
style_layer!(
    /// Draws polygon features as filled areas
    FillLayer => Fill
);
style_layer!(
    /// Draws line features as stroked lines
    LineLayer => Line
);
style_layer!(
    /// Draws point features as icons and text labels
    SymbolLayer => Symbol
);

/// Any style layer, serialized with its `type` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    Circle(CircleLayer),
    Fill(FillLayer),
    Line(LineLayer),
    Symbol(SymbolLayer),
}

impl StyleLayer for Layer {
    fn layer_type(&self) -> GeometryType {
        match self {
            Layer::Circle(_) => GeometryType::Circle,
            Layer::Fill(_) => GeometryType::Fill,
            Layer::Line(_) => GeometryType::Line,
            Layer::Symbol(_) => GeometryType::Symbol,
        }
    }

    fn properties(&self) -> &LayerProperties {
        match self {
            Layer::Circle(layer) => layer.properties(),
            Layer::Fill(layer) => layer.properties(),
            Layer::Line(layer) => layer.properties(),
            Layer::Symbol(layer) => layer.properties(),
        }
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        match self {
            Layer::Circle(layer) => layer.properties_mut(),
            Layer::Fill(layer) => layer.properties_mut(),
            Layer::Line(layer) => layer.properties_mut(),
            Layer::Symbol(layer) => layer.properties_mut(),
        }
    }
}
