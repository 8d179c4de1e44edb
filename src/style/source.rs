use log::{trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{StyleError, StyleResult};

/// Highest zoom level a style may reference
pub const MAX_ZOOM: f64 = 25.5;

/// Largest tile buffer, in screen pixels, a GeoJSON source accepts
pub const MAX_BUFFER: u32 = 512;

const GEOMETRY_TYPES: [&str; 7] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

/// Tuning for how a GeoJSON source tiles and clusters its data.
///
/// Every member is optional; unset members fall back to the renderer's
/// defaults and are left out of the serialized source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoJsonOptions {
    #[serde(rename = "minzoom", default, skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<f64>,
    #[serde(rename = "maxzoom", default, skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<f64>,
    /// Tile buffer on each side, in screen pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer: Option<u32>,
    #[serde(rename = "lineMetrics", default, skip_serializing_if = "Option::is_none")]
    pub line_metrics: Option<bool>,
    /// Douglas-Peucker simplification tolerance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<bool>,
    #[serde(rename = "clusterMaxZoom", default, skip_serializing_if = "Option::is_none")]
    pub cluster_max_zoom: Option<f64>,
    #[serde(rename = "clusterRadius", default, skip_serializing_if = "Option::is_none")]
    pub cluster_radius: Option<u32>,
}

impl GeoJsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a style-spec JSON object and validates them
    pub fn from_json(json: &str) -> StyleResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_min_zoom(mut self, zoom: f64) -> Self {
        self.min_zoom = Some(zoom);
        self
    }

    pub fn with_max_zoom(mut self, zoom: f64) -> Self {
        self.max_zoom = Some(zoom);
        self
    }

    pub fn with_buffer(mut self, buffer: u32) -> Self {
        self.buffer = Some(buffer);
        self
    }

    pub fn with_line_metrics(mut self, line_metrics: bool) -> Self {
        self.line_metrics = Some(line_metrics);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn with_cluster(mut self, cluster: bool) -> Self {
        self.cluster = Some(cluster);
        self
    }

    pub fn with_cluster_max_zoom(mut self, zoom: f64) -> Self {
        self.cluster_max_zoom = Some(zoom);
        self
    }

    pub fn with_cluster_radius(mut self, radius: u32) -> Self {
        self.cluster_radius = Some(radius);
        self
    }

    /// Checks every set member against the ranges the renderer accepts,
    /// reporting the first one out of range
    pub fn validate(&self) -> StyleResult<()> {
        check_zoom("minzoom", self.min_zoom)?;
        check_zoom("maxzoom", self.max_zoom)?;

        if let (Some(min), Some(max)) = (self.min_zoom, self.max_zoom) {
            if min > max {
                return Err(StyleError::invalid_option(
                    "minzoom",
                    format!("{min} is greater than maxzoom {max}"),
                ));
            }
        }

        if let Some(buffer) = self.buffer {
            if buffer > MAX_BUFFER {
                return Err(StyleError::invalid_option(
                    "buffer",
                    format!("{buffer} exceeds the maximum of {MAX_BUFFER}"),
                ));
            }
        }

        if let Some(tolerance) = self.tolerance {
            if !tolerance.is_finite() || tolerance < 0.0 {
                return Err(StyleError::invalid_option(
                    "tolerance",
                    format!("{tolerance} is not a finite, non-negative number"),
                ));
            }
        }

        check_zoom("clusterMaxZoom", self.cluster_max_zoom)
    }
}

fn check_zoom(option: &'static str, zoom: Option<f64>) -> StyleResult<()> {
    match zoom {
        Some(zoom) if !(0.0..=MAX_ZOOM).contains(&zoom) => Err(StyleError::invalid_option(
            option,
            format!("{zoom} is outside 0..={MAX_ZOOM}"),
        )),
        _ => Ok(()),
    }
}

/// A named container of GeoJSON feature data
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonSource {
    id: String,
    options: GeoJsonOptions,
    data: Value,
}

impl GeoJsonSource {
    /// Creates an empty source, using default options when none are given
    pub fn new(id: impl Into<String>, options: Option<GeoJsonOptions>) -> StyleResult<Self> {
        let id = id.into();
        let options = options.unwrap_or_default();

        if let Err(err) = options.validate() {
            warn!("Rejected options for GeoJSON source {}: {}", id, err);
            return Err(err);
        }

        trace!("Created GeoJSON source {}", id);
        Ok(Self {
            id,
            options,
            data: empty_feature_collection(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &GeoJsonOptions {
        &self.options
    }

    /// Current GeoJSON document held by the source
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Replaces the source data with a GeoJSON feature collection, feature or geometry
    pub fn set_geojson(&mut self, data: Value) -> StyleResult<()> {
        let kind = data
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| StyleError::InvalidGeoJson("missing string member `type`".to_string()))?;

        match kind {
            "FeatureCollection" => {
                if !data.get("features").is_some_and(Value::is_array) {
                    return Err(StyleError::InvalidGeoJson(
                        "FeatureCollection without a `features` array".to_string(),
                    ));
                }
            }
            "Feature" => {}
            kind if GEOMETRY_TYPES.contains(&kind) => {}
            kind => {
                return Err(StyleError::InvalidGeoJson(format!("unknown type `{kind}`")));
            }
        }

        self.data = data;
        Ok(())
    }

    /// Serializes the source body as it appears under `sources` in a style
    pub fn to_style_json(&self) -> StyleResult<Value> {
        #[derive(Serialize)]
        struct SourceJson<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            data: &'a Value,
            #[serde(flatten)]
            options: &'a GeoJsonOptions,
        }

        Ok(serde_json::to_value(SourceJson {
            kind: "geojson",
            data: &self.data,
            options: &self.options,
        })?)
    }
}

fn empty_feature_collection() -> Value {
    json!({ "type": "FeatureCollection", "features": [] })
}
