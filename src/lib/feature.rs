use crate::error::{GeoJsonError, Result};
use crate::marker::Marker;
use crate::ToJson;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A single `[x, y]` coordinate pair.
pub type Position = (f64, f64);

const REQUIRED_KEYS: [&str; 3] = ["type", "properties", "geometry"];

/// The seven GeoJSON geometry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Point => "Point",
            FeatureKind::MultiPoint => "MultiPoint",
            FeatureKind::LineString => "LineString",
            FeatureKind::MultiLineString => "MultiLineString",
            FeatureKind::Polygon => "Polygon",
            FeatureKind::MultiPolygon => "MultiPolygon",
            FeatureKind::GeometryCollection => "GeometryCollection",
        }
    }

    pub fn from_tag(tag: &str) -> Option<FeatureKind> {
        let kind = match tag {
            "Point" => FeatureKind::Point,
            "MultiPoint" => FeatureKind::MultiPoint,
            "LineString" => FeatureKind::LineString,
            "MultiLineString" => FeatureKind::MultiLineString,
            "Polygon" => FeatureKind::Polygon,
            "MultiPolygon" => FeatureKind::MultiPolygon,
            "GeometryCollection" => FeatureKind::GeometryCollection,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

impl Geometry {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Geometry::Point { .. } => FeatureKind::Point,
            Geometry::MultiPoint { .. } => FeatureKind::MultiPoint,
            Geometry::LineString { .. } => FeatureKind::LineString,
            Geometry::MultiLineString { .. } => FeatureKind::MultiLineString,
            Geometry::Polygon { .. } => FeatureKind::Polygon,
            Geometry::MultiPolygon { .. } => FeatureKind::MultiPolygon,
            Geometry::GeometryCollection { .. } => FeatureKind::GeometryCollection,
        }
    }
}

/// One geographic entity: an id, free-form properties, an optional
/// geometry and an optional marker decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: String,
    pub properties: Map<String, Value>,
    pub geometry: Option<Geometry>,
    pub marker: Option<Marker>,
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl Feature {
    /// A bare feature without geometry, used as a placeholder.
    pub fn new() -> Feature {
        Feature {
            id: new_id(),
            properties: Map::new(),
            geometry: None,
            marker: None,
        }
    }

    /// Any number of bare features, each with its own id.
    pub fn many(count: usize) -> Vec<Feature> {
        (0..count).map(|_| Feature::new()).collect()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> Option<FeatureKind> {
        self.geometry.as_ref().map(Geometry::kind)
    }

    pub fn point(x: f64, y: f64) -> Feature {
        Geometry::Point {
            coordinates: (x, y),
        }
        .into()
    }

    pub fn points(positions: &[Position]) -> Vec<Feature> {
        positions.iter().map(|&(x, y)| Feature::point(x, y)).collect()
    }

    /// A line through the given point features, in order.
    pub fn line_string(points: &[Feature]) -> Result<Feature> {
        let coordinates = positions(points)?;
        Ok(Geometry::LineString { coordinates }.into())
    }

    pub fn line_strings(lines: &[Vec<Position>]) -> Vec<Feature> {
        lines
            .iter()
            .map(|line| {
                Geometry::LineString {
                    coordinates: line.clone(),
                }
                .into()
            })
            .collect()
    }

    /// A polygon whose outline runs through the given point features.
    ///
    /// The points become a single outer ring; interior rings never enter
    /// through this constructor, only through raw GeoJSON.
    pub fn polygon(points: &[Feature]) -> Result<Feature> {
        let ring = positions(points)?;
        Ok(Geometry::Polygon {
            coordinates: vec![ring],
        }
        .into())
    }

    pub fn polygons(outlines: &[Vec<Position>]) -> Vec<Feature> {
        outlines
            .iter()
            .map(|outline| {
                Geometry::Polygon {
                    coordinates: vec![outline.clone()],
                }
                .into()
            })
            .collect()
    }

    /// Rebuild a typed feature from a raw GeoJSON value.
    ///
    /// A null input yields a bare feature. Anything else must be a JSON
    /// object carrying `"type": "Feature"` together with the `properties`
    /// and `geometry` keys. The geometry is matched against the seven
    /// GeoJSON type tags and its coordinates are shape-checked; unknown
    /// tags are rejected. The rebuilt feature always receives a fresh id,
    /// and an incoming `marker` key is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use leaflet_geojson::{Feature, FeatureKind, ToJson};
    ///
    /// let value = Feature::point(13.4, 52.5).to_json();
    /// let parsed = Feature::from_value(&value).unwrap();
    /// assert_eq!(parsed.kind(), Some(FeatureKind::Point));
    /// ```
    pub fn from_value(value: &Value) -> Result<Feature> {
        if value.is_null() {
            return Ok(Feature::new());
        }
        let obj = value.as_object().ok_or(GeoJsonError::ExpectedObject)?;
        if obj.get("type").and_then(Value::as_str) != Some("Feature") {
            return Err(GeoJsonError::MissingKey("type"));
        }
        let missing: Vec<&'static str> = REQUIRED_KEYS
            .iter()
            .filter(|key| !obj.contains_key(**key))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(GeoJsonError::MissingKeys(missing));
        }
        let properties = match &obj["properties"] {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            _ => return Err(GeoJsonError::MissingKey("properties")),
        };
        let geometry = parse_geometry(&obj["geometry"])?;
        Ok(Feature {
            id: new_id(),
            properties,
            geometry,
            marker: None,
        })
    }
}

fn parse_geometry(value: &Value) -> Result<Option<Geometry>> {
    let obj = match value {
        Value::Null => return Ok(None),
        Value::Object(obj) => obj,
        _ => return Err(GeoJsonError::MissingKey("geometry")),
    };
    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or(GeoJsonError::MissingKey("geometry.type"))?;
    let kind = FeatureKind::from_tag(tag)
        .ok_or_else(|| GeoJsonError::UnknownGeometryType(tag.to_string()))?;
    let geometry = Geometry::deserialize(value).map_err(|err| GeoJsonError::InvalidGeometry {
        kind,
        detail: err.to_string(),
    })?;
    Ok(Some(geometry))
}

pub(crate) fn point_position(feature: &Feature) -> Result<Position> {
    match &feature.geometry {
        Some(Geometry::Point { coordinates }) => Ok(*coordinates),
        Some(other) => Err(GeoJsonError::KindMismatch {
            expected: FeatureKind::Point,
            found: other.kind(),
        }),
        None => Err(GeoJsonError::NoGeometry),
    }
}

pub(crate) fn positions(points: &[Feature]) -> Result<Vec<Position>> {
    points.iter().map(point_position).collect()
}

pub(crate) fn line_positions(feature: &Feature) -> Result<Vec<Position>> {
    match &feature.geometry {
        Some(Geometry::LineString { coordinates }) => Ok(coordinates.clone()),
        Some(other) => Err(GeoJsonError::KindMismatch {
            expected: FeatureKind::LineString,
            found: other.kind(),
        }),
        None => Err(GeoJsonError::NoGeometry),
    }
}

pub(crate) fn polygon_rings(feature: &Feature) -> Result<Vec<Vec<Position>>> {
    match &feature.geometry {
        Some(Geometry::Polygon { coordinates }) => Ok(coordinates.clone()),
        Some(other) => Err(GeoJsonError::KindMismatch {
            expected: FeatureKind::Polygon,
            found: other.kind(),
        }),
        None => Err(GeoJsonError::NoGeometry),
    }
}

impl From<Geometry> for Feature {
    fn from(geometry: Geometry) -> Feature {
        Feature {
            id: new_id(),
            properties: Map::new(),
            geometry: Some(geometry),
            marker: None,
        }
    }
}

impl Default for Feature {
    fn default() -> Feature {
        Feature::new()
    }
}

impl ToJson for Feature {
    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), json!("Feature"));
        obj.insert("id".to_string(), json!(&self.id));
        obj.insert(
            "properties".to_string(),
            Value::Object(self.properties.clone()),
        );
        obj.insert("geometry".to_string(), json!(&self.geometry));
        if let Some(marker) = &self.marker {
            obj.insert("marker".to_string(), marker.to_json());
        }
        Value::Object(obj)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl FromStr for Feature {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Feature> {
        let value: Value = serde_json::from_str(s)?;
        Feature::from_value(&value)
    }
}
