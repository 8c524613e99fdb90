use serde_json::Value;

pub mod collection;
pub mod error;
pub mod feature;
pub mod geo;
pub mod marker;
pub mod merge;
mod multi;

pub use self::collection::FeatureCollection;
pub use self::error::{GeoJsonError, Result};
pub use self::feature::{Feature, FeatureKind, Geometry, Position};
pub use self::geo::{Bounds, Location};
pub use self::marker::{Icon, Marker, Popup, Tooltip};

/// Conversion into the JSON wire shape.
///
/// `to_json` returns a plain serializable value; the `Display`
/// implementations on the model types stringify exactly this value.
pub trait ToJson {
    fn to_json(&self) -> Value;

    fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}
