use crate::feature::FeatureKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoJsonError>;

#[derive(Error, Debug)]
pub enum GeoJsonError {
    #[error("expected a JSON object")]
    ExpectedObject,

    #[error("missing or invalid required key: {0}")]
    MissingKey(&'static str),

    #[error("missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    #[error("expected an array for key: {0}")]
    ExpectedArray(&'static str),

    #[error("unknown geometry type: {0}")]
    UnknownGeometryType(String),

    #[error("invalid {kind} geometry: {detail}")]
    InvalidGeometry { kind: FeatureKind, detail: String },

    #[error("expected a {expected} feature, found {found}")]
    KindMismatch {
        expected: FeatureKind,
        found: FeatureKind,
    },

    #[error("a {0} feature cannot hold child features")]
    NotMultiKind(FeatureKind),

    #[error("feature has no geometry")]
    NoGeometry,

    #[error("feature not found")]
    NotFound,

    #[error("no such alias: {0}")]
    UnknownAlias(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
