use crate::error::{GeoJsonError, Result};
use crate::feature::{Feature, FeatureKind};
use crate::ToJson;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::slice;
use std::str::FromStr;
use std::vec;

/// The top level GeoJSON container: an ordered sequence of features plus
/// an alias index for stable name based lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    aliases: HashMap<String, String>,
}

impl FeatureCollection {
    pub fn new() -> FeatureCollection {
        FeatureCollection::default()
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// Append a feature and bind an alias to its id. Rebinding an alias
    /// overwrites the previous binding.
    pub fn push_aliased(&mut self, feature: Feature, alias: &str) {
        self.aliases
            .insert(alias.to_string(), feature.id().to_string());
        self.features.push(feature);
    }

    /// Remove the first feature equal to the given one and return it.
    /// Every alias bound to the removed feature's id is pruned.
    pub fn remove(&mut self, feature: &Feature) -> Result<Feature> {
        let index = self
            .features
            .iter()
            .position(|candidate| candidate == feature)
            .ok_or(GeoJsonError::NotFound)?;
        let removed = self.features.remove(index);
        self.aliases.retain(|_, id| id.as_str() != removed.id());
        Ok(removed)
    }

    pub fn count(&self, kind: FeatureKind) -> usize {
        self.features
            .iter()
            .filter(|feature| feature.kind() == Some(kind))
            .count()
    }

    pub fn at_id(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|feature| feature.id() == id)
    }

    /// Look a feature up through the alias index.
    pub fn at_alias(&self, alias: &str) -> Result<&Feature> {
        let id = self
            .aliases
            .get(alias)
            .ok_or_else(|| GeoJsonError::UnknownAlias(alias.to_string()))?;
        self.at_id(id)
            .ok_or_else(|| GeoJsonError::UnknownAlias(alias.to_string()))
    }

    pub fn first(&self) -> Option<&Feature> {
        self.features.first()
    }

    pub fn last(&self) -> Option<&Feature> {
        self.features.last()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains(&self, feature: &Feature) -> bool {
        self.features.contains(feature)
    }

    pub fn iter(&self) -> slice::Iter<'_, Feature> {
        self.features.iter()
    }

    /// Rebuild a collection from a raw `FeatureCollection` value. Any
    /// malformed member fails the whole load; aliases are not part of the
    /// wire format and start out empty.
    pub fn from_value(value: &Value) -> Result<FeatureCollection> {
        let obj = value.as_object().ok_or(GeoJsonError::ExpectedObject)?;
        if obj.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
            return Err(GeoJsonError::MissingKey("type"));
        }
        let features = obj
            .get("features")
            .ok_or(GeoJsonError::MissingKey("features"))?
            .as_array()
            .ok_or(GeoJsonError::ExpectedArray("features"))?
            .iter()
            .map(Feature::from_value)
            .collect::<Result<_>>()?;
        Ok(FeatureCollection {
            features,
            aliases: HashMap::new(),
        })
    }
}

impl ToJson for FeatureCollection {
    fn to_json(&self) -> Value {
        let features: Vec<Value> = self
            .features
            .iter()
            .map(|feature| feature.to_json())
            .collect();
        json!({ "type": "FeatureCollection", "features": features })
    }
}

impl fmt::Display for FeatureCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl FromStr for FeatureCollection {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<FeatureCollection> {
        let value: Value = serde_json::from_str(s)?;
        FeatureCollection::from_value(&value)
    }
}

impl Index<usize> for FeatureCollection {
    type Output = Feature;

    fn index(&self, index: usize) -> &Feature {
        &self.features[index]
    }
}

impl Extend<Feature> for FeatureCollection {
    fn extend<I: IntoIterator<Item = Feature>>(&mut self, iter: I) {
        self.features.extend(iter);
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = vec::IntoIter<Feature>;

    fn into_iter(self) -> vec::IntoIter<Feature> {
        self.features.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = slice::Iter<'a, Feature>;

    fn into_iter(self) -> slice::Iter<'a, Feature> {
        self.features.iter()
    }
}
