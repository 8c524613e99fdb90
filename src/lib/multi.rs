use crate::error::{GeoJsonError, Result};
use crate::feature::{
    line_positions, point_position, polygon_rings, positions, Feature, Geometry, Position,
};

impl Feature {
    /// A multi point over the given point features.
    pub fn multi_point(points: &[Feature]) -> Result<Feature> {
        let coordinates = positions(points)?;
        Ok(Geometry::MultiPoint { coordinates }.into())
    }

    pub fn multi_points(groups: &[Vec<Position>]) -> Vec<Feature> {
        groups
            .iter()
            .map(|group| {
                Geometry::MultiPoint {
                    coordinates: group.clone(),
                }
                .into()
            })
            .collect()
    }

    /// A multi line string over the given line string features.
    pub fn multi_line_string(lines: &[Feature]) -> Result<Feature> {
        let coordinates = lines.iter().map(line_positions).collect::<Result<_>>()?;
        Ok(Geometry::MultiLineString { coordinates }.into())
    }

    pub fn multi_line_strings(groups: &[Vec<Vec<Position>>]) -> Vec<Feature> {
        groups
            .iter()
            .map(|lines| {
                Geometry::MultiLineString {
                    coordinates: lines.clone(),
                }
                .into()
            })
            .collect()
    }

    /// A multi polygon over the given polygon features.
    pub fn multi_polygon(polygons: &[Feature]) -> Result<Feature> {
        let coordinates = polygons.iter().map(polygon_rings).collect::<Result<_>>()?;
        Ok(Geometry::MultiPolygon { coordinates }.into())
    }

    /// One multi polygon per group, each outline wrapped in its own
    /// single-ring polygon.
    pub fn multi_polygons(groups: &[Vec<Vec<Position>>]) -> Vec<Feature> {
        groups
            .iter()
            .map(|outlines| {
                Geometry::MultiPolygon {
                    coordinates: outlines.iter().map(|outline| vec![outline.clone()]).collect(),
                }
                .into()
            })
            .collect()
    }

    /// A geometry collection over features of any kind.
    ///
    /// Only each child's geometry enters the collection; ids, properties
    /// and markers stay behind.
    pub fn collection(features: &[Feature]) -> Result<Feature> {
        let geometries = features
            .iter()
            .map(|feature| feature.geometry.clone().ok_or(GeoJsonError::NoGeometry))
            .collect::<Result<_>>()?;
        Ok(Geometry::GeometryCollection { geometries }.into())
    }

    pub fn collections(groups: &[Vec<Feature>]) -> Result<Vec<Feature>> {
        groups.iter().map(|group| Feature::collection(group)).collect()
    }

    /// Append a child to a multi kind feature, after checking that the
    /// child matches the declared child kind. The target is untouched on
    /// error.
    pub fn push(&mut self, child: &Feature) -> Result<()> {
        match &mut self.geometry {
            Some(Geometry::MultiPoint { coordinates }) => {
                let position = point_position(child)?;
                coordinates.push(position);
                Ok(())
            }
            Some(Geometry::MultiLineString { coordinates }) => {
                let line = line_positions(child)?;
                coordinates.push(line);
                Ok(())
            }
            Some(Geometry::MultiPolygon { coordinates }) => {
                let rings = polygon_rings(child)?;
                coordinates.push(rings);
                Ok(())
            }
            Some(Geometry::GeometryCollection { geometries }) => {
                let geometry = child.geometry.clone().ok_or(GeoJsonError::NoGeometry)?;
                geometries.push(geometry);
                Ok(())
            }
            Some(other) => Err(GeoJsonError::NotMultiKind(other.kind())),
            None => Err(GeoJsonError::NoGeometry),
        }
    }

    /// Remove the first child whose coordinates equal the given feature's.
    pub fn remove(&mut self, child: &Feature) -> Result<()> {
        match &mut self.geometry {
            Some(Geometry::MultiPoint { coordinates }) => {
                let position = point_position(child)?;
                remove_first(coordinates, &position)
            }
            Some(Geometry::MultiLineString { coordinates }) => {
                let line = line_positions(child)?;
                remove_first(coordinates, &line)
            }
            Some(Geometry::MultiPolygon { coordinates }) => {
                let rings = polygon_rings(child)?;
                remove_first(coordinates, &rings)
            }
            Some(Geometry::GeometryCollection { geometries }) => {
                let target = child.geometry.as_ref().ok_or(GeoJsonError::NoGeometry)?;
                remove_first(geometries, target)
            }
            Some(other) => Err(GeoJsonError::NotMultiKind(other.kind())),
            None => Err(GeoJsonError::NoGeometry),
        }
    }
}

fn remove_first<T: PartialEq>(items: &mut Vec<T>, target: &T) -> Result<()> {
    let index = items
        .iter()
        .position(|item| item == target)
        .ok_or(GeoJsonError::NotFound)?;
    items.remove(index);
    Ok(())
}
