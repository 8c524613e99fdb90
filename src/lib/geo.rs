use crate::collection::FeatureCollection;
use crate::feature::{Feature, Geometry, Position};
use geo::{BoundingRect, Centroid};
use geo_types::{
    Geometry as GeoGeometry, GeometryCollection as GeoGeometryCollection,
    LineString as GeoLineString, MultiLineString as GeoMultiLineString,
    MultiPoint as GeoMultiPoint, MultiPolygon as GeoMultiPolygon, Point as GeoPoint,
    Polygon as GeoPolygon, Rect,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bounds {
    pub e: f64,
    pub n: f64,
    pub s: f64,
    pub w: f64,
}

impl Bounds {
    /// The smallest box containing both.
    pub fn merge(&self, other: &Bounds) -> Bounds {
        Bounds {
            e: self.e.max(other.e),
            n: self.n.max(other.n),
            s: self.s.min(other.s),
            w: self.w.min(other.w),
        }
    }
}

impl From<GeoPoint<f64>> for Location {
    fn from(point: GeoPoint<f64>) -> Location {
        Location {
            lat: point.y(),
            lon: point.x(),
        }
    }
}

impl From<Rect<f64>> for Bounds {
    fn from(rect: Rect<f64>) -> Bounds {
        Bounds {
            e: rect.max().x,
            n: rect.max().y,
            s: rect.min().y,
            w: rect.min().x,
        }
    }
}

fn line(positions: &[Position]) -> GeoLineString<f64> {
    GeoLineString::from(positions.to_vec())
}

// The first ring is the exterior, any further rings are holes.
fn polygon_from_rings(rings: &[Vec<Position>]) -> GeoPolygon<f64> {
    let mut rings = rings.iter();
    let exterior = match rings.next() {
        Some(ring) => line(ring),
        None => GeoLineString::new(vec![]),
    };
    let interiors = rings.map(|ring| line(ring)).collect();
    GeoPolygon::new(exterior, interiors)
}

impl From<&Geometry> for GeoGeometry<f64> {
    fn from(geometry: &Geometry) -> GeoGeometry<f64> {
        match geometry {
            Geometry::Point { coordinates } => GeoPoint::from(*coordinates).into(),
            Geometry::MultiPoint { coordinates } => {
                GeoMultiPoint::from(coordinates.clone()).into()
            }
            Geometry::LineString { coordinates } => line(coordinates).into(),
            Geometry::MultiLineString { coordinates } => {
                GeoMultiLineString::new(coordinates.iter().map(|l| line(l)).collect()).into()
            }
            Geometry::Polygon { coordinates } => polygon_from_rings(coordinates).into(),
            Geometry::MultiPolygon { coordinates } => GeoMultiPolygon::new(
                coordinates
                    .iter()
                    .map(|rings| polygon_from_rings(rings))
                    .collect(),
            )
            .into(),
            Geometry::GeometryCollection { geometries } => {
                let members: Vec<GeoGeometry<f64>> = geometries
                    .iter()
                    .map(|member| GeoGeometry::from(member))
                    .collect();
                GeoGeometry::GeometryCollection(GeoGeometryCollection(members))
            }
        }
    }
}

impl Feature {
    /// Geometric center of the feature, if it has a geometry.
    pub fn centroid(&self) -> Option<Location> {
        let geometry = GeoGeometry::from(self.geometry.as_ref()?);
        let point = geometry.centroid()?;
        Some(point.into())
    }

    /// The smallest east/north/south/west box around the feature.
    pub fn bounds(&self) -> Option<Bounds> {
        let geometry = GeoGeometry::from(self.geometry.as_ref()?);
        let rect = geometry.bounding_rect()?;
        Some(rect.into())
    }
}

impl FeatureCollection {
    /// Centroid over all member geometries. Bare features are skipped;
    /// an empty or geometry-less collection has no centroid.
    pub fn centroid(&self) -> Option<Location> {
        let members: Vec<GeoGeometry<f64>> = self
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .map(|geometry| GeoGeometry::from(geometry))
            .collect();
        if members.is_empty() {
            return None;
        }
        let point = GeoGeometryCollection(members).centroid()?;
        Some(point.into())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.iter()
            .filter_map(Feature::bounds)
            .reduce(|merged, next| merged.merge(&next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_location(location: Location, lon: f64, lat: f64) {
        assert_relative_eq!(location.lon, lon, epsilon = 1e-9);
        assert_relative_eq!(location.lat, lat, epsilon = 1e-9);
    }

    #[test]
    fn point_centroid_is_the_point_itself() {
        let centroid = Feature::point(13.4, 52.5).centroid().unwrap();
        assert_location(centroid, 13.4, 52.5);
    }

    #[test]
    fn line_centroid_weights_the_segments() {
        let line =
            Feature::line_strings(&[vec![(9.0, 50.0), (9.0, 51.0), (10.0, 51.0)]]).remove(0);
        let centroid = line.centroid().unwrap();
        assert_location(centroid, 9.25, 50.75);
    }

    #[test]
    fn polygon_bounds_span_the_outline() {
        let polygon =
            Feature::polygons(&[vec![(5.0, 49.0), (6.0, 50.0), (7.0, 49.0)]]).remove(0);
        let bounds = polygon.bounds().unwrap();
        assert_eq!(
            bounds,
            Bounds {
                e: 7.0,
                n: 50.0,
                s: 49.0,
                w: 5.0,
            }
        );
    }

    #[test]
    fn polygon_centroid_closes_the_ring() {
        let polygon =
            Feature::polygons(&[vec![(5.0, 49.0), (6.0, 50.0), (7.0, 49.0)]]).remove(0);
        let centroid = polygon.centroid().unwrap();
        assert_location(centroid, 6.0, 49.0 + 1.0 / 3.0);
    }

    #[test]
    fn multi_polygon_bounds_cover_all_parts() {
        let multi = Feature::multi_polygons(&[vec![
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
            vec![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0)],
        ]])
        .remove(0);
        assert_eq!(
            multi.bounds().unwrap(),
            Bounds {
                e: 6.0,
                n: 6.0,
                s: 0.0,
                w: 0.0,
            }
        );
    }

    #[test]
    fn geometry_collections_average_their_members() {
        let members = vec![Feature::point(0.0, 0.0), Feature::point(2.0, 4.0)];
        let collection = Feature::collection(&members).unwrap();
        assert_location(collection.centroid().unwrap(), 1.0, 2.0);
    }

    #[test]
    fn bare_features_have_no_geo_info() {
        let bare = Feature::new();
        assert!(bare.centroid().is_none());
        assert!(bare.bounds().is_none());
    }

    #[test]
    fn merge_expands_in_every_direction() {
        let a = Bounds {
            e: 2.0,
            n: 2.0,
            s: 1.0,
            w: 1.0,
        };
        let b = Bounds {
            e: 3.0,
            n: 1.5,
            s: 0.5,
            w: 2.0,
        };
        assert_eq!(
            a.merge(&b),
            Bounds {
                e: 3.0,
                n: 2.0,
                s: 0.5,
                w: 1.0,
            }
        );
    }

    #[test]
    fn collection_bounds_skip_bare_features() {
        let mut collection = FeatureCollection::new();
        collection.extend(Feature::points(&[(1.0, 1.0), (3.0, 5.0)]));
        collection.push(Feature::new());
        assert_eq!(
            collection.bounds().unwrap(),
            Bounds {
                e: 3.0,
                n: 5.0,
                s: 1.0,
                w: 1.0,
            }
        );
    }

    #[test]
    fn collection_centroid_spans_the_members() {
        let mut collection = FeatureCollection::new();
        collection.extend(Feature::points(&[(0.0, 0.0), (2.0, 4.0)]));
        assert_location(collection.centroid().unwrap(), 1.0, 2.0);
    }

    #[test]
    fn empty_collections_have_no_geo_info() {
        let collection = FeatureCollection::new();
        assert!(collection.centroid().is_none());
        assert!(collection.bounds().is_none());
    }
}
