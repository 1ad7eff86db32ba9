use geojson::{LineStringType, PolygonType, Value};

use crate::geometry::{Geometry, PathSequence, Position, PositionSequence};

fn position(point_type: &geojson::Position) -> Position {
    Position::from(point_type.as_slice())
}

fn positions(line_string_type: &LineStringType) -> PositionSequence {
    line_string_type.iter().map(position).collect()
}

fn paths(polygon_type: &PolygonType) -> PathSequence {
    polygon_type.iter().map(positions).collect()
}

/// Convert a [`geojson::Geometry`] into a [`Geometry`].
pub fn geometry_from_geojson(geom: &geojson::Geometry) -> Geometry {
    match geom.value {
        Value::Point(ref point_type) => Geometry::Point(position(point_type)),
        Value::MultiPoint(ref geometry) => Geometry::MultiPoint(positions(geometry)),
        Value::LineString(ref geometry) => Geometry::LineString(positions(geometry)),
        Value::MultiLineString(ref geometry) => {
            Geometry::MultiLineString(geometry.iter().map(positions).collect())
        }
        Value::Polygon(ref geometry) => Geometry::Polygon(paths(geometry)),
        Value::MultiPolygon(ref geometry) => {
            Geometry::MultiPolygon(geometry.iter().map(paths).collect())
        }
        Value::GeometryCollection(ref collection) => {
            Geometry::GeometryCollection(collection.iter().map(geometry_from_geojson).collect())
        }
    }
}

impl From<&geojson::Geometry> for Geometry {
    fn from(value: &geojson::Geometry) -> Self {
        geometry_from_geojson(value)
    }
}

impl From<geojson::Geometry> for Geometry {
    fn from(value: geojson::Geometry) -> Self {
        geometry_from_geojson(&value)
    }
}
