use geojson::Value;

use crate::geometry::{Geometry, Position};

fn point_type(position: &Position) -> geojson::Position {
    position.to_vec()
}

fn line_string_type(positions: &[Position]) -> Vec<geojson::Position> {
    positions.iter().map(point_type).collect()
}

fn polygon_type(paths: &[Vec<Position>]) -> geojson::PolygonType {
    paths.iter().map(|path| line_string_type(path)).collect()
}

/// Convert a [`Geometry`] into a [`geojson::Geometry`] with no bbox or foreign members.
pub fn geometry_to_geojson(geom: &Geometry) -> geojson::Geometry {
    let value = match geom {
        Geometry::Point(position) => Value::Point(point_type(position)),
        Geometry::MultiPoint(positions) => Value::MultiPoint(line_string_type(positions)),
        Geometry::LineString(positions) => Value::LineString(line_string_type(positions)),
        Geometry::MultiLineString(paths) => Value::MultiLineString(polygon_type(paths)),
        Geometry::Polygon(paths) => Value::Polygon(polygon_type(paths)),
        Geometry::MultiPolygon(polygons) => Value::MultiPolygon(
            polygons
                .iter()
                .map(|paths| polygon_type(paths))
                .collect(),
        ),
        Geometry::GeometryCollection(geometries) => {
            Value::GeometryCollection(geometries.iter().map(geometry_to_geojson).collect())
        }
    };
    geojson::Geometry::new(value)
}

impl From<&Geometry> for geojson::Geometry {
    fn from(value: &Geometry) -> Self {
        geometry_to_geojson(value)
    }
}

impl From<Geometry> for geojson::Geometry {
    fn from(value: Geometry) -> Self {
        geometry_to_geojson(&value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::geometry_from_geojson;
    use crate::test::geometries;

    #[test]
    fn to_geojson_value() {
        let geom = geojson::Geometry::from(&geometries::line_string());
        assert_eq!(
            geom.value,
            Value::LineString(vec![vec![1., 2.], vec![3., 4.]])
        );
        assert!(geom.bbox.is_none());
    }

    #[test]
    fn round_trip() {
        for geom in geometries::all() {
            let converted = geometry_to_geojson(&geom);
            assert_eq!(geometry_from_geojson(&converted), geom);
        }
    }

    #[test]
    fn three_dimensional_positions_are_kept() {
        let geom = geojson::Geometry::from(Geometry::point([1., 2., 3.]));
        assert_eq!(geom.value, Value::Point(vec![1., 2., 3.]));
    }
}
