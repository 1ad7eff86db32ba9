use crate::error::{GeoBsonError, Result};
use crate::geometry::{Geometry, PathSequence, Position, PositionSequence};

/// Convert a [`Position`] to a [`geo::Coord`].
///
/// Only the first two ordinates will be kept. Positions with fewer than two ordinates fail with
/// [`GeoBsonError::TooFewOrdinates`].
pub fn position_to_geo(position: &Position) -> Result<geo::Coord> {
    match position[..] {
        [x, y, ..] => Ok(geo::Coord { x, y }),
        _ => Err(GeoBsonError::TooFewOrdinates(position.len())),
    }
}

/// Convert a sequence of positions to a [`geo::LineString`].
pub fn line_string_to_geo(positions: &[Position]) -> Result<geo::LineString> {
    positions
        .iter()
        .map(position_to_geo)
        .collect::<Result<Vec<_>>>()
        .map(geo::LineString::new)
}

/// Convert a list of rings to a [`geo::Polygon`].
///
/// The first ring is the exterior and the remaining rings are interiors. [`geo::Polygon::new`]
/// closes any ring that is not already closed.
pub fn polygon_to_geo(rings: &[PositionSequence]) -> Result<geo::Polygon> {
    let mut rings = rings.iter().map(|ring| line_string_to_geo(ring));
    let exterior = rings
        .next()
        .transpose()?
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(geo::Polygon::new(exterior, interiors))
}

/// Convert a [`Geometry`] to a [`geo::Geometry`].
///
/// Only the first two ordinates of each position will be kept.
pub fn geometry_to_geo(geometry: &Geometry) -> Result<geo::Geometry> {
    let geom = match geometry {
        Geometry::Point(position) => geo::Geometry::Point(geo::Point(position_to_geo(position)?)),
        Geometry::MultiPoint(positions) => geo::Geometry::MultiPoint(geo::MultiPoint::new(
            positions
                .iter()
                .map(|position| position_to_geo(position).map(geo::Point))
                .collect::<Result<_>>()?,
        )),
        Geometry::LineString(positions) => {
            geo::Geometry::LineString(line_string_to_geo(positions)?)
        }
        Geometry::MultiLineString(lines) => {
            geo::Geometry::MultiLineString(geo::MultiLineString::new(
                lines
                    .iter()
                    .map(|line| line_string_to_geo(line))
                    .collect::<Result<_>>()?,
            ))
        }
        Geometry::Polygon(rings) => geo::Geometry::Polygon(polygon_to_geo(rings)?),
        Geometry::MultiPolygon(polygons) => geo::Geometry::MultiPolygon(geo::MultiPolygon::new(
            polygons
                .iter()
                .map(|rings| polygon_to_geo(rings))
                .collect::<Result<_>>()?,
        )),
        Geometry::GeometryCollection(geometries) => {
            geo::Geometry::GeometryCollection(geo::GeometryCollection::new_from(
                geometries
                    .iter()
                    .map(geometry_to_geo)
                    .collect::<Result<_>>()?,
            ))
        }
    };
    Ok(geom)
}

fn coord_from_geo(coord: geo::Coord) -> Position {
    Position::from([coord.x, coord.y])
}

fn line_string_from_geo(line_string: &geo::LineString) -> PositionSequence {
    line_string.0.iter().copied().map(coord_from_geo).collect()
}

fn polygon_from_geo(polygon: &geo::Polygon) -> PathSequence {
    if polygon.exterior().0.is_empty() && polygon.interiors().is_empty() {
        return vec![];
    }
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(line_string_from_geo)
        .collect()
}

/// Convert a [`geo::Geometry`] to a [`Geometry`].
///
/// `Line` becomes a `LineString`; `Rect` and `Triangle` become a `Polygon`.
pub fn geometry_from_geo(geometry: &geo::Geometry) -> Geometry {
    match geometry {
        geo::Geometry::Point(point) => Geometry::Point(coord_from_geo(point.0)),
        geo::Geometry::Line(line) => {
            Geometry::LineString(vec![coord_from_geo(line.start), coord_from_geo(line.end)])
        }
        geo::Geometry::LineString(line_string) => {
            Geometry::LineString(line_string_from_geo(line_string))
        }
        geo::Geometry::Polygon(polygon) => Geometry::Polygon(polygon_from_geo(polygon)),
        geo::Geometry::MultiPoint(multi_point) => Geometry::MultiPoint(
            multi_point
                .0
                .iter()
                .map(|point| coord_from_geo(point.0))
                .collect(),
        ),
        geo::Geometry::MultiLineString(multi_line_string) => Geometry::MultiLineString(
            multi_line_string
                .0
                .iter()
                .map(line_string_from_geo)
                .collect(),
        ),
        geo::Geometry::MultiPolygon(multi_polygon) => {
            Geometry::MultiPolygon(multi_polygon.0.iter().map(polygon_from_geo).collect())
        }
        geo::Geometry::GeometryCollection(collection) => Geometry::GeometryCollection(
            collection.0.iter().map(geometry_from_geo).collect(),
        ),
        geo::Geometry::Rect(rect) => Geometry::Polygon(polygon_from_geo(&rect.to_polygon())),
        geo::Geometry::Triangle(triangle) => {
            Geometry::Polygon(polygon_from_geo(&triangle.to_polygon()))
        }
    }
}

impl TryFrom<&Geometry> for geo::Geometry {
    type Error = GeoBsonError;

    fn try_from(value: &Geometry) -> Result<Self> {
        geometry_to_geo(value)
    }
}

impl TryFrom<Geometry> for geo::Geometry {
    type Error = GeoBsonError;

    fn try_from(value: Geometry) -> Result<Self> {
        geometry_to_geo(&value)
    }
}

impl From<&geo::Geometry> for Geometry {
    fn from(value: &geo::Geometry) -> Self {
        geometry_from_geo(value)
    }
}

impl From<geo::Geometry> for Geometry {
    fn from(value: geo::Geometry) -> Self {
        geometry_from_geo(&value)
    }
}
