//! The GeoJSON geometry model: [`Position`], the [`Geometry`] sum type and its [`GeometryType`]
//! tag.

use std::fmt::Display;
use std::ops::Deref;
use std::str::FromStr;

use crate::error::GeoBsonError;

/// One coordinate tuple, conventionally `[longitude, latitude, (altitude)]`.
///
/// The codec does not enforce an arity or a value range. Valid longitude values are between -180
/// and 180 and valid latitude values are between -90 and 90, both inclusive; see
/// [`validate_ranges`][crate::validate::validate_ranges] to check them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position(Vec<f64>);

impl Position {
    /// Create a position from its ordinates.
    pub fn new(ordinates: Vec<f64>) -> Self {
        Self(ordinates)
    }

    /// The first ordinate, if any.
    pub fn longitude(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// The second ordinate, if any.
    pub fn latitude(&self) -> Option<f64> {
        self.0.get(1).copied()
    }

    /// The third ordinate, if any.
    pub fn altitude(&self) -> Option<f64> {
        self.0.get(2).copied()
    }

    /// Consume the position, returning its ordinates.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Position {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f64>> for Position {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl From<&[f64]> for Position {
    fn from(value: &[f64]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Position {
    fn from(value: [f64; N]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Position> for Vec<f64> {
    fn from(value: Position) -> Self {
        value.0
    }
}

/// The payload of a `MultiPoint` or `LineString`.
pub type PositionSequence = Vec<Position>;

/// The payload of a `MultiLineString` or `Polygon`: a list of paths.
pub type PathSequence = Vec<PositionSequence>;

/// The payload of a `MultiPolygon`.
pub type PolygonSequence = Vec<PathSequence>;

/// The geometry types defined by GeoJSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The value of the `type` key for this geometry type.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = GeoBsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let geometry_type = match s {
            "Point" => GeometryType::Point,
            "MultiPoint" => GeometryType::MultiPoint,
            "LineString" => GeometryType::LineString,
            "MultiLineString" => GeometryType::MultiLineString,
            "Polygon" => GeometryType::Polygon,
            "MultiPolygon" => GeometryType::MultiPolygon,
            "GeometryCollection" => GeometryType::GeometryCollection,
            _ => return Err(GeoBsonError::UnknownType(s.to_string())),
        };
        Ok(geometry_type)
    }
}

/// A GeoJSON geometry object.
///
/// Each variant carries exactly the payload its type needs, so a geometry can never hold
/// coordinates of the wrong depth for its tag. A `GeometryCollection` owns its members.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// `{ type: "Point", coordinates: [ 40, 5 ] }`
    Point(Position),
    /// `{ type: "MultiPoint", coordinates: [ [ -73.9580, 40.8003 ], [ -73.9498, 40.7968 ] ] }`
    MultiPoint(PositionSequence),
    /// `{ type: "LineString", coordinates: [ [ 40, 5 ], [ 41, 6 ] ] }`
    LineString(PositionSequence),
    /// `{ type: "MultiLineString", coordinates: [ [ [ -73.96943, 40.78519 ], [ -73.96082, 40.78095 ] ] ] }`
    MultiLineString(PathSequence),
    /// `{ type: "Polygon", coordinates: [ [ [ 0 , 0 ] , [ 3 , 6 ] , [ 6 , 1 ] , [ 0 , 0 ] ] ] }`
    Polygon(PathSequence),
    /// `{ type: "MultiPolygon", coordinates: [ [ [ [ -73.958, 40.8003 ], [ -73.9498, 40.7968 ], [ -73.958, 40.8003 ] ] ] ] }`
    MultiPolygon(PolygonSequence),
    /// `{ type: "GeometryCollection", geometries: [ ... ] }`
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Create a `Point` from a single position.
    ///
    /// ```
    /// use geobson::Geometry;
    ///
    /// let geom = Geometry::point([102.0, 0.5]);
    /// assert!(geom.is_point());
    /// assert!(!geom.is_multi_point());
    /// ```
    pub fn point(position: impl Into<Position>) -> Self {
        Geometry::Point(position.into())
    }

    /// Create a `MultiPoint` from a list of positions.
    pub fn multi_point(positions: PositionSequence) -> Self {
        Geometry::MultiPoint(positions)
    }

    /// Create a `LineString` from a list of positions.
    pub fn line_string(positions: PositionSequence) -> Self {
        Geometry::LineString(positions)
    }

    /// Create a `MultiLineString` from a list of lines.
    pub fn multi_line_string(lines: PathSequence) -> Self {
        Geometry::MultiLineString(lines)
    }

    /// Create a `Polygon` from a list of rings, exterior first.
    pub fn polygon(rings: PathSequence) -> Self {
        Geometry::Polygon(rings)
    }

    /// Create a `MultiPolygon` from a list of polygons.
    pub fn multi_polygon(polygons: PolygonSequence) -> Self {
        Geometry::MultiPolygon(polygons)
    }

    /// Create a `GeometryCollection` owning `geometries`.
    pub fn geometry_collection(geometries: Vec<Geometry>) -> Self {
        Geometry::GeometryCollection(geometries)
    }

    /// The tag written to, and read from, the `type` key.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns `true` if this is a `Point`.
    pub fn is_point(&self) -> bool {
        self.geometry_type() == GeometryType::Point
    }

    /// Returns `true` if this is a `MultiPoint`.
    pub fn is_multi_point(&self) -> bool {
        self.geometry_type() == GeometryType::MultiPoint
    }

    /// Returns `true` if this is a `LineString`.
    pub fn is_line_string(&self) -> bool {
        self.geometry_type() == GeometryType::LineString
    }

    /// Returns `true` if this is a `MultiLineString`.
    pub fn is_multi_line_string(&self) -> bool {
        self.geometry_type() == GeometryType::MultiLineString
    }

    /// Returns `true` if this is a `Polygon`.
    pub fn is_polygon(&self) -> bool {
        self.geometry_type() == GeometryType::Polygon
    }

    /// Returns `true` if this is a `MultiPolygon`.
    pub fn is_multi_polygon(&self) -> bool {
        self.geometry_type() == GeometryType::MultiPolygon
    }

    /// Returns `true` if this is a `GeometryCollection`.
    pub fn is_geometry_collection(&self) -> bool {
        self.geometry_type() == GeometryType::GeometryCollection
    }
}
