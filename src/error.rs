//! Defines [`GeoBsonError`], representing all errors returned by this crate.

use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// The structural variants mirror the nesting levels of a GeoJSON geometry. Only the level that
/// rejected a value renders it; the levels above record the index of the failing element and box
/// the error from below, so walking [`GeoBsonError::root_cause`] leads from the outermost container
/// down to the offending leaf.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoBsonError {
    /// The document has no `type` key.
    #[error("type property not defined")]
    MissingType,

    /// The `type` key is present but does not hold a string.
    #[error("type property not a string, got {0}")]
    InvalidType(String),

    /// The `type` key holds a string that is not one of the seven geometry types.
    #[error("unknown geometry type {0:?}")]
    UnknownType(String),

    /// A value that should have been a document (key/value map) was something else.
    #[error("not a valid geometry document, got {0}")]
    InvalidDocument(String),

    /// A position is not a sequence, or one of its elements is not a number.
    #[error("not a valid position, got {0}")]
    InvalidPosition(String),

    /// A sequence of positions is malformed.
    #[error("not a valid set of positions, {0}")]
    InvalidPositionSequence(#[source] SequenceError),

    /// A sequence of paths (line strings or polygon rings) is malformed.
    #[error("not a valid path, {0}")]
    InvalidPathSequence(#[source] SequenceError),

    /// A sequence of polygons is malformed.
    #[error("not a valid polygon, {0}")]
    InvalidPolygonSequence(#[source] SequenceError),

    /// A `geometries` member is not a document, or failed to decode.
    #[error("not a valid set of geometries, {0}")]
    InvalidGeometrySequence(#[source] SequenceError),

    /// Geometry collections are nested deeper than the configured ceiling.
    #[error("geometry nesting exceeds the maximum depth of {0}")]
    DepthLimitExceeded(usize),

    /// A position lies outside the valid longitude/latitude range.
    #[error("position ({longitude}, {latitude}) is outside [-180, 180] x [-90, 90]")]
    OutOfRange { longitude: f64, latitude: f64 },

    /// A position has fewer than the two ordinates an operation requires.
    #[error("position needs at least two ordinates, got {0}")]
    TooFewOrdinates(usize),

    /// Returned when asked to decode zero bytes.
    #[error("empty input")]
    EmptyInput,

    /// [bson::ser::Error]
    #[error(transparent)]
    BsonSerError(#[from] bson::ser::Error),

    /// [bson::de::Error]
    #[error(transparent)]
    BsonDeError(#[from] bson::de::Error),

    /// [bson::extjson::de::Error]
    #[error(transparent)]
    ExtJsonError(#[from] bson::extjson::de::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// How one level of a nested sequence failed.
#[derive(Error, Debug)]
pub enum SequenceError {
    /// The value at this level is not a sequence. Holds the rendered value, or `missing` for an
    /// absent key.
    #[error("got {0}")]
    NotASequence(String),

    /// The element at `index` failed its own validation.
    #[error("element {index} is invalid")]
    Element {
        index: usize,
        #[source]
        source: Box<GeoBsonError>,
    },
}

impl GeoBsonError {
    /// The innermost error in a chain of nested decode failures.
    ///
    /// For errors without a nested source this is `self`.
    pub fn root_cause(&self) -> &GeoBsonError {
        let mut current = self;
        while let Some(inner) = current.nested() {
            current = inner;
        }
        current
    }

    fn nested(&self) -> Option<&GeoBsonError> {
        match self {
            GeoBsonError::InvalidPositionSequence(SequenceError::Element { source, .. })
            | GeoBsonError::InvalidPathSequence(SequenceError::Element { source, .. })
            | GeoBsonError::InvalidPolygonSequence(SequenceError::Element { source, .. })
            | GeoBsonError::InvalidGeometrySequence(SequenceError::Element { source, .. }) => {
                Some(&**source)
            }
            _ => None,
        }
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoBsonError>;
