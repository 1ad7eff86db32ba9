//! Optional range validation for decoded geometries.
//!
//! Decoding only checks the shape of a document. Callers that need coordinates to be valid
//! longitude/latitude pairs run [`validate_ranges`] as a separate pass.

use crate::error::{GeoBsonError, Result};
use crate::geometry::{Geometry, Position};

pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

/// Check that every position in `geom` has a longitude in [-180, 180] and a latitude in [-90, 90].
///
/// Fails on the first position, in document order, that has fewer than two ordinates or lies out
/// of range. Altitude is not checked.
pub fn validate_ranges(geom: &Geometry) -> Result<()> {
    match geom {
        Geometry::Point(position) => validate_position(position),
        Geometry::MultiPoint(positions) | Geometry::LineString(positions) => {
            positions.iter().try_for_each(validate_position)
        }
        Geometry::MultiLineString(paths) | Geometry::Polygon(paths) => paths
            .iter()
            .flatten()
            .try_for_each(validate_position),
        Geometry::MultiPolygon(polygons) => polygons
            .iter()
            .flatten()
            .flatten()
            .try_for_each(validate_position),
        Geometry::GeometryCollection(geometries) => {
            geometries.iter().try_for_each(validate_ranges)
        }
    }
}

fn validate_position(position: &Position) -> Result<()> {
    let (longitude, latitude) = match position[..] {
        [longitude, latitude, ..] => (longitude, latitude),
        _ => return Err(GeoBsonError::TooFewOrdinates(position.len())),
    };
    if LONGITUDE_RANGE.contains(&longitude) && LATITUDE_RANGE.contains(&latitude) {
        Ok(())
    } else {
        Err(GeoBsonError::OutOfRange {
            longitude,
            latitude,
        })
    }
}
