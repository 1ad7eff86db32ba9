//! Convert to and from the [`geojson`] crate's geometry types.
//!
//! Both directions are lossless for the geometry itself. A `bbox` or foreign members on a
//! [`geojson::Geometry`] are dropped when reading.

pub use reader::geometry_from_geojson;
pub use writer::geometry_to_geojson;

mod reader;
mod writer;
