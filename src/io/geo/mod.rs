//! Convert to and from [`geo`] geometries.

mod scalar;

pub use scalar::{
    geometry_from_geo, geometry_to_geo, line_string_to_geo, polygon_to_geo, position_to_geo,
};
