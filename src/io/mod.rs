//! Byte and text boundaries for geometry documents, plus interoperability with the [`geo`] and
//! [`geojson`] crates.

pub mod bson;
pub mod geo;
pub mod geojson;
pub mod json;
