//! Read and write geometries as binary [BSON](https://bsonspec.org/) documents.

use bson::Document;

use crate::codec::{decode_with_options, encode, DecodeOptions};
use crate::error::{GeoBsonError, Result};
use crate::geometry::Geometry;

/// Encode a geometry and serialize it to BSON bytes.
pub fn to_bson_bytes(geom: &Geometry) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode(geom).to_writer(&mut buf)?;
    Ok(buf)
}

/// Parse BSON bytes and decode the document as a geometry.
pub fn from_bson_bytes(data: &[u8]) -> Result<Geometry> {
    from_bson_bytes_with_options(data, &DecodeOptions::default())
}

/// Parse BSON bytes and decode the document as a geometry with explicit [`DecodeOptions`].
pub fn from_bson_bytes_with_options(data: &[u8], options: &DecodeOptions) -> Result<Geometry> {
    if data.is_empty() {
        return Err(GeoBsonError::EmptyInput);
    }
    let mut reader = data;
    let doc = Document::from_reader(&mut reader)?;
    decode_with_options(&doc, options)
}
