//! Read and write geometries as JSON text.
//!
//! Writing goes through relaxed [Extended JSON], so every ordinate keeps its fractional part:
//! `{"type":"Point","coordinates":[1.0,2.0]}`.
//!
//! Non-finite ordinates have no plain JSON form and are written wrapped, e.g.
//! `{"$numberDouble":"Infinity"}`. Only [`from_extjson_str`] reads them back; [`from_json_str`]
//! rejects them as invalid positions.
//!
//! [Extended JSON]: https://www.mongodb.com/docs/manual/reference/mongodb-extended-json/

use bson::Bson;
use serde_json::Value;

use crate::codec::{decode_value_with_options, encode_value, DecodeOptions};
use crate::error::Result;
use crate::geometry::Geometry;

/// Encode a geometry as a [`serde_json::Value`].
pub fn to_json_value(geom: &Geometry) -> Value {
    encode_value(geom).into_relaxed_extjson()
}

/// Encode a geometry as compact JSON text.
pub fn to_json_string(geom: &Geometry) -> Result<String> {
    Ok(serde_json::to_string(&to_json_value(geom))?)
}

/// Parse plain JSON text and decode it as a geometry.
pub fn from_json_str(s: &str) -> Result<Geometry> {
    from_json_str_with_options(s, &DecodeOptions::default())
}

/// Like [`from_json_str`], with explicit [`DecodeOptions`].
pub fn from_json_str_with_options(s: &str, options: &DecodeOptions) -> Result<Geometry> {
    let value: Value = serde_json::from_str(s)?;
    decode_value_with_options(&value, options)
}

/// Parse canonical or relaxed Extended JSON text and decode it as a geometry.
///
/// Unlike [`from_json_str`], wrapped numbers such as `{"$numberInt": "1"}` are accepted as
/// ordinates.
pub fn from_extjson_str(s: &str) -> Result<Geometry> {
    from_extjson_str_with_options(s, &DecodeOptions::default())
}

/// Like [`from_extjson_str`], with explicit [`DecodeOptions`].
pub fn from_extjson_str_with_options(s: &str, options: &DecodeOptions) -> Result<Geometry> {
    let value: Value = serde_json::from_str(s)?;
    let bson = Bson::try_from(value)?;
    decode_value_with_options(&bson, options)
}
