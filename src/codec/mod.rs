//! Encode geometries to, and decode them from, structured document trees.
//!
//! [`encode`] always produces a [`bson::Document`]. [`decode`] accepts any tree that implements
//! [`DocumentMap`], which covers both [`bson::Document`] and [`serde_json::Map`].

pub use decode::{
    decode, decode_path_sequence, decode_polygon_sequence, decode_position,
    decode_position_sequence, decode_value, decode_value_with_options, decode_with_options,
    DecodeOptions, DEFAULT_MAX_DEPTH,
};
pub use document::{DocumentMap, DocumentValue};
pub use encode::{encode, encode_value};

mod decode;
mod document;
mod encode;

use bson::Document;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geometry::Geometry;

/// Serializes the canonical document produced by [`encode`].
///
/// Ordinates are written as doubles. Serializers without a representation for non-finite floats
/// write them as they see fit (`serde_json` writes `null`), so such geometries only round-trip
/// through BSON or [`from_extjson_str`](crate::io::json::from_extjson_str).
impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

/// Deserializes a document and validates it with [`decode`].
///
/// The input is first read into a [`bson::Document`], so numbers are limited to what BSON can hold:
/// integers above `i64::MAX` are rejected here even though
/// [`from_json_str`](crate::io::json::from_json_str) accepts them as doubles.
impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = Document::deserialize(deserializer)?;
        decode(&doc).map_err(D::Error::custom)
    }
}
