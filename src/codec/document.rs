//! Read-only views over the document trees produced by the [`bson`] and [`serde_json`] crates.
//!
//! Decoding only ever needs to ask a node whether it is a string, a number, a sequence or a map, so
//! both trees are adapted to the same two traits and the decode path is written once.

use std::fmt::Display;

use bson::{Bson, Document};
use serde_json::{Map, Value};

/// A node in a structured document tree.
pub trait DocumentValue: Display + Sized {
    /// The map type nested documents are stored as.
    type Map: DocumentMap<Value = Self>;

    /// Returns the string if this node is a string leaf.
    fn as_str(&self) -> Option<&str>;

    /// Returns the value if this node is numeric.
    ///
    /// Doubles and every integer width are accepted and widened to `f64`. Everything else,
    /// including numeric strings and booleans, is rejected.
    fn as_number(&self) -> Option<f64>;

    /// Returns the elements if this node is an ordered sequence.
    fn as_sequence(&self) -> Option<&[Self]>;

    /// Returns the map if this node is a nested document.
    fn as_map(&self) -> Option<&Self::Map>;
}

/// A string-keyed map in a structured document tree.
pub trait DocumentMap {
    type Value: DocumentValue;

    fn get_value(&self, key: &str) -> Option<&Self::Value>;
}

impl DocumentValue for Bson {
    type Map = Document;

    fn as_str(&self) -> Option<&str> {
        match self {
            Bson::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match *self {
            Bson::Double(f) => Some(f),
            Bson::Int32(i) => Some(i as f64),
            Bson::Int64(i) => Some(i as f64),
            _ => None,
        }
    }

    fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Bson::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    fn as_map(&self) -> Option<&Self::Map> {
        match self {
            Bson::Document(doc) => Some(doc),
            _ => None,
        }
    }
}

impl DocumentMap for Document {
    type Value = Bson;

    fn get_value(&self, key: &str) -> Option<&Self::Value> {
        self.get(key)
    }
}

impl DocumentValue for Value {
    type Map = Map<String, Value>;

    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Value::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    fn as_map(&self) -> Option<&Self::Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl DocumentMap for Map<String, Value> {
    type Value = Value;

    fn get_value(&self, key: &str) -> Option<&Self::Value> {
        self.get(key)
    }
}
