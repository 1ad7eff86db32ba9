//! Encode and decode [GeoJSON](https://geojson.org/) geometry objects to and from BSON and JSON
//! documents.
//!
//! A [`Geometry`] is encoded to a [`bson::Document`] with the `type` key first, followed by
//! `coordinates` (or `geometries` for a `GeometryCollection`). Decoding validates the nesting
//! depth of the payload against the declared type and reports where in the tree it failed.
//!
//! ```
//! use geobson::io::json::{from_json_str, to_json_string};
//! use geobson::Geometry;
//!
//! let geom = from_json_str(r#"{"type": "Point", "coordinates": [1, 2]}"#).unwrap();
//! assert_eq!(geom, Geometry::point([1., 2.]));
//! assert_eq!(
//!     to_json_string(&geom).unwrap(),
//!     r#"{"type":"Point","coordinates":[1.0,2.0]}"#
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use codec::{decode, encode, DecodeOptions};
pub use error::{GeoBsonError, Result, SequenceError};
pub use geometry::{
    Geometry, GeometryType, PathSequence, PolygonSequence, Position, PositionSequence,
};

pub mod codec;
pub mod error;
pub mod geometry;
pub mod io;
pub mod validate;
