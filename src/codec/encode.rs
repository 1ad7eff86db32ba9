//! Project a [`Geometry`] into its canonical document shape.

use bson::{Bson, Document};

use crate::geometry::{Geometry, Position};

/// Encode a geometry as a document.
///
/// The `type` key always comes first, followed by `coordinates`, or by `geometries` for a
/// `GeometryCollection`. The key that does not apply is left out rather than written as null.
/// Every ordinate is written as a double.
///
/// ```
/// use bson::doc;
/// use geobson::codec::encode;
/// use geobson::Geometry;
///
/// let doc = encode(&Geometry::point([1., 2.]));
/// assert_eq!(doc, doc! { "type": "Point", "coordinates": [1.0, 2.0] });
/// ```
pub fn encode(geom: &Geometry) -> Document {
    let mut doc = Document::new();
    doc.insert("type", geom.geometry_type().as_str());

    match geom {
        Geometry::Point(position) => {
            doc.insert("coordinates", encode_position(position));
        }
        Geometry::MultiPoint(positions) | Geometry::LineString(positions) => {
            doc.insert("coordinates", encode_positions(positions));
        }
        Geometry::MultiLineString(paths) | Geometry::Polygon(paths) => {
            doc.insert("coordinates", encode_paths(paths));
        }
        Geometry::MultiPolygon(polygons) => {
            let polygons = polygons.iter().map(|paths| encode_paths(paths)).collect();
            doc.insert("coordinates", Bson::Array(polygons));
        }
        Geometry::GeometryCollection(geometries) => {
            let geometries = geometries.iter().map(encode_value).collect();
            doc.insert("geometries", Bson::Array(geometries));
        }
    }

    doc
}

/// Encode a geometry as a document-valued [`Bson`].
pub fn encode_value(geom: &Geometry) -> Bson {
    Bson::Document(encode(geom))
}

fn encode_position(position: &Position) -> Bson {
    Bson::Array(position.iter().copied().map(Bson::Double).collect())
}

fn encode_positions(positions: &[Position]) -> Bson {
    Bson::Array(positions.iter().map(encode_position).collect())
}

fn encode_paths(paths: &[Vec<Position>]) -> Bson {
    Bson::Array(paths.iter().map(|path| encode_positions(path)).collect())
}
