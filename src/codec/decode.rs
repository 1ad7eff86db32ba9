//! Validate a document against the shape its `type` declares and build a [`Geometry`] from it.

use log::{debug, trace, warn};

use crate::codec::document::{DocumentMap, DocumentValue};
use crate::error::{GeoBsonError, Result, SequenceError};
use crate::geometry::{
    Geometry, GeometryType, PathSequence, PolygonSequence, Position, PositionSequence,
};

/// Default ceiling for nested `GeometryCollection`s. A top-level geometry has depth 1.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Options controlling [`decode_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// The deepest level of `GeometryCollection` nesting accepted. Documents nested deeper fail
    /// with [`GeoBsonError::DepthLimitExceeded`] instead of recursing further.
    pub max_depth: usize,
}

impl DecodeOptions {
    /// Equivalent to [`DecodeOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`DecodeOptions::max_depth`].
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decode a geometry document using [`DecodeOptions::default`].
///
/// ```
/// use bson::doc;
/// use geobson::codec::decode;
///
/// let geom = decode(&doc! { "type": "Point", "coordinates": [102.0, 0.5] }).unwrap();
/// assert!(geom.is_point());
/// ```
pub fn decode<M: DocumentMap>(doc: &M) -> Result<Geometry> {
    decode_with_options(doc, &DecodeOptions::default())
}

/// Decode a geometry document.
///
/// Decoding is all-or-nothing: if any nested value fails validation no geometry is returned.
pub fn decode_with_options<M: DocumentMap>(doc: &M, options: &DecodeOptions) -> Result<Geometry> {
    decode_geometry(doc, options, 1).map_err(|err| {
        debug!("failed to decode geometry: {err}");
        err
    })
}

/// Decode a document-tree node that must itself be a geometry document.
pub fn decode_value<V: DocumentValue>(value: &V) -> Result<Geometry> {
    decode_value_with_options(value, &DecodeOptions::default())
}

/// Like [`decode_value`], with explicit [`DecodeOptions`].
pub fn decode_value_with_options<V: DocumentValue>(
    value: &V,
    options: &DecodeOptions,
) -> Result<Geometry> {
    match value.as_map() {
        Some(doc) => decode_with_options(doc, options),
        None => Err(GeoBsonError::InvalidDocument(value.to_string())),
    }
}

fn decode_geometry<M: DocumentMap>(
    doc: &M,
    options: &DecodeOptions,
    depth: usize,
) -> Result<Geometry> {
    if depth > options.max_depth {
        warn!(
            "geometry nesting exceeds the maximum depth of {}",
            options.max_depth
        );
        return Err(GeoBsonError::DepthLimitExceeded(options.max_depth));
    }

    let type_value = doc.get_value("type").ok_or(GeoBsonError::MissingType)?;
    let type_name = type_value
        .as_str()
        .ok_or_else(|| GeoBsonError::InvalidType(type_value.to_string()))?;
    let geometry_type: GeometryType = type_name.parse()?;

    let coordinates = doc.get_value("coordinates");
    let geometry = match geometry_type {
        GeometryType::Point => Geometry::Point(decode_position(coordinates)?),
        GeometryType::MultiPoint => Geometry::MultiPoint(decode_position_sequence(coordinates)?),
        GeometryType::LineString => Geometry::LineString(decode_position_sequence(coordinates)?),
        GeometryType::MultiLineString => {
            Geometry::MultiLineString(decode_path_sequence(coordinates)?)
        }
        GeometryType::Polygon => Geometry::Polygon(decode_path_sequence(coordinates)?),
        GeometryType::MultiPolygon => {
            Geometry::MultiPolygon(decode_polygon_sequence(coordinates)?)
        }
        GeometryType::GeometryCollection => Geometry::GeometryCollection(decode_geometries(
            doc.get_value("geometries"),
            options,
            depth,
        )?),
    };
    Ok(geometry)
}

/// Render a value for an error message; an absent key renders as `missing`.
fn describe<V: DocumentValue>(value: Option<&V>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "missing".to_string(),
    }
}

/// A single position: a sequence whose elements are all numbers.
pub fn decode_position<V: DocumentValue>(value: Option<&V>) -> Result<Position> {
    let ordinates = value
        .and_then(DocumentValue::as_sequence)
        .ok_or_else(|| GeoBsonError::InvalidPosition(describe(value)))?;

    ordinates
        .iter()
        .map(|ordinate| {
            ordinate
                .as_number()
                .ok_or_else(|| GeoBsonError::InvalidPosition(ordinate.to_string()))
        })
        .collect::<Result<Vec<f64>>>()
        .map(Position::new)
}

/// A sequence of positions, as held by `MultiPoint` and `LineString`.
pub fn decode_position_sequence<V: DocumentValue>(value: Option<&V>) -> Result<PositionSequence> {
    decode_sequence(
        value,
        decode_position::<V>,
        GeoBsonError::InvalidPositionSequence,
    )
}

/// A sequence of paths, as held by `MultiLineString` and `Polygon`.
pub fn decode_path_sequence<V: DocumentValue>(value: Option<&V>) -> Result<PathSequence> {
    decode_sequence(
        value,
        decode_position_sequence::<V>,
        GeoBsonError::InvalidPathSequence,
    )
}

/// A sequence of polygons, as held by `MultiPolygon`.
pub fn decode_polygon_sequence<V: DocumentValue>(value: Option<&V>) -> Result<PolygonSequence> {
    decode_sequence(
        value,
        decode_path_sequence::<V>,
        GeoBsonError::InvalidPolygonSequence,
    )
}

/// Apply `decode_element` to every element of a sequence, stopping at the first failure.
///
/// Both "not a sequence" and "an element failed" are reported through `make_error`. Only the former
/// renders the value; the latter carries the element's index and its error.
fn decode_sequence<V, T, D, E>(
    value: Option<&V>,
    decode_element: D,
    make_error: E,
) -> Result<Vec<T>>
where
    V: DocumentValue,
    D: Fn(Option<&V>) -> Result<T>,
    E: Fn(SequenceError) -> GeoBsonError,
{
    let elements = value
        .and_then(DocumentValue::as_sequence)
        .ok_or_else(|| make_error(SequenceError::NotASequence(describe(value))))?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            decode_element(Some(element)).map_err(|err| {
                make_error(SequenceError::Element {
                    index,
                    source: Box::new(err),
                })
            })
        })
        .collect()
}

/// The members of a `GeometryCollection`, each decoded recursively.
fn decode_geometries<V: DocumentValue>(
    value: Option<&V>,
    options: &DecodeOptions,
    depth: usize,
) -> Result<Vec<Geometry>> {
    let invalid_member = |index: usize, err: GeoBsonError| {
        GeoBsonError::InvalidGeometrySequence(SequenceError::Element {
            index,
            source: Box::new(err),
        })
    };

    let members = value.and_then(DocumentValue::as_sequence).ok_or_else(|| {
        GeoBsonError::InvalidGeometrySequence(SequenceError::NotASequence(describe(value)))
    })?;

    let mut geometries = Vec::with_capacity(members.len());
    for (idx, member) in members.iter().enumerate() {
        trace!("decoding geometry collection member {idx} at depth {depth}");
        let doc = member.as_map().ok_or_else(|| {
            invalid_member(idx, GeoBsonError::InvalidDocument(member.to_string()))
        })?;
        let geometry =
            decode_geometry(doc, options, depth + 1).map_err(|err| invalid_member(idx, err))?;
        geometries.push(geometry);
    }
    Ok(geometries)
}

#[cfg(test)]
mod test {
    use bson::{bson, doc, Bson};
    use serde_json::json;

    use super::*;
    use crate::test::geometries;

    #[test]
    fn decode_point() {
        let geom = decode(&doc! { "type": "Point", "coordinates": [102.0, 0.5] }).unwrap();
        assert_eq!(geom, Geometry::point([102.0, 0.5]));
    }

    #[test]
    fn decode_multi_point_and_line_string() {
        let geom = decode(&doc! { "type": "MultiPoint", "coordinates": [[1, 2], [3, 4]] }).unwrap();
        assert!(geom.is_multi_point());
        assert_eq!(geom, geometries::multi_point());

        let geom = decode(&doc! { "type": "LineString", "coordinates": [[1, 2], [3, 4]] }).unwrap();
        assert!(geom.is_line_string());
        assert_eq!(geom, geometries::line_string());
    }

    #[test]
    fn decode_multi_line_string_and_polygon() {
        let coords = bson!([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]);

        let geom = decode(&doc! { "type": "MultiLineString", "coordinates": coords.clone() }).unwrap();
        assert_eq!(geom, geometries::multi_line_string());

        let geom = decode(&doc! { "type": "Polygon", "coordinates": coords }).unwrap();
        assert_eq!(geom, geometries::polygon());
    }

    #[test]
    fn decode_multi_polygon() {
        let geom = decode(&doc! {
            "type": "MultiPolygon",
            "coordinates": [[[[1, 2], [3, 4]], [[5, 6], [7, 8]]], [[[8, 7], [6, 5]], [[4, 3], [2, 1]]]]
        })
        .unwrap();

        let Geometry::MultiPolygon(polygons) = &geom else {
            panic!("expected a MultiPolygon, got {geom:?}");
        };
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0][0].len(), 2);
        assert_eq!(polygons[0][0][0], Position::from([1., 2.]));
        assert_eq!(polygons[0][0][1], Position::from([3., 4.]));
        assert_eq!(geom, geometries::multi_polygon());
    }

    #[test]
    fn decode_geometry_collection() {
        let geom = decode(&doc! {
            "type": "GeometryCollection",
            "geometries": [
                { "type": "Point", "coordinates": [102.0, 0.5] },
                { "type": "MultiLineString", "coordinates": [[[1, 2], [3, 4]], [[5, 6], [7, 8]]] }
            ]
        })
        .unwrap();

        let Geometry::GeometryCollection(members) = &geom else {
            panic!("expected a GeometryCollection, got {geom:?}");
        };
        assert_eq!(members.len(), 2);
        assert!(members[0].is_point());
        assert!(members[1].is_multi_line_string());
    }

    #[test]
    fn decode_empty_collection() {
        let geom = decode(&doc! { "type": "GeometryCollection", "geometries": [] }).unwrap();
        assert_eq!(geom, Geometry::geometry_collection(vec![]));
    }

    #[test]
    fn numeric_coercion() {
        let expected = Geometry::point([1., 2.]);
        for coords in [
            bson!([1, 2]),
            bson!([1.0, 2.0]),
            bson!([1_i64, 2.0]),
            Bson::Array(vec![Bson::Int32(1), Bson::Int64(2)]),
        ] {
            let geom = decode(&doc! { "type": "Point", "coordinates": coords }).unwrap();
            assert_eq!(geom, expected);
        }
    }

    #[test]
    fn decode_serde_json_tree() {
        let value = json!({
            "type": "GeometryCollection",
            "geometries": [
                { "type": "Point", "coordinates": [1, 2.0] },
                { "type": "LineString", "coordinates": [[1, 2], [3, 4]] }
            ]
        });
        let geom = decode_value(&value).unwrap();
        assert_eq!(
            geom,
            Geometry::geometry_collection(vec![
                Geometry::point([1., 2.]),
                geometries::line_string()
            ])
        );
    }

    #[test]
    fn decode_value_requires_document() {
        let err = decode_value(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidDocument(_)));
    }

    #[test]
    fn missing_type() {
        let err = decode(&doc! { "coordinates": [1, 2] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::MissingType));
    }

    #[test]
    fn invalid_type() {
        let err = decode(&doc! { "type": 1, "coordinates": [1, 2] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidType(v) if v == "1"));

        let err = decode(&doc! { "type": Bson::Null, "coordinates": [1, 2] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidType(_)));
    }

    #[test]
    fn unknown_type() {
        let err = decode(&doc! { "type": "Circle", "coordinates": [1, 2] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::UnknownType(t) if t == "Circle"));
    }

    #[test]
    fn over_nested_point() {
        let err = decode(&doc! { "type": "Point", "coordinates": [[1, 2]] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidPosition(_)));
    }

    #[test]
    fn non_numeric_ordinate() {
        let err = decode(&doc! { "type": "Point", "coordinates": [1, "2"] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidPosition(v) if v == "\"2\""));
    }

    #[test]
    fn missing_coordinates() {
        let err = decode(&doc! { "type": "Point" }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidPosition(v) if v == "missing"));

        let err = decode(&doc! { "type": "Polygon" }).unwrap_err();
        assert!(matches!(
            err,
            GeoBsonError::InvalidPathSequence(SequenceError::NotASequence(v)) if v == "missing"
        ));

        let err = decode(&doc! { "type": "GeometryCollection" }).unwrap_err();
        assert!(matches!(
            err,
            GeoBsonError::InvalidGeometrySequence(SequenceError::NotASequence(_))
        ));
    }

    #[test]
    fn under_nested_coordinates() {
        let err = decode(&doc! { "type": "LineString", "coordinates": [1, 2] }).unwrap_err();
        assert!(matches!(
            err,
            GeoBsonError::InvalidPositionSequence(SequenceError::Element { index: 0, .. })
        ));
        assert!(matches!(err.root_cause(), GeoBsonError::InvalidPosition(v) if v == "1"));

        let err = decode(&doc! { "type": "MultiLineString", "coordinates": [[1, 2]] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidPathSequence(_)));
        assert!(matches!(err.root_cause(), GeoBsonError::InvalidPosition(_)));

        let err = decode(&doc! { "type": "MultiPolygon", "coordinates": [[[1, 2]]] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidPolygonSequence(_)));
        assert!(matches!(err.root_cause(), GeoBsonError::InvalidPosition(_)));
    }

    #[test]
    fn over_nested_coordinates() {
        let err = decode(&doc! { "type": "MultiPoint", "coordinates": [[[1, 2]]] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidPositionSequence(_)));

        let err = decode(&doc! { "type": "Polygon", "coordinates": [[[[1, 2]]]] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidPathSequence(_)));

        let err =
            decode(&doc! { "type": "MultiPolygon", "coordinates": [[[[[1, 2]]]]] }).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidPolygonSequence(_)));
    }

    #[test]
    fn nested_error_chain() {
        let err = decode(&doc! {
            "type": "MultiPolygon",
            "coordinates": [[[[1, 2], [3, 4]]], [[[5, 6], [7, true]]]]
        })
        .unwrap_err();

        let GeoBsonError::InvalidPolygonSequence(SequenceError::Element {
            index: 1,
            source: path,
        }) = &err
        else {
            panic!("unexpected error {err:?}");
        };
        let GeoBsonError::InvalidPathSequence(SequenceError::Element {
            index: 0,
            source: positions,
        }) = &**path
        else {
            panic!("unexpected error {path:?}");
        };
        assert!(matches!(
            &**positions,
            GeoBsonError::InvalidPositionSequence(SequenceError::Element { index: 1, .. })
        ));
        assert!(matches!(err.root_cause(), GeoBsonError::InvalidPosition(v) if v == "true"));
    }

    #[test]
    fn collection_member_not_a_document() {
        let err = decode(&doc! {
            "type": "GeometryCollection",
            "geometries": [{ "type": "Point", "coordinates": [1, 2] }, 5]
        })
        .unwrap_err();
        assert!(matches!(
            err.root_cause(),
            GeoBsonError::InvalidDocument(v) if v == "5"
        ));
        assert!(matches!(err, GeoBsonError::InvalidGeometrySequence(_)));
    }

    #[test]
    fn collection_member_fails_to_decode() {
        let err = decode(&doc! {
            "type": "GeometryCollection",
            "geometries": [
                { "type": "Point", "coordinates": [1, 2] },
                { "coordinates": [1, 2] }
            ]
        })
        .unwrap_err();
        assert!(matches!(
            err,
            GeoBsonError::InvalidGeometrySequence(SequenceError::Element { index: 1, source })
                if matches!(*source, GeoBsonError::MissingType)
        ));
    }

    fn nested_collection(levels: usize) -> bson::Document {
        let mut doc = doc! { "type": "Point", "coordinates": [1, 2] };
        for _ in 0..levels {
            doc = doc! { "type": "GeometryCollection", "geometries": [doc] };
        }
        doc
    }

    #[test]
    fn depth_limit() {
        let options = DecodeOptions::new().with_max_depth(3);

        // Two collections around a point: depth 3.
        assert!(decode_with_options(&nested_collection(2), &options).is_ok());

        let err = decode_with_options(&nested_collection(3), &options).unwrap_err();
        assert!(matches!(err, GeoBsonError::InvalidGeometrySequence(_)));
        assert!(matches!(err.root_cause(), GeoBsonError::DepthLimitExceeded(3)));
    }

    #[test]
    fn default_depth_limit() {
        assert!(decode(&nested_collection(DEFAULT_MAX_DEPTH - 1)).is_ok());
        assert!(decode(&nested_collection(DEFAULT_MAX_DEPTH)).is_err());
    }

    #[test]
    fn decode_value_with_depth_limit() {
        let value = Bson::Document(nested_collection(3));
        let options = DecodeOptions::new().with_max_depth(3);
        let err = decode_value_with_options(&value, &options).unwrap_err();
        assert!(matches!(err.root_cause(), GeoBsonError::DepthLimitExceeded(3)));
        assert!(decode_value(&value).is_ok());
    }

    #[test]
    fn deep_failure_does_not_copy_the_document() {
        let mut ring = vec![bson!([1.0, 2.0]); 10_000];
        ring[9_999] = bson!([1.0, "x"]);
        let mut doc = doc! { "type": "MultiPolygon", "coordinates": [[ring]] };
        for _ in 0..20 {
            doc = doc! { "type": "GeometryCollection", "geometries": [doc] };
        }

        let err = decode(&doc).unwrap_err();
        assert!(matches!(err.root_cause(), GeoBsonError::InvalidPosition(v) if v == "\"x\""));

        let mut total = 0;
        let mut current: Option<&dyn std::error::Error> = Some(&err);
        while let Some(e) = current {
            total += e.to_string().len();
            current = e.source();
        }
        assert!(total < 4096, "error chain renders {total} bytes");
    }

    #[test]
    fn zero_depth_rejects_everything() {
        let options = DecodeOptions::new().with_max_depth(0);
        let err =
            decode_with_options(&doc! { "type": "Point", "coordinates": [1, 2] }, &options)
                .unwrap_err();
        assert!(matches!(err, GeoBsonError::DepthLimitExceeded(0)));
    }
}
