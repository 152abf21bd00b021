//! Structural checks for GeoJSON values returned by the API.
//!
//! The API converts location geometries to GeoJSON; these helpers only
//! check the shape of what comes back, they do not build geometries.

use serde_json::Value;

/// The `type` member of a GeoJSON object, if present.
pub fn geojson_type(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

/// True when `value` is a position: an array of two finite numbers.
pub fn is_position(value: &Value) -> bool {
    match value.as_array() {
        Some(pair) => pair.len() == 2 && pair.iter().all(|n| n.as_f64().is_some()),
        None => false,
    }
}

/// True when the first and last positions of a ring coincide
/// (RFC 7946 §3.1.6).
pub fn ring_is_closed(ring: &Value) -> bool {
    match ring.as_array() {
        Some(positions) if positions.len() >= 4 => {
            positions.first() == positions.last()
                && positions.iter().all(is_position)
        }
        _ => false,
    }
}

/// True when every ring of a Polygon or MultiPolygon geometry is closed.
///
/// Any other geometry type returns false; a missing `coordinates` member
/// returns false.
pub fn polygon_rings_closed(geometry: &Value) -> bool {
    let Some(coordinates) = geometry.get("coordinates") else {
        return false;
    };

    match geojson_type(geometry) {
        Some("Polygon") => rings_closed(coordinates),
        Some("MultiPolygon") => match coordinates.as_array() {
            Some(polygons) => !polygons.is_empty() && polygons.iter().all(rings_closed),
            None => false,
        },
        _ => false,
    }
}

fn rings_closed(rings: &Value) -> bool {
    match rings.as_array() {
        Some(rings) => !rings.is_empty() && rings.iter().all(ring_is_closed),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square_ring() -> Value {
        json!([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]])
    }

    #[test]
    fn position_shape() {
        assert!(is_position(&json!([-123.2761, 44.5602])));
        assert!(!is_position(&json!([-123.2761])));
        assert!(!is_position(&json!(["-123.2761", "44.5602"])));
        assert!(!is_position(&json!({"lat": 44.5602})));
    }

    #[test]
    fn closed_and_open_rings() {
        assert!(ring_is_closed(&square_ring()));

        let open = json!([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
        assert!(!ring_is_closed(&open));

        // Too few positions to be a ring
        assert!(!ring_is_closed(&json!([[0.0, 0.0], [0.0, 0.0]])));
    }

    #[test]
    fn polygon_geometry() {
        let polygon = json!({"type": "Polygon", "coordinates": [square_ring()]});
        assert!(polygon_rings_closed(&polygon));
        assert_eq!(geojson_type(&polygon), Some("Polygon"));
    }

    #[test]
    fn multi_polygon_geometry() {
        let multi = json!({
            "type": "MultiPolygon",
            "coordinates": [[square_ring()], [square_ring()]]
        });
        assert!(polygon_rings_closed(&multi));
    }

    #[test]
    fn points_are_not_polygons() {
        let point = json!({"type": "Point", "coordinates": [-123.2761, 44.5602]});
        assert!(!polygon_rings_closed(&point));
        assert_eq!(geojson_type(&point), Some("Point"));
    }

    #[test]
    fn missing_coordinates_fail_closed() {
        assert!(!polygon_rings_closed(&json!({"type": "Polygon"})));
        assert!(!polygon_rings_closed(&json!(null)));
    }
}
