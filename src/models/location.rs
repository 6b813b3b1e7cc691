use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees
///
/// Users store their location as `{ lat, lng }` while offers use
/// `{ latitude, longitude }`; both shapes deserialize into this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude")]
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both coordinates are finite and within their valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_short_field_names() {
        let point: GeoPoint = serde_json::from_str(r#"{"lat": 24.45, "lng": 54.38}"#).unwrap();
        assert_eq!(point, GeoPoint::new(24.45, 54.38));
    }

    #[test]
    fn test_deserialize_long_field_names() {
        let point: GeoPoint =
            serde_json::from_str(r#"{"latitude": 25.2, "longitude": 55.27}"#).unwrap();
        assert_eq!(point, GeoPoint::new(25.2, 55.27));
    }

    #[test]
    fn test_serializes_short_field_names() {
        let json = serde_json::to_value(GeoPoint::new(1.5, -2.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "lat": 1.5, "lng": -2.0 }));
    }

    #[test]
    fn test_is_valid_bounds() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
