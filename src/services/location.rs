use crate::models::{GeoPoint, User};

/// Optional location override taken from the query string
///
/// Values are kept as raw strings so that a malformed number never rejects
/// the request; it simply disables the override.
#[derive(Debug, Clone, Default)]
pub struct LocationOverride {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl LocationOverride {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat.to_string()),
            lng: Some(lng.to_string()),
        }
    }

    /// Builds an override from raw query pairs
    ///
    /// The first `lat` and the first `lng` win; repeated keys and unknown
    /// keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut location = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "lat" => &mut location.lat,
                "lng" => &mut location.lng,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        location
    }

    /// The override point, if both coordinates are present and numeric
    pub fn point(&self) -> Option<GeoPoint> {
        let lat = parse_coordinate(self.lat.as_deref())?;
        let lng = parse_coordinate(self.lng.as_deref())?;
        Some(GeoPoint::new(lat, lng))
    }
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Picks the location used for distance calculations
///
/// A complete override wins; anything less falls back to the user's stored
/// location in full.
pub fn resolve_location(user: &User, requested: &LocationOverride) -> GeoPoint {
    requested.point().unwrap_or(user.location)
}
