use crate::models::GeoPoint;

/// Equatorial earth radius in metres
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Great-circle distance between two points in kilometres
///
/// Uses the haversine formula. The result is rounded to the nearest metre
/// before conversion, so identical points always yield exactly `0.0`.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    (EARTH_RADIUS_M * c).round() / 1000.0
}

/// Renders `km` with one decimal the way JavaScript's `toFixed(1)` does
///
/// Rounding uses the exact binary value, so `0.15` (stored just below the
/// midpoint) gives `"0.1"`. Exact midpoints such as `0.25` round up.
fn one_decimal(km: f64) -> String {
    let quarters = km * 4.0;
    if quarters.fract() == 0.0 && quarters.rem_euclid(2.0) == 1.0 {
        return format!("{:.1}", (km * 10.0).ceil() / 10.0);
    }
    format!("{:.1}", km)
}

/// Rounds a distance to one decimal place, agreeing with [`format_distance`]
pub fn round_km(km: f64) -> f64 {
    one_decimal(km).parse().unwrap_or(km)
}

/// Renders a distance as `"<N.N> km"`
pub fn format_distance(km: f64) -> String {
    format!("{} km", one_decimal(km))
}
