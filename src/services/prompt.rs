use crate::{
    error::AppResult,
    models::{AnnotatedOffer, Booking, GeoPoint, User},
};

/// Number of offers the ranking provider is asked to return
pub const TOP_N: usize = 3;

/// Builds the ranking prompt for one user and their annotated offers
pub fn build_prompt(
    user: &User,
    location: GeoPoint,
    bookings: &[&Booking],
    offers: &[AnnotatedOffer],
) -> AppResult<String> {
    let past_bookings = if bookings.is_empty() {
        "none".to_string()
    } else {
        bookings
            .iter()
            .map(|b| b.offer_id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let offers_json = serde_json::to_string_pretty(offers)?;

    Ok(format!(
        "User preferences: {preferences}\n\
         Location: {lat}, {lng}\n\
         Past bookings: {past_bookings}\n\
         \n\
         Available offers with distance:\n\
         {offers_json}\n\
         \n\
         Return **exactly** a JSON array of the top {TOP_N} recommended offers with these fields:\n\
         - title\n\
         - description\n\
         - distance\n\
         - bookedPreviously\n\
         - lastBookingDate\n\
         \n\
         No extra text, no markdown, just a valid JSON array.",
        preferences = user.preferences.join(", "),
        lat = location.lat,
        lng = location.lng,
    ))
}
