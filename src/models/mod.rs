use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod location;

pub use location::GeoPoint;

pub type UserId = i64;
pub type OfferId = u64;

/// A user of the demo, loaded from `users.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Preference tags in the order the user listed them
    pub preferences: Vec<String>,
    /// Default location used when a request carries no override
    pub location: GeoPoint,
}

/// A bookable offer at a fixed location, loaded from `offers.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub description: String,
    pub location: GeoPoint,
}

/// A past booking of an offer by a user, loaded from `bookings.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub user_id: UserId,
    pub offer_id: OfferId,
    pub date: NaiveDate,
}

// ============================================================================
// Recommendation Types
// ============================================================================

/// An offer annotated with distance and booking history for one request
///
/// This is also the shape the ranking provider is asked to return, so it
/// doubles as the validation target for ranked output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedOffer {
    pub title: String,
    pub description: String,
    /// Rendered as `"<N.N> km"`
    pub distance: String,
    pub booked_previously: bool,
    pub last_booking_date: Option<NaiveDate>,
}

/// Response body for the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub user_id: UserId,
    pub location: GeoPoint,
    pub recommendations: Vec<AnnotatedOffer>,
}
