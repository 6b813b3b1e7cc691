use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{Booking, Offer, User, UserId},
};

pub mod files;

pub use files::load_catalog;

/// Read-only collections of users, offers and bookings
///
/// Built once at startup and shared between handlers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    offers: Vec<Offer>,
    bookings: Vec<Booking>,
}

impl Catalog {
    /// Validates the three collections and assembles a catalog
    ///
    /// Rejects duplicate user or offer ids and out-of-range coordinates.
    /// Bookings that reference unknown users or offers are kept, since they
    /// can never match a lookup, but are logged.
    pub fn from_parts(
        users: Vec<User>,
        offers: Vec<Offer>,
        bookings: Vec<Booking>,
    ) -> AppResult<Self> {
        let mut user_ids = HashSet::new();
        for user in &users {
            if !user_ids.insert(user.id) {
                return Err(AppError::DataLoad(format!("Duplicate user id {}", user.id)));
            }
            if !user.location.is_valid() {
                return Err(AppError::DataLoad(format!(
                    "User {} has an invalid location",
                    user.id
                )));
            }
        }

        let mut offer_ids = HashSet::new();
        for offer in &offers {
            if !offer_ids.insert(offer.id) {
                return Err(AppError::DataLoad(format!(
                    "Duplicate offer id {}",
                    offer.id
                )));
            }
            if !offer.location.is_valid() {
                return Err(AppError::DataLoad(format!(
                    "Offer {} has an invalid location",
                    offer.id
                )));
            }
        }

        let dangling = bookings
            .iter()
            .filter(|b| !user_ids.contains(&b.user_id) || !offer_ids.contains(&b.offer_id))
            .count();
        if dangling > 0 {
            tracing::warn!(
                dangling_bookings = dangling,
                "Bookings reference unknown users or offers"
            );
        }

        Ok(Self {
            users,
            offers,
            bookings,
        })
    }

    /// Looks up a user by id
    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// All bookings made by the given user, in file order
    pub fn bookings_for(&self, user_id: UserId) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .collect()
    }
}
