use std::sync::Arc;

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{AnnotatedOffer, Booking, GeoPoint, Offer, Recommendation, UserId},
    services::{
        geo,
        location::{resolve_location, LocationOverride},
        prompt::{build_prompt, TOP_N},
        ranking::{rank_offers, OfferRanker},
    },
};

/// An annotated offer together with its numeric distance for sorting
#[derive(Debug, Clone)]
struct Candidate {
    distance_km: f64,
    offer: AnnotatedOffer,
}

/// Produces up to three recommended offers for a user
///
/// Offers are ranked by the configured [`OfferRanker`]. Whenever ranking
/// fails or yields nothing, the nearest offers are returned instead, so a
/// request only fails when the user itself is unknown.
#[derive(Clone)]
pub struct RecommendationEngine {
    catalog: Arc<Catalog>,
    ranker: Arc<dyn OfferRanker>,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<Catalog>, ranker: Arc<dyn OfferRanker>) -> Self {
        Self { catalog, ranker }
    }

    pub async fn recommend(
        &self,
        user_id: UserId,
        requested: &LocationOverride,
    ) -> AppResult<Recommendation> {
        let user = self
            .catalog
            .find_user(user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let location = resolve_location(user, requested);
        let bookings = self.catalog.bookings_for(user_id);

        let candidates: Vec<Candidate> = self
            .catalog
            .offers()
            .iter()
            .map(|offer| annotate(offer, location, &bookings))
            .collect();

        let annotated: Vec<AnnotatedOffer> = candidates.iter().map(|c| c.offer.clone()).collect();
        let prompt = build_prompt(user, location, &bookings, &annotated)?;

        let ranked = match rank_offers(self.ranker.as_ref(), &prompt).await {
            Ok(ranked) => ranked,
            Err(e) => {
                tracing::warn!(
                    user_id = user_id,
                    provider = self.ranker.name(),
                    error = %e,
                    "Ranking failed or returned invalid output, using distance fallback"
                );
                Vec::new()
            }
        };

        let recommendations = if ranked.is_empty() {
            nearest(candidates)
        } else {
            ranked
        };

        tracing::info!(
            user_id = user_id,
            lat = location.lat,
            lng = location.lng,
            offers = self.catalog.offers().len(),
            recommendations = recommendations.len(),
            "Recommendations computed"
        );

        Ok(Recommendation {
            user_id,
            location,
            recommendations,
        })
    }
}

/// Annotates an offer with its distance from `location` and the user's
/// booking history
///
/// When the user booked the same offer more than once, the first booking in
/// file order supplies the date.
fn annotate(offer: &Offer, location: GeoPoint, bookings: &[&Booking]) -> Candidate {
    let km = geo::distance_km(location, offer.location);
    let booking = bookings.iter().find(|b| b.offer_id == offer.id);

    Candidate {
        distance_km: geo::round_km(km),
        offer: AnnotatedOffer {
            title: offer.title.clone(),
            description: offer.description.clone(),
            distance: geo::format_distance(km),
            booked_previously: booking.is_some(),
            last_booking_date: booking.map(|b| b.date),
        },
    }
}

/// The `TOP_N` nearest candidates, ascending; ties keep catalog order
fn nearest(mut candidates: Vec<Candidate>) -> Vec<AnnotatedOffer> {
    candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    candidates
        .into_iter()
        .take(TOP_N)
        .map(|c| c.offer)
        .collect()
}
