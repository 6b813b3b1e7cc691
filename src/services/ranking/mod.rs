//! Ranking provider abstraction
//!
//! A ranking provider receives a free-text prompt and returns the raw text of
//! a completion. The provider is untrusted: its output is parsed and validated
//! here, and every failure is reported as a [`RankingError`] so callers can
//! fall back to a deterministic ordering.

use crate::{models::AnnotatedOffer, services::prompt::TOP_N};

pub mod disabled;
pub mod openai;

pub use disabled::DisabledRanker;
pub use openai::OpenAiRanker;

/// Reasons a ranking attempt produced no usable result
#[derive(thiserror::Error, Debug)]
pub enum RankingError {
    #[error("Ranking disabled: no API key configured")]
    Disabled,

    #[error("Ranking request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Ranking provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Ranking provider returned an empty completion")]
    EmptyCompletion,

    #[error("Ranking response is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Ranking response is not a JSON array")]
    NotAnArray,

    #[error("Ranked offer at position {index} is invalid: {reason}")]
    InvalidOffer { index: usize, reason: String },
}

/// Trait for ranking providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait OfferRanker: Send + Sync {
    /// Sends the prompt and returns the raw completion text
    async fn rank(&self, prompt: &str) -> Result<String, RankingError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Asks the ranker for a completion and validates it
pub async fn rank_offers(
    ranker: &dyn OfferRanker,
    prompt: &str,
) -> Result<Vec<AnnotatedOffer>, RankingError> {
    let raw = ranker.rank(prompt).await?;
    parse_ranked_offers(&raw)
}

/// Parses a completion into at most [`TOP_N`] annotated offers
///
/// The completion must be a bare JSON array. Elements beyond the first
/// `TOP_N` are ignored; each kept element must be a well-formed offer whose
/// booking flag agrees with its booking date.
pub fn parse_ranked_offers(raw: &str) -> Result<Vec<AnnotatedOffer>, RankingError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RankingError::EmptyCompletion);
    }

    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(RankingError::InvalidJson)?;

    let serde_json::Value::Array(items) = value else {
        return Err(RankingError::NotAnArray);
    };

    items
        .into_iter()
        .take(TOP_N)
        .enumerate()
        .map(|(index, item)| {
            let offer: AnnotatedOffer =
                serde_json::from_value(item).map_err(|e| RankingError::InvalidOffer {
                    index,
                    reason: e.to_string(),
                })?;

            if offer.booked_previously != offer.last_booking_date.is_some() {
                return Err(RankingError::InvalidOffer {
                    index,
                    reason: "bookedPreviously disagrees with lastBookingDate".to_string(),
                });
            }

            Ok(offer)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer_json(title: &str) -> serde_json::Value {
        json!({
            "title": title,
            "description": "desc",
            "distance": "1.0 km",
            "bookedPreviously": false,
            "lastBookingDate": null
        })
    }

    #[test]
    fn test_parse_valid_array() {
        let raw = json!([offer_json("a"), offer_json("b")]).to_string();
        let offers = parse_ranked_offers(&raw).unwrap();
        let titles: Vec<&str> = offers.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let raw = format!("\n\n  {}  \n", json!([offer_json("a")]));
        assert_eq!(parse_ranked_offers(&raw).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_truncates_to_three() {
        let raw = json!([
            offer_json("a"),
            offer_json("b"),
            offer_json("c"),
            offer_json("d"),
            offer_json("e")
        ])
        .to_string();

        let offers = parse_ranked_offers(&raw).unwrap();
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[2].title, "c");
    }

    #[test]
    fn test_invalid_elements_past_limit_are_ignored() {
        let raw = json!([offer_json("a"), offer_json("b"), offer_json("c"), "garbage"]).to_string();
        assert_eq!(parse_ranked_offers(&raw).unwrap().len(), 3);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_ranked_offers("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_completion() {
        assert!(matches!(
            parse_ranked_offers("   "),
            Err(RankingError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_ranked_offers("Here are your offers: [...]"),
            Err(RankingError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_markdown_fence_rejected() {
        let raw = format!("```json\n{}\n```", json!([offer_json("a")]));
        assert!(matches!(
            parse_ranked_offers(&raw),
            Err(RankingError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_parse_object_is_not_array() {
        let raw = json!({ "recommendations": [offer_json("a")] }).to_string();
        assert!(matches!(
            parse_ranked_offers(&raw),
            Err(RankingError::NotAnArray)
        ));
    }

    #[test]
    fn test_parse_missing_field_rejected() {
        let raw = json!([{ "title": "a" }]).to_string();
        assert!(matches!(
            parse_ranked_offers(&raw),
            Err(RankingError::InvalidOffer { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_inconsistent_booking_rejected() {
        let mut bad = offer_json("b");
        bad["bookedPreviously"] = json!(true);
        let raw = json!([offer_json("a"), bad]).to_string();

        assert!(matches!(
            parse_ranked_offers(&raw),
            Err(RankingError::InvalidOffer { index: 1, .. })
        ));
    }

    #[tokio::test]
    async fn test_rank_offers_propagates_provider_error() {
        let mut ranker = MockOfferRanker::new();
        ranker
            .expect_rank()
            .returning(|_| Err(RankingError::EmptyCompletion));

        let result = rank_offers(&ranker, "prompt").await;
        assert!(matches!(result, Err(RankingError::EmptyCompletion)));
    }

    #[tokio::test]
    async fn test_rank_offers_parses_completion() {
        let mut ranker = MockOfferRanker::new();
        ranker
            .expect_rank()
            .withf(|prompt| prompt.contains("prompt"))
            .times(1)
            .returning(|_| Ok(json!([offer_json("a")]).to_string()));

        let offers = tokio_test::assert_ok!(rank_offers(&ranker, "prompt").await);
        assert_eq!(offers[0].title, "a");
    }
}
