use super::{OfferRanker, RankingError};

/// Ranker used when no API key is configured
///
/// Every call fails with [`RankingError::Disabled`], which routes all requests
/// through the distance-sorted fallback.
#[derive(Debug, Clone, Default)]
pub struct DisabledRanker;

#[async_trait::async_trait]
impl OfferRanker for DisabledRanker {
    async fn rank(&self, _prompt: &str) -> Result<String, RankingError> {
        Err(RankingError::Disabled)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
