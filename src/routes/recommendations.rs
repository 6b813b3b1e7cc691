use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Recommendation, UserId},
    routes::AppState,
    services::LocationOverride,
};

/// Handler for `GET /offers/recommend/:user_id?lat=&lng=`
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<UserId>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Recommendation>> {
    let location = LocationOverride::from_pairs(pairs);

    tracing::info!(
        request_id = %request_id,
        user_id = user_id,
        has_override = location.point().is_some(),
        "Processing recommendation request"
    );

    let recommendation = state.engine.recommend(user_id, &location).await?;

    Ok(Json(recommendation))
}
