use std::sync::Arc;

use axum::{Extension, Json, extract::Query};

use crate::{
    error::ApiError,
    info,
    spotify::RecommendationSource,
    types::RecommendationPayload,
    utils::{self, RECOMMENDATION_LIMIT},
    warning,
};

pub async fn get_music_recommendations(
    Query(params): Query<Vec<(String, String)>>,
    Extension(source): Extension<Arc<dyn RecommendationSource>>,
) -> Result<Json<RecommendationPayload>, ApiError> {
    let request = utils::request_from_query(&params);
    utils::validate_request(&request)?;

    info!(
        "Recommendations requested for {} seed artists and {} seed tracks",
        request.seed_artists.len(),
        request.seed_tracks.len()
    );

    let payload = source
        .recommendations(&request, RECOMMENDATION_LIMIT)
        .await
        .and_then(|response| utils::build_payload(&response))
        .inspect_err(|e| warning!("Failed to retrieve recommendations: {}", e))?;

    Ok(Json(payload))
}
