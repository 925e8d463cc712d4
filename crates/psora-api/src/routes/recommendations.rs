use axum::extract::Path;
use axum::Json;

use psora_instruments::recommendations::{lookup_recommendations, RecommendationSet};

use crate::error::ApiError;

pub async fn get_recommendation_set(
    Path((tier, age_band)): Path<(String, String)>,
) -> Result<Json<RecommendationSet>, ApiError> {
    Ok(Json(lookup_recommendations(&tier, &age_band)?))
}
