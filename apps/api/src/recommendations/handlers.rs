use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::merge::apply_patch;
use crate::models::recommendation::{
    CreateRecommendationRequest, Recommendation, RecommendationPatch,
};
use crate::recommendations::repository;
use crate::response::{ok, ApiResponse};
use crate::state::AppState;
use crate::talents::service::get_talent;

async fn find_or_404(state: &AppState, id: Uuid) -> Result<Recommendation, AppError> {
    repository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recommendation {id} not found")))
}

/// GET /api/v1/talents/:id/recommendations
pub async fn handle_list_recommendations(
    State(state): State<AppState>,
    ApiPath(talent_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Recommendation>>>, AppError> {
    get_talent(state.talents.as_ref(), talent_id).await?;
    Ok(ok(repository::list_for_talent(&state.db, talent_id).await?))
}

/// POST /api/v1/talents/:id/recommendations
pub async fn handle_create_recommendation(
    State(state): State<AppState>,
    ApiPath(talent_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<CreateRecommendationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Recommendation>>), AppError> {
    req.validate()?;
    get_talent(state.talents.as_ref(), talent_id).await?;
    let created = repository::insert(&state.db, &req.into_recommendation(talent_id)).await?;
    info!("Added recommendation {} to talent {talent_id}", created.id);
    Ok((StatusCode::CREATED, ok(created)))
}

/// GET /api/v1/recommendations/:id
pub async fn handle_get_recommendation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Recommendation>>, AppError> {
    Ok(ok(find_or_404(&state, id).await?))
}

/// PATCH /api/v1/recommendations/:id
pub async fn handle_update_recommendation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<RecommendationPatch>,
) -> Result<Json<ApiResponse<Recommendation>>, AppError> {
    patch.validate()?;
    let merged = apply_patch(find_or_404(&state, id).await?, patch);
    Ok(ok(repository::update(&state.db, &merged).await?))
}

/// DELETE /api/v1/recommendations/:id
pub async fn handle_delete_recommendation(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if !repository::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Recommendation {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
