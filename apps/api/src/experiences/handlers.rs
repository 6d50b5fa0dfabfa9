use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::experiences::repository;
use crate::extract::{ApiJson, ApiPath};
use crate::merge::apply_patch;
use crate::models::experience::{CreateWorkExperienceRequest, WorkExperience, WorkExperiencePatch};
use crate::response::{ok, ApiResponse};
use crate::state::AppState;
use crate::talents::service::get_talent;

async fn find_or_404(state: &AppState, id: Uuid) -> Result<WorkExperience, AppError> {
    repository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Work experience {id} not found")))
}

/// GET /api/v1/talents/:id/experiences
pub async fn handle_list_experiences(
    State(state): State<AppState>,
    ApiPath(talent_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<WorkExperience>>>, AppError> {
    get_talent(state.talents.as_ref(), talent_id).await?;
    Ok(ok(repository::list_for_talent(&state.db, talent_id).await?))
}

/// POST /api/v1/talents/:id/experiences
pub async fn handle_create_experience(
    State(state): State<AppState>,
    ApiPath(talent_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<CreateWorkExperienceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WorkExperience>>), AppError> {
    req.validate()?;
    get_talent(state.talents.as_ref(), talent_id).await?;
    let created = repository::insert(&state.db, &req.into_experience(talent_id)).await?;
    info!("Added work experience {} to talent {talent_id}", created.id);
    Ok((StatusCode::CREATED, ok(created)))
}

/// GET /api/v1/experiences/:id
pub async fn handle_get_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<WorkExperience>>, AppError> {
    Ok(ok(find_or_404(&state, id).await?))
}

/// PATCH /api/v1/experiences/:id
pub async fn handle_update_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<WorkExperiencePatch>,
) -> Result<Json<ApiResponse<WorkExperience>>, AppError> {
    patch.validate()?;
    let merged = apply_patch(find_or_404(&state, id).await?, patch);
    merged.validate_dates()?;
    Ok(ok(repository::update(&state.db, &merged).await?))
}

/// DELETE /api/v1/experiences/:id
pub async fn handle_delete_experience(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if !repository::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Work experience {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
