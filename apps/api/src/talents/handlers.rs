use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::certificate::Certificate;
use crate::models::experience::WorkExperience;
use crate::models::recommendation::Recommendation;
use crate::models::talent::{CreateTalentRequest, Talent, TalentPatch};
use crate::response::{ok, ApiResponse};
use crate::state::AppState;
use crate::talents::filter::FilterCriteria;
use crate::talents::search::TalentSearchQuery;
use crate::talents::service::{self, PageQuery};
use crate::{certificates, experiences, recommendations};

type Envelope<T> = Json<ApiResponse<T>>;

#[derive(Serialize)]
pub struct TalentProfileResponse {
    pub talent: Talent,
    pub experiences: Vec<WorkExperience>,
    pub certificates: Vec<Certificate>,
    pub recommendations: Vec<Recommendation>,
}

/// GET /api/v1/talents
pub async fn handle_list_talents(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> Result<Envelope<Vec<Talent>>, AppError> {
    let talents = service::list_talents(state.talents.as_ref(), &page).await?;
    Ok(ok(talents))
}

/// POST /api/v1/talents
pub async fn handle_create_talent(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTalentRequest>,
) -> Result<(StatusCode, Envelope<Talent>), AppError> {
    let talent = service::create_talent(state.talents.as_ref(), req).await?;
    Ok((StatusCode::CREATED, ok(talent)))
}

/// GET /api/v1/talents/:id
pub async fn handle_get_talent(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Envelope<Talent>, AppError> {
    Ok(ok(service::get_talent(state.talents.as_ref(), id).await?))
}

/// PATCH /api/v1/talents/:id
pub async fn handle_update_talent(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<TalentPatch>,
) -> Result<Envelope<Talent>, AppError> {
    Ok(ok(service::update_talent(state.talents.as_ref(), id, patch).await?))
}

/// DELETE /api/v1/talents/:id
pub async fn handle_delete_talent(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    service::delete_talent(state.talents.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/talents/filter
pub async fn handle_filter_talents(
    State(state): State<AppState>,
    ApiJson(criteria): ApiJson<FilterCriteria>,
) -> Result<Envelope<Vec<Talent>>, AppError> {
    Ok(ok(service::filter_talents(state.talents.as_ref(), &criteria).await?))
}

/// GET /api/v1/talents/search
pub async fn handle_search_talents(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TalentSearchQuery>,
) -> Result<Envelope<Vec<Talent>>, AppError> {
    let criteria = FilterCriteria::from(query);
    Ok(ok(service::filter_talents(state.talents.as_ref(), &criteria).await?))
}

/// GET /api/v1/talents/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Envelope<TalentProfileResponse>, AppError> {
    let talent = service::get_talent(state.talents.as_ref(), id).await?;
    let experiences = experiences::repository::list_for_talent(&state.db, id).await?;
    let certificates = certificates::repository::list_for_talent(&state.db, id).await?;
    let recommendations = recommendations::repository::list_for_talent(&state.db, id).await?;
    Ok(ok(TalentProfileResponse {
        talent,
        experiences,
        certificates,
        recommendations,
    }))
}
