use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::certificates::repository;
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::merge::apply_patch;
use crate::models::certificate::{Certificate, CertificatePatch, CreateCertificateRequest};
use crate::response::{ok, ApiResponse};
use crate::state::AppState;
use crate::talents::service::get_talent;

async fn find_or_404(state: &AppState, id: Uuid) -> Result<Certificate, AppError> {
    repository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Certificate {id} not found")))
}

/// GET /api/v1/talents/:id/certificates
pub async fn handle_list_certificates(
    State(state): State<AppState>,
    ApiPath(talent_id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Vec<Certificate>>>, AppError> {
    get_talent(state.talents.as_ref(), talent_id).await?;
    Ok(ok(repository::list_for_talent(&state.db, talent_id).await?))
}

/// POST /api/v1/talents/:id/certificates
pub async fn handle_create_certificate(
    State(state): State<AppState>,
    ApiPath(talent_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<CreateCertificateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Certificate>>), AppError> {
    req.validate()?;
    get_talent(state.talents.as_ref(), talent_id).await?;
    let created = repository::insert(&state.db, &req.into_certificate(talent_id)).await?;
    info!("Added certificate {} to talent {talent_id}", created.id);
    Ok((StatusCode::CREATED, ok(created)))
}

/// GET /api/v1/certificates/:id
pub async fn handle_get_certificate(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<ApiResponse<Certificate>>, AppError> {
    Ok(ok(find_or_404(&state, id).await?))
}

/// PATCH /api/v1/certificates/:id
pub async fn handle_update_certificate(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<CertificatePatch>,
) -> Result<Json<ApiResponse<Certificate>>, AppError> {
    patch.validate()?;
    let merged = apply_patch(find_or_404(&state, id).await?, patch);
    merged.validate_dates()?;
    Ok(ok(repository::update(&state.db, &merged).await?))
}

/// DELETE /api/v1/certificates/:id
pub async fn handle_delete_certificate(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if !repository::delete(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Certificate {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
