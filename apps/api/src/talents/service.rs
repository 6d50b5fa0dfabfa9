//! Talent operations on top of a [`TalentStore`].
//!
//! Handlers stay thin: they extract, call one function here, and wrap the
//! result in the response envelope.

use serde::Deserialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::merge::apply_patch;
use crate::models::talent::{CreateTalentRequest, Talent, TalentPatch};
use crate::talents::filter::{build_predicate, FilterCriteria};
use crate::talents::store::TalentStore;

pub const DEFAULT_PAGE_LIMIT: usize = 50;
pub const MAX_PAGE_LIMIT: usize = 200;

/// Loads the candidate set and keeps every talent matching `criteria`,
/// in the store's order. An empty candidate set and an empty match are both
/// `NotFound`, with different messages.
pub async fn filter_talents(
    store: &dyn TalentStore,
    criteria: &FilterCriteria,
) -> Result<Vec<Talent>, AppError> {
    let candidates = store.fetch_all().await?;
    if candidates.is_empty() {
        return Err(AppError::NotFound("No talents are registered".to_string()));
    }

    if criteria.is_unconstrained() {
        debug!("Talent filter has no active criteria");
    }

    let total = candidates.len();
    let predicate = build_predicate(criteria);
    let matched: Vec<Talent> = candidates.into_iter().filter(|t| predicate(t)).collect();

    info!("Talent filter matched {} of {total} candidates", matched.len());

    if matched.is_empty() {
        return Err(AppError::NotFound(
            "No talents match the given filters".to_string(),
        ));
    }
    Ok(matched)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

pub async fn list_talents(
    store: &dyn TalentStore,
    page: &PageQuery,
) -> Result<Vec<Talent>, AppError> {
    let limit = page
        .limit
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .clamp(1, MAX_PAGE_LIMIT);
    let offset = page.offset.unwrap_or(0);
    Ok(store
        .fetch_all()
        .await?
        .into_iter()
        .skip(offset)
        .take(limit)
        .collect())
}

pub async fn get_talent(store: &dyn TalentStore, id: Uuid) -> Result<Talent, AppError> {
    store
        .fetch_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Talent {id} not found")))
}

pub async fn create_talent(
    store: &dyn TalentStore,
    req: CreateTalentRequest,
) -> Result<Talent, AppError> {
    req.validate()?;
    let talent = store.save(req.into_talent()).await?;
    info!("Created talent {} ({})", talent.id, talent.full_name());
    Ok(talent)
}

/// Validates the patch, merges it into the stored record, and saves.
/// Two concurrent patches to the same talent race; the last save wins.
pub async fn update_talent(
    store: &dyn TalentStore,
    id: Uuid,
    patch: TalentPatch,
) -> Result<Talent, AppError> {
    patch.validate()?;
    let existing = get_talent(store, id).await?;
    let merged = apply_patch(existing, patch);
    store.save(merged).await
}

pub async fn delete_talent(store: &dyn TalentStore, id: Uuid) -> Result<(), AppError> {
    if !store.delete_by_id(id).await? {
        warn!("Delete requested for unknown talent {id}");
        return Err(AppError::NotFound(format!("Talent {id} not found")));
    }
    info!("Deleted talent {id}");
    Ok(())
}
