use std::sync::Arc;

use sqlx::PgPool;

use crate::talents::store::TalentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pool for work experiences, certificates and recommendations.
    pub db: PgPool,
    /// Talent storage. Default: `PgTalentStore` over `db`.
    pub talents: Arc<dyn TalentStore>,
}
