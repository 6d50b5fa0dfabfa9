//! Talent storage seam.
//!
//! `AppState` holds an `Arc<dyn TalentStore>`; the service and handlers only
//! ever talk to this trait. `PgTalentStore` is the production backend.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::talent::Talent;

#[async_trait]
pub trait TalentStore: Send + Sync {
    /// Full candidate set in a stable order (oldest first).
    async fn fetch_all(&self) -> Result<Vec<Talent>, AppError>;

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Talent>, AppError>;

    /// Inserts or replaces the record with `talent.id`; returns the stored row.
    async fn save(&self, talent: Talent) -> Result<Talent, AppError>;

    /// Returns `false` when nothing was deleted.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError>;
}

pub struct PgTalentStore {
    pool: PgPool,
}

impl PgTalentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TalentStore for PgTalentStore {
    async fn fetch_all(&self) -> Result<Vec<Talent>, AppError> {
        Ok(
            sqlx::query_as::<_, Talent>("SELECT * FROM talents ORDER BY created_at ASC, id ASC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Talent>, AppError> {
        Ok(
            sqlx::query_as::<_, Talent>("SELECT * FROM talents WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn save(&self, talent: Talent) -> Result<Talent, AppError> {
        let saved = sqlx::query_as::<_, Talent>(
            r#"
            INSERT INTO talents
                (id, first_name, last_name, email, phone, headline, bio, location,
                 skills, price, preferred_locations, linkedin_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                headline = EXCLUDED.headline,
                bio = EXCLUDED.bio,
                location = EXCLUDED.location,
                skills = EXCLUDED.skills,
                price = EXCLUDED.price,
                preferred_locations = EXCLUDED.preferred_locations,
                linkedin_url = EXCLUDED.linkedin_url,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(talent.id)
        .bind(&talent.first_name)
        .bind(&talent.last_name)
        .bind(&talent.email)
        .bind(&talent.phone)
        .bind(&talent.headline)
        .bind(&talent.bio)
        .bind(&talent.location)
        .bind(&talent.skills)
        .bind(talent.price)
        .bind(&talent.preferred_locations)
        .bind(&talent.linkedin_url)
        .bind(talent.created_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| duplicate_email_as_conflict(e, &talent.email))?;

        info!("Saved talent {}", saved.id);
        Ok(saved)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM talents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn duplicate_email_as_conflict(err: sqlx::Error, email: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.constraint() == Some("uq_talents_email") => {
            AppError::Conflict(format!("Email '{email}' is already registered"))
        }
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::sync::Mutex;

    use super::*;

    /// In-memory store preserving insertion order. Email uniqueness is exact,
    /// like the `uq_talents_email` constraint.
    #[derive(Default)]
    pub struct InMemoryTalentStore {
        talents: Mutex<Vec<Talent>>,
    }

    impl InMemoryTalentStore {
        pub fn with(talents: Vec<Talent>) -> Self {
            Self {
                talents: Mutex::new(talents),
            }
        }
    }

    #[async_trait]
    impl TalentStore for InMemoryTalentStore {
        async fn fetch_all(&self) -> Result<Vec<Talent>, AppError> {
            Ok(self.talents.lock().unwrap().clone())
        }

        async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Talent>, AppError> {
            Ok(self
                .talents
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == id)
                .cloned())
        }

        async fn save(&self, mut talent: Talent) -> Result<Talent, AppError> {
            talent.updated_at = Utc::now();
            let mut talents = self.talents.lock().unwrap();
            if talents
                .iter()
                .any(|t| t.id != talent.id && t.email == talent.email)
            {
                return Err(AppError::Conflict(format!(
                    "Email '{}' is already registered",
                    talent.email
                )));
            }
            match talents.iter_mut().find(|t| t.id == talent.id) {
                Some(existing) => *existing = talent.clone(),
                None => talents.push(talent.clone()),
            }
            Ok(talent)
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
            let mut talents = self.talents.lock().unwrap();
            let before = talents.len();
            talents.retain(|t| t.id != id);
            Ok(talents.len() < before)
        }
    }
}
