use sqlx::PgPool;
use uuid::Uuid;

use crate::models::experience::WorkExperience;

/// Most recent position first; open-ended positions sort ahead of closed ones.
pub async fn list_for_talent(
    pool: &PgPool,
    talent_id: Uuid,
) -> Result<Vec<WorkExperience>, sqlx::Error> {
    sqlx::query_as::<_, WorkExperience>(
        r#"
        SELECT * FROM work_experiences
        WHERE talent_id = $1
        ORDER BY end_date DESC NULLS FIRST, start_date DESC
        "#,
    )
    .bind(talent_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<WorkExperience>, sqlx::Error> {
    sqlx::query_as::<_, WorkExperience>("SELECT * FROM work_experiences WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, e: &WorkExperience) -> Result<WorkExperience, sqlx::Error> {
    sqlx::query_as::<_, WorkExperience>(
        r#"
        INSERT INTO work_experiences
            (id, talent_id, company, title, start_date, end_date, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(e.id)
    .bind(e.talent_id)
    .bind(&e.company)
    .bind(&e.title)
    .bind(e.start_date)
    .bind(e.end_date)
    .bind(&e.description)
    .bind(e.created_at)
    .bind(e.updated_at)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, e: &WorkExperience) -> Result<WorkExperience, sqlx::Error> {
    sqlx::query_as::<_, WorkExperience>(
        r#"
        UPDATE work_experiences
        SET company = $2, title = $3, start_date = $4, end_date = $5,
            description = $6, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(e.id)
    .bind(&e.company)
    .bind(&e.title)
    .bind(e.start_date)
    .bind(e.end_date)
    .bind(&e.description)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM work_experiences WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
