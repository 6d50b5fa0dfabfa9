use sqlx::PgPool;
use uuid::Uuid;

use crate::models::recommendation::Recommendation;

pub async fn list_for_talent(
    pool: &PgPool,
    talent_id: Uuid,
) -> Result<Vec<Recommendation>, sqlx::Error> {
    sqlx::query_as::<_, Recommendation>(
        "SELECT * FROM recommendations WHERE talent_id = $1 ORDER BY created_at DESC",
    )
    .bind(talent_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Recommendation>, sqlx::Error> {
    sqlx::query_as::<_, Recommendation>("SELECT * FROM recommendations WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, r: &Recommendation) -> Result<Recommendation, sqlx::Error> {
    sqlx::query_as::<_, Recommendation>(
        r#"
        INSERT INTO recommendations
            (id, talent_id, author_name, author_title, relationship, content, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(r.id)
    .bind(r.talent_id)
    .bind(&r.author_name)
    .bind(&r.author_title)
    .bind(&r.relationship)
    .bind(&r.content)
    .bind(r.created_at)
    .bind(r.updated_at)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, r: &Recommendation) -> Result<Recommendation, sqlx::Error> {
    sqlx::query_as::<_, Recommendation>(
        r#"
        UPDATE recommendations
        SET author_name = $2, author_title = $3, relationship = $4,
            content = $5, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(r.id)
    .bind(&r.author_name)
    .bind(&r.author_title)
    .bind(&r.relationship)
    .bind(&r.content)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM recommendations WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
