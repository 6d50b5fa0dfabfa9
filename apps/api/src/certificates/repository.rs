use sqlx::PgPool;
use uuid::Uuid;

use crate::models::certificate::Certificate;

pub async fn list_for_talent(
    pool: &PgPool,
    talent_id: Uuid,
) -> Result<Vec<Certificate>, sqlx::Error> {
    sqlx::query_as::<_, Certificate>(
        "SELECT * FROM certificates WHERE talent_id = $1 ORDER BY issued_on DESC",
    )
    .bind(talent_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Certificate>, sqlx::Error> {
    sqlx::query_as::<_, Certificate>("SELECT * FROM certificates WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert(pool: &PgPool, c: &Certificate) -> Result<Certificate, sqlx::Error> {
    sqlx::query_as::<_, Certificate>(
        r#"
        INSERT INTO certificates
            (id, talent_id, name, issuer, issued_on, expires_on, credential_url, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(c.id)
    .bind(c.talent_id)
    .bind(&c.name)
    .bind(&c.issuer)
    .bind(c.issued_on)
    .bind(c.expires_on)
    .bind(&c.credential_url)
    .bind(c.created_at)
    .bind(c.updated_at)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, c: &Certificate) -> Result<Certificate, sqlx::Error> {
    sqlx::query_as::<_, Certificate>(
        r#"
        UPDATE certificates
        SET name = $2, issuer = $3, issued_on = $4, expires_on = $5,
            credential_url = $6, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(c.id)
    .bind(&c.name)
    .bind(&c.issuer)
    .bind(c.issued_on)
    .bind(c.expires_on)
    .bind(&c.credential_url)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
