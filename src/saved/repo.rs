use serde_json::Value;
use sqlx::PgPool;

use super::repo_types::{InsertedRow, NewSavedQuery, SavedQueryRow};

pub const DEFAULT_LIST_LIMIT: i64 = 50;

pub async fn save_query(db: &PgPool, new: &NewSavedQuery) -> Result<InsertedRow, sqlx::Error> {
    sqlx::query_as::<_, InsertedRow>(
        r#"
        INSERT INTO saved_queries (query_text, results, count, avg_cal)
        VALUES ($1, $2, $3, $4::float8)
        RETURNING id, created_at
        "#,
    )
    .bind(&new.query)
    .bind(Value::Array(new.results.clone()))
    .bind(new.count)
    .bind(new.avg_cal)
    .fetch_one(db)
    .await
}

pub async fn list_saved(db: &PgPool, limit: i64) -> Result<Vec<SavedQueryRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedQueryRow>(
        r#"
        SELECT id, query_text, results, count, avg_cal::float8 AS avg_cal, created_at
        FROM saved_queries
        ORDER BY created_at DESC, id DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await
}

pub async fn get_saved_by_id(db: &PgPool, id: i32) -> Result<Option<SavedQueryRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedQueryRow>(
        r#"
        SELECT id, query_text, results, count, avg_cal::float8 AS avg_cal, created_at
        FROM saved_queries
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}
