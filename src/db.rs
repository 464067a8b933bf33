use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::AppConfig;

pub async fn connect(config: &AppConfig) -> anyhow::Result<Option<PgPool>> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set; saved queries are unavailable");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(url)
        .await
        .context("connect to database")?;

    ensure_schema(&pool).await.context("create saved_queries table")?;
    Ok(Some(pool))
}

/// Creates the `saved_queries` table if it is missing. Safe to run on every start.
pub async fn ensure_schema(db: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS saved_queries (
            id SERIAL PRIMARY KEY,
            query_text TEXT NOT NULL,
            results JSONB,
            count INTEGER,
            avg_cal NUMERIC,
            created_at TIMESTAMPTZ DEFAULT NOW()
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"CREATE INDEX IF NOT EXISTS saved_queries_created_at_idx ON saved_queries (created_at DESC)"#,
    )
    .execute(db)
    .await?;

    tracing::debug!("saved_queries schema ready");
    Ok(())
}
