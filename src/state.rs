use crate::config::AppConfig;
use crate::db;
use crate::error::{AppError, DATABASE_NOT_CONFIGURED};
use crate::fdc::{FdcClient, FoodProvider};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Option<PgPool>,
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn FoodProvider>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = db::connect(&config).await?;

        if config.fdc.api_key.is_none() {
            tracing::warn!("no FDC API key configured; searches will fail");
        }
        let provider = Arc::new(FdcClient::new(
            &config.fdc.base_url,
            config.fdc.api_key.clone(),
        )) as Arc<dyn FoodProvider>;

        Ok(Self {
            db,
            config,
            provider,
        })
    }

    pub fn from_parts(
        db: Option<PgPool>,
        config: Arc<AppConfig>,
        provider: Arc<dyn FoodProvider>,
    ) -> Self {
        Self {
            db,
            config,
            provider,
        }
    }

    /// The pool, or the configuration error every persistence endpoint reports.
    pub fn require_db(&self) -> Result<&PgPool, AppError> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::Config(DATABASE_NOT_CONFIGURED.into()))
    }
}
