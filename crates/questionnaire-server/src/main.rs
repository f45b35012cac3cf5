use anyhow::Context;
use questionnaire::QuestionnaireRepository;
use sqlx::PgPool;
use std::sync::Arc;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
mod telemetry;

use adapters::{InMemoryQuestionnaireRepository, PgQuestionnaireRepository};
use application::QuestionnaireService;
use config::{AppConfig, StorageBackend};

/// Application service over whichever repository adapter is configured
pub type AppQuestionnaireService = QuestionnaireService<dyn QuestionnaireRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub questionnaire_service: Arc<AppQuestionnaireService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn QuestionnaireRepository>) -> Self {
        Self {
            questionnaire_service: Arc::new(QuestionnaireService::new(repo)),
        }
    }
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    let config = AppConfig::from_secrets(&secrets).context("Invalid configuration")?;
    telemetry::init(&config.log_filter);

    tracing::info!("📋 Questionnaire API initializing...");

    let repo: Arc<dyn QuestionnaireRepository> = match config.storage {
        StorageBackend::Postgres => {
            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            tracing::info!("✅ Database migrations completed");
            tracing::info!("🗄️  Storage: {}", config.storage.describe());
            Arc::new(PgQuestionnaireRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("⚠️  Storage: {}", config.storage.describe());
            Arc::new(InMemoryQuestionnaireRepository::new())
        }
    };

    let router = routes::build_router(AppState::new(repo));

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Questionnaire API ready");

    Ok(router.into())
}
