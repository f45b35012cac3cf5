//! Questionnaire API Routes
//!
//! - /health - Liveness check
//! - /questionnaires - Questionnaire CRUD
//! - /swagger-ui, /api-docs/openapi.json - OpenAPI documentation

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;

pub mod health;
pub mod questionnaire;
pub mod swagger;

/// Full application router with shared state applied
pub fn build_router(state: AppState) -> Router {
    let openapi = swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health::health_check))
        .merge(questionnaire::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
