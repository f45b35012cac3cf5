//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{QuestionnaireRequest, QuestionnaireResponse};

use super::health::HealthCheck;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        super::health::health_check,
        // Questionnaire endpoints
        super::questionnaire::list_questionnaires,
        super::questionnaire::create_questionnaire,
        super::questionnaire::get_questionnaire,
        super::questionnaire::update_questionnaire,
        super::questionnaire::delete_questionnaire,
    ),
    info(
        title = "Questionnaire API",
        version = "0.1.0",
        description = "Questionnaire resource: create, read, update and delete questionnaires by id.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Questionnaire", description = "Questionnaire management"),
    ),
    components(
        schemas(
            HealthCheck,
            QuestionnaireRequest,
            QuestionnaireResponse,
        )
    ),
)]
pub struct ApiDoc;
