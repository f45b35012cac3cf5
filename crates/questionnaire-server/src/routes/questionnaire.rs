//! Questionnaire Routes
//!
//! HTTP handlers that delegate to QuestionnaireService and map its
//! outcomes to status codes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use questionnaire::DomainError;

use crate::models::{QuestionnaireRequest, QuestionnaireResponse};
use crate::AppState;

type ApiError = (StatusCode, String);

fn error_response(e: DomainError) -> ApiError {
    match e {
        DomainError::Validation(msg) => (StatusCode::PRECONDITION_FAILED, msg),
        DomainError::NotFound { .. } => {
            (StatusCode::NOT_FOUND, "Questionnaire not found".to_string())
        }
        DomainError::Repository(_) => {
            tracing::error!("Repository failure: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// List all Questionnaires
#[utoipa::path(
    get,
    path = "/questionnaires",
    responses(
        (status = 200, description = "List of all Questionnaires", body = Vec<QuestionnaireResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Questionnaire"
)]
pub async fn list_questionnaires(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionnaireResponse>>, ApiError> {
    let questionnaires = state
        .questionnaire_service
        .list_all()
        .await
        .map_err(error_response)?;

    Ok(Json(questionnaires.into_iter().map(Into::into).collect()))
}

/// Create new Questionnaire
#[utoipa::path(
    post,
    path = "/questionnaires",
    request_body = QuestionnaireRequest,
    responses(
        (status = 201, description = "Questionnaire created successfully", body = QuestionnaireResponse),
        (status = 412, description = "Title is missing or empty"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Questionnaire"
)]
pub async fn create_questionnaire(
    State(state): State<AppState>,
    Json(payload): Json<QuestionnaireRequest>,
) -> Result<(StatusCode, Json<QuestionnaireResponse>), ApiError> {
    let questionnaire = state
        .questionnaire_service
        .create(payload.into())
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(questionnaire.into())))
}

/// Get Questionnaire by ID
#[utoipa::path(
    get,
    path = "/questionnaires/{id}",
    params(
        ("id" = String, Path, description = "Questionnaire ID")
    ),
    responses(
        (status = 200, description = "Questionnaire found", body = QuestionnaireResponse),
        (status = 404, description = "Questionnaire not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Questionnaire"
)]
pub async fn get_questionnaire(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireResponse>, ApiError> {
    let questionnaire = state
        .questionnaire_service
        .get_by_id(&id)
        .await
        .map_err(error_response)?;

    Ok(Json(questionnaire.into()))
}

/// Update Questionnaire
#[utoipa::path(
    put,
    path = "/questionnaires/{id}",
    params(
        ("id" = String, Path, description = "Questionnaire ID")
    ),
    request_body = QuestionnaireRequest,
    responses(
        (status = 200, description = "Questionnaire updated successfully", body = QuestionnaireResponse),
        (status = 404, description = "Questionnaire not found"),
        (status = 412, description = "Title is missing or empty"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Questionnaire"
)]
pub async fn update_questionnaire(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<QuestionnaireRequest>,
) -> Result<Json<QuestionnaireResponse>, ApiError> {
    let questionnaire = state
        .questionnaire_service
        .update(&id, payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(questionnaire.into()))
}

/// Delete Questionnaire
#[utoipa::path(
    delete,
    path = "/questionnaires/{id}",
    params(
        ("id" = String, Path, description = "Questionnaire ID")
    ),
    responses(
        (status = 204, description = "Questionnaire deleted successfully"),
        (status = 404, description = "Questionnaire not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Questionnaire"
)]
pub async fn delete_questionnaire(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .questionnaire_service
        .delete(&id)
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questionnaires",
            get(list_questionnaires).post(create_questionnaire),
        )
        .route(
            "/questionnaires/:id",
            get(get_questionnaire)
                .put(update_questionnaire)
                .delete(delete_questionnaire),
        )
}
