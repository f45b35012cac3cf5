//! Questionnaire request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use questionnaire::{Questionnaire, QuestionnaireCandidate};

/// Create/Update Questionnaire request
///
/// `title` is required by the handlers; it is optional here so that a
/// missing title reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuestionnaireRequest {
    /// Caller-assigned id. Ignored on update.
    #[schema(example = "1")]
    #[serde(default)]
    pub id: Option<String>,
    #[schema(example = "Title1")]
    #[serde(default)]
    pub title: Option<String>,
    #[schema(example = "Description1")]
    #[serde(default)]
    pub description: Option<String>,
}

/// Questionnaire response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuestionnaireResponse {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Title1")]
    pub title: String,
    #[schema(example = "Description1")]
    pub description: Option<String>,
}

impl From<QuestionnaireRequest> for QuestionnaireCandidate {
    fn from(request: QuestionnaireRequest) -> Self {
        Self {
            id: request.id,
            title: request.title,
            description: request.description,
        }
    }
}

impl From<Questionnaire> for QuestionnaireResponse {
    fn from(questionnaire: Questionnaire) -> Self {
        Self {
            id: questionnaire.id,
            title: questionnaire.title,
            description: questionnaire.description,
        }
    }
}
