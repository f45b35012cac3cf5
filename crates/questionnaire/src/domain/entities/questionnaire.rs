//! Questionnaire - the single resource exposed by the service
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Questionnaire - persisted resource
///
/// A stored questionnaire always carries a non-empty title; the id is
/// fixed at creation and never rewritten by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

/// Candidate questionnaire as received from a caller, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireCandidate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Questionnaire {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description,
        }
    }

    /// Replace the mutable fields, keeping the id
    pub fn apply_changes(&mut self, title: String, description: Option<String>) {
        self.title = title;
        self.description = description;
    }
}
