//! Questionnaire Repository Port
//!
//! Opaque keyed store for questionnaires.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Questionnaire};

/// Repository interface for Questionnaire entities
#[async_trait]
pub trait QuestionnaireRepository: Send + Sync {
    /// Find all Questionnaires, in whatever order the store yields them
    async fn find_all(&self) -> Result<Vec<Questionnaire>, DomainError>;

    /// Check whether a Questionnaire with this id is stored
    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError>;

    /// Find a Questionnaire by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Questionnaire>, DomainError>;

    /// Save a Questionnaire (insert or update)
    async fn save(&self, questionnaire: &Questionnaire) -> Result<Questionnaire, DomainError>;

    /// Delete a Questionnaire by ID
    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError>;
}
