//! Questionnaire Application Service (Use Case)
//!
//! Validation runs before any repository call. Existence is checked
//! before every fetch, update and delete, so an unknown id never reaches
//! `find_by_id`, `save` or `delete_by_id`.

use std::sync::Arc;
use uuid::Uuid;

use questionnaire::{
    validate, DomainError, Questionnaire, QuestionnaireCandidate, QuestionnaireRepository,
};

const ENTITY: &str = "Questionnaire";

/// Application service for Questionnaire operations
pub struct QuestionnaireService<R: QuestionnaireRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: QuestionnaireRepository + ?Sized> QuestionnaireService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Questionnaires in repository order
    pub async fn list_all(&self) -> Result<Vec<Questionnaire>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Questionnaire by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Questionnaire, DomainError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::not_found(ENTITY, id));
        }

        // Removed between the existence check and the fetch.
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    /// Create a new Questionnaire
    ///
    /// A missing or empty id is replaced with a generated UUID.
    pub async fn create(
        &self,
        candidate: QuestionnaireCandidate,
    ) -> Result<Questionnaire, DomainError> {
        let title = validate(&candidate)?.to_string();

        let id = match candidate.id {
            Some(id) if !id.is_empty() => id,
            _ => Uuid::new_v4().to_string(),
        };

        let questionnaire = Questionnaire::new(id, title, candidate.description);
        let saved = self.repo.save(&questionnaire).await?;

        tracing::info!("Created Questionnaire: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Update title and description of an existing Questionnaire
    ///
    /// The stored id wins over any id carried by the candidate.
    pub async fn update(
        &self,
        id: &str,
        candidate: QuestionnaireCandidate,
    ) -> Result<Questionnaire, DomainError> {
        let title = validate(&candidate)?.to_string();

        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::not_found(ENTITY, id));
        }

        let mut current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        current.apply_changes(title, candidate.description);
        let saved = self.repo.save(&current).await?;

        tracing::info!("Updated Questionnaire: {}", saved.id);

        Ok(saved)
    }

    /// Delete a Questionnaire
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::not_found(ENTITY, id));
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!("Deleted Questionnaire: {}", id);

        Ok(())
    }
}
