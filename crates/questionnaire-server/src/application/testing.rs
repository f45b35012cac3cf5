//! Test doubles for the repository port

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use questionnaire::{DomainError, Questionnaire, QuestionnaireRepository};

use crate::adapters::InMemoryQuestionnaireRepository;

/// Snapshot of how often each repository operation was invoked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub find_all: usize,
    pub exists_by_id: usize,
    pub find_by_id: usize,
    pub save: usize,
    pub delete_by_id: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.find_all + self.exists_by_id + self.find_by_id + self.save + self.delete_by_id
    }
}

/// In-memory repository that counts every call made through the port
#[derive(Default)]
pub struct RecordingRepository {
    inner: InMemoryQuestionnaireRepository,
    find_all: AtomicUsize,
    exists_by_id: AtomicUsize,
    find_by_id: AtomicUsize,
    save: AtomicUsize,
    delete_by_id: AtomicUsize,
}

impl RecordingRepository {
    pub fn seeded(entries: &[Questionnaire]) -> Self {
        Self {
            inner: entries.iter().cloned().collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            find_all: self.find_all.load(Ordering::SeqCst),
            exists_by_id: self.exists_by_id.load(Ordering::SeqCst),
            find_by_id: self.find_by_id.load(Ordering::SeqCst),
            save: self.save.load(Ordering::SeqCst),
            delete_by_id: self.delete_by_id.load(Ordering::SeqCst),
        }
    }

    /// Peek at the store without counting a call
    pub async fn inner_contains(&self, id: &str) -> bool {
        matches!(self.inner.exists_by_id(id).await, Ok(true))
    }
}

#[async_trait]
impl QuestionnaireRepository for RecordingRepository {
    async fn find_all(&self) -> Result<Vec<Questionnaire>, DomainError> {
        self.find_all.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all().await
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        self.exists_by_id.fetch_add(1, Ordering::SeqCst);
        self.inner.exists_by_id(id).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Questionnaire>, DomainError> {
        self.find_by_id.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn save(&self, questionnaire: &Questionnaire) -> Result<Questionnaire, DomainError> {
        self.save.fetch_add(1, Ordering::SeqCst);
        self.inner.save(questionnaire).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        self.delete_by_id.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(id).await
    }
}

/// Repository whose every operation fails with a storage error
pub struct FailingRepository;

fn unavailable() -> DomainError {
    DomainError::Repository("storage unavailable".to_string())
}

#[async_trait]
impl QuestionnaireRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<Questionnaire>, DomainError> {
        Err(unavailable())
    }

    async fn exists_by_id(&self, _id: &str) -> Result<bool, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Questionnaire>, DomainError> {
        Err(unavailable())
    }

    async fn save(&self, _questionnaire: &Questionnaire) -> Result<Questionnaire, DomainError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<(), DomainError> {
        Err(unavailable())
    }
}

/// Repository that reports every id as present but never finds it,
/// as if the record were removed right after the existence check
#[derive(Default)]
pub struct VanishingRepository {
    save: AtomicUsize,
}

impl VanishingRepository {
    pub fn saves(&self) -> usize {
        self.save.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionnaireRepository for VanishingRepository {
    async fn find_all(&self) -> Result<Vec<Questionnaire>, DomainError> {
        Ok(Vec::new())
    }

    async fn exists_by_id(&self, _id: &str) -> Result<bool, DomainError> {
        Ok(true)
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Questionnaire>, DomainError> {
        Ok(None)
    }

    async fn save(&self, questionnaire: &Questionnaire) -> Result<Questionnaire, DomainError> {
        self.save.fetch_add(1, Ordering::SeqCst);
        Ok(questionnaire.clone())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<(), DomainError> {
        Ok(())
    }
}
