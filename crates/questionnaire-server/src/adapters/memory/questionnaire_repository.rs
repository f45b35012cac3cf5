//! In-memory implementation of QuestionnaireRepository
//!
//! Used when `QUESTIONNAIRE_STORAGE=memory` and as the fake behind the
//! service and route tests. Listing is ordered by id.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use questionnaire::{DomainError, Questionnaire, QuestionnaireRepository};

#[derive(Default)]
pub struct InMemoryQuestionnaireRepository {
    entries: RwLock<BTreeMap<String, Questionnaire>>,
}

impl InMemoryQuestionnaireRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<Questionnaire> for InMemoryQuestionnaireRepository {
    fn from_iter<I: IntoIterator<Item = Questionnaire>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|q| (q.id.clone(), q)).collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl QuestionnaireRepository for InMemoryQuestionnaireRepository {
    async fn find_all(&self) -> Result<Vec<Questionnaire>, DomainError> {
        Ok(self.entries.read().await.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.entries.read().await.contains_key(id))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Questionnaire>, DomainError> {
        Ok(self.entries.read().await.get(id).cloned())
    }

    async fn save(&self, questionnaire: &Questionnaire) -> Result<Questionnaire, DomainError> {
        self.entries
            .write()
            .await
            .insert(questionnaire.id.clone(), questionnaire.clone());
        Ok(questionnaire.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        self.entries.write().await.remove(id);
        Ok(())
    }
}
