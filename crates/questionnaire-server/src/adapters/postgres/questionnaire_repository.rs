//! PostgreSQL implementation of QuestionnaireRepository

use async_trait::async_trait;
use sqlx::PgPool;

use questionnaire::{DomainError, Questionnaire, QuestionnaireRepository};

/// PostgreSQL implementation of QuestionnaireRepository
pub struct PgQuestionnaireRepository {
    pool: PgPool,
}

impl PgQuestionnaireRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct QuestionnaireRow {
    id: String,
    title: String,
    description: Option<String>,
}

impl From<QuestionnaireRow> for Questionnaire {
    fn from(row: QuestionnaireRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
        }
    }
}

#[async_trait]
impl QuestionnaireRepository for PgQuestionnaireRepository {
    async fn find_all(&self) -> Result<Vec<Questionnaire>, DomainError> {
        let rows = sqlx::query_as::<_, QuestionnaireRow>(
            "SELECT id, title, description FROM questionnaires",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM questionnaires WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Questionnaire>, DomainError> {
        let row = sqlx::query_as::<_, QuestionnaireRow>(
            "SELECT id, title, description FROM questionnaires WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, questionnaire: &Questionnaire) -> Result<Questionnaire, DomainError> {
        let row = sqlx::query_as::<_, QuestionnaireRow>(
            r#"
            INSERT INTO questionnaires (id, title, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET title = EXCLUDED.title, description = EXCLUDED.description
            RETURNING id, title, description
            "#,
        )
        .bind(&questionnaire.id)
        .bind(&questionnaire.title)
        .bind(&questionnaire.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM questionnaires WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(())
    }
}
