//! Questionnaire API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// API Client for the Questionnaire service
pub struct QuestionnaireClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionnaireRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Turn a non-success status into a readable error message
fn describe_failure(status: StatusCode, id: Option<&str>, body: &str) -> String {
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => format!("Questionnaire '{}' not found", id),
        (StatusCode::PRECONDITION_FAILED, _) => "Title is required".to_string(),
        _ => format!("API error ({}): {}", status, body),
    }
}

async fn check(resp: Response, id: Option<&str>) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    bail!(describe_failure(status, id, &body))
}

impl QuestionnaireClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/questionnaires", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/questionnaires/{}", self.base_url, urlencoding::encode(id))
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all Questionnaires
    pub async fn list(&self) -> Result<Vec<QuestionnaireResponse>> {
        let resp = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .context("Failed to connect to Questionnaire API")?;

        check(resp, None)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Get a specific Questionnaire
    pub async fn get(&self, id: &str) -> Result<QuestionnaireResponse> {
        let resp = self
            .client
            .get(self.item_url(id))
            .send()
            .await
            .context("Failed to connect to Questionnaire API")?;

        check(resp, Some(id))
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Create a Questionnaire
    pub async fn create(&self, request: &QuestionnaireRequest) -> Result<QuestionnaireResponse> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(request)
            .send()
            .await
            .context("Failed to connect to Questionnaire API")?;

        check(resp, request.id.as_deref())
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Replace title and description of a Questionnaire
    pub async fn update(
        &self,
        id: &str,
        request: &QuestionnaireRequest,
    ) -> Result<QuestionnaireResponse> {
        let resp = self
            .client
            .put(self.item_url(id))
            .json(request)
            .send()
            .await
            .context("Failed to connect to Questionnaire API")?;

        check(resp, Some(id))
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }

    /// Delete a Questionnaire
    pub async fn delete(&self, id: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .context("Failed to connect to Questionnaire API")?;

        check(resp, Some(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_url_encodes_id() {
        let client = QuestionnaireClient::new("http://localhost:8000/");
        assert_eq!(
            client.item_url("a b/c"),
            "http://localhost:8000/questionnaires/a%20b%2Fc"
        );
        assert_eq!(client.collection_url(), "http://localhost:8000/questionnaires");
    }

    #[test]
    fn test_describe_failure() {
        assert_eq!(
            describe_failure(StatusCode::NOT_FOUND, Some("7"), ""),
            "Questionnaire '7' not found"
        );
        assert_eq!(
            describe_failure(StatusCode::PRECONDITION_FAILED, None, "title must not be empty"),
            "Title is required"
        );
        assert_eq!(
            describe_failure(StatusCode::INTERNAL_SERVER_ERROR, None, "boom"),
            "API error (500 Internal Server Error): boom"
        );
    }

    #[test]
    fn test_request_omits_missing_fields() {
        let request = QuestionnaireRequest {
            id: None,
            title: "Title1".to_string(),
            description: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"title": "Title1"})
        );
    }
}
