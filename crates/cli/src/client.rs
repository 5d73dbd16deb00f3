//! API client for communicating with the prediction service

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// API client for the prediction service
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid API URL")?;

        Ok(Self { client, base_url })
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }
}

// API request/response types

/// Task attributes submitted for prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    pub category: String,
    pub priority: String,
    pub subtask_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_deadline: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_duration: u32,
    pub priority_score: u8,
    pub confidence: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub actual_duration: i64,
    pub predicted_duration: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub status: String,
    pub new_mae: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub mae: f64,
    pub tasks_processed: u64,
    pub is_trained: bool,
}

/// Root-endpoint liveness banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBanner {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub components: HashMap<String, ComponentHealth>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub last_check_timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }

    #[tokio::test]
    async fn test_get_parses_json_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/metrics")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"mae": 5.0, "tasks_processed": 2, "is_trained": false}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let metrics: ModelMetrics = client.get("metrics").await.unwrap();

        mock.assert_async().await;
        assert_eq!(metrics.mae, 5.0);
        assert_eq!(metrics.tasks_processed, 2);
        assert!(!metrics.is_trained);
    }

    #[tokio::test]
    async fn test_get_surfaces_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/metrics")
            .with_status(503)
            .with_body("service unavailable")
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let result: Result<ModelMetrics> = client.get("metrics").await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("503"), "error should carry the status: {err}");
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/feedback")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "actual_duration": 10,
                "predicted_duration": 5
            })))
            .with_status(200)
            .with_body(r#"{"status": "success", "new_mae": 5.0}"#)
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let request = FeedbackRequest {
            actual_duration: 10,
            predicted_duration: 5,
        };
        let response: FeedbackResponse = client.post("feedback", &request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, "success");
        assert_eq!(response.new_mae, 5.0);
    }

    #[test]
    fn test_task_input_omits_absent_deadline() {
        let task = TaskInput {
            category: "Work".to_string(),
            priority: "medium".to_string(),
            subtask_count: 0,
            days_until_deadline: None,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("days_until_deadline").is_none());
    }
}
