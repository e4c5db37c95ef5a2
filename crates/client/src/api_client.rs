use chrono::{DateTime, Utc};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// Client-side errors. Server rejections carry the HTTP status and the
/// `error` message from the response body.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for gateway calls.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// An app record as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct App {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateAppRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAppRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAppResponse {
    pub message: String,
    pub deleted: bool,
    pub id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed HTTP gateway, one method per API operation. No caching, no retries,
/// no request deduplication; every failure propagates to the caller.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn send_json<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            // Failure bodies carry at least {"error": ...}; fall back to the
            // raw body when they don't parse.
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|parsed| parsed.error)
                .unwrap_or(body);
            return Err(ClientError::Api { status, message });
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn list_apps(&self) -> ClientResult<Vec<App>> {
        let url = self.url("/api/apps")?;
        self.send_json(self.http.get(url)).await
    }

    pub async fn get_app(&self, id: Uuid) -> ClientResult<App> {
        let url = self.url(&format!("/api/apps/{id}"))?;
        self.send_json(self.http.get(url)).await
    }

    pub async fn create_app(&self, req: &CreateAppRequest) -> ClientResult<App> {
        let url = self.url("/api/apps")?;
        self.send_json(self.http.post(url).json(req)).await
    }

    pub async fn update_app(&self, id: Uuid, req: &UpdateAppRequest) -> ClientResult<App> {
        let url = self.url(&format!("/api/apps/{id}"))?;
        self.send_json(self.http.put(url).json(req)).await
    }

    pub async fn delete_app(&self, id: Uuid) -> ClientResult<DeleteAppResponse> {
        let url = self.url(&format!("/api/apps/{id}"))?;
        self.send_json(self.http.delete(url)).await
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let url = self.url("/api/health")?;
        self.send_json(self.http.get(url)).await
    }
}
