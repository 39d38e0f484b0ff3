//! REST client for the assistant backend
//!
//! One base URL (`<backend>/api`), a fixed JSON content type, no auth, no
//! retry and no client-side timeout. Every call issues exactly one request;
//! non-2xx answers become [`ApiError`]s carrying the backend's `detail`.

use std::sync::Arc;

use async_trait::async_trait;
use deskmate_core::AssistantApi;
use deskmate_domain::constants::API_PATH_PREFIX;
use deskmate_domain::{
    CalendarEvent, Email, EmailActionRequest, EmailConfig, FileRequest, GeneratedFile,
    LogEntry, NewEvent, NewTask, SendReply, Task, TaskStatus,
};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use super::errors::ApiError;
use crate::http::HttpClient;

/// Backend API client
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the backend at `backend_url` (its origin, without
    /// the `/api` prefix).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the URL does not parse or cannot carry
    /// a path, or the HTTP client cannot be built.
    pub fn new(backend_url: &str) -> Result<Self, ApiError> {
        let http = HttpClient::new()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;
        Self::with_http(backend_url, Arc::new(http))
    }

    pub fn with_http(backend_url: &str, http: Arc<HttpClient>) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(backend_url.trim())
            .map_err(|e| ApiError::Config(format!("Invalid backend URL '{backend_url}': {e}")))?;

        base_url
            .path_segments_mut()
            .map_err(|()| ApiError::Config(format!("Backend URL cannot be a base: {backend_url}")))?
            .pop_if_empty()
            .push(API_PATH_PREFIX.trim_start_matches('/'));

        Ok(Self { http, base_url })
    }

    /// Base URL every endpoint hangs off (`…/api`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for `segments` under the base, each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.extend(segments);
        }
        url
    }

    /// `GET` and decode a JSON body. An empty body decodes as `null`.
    #[instrument(skip(self), fields(path = %url.path()))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.execute(self.http.request(Method::GET, url)).await?;
        let body = response.text().await?;

        if body.trim().is_empty() {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|e| ApiError::Decode(format!("Empty response body: {e}")));
        }
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}")))
    }

    /// `POST` a JSON body, ignoring whatever comes back.
    #[instrument(skip(self, body), fields(path = %url.path()))]
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<(), ApiError> {
        self.execute(self.http.request(Method::POST, url).json(body)).await?;
        Ok(())
    }

    /// `POST` without a body.
    #[instrument(skip(self), fields(path = %url.path()))]
    pub async fn post_empty(&self, url: Url) -> Result<(), ApiError> {
        self.execute(self.http.request(Method::POST, url)).await?;
        Ok(())
    }

    /// `PUT` without a body; parameters travel in the query string.
    #[instrument(skip(self), fields(path = %url.path()))]
    pub async fn put_empty(&self, url: Url) -> Result<(), ApiError> {
        self.execute(self.http.request(Method::PUT, url)).await?;
        Ok(())
    }

    /// `GET` a binary body.
    #[instrument(skip(self), fields(path = %url.path()))]
    pub async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, ApiError> {
        let response = self.execute(self.http.request(Method::GET, url)).await?;
        let bytes = response.bytes().await?;
        debug!(len = bytes.len(), "downloaded body");
        Ok(bytes.to_vec())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.http.send(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        debug!(%status, error = %err, "backend rejected request");
        Err(err)
    }
}

#[async_trait]
impl AssistantApi for ApiClient {
    async fn list_emails(&self) -> deskmate_domain::Result<Vec<Email>> {
        Ok(self.get_json(self.endpoint(&["emails"])).await?)
    }

    async fn fetch_emails(&self) -> deskmate_domain::Result<()> {
        Ok(self.post_empty(self.endpoint(&["emails", "fetch"])).await?)
    }

    async fn send_reply(&self, reply: &SendReply) -> deskmate_domain::Result<()> {
        Ok(self.post_json(self.endpoint(&["emails", "send"]), reply).await?)
    }

    async fn email_action(&self, request: &EmailActionRequest) -> deskmate_domain::Result<()> {
        Ok(self.post_json(self.endpoint(&["emails", "action"]), request).await?)
    }

    async fn get_email_config(&self) -> deskmate_domain::Result<Option<EmailConfig>> {
        Ok(self.get_json(self.endpoint(&["email-config"])).await?)
    }

    async fn save_email_config(&self, config: &EmailConfig) -> deskmate_domain::Result<()> {
        Ok(self.post_json(self.endpoint(&["email-config"]), config).await?)
    }

    async fn list_tasks(&self) -> deskmate_domain::Result<Vec<Task>> {
        Ok(self.get_json(self.endpoint(&["tasks"])).await?)
    }

    async fn create_task(&self, task: &NewTask) -> deskmate_domain::Result<()> {
        Ok(self.post_json(self.endpoint(&["tasks"]), task).await?)
    }

    async fn update_task_status(&self, id: &str, status: TaskStatus) -> deskmate_domain::Result<()> {
        let mut url = self.endpoint(&["tasks", id]);
        url.query_pairs_mut().append_pair("status", status.as_str());
        Ok(self.put_empty(url).await?)
    }

    async fn list_events(&self) -> deskmate_domain::Result<Vec<CalendarEvent>> {
        Ok(self.get_json(self.endpoint(&["calendar"])).await?)
    }

    async fn create_event(&self, event: &NewEvent) -> deskmate_domain::Result<()> {
        Ok(self.post_json(self.endpoint(&["calendar"]), event).await?)
    }

    async fn list_files(&self) -> deskmate_domain::Result<Vec<GeneratedFile>> {
        Ok(self.get_json(self.endpoint(&["excel"])).await?)
    }

    async fn create_file(&self, request: &FileRequest) -> deskmate_domain::Result<()> {
        Ok(self.post_json(self.endpoint(&["excel", "create"]), request).await?)
    }

    async fn download_file(&self, id: &str) -> deskmate_domain::Result<Vec<u8>> {
        Ok(self.get_bytes(self.endpoint(&["excel", "download", id])).await?)
    }

    async fn list_logs(&self) -> deskmate_domain::Result<Vec<LogEntry>> {
        Ok(self.get_json(self.endpoint(&["logs"])).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_prefix_is_appended_once() {
        for origin in ["http://localhost:8001", "http://localhost:8001/"] {
            let client = ApiClient::new(origin).unwrap();
            assert_eq!(client.base_url().as_str(), "http://localhost:8001/api");
        }
    }

    #[test]
    fn ids_are_path_encoded() {
        let client = ApiClient::new("http://localhost:8001").unwrap();
        assert_eq!(
            client.endpoint(&["excel", "download", "a b/c"]).as_str(),
            "http://localhost:8001/api/excel/download/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_unparseable_backend() {
        assert!(matches!(ApiClient::new("not a url"), Err(ApiError::Config(_))));
        assert!(matches!(ApiClient::new("mailto:me@example.com"), Err(ApiError::Config(_))));
    }
}
