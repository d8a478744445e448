//! Async HTTP client for the NotifyMe backend
//!
//! Uses reqwest for HTTP. The API key travels in the `X-API-Key` header so it
//! never ends up in URLs, proxy logs or browser-style history.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    DashboardStats, Notification, QuickTest, SendRequest, SendResponse, StatusFilter, Template,
    TemplateInput,
};
use crate::config::ServerConfig;
use crate::error::ConsoleError;

/// Header carrying the API credential
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Async NotifyMe API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend
    ///
    /// Fails when the base URL is not an absolute http(s) URL or the API key is
    /// not a valid header value.
    pub fn new(config: &ServerConfig) -> Result<Self, ConsoleError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(api_key) = config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            let mut value = HeaderValue::from_str(api_key.trim())
                .map_err(|e| ConsoleError::InvalidApiKey(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConsoleError::HttpClient(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let response = self.execute(self.client.get(self.url("/api/dashboard/stats"))).await?;
        read_json(response).await
    }

    pub async fn notifications(&self, filter: StatusFilter) -> Result<Vec<Notification>, ApiError> {
        let mut request = self.client.get(self.url("/api/notifications"));
        if let Some(status) = filter.query_value() {
            request = request.query(&[("status", status)]);
        }
        let response = self.execute(request).await?;
        read_json(response).await
    }

    pub async fn notification(&self, id: i64) -> Result<Notification, ApiError> {
        let url = self.url(&format!("/api/notifications/{}", id));
        let response = self.execute(self.client.get(url)).await?;
        read_json(response).await
    }

    pub async fn templates(&self) -> Result<Vec<Template>, ApiError> {
        let response = self.execute(self.client.get(self.url("/api/templates"))).await?;
        read_json(response).await
    }

    pub async fn create_template(&self, input: &TemplateInput) -> Result<Template, ApiError> {
        let request = self.client.post(self.url("/api/templates")).json(input);
        let response = self.execute(request).await?;
        read_json(response).await
    }

    pub async fn update_template(
        &self,
        id: i64,
        input: &TemplateInput,
    ) -> Result<Template, ApiError> {
        let url = self.url(&format!("/api/templates/{}", id));
        let response = self.execute(self.client.put(url).json(input)).await?;
        read_json(response).await
    }

    pub async fn delete_template(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/templates/{}", id));
        self.execute(self.client.delete(url)).await?;
        Ok(())
    }

    /// Send a notification
    ///
    /// A 2xx reply may still carry `success: false`; callers inspect the flag.
    pub async fn send_notification(&self, request: &SendRequest) -> Result<SendResponse, ApiError> {
        let response = self
            .execute(self.client.post(self.url("/api/notify")).json(request))
            .await?;
        read_json(response).await
    }

    pub async fn send_test(&self, test: QuickTest) -> Result<SendResponse, ApiError> {
        let url = self.url(&format!("/api/test/send-{}", test.template_name()));
        let response = self.execute(self.client.post(url)).await?;
        read_json(response).await
    }

    /// Send the request and turn non-2xx replies into [`ApiError::Status`]
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            log::warn!("Request failed: {}", e);
            ApiError::Network(e.to_string())
        })?;

        #[cfg(debug_assertions)]
        log::debug!("{} -> {}", response.url().path(), response.status());

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            code,
            message: extract_message(&body),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pulls `message` out of a JSON error body
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String, ConsoleError> {
    let invalid = |reason: String| ConsoleError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.query().is_some() {
        return Err(invalid("query strings are not allowed".to_string()));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
