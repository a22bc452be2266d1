use std::time::Duration;

use async_trait::async_trait;
use common::{FileUploadForm, FrappeResponse, Method};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, error, trace, warn};

use crate::api::FrappeApi;
use crate::error::{ClientError, Result};

// Header names must be lowercase for `HeaderMap::insert`.
const CSRF_HEADER: &str = "x-frappe-csrf-token";

/// Connection settings for a Frappe site
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root, e.g. `https://erp.example.com`
    pub site_url: String,
    /// API key of a token-authenticated user
    pub api_key: Option<String>,
    /// API secret matching `api_key`
    pub api_secret: Option<String>,
    /// CSRF token of a session-authenticated user
    pub csrf_token: Option<String>,
    /// Timeout applied to every request
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            site_url: "http://localhost:8000".to_string(),
            api_key: None,
            api_secret: None,
            csrf_token: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// `FrappeApi` over HTTP.
#[derive(Debug, Clone)]
pub struct FrappeClient {
    http: reqwest::Client,
    site_url: String,
}

impl FrappeClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        match (&config.api_key, &config.api_secret) {
            (Some(key), Some(secret)) => {
                let value = HeaderValue::from_str(&format!("token {}:{}", key, secret))
                    .map_err(|e| ClientError::InvalidConfig(format!("API credentials: {}", e)))?;
                headers.insert(AUTHORIZATION, value);
            }
            (None, None) => {}
            _ => {
                return Err(ClientError::InvalidConfig(
                    "api_key and api_secret must be set together".to_string(),
                ));
            }
        }

        if let Some(token) = &config.csrf_token {
            let value = HeaderValue::from_str(token)
                .map_err(|e| ClientError::InvalidConfig(format!("CSRF token: {}", e)))?;
            headers.insert(CSRF_HEADER, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            site_url: config.site_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    fn method_url(&self, path: &str) -> String {
        format!("{}/api/method/{}", self.site_url, path)
    }

    async fn read_response(&self, endpoint: &str, response: reqwest::Response) -> Result<FrappeResponse> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("{} - Failed to read response body: {}", endpoint, e);
            e
        })?;

        if !status.is_success() {
            warn!("{} - Non-OK response: {}", endpoint, status);
            let parsed: Option<FrappeResponse> = serde_json::from_str(&body).ok();
            let exc_type = parsed.as_ref().and_then(|r| r.exc_type.clone());
            let message = parsed
                .as_ref()
                .and_then(|r| r.server_message_texts().into_iter().next())
                .or_else(|| exc_type.clone())
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

            error!("{} - Server error {}: {}", endpoint, status, message);
            if let Some(exception) = parsed.as_ref().and_then(|r| r.exception.as_deref()) {
                debug!("{} - Server exception: {}", endpoint, exception);
            }

            return Err(ClientError::Server {
                status: status.as_u16(),
                exc_type,
                message,
            });
        }

        trace!("{} - Response received, parsing JSON", endpoint);
        serde_json::from_str::<FrappeResponse>(&body).map_err(|e| {
            error!("{} - Failed to parse response: {}", endpoint, e);
            ClientError::from(e)
        })
    }
}

#[async_trait]
impl FrappeApi for FrappeClient {
    async fn call(&self, method: Method, args: Value) -> Result<FrappeResponse> {
        let path = method.path();
        let url = self.method_url(&path);
        debug!("POST request to: {}", url);

        let response = self
            .http
            .post(&url)
            .json(&args)
            .send()
            .await
            .map_err(|e| {
                error!("POST {} - Request failed: {}", path, e);
                e
            })?;

        self.read_response(&path, response).await
    }

    async fn upload(&self, form: FileUploadForm) -> Result<FrappeResponse> {
        let url = self.method_url("upload_file");
        debug!("Uploading {} ({} bytes) to: {}", form.file_name, form.file_size, url);

        let text_fields = form.text_fields();
        let part = Part::bytes(form.file).file_name(form.file_name);
        let mut multipart = Form::new().part("file", part);
        for (name, value) in text_fields {
            multipart = multipart.text(name, value);
        }

        let response = self
            .http
            .post(&url)
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| {
                error!("POST upload_file - Request failed: {}", e);
                e
            })?;

        self.read_response("upload_file", response).await
    }
}
