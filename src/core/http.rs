use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::core::chargebacks::ChargebacksService;
use crate::core::config::{ClientConfig, ConfigError};
use crate::core::error::{ApiError, Result, TransportError};

/// A request ready to hand to a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Vec<u8>>,
}

/// Raw response returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub content: Vec<u8>,
}

/// Turns a relative API path into a transport-ready request.
pub trait RequestBuilder: Send + Sync {
    fn new_api_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiRequest>;
}

/// Executes requests. Non-2xx statuses are reported as errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Resolve `path` against `base`, which must end with a slash.
pub fn resolve_url(base: &Url, path: &str) -> Result<Url> {
    if !base.path().ends_with('/') {
        return Err(ApiError::RequestConstruction(format!(
            "base URL must have a trailing slash, got: {}",
            base
        )));
    }
    if path.starts_with('/') {
        return Err(ApiError::RequestConstruction(format!(
            "path must be relative to the base URL, got: {}",
            path
        )));
    }
    base.join(path)
        .map_err(|e| ApiError::RequestConstruction(format!("invalid path '{}': {}", path, e)))
}

/// HTTP client for the platform API, backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        let issues = config.validate();
        if !issues.is_empty() {
            return Err(ConfigError::Invalid(issues.join("; ")));
        }
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_token: config.api_token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn chargebacks(&self) -> ChargebacksService<'_, Self> {
        ChargebacksService::new(self)
    }
}

impl RequestBuilder for ApiClient {
    fn new_api_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiRequest> {
        let url = resolve_url(&self.base_url, path)?;
        debug!(method = %method, url = %url, "built API request");
        Ok(ApiRequest { method, url, body })
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self.http.request(request.method.clone(), request.url.clone());
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(TransportError::Network)?;
        let status = response.status();
        let content = response
            .bytes()
            .await
            .map_err(TransportError::Network)?
            .to_vec();
        debug!(
            method = %request.method,
            url = %request.url,
            status = status.as_u16(),
            bytes = content.len(),
            "received API response"
        );

        if !status.is_success() {
            warn!(url = %request.url, status = status.as_u16(), "API request failed");
            let body = String::from_utf8_lossy(&content).into_owned();
            return Err(TransportError::from_status(status, body).into());
        }

        Ok(ApiResponse { status, content })
    }
}
