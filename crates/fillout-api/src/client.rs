use crate::errors::{ApiError, Result};
use fillout_core::{
    extract_error_message, failure_message, mask_secret, validate_api_key, QueryParams, Region,
};
use log::{debug, error, log_enabled, trace, Level};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use url::Url;

/// Trait for providing configuration to the API client
/// This allows the embedding application to keep its own config system
pub trait ApiConfig {
    type Error: From<ApiError>;

    /// Get the API key for authentication
    fn get_api_key(&self) -> std::result::Result<String, Self::Error>;

    /// Get the region (optional, defaults to US)
    fn get_region(&self) -> std::result::Result<Option<Region>, Self::Error> {
        Ok(None)
    }

    /// Get a custom base URL (optional, overrides the region)
    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }
}

/// HTTP transport for the Fillout REST API.
///
/// Holds the API key and resolved base URL, attaches the bearer header to
/// every request and turns non-success responses into [`ApiError::Request`].
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct FilloutApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FilloutApiClient {
    /// Create a new API client for a region (US when `None`)
    pub fn new(api_key: impl Into<String>, region: Option<Region>) -> Result<Self> {
        let region = region.unwrap_or_default();
        debug!("Creating FilloutApiClient for region {}", region);
        Self::build(api_key.into(), region.base_url().to_string())
    }

    /// Create API client with custom base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        debug!("Creating FilloutApiClient with custom base URL: {}", base_url);
        let api_key = api_key.into();
        validate_api_key(&api_key)?;
        Url::parse(base_url)?;
        Self::build(api_key, base_url.trim_end_matches('/').to_string())
    }

    /// Create API client from any configuration implementing ApiConfig trait
    pub fn from_config<C>(config: &C) -> std::result::Result<Self, C::Error>
    where
        C: ApiConfig,
    {
        debug!("Creating FilloutApiClient from config");
        let api_key = config.get_api_key()?;

        let client = match config.get_base_url()? {
            Some(url) => {
                debug!("Got custom base URL from config: {}", url);
                Self::with_base_url(api_key, &url)?
            }
            None => Self::new(api_key, config.get_region()?)?,
        };

        Ok(client)
    }

    fn build(api_key: String, base_url: String) -> Result<Self> {
        if let Err(e) = validate_api_key(&api_key) {
            error!("Rejected API key with unrecognized format");
            return Err(e.into());
        }

        debug!("  API Key: {}", mask_secret(&api_key));
        debug!("  Base URL: {}", base_url);

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url,
        })
    }

    /// Use a caller-configured reqwest client (timeouts, proxies, TLS)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL. Every segment is percent-encoded and only the
    /// truthy query parameters are appended.
    pub fn url(&self, segments: &[&str], query: Option<&QueryParams>) -> Result<Url> {
        let path = segments
            .iter()
            .map(|segment| urlencoding::encode(segment))
            .collect::<Vec<_>>()
            .join("/");

        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))?;

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Make a GET request
    pub(crate) async fn get(&self, url: Url, action: &str) -> Result<Response> {
        debug!("HTTP GET request to: {}", url);
        trace!("  Authorization: Bearer {}", mask_secret(&self.api_key));

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(|e| {
                error!("GET request failed: {:?}", e);
                ApiError::Transport(e)
            })?;

        self.handle_response(response, action).await
    }

    /// Make a POST request with a JSON body
    pub(crate) async fn post<B>(&self, url: Url, body: &B, action: &str) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        debug!("HTTP POST request to: {}", url);
        trace!("  Authorization: Bearer {}", mask_secret(&self.api_key));
        trace!("  Content-Type: application/json");

        if log_enabled!(Level::Trace) {
            trace!(
                "Request body: {}",
                serde_json::to_string(body).unwrap_or_else(|_| "Invalid JSON".to_string())
            );
        }

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.bearer())
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("POST request failed: {:?}", e);
                ApiError::Transport(e)
            })?;

        self.handle_response(response, action).await
    }

    /// Make a DELETE request
    pub(crate) async fn delete(&self, url: Url, action: &str) -> Result<Response> {
        debug!("HTTP DELETE request to: {}", url);
        trace!("  Authorization: Bearer {}", mask_secret(&self.api_key));

        let response = self
            .client
            .delete(url)
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(|e| {
                error!("DELETE request failed: {:?}", e);
                ApiError::Transport(e)
            })?;

        self.handle_response(response, action).await
    }

    /// Decode a successful response body
    pub(crate) async fn json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        response.json().await.map_err(|e| {
            error!("Failed to decode response body: {:?}", e);
            ApiError::Transport(e)
        })
    }

    /// Handle HTTP response and convert errors.
    ///
    /// A JSON body with a `message` field supplies the error text; otherwise
    /// it reads `Failed to <action> with status code <status>`.
    async fn handle_response(&self, response: Response, action: &str) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            return Ok(response);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.unwrap_or_default();

        error!("Request failed with status: {}", status);
        debug!("Error response body: {}", body);

        let message = extract_error_message(content_type.as_deref(), &body)
            .unwrap_or_else(|| failure_message(action, status.as_u16()));

        Err(ApiError::Request {
            status: status.as_u16(),
            message,
        })
    }
}

impl fmt::Debug for FilloutApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilloutApiClient")
            .field("api_key", &mask_secret(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}
