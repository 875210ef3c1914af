//! Application state

use axum::http::{header::AUTHORIZATION, HeaderMap};
use client::PraiseClient;
use common::{Config, Error, Result};
use std::time::Duration;

const BACKEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state
pub struct AppState {
    pub config: Config,
    http: reqwest::Client,
}

impl AppState {
    /// Validate the configuration and open the backend connection pool
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(BACKEND_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("HTTP client: {}", e)))?;
        Ok(Self { config, http })
    }

    /// Backend client acting for the caller.
    ///
    /// The caller's bearer token is forwarded; without one the configured
    /// token (if any) is used.
    pub fn client_for(&self, headers: &HeaderMap) -> PraiseClient {
        let token = bearer_token(headers).or_else(|| self.config.auth_token.clone());
        PraiseClient::with_http(self.http.clone(), &self.config.backend_url, token)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
