//! REST client for the Praise backend (auth, repositories, badges)

use common::models::{
    BadgeDefinition, BadgeProgress, CheckBadgesResult, Envelope, GithubRepository,
    GithubRepositoryList, ImportResult, LeaderboardEntry, Repository, RepositoryPage, User,
    UserRole,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },
    #[error("Backend rejected request: {0}")]
    Rejected(String),
    #[error("Backend API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid repository id: {0:?}")]
    InvalidId(String),
}

/// Query for the imported repository list
#[derive(Debug, Clone)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub role: Option<UserRole>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 50,
            search: None,
            role: None,
        }
    }
}

impl ListParams {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            query.push(("search", search.to_string()));
        }
        if let Some(role) = self.role {
            let role = match role {
                UserRole::Owner => "owner",
                UserRole::Contributor => "contributor",
            };
            query.push(("role", role.to_string()));
        }
        query
    }
}

/// Error body the backend sends alongside non-2xx statuses
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Praise backend client
#[derive(Clone)]
pub struct PraiseClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl PraiseClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, token)
    }

    /// Build on an existing connection pool
    pub fn with_http(
        client: reqwest::Client,
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Backend URL built from path segments. Each segment is percent-encoded,
    /// so ids cannot add path components or a query string.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Endpoint under a repository id taken from the caller
    fn repository_endpoint(
        &self,
        prefix: &[&str],
        id: &str,
        suffix: &[&str],
    ) -> Result<Url, ClientError> {
        if matches!(id.trim(), "" | "." | "..") {
            return Err(ClientError::InvalidId(id.to_string()));
        }
        let segments: Vec<&str> = prefix
            .iter()
            .copied()
            .chain(std::iter::once(id))
            .chain(suffix.iter().copied())
            .collect();
        self.endpoint(&segments)
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("praise/0.1"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(ref token) = self.token {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, val);
            }
        }
        headers
    }

    async fn envelope<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        what: &str,
    ) -> Result<Envelope<T>, ClientError> {
        let resp = req.headers(self.headers()).send().await?;

        let status = resp.status();
        if status.is_success() {
            let envelope: Envelope<T> = resp.json().await?;
            if !envelope.success {
                let message = envelope
                    .message
                    .unwrap_or_else(|| format!("Failed to {}", what));
                return Err(ClientError::Rejected(message));
            }
            return Ok(envelope);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return Err(ClientError::RateLimited { retry_after });
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(message)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
            _ => Err(ClientError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }

    async fn data<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        what: &str,
    ) -> Result<T, ClientError> {
        self.envelope(req, what)
            .await?
            .data
            .ok_or_else(|| ClientError::Rejected(format!("Failed to {}: empty response", what)))
    }

    async fn get<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, ClientError> {
        debug!("GET {}", url);
        self.data(self.client.get(url), what).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: serde_json::Value,
        what: &str,
    ) -> Result<T, ClientError> {
        debug!("POST {}", url);
        self.data(self.client.post(url).json(&body), what).await
    }

    /// Where to send the browser to start GitHub OAuth
    pub fn login_url(&self) -> String {
        self.url("/auth/github")
    }

    /// The signed-in user
    pub async fn me(&self) -> Result<User, ClientError> {
        self.get(self.endpoint(&["auth", "me"])?, "fetch current user").await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let url = self.endpoint(&["auth", "logout"])?;
        debug!("POST {}", url);
        self.envelope::<serde_json::Value>(self.client.post(url), "log out")
            .await?;
        info!("Logged out");
        Ok(())
    }

    /// Repositories on the user's GitHub account
    pub async fn github_repositories(&self) -> Result<Vec<GithubRepository>, ClientError> {
        let list: GithubRepositoryList = self
            .get(
                self.endpoint(&["github", "repositories"])?,
                "fetch repositories",
            )
            .await?;
        Ok(list.repositories)
    }

    /// Repositories already imported into Praise
    pub async fn list_repositories(
        &self,
        params: &ListParams,
    ) -> Result<RepositoryPage, ClientError> {
        let url = self.endpoint(&["api", "repositories"])?;
        debug!("GET {} {:?}", url, params);
        self.data(
            self.client.get(url).query(&params.query()),
            "fetch repositories",
        )
        .await
    }

    pub async fn repository(&self, repository_id: &str) -> Result<Repository, ClientError> {
        let url = self.repository_endpoint(&["api", "repositories"], repository_id, &[])?;
        self.get(url, "fetch repository details").await
    }

    /// Import GitHub repositories by their GitHub ids
    pub async fn import_repositories(
        &self,
        repository_ids: &[i64],
    ) -> Result<ImportResult, ClientError> {
        info!("Importing {} repositories", repository_ids.len());
        self.post(
            self.endpoint(&["api", "repositories", "import"])?,
            json!({ "repositoryIds": repository_ids }),
            "import repositories",
        )
        .await
    }

    /// Ask the backend to evaluate and award badges for a repository
    pub async fn check_badges(
        &self,
        repository_id: &str,
    ) -> Result<CheckBadgesResult, ClientError> {
        let result: CheckBadgesResult = self
            .post(
                self.endpoint(&["api", "badges", "check"])?,
                json!({ "repositoryId": repository_id }),
                "check badges",
            )
            .await?;
        if !result.newly_awarded.is_empty() {
            info!(
                "🏆 {} new badge(s) in repository {}",
                result.newly_awarded.len(),
                repository_id
            );
        }
        Ok(result)
    }

    /// Badges the user holds in a repository
    pub async fn user_badges(
        &self,
        repository_id: &str,
    ) -> Result<Vec<BadgeDefinition>, ClientError> {
        let url =
            self.repository_endpoint(&["api", "badges", "repository"], repository_id, &[])?;
        self.get(url, "fetch user badges").await
    }

    pub async fn leaderboard(
        &self,
        repository_id: &str,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, ClientError> {
        let url = self.repository_endpoint(
            &["api", "badges", "repository"],
            repository_id,
            &["leaderboard"],
        )?;
        debug!("GET {} limit={}", url, limit);
        self.data(
            self.client.get(url).query(&[("limit", limit)]),
            "fetch leaderboard",
        )
        .await
    }

    /// Badge definitions, stats and activity for the milestone view
    pub async fn badge_progress(&self, repository_id: &str) -> Result<BadgeProgress, ClientError> {
        let url = self.repository_endpoint(
            &["api", "badges", "repository"],
            repository_id,
            &["progress"],
        )?;
        let progress: BadgeProgress = self.get(url, "fetch badge progress").await?;
        if progress.badge_progress.is_empty() {
            warn!("No badge definitions for repository {}", repository_id);
        }
        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PraiseClient::new("http://localhost:5175/", None);
        assert!(client.token().is_none());
        assert_eq!(client.base_url(), "http://localhost:5175");
        assert_eq!(client.login_url(), "http://localhost:5175/auth/github");

        let client = PraiseClient::new("http://localhost:5175", Some("test".to_string()));
        assert_eq!(client.token(), Some("test"));
    }

    #[test]
    fn test_bearer_header_only_with_token() {
        let anon = PraiseClient::new("http://x", None);
        assert!(anon.headers().get(AUTHORIZATION).is_none());

        let authed = PraiseClient::new("http://x", Some("abc".to_string()));
        assert_eq!(authed.headers().get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn test_repository_ids_stay_in_one_segment() {
        let client = PraiseClient::new("http://localhost:5175", None);

        let url = client
            .repository_endpoint(
                &["api", "badges", "repository"],
                "../../../auth/me",
                &["progress"],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5175/api/badges/repository/..%2F..%2F..%2Fauth%2Fme/progress"
        );

        let url = client
            .repository_endpoint(&["api", "repositories"], "x?limit=9999&", &[])
            .unwrap();
        assert!(url.query().is_none());
        assert_eq!(url.path_segments().unwrap().count(), 3);

        for id in ["", "..", " . "] {
            let err = client
                .repository_endpoint(&["api", "repositories"], id, &[])
                .unwrap_err();
            assert!(matches!(err, ClientError::InvalidId(_)));
        }
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = PraiseClient::new("http://backend.test/praise/", None);
        let url = client.endpoint(&["auth", "me"]).unwrap();
        assert_eq!(url.as_str(), "http://backend.test/praise/auth/me");
    }

    #[test]
    fn test_list_params_query() {
        let query = ListParams::default().query();
        assert_eq!(
            query,
            vec![("page", "1".to_string()), ("limit", "50".to_string())]
        );

        let query = ListParams {
            search: Some("praise".to_string()),
            role: Some(UserRole::Owner),
            ..Default::default()
        }
        .query();
        assert!(query.contains(&("search", "praise".to_string())));
        assert!(query.contains(&("role", "owner".to_string())));
    }
}
