//! Application configuration

use std::env;

use crate::error::{Error, Result};

const DEFAULT_BACKEND_URL: &str = "http://localhost:5175";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Praise backend (auth, repositories, badges)
    pub backend_url: String,
    /// Bearer token used when an incoming request carries none
    pub auth_token: Option<String>,
    pub host: String,
    pub port: u16,
    /// Directory holding the built dashboard
    pub static_dir: String,
    /// Public address of the dashboard, used in share links
    pub public_url: String,
    pub leaderboard_limit: u32,
    pub repository_page_limit: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup("PRAISE_BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            backend_url,
            auth_token: lookup("PRAISE_AUTH_TOKEN").filter(|t| !t.trim().is_empty()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            public_url: lookup("PUBLIC_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            leaderboard_limit: lookup("LEADERBOARD_LIMIT")
                .and_then(|l| l.parse().ok())
                .unwrap_or(10),
            repository_page_limit: lookup("REPOSITORY_PAGE_LIMIT")
                .and_then(|l| l.parse().ok())
                .unwrap_or(50),
        }
    }
}

impl Config {
    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        for (key, url) in [
            ("PRAISE_BACKEND_URL", &self.backend_url),
            ("PUBLIC_URL", &self.public_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::Config(format!(
                    "{} must be an http(s) URL, got {:?}",
                    key, url
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
