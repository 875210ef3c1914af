//! Repositories on the caller's GitHub account

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use common::models::GithubRepository;
use milestones::repos::{self, GithubSort, GithubStats, RepositoryFilter, Visibility};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubQuery {
    pub search: Option<String>,
    pub language: Option<String>,
    pub visibility: Option<Visibility>,
    pub has_description: Option<bool>,
    #[serde(default)]
    pub sort: GithubSort,
}

#[derive(Serialize)]
pub struct GithubListing {
    pub repositories: Vec<GithubRepository>,
    pub stats: Option<GithubStats>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<GithubQuery>,
) -> ApiResult<Json<GithubListing>> {
    let all = state.client_for(&headers).github_repositories().await?;

    let searched: Vec<GithubRepository> = repos::search(&all, query.search.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    let filter = RepositoryFilter {
        language: query.language,
        visibility: query.visibility,
        has_description: query.has_description,
    };
    let mut selected = repos::filter(&searched, &filter);
    repos::sort_github(&mut selected, query.sort);

    Ok(Json(GithubListing {
        repositories: selected.into_iter().cloned().collect(),
        stats: repos::github_stats(&all),
    }))
}
