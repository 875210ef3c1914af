//! Imported repository routes

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use client::ListParams;
use common::models::{ImportResult, Pagination, Repository, UserRole};
use milestones::repos::{self, ImportedSort, ImportedStats};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub role: Option<UserRole>,
    #[serde(default)]
    pub sort: ImportedSort,
}

#[derive(Serialize)]
pub struct RepositoryListing {
    pub repositories: Vec<Repository>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    pub stats: Option<ImportedStats>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<RepositoryListing>> {
    let params = ListParams {
        page: query.page.unwrap_or(1).max(1),
        limit: query
            .limit
            .unwrap_or(state.config.repository_page_limit)
            .clamp(1, 100),
        search: query.search,
        role: query.role,
    };
    let page = state.client_for(&headers).list_repositories(&params).await?;

    // Backend may ignore the role filter
    let mut selected = repos::filter_by_role(&page.repositories, params.role);
    repos::sort_imported(&mut selected, query.sort);

    Ok(Json(RepositoryListing {
        repositories: selected.into_iter().cloned().collect(),
        stats: repos::imported_stats(&page.repositories),
        pagination: page.pagination,
    }))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<Repository>> {
    let repository = state.client_for(&headers).repository(&id).await?;
    Ok(Json(repository))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub repository_ids: Vec<i64>,
}

pub async fn import(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<ImportRequest>,
) -> ApiResult<Json<ImportResult>> {
    if req.repository_ids.is_empty() {
        return Err(ApiError::BadRequest(
            "Select at least one repository to import".to_string(),
        ));
    }

    let result = state
        .client_for(&headers)
        .import_repositories(&req.repository_ids)
        .await?;
    info!(
        "Imported {} repositories ({} skipped)",
        result.imported.len(),
        result.skipped.len()
    );
    Ok(Json(result))
}
