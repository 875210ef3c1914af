//! Badge routes

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use client::share;
use common::models::{BadgeDefinition, LeaderboardEntry};
use milestones::session::BadgePopup;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub repository_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinks {
    pub badge_id: String,
    pub text: String,
    pub twitter: String,
    pub linkedin: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResponse {
    pub newly_awarded: Vec<BadgeDefinition>,
    pub show_popup: bool,
    pub share: Vec<ShareLinks>,
}

/// Ask the backend to award any badges now earned
pub async fn check(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CheckRequest>,
) -> ApiResult<Json<CheckResponse>> {
    let client = state.client_for(&headers);
    let result = client.check_badges(&req.repository_id).await?;

    let mut popup = BadgePopup::default();
    popup.record(result.newly_awarded.clone());
    if !popup.is_open() {
        return Ok(Json(CheckResponse {
            newly_awarded: Vec::new(),
            show_popup: false,
            share: Vec::new(),
        }));
    }

    // Best effort: fall back to the id and empty stats
    let (repository, progress) = tokio::join!(
        client.repository(&req.repository_id),
        client.badge_progress(&req.repository_id)
    );
    let repository = repository
        .map(|r| r.name)
        .unwrap_or_else(|e| {
            warn!("No repository name for share text: {}", e);
            req.repository_id.clone()
        });
    let stats = progress
        .ok()
        .and_then(|p| p.user_stats)
        .unwrap_or_default();

    let share = result
        .newly_awarded
        .iter()
        .map(|badge| ShareLinks {
            badge_id: badge.id.clone(),
            text: share::share_text(badge, &repository, &stats),
            twitter: share::twitter_intent_url(badge, &stats),
            linkedin: share::linkedin_share_url(
                &state.config.public_url,
                badge,
                &repository,
                &stats,
            ),
        })
        .collect();

    Ok(Json(CheckResponse {
        newly_awarded: result.newly_awarded,
        show_popup: true,
        share,
    }))
}

pub async fn user_badges(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<BadgeDefinition>>> {
    let badges = state.client_for(&headers).user_badges(&id).await?;
    Ok(Json(badges))
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<u32>,
}

pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let limit = query
        .limit
        .unwrap_or(state.config.leaderboard_limit)
        .clamp(1, 100);
    let entries = state.client_for(&headers).leaderboard(&id, limit).await?;
    Ok(Json(entries))
}
