//! Milestone view for one imported repository

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use common::models::{Repository, UserRole, UserStats};
use milestones::charts::{self, ContributionCharts};
use milestones::timeline::{self, TimelineNode, PREVIEW_LEN};
use milestones::{compute_progress, transform, Milestone, ProgressSummary};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Everything the milestone page renders
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneView {
    pub repository: Repository,
    pub user_role: Option<UserRole>,
    /// Metric the ladder is measured against (total PRs)
    pub current_value: u32,
    pub milestones: Vec<Milestone>,
    pub summary: ProgressSummary,
    pub progress_label: String,
    pub preview: Vec<Milestone>,
    pub timeline: Vec<TimelineNode>,
    pub user_stats: Option<UserStats>,
    pub charts: ContributionCharts,
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<MilestoneView>> {
    let client = state.client_for(&headers);
    let (repository, progress) =
        tokio::try_join!(client.repository(&id), client.badge_progress(&id))?;

    let current_value = progress
        .user_stats
        .as_ref()
        .map(|s| s.total_prs)
        .unwrap_or(0);

    let milestones = transform(&progress.badge_progress, current_value);
    let summary = compute_progress(&milestones, current_value);
    debug!(
        "Repository {}: {} milestones, {:.1}% toward {}",
        id,
        milestones.len(),
        summary.progress_percent,
        summary.next_target
    );

    let charts = charts::build(
        progress.user_stats.as_ref(),
        progress.chart_data.as_ref(),
        &progress.pr_activity,
    );

    Ok(Json(MilestoneView {
        repository,
        user_role: progress.user_role,
        current_value,
        preview: timeline::preview(&milestones, PREVIEW_LEN).to_vec(),
        timeline: timeline::timeline(&milestones, progress.user_role),
        progress_label: summary.label(),
        summary,
        milestones,
        user_stats: progress.user_stats,
        charts,
    }))
}
