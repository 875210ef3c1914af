//! Milestone timeline layout

use common::models::UserRole;
use serde::Serialize;

use crate::transform::Milestone;

/// Number of milestones shown on the profile card
pub const PREVIEW_LEN: usize = 3;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineNode {
    pub id: String,
    pub level: String,
    pub title: String,
    pub image_ref: String,
    pub highlighted: bool,
    /// Whether the connector to the following node is filled. `None` on the last node.
    pub connector_filled: Option<bool>,
}

/// First `n` milestones, for the profile card checklist
pub fn preview(milestones: &[Milestone], n: usize) -> &[Milestone] {
    &milestones[..n.min(milestones.len())]
}

/// Lay out the milestone timeline.
///
/// Owners see the whole ladder highlighted. Everyone else sees active
/// milestones highlighted, and a connector fills once the milestone it leads
/// to is active.
pub fn timeline(milestones: &[Milestone], role: Option<UserRole>) -> Vec<TimelineNode> {
    let is_owner = role == Some(UserRole::Owner);

    milestones
        .iter()
        .enumerate()
        .map(|(i, m)| TimelineNode {
            id: m.badge.id.clone(),
            level: m.level.clone(),
            title: m.badge.name.clone(),
            image_ref: m.image_ref.clone(),
            highlighted: is_owner || m.active,
            connector_filled: milestones.get(i + 1).map(|next| is_owner || next.active),
        })
        .collect()
}
