//! Badge definitions to display-ready milestones

use common::models::{BadgeDefinition, CriteriaType};
use serde::Serialize;

/// Image shown for any badge without a dedicated artwork
pub const DEFAULT_IMAGE: &str = "/images/11.png";

/// Glyph the backend assigns when a badge has no icon of its own
const GENERIC_GLYPH: &str = "🏆";

/// A badge paired with its computed completion state
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(flatten)]
    pub badge: BadgeDefinition,
    /// Effectively complete: awarded by the backend, or reached locally
    pub active: bool,
    pub image_ref: String,
    /// Short threshold label, e.g. "5 PRs"
    pub level: String,
    pub glyph: String,
}

impl Milestone {
    pub fn criteria_value(&self) -> u32 {
        self.badge.criteria_value
    }
}

/// Resolve the artwork for a badge. Unmapped combinations get [`DEFAULT_IMAGE`].
pub fn image_for(criteria: &CriteriaType, threshold: u32) -> &'static str {
    match (criteria, threshold) {
        (CriteriaType::Prs, 1) => "/images/8.png",
        (CriteriaType::Prs, 5) => "/images/9.png",
        (CriteriaType::Prs, 20) => "/images/10.png",
        _ => DEFAULT_IMAGE,
    }
}

/// Glyph for a badge: its own icon, unless missing or the generic trophy
pub fn glyph_for(badge: &BadgeDefinition) -> String {
    match badge.icon.as_deref() {
        Some(icon) if !icon.is_empty() && icon != GENERIC_GLYPH => icon.to_string(),
        _ => match badge.criteria_type {
            CriteriaType::Prs => "🚀",
            CriteriaType::Commits => "💻",
            CriteriaType::Issues => "🐛",
            CriteriaType::Reviews => "👀",
            CriteriaType::Other(_) => GENERIC_GLYPH,
        }
        .to_string(),
    }
}

fn level_for(badge: &BadgeDefinition) -> String {
    match badge.criteria_type {
        CriteriaType::Prs => format!("{} PRs", badge.criteria_value),
        ref other => format!("{} {}", badge.criteria_value, other),
    }
}

/// Map badges to milestones, applying the push override.
///
/// A badge is active once the backend has awarded it or the locally known
/// metric value has reached its threshold, whichever comes first. Order and
/// length of the input are preserved.
pub fn transform(badges: &[BadgeDefinition], current: u32) -> Vec<Milestone> {
    badges
        .iter()
        .map(|badge| Milestone {
            active: badge.is_awarded || current >= badge.criteria_value,
            image_ref: image_for(&badge.criteria_type, badge.criteria_value).to_string(),
            level: level_for(badge),
            glyph: glyph_for(badge),
            badge: badge.clone(),
        })
        .collect()
}
