//! Progress toward the next unearned milestone

use serde::Serialize;

use crate::transform::Milestone;

/// Where the user stands relative to the milestone ladder
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// First milestone in list order that is not yet active
    pub next_milestone: Option<Milestone>,
    pub next_target: u32,
    pub previous_target: u32,
    /// Always within `[0, 100]`
    pub progress_percent: f64,
}

impl ProgressSummary {
    pub fn is_complete(&self) -> bool {
        self.progress_percent >= 100.0
    }

    /// Percentage rounded for display, e.g. "40.0% Complete"
    pub fn label(&self) -> String {
        format!("{:.1}% Complete", self.progress_percent)
    }
}

/// Compute progress toward the next milestone.
///
/// Milestones are expected in ascending threshold order. Malformed ladders
/// (duplicate or descending thresholds) report 100% instead of dividing by a
/// non-positive range.
pub fn compute_progress(milestones: &[Milestone], current: u32) -> ProgressSummary {
    let Some(next_index) = milestones.iter().position(|m| !m.active) else {
        let last = milestones.last().map(Milestone::criteria_value).unwrap_or(0);
        return ProgressSummary {
            next_milestone: None,
            next_target: last,
            previous_target: last,
            progress_percent: 100.0,
        };
    };

    let next = &milestones[next_index];
    let next_target = next.criteria_value();
    let previous_target = next_index
        .checked_sub(1)
        .map(|i| milestones[i].criteria_value())
        .unwrap_or(0);

    let progress_range = f64::from(next_target) - f64::from(previous_target);
    let current_progress = f64::from(current) - f64::from(previous_target);

    let progress_percent = if progress_range <= 0.0 || current >= next_target {
        // Reached but not yet flipped active; the next pass moves on to the
        // following milestone.
        100.0
    } else {
        (current_progress / progress_range * 100.0).clamp(0.0, 100.0)
    };

    ProgressSummary {
        next_milestone: Some(next.clone()),
        next_target,
        previous_target,
        progress_percent,
    }
}
