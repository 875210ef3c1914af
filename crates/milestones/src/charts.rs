//! Contribution chart series derived from backend stats

use chrono::{Datelike, NaiveDate};
use common::models::{ActivityPoint, ChartData, UserStats};
use serde::Serialize;
use tracing::debug;

/// One bar of the PR activity chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityBar {
    /// Two-digit day of month, e.g. "07"
    pub date: String,
    pub prs: u32,
}

/// A labelled slice or bar value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Slice {
    pub name: &'static str,
    pub value: u64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverviewStat {
    pub category: &'static str,
    pub count: u64,
}

/// All chart series for one repository view
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCharts {
    pub pr_activity: Vec<ActivityBar>,
    pub breakdown: Vec<Slice>,
    pub code: Vec<Slice>,
    pub overview: Vec<OverviewStat>,
    pub badges: Option<[Slice; 2]>,
    pub span_days: Option<i64>,
}

const GREEN: &str = "#10B981";
const BLUE: &str = "#3B82F6";
const RED: &str = "#EF4444";
const GRAY: &str = "#6B7280";

/// Bars for the PR activity chart. Points whose id is not a date are skipped.
pub fn pr_activity_bars(points: &[ActivityPoint]) -> Vec<ActivityBar> {
    points
        .iter()
        .filter_map(|p| match NaiveDate::parse_from_str(&p.day, "%Y-%m-%d") {
            Ok(day) => Some(ActivityBar {
                date: format!("{:02}", day.day()),
                prs: p.count,
            }),
            Err(e) => {
                debug!("Skipping activity point {:?}: {}", p.day, e);
                None
            }
        })
        .collect()
}

fn non_zero(slices: Vec<Slice>) -> Vec<Slice> {
    slices.into_iter().filter(|s| s.value > 0).collect()
}

/// Merged / open / closed PRs, without empty slices
pub fn contribution_breakdown(stats: &UserStats) -> Vec<Slice> {
    non_zero(vec![
        Slice {
            name: "Merged PRs",
            value: stats.merged_prs.into(),
            color: GREEN,
        },
        Slice {
            name: "Open PRs",
            value: stats.open_prs.into(),
            color: BLUE,
        },
        Slice {
            name: "Closed PRs",
            value: stats.closed_prs.into(),
            color: RED,
        },
    ])
}

/// Lines added vs deleted, without empty slices
pub fn code_contributions(stats: &UserStats) -> Vec<Slice> {
    non_zero(vec![
        Slice {
            name: "Additions",
            value: stats.total_additions,
            color: GREEN,
        },
        Slice {
            name: "Deletions",
            value: stats.total_deletions,
            color: RED,
        },
    ])
}

pub fn overview(stats: &UserStats) -> Vec<OverviewStat> {
    vec![
        OverviewStat {
            category: "Pull Requests",
            count: stats.total_prs.into(),
        },
        OverviewStat {
            category: "Commits",
            count: stats.total_commits.into(),
        },
        OverviewStat {
            category: "Lines Changed",
            count: stats.total_lines_changed,
        },
    ]
}

/// Earned vs remaining badges
pub fn badge_split(chart: &ChartData) -> Option<[Slice; 2]> {
    let stats = chart.badge_stats.as_ref()?;
    Some([
        Slice {
            name: "Earned",
            value: stats.earned_badges.into(),
            color: GREEN,
        },
        Slice {
            name: "Remaining",
            value: stats.total_badges.saturating_sub(stats.earned_badges).into(),
            color: GRAY,
        },
    ])
}

/// Days between first and last contribution, rounded up
pub fn contribution_span_days(stats: &UserStats) -> Option<i64> {
    let (first, last) = (stats.first_contribution?, stats.last_contribution?);
    let secs = (last - first).num_seconds();
    let day = 24 * 60 * 60;
    Some(if secs > 0 { (secs + day - 1) / day } else { secs / day })
}

/// Build every chart series at once
pub fn build(
    stats: Option<&UserStats>,
    chart: Option<&ChartData>,
    activity: &[ActivityPoint],
) -> ContributionCharts {
    let stats = stats.cloned().unwrap_or_default();
    ContributionCharts {
        pr_activity: pr_activity_bars(activity),
        breakdown: contribution_breakdown(&stats),
        code: code_contributions(&stats),
        overview: overview(&stats),
        badges: chart.and_then(badge_split),
        span_days: contribution_span_days(&stats),
    }
}
