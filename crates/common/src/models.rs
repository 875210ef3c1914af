//! Domain models
//!
//! These mirror the Praise backend's JSON, which is camelCase and uses
//! Mongo-style `_id` keys.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepts any JSON number (or null) as a count. Negative values become 0,
/// fractions are truncated and oversized values saturate.
struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        Ok(u64::try_from(v).unwrap_or(0))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        // `as` saturates and maps NaN to 0
        Ok(v as u64)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<u64, D::Error> {
        d.deserialize_any(CountVisitor)
    }
}

fn lenient_u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let n = d.deserialize_any(CountVisitor)?;
    Ok(u32::try_from(n).unwrap_or(u32::MAX))
}

fn lenient_u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    d.deserialize_any(CountVisitor)
}

/// Category of contribution metric a badge tracks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CriteriaType {
    Prs,
    Commits,
    Issues,
    Reviews,
    Other(String),
}

impl CriteriaType {
    pub fn as_str(&self) -> &str {
        match self {
            CriteriaType::Prs => "prs",
            CriteriaType::Commits => "commits",
            CriteriaType::Issues => "issues",
            CriteriaType::Reviews => "reviews",
            CriteriaType::Other(s) => s,
        }
    }
}

impl From<String> for CriteriaType {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "prs" => CriteriaType::Prs,
            "commits" => CriteriaType::Commits,
            "issues" => CriteriaType::Issues,
            "reviews" => CriteriaType::Reviews,
            _ => CriteriaType::Other(s),
        }
    }
}

impl From<CriteriaType> for String {
    fn from(c: CriteriaType) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for CriteriaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Legendary,
}

/// A badge definition with the user's award status, as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeDefinition {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub criteria_type: CriteriaType,
    #[serde(deserialize_with = "lenient_u32")]
    pub criteria_value: u32,
    #[serde(default)]
    pub is_awarded: bool,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub current_value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// Per-repository contribution stats for the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    #[serde(rename = "totalPRs", deserialize_with = "lenient_u32")]
    pub total_prs: u32,
    #[serde(rename = "mergedPRs", deserialize_with = "lenient_u32")]
    pub merged_prs: u32,
    #[serde(rename = "openPRs", deserialize_with = "lenient_u32")]
    pub open_prs: u32,
    #[serde(rename = "closedPRs", deserialize_with = "lenient_u32")]
    pub closed_prs: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub total_commits: u32,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_additions: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_deletions: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_lines_changed: u64,
    pub first_contribution: Option<DateTime<Utc>>,
    pub last_contribution: Option<DateTime<Utc>>,
}

/// Activity count for one day (`_id` is a `YYYY-MM-DD` date)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityPoint {
    #[serde(rename = "_id")]
    pub day: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeStats {
    pub total_badges: u32,
    pub earned_badges: u32,
    pub progress_percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityTimeline {
    pub pr_activity: Vec<ActivityPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartData {
    pub badge_stats: Option<BadgeStats>,
    pub activity_timeline: Option<ActivityTimeline>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Owner,
    Contributor,
}

/// Payload of `GET /api/badges/repository/{id}/progress`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeProgress {
    pub badge_progress: Vec<BadgeDefinition>,
    pub user_stats: Option<UserStats>,
    pub pr_activity: Vec<ActivityPoint>,
    pub user_role: Option<UserRole>,
    pub chart_data: Option<ChartData>,
}

/// The signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub github_id: Option<i64>,
    pub github_username: String,
    #[serde(default)]
    pub github_avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A repository as listed from the user's GitHub account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GithubRepository {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// A repository imported into Praise
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub github_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub private: bool,
    pub user_role: UserRole,
    pub imported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryPage {
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubRepositoryList {
    pub repositories: Vec<GithubRepository>,
}

/// Leaderboard entry for a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user: User,
    #[serde(default)]
    pub badge_count: u32,
    #[serde(default, rename = "totalPRs")]
    pub total_prs: u32,
}

/// Result of asking the backend to evaluate badges
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckBadgesResult {
    pub newly_awarded: Vec<BadgeDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportResult {
    pub imported: Vec<Repository>,
    pub skipped: Vec<String>,
}

/// Response envelope wrapping every backend payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}
