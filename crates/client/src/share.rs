//! Share text and links for a freshly unlocked badge

use common::models::{BadgeDefinition, UserStats};
use reqwest::Url;

fn stats_line(stats: &UserStats) -> String {
    format!(
        "{} Pull Requests • {} Merged • {} Commits",
        stats.total_prs, stats.merged_prs, stats.total_commits
    )
}

/// Text copied to the clipboard from the celebration dialog
pub fn share_text(badge: &BadgeDefinition, repository: &str, stats: &UserStats) -> String {
    format!(
        "🎉 Just earned the \"{}\" badge on {}!\n\n{}\n\n{}\n\nBuilding in public! 💪",
        badge.name,
        repository,
        badge.description,
        stats_line(stats)
    )
}

/// Twitter/X compose link
pub fn twitter_intent_url(badge: &BadgeDefinition, stats: &UserStats) -> String {
    let text = format!(
        "🎉 Just earned the \"{}\" badge! {}\n\n{} PRs • {} merged • {} commits\n\n#GitHub #Achievement #BuildInPublic",
        badge.name, badge.description, stats.total_prs, stats.merged_prs, stats.total_commits
    );
    Url::parse_with_params("https://twitter.com/intent/tweet", &[("text", text)])
        .map(String::from)
        .unwrap_or_default()
}

/// LinkedIn share link pointing back at the dashboard
pub fn linkedin_share_url(
    origin: &str,
    badge: &BadgeDefinition,
    repository: &str,
    stats: &UserStats,
) -> String {
    let text = format!(
        "🎉 Just earned the \"{}\" badge on {}!\n\n{}\n\n{}\n\nBuilding in public and celebrating every milestone! 💪\n\n#GitHub #OpenSource #Development #Achievement",
        badge.name,
        repository,
        badge.description,
        stats_line(stats)
    );
    Url::parse_with_params(
        "https://www.linkedin.com/sharing/share-offsite/",
        &[("url", origin.to_string()), ("text", text)],
    )
    .map(String::from)
    .unwrap_or_default()
}
