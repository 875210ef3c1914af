//! Search, filter, sort and summary views over repository lists

use common::models::{GithubRepository, Repository, UserRole};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many languages the stats summary lists
pub const TOP_LANGUAGES: usize = 5;

/// Fields shared by GitHub-listed and imported repositories
pub trait Listing {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
    fn language(&self) -> Option<&str>;
    fn is_private(&self) -> bool;
}

impl Listing for GithubRepository {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
    fn is_private(&self) -> bool {
        self.private
    }
}

impl Listing for Repository {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
    fn is_private(&self) -> bool {
        self.private
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryFilter {
    pub language: Option<String>,
    pub visibility: Option<Visibility>,
    pub has_description: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GithubSort {
    Name,
    Stars,
    Forks,
    Created,
    #[default]
    Updated,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ImportedSort {
    Name,
    Role,
    #[default]
    ImportedAt,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GithubStats {
    pub total: usize,
    pub public: usize,
    pub private: usize,
    pub languages: HashMap<String, usize>,
    pub top_languages: Vec<LanguageCount>,
    pub total_stars: u64,
    pub total_forks: u64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportedStats {
    pub total: usize,
    pub owner: usize,
    pub contributor: usize,
    pub languages: HashMap<String, usize>,
    pub top_languages: Vec<LanguageCount>,
}

fn has_text(s: Option<&str>) -> bool {
    s.map(|s| !s.trim().is_empty()).unwrap_or(false)
}

/// Case-insensitive match on name, description or language. A blank term matches everything.
pub fn search<'a, R: Listing>(repos: &'a [R], term: &str) -> Vec<&'a R> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return repos.iter().collect();
    }

    let contains = |s: Option<&str>| s.map(|s| s.to_lowercase().contains(&term)).unwrap_or(false);

    repos
        .iter()
        .filter(|r| contains(Some(r.name())) || contains(r.description()) || contains(r.language()))
        .collect()
}

pub fn filter<'a, R: Listing>(repos: &'a [R], f: &RepositoryFilter) -> Vec<&'a R> {
    repos
        .iter()
        .filter(|r| match &f.language {
            Some(lang) => r.language().map(|l| l.eq_ignore_ascii_case(lang)).unwrap_or(false),
            None => true,
        })
        .filter(|r| match f.visibility {
            Some(Visibility::Public) => !r.is_private(),
            Some(Visibility::Private) => r.is_private(),
            None => true,
        })
        .filter(|r| match f.has_description {
            Some(wanted) => has_text(r.description()) == wanted,
            None => true,
        })
        .collect()
}

pub fn filter_by_role(repos: &[Repository], role: Option<UserRole>) -> Vec<&Repository> {
    repos
        .iter()
        .filter(|r| role.map(|role| r.user_role == role).unwrap_or(true))
        .collect()
}

/// Sort GitHub repositories. Counts and dates sort newest/largest first.
pub fn sort_github(repos: &mut [&GithubRepository], by: GithubSort) {
    match by {
        GithubSort::Name => repos.sort_by(|a, b| a.name.cmp(&b.name)),
        GithubSort::Stars => repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count)),
        GithubSort::Forks => repos.sort_by(|a, b| b.forks_count.cmp(&a.forks_count)),
        GithubSort::Created => repos.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        GithubSort::Updated => repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}

/// Sort imported repositories. `Role` lists owned repositories first, then by name.
pub fn sort_imported(repos: &mut [&Repository], by: ImportedSort) {
    match by {
        ImportedSort::Name => repos.sort_by(|a, b| a.name.cmp(&b.name)),
        ImportedSort::Role => repos.sort_by(|a, b| {
            let rank = |r: &Repository| (r.user_role != UserRole::Owner) as u8;
            rank(a).cmp(&rank(b)).then_with(|| a.name.cmp(&b.name))
        }),
        ImportedSort::ImportedAt => repos.sort_by(|a, b| b.imported_at.cmp(&a.imported_at)),
    }
}

fn language_counts<R: Listing>(repos: &[R]) -> (HashMap<String, usize>, Vec<LanguageCount>) {
    let mut languages: HashMap<String, usize> = HashMap::new();
    for lang in repos.iter().filter_map(|r| r.language()) {
        *languages.entry(lang.to_string()).or_default() += 1;
    }

    let mut top: Vec<LanguageCount> = languages
        .iter()
        .map(|(language, &count)| LanguageCount {
            language: language.clone(),
            count,
        })
        .collect();
    top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
    top.truncate(TOP_LANGUAGES);

    (languages, top)
}

pub fn github_stats(repos: &[GithubRepository]) -> Option<GithubStats> {
    if repos.is_empty() {
        return None;
    }
    let (languages, top_languages) = language_counts(repos);
    let private = repos.iter().filter(|r| r.private).count();

    Some(GithubStats {
        total: repos.len(),
        public: repos.len() - private,
        private,
        languages,
        top_languages,
        total_stars: repos.iter().map(|r| u64::from(r.stargazers_count)).sum(),
        total_forks: repos.iter().map(|r| u64::from(r.forks_count)).sum(),
    })
}

pub fn imported_stats(repos: &[Repository]) -> Option<ImportedStats> {
    if repos.is_empty() {
        return None;
    }
    let (languages, top_languages) = language_counts(repos);
    let owner = repos.iter().filter(|r| r.user_role == UserRole::Owner).count();

    Some(ImportedStats {
        total: repos.len(),
        owner,
        contributor: repos.len() - owner,
        languages,
        top_languages,
    })
}
