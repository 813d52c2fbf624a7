use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// GitHub API response structures. Required fields fail deserialization when
// missing so shape mismatches surface at the API boundary.

/// Profile returned by `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
    pub size: u64,
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    pub forks_count: u32,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub fork: bool,
}

impl GitHubRepo {
    /// Whether the repository is worth a deep analysis: not archived,
    /// disabled or forked, larger than 10 KB and carrying a description.
    pub fn is_meaningful(&self) -> bool {
        !self.archived
            && !self.disabled
            && !self.fork
            && self.size > 10
            && self
                .description
                .as_deref()
                .is_some_and(|d| !d.trim().is_empty())
    }
}

/// Envelope of `GET /repos/{owner}/{repo}/readme`.
#[derive(Debug, Deserialize)]
pub struct GitHubReadme {
    pub content: String,
    #[serde(default)]
    pub encoding: Option<String>,
}
