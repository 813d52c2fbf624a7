use crate::error::{PortfolioError, Result};
use crate::models::LanguageBreakdown;
use crate::types::{GitHubReadme, GitHubRepo, GitHubUser};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::header::{HeaderMap, LINK};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const PER_PAGE: u32 = 50;
/// Hard cap on repositories that get the per-repository enrichment.
pub const MAX_ANALYZED_REPOS: usize = 10;
const USER_AGENT: &str = "GitHub-Portfolio-Analyzer/0.1.0";
const LOW_RATE_LIMIT: u32 = 10;

static LAST_PAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[?&]page=(\d+)[^>]*>;\s*rel="last""#).unwrap());

#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub base_url: Url,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl GitHubClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            token: None,
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }
}

pub struct GitHubClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self> {
        if config.base_url.cannot_be_a_base() {
            return Err(PortfolioError::InvalidUrl(config.base_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: config.base_url,
            token: config.token,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PortfolioError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn make_request(&self, url: &Url) -> Result<Response> {
        debug!(%url, "GET");

        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        let response = request.send().await?;

        if let Some(remaining) = rate_limit_remaining(response.headers()) {
            if remaining < LOW_RATE_LIMIT {
                warn!(remaining, "GitHub rate limit running low");
            }
        }

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PortfolioError::NotFound {
                url: url.to_string(),
                body,
            });
        }
        Err(PortfolioError::HttpError {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let response = self.make_request(url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn fetch_profile(&self, username: &str) -> Result<GitHubUser> {
        let url = self.endpoint(&["users", username])?;
        let user: GitHubUser = self.get_json(&url).await?;
        info!(login = %user.login, name = ?user.name, "Fetched GitHub profile");
        Ok(user)
    }

    /// Most recently updated repositories first, with the ones not worth
    /// analyzing already removed.
    pub async fn fetch_repositories(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &PER_PAGE.to_string());

        let repos: Vec<GitHubRepo> = self.get_json(&url).await?;
        let total = repos.len();
        let meaningful = filter_repositories(repos);
        info!(total, meaningful = meaningful.len(), "Fetched repositories");
        Ok(meaningful)
    }

    /// Language byte counts. Failures degrade to an empty breakdown.
    pub async fn fetch_languages(&self, username: &str, repo: &str) -> LanguageBreakdown {
        match self.try_fetch_languages(username, repo).await {
            Ok(languages) => languages,
            Err(e) => {
                warn!(repo, error = %e, "No language data");
                LanguageBreakdown::default()
            }
        }
    }

    /// Decoded README text, or `None` when missing or undecodable.
    pub async fn fetch_readme(&self, username: &str, repo: &str) -> Option<String> {
        match self.try_fetch_readme(username, repo).await {
            Ok(text) => Some(text),
            Err(PortfolioError::NotFound { .. }) => {
                warn!(repo, "No README found");
                None
            }
            Err(e) => {
                warn!(repo, error = %e, "README unavailable");
                None
            }
        }
    }

    /// Total commits on the default branch, or `None` when unavailable.
    pub async fn fetch_commit_count(&self, username: &str, repo: &str) -> Option<u32> {
        match self.try_fetch_commit_count(username, repo).await {
            Ok(count) => Some(count),
            Err(e) => {
                warn!(repo, error = %e, "Commit count unavailable");
                None
            }
        }
    }

    async fn try_fetch_languages(&self, username: &str, repo: &str) -> Result<LanguageBreakdown> {
        let url = self.endpoint(&["repos", username, repo, "languages"])?;
        self.get_json(&url).await
    }

    async fn try_fetch_readme(&self, username: &str, repo: &str) -> Result<String> {
        let url = self.endpoint(&["repos", username, repo, "readme"])?;
        let readme: GitHubReadme = self.get_json(&url).await?;
        decode_readme(&readme)
    }

    // One commit per page, so the page number of the `rel="last"` link is
    // the commit count.
    async fn try_fetch_commit_count(&self, username: &str, repo: &str) -> Result<u32> {
        let mut url = self.endpoint(&["repos", username, repo, "commits"])?;
        url.query_pairs_mut().append_pair("per_page", "1");
        let response = self.make_request(&url).await?;

        if let Some(count) = last_page(response.headers()) {
            return Ok(count);
        }
        let body = response.bytes().await?;
        let commits: Vec<serde_json::Value> = serde_json::from_slice(&body)?;
        Ok(commits.len() as u32)
    }
}

/// Drops archived, disabled, forked, tiny and undescribed repositories.
pub fn filter_repositories(repos: Vec<GitHubRepo>) -> Vec<GitHubRepo> {
    repos.into_iter().filter(GitHubRepo::is_meaningful).collect()
}

/// README payloads are base64 with embedded line breaks.
pub fn decode_readme(readme: &GitHubReadme) -> Result<String> {
    if let Some(encoding) = readme.encoding.as_deref() {
        if encoding != "base64" {
            warn!(encoding, "Unexpected README encoding, decoding as base64");
        }
    }
    let compact: String = readme
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}

fn rate_limit_remaining(headers: &HeaderMap) -> Option<u32> {
    headers
        .get("X-RateLimit-Remaining")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<u32>().ok())
}

fn last_page(headers: &HeaderMap) -> Option<u32> {
    let link = headers.get(LINK)?.to_str().ok()?;
    LAST_PAGE
        .captures(link)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
