#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Duration, TimeZone, Utc};
use portfolio_analyzer::models::{
    AnalyzedRepository, LanguageBreakdown, MaturityAssessment, PortfolioSnapshot,
    ProjectDescription, SkillInventory,
};
use portfolio_analyzer::types::{GitHubRepo, GitHubUser};
use portfolio_analyzer::{GitHubClient, GitHubClientConfig};
use serde_json::{json, Value};
use url::Url;

/// Fixed clock for every test.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    now() - Duration::days(days)
}

pub fn client_for(server: &mockito::Server) -> GitHubClient {
    let base_url = Url::parse(&server.url()).expect("mock server URL");
    GitHubClient::new(GitHubClientConfig::new(base_url)).expect("Failed to create client")
}

pub fn user_value(login: &str) -> Value {
    json!({
        "login": login,
        "id": 4242,
        "name": "Sam Example",
        "bio": "Builds things",
        "location": "Lisbon",
        "email": null,
        "html_url": format!("https://github.com/{}", login),
        "avatar_url": format!("https://avatars.githubusercontent.com/{}", login),
        "public_repos": 12,
        "followers": 30,
        "following": 3,
        "created_at": "2019-03-01T10:00:00Z",
        "updated_at": "2026-09-01T10:00:00Z"
    })
}

/// A repository that passes every filter.
pub fn repo_value(name: &str) -> Value {
    json!({
        "id": 1001,
        "name": name,
        "full_name": format!("octo/{}", name),
        "description": format!("{} description", name),
        "html_url": format!("https://github.com/octo/{}", name),
        "homepage": null,
        "language": "Rust",
        "topics": [],
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": days_ago(10).to_rfc3339(),
        "pushed_at": days_ago(10).to_rfc3339(),
        "size": 500,
        "stargazers_count": 0,
        "watchers_count": 0,
        "forks_count": 0,
        "archived": false,
        "disabled": false,
        "fork": false
    })
}

pub fn sample_user(login: &str) -> GitHubUser {
    serde_json::from_value(user_value(login)).expect("valid user fixture")
}

pub fn sample_repo(name: &str) -> GitHubRepo {
    serde_json::from_value(repo_value(name)).expect("valid repo fixture")
}

/// Base64 payload wrapped at 60 columns, the way the contents API sends it.
pub fn encode_readme(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    encoded
        .as_bytes()
        .chunks(60)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn readme_body(text: &str) -> String {
    json!({ "content": encode_readme(text), "encoding": "base64" }).to_string()
}

pub fn analyzed(
    name: &str,
    languages: &[(&str, u64)],
    readme: Option<&str>,
    score: u32,
) -> AnalyzedRepository {
    AnalyzedRepository {
        repository: sample_repo(name),
        languages: languages.iter().map(|(lang, bytes)| (*lang, *bytes)).collect(),
        readme: readme.map(str::to_string),
        commits_count: None,
        maturity: MaturityAssessment::from_score(score),
        tech_stack: languages.iter().map(|(lang, _)| lang.to_string()).collect(),
        description: ProjectDescription {
            short: format!("{} short.", name),
            long: format!("{} long description.", name),
            problem_statement: None,
            features: None,
            outcomes: Vec::new(),
        },
    }
}

pub fn empty_snapshot(login: &str) -> PortfolioSnapshot {
    PortfolioSnapshot {
        user: sample_user(login),
        repositories: Vec::new(),
        skills: SkillInventory::default(),
        recommendations: Vec::new(),
    }
}

pub fn breakdown(entries: &[(&str, u64)]) -> LanguageBreakdown {
    entries.iter().map(|(lang, bytes)| (*lang, *bytes)).collect()
}
