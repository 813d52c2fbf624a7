use crate::error::{PortfolioError, Result};
use crate::github::{GitHubClient, MAX_ANALYZED_REPOS};
use crate::maturity::{self, MaturityThresholds};
use crate::models::{AnalyzedRepository, LanguageBreakdown, PortfolioSnapshot};
use crate::readme::extract_description;
use crate::recommendations::generate_recommendations;
use crate::skills::aggregate_skills;
use crate::stack::extract_tech_stack;
use crate::types::GitHubRepo;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::info;

/// Runs the collector and every analysis step for one account.
pub struct PortfolioAnalyzer<'a> {
    client: &'a GitHubClient,
    thresholds: MaturityThresholds,
}

impl<'a> PortfolioAnalyzer<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self {
            client,
            thresholds: MaturityThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: MaturityThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Profile and repository list failures abort the run; per-repository
    /// enrichment failures only degrade the affected repository.
    pub async fn analyze_portfolio(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<PortfolioSnapshot> {
        let username = username.trim();
        if username.is_empty() {
            return Err(PortfolioError::InvalidUsername(username.to_string()));
        }

        let (user, repos) = tokio::try_join!(
            self.client.fetch_profile(username),
            self.client.fetch_repositories(username)
        )?;

        info!(
            count = repos.len().min(MAX_ANALYZED_REPOS),
            "Analyzing repositories"
        );
        let mut repositories = join_all(
            repos
                .into_iter()
                .take(MAX_ANALYZED_REPOS)
                .map(|repo| self.analyze_repository(username, repo, now)),
        )
        .await;

        // Stable, so equal scores keep the most recently updated first.
        repositories.sort_by(|a, b| b.maturity.score.cmp(&a.maturity.score));

        let skills = aggregate_skills(&repositories);
        let recommendations = generate_recommendations(&repositories, now);

        Ok(PortfolioSnapshot {
            user,
            repositories,
            skills,
            recommendations,
        })
    }

    async fn analyze_repository(
        &self,
        username: &str,
        repo: GitHubRepo,
        now: DateTime<Utc>,
    ) -> AnalyzedRepository {
        info!(repo = %repo.name, "Analyzing repository");

        let (languages, readme, commits) = tokio::join!(
            self.client.fetch_languages(username, &repo.name),
            self.client.fetch_readme(username, &repo.name),
            self.client.fetch_commit_count(username, &repo.name)
        );

        build_analyzed_repository(repo, languages, readme, commits, &self.thresholds, now)
    }
}

/// Derives maturity, tech stack and description from fetched data.
pub fn build_analyzed_repository(
    repo: GitHubRepo,
    languages: LanguageBreakdown,
    readme: Option<String>,
    commits: Option<u32>,
    thresholds: &MaturityThresholds,
    now: DateTime<Utc>,
) -> AnalyzedRepository {
    let maturity = maturity::assess(&repo, readme.as_deref(), commits, thresholds, now);
    let tech_stack = extract_tech_stack(&languages, &repo.topics);
    let description = extract_description(readme.as_deref(), repo.description.as_deref());

    AnalyzedRepository {
        repository: repo,
        languages,
        readme,
        commits_count: commits,
        maturity,
        tech_stack,
        description,
    }
}
