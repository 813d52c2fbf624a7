use crate::models::MaturityAssessment;
use crate::types::GitHubRepo;
use chrono::{DateTime, Months, Utc};

/// Cut-offs of the maturity score. Every comparison is strict ("more than").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaturityThresholds {
    pub large_size: u64,
    pub medium_size: u64,
    pub many_commits: u32,
    pub some_commits: u32,
    pub long_readme: usize,
    pub stars: u32,
    pub forks: u32,
    pub topics: usize,
    pub recent_months: u32,
}

impl Default for MaturityThresholds {
    fn default() -> Self {
        Self {
            large_size: 1000,
            medium_size: 100,
            many_commits: 50,
            some_commits: 20,
            long_readme: 500,
            stars: 10,
            forks: 5,
            topics: 1,
            recent_months: 3,
        }
    }
}

/// Everything the score depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaturitySignals {
    pub size: u64,
    pub commits: Option<u32>,
    /// README length in characters, `None` without a README.
    pub readme_len: Option<usize>,
    pub stars: u32,
    pub forks: u32,
    pub topic_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl MaturitySignals {
    pub fn from_repository(repo: &GitHubRepo, readme: Option<&str>, commits: Option<u32>) -> Self {
        Self {
            size: repo.size,
            commits,
            readme_len: readme.map(|text| text.chars().count()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            topic_count: repo.topics.len(),
            updated_at: repo.updated_at,
        }
    }
}

pub fn score(signals: &MaturitySignals, thresholds: &MaturityThresholds, now: DateTime<Utc>) -> u32 {
    let mut score = 0;

    if signals.size > thresholds.large_size {
        score += 2;
    } else if signals.size > thresholds.medium_size {
        score += 1;
    }

    match signals.commits {
        Some(c) if c > thresholds.many_commits => score += 2,
        Some(c) if c > thresholds.some_commits => score += 1,
        _ => {}
    }

    match signals.readme_len {
        Some(len) if len > thresholds.long_readme => score += 2,
        Some(_) => score += 1,
        None => {}
    }

    if signals.stars > thresholds.stars {
        score += 1;
    }
    if signals.forks > thresholds.forks {
        score += 1;
    }
    if signals.topic_count > thresholds.topics {
        score += 1;
    }

    if is_updated_within(signals.updated_at, thresholds.recent_months, now) {
        score += 1;
    }

    score
}

pub fn assess(
    repo: &GitHubRepo,
    readme: Option<&str>,
    commits: Option<u32>,
    thresholds: &MaturityThresholds,
    now: DateTime<Utc>,
) -> MaturityAssessment {
    let signals = MaturitySignals::from_repository(repo, readme, commits);
    MaturityAssessment::from_score(score(&signals, thresholds, now))
}

/// True when `updated_at` falls after the point `months` calendar months
/// before `now`.
pub fn is_updated_within(updated_at: DateTime<Utc>, months: u32, now: DateTime<Utc>) -> bool {
    match now.checked_sub_months(Months::new(months)) {
        Some(cutoff) => updated_at > cutoff,
        None => true,
    }
}
