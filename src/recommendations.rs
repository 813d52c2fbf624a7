use crate::maturity::is_updated_within;
use crate::models::{AnalyzedRepository, MaturityLevel};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

const MIN_LANGUAGES: usize = 3;
const MIN_ADVANCED_PROJECTS: usize = 2;
const SHORT_README: usize = 300;
const ACTIVITY_MONTHS: u32 = 6;

pub const DIVERSIFY_STACK: &str = "Consider diversifying your tech stack. Currently focused on fewer programming languages. Explore new technologies to broaden your expertise.";
pub const BUILD_ADVANCED_PROJECTS: &str = "Focus on developing more complex, production-ready projects. Consider contributing to open-source or building scalable applications.";
pub const IMPROVE_READMES: &str = "Improve README quality in several repositories. Include architecture diagrams, API documentation, and deployment instructions.";
pub const STAY_ACTIVE: &str = "Maintain consistent development activity. Regular updates and new projects demonstrate ongoing learning and commitment.";

fn missing_readmes(count: usize) -> String {
    format!(
        "{} repositories lack detailed README files. Add comprehensive documentation including setup instructions, architecture overview, and usage examples.",
        count
    )
}

/// Advisory notes, each produced by an independent check and always listed
/// in the same order.
pub fn generate_recommendations(repos: &[AnalyzedRepository], now: DateTime<Utc>) -> Vec<String> {
    let mut recommendations = Vec::new();

    let without_readme = repos.iter().filter(|r| r.readme.is_none()).count();
    if without_readme > 0 {
        recommendations.push(missing_readmes(without_readme));
    }

    let languages: HashSet<&str> = repos.iter().flat_map(|r| r.languages.names()).collect();
    if languages.len() < MIN_LANGUAGES {
        recommendations.push(DIVERSIFY_STACK.to_string());
    }

    let advanced = repos
        .iter()
        .filter(|r| r.maturity.level == MaturityLevel::Advanced)
        .count();
    if advanced < MIN_ADVANCED_PROJECTS {
        recommendations.push(BUILD_ADVANCED_PROJECTS.to_string());
    }

    let poorly_documented = repos
        .iter()
        .filter(|r| {
            r.readme
                .as_deref()
                .is_some_and(|text| text.chars().count() < SHORT_README)
        })
        .count();
    if poorly_documented > 0 {
        recommendations.push(IMPROVE_READMES.to_string());
    }

    let recent = repos
        .iter()
        .filter(|r| is_updated_within(r.repository.updated_at, ACTIVITY_MONTHS, now))
        .count();
    // Fewer than half of the repositories touched in the activity window.
    if recent * 2 < repos.len() {
        recommendations.push(STAY_ACTIVE.to_string());
    }

    recommendations
}
