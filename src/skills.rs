use crate::models::{AnalyzedRepository, SkillCategory, SkillInventory};

const FRAMEWORKS: &[&str] = &[
    "React", "Vue.js", "Angular", "Next.js", "Nuxt.js", "Node.js", "Express", "FastAPI", "Flask",
    "Django",
];
const DATABASES: &[&str] = &["MongoDB", "PostgreSQL", "MySQL", "SQLite"];
const TOOLS: &[&str] = &["Docker", "Kubernetes", "Git", "Linux"];
const CLOUD: &[&str] = &["AWS", "Azure", "Google Cloud"];

/// Category of a tech stack entry. Languages are never returned here: they
/// come from the language breakdown only.
pub fn classify_technology(tech: &str) -> Option<SkillCategory> {
    [
        (SkillCategory::Frameworks, FRAMEWORKS),
        (SkillCategory::Databases, DATABASES),
        (SkillCategory::Tools, TOOLS),
        (SkillCategory::Cloud, CLOUD),
    ]
    .into_iter()
    .find(|(_, members)| members.iter().any(|member| *member == tech))
    .map(|(category, _)| category)
}

/// Collects every breakdown language plus the classified stack entries.
/// Stack entries without a category are dropped.
pub fn aggregate_skills(repos: &[AnalyzedRepository]) -> SkillInventory {
    let mut skills = SkillInventory::default();

    for repo in repos {
        for language in repo.languages.names() {
            skills.languages.insert(language.to_string());
        }
        for tech in &repo.tech_stack {
            if let Some(category) = classify_technology(tech) {
                skills.get_mut(category).insert(tech.clone());
            }
        }
    }

    skills
}
