use crate::error::Result;
use crate::models::{
    AnalyzedRepository, Education, MaturityLevel, PersonalInfo, PortfolioData, PortfolioSnapshot,
    Project, Skill, SkillCategory, SkillInventory,
};
use crate::readme::{extract_achievement, extract_demo_url};
use crate::stack::infer_category;
use crate::types::GitHubUser;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_OUTPUT_PATH: &str = "src/data/portfolio-generated.ts";
const FALLBACK_EMAIL: &str = "your.email@example.com";
const FALLBACK_LOCATION: &str = "Location not specified";
const FALLBACK_PROJECT_ID: &str = "project";

/// Personal details the GitHub profile cannot provide.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalDefaults {
    pub title: String,
    pub degree: String,
    pub education_status: String,
}

impl Default for PersonalDefaults {
    fn default() -> Self {
        Self {
            title: "Software Developer".to_string(),
            degree: "Computer Engineering".to_string(),
            education_status: "Student".to_string(),
        }
    }
}

/// Lower case, with each run of characters outside `[a-z0-9]` collapsed to
/// one hyphen and no hyphen at either end.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Hyphens become spaces and every word starts with a capital letter.
pub fn titleize(name: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut title = String::with_capacity(name.len());
    let mut previous_is_word = false;

    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        if is_word(c) && !previous_is_word {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        previous_is_word = is_word(c);
    }

    title
}

pub fn build_project(repo: &AnalyzedRepository, id: String) -> Project {
    let readme = repo.readme.as_deref().unwrap_or_default();

    Project {
        id,
        title: titleize(&repo.repository.name),
        description: repo.description.short.clone(),
        long_description: repo.description.long.clone(),
        tech_stack: repo.tech_stack.clone(),
        github_url: repo.repository.html_url.clone(),
        demo_url: extract_demo_url(readme),
        category: infer_category(&repo.tech_stack),
        featured: repo.maturity.level == MaturityLevel::Advanced,
        achievement: extract_achievement(readme),
    }
}

/// One project per repository, in snapshot order. Colliding ids get a
/// numeric suffix. Names without any ASCII letter or digit use `project`.
pub fn build_projects(repos: &[AnalyzedRepository]) -> Vec<Project> {
    let mut seen = HashSet::new();

    repos
        .iter()
        .map(|repo| {
            let mut base = slugify(&repo.repository.name);
            if base.is_empty() {
                base = FALLBACK_PROJECT_ID.to_string();
            }
            let mut id = base.clone();
            let mut suffix = 2;
            while !seen.insert(id.clone()) {
                id = format!("{}-{}", base, suffix);
                suffix += 1;
            }
            build_project(repo, id)
        })
        .collect()
}

pub fn build_skills(inventory: &SkillInventory) -> Vec<Skill> {
    SkillCategory::ALL
        .iter()
        .flat_map(|category| {
            inventory.get(*category).iter().map(move |name| Skill {
                name: name.clone(),
                level: category.level(),
                category: *category,
                icon: None,
            })
        })
        .collect()
}

pub fn build_personal_info(
    user: &GitHubUser,
    project_count: usize,
    defaults: &PersonalDefaults,
) -> PersonalInfo {
    let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

    PersonalInfo {
        name: non_empty(&user.name).unwrap_or_else(|| user.login.clone()),
        title: defaults.title.clone(),
        tagline: format!(
            "Building software solutions with {}+ public projects",
            project_count
        ),
        email: non_empty(&user.email).unwrap_or_else(|| FALLBACK_EMAIL.to_string()),
        github: if user.html_url.is_empty() {
            format!("https://github.com/{}", user.login)
        } else {
            user.html_url.clone()
        },
        linkedin: None,
        gitroll: None,
        location: non_empty(&user.location).unwrap_or_else(|| FALLBACK_LOCATION.to_string()),
        education: Education {
            degree: defaults.degree.clone(),
            cgpa: None,
            status: defaults.education_status.clone(),
        },
    }
}

/// Pure transform from the persisted snapshot to the site's data.
pub fn generate_portfolio_data(
    snapshot: &PortfolioSnapshot,
    defaults: &PersonalDefaults,
) -> PortfolioData {
    let projects = build_projects(&snapshot.repositories);
    let skills = build_skills(&snapshot.skills);
    let personal_info = build_personal_info(&snapshot.user, projects.len(), defaults);

    PortfolioData {
        projects,
        skills,
        experience: Vec::new(),
        personal_info,
        achievements: Vec::new(),
    }
}

const HEADER: &str = "\
// Auto-generated portfolio data from GitHub analysis
// Do not edit manually - run \"portfolio-analyzer populate\" to update

";

const TYPE_DECLARATIONS: &str = "\
export interface Project {
  id: string;
  title: string;
  description: string;
  longDescription: string;
  techStack: string[];
  githubUrl: string;
  demoUrl?: string;
  category: 'ai-ml' | 'web' | 'embedded' | 'security' | 'automation';
  featured: boolean;
  achievement?: string;
}

export interface Skill {
  name: string;
  level: 'Expert' | 'Proficient' | 'Familiar';
  category: 'languages' | 'frameworks' | 'databases' | 'tools' | 'cloud';
  icon?: string;
}

export interface Experience {
  id: string;
  company: string;
  role: string;
  duration: string;
  description: string;
  achievements: string[];
  technologies: string[];
}

";

fn export_const<T: Serialize + ?Sized>(
    out: &mut String,
    name: &str,
    type_name: Option<&str>,
    value: &T,
) -> Result<()> {
    let literal = serde_json::to_string_pretty(value)?;
    match type_name {
        Some(ty) => out.push_str(&format!("export const {}: {} = {};\n\n", name, ty, literal)),
        None => out.push_str(&format!("export const {} = {};\n\n", name, literal)),
    }
    Ok(())
}

/// TypeScript module exporting the type declarations and data literals.
pub fn render_typescript(data: &PortfolioData) -> Result<String> {
    let mut code = String::from(HEADER);
    code.push_str(TYPE_DECLARATIONS);

    export_const(&mut code, "projects", Some("Project[]"), &data.projects)?;
    export_const(&mut code, "skills", Some("Skill[]"), &data.skills)?;
    export_const(&mut code, "experience", Some("Experience[]"), &data.experience)?;
    export_const(&mut code, "personalInfo", None, &data.personal_info)?;
    export_const(&mut code, "achievements", Some("string[]"), &data.achievements)?;

    // Single trailing newline.
    code.truncate(code.trim_end().len());
    code.push('\n');
    Ok(code)
}

pub fn write_module(data: &PortfolioData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_typescript(data)?)?;
    info!(path = %path.display(), "Portfolio module written");
    Ok(())
}
