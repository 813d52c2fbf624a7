mod common;

use common::{analyzed, breakdown, sample_user};
use portfolio_analyzer::models::{
    Education, LanguageBreakdown, MaturityLevel, PersonalInfo, Project, ProjectCategory, SkillCategory,
    SkillInventory, SkillLevel,
};
use portfolio_analyzer::types::{GitHubReadme, GitHubRepo};
use serde_json::json;

#[test]
fn test_language_breakdown_keeps_api_order() {
    let languages: LanguageBreakdown =
        serde_json::from_str(r#"{"Shell": 10, "Rust": 9000, "Dockerfile": 300}"#).unwrap();

    let names: Vec<&str> = languages.names().collect();
    assert_eq!(names, vec!["Shell", "Rust", "Dockerfile"]);
    assert_eq!(
        serde_json::to_string(&languages).unwrap(),
        r#"{"Shell":10,"Rust":9000,"Dockerfile":300}"#
    );
}

#[test]
fn test_language_breakdown_top() {
    let languages = breakdown(&[("CSS", 50), ("Go", 400), ("HTML", 50), ("C", 900)]);

    assert_eq!(languages.top(3), vec!["C", "Go", "CSS"]);
    assert_eq!(languages.top(10).len(), 4);
    assert!(LanguageBreakdown::default().top(3).is_empty());
}

#[test]
fn test_maturity_level_from_score() {
    assert_eq!(MaturityLevel::from_score(0), MaturityLevel::Beginner);
    assert_eq!(MaturityLevel::from_score(2), MaturityLevel::Beginner);
    assert_eq!(MaturityLevel::from_score(3), MaturityLevel::Intermediate);
    assert_eq!(MaturityLevel::from_score(5), MaturityLevel::Intermediate);
    assert_eq!(MaturityLevel::from_score(6), MaturityLevel::Advanced);
    assert_eq!(MaturityLevel::from_score(11), MaturityLevel::Advanced);
    assert_eq!(MaturityLevel::Intermediate.to_string(), "intermediate");
}

#[test]
fn test_analyzed_repository_serialization() {
    let mut repo = analyzed("tool", &[("Rust", 100)], None, 7);
    repo.commits_count = Some(33);

    let value = serde_json::to_value(&repo).unwrap();

    assert_eq!(value["repository"]["name"], "tool");
    assert_eq!(value["repository"]["description"], "tool description");
    assert_eq!(value["techStack"], json!(["Rust"]));
    assert_eq!(value["commitsCount"], 33);
    assert_eq!(value["maturity"], json!({ "level": "advanced", "score": 7 }));
    assert_eq!(value["description"]["short"], "tool short.");
    assert!(value["description"].get("problemStatement").is_none());
    assert!(value["description"].get("outcomes").is_none());
    assert_eq!(value["readme"], json!(null));
}

#[test]
fn test_repo_defaults_for_missing_fields() {
    let repo: GitHubRepo = serde_json::from_value(json!({
        "id": 1,
        "name": "bare",
        "full_name": "octo/bare",
        "description": null,
        "html_url": "https://github.com/octo/bare",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z",
        "size": 20,
        "stargazers_count": 0,
        "forks_count": 0
    }))
    .unwrap();

    assert!(repo.topics.is_empty());
    assert!(!repo.archived && !repo.disabled && !repo.fork);
    assert!(!repo.is_meaningful());
}

#[test]
fn test_readme_payload() {
    let readme: GitHubReadme =
        serde_json::from_str(r#"{"content": "SGk=\n", "encoding": "base64", "sha": "x"}"#).unwrap();
    assert_eq!(readme.content, "SGk=\n");
    assert_eq!(readme.encoding.as_deref(), Some("base64"));
}

#[test]
fn test_skill_inventory_accessors() {
    let mut inventory = SkillInventory::default();
    assert!(inventory.is_empty());

    inventory.get_mut(SkillCategory::Tools).insert("Docker".into());
    inventory.get_mut(SkillCategory::Tools).insert("Docker".into());
    inventory.get_mut(SkillCategory::Languages).insert("Go".into());

    assert_eq!(inventory.total(), 2);
    assert!(inventory.get(SkillCategory::Tools).contains("Docker"));
    assert_eq!(
        serde_json::to_value(&inventory).unwrap(),
        json!({
            "languages": ["Go"],
            "frameworks": [],
            "databases": [],
            "tools": ["Docker"],
            "cloud": []
        })
    );
}

#[test]
fn test_skill_category_levels() {
    assert_eq!(SkillCategory::Languages.level(), SkillLevel::Expert);
    assert_eq!(SkillCategory::Tools.level(), SkillLevel::Expert);
    assert_eq!(SkillCategory::Frameworks.level(), SkillLevel::Proficient);
    assert_eq!(SkillCategory::Databases.level(), SkillLevel::Proficient);
    assert_eq!(SkillCategory::Cloud.level(), SkillLevel::Familiar);
}

#[test]
fn test_project_serialization() {
    let project = Project {
        id: "route-planner".to_string(),
        title: "Route Planner".to_string(),
        description: "Plans routes.".to_string(),
        long_description: "Plans routes across the city.".to_string(),
        tech_stack: vec!["TypeScript".to_string()],
        github_url: "https://github.com/octo/route-planner".to_string(),
        demo_url: None,
        category: ProjectCategory::AiMl,
        featured: true,
        achievement: None,
    };

    let value = serde_json::to_value(&project).unwrap();
    assert_eq!(value["longDescription"], "Plans routes across the city.");
    assert_eq!(value["techStack"], json!(["TypeScript"]));
    assert_eq!(value["githubUrl"], "https://github.com/octo/route-planner");
    assert_eq!(value["category"], "ai-ml");
    assert!(value.get("demoUrl").is_none());
    assert!(value.get("achievement").is_none());
}

#[test]
fn test_personal_info_skips_absent_links() {
    let user = sample_user("octo");
    let info = PersonalInfo {
        name: user.name.clone().unwrap_or_default(),
        title: "Software Developer".to_string(),
        tagline: "Building software".to_string(),
        email: "sam@example.com".to_string(),
        github: user.html_url.clone(),
        linkedin: None,
        gitroll: None,
        location: "Lisbon".to_string(),
        education: Education {
            degree: "Computer Engineering".to_string(),
            cgpa: None,
            status: "Student".to_string(),
        },
    };

    let value = serde_json::to_value(&info).unwrap();
    assert!(value.get("linkedin").is_none());
    assert!(value.get("gitroll").is_none());
    assert!(value["education"].get("cgpa").is_none());
    assert_eq!(value["github"], "https://github.com/octo");
}
