use crate::types::{GitHubRepo, GitHubUser};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Language name to byte count, in the order the API reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBreakdown(Vec<(String, u64)>);

impl LanguageBreakdown {
    pub fn new(entries: Vec<(String, u64)>) -> Self {
        Self(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, bytes)| (name.as_str(), *bytes))
    }

    /// Up to `n` languages by byte count, descending. Ties keep API order.
    pub fn top(&self, n: usize) -> Vec<&str> {
        let mut sorted: Vec<&(String, u64)> = self.0.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.into_iter().take(n).map(|(name, _)| name.as_str()).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LanguageBreakdown {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, bytes)| (name.into(), bytes)).collect())
    }
}

impl Serialize for LanguageBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, bytes) in &self.0 {
            map.serialize_entry(name, bytes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = LanguageBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of language names to byte counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, bytes)) = access.next_entry::<String, u64>()? {
                    entries.push((name, bytes));
                }
                Ok(LanguageBreakdown(entries))
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl MaturityLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 6 => MaturityLevel::Advanced,
            s if s >= 3 => MaturityLevel::Intermediate,
            _ => MaturityLevel::Beginner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityLevel::Beginner => "beginner",
            MaturityLevel::Intermediate => "intermediate",
            MaturityLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaturityAssessment {
    pub level: MaturityLevel,
    pub score: u32,
}

impl MaturityAssessment {
    pub fn from_score(score: u32) -> Self {
        Self {
            level: MaturityLevel::from_score(score),
            score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDescription {
    pub short: String,
    pub long: String,
    #[serde(rename = "problemStatement", default, skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<String>,
}

/// A repository after enrichment and analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzedRepository {
    pub repository: GitHubRepo,
    pub languages: LanguageBreakdown,
    pub readme: Option<String>,
    #[serde(rename = "commitsCount", default)]
    pub commits_count: Option<u32>,
    pub maturity: MaturityAssessment,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
    pub description: ProjectDescription,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Databases,
    Tools,
    Cloud,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Tools,
        SkillCategory::Cloud,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Databases => "databases",
            SkillCategory::Tools => "tools",
            SkillCategory::Cloud => "cloud",
        }
    }

    /// Proficiency shown for every skill of this category on the site.
    pub fn level(&self) -> SkillLevel {
        match self {
            SkillCategory::Languages | SkillCategory::Tools => SkillLevel::Expert,
            SkillCategory::Frameworks | SkillCategory::Databases => SkillLevel::Proficient,
            SkillCategory::Cloud => SkillLevel::Familiar,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillInventory {
    pub languages: BTreeSet<String>,
    pub frameworks: BTreeSet<String>,
    pub databases: BTreeSet<String>,
    pub tools: BTreeSet<String>,
    pub cloud: BTreeSet<String>,
}

impl SkillInventory {
    pub fn get(&self, category: SkillCategory) -> &BTreeSet<String> {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Cloud => &self.cloud,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut BTreeSet<String> {
        match category {
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Frameworks => &mut self.frameworks,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Cloud => &mut self.cloud,
        }
    }

    pub fn total(&self) -> usize {
        SkillCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The persisted bundle handed from the analyzer to the emitter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioSnapshot {
    pub user: GitHubUser,
    pub repositories: Vec<AnalyzedRepository>,
    pub skills: SkillInventory,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProjectCategory {
    #[serde(rename = "ai-ml")]
    AiMl,
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "embedded")]
    Embedded,
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "automation")]
    Automation,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::AiMl => "ai-ml",
            ProjectCategory::Web => "web",
            ProjectCategory::Embedded => "embedded",
            ProjectCategory::Security => "security",
            ProjectCategory::Automation => "automation",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project entry of the generated module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub tech_stack: Vec<String>,
    pub github_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    pub category: ProjectCategory,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SkillLevel {
    Expert,
    Proficient,
    Familiar,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Work history entry. The GitHub pipeline never produces any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitroll: Option<String>,
    pub location: String,
    pub education: Education,
}

/// Everything the generated module exports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub personal_info: PersonalInfo,
    pub achievements: Vec<String>,
}
