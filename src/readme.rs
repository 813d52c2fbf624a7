//! Best-effort text mining over README markdown.
//!
//! Everything here is heuristic: section headers, achievement lines and demo
//! links are found by pattern matching, and both false positives and misses
//! are expected.

use crate::models::ProjectDescription;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NO_DESCRIPTION: &str = "No description available";
const PROBLEM_LIMIT: usize = 100;
const SOLUTION_LIMIT: usize = 150;
const MAX_OUTCOMES: usize = 5;
const ACHIEVEMENT_SCAN_LINES: usize = 10;

static PROBLEM_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#+\s*(?:Problem|Challenge|Motivation|Background)").unwrap());
static SOLUTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)#+\s*(?:Solution|Approach|Implementation|Architecture)").unwrap()
});
static FEATURES_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#+\s*(?:Features|Functionality|Capabilities)").unwrap());
static RESULTS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#+\s*(?:Results|Outcomes|Achievements|Impact)").unwrap());
// A section runs until the next header marker or blank line.
static SECTION_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"#+\s|\n\n").unwrap());

static HEADER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s*").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

static ACHIEVEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)winner|1st|first|champion|hackathon|competition|contest|award|prize|recognition",
    )
    .unwrap()
});

static DEMO_URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // URLs stop at markdown link and autolink delimiters.
        r"(?i)https?://[^\s)\]>]+\.vercel\.app[^\s)\]>]*",
        r"(?i)https?://[^\s)\]>]+\.netlify\.app[^\s)\]>]*",
        r"(?i)https?://[^\s)\]>]+\.github\.io[^\s)\]>]*",
        r"(?i)demo:\s*(https?://[^\s)\]>]+)",
        r"(?i)live:\s*(https?://[^\s)\]>]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeSection {
    Problem,
    Solution,
    Features,
    Results,
}

impl ReadmeSection {
    fn header(&self) -> &'static Regex {
        match self {
            ReadmeSection::Problem => &PROBLEM_HEADER,
            ReadmeSection::Solution => &SOLUTION_HEADER,
            ReadmeSection::Features => &FEATURES_HEADER,
            ReadmeSection::Results => &RESULTS_HEADER,
        }
    }
}

/// Raw text of a section, from its header up to the next header marker or
/// blank line, whichever comes first.
pub fn extract_section(readme: &str, section: ReadmeSection) -> Option<&str> {
    let header = section.header().find(readme)?;
    let end = SECTION_END
        .find(&readme[header.end()..])
        .map_or(readme.len(), |m| header.end() + m.start());
    Some(&readme[header.start()..end])
}

/// Strips header markers, links, inline code and emphasis, and folds the
/// text onto one line.
pub fn clean_markdown(text: &str) -> String {
    let text = HEADER_MARKER.replace_all(text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = NEWLINES.replace_all(&text, " ");
    text.trim().to_string()
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Text up to the first period, with the period.
pub fn first_sentence(text: &str) -> String {
    let head = text.split('.').next().unwrap_or_default();
    format!("{}.", head)
}

pub fn extract_description(readme: Option<&str>, fallback: Option<&str>) -> ProjectDescription {
    let fallback = fallback
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION);

    let Some(readme) = readme else {
        return ProjectDescription {
            short: fallback.to_string(),
            long: fallback.to_string(),
            problem_statement: None,
            features: None,
            outcomes: Vec::new(),
        };
    };

    let problem = extract_section(readme, ReadmeSection::Problem).map(clean_markdown);
    let solution = extract_section(readme, ReadmeSection::Solution).map(clean_markdown);
    let features = extract_section(readme, ReadmeSection::Features).map(clean_markdown);
    let outcomes = extract_section(readme, ReadmeSection::Results)
        .map(extract_outcomes)
        .unwrap_or_default();

    let (short, long) = if problem.is_some() || solution.is_some() {
        let long = format!(
            "{} {}",
            truncate(problem.as_deref().unwrap_or_default(), PROBLEM_LIMIT),
            truncate(solution.as_deref().unwrap_or_default(), SOLUTION_LIMIT)
        )
        .trim()
        .to_string();
        (first_sentence(&long), long)
    } else {
        (fallback.to_string(), fallback.to_string())
    };

    ProjectDescription {
        short,
        long,
        problem_statement: problem,
        features,
        outcomes,
    }
}

/// Splits a results section into up to five fragments on bullet and
/// numbering punctuation, keeping fragments longer than ten characters.
pub fn extract_outcomes(section: &str) -> Vec<String> {
    clean_markdown(section)
        .split(|c: char| matches!(c, '•' | '-' | '*' | '+' | '.') || c.is_ascii_digit())
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > 10)
        .take(MAX_OUTCOMES)
        .map(str::to_string)
        .collect()
}

/// First line among the opening ten that mentions a win, a competition or
/// an award, with bullet markers trimmed.
pub fn extract_achievement(readme: &str) -> Option<String> {
    let is_marker = |c: char| c == '*' || c == '-' || c.is_whitespace();

    readme
        .lines()
        .take(ACHIEVEMENT_SCAN_LINES)
        .find(|line| ACHIEVEMENT.is_match(line))
        .map(|line| line.trim_matches(is_marker).to_string())
        .filter(|line| !line.is_empty())
}

/// First link to a known hosting domain, or one labelled `demo:`/`live:`.
/// Patterns are tried in order; the first pattern that matches wins.
pub fn extract_demo_url(readme: &str) -> Option<String> {
    DEMO_URL_PATTERNS.iter().find_map(|pattern| {
        pattern.captures(readme).and_then(|caps| {
            caps.get(1)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().to_string())
        })
    })
}
