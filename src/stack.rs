use crate::models::{LanguageBreakdown, ProjectCategory};

/// Number of languages, by byte count, that make it into a tech stack.
pub const TOP_LANGUAGES: usize = 3;

/// Topic tag (lower case) to the technologies it implies.
const TOPIC_TECHNOLOGIES: &[(&str, &[&str])] = &[
    ("react", &["React", "JavaScript", "TypeScript"]),
    ("nextjs", &["Next.js", "React", "TypeScript"]),
    ("vue", &["Vue.js", "JavaScript"]),
    ("angular", &["Angular", "TypeScript"]),
    ("nodejs", &["Node.js", "JavaScript"]),
    ("node", &["Node.js", "Express"]),
    ("python", &["Python"]),
    ("django", &["Django", "Python"]),
    ("flask", &["Flask", "Python"]),
    ("fastapi", &["FastAPI", "Python"]),
    ("tensorflow", &["TensorFlow", "Python", "Machine Learning"]),
    ("pytorch", &["PyTorch", "Python", "Machine Learning"]),
    ("machine-learning", &["Machine Learning", "Python"]),
    ("deep-learning", &["Deep Learning", "Neural Networks"]),
    ("nlp", &["NLP", "Natural Language Processing"]),
    ("computer-vision", &["Computer Vision", "OpenCV"]),
    ("android", &["Android", "Java", "Kotlin"]),
    ("ios", &["iOS", "Swift"]),
    ("flutter", &["Flutter", "Dart"]),
    ("react-native", &["React Native", "JavaScript"]),
    ("mongodb", &["MongoDB", "NoSQL"]),
    ("postgresql", &["PostgreSQL", "SQL"]),
    ("mysql", &["MySQL", "SQL"]),
    ("sqlite", &["SQLite", "SQL"]),
    ("docker", &["Docker"]),
    ("kubernetes", &["Kubernetes"]),
    ("aws", &["AWS", "Cloud"]),
    ("azure", &["Azure", "Cloud"]),
    ("gcp", &["Google Cloud", "Cloud"]),
    ("linux", &["Linux"]),
    ("embedded", &["Embedded Systems", "C/C++"]),
    ("arduino", &["Arduino", "IoT"]),
    ("raspberry-pi", &["Raspberry Pi", "IoT"]),
    ("blockchain", &["Blockchain", "Web3"]),
    ("ethereum", &["Ethereum", "Smart Contracts"]),
    ("solidity", &["Solidity", "Blockchain"]),
    ("web3", &["Web3", "Blockchain"]),
    ("cybersecurity", &["Cybersecurity", "Security"]),
    ("penetration-testing", &["Penetration Testing", "Security"]),
    ("cryptography", &["Cryptography", "Security"]),
];

/// Categories in priority order. The first one with a keyword contained in
/// any stack entry wins, so the order matters.
const CATEGORY_KEYWORDS: &[(ProjectCategory, &[&str])] = &[
    (
        ProjectCategory::AiMl,
        &[
            "machine learning",
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "nlp",
            "computer vision",
            "deep learning",
        ],
    ),
    (
        ProjectCategory::Web,
        &[
            "react",
            "vue",
            "angular",
            "next.js",
            "html",
            "css",
            "javascript",
            "typescript",
            "flask",
            "fastapi",
            "django",
        ],
    ),
    (
        ProjectCategory::Embedded,
        &["c", "c++", "embedded", "arduino", "raspberry pi", "iot", "embedded c"],
    ),
    (
        ProjectCategory::Security,
        &["security", "cryptography", "penetration testing", "scanner", "networking"],
    ),
    (
        ProjectCategory::Automation,
        &["automation", "scripting", "bash", "powershell"],
    ),
];

pub fn technologies_for_topic(topic: &str) -> &'static [&'static str] {
    let topic = topic.to_lowercase();
    TOPIC_TECHNOLOGIES
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, techs)| *techs)
        .unwrap_or(&[])
}

/// Top languages followed by topic-derived technologies, without duplicates,
/// in first-seen order.
pub fn extract_tech_stack(languages: &LanguageBreakdown, topics: &[String]) -> Vec<String> {
    let mut stack: Vec<String> = Vec::new();
    let mut push = |tech: &str| {
        if !stack.iter().any(|existing| existing == tech) {
            stack.push(tech.to_string());
        }
    };

    for language in languages.top(TOP_LANGUAGES) {
        push(language);
    }
    for topic in topics {
        for tech in technologies_for_topic(topic) {
            push(tech);
        }
    }

    stack
}

pub fn infer_category<S: AsRef<str>>(tech_stack: &[S]) -> ProjectCategory {
    let lowered: Vec<String> = tech_stack.iter().map(|t| t.as_ref().to_lowercase()).collect();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            lowered
                .iter()
                .any(|tech| keywords.iter().any(|keyword| tech.contains(keyword)))
        })
        .map(|(category, _)| *category)
        .unwrap_or(ProjectCategory::Web)
}
