use crate::domain::model::ProfileDefinition;
use crate::utils::error::{AnalysisError, Result};
use std::collections::{BTreeSet, HashSet};

/// True when the lower-cased skill survives `\w+` tokenization as a single
/// token. Skills with spaces or symbols ("Machine Learning", "C++", "CI/CD")
/// need the substring fallback in the detector instead.
pub(crate) fn is_word_token(skill: &str) -> bool {
    !skill.is_empty() && skill.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Lower-cased union of every required skill across the catalog, computed
/// once at build time and split by how each token can be matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    word_tokens: BTreeSet<String>,
    irregular_tokens: BTreeSet<String>,
}

impl SkillVocabulary {
    fn from_profiles(profiles: &[ProfileDefinition]) -> Self {
        let mut word_tokens = BTreeSet::new();
        let mut irregular_tokens = BTreeSet::new();

        for profile in profiles {
            for skill in &profile.required_skills {
                let token = skill.to_lowercase();
                if is_word_token(&token) {
                    word_tokens.insert(token);
                } else {
                    irregular_tokens.insert(token);
                }
            }
        }

        Self {
            word_tokens,
            irregular_tokens,
        }
    }

    pub fn word_tokens(&self) -> &BTreeSet<String> {
        &self.word_tokens
    }

    pub fn irregular_tokens(&self) -> &BTreeSet<String> {
        &self.irregular_tokens
    }

    pub fn len(&self) -> usize {
        self.word_tokens.len() + self.irregular_tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_tokens.is_empty() && self.irregular_tokens.is_empty()
    }
}

/// Read-only set of all profile definitions, keyed by name. Built once at
/// process start; declaration order is preserved because it is the
/// tie-break order for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCatalog {
    profiles: Vec<ProfileDefinition>,
    vocabulary: SkillVocabulary,
}

impl ProfileCatalog {
    pub fn build(definitions: Vec<ProfileDefinition>) -> Result<Self> {
        if definitions.is_empty() {
            return Err(AnalysisError::ConfigError {
                message: "profile catalog must contain at least one profile".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for profile in &definitions {
            if profile.name.trim().is_empty() {
                return Err(AnalysisError::ConfigError {
                    message: "profile name cannot be empty".to_string(),
                });
            }
            if !seen.insert(profile.name.clone()) {
                return Err(AnalysisError::ConfigError {
                    message: format!("duplicate profile name: {}", profile.name),
                });
            }
            if profile.required_skills.is_empty() {
                return Err(AnalysisError::ConfigError {
                    message: format!("profile '{}' has an empty skill list", profile.name),
                });
            }
        }

        let vocabulary = SkillVocabulary::from_profiles(&definitions);

        Ok(Self {
            profiles: definitions,
            vocabulary,
        })
    }

    /// Profiles in declaration order.
    pub fn profiles(&self) -> &[ProfileDefinition] {
        &self.profiles
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// The built-in job profile catalog used when no catalog file is supplied.
pub fn default_profiles() -> Vec<ProfileDefinition> {
    vec![
        ProfileDefinition::new(
            "Software Developer",
            vec!["Python", "Java", "C++", "Git", "Data Structures", "Algorithms"],
        ),
        ProfileDefinition::new(
            "AI Engineer",
            vec![
                "Python",
                "Machine Learning",
                "Deep Learning",
                "TensorFlow",
                "PyTorch",
                "NLP",
            ],
        ),
        ProfileDefinition::new(
            "SQL Developer",
            vec![
                "SQL",
                "Database Management",
                "ETL",
                "Data Warehousing",
                "Oracle",
                "MySQL",
            ],
        ),
        ProfileDefinition::new(
            "Data Scientist",
            vec![
                "Python",
                "R",
                "Statistics",
                "Data Analysis",
                "Machine Learning",
                "Pandas",
            ],
        ),
        ProfileDefinition::new(
            "Web Developer",
            vec!["HTML", "CSS", "JavaScript", "React", "Node.js", "Git"],
        ),
        ProfileDefinition::new(
            "DevOps Engineer",
            vec!["CI/CD", "Docker", "Kubernetes", "AWS", "Linux", "Shell Scripting"],
        ),
        ProfileDefinition::new(
            "Mobile App Developer",
            vec!["Java", "Kotlin", "Swift", "Android", "iOS", "Flutter"],
        ),
        ProfileDefinition::new(
            "Cybersecurity Analyst",
            vec![
                "Networking",
                "Firewalls",
                "Penetration Testing",
                "Cryptography",
                "Linux",
                "SIEM",
            ],
        ),
    ]
}

impl ProfileCatalog {
    pub fn with_default_profiles() -> Self {
        Self::build(default_profiles()).expect("built-in profile catalog is valid")
    }
}
