use crate::core::catalog::ProfileCatalog;
use crate::core::classifier::ClassificationKeywords;
use crate::domain::model::ProfileDefinition;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration: profile catalog plus classification keywords.
/// Replaces ambient global lookup tables with an explicitly constructed,
/// validated object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub analysis: AnalysisSection,
    pub classification: Option<ClassificationSection>,
    #[serde(default, rename = "profile")]
    pub profiles: Vec<ProfileSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSection {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationSection {
    pub education_keywords: Option<Vec<String>>,
    pub experience_keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    pub name: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AnalysisError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnalysisError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Builds the validated profile catalog. Duplicate names and empty
    /// skill lists are rejected here, before any document is processed.
    pub fn catalog(&self) -> Result<ProfileCatalog> {
        let definitions: Vec<ProfileDefinition> = self
            .profiles
            .iter()
            .map(|p| ProfileDefinition {
                name: p.name.clone(),
                required_skills: p.required_skills.clone(),
            })
            .collect();

        ProfileCatalog::build(definitions)
    }

    /// Classification keywords, falling back to the documented defaults
    /// for any list the file omits.
    pub fn keywords(&self) -> ClassificationKeywords {
        let defaults = ClassificationKeywords::default();
        let Some(section) = &self.classification else {
            return defaults;
        };

        let education = section
            .education_keywords
            .clone()
            .unwrap_or_else(|| vec!["education".to_string()]);
        let experience = section
            .experience_keywords
            .clone()
            .unwrap_or_else(|| vec!["experience".to_string(), "work".to_string()]);
        ClassificationKeywords::new(&education, &experience)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("analysis.name", &self.analysis.name)?;

        if self.profiles.is_empty() {
            return Err(AnalysisError::MissingConfigError {
                field: "profile".to_string(),
            });
        }

        if let Some(section) = &self.classification {
            if let Some(keywords) = &section.education_keywords {
                validation::validate_keyword_list("classification.education_keywords", keywords)?;
            }
            if let Some(keywords) = &section.experience_keywords {
                validation::validate_keyword_list("classification.experience_keywords", keywords)?;
            }
        }

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        // Catalog build performs the duplicate-name and empty-skill checks
        self.catalog().map(|_| ())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
