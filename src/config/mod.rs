pub mod local;
pub mod toml_config;

pub use local::LocalStorage;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "resume-insight")]
#[command(about = "Analyzes a resume against a catalog of job profiles")]
pub struct CliConfig {
    /// Path to the resume text file
    pub resume_path: String,

    #[arg(long, default_value = "./resume-analysis")]
    pub output_path: String,

    /// Optional TOML file overriding the built-in profile catalog
    #[arg(long)]
    pub config: Option<String>,

    /// Free-text job description echoed into the report
    #[arg(long)]
    pub job_description: Option<String>,

    #[arg(long, value_delimiter = ',', default_values_t = vec!["education".to_string()])]
    pub education_keywords: Vec<String>,

    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = vec!["experience".to_string(), "work".to_string()]
    )]
    pub experience_keywords: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn resume_path(&self) -> &str {
        &self.resume_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn job_description(&self) -> Option<&str> {
        self.job_description.as_deref()
    }

    fn education_keywords(&self) -> &[String] {
        &self.education_keywords
    }

    fn experience_keywords(&self) -> &[String] {
        &self.experience_keywords
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_path("resume_path", &self.resume_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_keyword_list("education_keywords", &self.education_keywords)?;
        validation::validate_keyword_list("experience_keywords", &self.experience_keywords)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_the_documented_configuration_surface() {
        let config = CliConfig::parse_from(["resume-insight", "resume.txt"]);

        assert_eq!(config.resume_path, "resume.txt");
        assert_eq!(config.output_path, "./resume-analysis");
        assert_eq!(config.education_keywords, vec!["education"]);
        assert_eq!(config.experience_keywords, vec!["experience", "work"]);
        assert!(config.job_description.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn keyword_flags_accept_comma_separated_lists() {
        let config = CliConfig::parse_from([
            "resume-insight",
            "resume.txt",
            "--experience-keywords",
            "experience,employment",
        ]);

        assert_eq!(config.experience_keywords, vec!["experience", "employment"]);
    }

    #[test]
    fn empty_resume_path_fails_validation() {
        let mut config = CliConfig::parse_from(["resume-insight", "resume.txt"]);
        config.resume_path = String::new();

        assert!(config.validate().is_err());
    }
}
