use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnalysisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::ConfigError { .. }
            | AnalysisError::MissingConfigError { .. }
            | AnalysisError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AnalysisError::IoError(_) => ErrorCategory::Input,
            AnalysisError::ProcessingError { .. } => ErrorCategory::Processing,
            AnalysisError::SerializationError(_) | AnalysisError::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A malformed catalog is fatal before any document is touched
            AnalysisError::ConfigError { .. }
            | AnalysisError::MissingConfigError { .. }
            | AnalysisError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
            AnalysisError::IoError(_) => ErrorSeverity::High,
            AnalysisError::ProcessingError { .. } => ErrorSeverity::High,
            AnalysisError::SerializationError(_) | AnalysisError::CsvError(_) => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalysisError::IoError(e) => format!("Could not read or write a file: {}", e),
            AnalysisError::ConfigError { message } => {
                format!("The configuration is invalid: {}", message)
            }
            AnalysisError::MissingConfigError { field } => {
                format!("A required setting is missing: {}", field)
            }
            AnalysisError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            AnalysisError::ProcessingError { message } => {
                format!("Resume analysis failed: {}", message)
            }
            AnalysisError::SerializationError(e) => {
                format!("Could not serialize the analysis result: {}", e)
            }
            AnalysisError::CsvError(e) => format!("Could not write chart data: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AnalysisError::IoError(_) => {
                "Check that the resume file exists and the output directory is writable"
                    .to_string()
            }
            AnalysisError::ConfigError { .. }
            | AnalysisError::MissingConfigError { .. }
            | AnalysisError::InvalidConfigValueError { .. } => {
                "Fix the profile catalog or CLI flags and rerun; every profile needs a unique name and at least one required skill"
                    .to_string()
            }
            AnalysisError::ProcessingError { .. } => {
                "Rerun with --verbose to see which pipeline stage failed".to_string()
            }
            AnalysisError::SerializationError(_) | AnalysisError::CsvError(_) => {
                "Check free disk space and rerun; the analysis itself succeeded".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_are_critical_configuration_errors() {
        let err = AnalysisError::ConfigError {
            message: "duplicate profile name: AI Engineer".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("AI Engineer"));
    }

    #[test]
    fn io_errors_map_to_input_category() {
        let err = AnalysisError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "resume.txt",
        ));

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("resume file"));
    }
}
