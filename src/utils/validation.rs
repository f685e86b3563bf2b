use crate::utils::error::{AnalysisError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Classification keyword lists must carry at least one usable keyword,
/// otherwise a whole category silently stops matching.
pub fn validate_keyword_list(field_name: &str, keywords: &[String]) -> Result<()> {
    if keywords.is_empty() {
        return Err(AnalysisError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one keyword is required".to_string(),
        });
    }

    for keyword in keywords {
        validate_non_empty_string(field_name, keyword)?;
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| AnalysisError::MissingConfigError {
            field: field_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_keyword_list() {
        let keywords = vec!["education".to_string()];
        assert!(validate_keyword_list("education_keywords", &keywords).is_ok());

        assert!(validate_keyword_list("education_keywords", &[]).is_err());

        let blank = vec!["   ".to_string()];
        assert!(validate_keyword_list("education_keywords", &blank).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("resume.txt".to_string());
        assert!(validate_required_field("resume_path", &present).is_ok());

        let absent: Option<String> = None;
        assert!(validate_required_field("resume_path", &absent).is_err());
    }
}
