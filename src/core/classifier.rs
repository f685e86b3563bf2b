/// Keyword lists driving sentence classification. Lower-cased once at
/// construction so every sentence test is a plain substring check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationKeywords {
    education: Vec<String>,
    experience: Vec<String>,
}

impl ClassificationKeywords {
    pub fn new(education: &[String], experience: &[String]) -> Self {
        Self {
            education: education.iter().map(|k| k.to_lowercase()).collect(),
            experience: experience.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

impl Default for ClassificationKeywords {
    fn default() -> Self {
        Self {
            education: vec!["education".to_string()],
            experience: vec!["experience".to_string(), "work".to_string()],
        }
    }
}

/// Tags each sentence as an education or experience mention. Education is
/// checked first and wins when both keyword sets match; this ordering is a
/// deliberate policy, not an accident, and changing it changes results.
pub fn classify(
    sentences: &[String],
    keywords: &ClassificationKeywords,
) -> (Vec<String>, Vec<String>) {
    let mut education_mentions = Vec::new();
    let mut experience_mentions = Vec::new();

    for sentence in sentences {
        let lowered = sentence.to_lowercase();

        if keywords.education.iter().any(|k| lowered.contains(k)) {
            education_mentions.push(sentence.trim().to_string());
        } else if keywords.experience.iter().any(|k| lowered.contains(k)) {
            experience_mentions.push(sentence.trim().to_string());
        }
    }

    (education_mentions, experience_mentions)
}

/// Lexical education-level check over the classified education mentions.
pub fn education_level(education_mentions: &[String]) -> Option<String> {
    if education_mentions
        .iter()
        .any(|m| m.to_lowercase().contains("bachelor"))
    {
        Some("Bachelor's".to_string())
    } else {
        None
    }
}
