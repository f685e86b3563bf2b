use crate::core::catalog::{is_word_token, SkillVocabulary};
use crate::domain::model::SkillFrequency;
use regex::Regex;
use std::collections::BTreeSet;

fn word_tokens(text: &str) -> Vec<String> {
    let re = Regex::new(r"\w+").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts the set of catalog skills textually present in the document.
///
/// Single-word skills are matched by exact token intersection after `\w+`
/// tokenization. Skills the tokenizer would split apart ("Machine Learning",
/// "C++", "CI/CD") fall back to a case-insensitive substring search over the
/// raw text. No stemming, no synonyms, no partial matches beyond that
/// explicit fallback.
pub fn detect_skills(text: &str, vocabulary: &SkillVocabulary) -> BTreeSet<String> {
    if text.is_empty() || vocabulary.is_empty() {
        return BTreeSet::new();
    }

    let tokens: BTreeSet<String> = word_tokens(text).into_iter().collect();

    let mut detected: BTreeSet<String> = vocabulary
        .word_tokens()
        .intersection(&tokens)
        .cloned()
        .collect();

    let lowered = text.to_lowercase();
    for irregular in vocabulary.irregular_tokens() {
        if lowered.contains(irregular.as_str()) {
            detected.insert(irregular.clone());
        }
    }

    detected
}

/// Occurrence counts for each detected skill, for frequency charts.
/// Irregular skills are counted by substring occurrences; a detected skill
/// always reports at least 1.
pub fn skill_frequencies(text: &str, detected: &BTreeSet<String>) -> Vec<SkillFrequency> {
    let tokens = word_tokens(text);
    let lowered = text.to_lowercase();

    detected
        .iter()
        .map(|skill| {
            let count = if is_word_token(skill) {
                tokens.iter().filter(|t| *t == skill).count()
            } else {
                lowered.matches(skill.as_str()).count()
            };
            SkillFrequency {
                skill: skill.clone(),
                count: count.max(1),
            }
        })
        .collect()
}
