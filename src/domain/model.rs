use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named job role and the skills it requires. Display casing is kept as
/// declared; matching always goes through lower-casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefinition {
    pub name: String,
    pub required_skills: Vec<String>,
}

impl ProfileDefinition {
    pub fn new(name: impl Into<String>, required_skills: Vec<&str>) -> Self {
        Self {
            name: name.into(),
            required_skills: required_skills.into_iter().map(String::from).collect(),
        }
    }
}

/// Per-document extraction result. Built once per analysis run, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedEntities {
    pub education_mentions: Vec<String>,
    pub experience_mentions: Vec<String>,
    /// Lower-cased skill tokens present in the document (intersection of
    /// document vocabulary and catalog vocabulary).
    pub detected_skills: BTreeSet<String>,
    /// Advisory flag: the document text was empty. The pipeline still
    /// completes and produces sentinel results.
    pub empty_input: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileScore {
    pub profile: String,
    pub matched: usize,
    pub required: usize,
}

/// One entry per catalog profile, in catalog declaration order. The order
/// matters: it is the tie-break order for best-profile selection and the
/// display order for downstream renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ProfileScoreboard {
    pub entries: Vec<ProfileScore>,
}

impl ProfileScoreboard {
    pub fn get(&self, profile: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.profile == profile)
            .map(|e| e.matched)
    }

    pub fn has_any_match(&self) -> bool {
        self.entries.iter().any(|e| e.matched > 0)
    }
}

/// Scoring outcome for one document. `best_profile` is `None` when every
/// profile scored zero, so renderers can never look up the skill list of
/// a non-existent profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileMatchResult {
    pub best_profile: Option<String>,
    pub scoreboard: ProfileScoreboard,
    /// Required-skill display strings of the best profile that were not
    /// detected, in the catalog's declared skill order. Empty when there
    /// is no best profile.
    pub missing_skills: Vec<String>,
}

/// Occurrence count of one detected skill in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: usize,
}

/// Full analysis result bundle handed to renderers and report writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeAnalysis {
    pub entities: ExtractedEntities,
    pub match_result: ProfileMatchResult,
    /// "Bachelor's" when any education mention names a bachelor degree;
    /// lexical check only, no semantic claim.
    pub education_level: Option<String>,
    pub skill_frequencies: Vec<SkillFrequency>,
}
