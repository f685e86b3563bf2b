use crate::core::catalog::ProfileCatalog;
use crate::domain::model::{ProfileMatchResult, ProfileScore, ProfileScoreboard};
use std::collections::BTreeSet;

/// Scores the detected skill set against every catalog profile and picks
/// the best fit.
///
/// The scoreboard keeps catalog declaration order, which doubles as the
/// tie-break order: on equal maximal counts the first-declared profile
/// wins. When every count is zero there is no best profile and the missing
/// list is empty. Pure function, idempotent over its inputs.
pub fn score(detected_skills: &BTreeSet<String>, catalog: &ProfileCatalog) -> ProfileMatchResult {
    let mut entries = Vec::with_capacity(catalog.len());
    for profile in catalog.profiles() {
        let matched = profile
            .required_skills
            .iter()
            .filter(|skill| detected_skills.contains(&skill.to_lowercase()))
            .count();
        entries.push(ProfileScore {
            profile: profile.name.clone(),
            matched,
            required: profile.required_skills.len(),
        });
    }

    // Strictly-greater comparison keeps the first-declared profile on ties.
    let mut best: Option<(usize, usize)> = None;
    for (index, entry) in entries.iter().enumerate() {
        if best.map_or(true, |(_, count)| entry.matched > count) {
            best = Some((index, entry.matched));
        }
    }

    let best_profile = best
        .filter(|(_, count)| *count > 0)
        .map(|(index, _)| entries[index].profile.clone());

    let missing_skills = match &best_profile {
        Some(name) => catalog
            .profiles()
            .iter()
            .find(|p| &p.name == name)
            .map(|p| {
                p.required_skills
                    .iter()
                    .filter(|skill| !detected_skills.contains(&skill.to_lowercase()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default(),
        None => Vec::new(),
    };

    ProfileMatchResult {
        best_profile,
        scoreboard: ProfileScoreboard { entries },
        missing_skills,
    }
}
