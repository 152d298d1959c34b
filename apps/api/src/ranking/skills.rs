//! Matches candidate skills against the job's required and preferred lists.
//!
//! Comparison is case-insensitive. Reported skill names keep the job's casing
//! and declaration order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const REQUIRED_BONUS_CAP: f64 = 0.2;
const PREFERRED_BONUS_CAP: f64 = 0.15;
const BONUS_PER_EXTRA_MATCH: f64 = 0.1;
const DIVERSITY_BONUS_CAP: f64 = 0.1;
const DIVERSITY_PER_EXTRA_SKILL: f64 = 0.02;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub required_match: f64,
    pub preferred_match: f64,
    pub overall_match: f64,
    pub matching_required: Vec<String>,
    pub matching_preferred: Vec<String>,
    pub missing_required: Vec<String>,
    pub missing_preferred: Vec<String>,
}

pub fn normalize(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Lowercased, trimmed, de-duplicated skill set.
pub fn skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect()
}

/// De-duplicates a list case-insensitively, keeping the first spelling.
fn distinct(skills: &[String]) -> Vec<&String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .filter(|s| {
            let key = normalize(s);
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}

/// Splits `wanted` into (matched, missing) against the candidate set.
fn partition(wanted: &[String], have: &HashSet<String>) -> (Vec<String>, Vec<String>) {
    let (matched, missing): (Vec<&String>, Vec<&String>) = distinct(wanted)
        .into_iter()
        .partition(|s| have.contains(&normalize(s)));
    (
        matched.into_iter().cloned().collect(),
        missing.into_iter().cloned().collect(),
    )
}

/// `matched / total`, plus `bonus_per_extra` for every match beyond half the
/// list, capped at `bonus_cap`, total capped at 1.0. Empty list scores 0.
fn coverage(matched: usize, total: usize, bonus_cap: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let matched = matched as f64;
    let total = total as f64;
    let base = matched / total;
    let half = total * 0.5;
    if matched > half {
        let bonus = ((matched - half) * BONUS_PER_EXTRA_MATCH).min(bonus_cap);
        (base + bonus).min(1.0)
    } else {
        base
    }
}

/// Compares candidate skills with the required and preferred skill lists.
///
/// `overall = 0.8 × required + 0.2 × preferred`, plus a diversity bonus of
/// 0.02 per candidate skill beyond the combined list size (capped at 0.1).
pub fn match_skills(candidate: &[String], required: &[String], preferred: &[String]) -> SkillMatch {
    let have = skill_set(candidate);
    let required_count = skill_set(required).len();
    let preferred_count = skill_set(preferred).len();

    let (matching_required, missing_required) = partition(required, &have);
    let (matching_preferred, missing_preferred) = partition(preferred, &have);

    let required_match = coverage(matching_required.len(), required_count, REQUIRED_BONUS_CAP);
    let preferred_match = coverage(
        matching_preferred.len(),
        preferred_count,
        PREFERRED_BONUS_CAP,
    );

    let mut overall_match = required_match * 0.8 + preferred_match * 0.2;

    let listed = required_count + preferred_count;
    if have.len() > listed {
        let extra = (have.len() - listed) as f64;
        let diversity_bonus = (extra * DIVERSITY_PER_EXTRA_SKILL).min(DIVERSITY_BONUS_CAP);
        overall_match = (overall_match + diversity_bonus).min(1.0);
    }

    SkillMatch {
        required_match,
        preferred_match,
        overall_match,
        matching_required,
        matching_preferred,
        missing_required,
        missing_preferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_half_required_no_bonus() {
        let result = match_skills(&skills(&["Python", "SQL"]), &skills(&["Python", "Java"]), &[]);
        assert_eq!(result.required_match, 0.5);
        assert_eq!(result.matching_required, vec!["Python"]);
        assert_eq!(result.missing_required, vec!["Java"]);
    }

    #[test]
    fn test_empty_required_scores_zero() {
        let result = match_skills(&skills(&["Python"]), &[], &[]);
        assert_eq!(result.required_match, 0.0);
        assert_eq!(result.preferred_match, 0.0);
        assert!(result.missing_required.is_empty());
    }

    #[test]
    fn test_exact_cover_is_full_without_diversity_bonus() {
        let required = skills(&["Rust", "Go", "SQL", "Kafka"]);
        let result = match_skills(&required, &required, &[]);
        assert_eq!(result.required_match, 1.0);
        // 0.8 × 1.0, no extra skills so no diversity bonus
        assert!((result.overall_match - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_when_more_than_half_matched() {
        // 3 of 4: base 0.75, bonus (3 - 2) × 0.1 = 0.1
        let result = match_skills(
            &skills(&["a", "b", "c"]),
            &skills(&["a", "b", "c", "d"]),
            &[],
        );
        assert!((result.required_match - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_required_bonus_is_capped() {
        // 9 of 10: base 0.9, bonus min(0.2, 0.4) → capped to 1.0 overall
        let required: Vec<String> = (0..10).map(|i| format!("s{i}")).collect();
        let candidate: Vec<String> = required[..9].to_vec();
        let result = match_skills(&candidate, &required, &[]);
        assert_eq!(result.required_match, 1.0);
    }

    #[test]
    fn test_preferred_bonus_cap_is_lower() {
        // 1 of 1: base 1.0 → capped at 1.0; 2 of 3: base 0.667 + min(0.15, 0.05)
        let result = match_skills(&skills(&["x", "y"]), &[], &skills(&["x", "y", "z"]));
        assert!((result.preferred_match - (2.0 / 3.0 + 0.05)).abs() < 1e-9);
    }

    #[test]
    fn test_case_insensitive_and_keeps_job_casing() {
        let result = match_skills(&skills(&["python"]), &skills(&["Python", "PYTHON"]), &[]);
        assert_eq!(result.matching_required, vec!["Python"]);
        assert!((result.required_match - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_diversity_bonus_capped() {
        let candidate: Vec<String> = (0..20).map(|i| format!("skill{i}")).collect();
        let result = match_skills(&candidate, &skills(&["skill0"]), &[]);
        // required 1.0 → 0.8, diversity min(0.1, 19 × 0.02) = 0.1
        assert!((result.overall_match - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_overall_never_exceeds_one() {
        let candidate: Vec<String> = (0..30).map(|i| format!("k{i}")).collect();
        let result = match_skills(&candidate, &candidate[..3], &candidate[3..6]);
        assert!(result.overall_match <= 1.0);
    }
}
