//! Fitment profile: per-skill proficiency and market relevance, strength areas,
//! career-path suggestions over the role catalogue and market alignment.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::errors::ScoringError;
use crate::models::candidate::CandidateProfile;
use crate::models::report::{CareerPathSuggestion, SkillFitment};
use crate::ranking::outcome::ensure_finite;
use crate::ranking::skills::{normalize, skill_set};
use crate::reference::ReferenceData;

const PROFICIENCY_YEARS: f64 = 5.0;
const MAX_STRENGTH_AREAS: usize = 5;
const MAX_CAREER_PATHS: usize = 5;
const MAX_LEARN_STEPS: usize = 3;
const JUNIOR_YEARS: f64 = 3.0;
const CORE_SKILL_TARGET: f64 = 0.7;

const HIGH_DEMAND_FLOOR: f64 = 0.85;
const EMERGING_FLOOR: f64 = 0.75;
const HIGH_DEMAND_WEIGHT: f64 = 0.7;
const EMERGING_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Default)]
pub struct FitmentProfile {
    pub skill_fitment: Vec<SkillFitment>,
    pub strength_areas: Vec<String>,
    pub career_paths: Vec<CareerPathSuggestion>,
    pub market_alignment_score: f64,
}

impl FitmentProfile {
    pub fn mean_proficiency(&self) -> f64 {
        if self.skill_fitment.is_empty() {
            return 0.0;
        }
        self.skill_fitment
            .iter()
            .map(|sf| sf.proficiency_level)
            .sum::<f64>()
            / self.skill_fitment.len() as f64
    }
}

/// Proficiency from cumulative years of use across positions listing the skill.
pub fn skill_fitment(
    candidate: &CandidateProfile,
    reference: &ReferenceData,
    today: NaiveDate,
) -> Vec<SkillFitment> {
    let mut usage: HashMap<String, f64> = HashMap::new();
    for exp in &candidate.experience {
        let years = exp.duration_years(today);
        for skill in &exp.skills_used {
            *usage.entry(normalize(skill)).or_default() += years;
        }
    }

    candidate
        .skills
        .iter()
        .filter(|skill| !skill.trim().is_empty())
        .map(|skill| {
            let years = usage.get(&normalize(skill)).copied().unwrap_or(0.0);
            SkillFitment {
                skill_name: skill.clone(),
                proficiency_level: (years / PROFICIENCY_YEARS).min(1.0),
                relevance_score: reference.skill_relevance(skill),
            }
        })
        .collect()
}

/// Top skills by proficiency × relevance.
pub fn strength_areas(fitment: &[SkillFitment]) -> Vec<String> {
    let mut scored: Vec<(&str, f64)> = fitment
        .iter()
        .map(|sf| (sf.skill_name.as_str(), sf.proficiency_level * sf.relevance_score))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_STRENGTH_AREAS)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Scores every catalogue role and returns the best five, highest fitment first.
pub fn suggest_career_paths(
    fitment: &[SkillFitment],
    experience_years: f64,
    reference: &ReferenceData,
) -> Vec<CareerPathSuggestion> {
    let held: Vec<String> = fitment.iter().map(|sf| normalize(&sf.skill_name)).collect();
    let mut suggestions = Vec::new();

    for category in &reference.role_categories {
        let core = skill_set(&category.core_skills);
        let skill_gap: Vec<String> = category
            .core_skills
            .iter()
            .filter(|skill| !held.contains(&normalize(skill)))
            .cloned()
            .collect();
        let skills_match = if core.is_empty() {
            0.0
        } else {
            core.iter().filter(|skill| held.contains(skill)).count() as f64 / core.len() as f64
        };
        let fitment_score = skills_match * 0.4
            + category.market_demand * 0.3
            + category.growth_potential * 0.3;

        let mut next_steps: Vec<String> = skill_gap
            .iter()
            .take(MAX_LEARN_STEPS)
            .map(|skill| format!("Learn {skill}"))
            .collect();
        if experience_years < JUNIOR_YEARS {
            next_steps.push("Gain more industry experience".to_string());
        }
        if skills_match < CORE_SKILL_TARGET {
            next_steps.push("Focus on core skills for this role".to_string());
        }

        for role in &category.roles {
            suggestions.push(CareerPathSuggestion {
                role_title: role.clone(),
                fitment_score,
                required_skills_match: skills_match,
                market_demand: category.market_demand,
                growth_potential: category.growth_potential,
                skill_gap: skill_gap.clone(),
                next_steps: next_steps.clone(),
            });
        }
    }

    suggestions.sort_by(|a, b| b.fitment_score.total_cmp(&a.fitment_score));
    suggestions.truncate(MAX_CAREER_PATHS);
    suggestions
}

/// Weighted relevance of the candidate's high-demand and emerging skills,
/// averaged over how many such skills there are. 0 when there are none.
pub fn market_alignment(fitment: &[SkillFitment]) -> f64 {
    let (total, count) = fitment.iter().fold((0.0, 0usize), |(total, count), sf| {
        let r = sf.relevance_score;
        if r >= HIGH_DEMAND_FLOOR {
            (total + r * HIGH_DEMAND_WEIGHT, count + 1)
        } else if r >= EMERGING_FLOOR {
            (total + r * EMERGING_WEIGHT, count + 1)
        } else {
            (total, count)
        }
    });
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

pub fn fitment_profile(
    candidate: &CandidateProfile,
    reference: &ReferenceData,
    today: NaiveDate,
) -> Result<FitmentProfile, ScoringError> {
    let skill_fitment = skill_fitment(candidate, reference, today);
    let experience_years = candidate.total_experience_years(today);
    let market_alignment_score = ensure_finite("market_alignment", market_alignment(&skill_fitment))?;

    Ok(FitmentProfile {
        strength_areas: strength_areas(&skill_fitment),
        career_paths: suggest_career_paths(&skill_fitment, experience_years, reference),
        market_alignment_score,
        skill_fitment,
    })
}
