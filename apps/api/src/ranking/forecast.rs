//! Three-year career trajectory projection.
//!
//! Rule-based: walks the industry's role track from a starting point chosen by
//! seniority and tenure, one step per year. The accuracy figures attached to
//! the result are fixed labels and are flagged as illustrative.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::errors::ScoringError;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobRequirement;
use crate::models::report::{
    CareerForecast, GapPriority, SeniorityTier, SkillGapForecast, TrajectoryPrediction,
};
use crate::ranking::progression::classify_title;
use crate::ranking::skills::{normalize, skill_set};
use crate::reference::{ReferenceData, RoleTrack};

const FORECAST_YEARS: usize = 3;
const CONFIDENCE_BASE: f64 = 0.85;
const CONFIDENCE_DECAY: f64 = 0.1;
const CONFIDENCE_FLOOR: f64 = 0.6;
const MAX_ALTERNATIVES: usize = 3;
const MAX_TOP_SKILLS: usize = 5;
const HOME_MARKET_DEMAND: f64 = 0.9;
const AWAY_MARKET_DEMAND: f64 = 0.8;
const DEFAULT_INDUSTRY_ALIGNMENT: f64 = 0.7;

const BASELINE_ACCURACY: f64 = 0.7;
const MODEL_ACCURACY: f64 = 0.85;
const MODEL_TYPE: &str = "LSTM";

/// Index into the current tier's roles, from total years of experience.
fn starting_index(tier: SeniorityTier, total_years: f64) -> usize {
    let (first, second) = match tier {
        SeniorityTier::Mid => (8.0, 12.0),
        SeniorityTier::Executive => (15.0, 20.0),
        SeniorityTier::Entry | SeniorityTier::Unknown => (3.0, 5.0),
    };
    if total_years > second {
        2
    } else if total_years > first {
        1
    } else {
        0
    }
}

fn tier_roles(track: &RoleTrack, tier: SeniorityTier) -> Result<&[String], ScoringError> {
    track
        .tiers
        .get(tier)
        .map(Vec::as_slice)
        .filter(|roles| !roles.is_empty())
        .ok_or(ScoringError::MissingReference("role_progressions"))
}

fn skill_gaps(
    tier_skills: &[String],
    held: &HashSet<String>,
    year: usize,
    reference: &ReferenceData,
) -> Vec<SkillGapForecast> {
    tier_skills
        .iter()
        .filter(|skill| !held.contains(&normalize(skill)))
        .enumerate()
        .map(|(i, skill)| {
            let priority = GapPriority::for_position(i);
            SkillGapForecast {
                skills_needed: vec![skill.clone()],
                priority_level: priority,
                timeframe: format!("Year {}", year + 1),
                relevance_score: priority.relevance(),
                learning_resources: reference.learning_resources_for(skill),
            }
        })
        .collect()
}

/// Projects the candidate's next three years against the job's industry track.
pub fn forecast_career(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    reference: &ReferenceData,
    today: NaiveDate,
) -> Result<CareerForecast, ScoringError> {
    let track = reference
        .progression_for(&job.industry)
        .ok_or(ScoringError::MissingReference("role_progressions"))?;
    let tier_skills = reference.skills_for(&job.industry);
    let held = skill_set(&candidate.skills);

    let current_tier = match candidate
        .most_recent_experience(today)
        .map(|exp| classify_title(&exp.title))
    {
        Some(SeniorityTier::Unknown) | None => SeniorityTier::Entry,
        Some(tier) => tier,
    };
    let total_years = candidate.total_experience_years(today);
    let start = starting_index(current_tier, total_years);
    let roles = tier_roles(track, current_tier)?;

    let market_demand_score = if track.industry == job.industry {
        HOME_MARKET_DEMAND
    } else {
        AWAY_MARKET_DEMAND
    };

    let mut forecast_timeline = Vec::with_capacity(FORECAST_YEARS);
    for year in 0..FORECAST_YEARS {
        let step = start + year;
        let role_index = step.min(roles.len() - 1);

        let (tier, predicted_role) = if step >= roles.len() {
            let next = current_tier.next();
            (next, tier_roles(track, next)?[0].clone())
        } else {
            (current_tier, roles[role_index].clone())
        };

        let alternative_roles: Vec<String> = reference
            .role_progressions
            .iter()
            .filter(|other| other.industry != track.industry)
            .filter_map(|other| {
                let alt = other.tiers.get(tier)?;
                alt.get(role_index.min(alt.len().checked_sub(1)?)).cloned()
            })
            .take(MAX_ALTERNATIVES)
            .collect();

        let gaps = match tier_skills.and_then(|s| s.tiers.get(tier)) {
            Some(needed) => skill_gaps(needed, &held, year, reference),
            None => vec![],
        };

        forecast_timeline.push(TrajectoryPrediction {
            timepoint: format!("Year {}", year + 1),
            predicted_role,
            confidence_score: (CONFIDENCE_BASE - year as f64 * CONFIDENCE_DECAY).max(CONFIDENCE_FLOOR),
            alternative_roles,
            skill_gaps: gaps,
            salary_range: reference.salary_band(tier),
            market_demand_score,
        });
    }

    let top_skills_to_acquire = top_skills(&forecast_timeline);

    let industry_alignment_score = match tier_skills {
        Some(skills) => {
            let flat: Vec<String> = skills.tiers.iter().flatten().map(|s| normalize(s)).collect();
            if flat.is_empty() {
                DEFAULT_INDUSTRY_ALIGNMENT
            } else {
                let matched = held.iter().filter(|skill| flat.contains(skill)).count();
                (0.6 + matched as f64 / flat.len() as f64 * 0.35).min(0.95)
            }
        }
        None => DEFAULT_INDUSTRY_ALIGNMENT,
    };

    Ok(CareerForecast {
        forecast_timeline,
        baseline_accuracy: BASELINE_ACCURACY,
        ml_model_accuracy: MODEL_ACCURACY,
        model_type: MODEL_TYPE.to_string(),
        accuracy_is_illustrative: true,
        top_skills_to_acquire,
        industry_alignment_score,
    })
}

/// Distinct gap skills across the timeline, by priority then relevance, at most five.
fn top_skills(timeline: &[TrajectoryPrediction]) -> Vec<String> {
    let mut ranked: Vec<(&String, GapPriority, f64)> = timeline
        .iter()
        .flat_map(|prediction| &prediction.skill_gaps)
        .flat_map(|gap| {
            gap.skills_needed
                .iter()
                .map(move |skill| (skill, gap.priority_level, gap.relevance_score))
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.1.weight()
            .cmp(&a.1.weight())
            .then(b.2.total_cmp(&a.2))
    });

    let mut top: Vec<String> = Vec::new();
    for (skill, _, _) in ranked {
        if !top.contains(skill) {
            top.push(skill.clone());
            if top.len() >= MAX_TOP_SKILLS {
                break;
            }
        }
    }
    top
}
