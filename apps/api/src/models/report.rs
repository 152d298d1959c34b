//! Output data contracts — everything `rank` hands back to the caller.

use serde::{Deserialize, Serialize};

use crate::models::job::ScoreWeights;
use crate::ranking::certification::CertificationMatch;
use crate::ranking::culture::{CulturalFit, CulturalFitDetails};
use crate::ranking::education::EducationMatch;
use crate::ranking::experience::ExperienceMatch;
use crate::ranking::outcome::DegradedComponent;
use crate::ranking::progression::CareerProgression;
use crate::ranking::skills::SkillMatch;

/// Seniority classification derived from job-title keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityTier {
    #[serde(rename = "Entry-level")]
    Entry,
    #[serde(rename = "Mid-level")]
    Mid,
    Executive,
    Unknown,
}

impl SeniorityTier {
    /// Entry=1, Mid=2, Executive=3, Unknown=0.
    pub fn ordinal(self) -> u8 {
        match self {
            SeniorityTier::Unknown => 0,
            SeniorityTier::Entry => 1,
            SeniorityTier::Mid => 2,
            SeniorityTier::Executive => 3,
        }
    }

    /// The tier above this one. Executive is the ceiling.
    pub fn next(self) -> Self {
        match self {
            SeniorityTier::Unknown | SeniorityTier::Entry => SeniorityTier::Mid,
            SeniorityTier::Mid | SeniorityTier::Executive => SeniorityTier::Executive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillFitment {
    pub skill_name: String,
    /// 0–1, from cumulative years of use (capped at 5 years).
    pub proficiency_level: f64,
    /// 0–1, from the market-trend tables (0.5 when unlisted).
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPathSuggestion {
    pub role_title: String,
    pub fitment_score: f64,
    pub required_skills_match: f64,
    pub market_demand: f64,
    pub growth_potential: f64,
    pub skill_gap: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

impl GapPriority {
    /// High for the first two gaps, Medium for the next two, Low after that.
    pub fn for_position(index: usize) -> Self {
        match index {
            0 | 1 => GapPriority::High,
            2 | 3 => GapPriority::Medium,
            _ => GapPriority::Low,
        }
    }

    pub fn weight(self) -> u8 {
        match self {
            GapPriority::High => 3,
            GapPriority::Medium => 2,
            GapPriority::Low => 1,
        }
    }

    pub fn relevance(self) -> f64 {
        match self {
            GapPriority::High => 0.9,
            GapPriority::Medium => 0.7,
            GapPriority::Low => 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapForecast {
    pub skills_needed: Vec<String>,
    pub priority_level: GapPriority,
    /// e.g. "Year 1"
    pub timeframe: String,
    pub relevance_score: f64,
    pub learning_resources: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryPrediction {
    pub timepoint: String,
    pub predicted_role: String,
    pub confidence_score: f64,
    pub alternative_roles: Vec<String>,
    pub skill_gaps: Vec<SkillGapForecast>,
    pub salary_range: Option<SalaryRange>,
    pub market_demand_score: f64,
}

/// Three-year role projection.
///
/// This is a deterministic rule-based projection. `baseline_accuracy`,
/// `ml_model_accuracy` and `model_type` are fixed illustrative labels, not
/// measurements of a trained model; `accuracy_is_illustrative` is always true
/// so consumers can say so.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerForecast {
    pub forecast_timeline: Vec<TrajectoryPrediction>,
    pub baseline_accuracy: f64,
    pub ml_model_accuracy: f64,
    pub model_type: String,
    pub accuracy_is_illustrative: bool,
    pub top_skills_to_acquire: Vec<String>,
    pub industry_alignment_score: f64,
}

/// Per-component breakdown of a match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_match: Option<SkillMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_match: Option<ExperienceMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_match: Option<EducationMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_match: Option<CertificationMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_fit: Option<CulturalFit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_weights: Option<ScoreWeights>,
    /// Components that failed and were replaced by a neutral default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<DegradedComponent>,
    /// Set only when the whole ranking failed and this report is a fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full fitment report for one candidate against one job requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_title: String,
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_match: f64,
    pub education_match: bool,
    pub suggested_roles: Vec<String>,
    pub match_details: MatchDetails,

    pub overall_fitment_score: f64,
    pub skill_fitment: Vec<SkillFitment>,
    pub career_path_suggestions: Vec<CareerPathSuggestion>,
    pub market_alignment_score: f64,
    pub strength_areas: Vec<String>,
    pub growth_opportunities: Vec<String>,
    pub best_matched_roles: Vec<CareerPathSuggestion>,

    pub certification_match_score: Option<f64>,
    pub matching_certifications: Option<Vec<String>>,
    pub missing_certifications: Option<Vec<String>>,

    pub cultural_fit_score: Option<f64>,
    pub cultural_fit_details: Option<CulturalFitDetails>,
    pub company_values: Option<Vec<String>>,

    pub career_progression: Option<CareerProgression>,
    pub career_forecast: Option<CareerForecast>,
}

impl JobMatch {
    /// Neutral report returned when ranking fails outright.
    pub fn fallback(job_title: &str, error: impl Into<String>) -> Self {
        Self {
            job_title: job_title.to_string(),
            match_score: 0.5,
            matching_skills: vec![],
            missing_skills: vec![],
            experience_match: 0.5,
            education_match: false,
            suggested_roles: vec![],
            match_details: MatchDetails {
                error: Some(error.into()),
                ..MatchDetails::default()
            },
            overall_fitment_score: 0.5,
            skill_fitment: vec![],
            career_path_suggestions: vec![],
            market_alignment_score: 0.5,
            strength_areas: vec![],
            growth_opportunities: vec![],
            best_matched_roles: vec![],
            certification_match_score: None,
            matching_certifications: None,
            missing_certifications: None,
            cultural_fit_score: None,
            cultural_fit_details: None,
            company_values: None,
            career_progression: None,
            career_forecast: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.match_details.error.is_some()
    }
}
