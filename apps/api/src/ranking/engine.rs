//! Ranking engine — runs every matcher and folds the results into one `JobMatch`.
//!
//! `RuleBasedRanker` holds the shared reference tables and no other state, so
//! the same instance can score candidates from many threads at once.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, error};

use crate::errors::ScoringError;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobRequirement;
use crate::models::report::{CareerForecast, JobMatch, MatchDetails};
use crate::ranking::certification::{match_certifications, CertificationMatch};
use crate::ranking::culture::analyze_cultural_fit;
use crate::ranking::education::match_education;
use crate::ranking::experience::{match_experience, ExperienceMatch};
use crate::ranking::fitment::{fitment_profile, FitmentProfile};
use crate::ranking::forecast::forecast_career;
use crate::ranking::outcome::{ensure_finite, Scored};
use crate::ranking::progression::analyze_progression;
use crate::ranking::skills::{match_skills, skill_set};
use crate::reference::ReferenceData;

const MAX_GROWTH_OPPORTUNITIES: usize = 5;
const MAX_CULTURE_SUGGESTIONS: usize = 2;
const MAX_SUGGESTED_ROLES: usize = 5;
const MAX_BEST_ROLES: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores candidates against a job requirement.
///
/// Carried in `AppState` as `Arc<dyn ResumeRanker>`.
pub trait ResumeRanker: Send + Sync {
    /// Full report for one candidate with "today" pinned for open-ended
    /// positions. Never fails: faults produce a neutral report.
    fn rank_at(&self, candidate: &CandidateProfile, job: &JobRequirement, today: NaiveDate)
        -> JobMatch;

    fn rank(&self, candidate: &CandidateProfile, job: &JobRequirement) -> JobMatch {
        self.rank_at(candidate, job, Local::now().date_naive())
    }

    /// Reports for every candidate, best match first. Ties keep input order.
    /// Every candidate is scored against the same "today".
    fn rank_many(&self, candidates: &[CandidateProfile], job: &JobRequirement) -> Vec<JobMatch> {
        let today = Local::now().date_naive();
        let mut matches: Vec<JobMatch> = candidates
            .iter()
            .map(|c| self.rank_at(c, job, today))
            .collect();
        sort_by_match_score(&mut matches);
        matches
    }
}

/// Stable sort, highest `match_score` first.
pub fn sort_by_match_score(matches: &mut [JobMatch]) {
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
}

// ────────────────────────────────────────────────────────────────────────────
// Score aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Everything the aggregation policy reads, flattened out of the component results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub skill_overall: f64,
    pub experience_match: f64,
    pub relevance_match: f64,
    pub relevant_years: f64,
    pub education_matched: bool,
    pub certification_score: f64,
    pub matched_certifications: usize,
    pub cultural_fit: f64,
    pub market_alignment: f64,
    pub upward_mobility: bool,
    pub extra_skills: usize,
    pub gap_count: usize,
    pub frequent_switcher: bool,
    pub mean_proficiency: f64,
}

fn add(score: f64, bonus: f64) -> f64 {
    (score + bonus).min(1.0)
}

fn subtract(score: f64, penalty: f64) -> f64 {
    (score - penalty).max(0.0)
}

/// Weighted component sum followed by the bonus and penalty adjustments, in order.
pub fn match_score(inputs: &ScoreInputs) -> Result<f64, ScoringError> {
    let education_score = if inputs.education_matched { 1.0 } else { 0.5 };

    let mut score = inputs.skill_overall * 0.35
        + inputs.experience_match * 0.15
        + inputs.relevance_match * 0.10
        + education_score * 0.15
        + inputs.certification_score * 0.10
        + inputs.cultural_fit * 0.15;

    if inputs.relevant_years > 0.0 {
        score = add(score, (inputs.relevant_years * 0.02).min(0.1));
    }
    if inputs.matched_certifications > 0 {
        score = add(score, (inputs.matched_certifications as f64 * 0.01).min(0.05));
    }
    if inputs.cultural_fit > 0.7 {
        score = add(score, ((inputs.cultural_fit - 0.7) * 0.1).min(0.05));
    }
    if inputs.market_alignment > 0.7 {
        score = add(score, ((inputs.market_alignment - 0.7) * 0.1).min(0.05));
    }
    if inputs.upward_mobility {
        score = add(score, 0.05);
    }
    if inputs.extra_skills > 0 {
        score = add(score, (inputs.extra_skills as f64 * 0.01).min(0.05));
    }
    if inputs.gap_count > 0 {
        score = subtract(score, (inputs.gap_count as f64 * 0.02).min(0.1));
    }
    if inputs.frequent_switcher {
        score = subtract(score, 0.05);
    }

    ensure_finite("match_score", score.clamp(0.0, 1.0))
}

/// Proficiency, stability and culture, plus market and mobility bonuses.
pub fn overall_fitment(inputs: &ScoreInputs) -> Result<f64, ScoringError> {
    let stability = (1.0 - inputs.gap_count as f64 * 0.15).clamp(0.0, 1.0);
    let mut score =
        inputs.mean_proficiency * 0.4 + stability * 0.3 + inputs.cultural_fit * 0.3;

    if inputs.market_alignment > 0.7 {
        score = add(score, ((inputs.market_alignment - 0.7) * 0.2).min(0.1));
    }
    if inputs.upward_mobility {
        score = add(score, 0.05);
    }

    ensure_finite("overall_fitment_score", score.clamp(0.0, 1.0))
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedRanker
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RuleBasedRanker {
    reference: Arc<ReferenceData>,
}

impl RuleBasedRanker {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Runs every matcher. Sub-matcher faults degrade to defaults and are listed
    /// in `match_details.degraded`; only a fault in the final aggregation is returned.
    pub fn try_rank_at(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        today: NaiveDate,
    ) -> Result<JobMatch, ScoringError> {
        let reference = self.reference.as_ref();
        let required_certs = job.required_certifications();
        let mut degraded = Vec::new();

        let skills = match_skills(&candidate.skills, &job.required_skills, &job.preferred_skills);

        let experience = Scored::resolve(
            "experience",
            match_experience(&candidate.experience, job.experience_years, today),
            ExperienceMatch::default,
        );
        experience.record("experience", &mut degraded);
        let experience = experience.into_value();

        let education = match_education(&candidate.education, &job.education_level);

        let certification = Scored::resolve(
            "certification",
            match_certifications(&candidate.certifications, required_certs, reference),
            || CertificationMatch {
                missing_certifications: required_certs.to_vec(),
                ..CertificationMatch::default()
            },
        );
        certification.record("certification", &mut degraded);
        let certification = certification.into_value();

        let fitment = Scored::resolve(
            "fitment",
            fitment_profile(candidate, reference, today),
            FitmentProfile::default,
        );
        fitment.record("fitment", &mut degraded);
        let fitment = fitment.into_value();

        let culture = analyze_cultural_fit(candidate, job, reference);
        let progression = analyze_progression(&candidate.experience, today);

        let forecast = Scored::resolve(
            "career_forecast",
            forecast_career(candidate, job, reference, today).map(Some),
            || None::<CareerForecast>,
        );
        forecast.record("career_forecast", &mut degraded);
        let career_forecast = forecast.into_value();

        let extra_skills = skill_set(&candidate.skills)
            .len()
            .saturating_sub(skill_set(&job.required_skills).len());

        let inputs = ScoreInputs {
            skill_overall: skills.overall_match,
            experience_match: experience.experience_match,
            relevance_match: experience.relevance_match,
            relevant_years: experience.relevant_years,
            education_matched: education.education_match,
            certification_score: certification.certification_match_score,
            matched_certifications: certification.matching_certifications.len(),
            cultural_fit: culture.cultural_fit_score,
            market_alignment: fitment.market_alignment_score,
            upward_mobility: progression.has_upward_mobility,
            extra_skills,
            gap_count: progression.employment_gaps.len(),
            frequent_switcher: progression.is_frequent_switcher(),
            mean_proficiency: fitment.mean_proficiency(),
        };
        let match_score = match_score(&inputs)?;
        let overall_fitment_score = overall_fitment(&inputs)?;

        let missing_skills: Vec<String> = skills
            .missing_required
            .iter()
            .chain(&skills.missing_preferred)
            .cloned()
            .collect();
        let matching_skills: Vec<String> = skills
            .matching_required
            .iter()
            .chain(&skills.matching_preferred)
            .cloned()
            .collect();

        let mut growth_opportunities = missing_skills.clone();
        growth_opportunities.extend(
            certification
                .missing_certifications
                .iter()
                .map(|cert| format!("Obtain {cert} certification")),
        );
        growth_opportunities.extend(
            culture
                .cultural_fit_details
                .improvement_suggestions
                .iter()
                .take(MAX_CULTURE_SUGGESTIONS)
                .cloned(),
        );
        growth_opportunities.truncate(MAX_GROWTH_OPPORTUNITIES);

        let suggested_roles: Vec<String> = fitment
            .career_paths
            .iter()
            .take(MAX_SUGGESTED_ROLES)
            .map(|path| path.role_title.clone())
            .collect();
        let best_matched_roles = fitment.career_paths.iter().take(MAX_BEST_ROLES).cloned().collect();

        Ok(JobMatch {
            job_title: job.title.clone(),
            match_score,
            matching_skills,
            missing_skills,
            experience_match: experience.experience_match,
            education_match: education.education_match,
            suggested_roles,
            overall_fitment_score,
            skill_fitment: fitment.skill_fitment,
            career_path_suggestions: fitment.career_paths,
            market_alignment_score: fitment.market_alignment_score,
            strength_areas: fitment.strength_areas,
            growth_opportunities,
            best_matched_roles,
            certification_match_score: Some(certification.certification_match_score),
            matching_certifications: Some(certification.matching_certifications.clone()),
            missing_certifications: Some(certification.missing_certifications.clone()),
            cultural_fit_score: Some(culture.cultural_fit_score),
            cultural_fit_details: Some(culture.cultural_fit_details.clone()),
            company_values: Some(culture.company_values.clone()),
            career_progression: Some(progression),
            career_forecast,
            match_details: MatchDetails {
                skill_match: Some(skills),
                experience_match: Some(experience),
                education_match: Some(education),
                certification_match: Some(certification),
                cultural_fit: Some(culture),
                score_weights: job.score_weights.clone(),
                degraded,
                error: None,
            },
        })
    }
}

impl ResumeRanker for RuleBasedRanker {
    fn rank_at(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        today: NaiveDate,
    ) -> JobMatch {
        match self.try_rank_at(candidate, job, today) {
            Ok(result) => {
                debug!(
                    "Ranked candidate for '{}': match_score={:.3}",
                    job.title, result.match_score
                );
                result
            }
            Err(e) => {
                error!("Ranking failed for '{}': {e}", job.title);
                JobMatch::fallback(&job.title, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn ranker() -> RuleBasedRanker {
        RuleBasedRanker::new(Arc::new(ReferenceData::default()))
    }

    fn scenario_candidate() -> CandidateProfile {
        serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "skills": ["Python", "SQL"],
            "experience": [{
                "title": "Data Analyst",
                "company": "Acme",
                "start_date": "2022-01-01",
                "end_date": "2024-01-01",
                "description": ["Built SQL reports for the sales team"],
                "skills_used": ["Python", "SQL"]
            }],
            "education": [{"degree": "Bachelor's Degree", "institution": "State", "graduation_year": 2021}]
        }))
        .unwrap()
    }

    fn scenario_job() -> JobRequirement {
        serde_json::from_value(json!({
            "title": "Backend Engineer",
            "required_skills": ["Python", "Java"],
            "experience_years": 3.0,
            "education_level": "Bachelor's Degree",
            "industry": "Software Development"
        }))
        .unwrap()
    }

    fn rich_candidate() -> CandidateProfile {
        serde_json::from_value(json!({
            "name": "Grace",
            "skills": ["Python", "SQL", "Cloud Computing", "Java", "Git", "Blockchain", "Kafka"],
            "certifications": ["AWS Certified Solutions Architect", "PMP"],
            "experience": [
                {"title": "Junior Developer", "company": "A", "start_date": "2012-01-01", "end_date": "2016-01-01",
                 "description": ["Innovative and collaborative developer building cloud APIs"],
                 "skills_used": ["Python", "Java", "Cloud Computing"]},
                {"title": "Senior Engineer", "company": "B", "start_date": "2016-02-01", "end_date": null,
                 "description": ["Led teamwork across cross-functional security and database projects with integrity"],
                 "skills_used": ["Python", "SQL", "Cloud Computing", "Git"]}
            ],
            "education": [{"degree": "Master's Degree", "institution": "Tech"}]
        }))
        .unwrap()
    }

    fn rich_job() -> JobRequirement {
        serde_json::from_value(json!({
            "title": "Staff Engineer",
            "required_skills": ["Python", "SQL"],
            "preferred_skills": ["Java"],
            "experience_years": 5.0,
            "education_level": "Bachelor's Degree",
            "industry": "Technology",
            "required_certifications": ["AWS Certified"],
            "company_values": ["innovation", "teamwork", "integrity"]
        }))
        .unwrap()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let result = ranker().rank_at(&scenario_candidate(), &scenario_job(), today());
        let details = &result.match_details;

        let skill = details.skill_match.as_ref().unwrap();
        assert_eq!(skill.required_match, 0.5);
        assert!(result.education_match);
        assert!(result.experience_match < 1.0);
        assert!((result.experience_match - 2.0 / 3.0).abs() < 0.01);
        assert_eq!(result.certification_match_score, Some(0.0));
        assert_eq!(result.matching_skills, vec!["Python"]);
        assert_eq!(result.missing_skills, vec!["Java"]);
        assert!(details.degraded.is_empty());
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_growth_opportunities_order() {
        let result = ranker().rank_at(&scenario_candidate(), &scenario_job(), today());
        assert_eq!(result.growth_opportunities[0], "Java");
        // Software Development has no company-values table, so global defaults apply
        assert!(result.growth_opportunities.len() <= 5);
        assert!(result.growth_opportunities[1].starts_with("Highlight experience"));
    }

    #[test]
    fn test_growth_opportunities_truncated_in_order() {
        let job: JobRequirement = serde_json::from_value(json!({
            "title": "Platform Engineer",
            "required_skills": ["Go", "Rust", "Kubernetes", "Terraform", "Kafka", "Scala"],
            "preferred_skills": ["Haskell"],
            "required_certifications": ["CKA"],
            "industry": "Software Development"
        }))
        .unwrap();
        let result = ranker().rank_at(&scenario_candidate(), &job, today());
        assert_eq!(
            result.growth_opportunities,
            vec!["Go", "Rust", "Kubernetes", "Terraform", "Kafka"]
        );
    }

    #[test]
    fn test_growth_opportunities_skills_then_certs_then_culture() {
        let job: JobRequirement = serde_json::from_value(json!({
            "title": "Platform Engineer",
            "required_skills": ["Python", "Go", "Rust"],
            "required_certifications": ["CKA", "AWS Certified"],
            "industry": "Software Development"
        }))
        .unwrap();
        let result = ranker().rank_at(&scenario_candidate(), &job, today());
        assert_eq!(result.growth_opportunities.len(), 5);
        assert_eq!(
            result.growth_opportunities[..4],
            [
                "Go".to_string(),
                "Rust".to_string(),
                "Obtain CKA certification".to_string(),
                "Obtain AWS Certified certification".to_string(),
            ]
        );
        assert!(result.growth_opportunities[4].starts_with("Highlight experience"));
    }

    #[test]
    fn test_rank_is_idempotent() {
        let ranker = ranker();
        let first = ranker.rank_at(&rich_candidate(), &rich_job(), today());
        let second = ranker.rank_at(&rich_candidate(), &rich_job(), today());
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let result = ranker().rank_at(&rich_candidate(), &rich_job(), today());
        for score in [
            result.match_score,
            result.overall_fitment_score,
            result.experience_match,
            result.market_alignment_score,
            result.certification_match_score.unwrap(),
            result.cultural_fit_score.unwrap(),
        ] {
            assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
        }
        assert!(result.match_score > 0.7);
        assert!(result.career_progression.as_ref().unwrap().has_upward_mobility);
        assert_eq!(result.matching_certifications.as_deref(), Some(&["AWS Certified".to_string()][..]));
    }

    #[test]
    fn test_career_outputs_populated() {
        let result = ranker().rank_at(&rich_candidate(), &rich_job(), today());
        assert_eq!(result.career_path_suggestions.len(), 5);
        assert_eq!(result.best_matched_roles.len(), 3);
        assert_eq!(result.suggested_roles.len(), 5);
        assert_eq!(
            result.best_matched_roles[0].role_title,
            result.career_path_suggestions[0].role_title
        );
        assert!(result.strength_areas.len() <= 5);
        let forecast = result.career_forecast.as_ref().unwrap();
        assert_eq!(forecast.forecast_timeline.len(), 3);
    }

    #[test]
    fn test_invalid_experience_years_degrades_component() {
        let mut job = scenario_job();
        job.experience_years = f64::NAN;
        let result = ranker().rank_at(&scenario_candidate(), &job, today());

        assert!(!result.is_fallback());
        assert_eq!(result.experience_match, 0.0);
        let degraded = &result.match_details.degraded;
        assert_eq!(degraded.len(), 1);
        assert_eq!(degraded[0].component, "experience");
    }

    #[test]
    fn test_missing_role_tracks_degrades_forecast() {
        let reference = ReferenceData {
            role_progressions: vec![],
            ..ReferenceData::default()
        };
        let ranker = RuleBasedRanker::new(Arc::new(reference));
        let result = ranker.rank_at(&scenario_candidate(), &scenario_job(), today());
        assert!(result.career_forecast.is_none());
        assert_eq!(result.match_details.degraded[0].component, "career_forecast");
    }

    #[test]
    fn test_non_finite_score_is_rejected() {
        let inputs = ScoreInputs {
            skill_overall: f64::NAN,
            ..ScoreInputs::default()
        };
        assert_eq!(
            match_score(&inputs),
            Err(ScoringError::NonFinite("match_score"))
        );
    }

    #[test]
    fn test_fallback_report_is_neutral() {
        let result = JobMatch::fallback("Engineer", ScoringError::NonFinite("match_score").to_string());
        assert_eq!(result.match_score, 0.5);
        assert!(result.is_fallback());
        assert_eq!(
            result.match_details.error.as_deref(),
            Some("Non-finite score in match_score")
        );
    }

    #[test]
    fn test_bonuses_never_push_past_one() {
        let inputs = ScoreInputs {
            skill_overall: 1.0,
            experience_match: 1.0,
            relevance_match: 1.0,
            relevant_years: 20.0,
            education_matched: true,
            certification_score: 1.0,
            matched_certifications: 5,
            cultural_fit: 1.0,
            market_alignment: 1.0,
            upward_mobility: true,
            extra_skills: 10,
            mean_proficiency: 1.0,
            ..ScoreInputs::default()
        };
        assert_eq!(match_score(&inputs).unwrap(), 1.0);
        assert_eq!(overall_fitment(&inputs).unwrap(), 1.0);
    }

    #[test]
    fn test_penalties_applied() {
        let base = ScoreInputs {
            skill_overall: 0.5,
            education_matched: true,
            ..ScoreInputs::default()
        };
        let penalised = ScoreInputs {
            gap_count: 10,
            frequent_switcher: true,
            ..base
        };
        let expected = match_score(&base).unwrap() - 0.1 - 0.05;
        assert!((match_score(&penalised).unwrap() - expected).abs() < 1e-9);
        // stability floors at zero with many gaps
        assert!((overall_fitment(&penalised).unwrap() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_many_sorts_descending_and_keeps_ties_in_order() {
        let ranker = ranker();
        let job = rich_job();
        let weak: CandidateProfile = serde_json::from_value(json!({"name": "Weak"})).unwrap();
        let candidates = vec![weak.clone(), rich_candidate(), weak];
        let results = ranker.rank_many(&candidates, &job);

        assert_eq!(results.len(), 3);
        assert!(results.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        assert_eq!(results[1].match_score, results[2].match_score);
    }

    struct DateRecorder(std::sync::Mutex<Vec<NaiveDate>>);

    impl ResumeRanker for DateRecorder {
        fn rank_at(
            &self,
            _candidate: &CandidateProfile,
            job: &JobRequirement,
            today: NaiveDate,
        ) -> JobMatch {
            self.0.lock().unwrap().push(today);
            JobMatch::fallback(&job.title, "recorded")
        }
    }

    #[test]
    fn test_rank_many_uses_one_date_for_every_candidate() {
        let recorder = DateRecorder(std::sync::Mutex::new(Vec::new()));
        let weak: CandidateProfile = serde_json::from_value(json!({"name": "Weak"})).unwrap();
        recorder.rank_many(&[weak.clone(), weak.clone(), weak], &rich_job());

        let dates = recorder.0.lock().unwrap();
        assert_eq!(dates.len(), 3);
        assert!(dates.iter().all(|d| *d == dates[0]));
    }

    #[test]
    fn test_score_weights_echoed() {
        let mut job = scenario_job();
        job.score_weights = serde_json::from_value(json!({"skill": 0.5, "experience": 0.3, "tech_relevance": 0.2})).unwrap();
        let result = ranker().rank_at(&scenario_candidate(), &job, today());
        assert_eq!(result.match_details.score_weights.as_ref().map(|w| w.skill), Some(0.5));
    }
}
