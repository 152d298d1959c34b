//! How well the resume narrative reflects a set of company values.
//!
//! Per value: a direct mention of the value scores 0.8, and related lexicon
//! keywords add up to 0.2 in proportion to how many of them appear. The
//! overall score averages over every requested value, so unmatched values pull
//! it down.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateProfile;
use crate::models::job::JobRequirement;
use crate::reference::ReferenceData;

const DIRECT_MATCH_SCORE: f64 = 0.8;
const KEYWORD_SCORE_CAP: f64 = 0.2;
const HIGH_FIT: f64 = 0.7;
const MODERATE_FIT: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitBadge {
    #[serde(rename = "High Fit")]
    High,
    #[serde(rename = "Moderate Fit")]
    Moderate,
    #[serde(rename = "Low Fit")]
    Low,
}

impl FitBadge {
    pub fn for_score(score: f64) -> Self {
        if score >= HIGH_FIT {
            FitBadge::High
        } else if score >= MODERATE_FIT {
            FitBadge::Moderate
        } else {
            FitBadge::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalFitDetails {
    pub matched_values: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub fit_badge: FitBadge,
    pub score_explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalFit {
    pub cultural_fit_score: f64,
    pub cultural_fit_details: CulturalFitDetails,
    pub company_values: Vec<String>,
}

/// Experience descriptions followed by skills, normalised for matching.
pub fn resume_text(candidate: &CandidateProfile) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for exp in &candidate.experience {
        parts.extend(exp.description.iter().map(String::as_str));
    }
    parts.extend(candidate.skills.iter().map(String::as_str));
    normalize_text(&parts.join(" "))
}

/// Lowercases, turns punctuation (other than `-`, `'` and `/`) into spaces and
/// collapses whitespace.
pub fn normalize_text(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '\'' | '/') {
                c
            } else {
                ' '
            }
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Values to assess: explicit company values, else the named company's values,
/// else the industry default, else global default.
pub fn resolve_values(job: &JobRequirement, reference: &ReferenceData) -> Vec<String> {
    if let Some(values) = job.explicit_values() {
        return values.to_vec();
    }
    match job.company.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(company) => reference.values_for_company(&job.industry, company).to_vec(),
        None => reference.values_for_industry(&job.industry).to_vec(),
    }
}

pub fn analyze_cultural_fit(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    reference: &ReferenceData,
) -> CulturalFit {
    let values = resolve_values(job, reference);
    let text = resume_text(candidate);
    assess_values(&text, &values, reference)
}

/// Scores `text` against `values`. `text` must already be normalised.
pub fn assess_values(text: &str, values: &[String], reference: &ReferenceData) -> CulturalFit {
    if values.is_empty() {
        return CulturalFit {
            cultural_fit_score: 0.0,
            cultural_fit_details: CulturalFitDetails {
                matched_values: vec![],
                matched_keywords: vec![],
                improvement_suggestions: vec![
                    "No company values provided for cultural fit assessment".to_string(),
                ],
                fit_badge: FitBadge::Low,
                score_explanation: "No company values provided".to_string(),
            },
            company_values: vec![],
        };
    }

    let mut matched_values: Vec<String> = Vec::new();
    let mut matched_keywords: Vec<String> = Vec::new();
    let mut total = 0.0;

    for value in values {
        let value_lower = value.to_lowercase();
        let own_keyword = [value_lower.clone()];
        let related: &[String] = reference
            .keywords_for_value(&value_lower)
            .unwrap_or(&own_keyword);

        let mut value_score = 0.0;
        if contains_term(text, &value_lower) {
            value_score += DIRECT_MATCH_SCORE;
            matched_values.push(value.clone());
        }

        let hits: Vec<&String> = related
            .iter()
            .filter(|kw| contains_term(text, kw))
            .collect();
        if !hits.is_empty() {
            value_score +=
                (hits.len() as f64 / related.len() as f64 * KEYWORD_SCORE_CAP).min(KEYWORD_SCORE_CAP);
            matched_keywords.extend(hits.into_iter().cloned());
        }

        total += value_score;
    }

    let score = total / values.len() as f64;

    let improvement_suggestions: Vec<String> = values
        .iter()
        .filter(|value| !matched_values.contains(value))
        .filter_map(|value| {
            let keywords = reference.keywords_for_value(&value.to_lowercase())?;
            let top: Vec<&str> = keywords.iter().take(3).map(String::as_str).collect();
            Some(format!(
                "Highlight experience demonstrating '{value}' (keywords: {})",
                top.join(", ")
            ))
        })
        .collect();

    let matched_values = dedup(matched_values);
    let matched_keywords = dedup(matched_keywords);
    let score_explanation = explain(score, &matched_values, &improvement_suggestions);

    CulturalFit {
        cultural_fit_score: score,
        cultural_fit_details: CulturalFitDetails {
            matched_values,
            matched_keywords,
            improvement_suggestions,
            fit_badge: FitBadge::for_score(score),
            score_explanation,
        },
        company_values: values.to_vec(),
    }
}

/// `term` normalised like the resume text, then searched in `text`. A term that
/// normalises to nothing never matches.
fn contains_term(text: &str, term: &str) -> bool {
    let term = normalize_text(term);
    !term.is_empty() && text.contains(&term)
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

fn explain(score: f64, matched_values: &[String], suggestions: &[String]) -> String {
    let mut parts = Vec::new();
    parts.push(
        if score == 0.0 {
            "No cultural values matched in the resume"
        } else if score < MODERATE_FIT {
            "Limited alignment with company values"
        } else if score < HIGH_FIT {
            "Moderate alignment with company values"
        } else {
            "Strong alignment with company values"
        }
        .to_string(),
    );
    if !matched_values.is_empty() {
        parts.push(format!("Matched values: {}", matched_values.join(", ")));
    }
    if !suggestions.is_empty() {
        let top: Vec<&str> = suggestions.iter().take(2).map(String::as_str).collect();
        parts.push(format!("Areas for improvement: {}", top.join("; ")));
    }
    parts.join(" | ")
}
