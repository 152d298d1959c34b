//! Experience matching: total years against the requirement, plus a keyword
//! relevance score over titles and descriptions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;
use crate::models::candidate::Experience;

/// Title keywords and their weight.
const TITLE_KEYWORDS: &[(&str, f64)] = &[
    ("engineer", 0.3),
    ("developer", 0.3),
    ("analyst", 0.2),
    ("manager", 0.2),
    ("lead", 0.2),
    ("architect", 0.3),
    ("specialist", 0.2),
];

/// Technology terms credited when they appear in a description.
const DESCRIPTION_TERMS: &[&str] = &[
    "python", "java", "javascript", "sql", "aws", "cloud", "database", "api", "web", "mobile",
    "software", "system", "network", "security",
];
const DESCRIPTION_TERM_WEIGHT: f64 = 0.1;

/// Industry alignment is not modelled beyond a moderate constant.
const INDUSTRY_MATCH: f64 = 0.7;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMatch {
    pub experience_match: f64,
    pub relevance_match: f64,
    pub industry_match: f64,
    pub total_years: f64,
    pub relevant_years: f64,
}

/// Keyword relevance of one position: `min(1, (title + description) / 2)`.
pub fn position_relevance(exp: &Experience) -> f64 {
    let title = exp.title.to_lowercase();
    let description = exp.description_text().to_lowercase();

    let title_score: f64 = TITLE_KEYWORDS
        .iter()
        .filter(|(kw, _)| title.contains(kw))
        .map(|(_, weight)| weight)
        .sum();

    let description_score = DESCRIPTION_TERMS
        .iter()
        .filter(|term| description.contains(*term))
        .count() as f64
        * DESCRIPTION_TERM_WEIGHT;

    ((title_score + description_score) / 2.0).min(1.0)
}

/// Ratio of actual to required years. Under target scales linearly; over target
/// loses 0.05 per extra year, at most 0.2.
fn years_ratio(total_years: f64, required_years: f64) -> f64 {
    if required_years <= 0.0 {
        1.0
    } else if total_years < required_years {
        (total_years / required_years).min(1.0)
    } else {
        1.0 - ((total_years - required_years) * 0.05).min(0.2)
    }
}

pub fn match_experience(
    experiences: &[Experience],
    required_years: f64,
    today: NaiveDate,
) -> Result<ExperienceMatch, ScoringError> {
    if !required_years.is_finite() {
        return Err(ScoringError::InvalidInput {
            field: "experience_years",
            reason: format!("expected a finite number, got {required_years}"),
        });
    }

    if experiences.is_empty() {
        return Ok(ExperienceMatch::default());
    }

    let total_years: f64 = experiences.iter().map(|e| e.duration_years(today)).sum();
    let experience_match = years_ratio(total_years, required_years);

    let relevance_match = experiences.iter().map(position_relevance).sum::<f64>()
        / experiences.len() as f64;

    Ok(ExperienceMatch {
        experience_match,
        relevance_match,
        industry_match: INDUSTRY_MATCH,
        total_years,
        relevant_years: total_years * relevance_match,
    })
}
