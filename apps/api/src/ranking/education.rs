use serde::{Deserialize, Serialize};

use crate::models::candidate::Education;

/// Canonical degree names and their ordinal level.
const DEGREE_LEVELS: &[(&str, u8)] = &[
    ("High School", 1),
    ("Associate's Degree", 2),
    ("Bachelor's Degree", 3),
    ("Master's Degree", 4),
    ("Doctorate", 5),
];

/// Common spellings, matched as lowercase substrings. Checked highest level first.
const DEGREE_ALIASES: &[(&str, u8)] = &[
    ("doctor", 5),
    ("phd", 5),
    ("ph.d", 5),
    ("master", 4),
    ("mba", 4),
    ("msc", 4),
    ("bachelor", 3),
    ("bsc", 3),
    ("b.s.", 3),
    ("b.a.", 3),
    ("associate", 2),
    ("high school", 1),
    ("diploma", 1),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationMatch {
    pub education_match: bool,
    pub highest_degree: String,
    pub institution: String,
    pub graduation_year: Option<i32>,
}

impl Default for EducationMatch {
    fn default() -> Self {
        Self {
            education_match: false,
            highest_degree: "Unknown".to_string(),
            institution: "Unknown".to_string(),
            graduation_year: None,
        }
    }
}

/// Ordinal level of a degree string: High School 1 … Doctorate 5, unrecognized 0.
pub fn degree_level(degree: &str) -> u8 {
    let trimmed = degree.trim();
    if let Some((_, level)) = DEGREE_LEVELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return *level;
    }

    let lower = trimmed.to_lowercase();
    DEGREE_ALIASES
        .iter()
        .find(|(alias, _)| lower.contains(alias))
        .map(|(_, level)| *level)
        .unwrap_or(0)
}

/// Compares the candidate's highest degree with the required level.
/// No education at all never matches.
pub fn match_education(education: &[Education], required_level: &str) -> EducationMatch {
    let required = degree_level(required_level);

    // First entry wins ties
    let highest = education.iter().fold(None::<&Education>, |best, edu| match best {
        Some(current) if degree_level(&current.degree) >= degree_level(&edu.degree) => Some(current),
        _ => Some(edu),
    });

    match highest {
        None => EducationMatch::default(),
        Some(edu) => EducationMatch {
            education_match: degree_level(&edu.degree) >= required,
            highest_degree: edu.degree.clone(),
            institution: edu.institution.clone(),
            graduation_year: edu.graduation_year,
        },
    }
}
