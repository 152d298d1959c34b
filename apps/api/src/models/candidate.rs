use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported skill level. Carried through for callers; scoring derives
/// proficiency from years of use instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillWithSeniority {
    pub name: String,
    #[serde(default, alias = "level")]
    pub seniority: SkillLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub field_of_study: Option<String>,
}

/// A single position in the candidate's employment history.
///
/// `end_date = None` means the position is ongoing. A missing `start_date`
/// is treated as "today", which yields a near-zero duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub skills_used: Vec<String>,
}

impl Experience {
    pub fn start_or(&self, today: NaiveDate) -> NaiveDate {
        self.start_date.unwrap_or(today)
    }

    pub fn end_or(&self, today: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(today)
    }

    /// Duration in years (`days / 365.25`), never negative.
    pub fn duration_years(&self, today: NaiveDate) -> f64 {
        let days = (self.end_or(today) - self.start_or(today)).num_days();
        (days as f64 / 365.25).max(0.0)
    }

    pub fn description_text(&self) -> String {
        self.description.join(" ")
    }
}

/// Candidate profile handed over by the extraction collaborators.
/// Name and contact fields are never read by scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub skills_with_seniority: Vec<SkillWithSeniority>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
}

impl CandidateProfile {
    /// Sum of all position durations, in years.
    pub fn total_experience_years(&self, today: NaiveDate) -> f64 {
        self.experience
            .iter()
            .map(|exp| exp.duration_years(today))
            .sum()
    }

    /// The position with the latest start date (missing start counts as today).
    pub fn most_recent_experience(&self, today: NaiveDate) -> Option<&Experience> {
        // max_by_key keeps the last maximum; reverse so the first listed wins ties
        self.experience
            .iter()
            .rev()
            .max_by_key(|exp| exp.start_or(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn position(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Experience {
        Experience {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: start,
            end_date: end,
            description: vec![],
            skills_used: vec![],
        }
    }

    #[test]
    fn test_duration_two_years() {
        let exp = position(Some(date(2020, 1, 1)), Some(date(2022, 1, 1)));
        let years = exp.duration_years(date(2024, 1, 1));
        assert!((years - 731.0 / 365.25).abs() < 1e-9);
    }

    #[test]
    fn test_ongoing_position_runs_until_today() {
        let exp = position(Some(date(2023, 1, 1)), None);
        let years = exp.duration_years(date(2024, 1, 1));
        assert!((years - 365.0 / 365.25).abs() < 1e-9);
    }

    #[test]
    fn test_missing_start_is_zero_duration() {
        let exp = position(None, None);
        assert_eq!(exp.duration_years(date(2024, 1, 1)), 0.0);
    }

    #[test]
    fn test_inverted_dates_clamp_to_zero() {
        let exp = position(Some(date(2022, 1, 1)), Some(date(2021, 1, 1)));
        assert_eq!(exp.duration_years(date(2024, 1, 1)), 0.0);
    }

    #[test]
    fn test_profile_deserializes_with_defaults() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "skills": ["Rust"],
            "experience": [
                {"title": "Engineer", "company": "Acme", "start_date": "2020-01-01", "skills_used": ["Rust"]}
            ],
            "education": [{"degree": "Bachelor's Degree", "institution": "MIT", "graduation_year": 2019}],
            "skills_with_seniority": [{"name": "Rust", "seniority": "Expert"}]
        }"#;
        let profile: CandidateProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.skills, vec!["Rust"]);
        assert!(profile.certifications.is_empty());
        assert!(profile.experience[0].end_date.is_none());
        assert_eq!(profile.skills_with_seniority[0].seniority, SkillLevel::Expert);
    }

    #[test]
    fn test_most_recent_experience_by_start_date() {
        let mut older = position(Some(date(2015, 1, 1)), Some(date(2018, 1, 1)));
        older.title = "Junior Developer".to_string();
        let mut newer = position(Some(date(2018, 6, 1)), None);
        newer.title = "Senior Developer".to_string();
        let profile = CandidateProfile {
            name: String::new(),
            email: String::new(),
            phone: None,
            location: None,
            summary: None,
            skills: vec![],
            skills_with_seniority: vec![],
            experience: vec![older, newer],
            education: vec![],
            certifications: vec![],
            languages: vec![],
            github: None,
            linkedin: None,
            portfolio: None,
        };
        let recent = profile.most_recent_experience(date(2024, 1, 1)).unwrap();
        assert_eq!(recent.title, "Senior Developer");
    }
}
