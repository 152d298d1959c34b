//! Career progression: promotion trajectory, employment gaps and job-switch
//! frequency over the candidate's history, walked oldest to newest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::candidate::Experience;
use crate::models::report::SeniorityTier;

const EXECUTIVE_KEYWORDS: &[&str] = &[
    "director", "chief", "vp", "president", "executive", "ceo", "cto", "cfo", "coo",
];
const MID_KEYWORDS: &[&str] = &["senior", "lead", "manager", "supervisor", "head", "principal"];
const ENTRY_KEYWORDS: &[&str] = &["intern", "trainee", "junior", "assistant", "associate", "entry"];

/// Gaps strictly longer than this many days are reported.
const GAP_THRESHOLD_DAYS: i64 = 180;
const SIGNIFICANT_GAP_MONTHS: i64 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyTag {
    #[serde(rename = "Frequent Switcher")]
    Frequent,
    #[serde(rename = "Moderate Switcher")]
    Moderate,
    Stable,
}

impl FrequencyTag {
    pub fn for_rate(switches_per_year: f64) -> Self {
        if switches_per_year > 0.5 {
            FrequencyTag::Frequent
        } else if switches_per_year > 0.3 {
            FrequencyTag::Moderate
        } else {
            FrequencyTag::Stable
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMove {
    pub from_title: String,
    pub to_title: String,
    pub from_company: String,
    pub to_company: String,
    pub from_level: SeniorityTier,
    pub to_level: SeniorityTier,
    pub is_promotion: bool,
    pub is_company_change: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentGap {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_months: i64,
    pub previous_position: String,
    pub next_position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchFrequency {
    pub total_switches: usize,
    pub years_of_experience: f64,
    pub switches_per_year: f64,
    pub frequency_tag: FrequencyTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProgression {
    pub promotion_trajectory: Vec<CareerMove>,
    pub job_switch_frequency: SwitchFrequency,
    pub employment_gaps: Vec<EmploymentGap>,
    pub has_upward_mobility: bool,
    pub has_significant_gaps: bool,
}

impl CareerProgression {
    pub fn is_frequent_switcher(&self) -> bool {
        self.job_switch_frequency.frequency_tag == FrequencyTag::Frequent
    }
}

/// Seniority tier from title words. Executive keywords win over mid, mid over entry.
///
/// Matching is per word, so "Coordinator" is not read as "coo".
pub fn classify_title(title: &str) -> SeniorityTier {
    let lower = title.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let has_any = |keywords: &[&str]| words.iter().any(|w| keywords.contains(w));

    if has_any(EXECUTIVE_KEYWORDS) {
        SeniorityTier::Executive
    } else if has_any(MID_KEYWORDS) {
        SeniorityTier::Mid
    } else if has_any(ENTRY_KEYWORDS) {
        SeniorityTier::Entry
    } else {
        SeniorityTier::Unknown
    }
}

/// True when `to` ranks strictly above `from`. Unknown never counts.
pub fn is_promotion(from: SeniorityTier, to: SeniorityTier) -> bool {
    from != SeniorityTier::Unknown && to != SeniorityTier::Unknown && to.ordinal() > from.ordinal()
}

fn is_named(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "Unknown"
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn analyze_progression(experiences: &[Experience], today: NaiveDate) -> CareerProgression {
    let mut chronological: Vec<&Experience> = experiences.iter().collect();
    chronological.sort_by_key(|exp| exp.start_or(today));

    let mut promotion_trajectory = Vec::new();
    let mut employment_gaps = Vec::new();
    let mut job_changes = 0usize;

    for pair in chronological.windows(2) {
        let (earlier, later) = (pair[0], pair[1]);
        let from_level = classify_title(&earlier.title);
        let to_level = classify_title(&later.title);

        let named = is_named(&earlier.title)
            && is_named(&later.title)
            && is_named(&earlier.company)
            && is_named(&later.company);
        if named {
            job_changes += 1;
            if from_level != SeniorityTier::Unknown && to_level != SeniorityTier::Unknown {
                promotion_trajectory.push(CareerMove {
                    from_title: earlier.title.clone(),
                    to_title: later.title.clone(),
                    from_company: earlier.company.clone(),
                    to_company: later.company.clone(),
                    from_level,
                    to_level,
                    is_promotion: is_promotion(from_level, to_level),
                    is_company_change: earlier.company != later.company,
                });
            }
        }

        let gap_start = earlier.end_or(today);
        let gap_end = later.start_or(today);
        let gap_days = (gap_end - gap_start).num_days();
        if gap_days > GAP_THRESHOLD_DAYS {
            employment_gaps.push(EmploymentGap {
                start_date: gap_start,
                end_date: gap_end,
                duration_months: (gap_days as f64 / 30.0).round() as i64,
                previous_position: earlier.title.clone(),
                next_position: later.title.clone(),
            });
        }
    }

    let total_years: f64 = experiences.iter().map(|e| e.duration_years(today)).sum();
    let switches_per_year = round_to(job_changes as f64 / total_years.max(1.0), 2);

    CareerProgression {
        has_upward_mobility: promotion_trajectory.iter().any(|m| m.is_promotion),
        has_significant_gaps: employment_gaps
            .iter()
            .any(|gap| gap.duration_months >= SIGNIFICANT_GAP_MONTHS),
        promotion_trajectory,
        job_switch_frequency: SwitchFrequency {
            total_switches: job_changes,
            years_of_experience: round_to(total_years, 1),
            switches_per_year,
            frequency_tag: FrequencyTag::for_rate(switches_per_year),
        },
        employment_gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 1)
    }

    fn job(title: &str, company: &str, start: NaiveDate, end: NaiveDate) -> Experience {
        Experience {
            title: title.to_string(),
            company: company.to_string(),
            start_date: Some(start),
            end_date: Some(end),
            description: vec![],
            skills_used: vec![],
        }
    }

    #[test]
    fn test_classify_title_priority() {
        assert_eq!(classify_title("Junior Developer"), SeniorityTier::Entry);
        assert_eq!(classify_title("Senior Engineer"), SeniorityTier::Mid);
        assert_eq!(classify_title("Senior Director of Engineering"), SeniorityTier::Executive);
        assert_eq!(classify_title("VP, Product"), SeniorityTier::Executive);
        assert_eq!(classify_title("Software Engineer"), SeniorityTier::Unknown);
    }

    #[test]
    fn test_classify_title_matches_whole_words() {
        assert_eq!(classify_title("Project Coordinator"), SeniorityTier::Unknown);
        assert_eq!(classify_title("Internal Tools Developer"), SeniorityTier::Unknown);
    }

    #[test]
    fn test_promotion_direction() {
        assert!(is_promotion(SeniorityTier::Entry, SeniorityTier::Mid));
        assert!(!is_promotion(SeniorityTier::Mid, SeniorityTier::Entry));
        assert!(!is_promotion(SeniorityTier::Mid, SeniorityTier::Mid));
        assert!(!is_promotion(SeniorityTier::Unknown, SeniorityTier::Executive));
    }

    #[test]
    fn test_gap_over_180_days_detected() {
        // 2021-01-01 → 2021-07-20 is 200 days
        let history = vec![
            job("Junior Analyst", "A", date(2019, 1, 1), date(2021, 1, 1)),
            job("Senior Analyst", "B", date(2021, 7, 20), date(2023, 1, 1)),
        ];
        let result = analyze_progression(&history, today());
        assert_eq!(result.employment_gaps.len(), 1);
        let gap = &result.employment_gaps[0];
        assert_eq!(gap.duration_months, 7);
        assert_eq!(gap.previous_position, "Junior Analyst");
        assert_eq!(gap.next_position, "Senior Analyst");
        assert!(result.has_significant_gaps);
    }

    #[test]
    fn test_gap_of_100_days_not_detected() {
        let history = vec![
            job("Junior Analyst", "A", date(2019, 1, 1), date(2021, 1, 1)),
            job("Senior Analyst", "B", date(2021, 4, 11), date(2023, 1, 1)),
        ];
        let result = analyze_progression(&history, today());
        assert!(result.employment_gaps.is_empty());
        assert!(!result.has_significant_gaps);
    }

    #[test]
    fn test_trajectory_walks_oldest_to_newest_regardless_of_input_order() {
        let history = vec![
            job("Engineering Manager", "B", date(2020, 1, 1), date(2024, 1, 1)),
            job("Junior Developer", "A", date(2016, 1, 1), date(2020, 1, 1)),
        ];
        let result = analyze_progression(&history, today());
        assert_eq!(result.promotion_trajectory.len(), 1);
        let step = &result.promotion_trajectory[0];
        assert_eq!(step.from_level, SeniorityTier::Entry);
        assert_eq!(step.to_level, SeniorityTier::Mid);
        assert!(step.is_promotion);
        assert!(step.is_company_change);
        assert!(result.has_upward_mobility);
    }

    #[test]
    fn test_demotion_is_not_upward_mobility() {
        let history = vec![
            job("Senior Engineer", "A", date(2016, 1, 1), date(2020, 1, 1)),
            job("Junior Engineer", "A", date(2020, 1, 1), date(2024, 1, 1)),
        ];
        let result = analyze_progression(&history, today());
        assert!(!result.promotion_trajectory[0].is_promotion);
        assert!(!result.promotion_trajectory[0].is_company_change);
        assert!(!result.has_upward_mobility);
    }

    #[test]
    fn test_unknown_levels_count_as_switch_but_not_trajectory() {
        let history = vec![
            job("Engineer", "A", date(2020, 1, 1), date(2021, 1, 1)),
            job("Developer", "B", date(2021, 1, 1), date(2022, 1, 1)),
        ];
        let result = analyze_progression(&history, today());
        assert!(result.promotion_trajectory.is_empty());
        assert_eq!(result.job_switch_frequency.total_switches, 1);
    }

    #[test]
    fn test_frequent_switcher_tag() {
        // 3 switches over ~3 years → 1.0 per year
        let history = vec![
            job("Junior Dev", "A", date(2020, 1, 1), date(2020, 12, 31)),
            job("Junior Dev", "B", date(2021, 1, 1), date(2021, 12, 31)),
            job("Senior Dev", "C", date(2022, 1, 1), date(2022, 12, 31)),
            job("Lead Dev", "D", date(2023, 1, 1), date(2023, 3, 1)),
        ];
        let result = analyze_progression(&history, today());
        assert_eq!(result.job_switch_frequency.total_switches, 3);
        assert_eq!(result.job_switch_frequency.frequency_tag, FrequencyTag::Frequent);
        assert!(result.is_frequent_switcher());
    }

    #[test]
    fn test_stable_with_single_position() {
        let history = vec![job("Engineer", "A", date(2014, 1, 1), date(2024, 1, 1))];
        let result = analyze_progression(&history, today());
        assert_eq!(result.job_switch_frequency.total_switches, 0);
        assert_eq!(result.job_switch_frequency.frequency_tag, FrequencyTag::Stable);
        assert_eq!(result.job_switch_frequency.years_of_experience, 10.0);
    }

    #[test]
    fn test_empty_history() {
        let result = analyze_progression(&[], today());
        assert!(result.promotion_trajectory.is_empty());
        assert!(result.employment_gaps.is_empty());
        assert_eq!(result.job_switch_frequency.switches_per_year, 0.0);
    }
}
