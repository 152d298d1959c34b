//! Reference Data — the static lookup tables shared read-only by every scoring call.
//!
//! Built once at startup (built-in tables or a JSON override, see
//! `Config::reference_data_path`) and injected into the engine behind an `Arc`.
//! Nothing mutates it afterwards.

pub mod tables;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::report::{SalaryRange, SeniorityTier};

/// The track name used when an industry has no entry of its own.
pub const DEFAULT_INDUSTRY: &str = "Default";

// ────────────────────────────────────────────────────────────────────────────
// Table shapes
// ────────────────────────────────────────────────────────────────────────────

/// One value per seniority tier (Entry / Mid / Executive).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierTable<T> {
    #[serde(rename = "Entry-level")]
    pub entry: T,
    #[serde(rename = "Mid-level")]
    pub mid: T,
    #[serde(rename = "Executive")]
    pub executive: T,
}

impl<T> TierTable<T> {
    pub fn get(&self, tier: SeniorityTier) -> Option<&T> {
        match tier {
            SeniorityTier::Entry => Some(&self.entry),
            SeniorityTier::Mid => Some(&self.mid),
            SeniorityTier::Executive => Some(&self.executive),
            SeniorityTier::Unknown => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        [&self.entry, &self.mid, &self.executive].into_iter()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCategory {
    pub name: String,
    pub roles: Vec<String>,
    pub core_skills: Vec<String>,
    pub market_demand: f64,
    pub growth_potential: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketTrends {
    pub high_demand_skills: HashMap<String, f64>,
    pub emerging_skills: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryValues {
    pub industry: String,
    #[serde(default)]
    pub companies: Vec<(String, Vec<String>)>,
    pub default_values: Vec<String>,
}

/// A per-industry role ladder, three representative roles per tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleTrack {
    pub industry: String,
    pub tiers: TierTable<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustrySkills {
    pub industry: String,
    pub tiers: TierTable<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    pub skills: Vec<String>,
    pub resources: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// ReferenceData
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub certifications: HashMap<String, f64>,
    pub role_categories: Vec<RoleCategory>,
    pub market_trends: MarketTrends,
    pub company_values: Vec<IndustryValues>,
    pub default_company_values: Vec<String>,
    pub cultural_keywords: HashMap<String, Vec<String>>,
    pub role_progressions: Vec<RoleTrack>,
    pub industry_skills: Vec<IndustrySkills>,
    pub learning_resources: Vec<LearningPath>,
    pub salary_bands: TierTable<SalaryRange>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ReferenceData {
    fn default() -> Self {
        let certifications = tables::CERTIFICATIONS
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect();

        let role_categories = tables::ROLE_CATEGORIES
            .iter()
            .map(|(name, roles, core, demand, growth)| RoleCategory {
                name: name.to_string(),
                roles: owned(roles),
                core_skills: owned(core),
                market_demand: *demand,
                growth_potential: *growth,
            })
            .collect();

        let market_trends = MarketTrends {
            high_demand_skills: tables::HIGH_DEMAND_SKILLS
                .iter()
                .map(|(s, w)| (s.to_string(), *w))
                .collect(),
            emerging_skills: tables::EMERGING_SKILLS
                .iter()
                .map(|(s, w)| (s.to_string(), *w))
                .collect(),
        };

        let company_values = tables::COMPANY_VALUES
            .iter()
            .map(|(industry, companies, defaults)| IndustryValues {
                industry: industry.to_string(),
                companies: companies
                    .iter()
                    .map(|(company, values)| (company.to_string(), owned(values)))
                    .collect(),
                default_values: owned(defaults),
            })
            .collect();

        let cultural_keywords = tables::CULTURAL_KEYWORDS
            .iter()
            .map(|(value, keywords)| (value.to_string(), owned(keywords)))
            .collect();

        let role_progressions = tables::ROLE_PROGRESSIONS
            .iter()
            .map(|(industry, entry, mid, exec)| RoleTrack {
                industry: industry.to_string(),
                tiers: TierTable {
                    entry: owned(entry),
                    mid: owned(mid),
                    executive: owned(exec),
                },
            })
            .collect();

        let industry_skills = tables::INDUSTRY_SKILLS
            .iter()
            .map(|(industry, entry, mid, exec)| IndustrySkills {
                industry: industry.to_string(),
                tiers: TierTable {
                    entry: owned(entry),
                    mid: owned(mid),
                    executive: owned(exec),
                },
            })
            .collect();

        let learning_resources = tables::LEARNING_RESOURCES
            .iter()
            .map(|(skills, resources)| LearningPath {
                skills: owned(skills),
                resources: owned(resources),
            })
            .collect();

        let [entry, mid, exec] = tables::SALARY_BANDS;
        let salary_bands = TierTable {
            entry: SalaryRange { min: entry.0, max: entry.1 },
            mid: SalaryRange { min: mid.0, max: mid.1 },
            executive: SalaryRange { min: exec.0, max: exec.1 },
        };

        Self {
            certifications,
            role_categories,
            market_trends,
            company_values,
            default_company_values: owned(tables::DEFAULT_COMPANY_VALUES),
            cultural_keywords,
            role_progressions,
            industry_skills,
            learning_resources,
            salary_bands,
        }
    }
}

impl ReferenceData {
    /// Loads reference tables from a JSON document. Tables missing from the
    /// document keep their built-in contents.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference data from {}", path.display()))?;
        let data: ReferenceData = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid reference data in {}", path.display()))?;
        info!(
            "Loaded reference data from {} ({} certifications, {} role categories)",
            path.display(),
            data.certifications.len(),
            data.role_categories.len()
        );
        Ok(data)
    }

    /// Weight of a recognized certification. Exact name first, then case-insensitive.
    pub fn certification_weight(&self, name: &str) -> Option<f64> {
        self.certifications.get(name).copied().or_else(|| {
            self.certifications
                .iter()
                .find(|(known, _)| known.eq_ignore_ascii_case(name))
                .map(|(_, weight)| *weight)
        })
    }

    /// Market relevance of a skill: high-demand table, then emerging, else 0.5.
    pub fn skill_relevance(&self, skill: &str) -> f64 {
        self.market_trends
            .high_demand_skills
            .get(skill)
            .or_else(|| self.market_trends.emerging_skills.get(skill))
            .copied()
            .unwrap_or(0.5)
    }

    /// Default company values for an industry, falling back to the global list.
    pub fn values_for_industry(&self, industry: &str) -> &[String] {
        self.company_values
            .iter()
            .find(|iv| iv.industry == industry)
            .map(|iv| iv.default_values.as_slice())
            .unwrap_or(&self.default_company_values)
    }

    /// Values published by a named company in `industry`, falling back to
    /// [`Self::values_for_industry`] when the company is unknown.
    pub fn values_for_company(&self, industry: &str, company: &str) -> &[String] {
        self.company_values
            .iter()
            .filter(|iv| iv.industry == industry)
            .flat_map(|iv| iv.companies.iter())
            .find(|(name, _)| name.eq_ignore_ascii_case(company.trim()))
            .map(|(_, values)| values.as_slice())
            .unwrap_or_else(|| self.values_for_industry(industry))
    }

    /// Lexicon keywords associated with a (lowercased) company value.
    pub fn keywords_for_value(&self, value: &str) -> Option<&[String]> {
        self.cultural_keywords
            .get(value)
            .map(Vec::as_slice)
            .filter(|keywords| !keywords.is_empty())
    }

    /// Role track for an industry, falling back to the `Default` track.
    pub fn progression_for(&self, industry: &str) -> Option<&RoleTrack> {
        self.role_progressions
            .iter()
            .find(|track| track.industry == industry)
            .or_else(|| {
                self.role_progressions
                    .iter()
                    .find(|track| track.industry == DEFAULT_INDUSTRY)
            })
    }

    /// Skills expected per tier in an industry, falling back to `Default`.
    pub fn skills_for(&self, industry: &str) -> Option<&IndustrySkills> {
        self.industry_skills
            .iter()
            .find(|entry| entry.industry == industry)
            .or_else(|| {
                self.industry_skills
                    .iter()
                    .find(|entry| entry.industry == DEFAULT_INDUSTRY)
            })
    }

    pub fn learning_resources_for(&self, skill: &str) -> Option<Vec<String>> {
        self.learning_resources
            .iter()
            .find(|path| path.skills.iter().any(|s| s == skill))
            .map(|path| path.resources.clone())
    }

    pub fn salary_band(&self, tier: SeniorityTier) -> Option<SalaryRange> {
        self.salary_bands.get(tier).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pmp_weight() {
        let data = ReferenceData::default();
        assert_eq!(data.certification_weight("PMP"), Some(0.95));
        assert_eq!(data.certification_weight("pmp"), Some(0.95));
        assert!(data.certification_weight("Made Up Cert").is_none());
    }

    #[test]
    fn test_skill_relevance_defaults_to_half() {
        let data = ReferenceData::default();
        assert_eq!(data.skill_relevance("Cloud Computing"), 0.95);
        assert_eq!(data.skill_relevance("Blockchain"), 0.85);
        assert_eq!(data.skill_relevance("COBOL"), 0.5);
    }

    #[test]
    fn test_values_fall_back_to_global_default() {
        let data = ReferenceData::default();
        assert_eq!(data.values_for_industry("Finance")[0], "integrity");
        assert_eq!(
            data.values_for_industry("Agriculture"),
            data.default_company_values.as_slice()
        );
    }

    #[test]
    fn test_company_values_by_name() {
        let data = ReferenceData::default();
        assert_eq!(data.values_for_company("Finance", "goldman sachs")[0], "client service");
        assert_eq!(
            data.values_for_company("Finance", "Unknown Bank"),
            data.values_for_industry("Finance")
        );
        // Company lookup is scoped to the industry
        assert_eq!(
            data.values_for_company("Finance", "Google"),
            data.values_for_industry("Finance")
        );
    }

    #[test]
    fn test_progression_falls_back_to_default_track() {
        let data = ReferenceData::default();
        let track = data.progression_for("Aerospace").unwrap();
        assert_eq!(track.industry, DEFAULT_INDUSTRY);
        let track = data.progression_for("Data Science").unwrap();
        assert_eq!(track.tiers.entry[0], "Data Analyst");
    }

    #[test]
    fn test_marketing_skills_use_default_list() {
        let data = ReferenceData::default();
        assert_eq!(data.skills_for("Marketing").unwrap().industry, DEFAULT_INDUSTRY);
    }

    #[test]
    fn test_learning_resources_lookup() {
        let data = ReferenceData::default();
        let resources = data.learning_resources_for("Statistics").unwrap();
        assert!(resources.contains(&"Coursera Specialization".to_string()));
        assert!(data.learning_resources_for("Kubernetes").is_none());
    }

    #[test]
    fn test_salary_band_per_tier() {
        let data = ReferenceData::default();
        let mid = data.salary_band(SeniorityTier::Mid).unwrap();
        assert_eq!((mid.min, mid.max), (90_000.0, 130_000.0));
        assert!(data.salary_band(SeniorityTier::Unknown).is_none());
    }

    #[test]
    fn test_partial_json_override_keeps_builtin_tables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"certifications": {{"Internal Cert": 0.6}}}}"#).unwrap();

        let data = ReferenceData::from_json_file(file.path()).unwrap();
        assert_eq!(data.certification_weight("Internal Cert"), Some(0.6));
        assert!(data.certification_weight("PMP").is_none());
        assert_eq!(data.role_categories.len(), 3);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(ReferenceData::from_json_file(file.path()).is_err());
    }
}
