use serde::{Deserialize, Serialize};

/// Client-side weighting preferences. Accepted and echoed back; the engine
/// aggregates with fixed weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skill: f64,
    pub experience: f64,
    pub tech_relevance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub industry: String,
    /// Hiring company, used to look up its published values.
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub required_certifications: Option<Vec<String>>,
    #[serde(default)]
    pub company_values: Option<Vec<String>>,
    #[serde(default)]
    pub score_weights: Option<ScoreWeights>,
}

impl JobRequirement {
    pub fn required_certifications(&self) -> &[String] {
        self.required_certifications.as_deref().unwrap_or(&[])
    }

    /// Explicit company values, if any were supplied.
    pub fn explicit_values(&self) -> Option<&[String]> {
        self.company_values
            .as_deref()
            .filter(|values| !values.is_empty())
    }
}
