//! Certification matching.
//!
//! Precedence:
//! 1. candidate holds no certifications → 0.0, every requirement missing
//! 2. job requires none → average weight of recognized certifications held,
//!    or 0.3 participation credit if none are recognized
//! 3. otherwise → matched / required, +0.2 if any held cert is recognized

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;
use crate::ranking::outcome::ensure_finite;
use crate::reference::ReferenceData;

const PARTICIPATION_CREDIT: f64 = 0.3;
const RECOGNIZED_BONUS: f64 = 0.2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationMatch {
    pub certification_match_score: f64,
    pub matching_certifications: Vec<String>,
    pub missing_certifications: Vec<String>,
    pub has_industry_recognized: bool,
    pub recognized_certifications: Vec<String>,
}

pub fn match_certifications(
    held: &[String],
    required: &[String],
    reference: &ReferenceData,
) -> Result<CertificationMatch, ScoringError> {
    if held.is_empty() {
        return Ok(CertificationMatch {
            missing_certifications: required.to_vec(),
            ..CertificationMatch::default()
        });
    }

    let recognized: Vec<(String, f64)> = held
        .iter()
        .filter_map(|cert| {
            reference
                .certification_weight(cert)
                .map(|weight| (cert.clone(), weight))
        })
        .collect();
    let has_industry_recognized = !recognized.is_empty();
    let recognized_certifications: Vec<String> =
        recognized.iter().map(|(name, _)| name.clone()).collect();

    if required.is_empty() {
        let score = if has_industry_recognized {
            let total: f64 = recognized.iter().map(|(_, weight)| weight).sum();
            ensure_finite("certification", total / recognized.len() as f64)?
        } else {
            PARTICIPATION_CREDIT
        };
        return Ok(CertificationMatch {
            certification_match_score: score,
            has_industry_recognized,
            recognized_certifications,
            ..CertificationMatch::default()
        });
    }

    let held_lower: Vec<String> = held.iter().map(|c| c.to_lowercase()).collect();
    let (matching, missing): (Vec<&String>, Vec<&String>) = required.iter().partition(|req| {
        let req = req.to_lowercase();
        held_lower.iter().any(|cert| cert.contains(&req))
    });

    let base_score = matching.len() as f64 / required.len() as f64;
    let bonus = if has_industry_recognized {
        RECOGNIZED_BONUS
    } else {
        0.0
    };

    Ok(CertificationMatch {
        certification_match_score: (base_score + bonus).min(1.0),
        matching_certifications: matching.into_iter().cloned().collect(),
        missing_certifications: missing.into_iter().cloned().collect(),
        has_industry_recognized,
        recognized_certifications,
    })
}
