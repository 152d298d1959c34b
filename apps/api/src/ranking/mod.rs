//! Candidate ranking: matchers, career analysis and score aggregation.

pub mod certification;
pub mod culture;
pub mod education;
pub mod engine;
pub mod experience;
pub mod fitment;
pub mod forecast;
pub mod handlers;
pub mod outcome;
pub mod progression;
pub mod skills;

pub use engine::{ResumeRanker, RuleBasedRanker};
