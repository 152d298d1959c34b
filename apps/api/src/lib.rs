//! Candidate fitment engine and its HTTP service.
//!
//! The engine lives in [`ranking`]: [`ranking::RuleBasedRanker`] scores a
//! [`models::candidate::CandidateProfile`] against a
//! [`models::job::JobRequirement`] using the shared [`reference::ReferenceData`].

pub mod config;
pub mod errors;
pub mod models;
pub mod ranking;
pub mod reference;
pub mod routes;
pub mod state;
