//! Axum route handlers for the Ranking API.

use std::sync::Arc;

use anyhow::anyhow;
use axum::{extract::State, Json};
use chrono::Local;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobRequirement;
use crate::models::report::JobMatch;
use crate::ranking::engine::sort_by_match_score;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidate: CandidateProfile,
    pub job_requirement: JobRequirement,
}

#[derive(Debug, Deserialize)]
pub struct BatchRankRequest {
    pub candidates: Vec<CandidateProfile>,
    pub job_requirement: JobRequirement,
}

fn validate_job(job: &JobRequirement) -> Result<(), AppError> {
    if job.title.trim().is_empty() {
        return Err(AppError::Validation(
            "job_requirement.title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/rank
///
/// Scores one candidate against one job requirement.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<JobMatch>, AppError> {
    validate_job(&request.job_requirement)?;

    let ranker = state.ranker.clone();
    let today = Local::now().date_naive();
    let result = tokio::task::spawn_blocking(move || {
        ranker.rank_at(&request.candidate, &request.job_requirement, today)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("ranking task failed: {e}")))?;

    Ok(Json(result))
}

/// POST /api/v1/rank/batch
///
/// Scores every candidate concurrently on the blocking pool and returns the
/// reports best first. Ties keep request order.
pub async fn handle_rank_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRankRequest>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    validate_job(&request.job_requirement)?;

    let count = request.candidates.len();
    if count == 0 {
        return Err(AppError::Validation("candidates cannot be empty".to_string()));
    }
    if count > state.config.max_batch_size {
        return Err(AppError::Validation(format!(
            "batch of {count} candidates exceeds the limit of {}",
            state.config.max_batch_size
        )));
    }

    // One "today" for the whole batch
    let today = Local::now().date_naive();
    let job = Arc::new(request.job_requirement);
    let handles: Vec<_> = request
        .candidates
        .into_iter()
        .map(|candidate| {
            let ranker = state.ranker.clone();
            let job = Arc::clone(&job);
            tokio::task::spawn_blocking(move || ranker.rank_at(&candidate, &job, today))
        })
        .collect();

    let mut results = Vec::with_capacity(count);
    for handle in handles {
        let result = handle
            .await
            .map_err(|e| AppError::Internal(anyhow!("ranking task failed: {e}")))?;
        results.push(result);
    }
    sort_by_match_score(&mut results);

    info!("Ranked batch of {count} candidates for '{}'", job.title);
    Ok(Json(results))
}
