use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::fixtures;
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::matching::analytics::{summarize, SeekerAnalytics};
use crate::matching::candidates::{rank_candidates, CandidateMatch};
use crate::matching::jitter::FreshnessJitter;
use crate::matching::scorer::{filter_min_score, MatchResult};
use crate::models::posting::{JobPosting, JobPostingInput};
use crate::models::profile::{SeekerProfile, SeekerProfileInput};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MatchRequest {
    pub profile: SeekerProfileInput,
    /// Ranked instead of the catalog when present.
    pub postings: Option<Vec<JobPostingInput>>,
    #[serde(default)]
    pub min_score: u8,
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct MatchQuery {
    #[serde(default)]
    pub min_score: u8,
    pub seed: Option<u64>,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub results: Vec<MatchResult>,
    pub floor: u8,
    pub scorer_backend: String,
}

#[derive(Serialize)]
pub struct CandidateRankingResponse {
    pub posting: JobPosting,
    pub candidates: Vec<CandidateMatch>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(state.catalog.list_postings().await?))
}

/// POST /api/v1/matches
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(req): AppJson<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let profile = SeekerProfile::try_from(req.profile)?;
    let postings = match req.postings {
        Some(inputs) => inputs
            .into_iter()
            .map(JobPosting::try_from)
            .collect::<Result<Vec<_>, _>>()?,
        None => state.catalog.list_postings().await?,
    };

    let response = rank(&state, &profile, &postings, req.min_score, req.seed).await?;
    Ok(Json(response))
}

/// GET /api/v1/seekers/:id/matches
pub async fn handle_seeker_matches(
    State(state): State<AppState>,
    Path(seeker_id): Path<String>,
    AppQuery(params): AppQuery<MatchQuery>,
) -> Result<Json<MatchResponse>, AppError> {
    let profile = state.profiles.get(&seeker_id).await?;
    let postings = state.catalog.list_postings().await?;
    let response = rank(&state, &profile, &postings, params.min_score, params.seed).await?;
    info!(
        "Ranked {} postings for seeker {seeker_id}",
        response.results.len()
    );
    Ok(Json(response))
}

/// GET /api/v1/seekers/:id/analytics
pub async fn handle_seeker_analytics(
    State(state): State<AppState>,
    Path(seeker_id): Path<String>,
) -> Result<Json<SeekerAnalytics>, AppError> {
    let profile = state.profiles.get(&seeker_id).await?;
    let postings = state.catalog.list_postings().await?;
    Ok(Json(summarize(&profile, &postings, state.scorer.floor())))
}

/// GET /api/v1/jobs/:id/candidates
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Path(posting_id): Path<String>,
) -> Result<Json<CandidateRankingResponse>, AppError> {
    let posting = state.catalog.get_posting(&posting_id).await?;
    let candidates = rank_candidates(
        &posting,
        &fixtures::candidates(),
        state.scorer.floor(),
    );
    Ok(Json(CandidateRankingResponse {
        posting,
        candidates,
    }))
}

async fn rank(
    state: &AppState,
    profile: &SeekerProfile,
    postings: &[JobPosting],
    min_score: u8,
    seed: Option<u64>,
) -> Result<MatchResponse, AppError> {
    let ranked = state.scorer.rank(profile, postings).await?;
    let mut results = filter_min_score(ranked, min_score);
    if let Some(seed) = seed {
        FreshnessJitter::seeded(seed).apply(&mut results);
    }

    Ok(MatchResponse {
        results,
        floor: state.scorer.floor().value(),
        scorer_backend: state.scorer.backend().to_string(),
    })
}
