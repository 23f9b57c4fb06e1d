//! Axum route handlers for the Campaign Candidates API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::DEFAULT_BATCH_SIZE;
use crate::models::campaign::Campaign;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::state::AppState;

/// Largest batch a single request may ask for.
pub const MAX_BATCH_SIZE: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub campaign: Campaign,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub campaign_id: String,
    pub candidates: Vec<Candidate>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub campaign_id: String,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: CandidateStatus,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub candidate: Candidate,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    pub campaigns: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/campaigns/:id/candidates
///
/// Generates a fresh batch for the campaign and replaces whatever was stored
/// under its id. The path id overrides any id in the body.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let campaign_id = campaign_id.trim().to_string();
    if campaign_id.is_empty() {
        return Err(AppError::Validation("campaign id cannot be empty".to_string()));
    }

    let count = request.count.unwrap_or(DEFAULT_BATCH_SIZE);
    if count > MAX_BATCH_SIZE {
        return Err(AppError::Validation(format!(
            "count must be at most {MAX_BATCH_SIZE}, got {count}"
        )));
    }

    let mut campaign = request.campaign;
    campaign.id = campaign_id.clone();

    let candidates = state
        .generator
        .generate_for_campaign(&state.store, &campaign, count)
        .await;

    Ok(Json(GenerateResponse {
        campaign_id,
        candidates,
        generated_at: Utc::now(),
    }))
}

/// GET /api/v1/campaigns/:id/candidates
///
/// Stored batch for the campaign; empty when nothing is stored.
pub async fn handle_get_candidates(
    State(state): State<AppState>,
    Path(campaign_id): Path<String>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let candidates = state.store.get_candidates_for_campaign(&campaign_id).await;
    Ok(Json(CandidateListResponse {
        campaign_id,
        candidates,
    }))
}

/// PATCH /api/v1/campaigns/:id/candidates/:candidate_id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path((campaign_id, candidate_id)): Path<(String, Uuid)>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<StatusUpdateResponse>, AppError> {
    let candidate = state
        .store
        .update_candidate_status(&campaign_id, candidate_id, request.status)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Candidate {candidate_id} not found in campaign '{campaign_id}'"
            ))
        })?;

    Ok(Json(StatusUpdateResponse {
        candidate,
        updated_at: Utc::now(),
    }))
}

/// GET /api/v1/campaigns
pub async fn handle_list_campaigns(
    State(state): State<AppState>,
) -> Result<Json<CampaignListResponse>, AppError> {
    Ok(Json(CampaignListResponse {
        campaigns: state.store.campaign_ids().await,
    }))
}
