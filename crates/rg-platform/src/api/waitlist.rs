//! Waitlist API
//!
//! REST endpoints for sign-ups and the (admin) entries listing.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::common::{ApiError, ApiResult, PaginationParams};
use crate::domain::WaitlistEntry;
use crate::service::RegistrationService;

/// Sign-up request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub city: String,
}

/// Waitlist entry DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct WaitlistEntryResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub timestamp: String,
    pub status: String,
    pub source: String,
}

impl From<WaitlistEntry> for WaitlistEntryResponse {
    fn from(e: WaitlistEntry) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            city: e.city,
            timestamp: e.timestamp.to_rfc3339(),
            status: e.status,
            source: e.source,
        }
    }
}

/// Success envelope for a sign-up
#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    pub success: bool,
    pub data: WaitlistEntryResponse,
    pub message: String,
}

/// Envelope for the entries listing
#[derive(Debug, Serialize, ToSchema)]
pub struct WaitlistListResponse {
    pub success: bool,
    pub data: Vec<WaitlistEntryResponse>,
    pub count: u64,
}

/// Waitlist service state
#[derive(Clone)]
pub struct WaitlistState {
    pub registration: Arc<RegistrationService>,
}

/// Join the waitlist
#[utoipa::path(
    post,
    path = "/waitlist",
    tag = "waitlist",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Entry created", body = SignupResponse),
        (status = 409, description = "Email already registered", body = ApiError),
        (status = 422, description = "Validation failed", body = ApiError),
        (status = 500, description = "Storage failure", body = ApiError),
    )
)]
pub async fn join_waitlist(
    State(state): State<WaitlistState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<SignupResponse> {
    let entry = state
        .registration
        .submit(&req.name, &req.email, &req.city)
        .await?;

    Ok(Json(SignupResponse {
        success: true,
        data: entry.into(),
        message: "Successfully joined the waitlist".to_string(),
    }))
}

/// List waitlist entries, newest first
#[utoipa::path(
    get,
    path = "/waitlist",
    tag = "waitlist",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of entries with total count", body = WaitlistListResponse),
        (status = 500, description = "Storage failure", body = ApiError),
    )
)]
pub async fn list_waitlist(
    State(state): State<WaitlistState>,
    Query(pagination): Query<PaginationParams>,
) -> ApiResult<WaitlistListResponse> {
    let (entries, total) = state
        .registration
        .list_entries(pagination.skip, pagination.limit)
        .await?;

    Ok(Json(WaitlistListResponse {
        success: true,
        data: entries.into_iter().map(Into::into).collect(),
        count: total,
    }))
}

/// Create waitlist router
pub fn waitlist_router(state: WaitlistState) -> Router {
    Router::new()
        .route("/", post(join_waitlist).get(list_waitlist))
        .with_state(state)
}
