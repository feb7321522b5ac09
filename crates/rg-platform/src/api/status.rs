//! Status Check API
//!
//! Generic client ping log. Kept independent of the waitlist; these
//! endpoints return bare DTOs rather than the success envelope.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::common::{ApiError, ApiResult};
use crate::domain::StatusCheck;
use crate::repository::{StatusCheckRepository, MAX_PAGE_SIZE};

/// Create status check request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

/// Status check DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(c: StatusCheck) -> Self {
        Self {
            id: c.id,
            client_name: c.client_name,
            timestamp: c.timestamp.to_rfc3339(),
        }
    }
}

/// Status service state
#[derive(Clone)]
pub struct StatusState {
    pub status_repo: Arc<StatusCheckRepository>,
}

/// Record a status check
#[utoipa::path(
    post,
    path = "/status",
    tag = "status",
    request_body = CreateStatusCheckRequest,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheckResponse),
        (status = 500, description = "Storage failure", body = ApiError),
    )
)]
pub async fn create_status_check(
    State(state): State<StatusState>,
    Json(req): Json<CreateStatusCheckRequest>,
) -> ApiResult<StatusCheckResponse> {
    let check = StatusCheck::new(req.client_name);
    state.status_repo.insert(&check).await?;
    Ok(Json(check.into()))
}

/// List recorded status checks
#[utoipa::path(
    get,
    path = "/status",
    tag = "status",
    responses(
        (status = 200, description = "Recorded status checks", body = [StatusCheckResponse]),
        (status = 500, description = "Storage failure", body = ApiError),
    )
)]
pub async fn list_status_checks(
    State(state): State<StatusState>,
) -> ApiResult<Vec<StatusCheckResponse>> {
    let checks = state.status_repo.find_recent(MAX_PAGE_SIZE).await?;
    Ok(Json(checks.into_iter().map(Into::into).collect()))
}

/// Create status router
pub fn status_router(state: StatusState) -> Router {
    Router::new()
        .route("/", post(create_status_check).get(list_status_checks))
        .with_state(state)
}
