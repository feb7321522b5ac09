//! Content API
//!
//! Serves the static landing-page marketing payload.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::MarketingContent;

/// Envelope for the content payload
#[derive(Debug, Serialize, ToSchema)]
pub struct ContentResponse {
    pub success: bool,
    pub data: MarketingContent,
}

/// Get the landing page content
#[utoipa::path(
    get,
    path = "/content",
    tag = "content",
    responses(
        (status = 200, description = "Marketing content payload", body = ContentResponse),
    )
)]
pub async fn get_content() -> Json<ContentResponse> {
    Json(ContentResponse {
        success: true,
        data: MarketingContent::current(),
    })
}

/// Create content router
pub fn content_router() -> Router {
    Router::new().route("/", get(get_content))
}
