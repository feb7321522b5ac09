//! OpenAPI Documentation
//!
//! Central OpenAPI specification for the landing page APIs.

use utoipa::OpenApi;

/// Rise Gum API OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rise Gum Waitlist API",
        version = "1.0.0",
        description = "REST APIs for waitlist sign-ups, landing page content, and status checks"
    ),
    servers(
        (url = "http://localhost:8080/api", description = "Local development")
    ),
    tags(
        (name = "waitlist", description = "Waitlist sign-ups and listing"),
        (name = "content", description = "Landing page marketing content"),
        (name = "status", description = "Generic status-check log")
    ),
    paths(
        super::waitlist::join_waitlist,
        super::waitlist::list_waitlist,
        super::content::get_content,
        super::status::create_status_check,
        super::status::list_status_checks,
    )
)]
pub struct ApiDoc;
