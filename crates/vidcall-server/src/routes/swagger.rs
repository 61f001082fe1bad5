//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ApiCallResponse, DetailsRequest, DetailsResponse, MessageResponse, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::details::get_details,
        super::status::get_status,
    ),
    info(
        title = "Vidcall API",
        version = "0.1.0",
        description = "Records calls made to the video provider's details endpoint.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Details", description = "Details - Video details lookup"),
        (name = "Status", description = "Status - Recorded calls and uptime"),
    ),
    components(
        schemas(
            DetailsRequest,
            DetailsResponse,
            MessageResponse,
            ApiCallResponse,
            StatusResponse,
        )
    ),
)]
pub struct ApiDoc;
