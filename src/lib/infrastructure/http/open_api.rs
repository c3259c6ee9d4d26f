//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::v1::*};

/// The service's OpenAPI documentation
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Contact Relay"),
    paths(contact::handler, uptime::handler),
    components(schemas(
        contact::ContactBody,
        contact::ContactResponse,
        uptime::UptimeResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
