//! Version 1 API routes

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    domain::contact::service::ContactService,
    infrastructure::http::{open_api::ApiDocs, state::AppState},
};

pub mod contact;
pub mod stoplight;
pub mod uptime;

/// Create the v1 API router
pub fn router<C: ContactService>() -> Router<AppState<C>> {
    Router::new()
        .route("/", get(stoplight::handler))
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/uptime", get(uptime::handler))
        .route("/contact", post(contact::handler))
}
