//! Contact submission handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::contact::{
        models::submission::Submission,
        service::ContactService,
        value_objects::{email_address::EmailAddress, submitter_name::SubmitterName},
    },
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// The confirmation shown to the visitor after a successful relay
const CONFIRMATION_MESSAGE: &str = "Thank you for contacting us! We will get back to you soon.";

/// Contact submission request body
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactBody {
    /// The visitor's name
    #[schema(example = "Alice Smith")]
    #[serde(default)]
    name: String,

    /// The visitor's email address, used as the reply-to of the relayed email
    #[schema(example = "alice@example.com")]
    #[serde(default)]
    email: String,

    /// An optional message
    #[schema(example = "Interested in a showing")]
    message: Option<String>,
}

impl TryFrom<ContactBody> for Submission {
    type Error = ApiError;

    fn try_from(body: ContactBody) -> Result<Self, Self::Error> {
        let name = SubmitterName::new(&body.name)?;
        let email = EmailAddress::new(&body.email)?;

        Ok(Submission::new(name, email, body.message))
    }
}

/// Contact submission response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Whether the submission was relayed
    pub success: bool,

    /// The confirmation message
    #[schema(example = "Thank you for contacting us! We will get back to you soon.")]
    pub message: String,
}

/// Relay a contact-form submission to the configured recipient
#[utoipa::path(
    post,
    operation_id = "submit_contact",
    tag = "Contact",
    path = "/api/v1/contact",
    request_body = ContactBody,
    responses(
        (status = StatusCode::OK, description = "Submission relayed", body = ContactResponse),
        (status = StatusCode::BAD_REQUEST, description = "Missing or invalid fields", body = ErrorResponse, example = json!({"success": false, "message": "Name and email are required"})),
        (status = StatusCode::INTERNAL_SERVER_ERROR, description = "Configuration or delivery failure", body = ErrorResponse, example = json!({"success": false, "message": "Failed to send message. Please try again later."})),
    )
)]
pub async fn handler<C: ContactService>(
    State(state): State<AppState<C>>,
    request: Result<Json<ContactBody>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(body) = request?;

    let submission: Submission = body.try_into()?;

    state.contact.submit_contact(&submission).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: CONFIRMATION_MESSAGE.to_string(),
    }))
}
