//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::contact::{
    errors::SubmitContactError,
    value_objects::{email_address::EmailAddressError, submitter_name::SubmitterNameError},
};

/// The uniform failure body returned for every error
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false` for errors
    pub success: bool,

    /// The error message
    #[schema(example = "Name and email are required")]
    pub message: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 500, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Internal server error")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    /// Create new internal server error
    pub fn new_500(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                success: false,
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        error!("unhandled error: {:#}", err);

        ApiError::new_500("An unknown error occurred, please try again")
    }
}

impl From<SubmitterNameError> for ApiError {
    fn from(err: SubmitterNameError) -> Self {
        match err {
            SubmitterNameError::EmptyName => ApiError::new_400("Name and email are required"),
        }
    }
}

impl From<EmailAddressError> for ApiError {
    fn from(err: EmailAddressError) -> Self {
        match err {
            EmailAddressError::EmptyEmailAddress => {
                ApiError::new_400("Name and email are required")
            }
            EmailAddressError::InvalidEmailAddress => ApiError::new_400("Invalid email format"),
        }
    }
}

impl From<SubmitContactError> for ApiError {
    fn from(err: SubmitContactError) -> Self {
        match err {
            SubmitContactError::NotConfigured => {
                ApiError::new_500("Server configuration error. Please try again later.")
            }
            SubmitContactError::DeliveryFailed => {
                ApiError::new_500("Failed to send message. Please try again later.")
            }
            SubmitContactError::UnknownError(err) => err.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}
