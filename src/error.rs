use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_contact::ValidationError;
use serde_json::json;
use thiserror::Error;

/// Every way a request on the API surface can fail. Each variant maps to a
/// fixed status code and JSON body; internal causes are logged at the point
/// of failure and never leak into a response.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid JSON data")]
    MalformedPayload,

    #[error("Error sending email")]
    Delivery,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Route not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(reason) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": reason.to_string() }),
            ),
            ApiError::MalformedPayload => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON data" }),
            ),
            // Generic on purpose: the relay error may carry credentials or
            // infrastructure detail and is only ever logged.
            ApiError::Delivery => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Error sending email" }),
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed" }),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Route not found" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
