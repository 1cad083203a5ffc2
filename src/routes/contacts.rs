use axum::{
    extract::{Form, FromRequest, Request, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::config::SinkMode;
use crate::error::ApiError;
use crate::routes::AppState;
use portfolio_contact::{ContactRecord, ContactSubmission};

/// Contact-form body, accepted as JSON or form-urlencoded depending on the
/// request's content type. Any body that cannot be parsed into fields at
/// all is rejected up front; field-level validation happens afterwards in
/// the domain layer.
pub struct SubmissionPayload(pub ContactSubmission);

impl<S> FromRequest<S> for SubmissionPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        let submission = if content_type.starts_with("application/x-www-form-urlencoded") {
            Form::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|_| ApiError::MalformedPayload)?
                .0
        } else {
            Json::<ContactSubmission>::from_request(req, state)
                .await
                .map_err(|_| ApiError::MalformedPayload)?
                .0
        };

        Ok(Self(submission))
    }
}

/// GET /api/contacts - Full in-memory list and its count
pub async fn list_contacts(State(state): State<AppState>) -> impl IntoResponse {
    let data = state.store.list();
    let count = data.len();
    Json(json!({
        "success": true,
        "data": data,
        "count": count,
    }))
}

/// POST /api/contacts - Validate a submission and dispose of it through the
/// configured sink
///
/// Validation fully precedes the single side effect; a rejected submission
/// touches neither the store nor the relay.
pub async fn create_contact(
    State(state): State<AppState>,
    SubmissionPayload(submission): SubmissionPayload,
) -> Result<Json<serde_json::Value>, ApiError> {
    let record = ContactRecord::accept(submission)?;

    match state.sink {
        SinkMode::Memory => {
            state.store.append(record.clone());
            tracing::info!(id = %record.id, "contact submission stored");

            Ok(Json(json!({
                "success": true,
                "message": "Contact form submitted successfully!",
                "data": record,
            })))
        }
        SinkMode::Smtp => {
            if let Err(e) = state.mailer.send_contact_email(&record).await {
                // Logged only; the response stays generic so relay detail
                // never reaches the caller.
                tracing::error!(error = %e, "failed to send contact email");
                return Err(ApiError::Delivery);
            }
            tracing::info!(id = %record.id, "contact submission forwarded to operator inbox");

            Ok(Json(json!({ "message": "Email sent successfully" })))
        }
    }
}

/// Disallowed verbs on the contacts routes (PUT, DELETE, ...)
pub async fn method_not_allowed() -> impl IntoResponse {
    ApiError::MethodNotAllowed
}
