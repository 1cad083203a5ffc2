use std::sync::Arc;

use axum::{
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::SinkMode;
use crate::email::ContactMailer;
use crate::error::ApiError;
use portfolio_contact::ContactStore;

mod api;
mod contacts;
mod health;

pub use contacts::SubmissionPayload;

/// Shared per-process state, injected at router construction.
#[derive(Clone)]
pub struct AppState {
    pub sink: SinkMode,
    pub store: ContactStore,
    pub mailer: Arc<dyn ContactMailer>,
}

async fn fallback() -> impl IntoResponse {
    ApiError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api", get(api::status))
        .route(
            "/api/contacts",
            get(contacts::list_contacts)
                .post(contacts::create_contact)
                .fallback(contacts::method_not_allowed),
        )
        // Singular alias kept for clients of the older form endpoint.
        .route(
            "/api/contact",
            post(contacts::create_contact).fallback(contacts::method_not_allowed),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
