pub mod config;
pub mod email;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use std::sync::Arc;

/// Build the application router from a validated config.
///
/// Also the entry point for integration tests, which construct an
/// [`AppState`] with an isolated store (and usually a stub mailer) and call
/// [`routes::router`] directly.
pub fn create_app(config: &config::Config) -> axum::Router {
    let state = AppState {
        sink: config.contact.sink,
        store: portfolio_contact::ContactStore::new(),
        mailer: Arc::new(email::SmtpMailer::new(config.email.clone())),
    };

    routes::router(state)
}
