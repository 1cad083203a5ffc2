#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;

use portfolio::config::SinkMode;
use portfolio::email::ContactMailer;
use portfolio::routes::router;
use portfolio::AppState;
use portfolio_contact::{ContactRecord, ContactStore};

/// Stub relay that counts deliveries and optionally fails every call.
pub struct RecordingMailer {
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingMailer {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactMailer for RecordingMailer {
    async fn send_contact_email(&self, _record: &ContactRecord) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            bail!("relay unavailable");
        }
        Ok(())
    }
}

/// App wired to the in-memory sink, returning the store for inspection.
pub fn memory_app() -> (Router, ContactStore) {
    let store = ContactStore::new();
    let state = AppState {
        sink: SinkMode::Memory,
        store: store.clone(),
        mailer: RecordingMailer::succeeding(),
    };
    (router(state), store)
}

/// App wired to the SMTP sink with the given stub mailer.
pub fn relay_app(mailer: Arc<RecordingMailer>) -> (Router, ContactStore) {
    let store = ContactStore::new();
    let state = AppState {
        sink: SinkMode::Smtp,
        store: store.clone(),
        mailer,
    };
    (router(state), store)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub fn post_form(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request builds")
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}
