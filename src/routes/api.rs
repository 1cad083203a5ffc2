use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET /api - Status payload naming the available endpoints
pub async fn status() -> impl IntoResponse {
    Json(json!({
        "message": "Portfolio API is running!",
        "endpoints": {
            "GET /api": "API status",
            "GET /api/contacts": "Get all contacts",
            "POST /api/contacts": "Create new contact"
        }
    }))
}
