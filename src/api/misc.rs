//! Diagnostic and Deploy Hooks
//!
//! `GET /text` probes the server; `POST /webhook-update` triggers a redeploy.
//! The webhook secret is always supplied by the caller.

use crate::http::{ApiError, HttpClient, RequestOptions};
use crate::models::Ack;

pub async fn fetch_text(client: &HttpClient) -> Result<String, ApiError> {
    client
        .get_text("/text", RequestOptions::default().header("Accept", "text/plain"))
        .await
}

pub async fn trigger_webhook_update(client: &HttpClient, secret: &str) -> Result<Ack, ApiError> {
    client
        .post(
            "/webhook-update",
            &serde_json::json!({}),
            RequestOptions::default().query("secret", secret),
        )
        .await
}
