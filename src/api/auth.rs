//! Auth Endpoints
//!
//! Login and registration. Input is forwarded as-is; the server validates.

use serde::Serialize;

use crate::http::{ApiError, HttpClient, RequestOptions};
use crate::models::{LoginResponse, RegisterResponse};

#[derive(Serialize)]
struct CredentialsArgs<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn login(
    client: &HttpClient,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    client
        .post("/api/login", &CredentialsArgs { username, password }, RequestOptions::default())
        .await
}

pub async fn register(
    client: &HttpClient,
    username: &str,
    password: &str,
) -> Result<RegisterResponse, ApiError> {
    client
        .post("/api/register", &CredentialsArgs { username, password }, RequestOptions::default())
        .await
}
