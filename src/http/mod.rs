//! HTTP Client Wrapper
//!
//! Shared request object used by every resource API module. It prefixes the
//! base URL, injects the bearer token, unwraps successful payloads and
//! normalizes failures into `ApiError`.

mod error;
mod fetch;
mod request;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::session::Session;

pub use error::{ApiError, RawResponse, TransportFailure};
pub use fetch::{js_error_message, FetchTransport};
pub use request::{ApiRequest, ContentType, Method, MultipartForm, PreparedRequest, RequestOptions};

/// Executes a prepared request
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: PreparedRequest,
    ) -> LocalBoxFuture<'static, Result<RawResponse, TransportFailure>>;
}

#[derive(Clone)]
pub struct HttpClient {
    config: ApiConfig,
    session: Session,
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    pub fn new(config: ApiConfig, session: Session, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            session,
            transport: Arc::new(transport),
        }
    }

    /// Client that talks to the network through `fetch`
    pub fn browser(config: ApiConfig, session: Session) -> Self {
        Self::new(config, session, FetchTransport)
    }

    // ========================
    // Verb Methods
    // ========================

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        self.send(ApiRequest::new(Method::Get, path).with_options(options))
            .await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = self.shape(ApiRequest::new(Method::Post, path).with_options(options).json(body))?;
        self.send(request).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = self.shape(ApiRequest::new(Method::Put, path).with_options(options).json(body))?;
        self.send(request).await
    }

    pub async fn delete<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        self.send(ApiRequest::new(Method::Delete, path).with_options(options))
            .await
    }

    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        form: MultipartForm,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        self.send(
            ApiRequest::new(Method::Post, path)
                .with_options(options)
                .multipart(form),
        )
        .await
    }

    pub async fn get_text(&self, path: &str, options: RequestOptions) -> Result<String, ApiError> {
        self.send_text(ApiRequest::new(Method::Get, path).with_options(options))
            .await
    }

    // ========================
    // Pipeline
    // ========================

    /// Send and decode the JSON payload
    pub async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let body = self.send_text(request).await?;
        let payload = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(payload).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            log::error!("[HTTP] {} {} failed: {}", method, path, err);
            err
        })
    }

    /// Send and return the raw payload text
    pub async fn send_text(&self, request: ApiRequest) -> Result<String, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        let prepared = self.intercept_request(request);
        log::debug!("[HTTP] {} {}", method, prepared.url);

        match self.transport.execute(prepared).await {
            Ok(response) if response.is_success() => Ok(response.body),
            Ok(response) => {
                let err = ApiError::from_status(response.status, &response.body);
                log::error!("[HTTP] {} {} failed with status {}: {}", method, path, response.status, err);
                Err(err)
            }
            Err(failure) => {
                log::error!("[HTTP] {} {} failed: {:?}", method, path, failure);
                Err(ApiError::from_failure(failure))
            }
        }
    }

    /// Attach the bearer token when one is stored
    fn intercept_request(&self, mut request: ApiRequest) -> PreparedRequest {
        if let Some(token) = self.session.token() {
            request.set_header("Authorization", &format!("Bearer {}", token));
        }
        request.resolve_content_type();
        PreparedRequest {
            method: request.method,
            url: self.config.url_for(&request.path_and_query()),
            headers: request.headers,
            body: request.body,
            timeout_ms: self.config.timeout_ms,
        }
    }

    /// Log construction errors the same way as transport errors
    fn shape(&self, request: Result<ApiRequest, ApiError>) -> Result<ApiRequest, ApiError> {
        request.map_err(|err| {
            log::error!("[HTTP] request construction failed: {}", err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use crate::session::MemoryTokens;
    use futures::executor::block_on;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        ok: bool,
    }

    fn client_with(session: Session, transport: &MockTransport) -> HttpClient {
        let config = ApiConfig {
            base_url: "https://api.test".to_string(),
            timeout_ms: 5000,
        };
        HttpClient::new(config, session, transport.clone())
    }

    #[test]
    fn test_bearer_header_attached_when_token_stored() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"ok":true}"#);
        let client = client_with(Session::new(MemoryTokens::with_token("T-123")), &transport);

        let echo: Echo = block_on(client.get("/api/tasks", RequestOptions::default())).unwrap();
        assert!(echo.ok);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("Authorization"), Some("Bearer T-123"));
        assert_eq!(sent.url, "https://api.test/api/tasks");
        assert_eq!(sent.timeout_ms, 5000);
    }

    #[test]
    fn test_no_header_without_token() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"ok":true}"#);
        let client = client_with(Session::in_memory(), &transport);

        let _: Echo = block_on(client.post("/api/login", &serde_json::json!({}), RequestOptions::default())).unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("Authorization"), None);
        assert_eq!(sent.method, Method::Post);
    }

    #[test]
    fn test_content_type_reaches_transport() {
        let transport = MockTransport::new();
        transport.respond(200, "null");
        transport.respond(200, "null");
        let client = client_with(Session::in_memory(), &transport);

        let _: Option<Echo> = block_on(client.post("/api/tasks", &serde_json::json!({}), RequestOptions::default())).unwrap();
        let options = RequestOptions::default().content_type(ContentType::Text);
        let _: Option<Echo> = block_on(client.put("/api/notes/1", "hello", options)).unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        assert_eq!(sent[1].header("Content-Type"), Some("text/plain;charset=UTF-8"));
        assert_eq!(sent[1].json, Some(serde_json::json!("hello")));
    }

    #[test]
    fn test_get_sends_no_content_type() {
        let transport = MockTransport::new();
        transport.respond(200, "null");
        let client = client_with(Session::in_memory(), &transport);

        let _: Option<Echo> = block_on(client.get("/api/tasks", RequestOptions::default())).unwrap();
        assert_eq!(transport.last_request().unwrap().header("Content-Type"), None);
    }

    #[test]
    fn test_token_read_on_every_request() {
        let transport = MockTransport::new();
        transport.respond(200, "null");
        transport.respond(200, "null");
        let session = Session::in_memory();
        let client = client_with(session.clone(), &transport);

        let _: serde_json::Value = block_on(client.get("/text", RequestOptions::default())).unwrap();
        session.sign_in("late-token");
        let _: serde_json::Value = block_on(client.get("/text", RequestOptions::default())).unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].header("Authorization"), None);
        assert_eq!(sent[1].header("Authorization"), Some("Bearer late-token"));
    }

    #[test]
    fn test_success_unwraps_payload_only() {
        let transport = MockTransport::new();
        transport.respond(201, r#"{"ok":false}"#);
        let client = client_with(Session::in_memory(), &transport);

        let echo: Echo = block_on(client.put("/api/tasks/1", &serde_json::json!({"title":"x"}), RequestOptions::default())).unwrap();
        assert_eq!(echo, Echo { ok: false });
    }

    #[test]
    fn test_empty_success_body_decodes_as_null() {
        let transport = MockTransport::new();
        transport.respond(204, "");
        let client = client_with(Session::in_memory(), &transport);

        let value: Option<Echo> = block_on(client.delete("/api/tasks/1", RequestOptions::default())).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_mapped_status_rejections() {
        for (status, expected) in [
            (401, "unauthorized, please log in again"),
            (403, "access forbidden"),
            (404, "requested resource not found"),
            (500, "internal server error"),
        ] {
            let transport = MockTransport::new();
            transport.respond(status, r#"{"message":"ignored"}"#);
            let client = client_with(Session::in_memory(), &transport);
            let err = block_on(client.get::<Echo>("/api/tasks", RequestOptions::default())).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_unmapped_status_message() {
        let transport = MockTransport::new();
        transport.respond(422, r#"{"message":"X"}"#);
        transport.respond(422, r#"{}"#);
        let client = client_with(Session::in_memory(), &transport);

        let err = block_on(client.get::<Echo>("/api/tasks", RequestOptions::default())).unwrap_err();
        assert_eq!(err.to_string(), "X");
        let err = block_on(client.get::<Echo>("/api/tasks", RequestOptions::default())).unwrap_err();
        assert!(err.to_string().contains("422"));
    }

    #[test]
    fn test_no_response_rejection() {
        let transport = MockTransport::new();
        transport.fail(TransportFailure::NoResponse("timeout of 5000ms exceeded".into()));
        let client = client_with(Session::in_memory(), &transport);

        let err = block_on(client.get::<Echo>("/api/tasks", RequestOptions::default())).unwrap_err();
        assert_eq!(err, ApiError::NoResponse);
        assert_eq!(err.to_string(), "network error, no response from server");
    }

    #[test]
    fn test_build_failure_passes_message_through() {
        let transport = MockTransport::new();
        transport.fail(TransportFailure::Build("Failed to parse URL".into()));
        let client = client_with(Session::in_memory(), &transport);

        let err = block_on(client.get_text("/text", RequestOptions::default())).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse URL");
    }

    #[test]
    fn test_decode_failure() {
        let transport = MockTransport::new();
        transport.respond(200, "not json");
        let client = client_with(Session::in_memory(), &transport);

        let err = block_on(client.get::<Echo>("/api/tasks", RequestOptions::default())).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_text_endpoint_returns_raw_body() {
        let transport = MockTransport::new();
        transport.respond(200, "hello from server");
        let client = client_with(Session::in_memory(), &transport);

        let text = block_on(client.get_text("/text", RequestOptions::default())).unwrap();
        assert_eq!(text, "hello from server");
    }

    #[test]
    fn test_unscripted_call_is_no_response() {
        let transport = MockTransport::new();
        let client = client_with(Session::in_memory(), &transport);
        let err = block_on(client.get::<Echo>("/api/tasks", RequestOptions::default())).unwrap_err();
        assert_eq!(err, ApiError::NoResponse);
    }
}
