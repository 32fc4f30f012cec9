//! Scripted transport for tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use futures::future::LocalBoxFuture;

use super::error::{RawResponse, TransportFailure};
use super::request::{Method, PreparedRequest, RequestBody};
use super::Transport;

/// Snapshot of a request as it reached the transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub json: Option<serde_json::Value>,
    pub form_fields: Vec<String>,
    pub timeout_ms: u32,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl From<&PreparedRequest> for RecordedRequest {
    fn from(req: &PreparedRequest) -> Self {
        let (json, form_fields) = match &req.body {
            RequestBody::Empty => (None, Vec::new()),
            RequestBody::Json(value) => (Some(value.clone()), Vec::new()),
            RequestBody::Multipart(form) => (
                None,
                form.parts().iter().map(|p| p.name().to_string()).collect(),
            ),
        };
        Self {
            method: req.method,
            url: req.url.clone(),
            headers: req.headers.clone(),
            json,
            form_fields,
            timeout_ms: req.timeout_ms,
        }
    }
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<RawResponse, TransportFailure>>,
    requests: Vec<RecordedRequest>,
}

/// Replies are consumed in order; an empty script answers `NoResponse`
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.script
            .lock()
            .unwrap()
            .replies
            .push_back(Ok(RawResponse::new(status, body)));
    }

    pub fn fail(&self, failure: TransportFailure) {
        self.script.lock().unwrap().replies.push_back(Err(failure));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.script.lock().unwrap().requests.last().cloned()
    }
}

impl Transport for MockTransport {
    fn execute(
        &self,
        request: PreparedRequest,
    ) -> LocalBoxFuture<'static, Result<RawResponse, TransportFailure>> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(RecordedRequest::from(&request));
            script
                .replies
                .pop_front()
                .unwrap_or_else(|| Err(TransportFailure::NoResponse("no scripted reply".into())))
        };
        Box::pin(async move { reply })
    }
}
