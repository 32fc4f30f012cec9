//! Request Shapes
//!
//! Transport-independent description of an outgoing call.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use super::error::ApiError;

/// Characters left unescaped in query components
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Text,
    /// Boundary is chosen by the browser
    Multipart,
}

impl ContentType {
    /// Value for the `Content-Type` header; multipart leaves it to the browser
    pub fn header_value(&self) -> Option<&'static str> {
        match self {
            ContentType::Json => Some("application/json"),
            ContentType::Text => Some("text/plain;charset=UTF-8"),
            ContentType::Multipart => None,
        }
    }
}

/// One field of a multipart upload
#[derive(Debug, Clone)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: web_sys::File },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Multipart body, converted to `FormData` at send time
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.parts.push(FormPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn file(mut self, name: &str, file: web_sys::File) -> Self {
        self.parts.push(FormPart::File {
            name: name.to_string(),
            file,
        });
        self
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// Per-call configuration: query parameters, extra headers and content type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub content_type: Option<ContentType>,
}

impl RequestOptions {
    /// Override the body's default content type
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// A fully described call before interception
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub content_type: Option<ContentType>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            content_type: None,
            body: RequestBody::Empty,
        }
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.query.extend(options.query);
        self.headers.extend(options.headers);
        if options.content_type.is_some() {
            self.content_type = options.content_type;
        }
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Request(e.to_string()))?;
        self.body = RequestBody::Json(value);
        self.content_type.get_or_insert(ContentType::Json);
        Ok(self)
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        // FormData always goes out as multipart
        self.body = RequestBody::Multipart(form);
        self.content_type = Some(ContentType::Multipart);
        self
    }

    /// Replace any header with the same case-insensitive name
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Apply the content type as a header unless the caller set one
    pub fn resolve_content_type(&mut self) {
        let Some(value) = self.content_type.and_then(|c| c.header_value()) else {
            return;
        };
        if self.header("Content-Type").is_none() {
            self.headers.push(("Content-Type".to_string(), value.to_string()));
        }
    }

    /// Path plus percent-encoded query string
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_ENCODE),
                    utf8_percent_encode(v, QUERY_ENCODE)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        let sep = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.path, sep, query)
    }
}

/// Request handed to a transport after interception. Headers are final,
/// including `Content-Type`.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
    pub timeout_ms: u32,
}
