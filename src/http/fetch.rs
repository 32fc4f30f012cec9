//! Browser Transport
//!
//! Sends prepared requests through `fetch` via gloo-net. The timeout races
//! the whole exchange (headers and body) and aborts it through an
//! `AbortController`.

use std::future::Future;

use futures::future::{select, Either, LocalBoxFuture};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AbortController, FormData};

use super::error::{RawResponse, TransportFailure};
use super::request::{FormPart, Method, MultipartForm, PreparedRequest, RequestBody};
use super::Transport;

/// `fetch`-backed transport; stateless, so one instance serves the whole app
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn execute(
        &self,
        request: PreparedRequest,
    ) -> LocalBoxFuture<'static, Result<RawResponse, TransportFailure>> {
        Box::pin(execute_fetch(request))
    }
}

async fn execute_fetch(request: PreparedRequest) -> Result<RawResponse, TransportFailure> {
    let controller =
        AbortController::new().map_err(|e| TransportFailure::Build(js_error_message(&e)))?;
    let signal = controller.signal();

    let mut builder = builder_for(request.method, &request.url).abort_signal(Some(&signal));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let outgoing = match request.body {
        RequestBody::Empty => builder.build(),
        // Serialized by hand so the prepared Content-Type header is kept
        RequestBody::Json(value) => builder.body(value.to_string()),
        RequestBody::Multipart(form) => builder.body(to_form_data(&form)?),
    }
    .map_err(|e| TransportFailure::Build(e.to_string()))?;

    let timeout_ms = request.timeout_ms;
    let exchange = async move {
        let response = outgoing
            .send()
            .await
            .map_err(|e| TransportFailure::NoResponse(e.to_string()))?;
        let status = response.status();
        // A failed body read on an error status still maps by status code
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if response.ok() => return Err(TransportFailure::NoResponse(e.to_string())),
            Err(_) => String::new(),
        };
        Ok(RawResponse::new(status, body))
    };

    match within_deadline(exchange, TimeoutFuture::new(timeout_ms)).await {
        Some(outcome) => outcome,
        None => {
            controller.abort();
            Err(TransportFailure::NoResponse(format!(
                "timeout of {}ms exceeded",
                timeout_ms
            )))
        }
    }
}

/// Output of `work`, or `None` when `deadline` fires first
async fn within_deadline<W, D>(work: W, deadline: D) -> Option<W::Output>
where
    W: Future,
    D: Future,
{
    match select(Box::pin(work), Box::pin(deadline)).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

fn builder_for(method: Method, url: &str) -> RequestBuilder {
    match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    }
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, TransportFailure> {
    let data = FormData::new().map_err(|e| TransportFailure::Build(js_error_message(&e)))?;
    for part in form.parts() {
        let appended = match part {
            FormPart::Text { value, .. } => data.append_with_str(part.name(), value),
            FormPart::File { file, .. } => {
                data.append_with_blob_and_filename(part.name(), file, &file.name())
            }
        };
        appended.map_err(|e| TransportFailure::Build(js_error_message(&e)))?;
    }
    Ok(data)
}

/// Best-effort message out of a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use futures::FutureExt;

    #[test]
    fn test_deadline_covers_stalled_body() {
        // Headers arrive at once, then the body never completes
        let exchange = async {
            let status = ready(200u16).await;
            let body: String = pending().await;
            (status, body)
        };
        assert_eq!(block_on(within_deadline(exchange, ready(()))), None);
    }

    #[test]
    fn test_finished_exchange_beats_pending_deadline() {
        let exchange = async { RawResponse::new(204, "") };
        let out = block_on(within_deadline(exchange, pending::<()>()));
        assert_eq!(out, Some(RawResponse::new(204, "")));
    }

    #[test]
    fn test_deadline_wins_only_after_work_stalls() {
        let mut polls = 0;
        let exchange = futures::future::poll_fn(|_| {
            polls += 1;
            std::task::Poll::<u8>::Pending
        });
        let out = block_on(within_deadline(exchange, ready(()).boxed_local()));
        assert_eq!(out, None);
        assert_eq!(polls, 1);
    }
}
