//! Minimal HTTP transport abstraction over the browser fetch API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds get a
//! stub transport so the rest of the crate, including the token-refresh
//! protocol, compiles and tests without a browser; tests drive the same
//! code through the scripted fake in [`testing`].

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Request methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Transport-level failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HttpError {
    /// The request could not be constructed or serialized.
    Build(String),
    /// The request never produced a response.
    Network(String),
    /// The response body could not be decoded.
    Decode(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::Build(msg) => write!(f, "request build failed: {msg}"),
            HttpError::Network(msg) => write!(f, "network error: {msg}"),
            HttpError::Decode(msg) => write!(f, "response decode failed: {msg}"),
        }
    }
}

/// A fully described outbound request.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_owned(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: &str) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: &str) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: &str) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: &str) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Append a header, keeping any existing values for other keys.
    #[must_use]
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_owned(), value.to_owned()));
        self
    }

    /// Insert or replace a header (case-insensitive key match).
    pub fn set_header(&mut self, key: &str, value: &str) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
        self.headers.push((key.to_owned(), value.to_owned()));
    }

    /// First value for `key`, case-insensitive.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Attach a JSON body and matching content type.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] when the value cannot be serialized.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, HttpError> {
        let body = serde_json::to_string(value).map_err(|e| HttpError::Build(e.to_string()))?;
        self.set_header("Content-Type", "application/json");
        self.body = Some(body);
        Ok(self)
    }

    /// Attach a `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn form(mut self, pairs: &[(&str, &str)]) -> Self {
        self.set_header("Content-Type", "application/x-www-form-urlencoded");
        self.body = Some(encode_form(pairs));
        self
    }
}

/// Percent-encode a single query or form value.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    out
}

fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A buffered response: status plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for any 2xx status (204 No Content included).
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(|e| HttpError::Decode(e.to_string()))
    }
}

/// Executes [`HttpRequest`]s. Implemented by the browser transport and by
/// the scripted fake used in tests.
pub trait HttpClient {
    fn execute(&self, req: HttpRequest) -> impl Future<Output = Result<HttpResponse, HttpError>>;
}

/// Browser transport backed by `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchClient;

#[cfg(feature = "csr")]
impl HttpClient for FetchClient {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        use gloo_net::http::{Method as GlooMethod, RequestBuilder};

        let method = match req.method {
            Method::Get => GlooMethod::GET,
            Method::Post => GlooMethod::POST,
            Method::Put => GlooMethod::PUT,
            Method::Delete => GlooMethod::DELETE,
        };

        let mut builder = RequestBuilder::new(&req.url).method(method);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let response = match req.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| HttpError::Build(e.to_string()))?
                .send()
                .await
                .map_err(|e| HttpError::Network(e.to_string()))?,
            None => builder
                .send()
                .await
                .map_err(|e| HttpError::Network(e.to_string()))?,
        };

        let status = response.status();
        // 204 and error pages may have no meaningful body; treat it as empty.
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(not(feature = "csr"))]
impl HttpClient for FetchClient {
    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let _ = req;
        Err(HttpError::Network("not available outside the browser".to_owned()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport + tiny executor for native protocol tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

    #[derive(Default)]
    struct FakeHttpInner {
        responses: RefCell<VecDeque<Result<HttpResponse, HttpError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    /// Replays queued responses and records every request it saw. Clones
    /// share one queue, so a test can hand the fake to a gateway and keep
    /// its own handle for scripting and assertions.
    #[derive(Clone, Default)]
    pub struct FakeHttp {
        inner: Rc<FakeHttpInner>,
    }

    impl FakeHttp {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&self, response: HttpResponse) {
            self.inner.responses.borrow_mut().push_back(Ok(response));
        }

        pub fn push_error(&self, error: HttpError) {
            self.inner.responses.borrow_mut().push_back(Err(error));
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.inner.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.inner.requests.borrow().len()
        }
    }

    impl HttpClient for FakeHttp {
        async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            self.inner.requests.borrow_mut().push(req);
            self.inner
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(HttpError::Network("no scripted response".to_owned())))
        }
    }

    /// Drive a future that never actually suspends (the fake transport
    /// resolves immediately) to completion.
    pub fn block_on<F: Future>(fut: F) -> F::Output {
        let mut fut = std::pin::pin!(fut);
        let waker = std::task::Waker::noop();
        let mut cx = std::task::Context::from_waker(waker);
        match fut.as_mut().poll(&mut cx) {
            std::task::Poll::Ready(out) => out,
            std::task::Poll::Pending => unreachable!("fake transport never suspends"),
        }
    }
}
