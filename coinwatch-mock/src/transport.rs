//! A [`Transport`] that serves scripted responses without a network.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use coinwatch_http::{BoxError, HttpRequest, HttpResponse, Transport};
use url::Url;

/// Scripted transport keyed by request path.
///
/// Responses for a path are served in the order they were scripted; the last
/// one repeats for any further calls, so a single scripted response behaves
/// like a fixed route. Every request is recorded for inspection.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, VecDeque<Result<HttpResponse, String>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    /// Transport with nothing scripted. Any request fails until a route is
    /// added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a response for `path`.
    #[must_use]
    pub fn respond(self, path: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.enqueue(
            path,
            Ok(HttpResponse {
                status,
                header_fields: Vec::new(),
                body: Some(body.into()),
            }),
        );
        self
    }

    /// Script a transport-level failure for `path`.
    #[must_use]
    pub fn fail(self, path: &str, message: &str) -> Self {
        self.enqueue(path, Err(message.to_owned()));
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .clone()
    }

    /// Paths of every request received so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.path)
            .collect()
    }

    fn enqueue(&self, path: &str, result: Result<HttpResponse, String>) {
        self.routes
            .lock()
            .expect("mock transport lock poisoned")
            .entry(path.to_owned())
            .or_default()
            .push_back(result);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &HttpRequest, _base_url: &Url) -> Result<HttpResponse, BoxError> {
        self.requests
            .lock()
            .expect("mock transport lock poisoned")
            .push(request.clone());
        let next = {
            let mut routes = self.routes.lock().expect("mock transport lock poisoned");
            match routes.get_mut(&request.path) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };
        match next {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(message.into()),
            None => Err(format!("no scripted response for '{}'", request.path).into()),
        }
    }
}
