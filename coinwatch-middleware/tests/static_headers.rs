use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coinwatch_http::{BoxError, HttpRequest, HttpResponse, Transport, UniversalClient};
use coinwatch_middleware::StaticHeadersMiddleware;
use url::Url;

/// Transport that records every request and answers 200.
#[derive(Default)]
struct RecordingTransport {
    seen: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    fn seen(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &HttpRequest, _base_url: &Url) -> Result<HttpResponse, BoxError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(HttpResponse {
            status: 200,
            header_fields: Vec::new(),
            body: None,
        })
    }
}

#[tokio::test]
async fn stamps_headers_after_whatever_the_serializer_set() {
    let transport = Arc::new(RecordingTransport::default());
    let client = UniversalClient::builder()
        .base_url("https://api.example.com/api/v3/")
        .transport(transport.clone())
        .middleware(Arc::new(
            StaticHeadersMiddleware::new()
                .with_header("x-cg-demo-api-key", "demo-key")
                .with_header("user-agent", "coinwatch/0.1"),
        ))
        .build();

    client
        .send(
            (),
            |_| Ok(HttpRequest::get("ping").with_header("accept", "application/json")),
            |response| Ok(response.status),
        )
        .await
        .unwrap();
    client
        .send((), |_| Ok(HttpRequest::get("pong")), |r| Ok(r.status))
        .await
        .unwrap();

    let seen = transport.seen();
    assert_eq!(seen.len(), 2);

    let first: Vec<(&str, &str)> = seen[0]
        .header_fields
        .iter()
        .map(|h| (h.name.as_str(), h.value.as_str()))
        .collect();
    assert_eq!(
        first,
        [
            ("accept", "application/json"),
            ("x-cg-demo-api-key", "demo-key"),
            ("user-agent", "coinwatch/0.1"),
        ]
    );

    // Every request gets stamped, not just the first.
    assert!(
        seen[1]
            .header_fields
            .iter()
            .any(|h| h.name == "x-cg-demo-api-key")
    );
}
