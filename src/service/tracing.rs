use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::{Level, Span};

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Configuration {
    /// Request header carrying a correlation id, attached to every request span.
    #[serde(default)]
    pub header: Option<String>,
}

impl Configuration {
    pub fn add_layer(&self, router: axum::Router) -> axum::Router {
        match self.header {
            Some(ref header) => router.layer(
                TraceLayer::new_for_http().make_span_with(TraceIdMakeSpan::new(header.clone())),
            ),
            None => router.layer(TraceLayer::new_for_http()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TraceIdMakeSpan {
    header: String,
}

impl TraceIdMakeSpan {
    pub fn new(header: String) -> Self {
        Self { header }
    }
}

impl<B> MakeSpan<B> for TraceIdMakeSpan {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let trace_id = request
            .headers()
            .get(&self.header)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        tracing::span!(
            Level::DEBUG,
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            trace_id = %trace_id,
        )
    }
}
