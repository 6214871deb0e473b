use axum::extract::Extension;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Export the registry counters
///
/// Template operations, error responses by status code and the number of
/// stored templates, in the prometheus text format.
#[utoipa::path(
    operation_id = "metrics",
    get,
    path = "/metrics",
    responses(
        (
            status = 200,
            description = "Registry metrics in the prometheus text format.",
            body = String,
            example = json!("# TYPE templates_stored gauge\ntemplates_stored 2\n"),
        ),
    )
)]
pub(super) async fn handler(Extension(handle): Extension<Arc<PrometheusHandle>>) -> String {
    handle.render()
}
