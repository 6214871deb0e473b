pub(crate) mod metrics;
pub(crate) mod root;
pub(crate) mod status;
pub(crate) mod swagger;
pub(crate) mod templates;

use axum::routing::{get, head, Router};

pub(crate) fn create() -> Router {
    Router::new()
        .route("/", get(root::handler))
        .route("/status", head(status::handler))
        .route("/metrics", get(metrics::handler))
        .route(
            "/templates",
            get(templates::list::handler).post(templates::create::handler),
        )
        .route(
            "/templates/{name}",
            get(templates::get::handler).delete(templates::delete::handler),
        )
        .merge(swagger::service())
}
