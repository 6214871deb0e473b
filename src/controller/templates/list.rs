use axum::extract::{Extension, Json};
use std::collections::HashMap;
use template_registry_store::{Store, TemplateData};

/// List all the templates
///
/// Returns every stored template, indexed by name, in no particular order.
#[utoipa::path(
    operation_id = "list_templates",
    get,
    path = "/templates",
    responses(
        (
            status = 200,
            description = "The data of every template, indexed by name.",
            body = Object,
            example = json!({ "chart1": { "type": "bar" } }),
        ),
    )
)]
pub(crate) async fn handler(
    Extension(store): Extension<Store>,
) -> Json<HashMap<String, TemplateData>> {
    metrics::counter!("template_list").increment(1);
    Json(store.list().await)
}
