use super::Acknowledgment;
use crate::error::ServerError;
use axum::extract::{Extension, Json, Path};
use template_registry_store::Store;

/// Delete a template
#[utoipa::path(
    operation_id = "delete_template",
    delete,
    path = "/templates/{name}",
    params(
        ("name" = String, Path, description = "Name of the template.")
    ),
    responses(
        (status = 200, description = "The template has been deleted.", body = Acknowledgment),
        (status = 404, description = "No template with this name.", body = ServerError),
    )
)]
pub(crate) async fn handler(
    Extension(store): Extension<Store>,
    Path(name): Path<String>,
) -> Result<Json<Acknowledgment>, ServerError> {
    store.delete(&name).await?;
    metrics::counter!("template_delete").increment(1);
    tracing::info!(name = %name, "template deleted");
    Ok(Json(Acknowledgment::success()))
}
