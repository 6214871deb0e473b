use crate::error::ServerError;
use axum::extract::{Extension, Json, Path};
use template_registry_store::{Store, TemplateData};

/// Get a template
///
/// Returns the data of the template with the given name.
#[utoipa::path(
    operation_id = "get_template",
    get,
    path = "/templates/{name}",
    params(
        ("name" = String, Path, description = "Name of the template.")
    ),
    responses(
        (
            status = 200,
            description = "The data of the template.",
            body = Object,
            example = json!({ "type": "bar" }),
        ),
        (status = 404, description = "No template with this name.", body = ServerError),
    )
)]
pub(crate) async fn handler(
    Extension(store): Extension<Store>,
    Path(name): Path<String>,
) -> Result<Json<TemplateData>, ServerError> {
    metrics::counter!("template_get").increment(1);
    let data = store.find_by_name(&name).await?;
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::handler;
    use crate::controller::templates::tests::data;
    use axum::extract::{Extension, Json, Path};
    use axum::http::StatusCode;
    use template_registry_store::{Store, Template};

    #[tokio::test]
    async fn success() {
        let store = Store::default();
        let expected = data(serde_json::json!({
            "type": "bar",
            "marker": { "color": "#ff0000" },
            "x": ["a", "b"],
        }));
        store
            .upsert(Template::new("chart1", expected.clone()))
            .await
            .unwrap();

        let Json(res) = handler(Extension(store), Path("chart1".into()))
            .await
            .unwrap();
        assert_eq!(res, expected);
    }

    #[tokio::test]
    async fn failure_not_found() {
        let err = handler(Extension(Store::default()), Path("chart1".into()))
            .await
            .unwrap_err();
        assert_eq!(err.code, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "template not found");
    }
}
