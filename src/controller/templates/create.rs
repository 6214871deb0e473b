use crate::error::ServerError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Json};
use template_registry_store::{Store, Template, TemplateData};
use utoipa::ToSchema;

#[derive(Debug, serde::Deserialize, ToSchema)]
pub(crate) struct CreatePayload {
    #[schema(example = "chart1")]
    pub name: String,
    #[schema(value_type = Object, example = json!({ "type": "bar" }))]
    pub data: TemplateData,
}

impl From<CreatePayload> for Template {
    fn from(value: CreatePayload) -> Self {
        Template::new(value.name, value.data)
    }
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub(crate) struct CreateResponse {
    #[schema(example = "success")]
    pub status: &'static str,
    #[schema(value_type = Object, example = json!({ "name": "chart1", "data": { "type": "bar" } }))]
    pub template: Template,
}

/// Store a template
///
/// Creates the template or replaces the one already stored with the same name.
#[utoipa::path(
    operation_id = "create_template",
    post,
    path = "/templates",
    request_body(content = CreatePayload, content_type = "application/json"),
    responses(
        (status = 200, description = "The template has been stored.", body = CreateResponse),
        (status = 422, description = "The request body is malformed.", body = ServerError),
    )
)]
pub(crate) async fn handler(
    Extension(store): Extension<Store>,
    body: Result<Json<CreatePayload>, JsonRejection>,
) -> Result<Json<CreateResponse>, ServerError> {
    let Json(payload) = body?;
    let template = store.upsert(payload.into()).await?;
    metrics::counter!("template_create").increment(1);
    tracing::info!(name = %template.name, "template created");
    Ok(Json(CreateResponse {
        status: "success",
        template,
    }))
}

#[cfg(test)]
mod tests {
    use super::{handler, CreatePayload};
    use crate::controller::templates::tests::data;
    use axum::extract::{Extension, Json};
    use axum::http::StatusCode;
    use template_registry_store::Store;

    #[tokio::test]
    async fn success() {
        crate::try_init_logs();
        let store = Store::default();
        let payload = CreatePayload {
            name: "chart1".into(),
            data: data(serde_json::json!({ "type": "bar" })),
        };

        let Json(res) = handler(Extension(store.clone()), Ok(Json(payload)))
            .await
            .unwrap();
        assert_eq!(res.status, "success");
        assert_eq!(
            serde_json::to_value(&res.template).unwrap(),
            serde_json::json!({ "name": "chart1", "data": { "type": "bar" } })
        );
        assert_eq!(
            store.find_by_name("chart1").await.unwrap(),
            data(serde_json::json!({ "type": "bar" }))
        );
    }

    #[tokio::test]
    async fn success_overwriting() {
        crate::try_init_logs();
        let store = Store::default();
        for kind in ["bar", "line"] {
            let payload = CreatePayload {
                name: "chart1".into(),
                data: data(serde_json::json!({ "type": kind })),
            };
            handler(Extension(store.clone()), Ok(Json(payload)))
                .await
                .unwrap();
        }
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.find_by_name("chart1").await.unwrap(),
            data(serde_json::json!({ "type": "line" }))
        );
    }

    #[tokio::test]
    async fn failure_empty_name() {
        crate::try_init_logs();
        let store = Store::default();
        let payload = CreatePayload {
            name: String::new(),
            data: data(serde_json::json!({})),
        };

        let err = handler(Extension(store.clone()), Ok(Json(payload)))
            .await
            .unwrap_err();
        assert_eq!(err.code, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(store.is_empty().await);
    }
}
