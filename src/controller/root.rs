use axum::extract::Json;

#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub(crate) struct RootResponse {
    #[schema(example = "running")]
    pub status: &'static str,
}

/// Check that the registry is up
#[utoipa::path(
    operation_id = "root",
    get,
    path = "/",
    responses(
        (status = 200, description = "The registry is running.", body = RootResponse),
    )
)]
pub(super) async fn handler() -> Json<RootResponse> {
    Json(RootResponse { status: "running" })
}
