use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::metrics::handler,
        super::root::handler,
        super::status::handler,
        super::templates::create::handler,
        super::templates::delete::handler,
        super::templates::get::handler,
        super::templates::list::handler,
    ),
    components(schemas(
        crate::error::ServerError,
        super::root::RootResponse,
        super::templates::Acknowledgment,
        super::templates::create::CreatePayload,
        super::templates::create::CreateResponse,
    ))
)]
pub(crate) struct ApiDoc;

pub(crate) fn service() -> SwaggerUi {
    SwaggerUi::new("/swagger").url("/openapi.json", ApiDoc::openapi())
}
