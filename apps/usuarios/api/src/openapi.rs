use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse, axum_helpers::HealthResponse)),
    info(
        title = "Usuarios API",
        version = "0.1.0",
        description = "User registry: register users and list them"
    ),
    servers(
        (url = "/api/v1", description = "API base path")
    )
)]
struct BaseDoc;

/// Service-wide OpenAPI document: the base info plus every domain's paths.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = BaseDoc::openapi();
        doc.merge(domain_users::ApiDoc::openapi());
        doc
    }
}
