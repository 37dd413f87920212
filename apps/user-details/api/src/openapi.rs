use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Details API",
        version = "0.1.0",
        description = "Create, read, update, delete and search user records"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/users", api = domain_user_details::ApiDoc)
    )
)]
pub struct ApiDoc;
