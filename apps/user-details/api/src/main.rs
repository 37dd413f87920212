use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let app = build_app(&config)?;

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting user details API"
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User details API shutdown complete");
    Ok(())
}

/// API routes under `/api`, docs at `/scalar` and `/health` at the root.
fn build_app(config: &Config) -> std::io::Result<Router> {
    let router = create_router::<openapi::ApiDoc>(api::routes())?;
    Ok(router.merge(health_router(config.app)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config {
            app: core_config::app_info!(),
            server: Default::default(),
            environment: config::Environment::Development,
        };
        build_app(&config).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_users_are_served_under_api_prefix() {
        let app = test_app();

        let create = Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "firstName": "John",
                    "city": "New York",
                    "phone": "1234567890",
                    "height": 180.0,
                    "married": false
                })
                .to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let list = Request::builder()
            .uri("/api/users")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(list).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await[0]["id"], 1);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let request = Request::builder()
            .uri("/nope")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_health_reports_binary_name() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["name"], "user_details_api");
    }

    #[test]
    fn test_openapi_lists_user_paths() {
        use utoipa::OpenApi;

        let doc = openapi::ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/users/{id}"));
        assert!(doc.paths.paths.contains_key("/users/search"));
    }
}
