use axum::Router;

pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes() -> Router {
    Router::new().nest("/users", users::router())
}
