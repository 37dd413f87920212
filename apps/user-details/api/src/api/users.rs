use axum::Router;
use domain_user_details::{InMemoryUserRepository, UserService, handlers};

pub fn router() -> Router {
    let repository = InMemoryUserRepository::new();
    let service = UserService::new(repository);
    handlers::router(service)
}
