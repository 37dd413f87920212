use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{AppJson, AppQuery, ErrorResponse, IdPath};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserFilter, UserIdsRequest};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "users";

/// OpenAPI documentation for the user details API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_users,
        create_user,
        search_users,
        get_users_by_ids,
        get_user,
        update_user,
        delete_user,
    ),
    components(schemas(User, CreateUserRequest, UserFilter, UserIdsRequest, ErrorResponse)),
    tags(
        (name = TAG, description = "User details management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/search", get(search_users))
        .route("/batch", post(get_users_by_ids))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(shared_service)
}

/// List every user in ascending id order
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 409, description = "Identical user already exists", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    AppJson(input): AppJson<CreateUserRequest>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Search users by any combination of fields
///
/// `firstName` and `city` compare case-insensitively.
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(UserFilter),
    responses(
        (status = 200, description = "Matching users", body = Vec<User>),
        (status = 400, description = "Malformed query string", body = ErrorResponse)
    )
)]
async fn search_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    AppQuery(filter): AppQuery<UserFilter>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.search_users(filter).await?;
    Ok(Json(users))
}

/// Fetch the existing users among a list of ids
#[utoipa::path(
    post,
    path = "/batch",
    tag = TAG,
    request_body = UserIdsRequest,
    responses(
        (status = 200, description = "Existing users, unknown ids skipped", body = Vec<User>),
        (status = 400, description = "Non-positive id in the list", body = ErrorResponse)
    )
)]
async fn get_users_by_ids<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    AppJson(input): AppJson<UserIdsRequest>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.get_users_by_ids(input.ids).await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Replace the fields of an existing user
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
    AppJson(input): AppJson<CreateUserRequest>,
) -> UserResult<Json<User>> {
    let user = service
        .update_user(UpdateUserRequest::with_id(id, input))
        .await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    IdPath(id): IdPath,
) -> UserResult<impl IntoResponse> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
