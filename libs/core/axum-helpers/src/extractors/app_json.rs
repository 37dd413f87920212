//! JSON body extractor with structured rejections.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is an [`AppError`].
///
/// Domain validation is left to the handler's service layer; this only
/// guarantees the body is syntactically valid JSON of the expected shape.
///
/// # Example
/// ```ignore
/// use axum::routing::post;
/// use axum_helpers::extractors::AppJson;
///
/// async fn create(AppJson(payload): AppJson<CreateUserRequest>) -> String {
///     format!("{:?}", payload)
/// }
///
/// let app = Router::new().route("/users", post(create));
/// ```
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(data))
    }
}
