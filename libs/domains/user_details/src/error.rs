use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UserError {
    /// Required fields absent from the request, in declaration order.
    #[error("{}", field_list_message("Missing", .0))]
    MissingFields(Vec<String>),

    /// Present fields that failed their check, in check order.
    #[error("{}", field_list_message("Invalid", .0))]
    InvalidFields(Vec<String>),

    #[error("user already exists with given combination")]
    AlreadyExists,

    /// Carries the looked-up id; 0 when the id is unknown.
    #[error("{}", not_found_message(*.0))]
    NotFound(i64),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn missing<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UserError::MissingFields(fields.into_iter().map(Into::into).collect())
    }

    pub fn invalid<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UserError::InvalidFields(fields.into_iter().map(Into::into).collect())
    }
}

fn field_list_message(kind: &str, fields: &[String]) -> String {
    match fields.len() {
        0 => format!("{} Params", kind),
        1 => format!("{} Param: {}", kind, fields[0]),
        _ => format!("{} Params: {}", kind, fields.join(", ")),
    }
}

fn not_found_message(id: i64) -> String {
    if id == 0 {
        "user not found".to_string()
    } else {
        format!("user with ID {} not found", id)
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::MissingFields(fields) | UserError::InvalidFields(fields) => {
                AppError::Validation {
                    message,
                    details: Some(json!({ "fields": fields })),
                }
            }
            UserError::AlreadyExists => AppError::Conflict(message),
            UserError::NotFound(_) => AppError::NotFound(message),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_missing_fields_message() {
        assert_eq!(UserError::missing(Vec::<String>::new()).to_string(), "Missing Params");
        assert_eq!(UserError::missing(["city"]).to_string(), "Missing Param: city");
        assert_eq!(
            UserError::missing(["firstName", "height"]).to_string(),
            "Missing Params: firstName, height"
        );
    }

    #[test]
    fn test_invalid_fields_message() {
        assert_eq!(UserError::invalid(["id"]).to_string(), "Invalid Param: id");
        assert_eq!(
            UserError::invalid(["phone", "height"]).to_string(),
            "Invalid Params: phone, height"
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(UserError::NotFound(0).to_string(), "user not found");
        assert_eq!(UserError::NotFound(7).to_string(), "user with ID 7 not found");
    }

    #[test]
    fn test_already_exists_message() {
        assert_eq!(
            UserError::AlreadyExists.to_string(),
            "user already exists with given combination"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            UserError::missing(["city"]).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            UserError::invalid(["phone"]).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(UserError::AlreadyExists.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(UserError::NotFound(3).into_response().status(), StatusCode::NOT_FOUND);
    }
}
