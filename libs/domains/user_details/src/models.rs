use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Stored user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier, positive and never reused
    pub id: i64,
    pub first_name: String,
    pub city: String,
    /// At least 10 characters
    pub phone: String,
    /// Strictly positive
    pub height: f64,
    pub married: bool,
}

/// The mutable fields of a user, all present and validated
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub city: String,
    pub phone: String,
    pub height: f64,
    pub married: bool,
}

impl NewUser {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            city: self.city,
            phone: self.phone,
            height: self.height,
            married: self.married,
        }
    }
}

/// DTO for creating a user; absent and `null` fields are both `None`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub height: Option<f64>,
    pub married: Option<bool>,
}

/// DTO for replacing the mutable fields of an existing user
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub height: Option<f64>,
    pub married: Option<bool>,
}

impl UpdateUserRequest {
    /// Combine a path id with a body carrying the five mutable fields.
    pub fn with_id(id: i64, body: CreateUserRequest) -> Self {
        Self {
            id: Some(id),
            first_name: body.first_name,
            city: body.city,
            phone: body.phone,
            height: body.height,
            married: body.married,
        }
    }
}

/// Search predicate; every absent field matches anything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    /// Case-insensitive match
    pub first_name: Option<String>,
    /// Case-insensitive match
    pub city: Option<String>,
    pub phone: Option<String>,
    pub height: Option<f64>,
    pub married: Option<bool>,
}

impl UserFilter {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.city.is_none()
            && self.phone.is_none()
            && self.height.is_none()
            && self.married.is_none()
    }

    pub fn matches(&self, user: &User) -> bool {
        if let Some(ref first_name) = self.first_name {
            if first_name.to_lowercase() != user.first_name.to_lowercase() {
                return false;
            }
        }
        if let Some(ref city) = self.city {
            if city.to_lowercase() != user.city.to_lowercase() {
                return false;
            }
        }
        if let Some(ref phone) = self.phone {
            if *phone != user.phone {
                return false;
            }
        }
        if let Some(height) = self.height {
            if height != user.height {
                return false;
            }
        }
        if let Some(married) = self.married {
            if married != user.married {
                return false;
            }
        }
        true
    }
}

/// Duplicate detection compares all five fields.
impl From<&NewUser> for UserFilter {
    fn from(user: &NewUser) -> Self {
        Self {
            first_name: Some(user.first_name.clone()),
            city: Some(user.city.clone()),
            phone: Some(user.phone.clone()),
            height: Some(user.height),
            married: Some(user.married),
        }
    }
}

/// Body of a batch lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserIdsRequest {
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> User {
        User {
            id: 1,
            first_name: "John".to_string(),
            city: "New York".to_string(),
            phone: "1234567890".to_string(),
            height: 180.0,
            married: false,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = UserFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&john()));
    }

    #[test]
    fn test_names_match_case_insensitively() {
        let filter = UserFilter {
            first_name: Some("JOHN".to_string()),
            city: Some("new york".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&john()));
    }

    #[test]
    fn test_phone_height_married_match_exactly() {
        let user = john();

        let phone = UserFilter {
            phone: Some("1234567891".to_string()),
            ..Default::default()
        };
        assert!(!phone.matches(&user));

        let height = UserFilter {
            height: Some(180.5),
            ..Default::default()
        };
        assert!(!height.matches(&user));

        let married = UserFilter {
            married: Some(true),
            ..Default::default()
        };
        assert!(!married.matches(&user));
    }

    #[test]
    fn test_request_null_is_absent() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"firstName":null,"city":"Paris","height":0.0}"#).unwrap();
        assert!(request.first_name.is_none());
        assert_eq!(request.city.as_deref(), Some("Paris"));
        assert_eq!(request.height, Some(0.0));
        assert!(request.married.is_none());
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["id"], 1);
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_update_request_takes_path_id() {
        let body = CreateUserRequest {
            city: Some("Oslo".to_string()),
            ..Default::default()
        };
        let request = UpdateUserRequest::with_id(4, body);
        assert_eq!(request.id, Some(4));
        assert_eq!(request.city.as_deref(), Some("Oslo"));
        assert!(request.phone.is_none());
    }
}
