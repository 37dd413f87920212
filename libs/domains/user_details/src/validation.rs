//! Two-phase request validation.
//!
//! The missing pass runs first and reports every absent required field. Only
//! a request with nothing missing reaches the invalid pass, which reports
//! every present field that fails its check. Field names use the wire
//! spelling and keep declaration order.

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserRequest, NewUser, UpdateUserRequest};

pub const MIN_PHONE_LEN: usize = 10;

/// Run both passes and build the validated user.
pub fn validate_create(request: CreateUserRequest) -> UserResult<NewUser> {
    validate_missing(&request.missing_fields())?;
    validate_invalid(&request.invalid_fields())?;
    request.into_new_user()
}

/// Run both passes and split the request into its id and validated fields.
pub fn validate_update(request: UpdateUserRequest) -> UserResult<(i64, NewUser)> {
    validate_missing(&request.missing_fields())?;
    validate_invalid(&request.invalid_fields())?;
    let id = request.id.ok_or_else(|| UserError::missing(["id"]))?;
    let user = request.into_new_user()?;
    Ok((id, user))
}

pub fn validate_missing(fields: &[&'static str]) -> UserResult<()> {
    if fields.is_empty() {
        Ok(())
    } else {
        Err(UserError::missing(fields.iter().copied()))
    }
}

pub fn validate_invalid(fields: &[&'static str]) -> UserResult<()> {
    if fields.is_empty() {
        Ok(())
    } else {
        Err(UserError::invalid(fields.iter().copied()))
    }
}

/// Borrowed view of the five mutable fields shared by both request kinds
struct FieldRefs<'a> {
    first_name: Option<&'a str>,
    city: Option<&'a str>,
    phone: Option<&'a str>,
    height: Option<f64>,
    married: Option<bool>,
}

impl FieldRefs<'_> {
    fn missing(&self, missing: &mut Vec<&'static str>) {
        if self.first_name.is_none() {
            missing.push("firstName");
        }
        if self.city.is_none() {
            missing.push("city");
        }
        if self.phone.is_none() {
            missing.push("phone");
        }
        if self.height.is_none() {
            missing.push("height");
        }
        if self.married.is_none() {
            missing.push("married");
        }
    }

    fn invalid(&self, invalid: &mut Vec<&'static str>) {
        if self
            .phone
            .is_some_and(|p| p.chars().count() < MIN_PHONE_LEN)
        {
            invalid.push("phone");
        }
        if self.height.is_some_and(|h| h.is_nan() || h <= 0.0) {
            invalid.push("height");
        }
    }
}

impl CreateUserRequest {
    fn field_refs(&self) -> FieldRefs<'_> {
        FieldRefs {
            first_name: self.first_name.as_deref(),
            city: self.city.as_deref(),
            phone: self.phone.as_deref(),
            height: self.height,
            married: self.married,
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        self.field_refs().missing(&mut missing);
        missing
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let mut invalid = Vec::new();
        self.field_refs().invalid(&mut invalid);
        invalid
    }

    /// Consume a request whose fields are all present.
    pub fn into_new_user(self) -> UserResult<NewUser> {
        let missing = self.missing_fields();
        match (
            self.first_name,
            self.city,
            self.phone,
            self.height,
            self.married,
        ) {
            (Some(first_name), Some(city), Some(phone), Some(height), Some(married)) => {
                Ok(NewUser {
                    first_name,
                    city,
                    phone,
                    height,
                    married,
                })
            }
            _ => Err(UserError::missing(missing)),
        }
    }
}

impl UpdateUserRequest {
    fn field_refs(&self) -> FieldRefs<'_> {
        FieldRefs {
            first_name: self.first_name.as_deref(),
            city: self.city.as_deref(),
            phone: self.phone.as_deref(),
            height: self.height,
            married: self.married,
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push("id");
        }
        self.field_refs().missing(&mut missing);
        missing
    }

    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let mut invalid = Vec::new();
        if self.id.is_some_and(|id| id <= 0) {
            invalid.push("id");
        }
        self.field_refs().invalid(&mut invalid);
        invalid
    }

    pub fn into_new_user(self) -> UserResult<NewUser> {
        CreateUserRequest {
            first_name: self.first_name,
            city: self.city,
            phone: self.phone,
            height: self.height,
            married: self.married,
        }
        .into_new_user()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_create() -> CreateUserRequest {
        CreateUserRequest {
            first_name: Some("John".to_string()),
            city: Some("New York".to_string()),
            phone: Some("1234567890".to_string()),
            height: Some(180.0),
            married: Some(false),
        }
    }

    fn complete_update() -> UpdateUserRequest {
        UpdateUserRequest::with_id(1, complete_create())
    }

    #[test]
    fn test_missing_reports_exactly_the_absent_fields() {
        let request = CreateUserRequest {
            first_name: None,
            height: None,
            ..complete_create()
        };

        let err = validate_create(request).unwrap_err();
        assert_eq!(err, UserError::missing(["firstName", "height"]));
    }

    #[test]
    fn test_missing_lists_all_fields_in_declaration_order() {
        let err = validate_create(CreateUserRequest::default()).unwrap_err();
        assert_eq!(
            err,
            UserError::missing(["firstName", "city", "phone", "height", "married"])
        );
    }

    #[test]
    fn test_missing_runs_before_invalid() {
        let request = CreateUserRequest {
            phone: Some("123".to_string()),
            married: None,
            ..complete_create()
        };

        let err = validate_create(request).unwrap_err();
        assert_eq!(err, UserError::missing(["married"]));
    }

    #[test]
    fn test_invalid_collects_phone_and_height() {
        let request = CreateUserRequest {
            phone: Some("123456789".to_string()),
            height: Some(0.0),
            ..complete_create()
        };

        let err = validate_create(request).unwrap_err();
        assert_eq!(err, UserError::invalid(["phone", "height"]));
    }

    #[test]
    fn test_phone_length_counts_characters() {
        let request = CreateUserRequest {
            phone: Some("ééééééééé".to_string()),
            ..complete_create()
        };
        assert_eq!(request.invalid_fields(), vec!["phone"]);

        let request = CreateUserRequest {
            phone: Some("éééééééééé".to_string()),
            ..complete_create()
        };
        assert!(request.invalid_fields().is_empty());
    }

    #[test]
    fn test_negative_height_is_invalid() {
        let request = CreateUserRequest {
            height: Some(-1.5),
            ..complete_create()
        };
        assert_eq!(request.invalid_fields(), vec!["height"]);
    }

    #[test]
    fn test_empty_strings_are_present() {
        let request = CreateUserRequest {
            first_name: Some(String::new()),
            city: Some(String::new()),
            ..complete_create()
        };

        let user = validate_create(request).unwrap();
        assert_eq!(user.first_name, "");
        assert_eq!(user.city, "");
    }

    #[test]
    fn test_valid_create_builds_new_user() {
        let user = validate_create(complete_create()).unwrap();
        assert_eq!(user.first_name, "John");
        assert_eq!(user.city, "New York");
        assert_eq!(user.phone, "1234567890");
        assert_eq!(user.height, 180.0);
        assert!(!user.married);
    }

    #[test]
    fn test_update_requires_id_first() {
        let request = UpdateUserRequest {
            id: None,
            city: None,
            ..complete_update()
        };

        let err = validate_update(request).unwrap_err();
        assert_eq!(err, UserError::missing(["id", "city"]));
    }

    #[test]
    fn test_update_invalid_order_is_id_phone_height() {
        let request = UpdateUserRequest {
            id: Some(0),
            phone: Some("short".to_string()),
            height: Some(-3.0),
            ..complete_update()
        };

        let err = validate_update(request).unwrap_err();
        assert_eq!(err, UserError::invalid(["id", "phone", "height"]));
    }

    #[test]
    fn test_valid_update_splits_id() {
        let (id, user) = validate_update(complete_update()).unwrap();
        assert_eq!(id, 1);
        assert_eq!(user.first_name, "John");
    }

    #[test]
    fn test_into_new_user_reports_missing_without_panicking() {
        let request = CreateUserRequest {
            married: None,
            ..complete_create()
        };
        assert_eq!(
            request.into_new_user().unwrap_err(),
            UserError::missing(["married"])
        );
    }
}
