//! Shared test utilities for domain testing
//!
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let first_name = builder.name("user", "main");
//! let phone = builder.phone();
//! assert_eq!(phone.len(), 10);
//! ```

const CITIES: [&str; 6] = ["New York", "Boston", "Chicago", "Denver", "Seattle", "Austin"];

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Arguments
    ///
    /// * `prefix` - The kind of value (e.g., "user", "city")
    /// * `suffix` - A unique identifier within the test (e.g., "main", "other")
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(12345);
    /// assert_eq!(builder.name("user", "main"), "test-user-12345-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A city picked from a fixed list
    pub fn city(&self) -> String {
        CITIES[(self.seed % CITIES.len() as u64) as usize].to_string()
    }

    /// A 10-digit phone number
    pub fn phone(&self) -> String {
        format!("{:010}", self.seed % 10_000_000_000)
    }

    /// A height between 150.0 and 199.5 in half steps
    pub fn height(&self) -> f64 {
        150.0 + (self.seed % 100) as f64 * 0.5
    }
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Assert that ids are strictly increasing with a nice error message
    pub fn assert_ascending(ids: &[i64], context: &str) {
        assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "{}: expected strictly ascending ids, got {:?}",
            context,
            ids
        );
    }

    /// Assert that an error body lists exactly `expected` under `details.fields`
    pub fn assert_error_fields(body: &Value, expected: &[&str], context: &str) {
        let fields: Vec<&str> = body["details"]["fields"]
            .as_array()
            .unwrap_or_else(|| panic!("{}: no details.fields in {}", context, body))
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(fields, expected, "{}: unexpected error fields", context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.phone(), builder2.phone());
        assert_eq!(builder1.name("user", "test"), builder2.name("user", "test"));
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.name("user", "a"), builder2.name("user", "a"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.name("user", "a"), builder2.name("user", "a"));
    }

    #[test]
    fn test_generated_values_are_valid_user_fields() {
        for seed in [0, 7, 9_999_999_999, u64::MAX] {
            let builder = TestDataBuilder::new(seed);
            assert_eq!(builder.phone().chars().count(), 10);
            assert!(builder.height() > 0.0);
            assert!(!builder.city().is_empty());
        }
    }

    #[test]
    fn test_assert_error_fields() {
        let body = serde_json::json!({ "details": { "fields": ["firstName", "height"] } });
        assertions::assert_error_fields(&body, &["firstName", "height"], "missing");
    }
}
