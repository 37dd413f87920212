//! Custom extractors for Axum handlers.
//!
//! These wrap the stock axum extractors so that every rejection renders
//! as the standard [`ErrorResponse`](crate::errors::ErrorResponse) body.

pub mod app_json;
pub mod app_query;
pub mod id_path;

pub use app_json::AppJson;
pub use app_query::AppQuery;
pub use id_path::IdPath;
