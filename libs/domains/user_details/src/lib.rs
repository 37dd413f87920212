//! User Details Domain
//!
//! CRUD and search over user records held in an in-memory store.
//!
//! # Features
//!
//! - Store-assigned, strictly increasing ids that are never reused
//! - Two-phase request validation (missing fields, then invalid fields)
//! - Duplicate rejection on an exact five-field match
//! - Filtered search with case-insensitive name and city matching
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, duplicate detection, id guards
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Records, request DTOs, filters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_user_details::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateUserRequest, NewUser, UpdateUserRequest, User, UserFilter, UserIdsRequest,
};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
