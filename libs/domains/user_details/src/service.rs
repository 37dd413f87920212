use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserFilter};
use crate::repository::UserRepository;
use crate::validation::{validate_create, validate_update};

/// Service layer sequencing validation, duplicate detection and storage
///
/// Create, update and delete each read the store before writing to it.
/// They hold `writes` for their whole sequence, so no other write can land
/// between the check and the write. Reads never take it.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    writes: Arc<Mutex<()>>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Validate, reject exact duplicates, store, and return the stored record
    pub async fn create_user(&self, input: CreateUserRequest) -> UserResult<User> {
        let new_user = validate_create(input)?;

        let _guard = self.writes.lock().await;

        let existing = self
            .repository
            .get(Some(UserFilter::from(&new_user)))
            .await?;
        if let Some(first) = existing.first() {
            tracing::info!(existing_id = first.id, "Rejected duplicate user");
            return Err(UserError::AlreadyExists);
        }

        let id = self.repository.create(new_user).await?;
        self.repository.get_by_id(id).await
    }

    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.get(None).await
    }

    /// An empty filter lists everything.
    pub async fn search_users(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        if filter.is_empty() {
            return self.repository.get(None).await;
        }
        self.repository.get(Some(filter)).await
    }

    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        ensure_positive_id(id)?;
        self.repository.get_by_id(id).await
    }

    pub async fn get_users_by_ids(&self, ids: Vec<i64>) -> UserResult<Vec<User>> {
        if ids.iter().any(|&id| id <= 0) {
            return Err(UserError::invalid(["ids"]));
        }
        self.repository.get_by_ids(ids).await
    }

    /// Replace all mutable fields of an existing user
    pub async fn update_user(&self, input: UpdateUserRequest) -> UserResult<User> {
        let (id, fields) = validate_update(input)?;

        let _guard = self.writes.lock().await;

        // Propagates NotFound before anything is written
        self.repository.get_by_id(id).await.inspect_err(|_| {
            tracing::debug!(user_id = id, "Update of unknown user");
        })?;

        self.repository.update(fields.into_user(id)).await?;
        self.repository.get_by_id(id).await
    }

    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        ensure_positive_id(id)?;

        let _guard = self.writes.lock().await;

        self.repository.get_by_id(id).await.inspect_err(|_| {
            tracing::debug!(user_id = id, "Delete of unknown user");
        })?;

        self.repository.delete(id).await
    }
}

fn ensure_positive_id(id: i64) -> UserResult<()> {
    if id <= 0 {
        return Err(UserError::invalid(["id"]));
    }
    Ok(())
}
