use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User, UserFilter};

/// Repository trait for user records
///
/// Every method is atomic with respect to the others. Listing methods
/// return records in ascending id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new record and return its freshly assigned id
    async fn create(&self, user: NewUser) -> UserResult<i64>;

    /// All records, or only those matching the filter
    async fn get(&self, filter: Option<UserFilter>) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<User>;

    /// The existing subset of `ids`; unknown ids are skipped
    async fn get_by_ids(&self, ids: Vec<i64>) -> UserResult<Vec<User>>;

    /// Insert or replace the record at `user.id`
    async fn update(&self, user: User) -> UserResult<()>;

    /// Remove a record; a missing id is a no-op
    async fn delete(&self, id: i64) -> UserResult<()>;
}

#[derive(Debug, Default)]
struct UserTable {
    users: HashMap<i64, User>,
    last_inserted_id: i64,
}

/// In-memory implementation of UserRepository
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by_id(mut users: Vec<User>) -> Vec<User> {
    users.sort_by_key(|u| u.id);
    users
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<i64> {
        let mut table = self.table.write().await;

        table.last_inserted_id += 1;
        let id = table.last_inserted_id;
        table.users.insert(id, user.into_user(id));

        tracing::info!(user_id = id, "Created user");
        Ok(id)
    }

    async fn get(&self, filter: Option<UserFilter>) -> UserResult<Vec<User>> {
        let table = self.table.read().await;

        let users = match filter {
            Some(filter) => table
                .users
                .values()
                .filter(|u| filter.matches(u))
                .cloned()
                .collect(),
            None => table.users.values().cloned().collect(),
        };

        Ok(sorted_by_id(users))
    }

    async fn get_by_id(&self, id: i64) -> UserResult<User> {
        let table = self.table.read().await;
        table.users.get(&id).cloned().ok_or(UserError::NotFound(id))
    }

    async fn get_by_ids(&self, ids: Vec<i64>) -> UserResult<Vec<User>> {
        let table = self.table.read().await;

        // BTreeSet dedups and yields ascending ids
        let users = ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|id| table.users.get(&id).cloned())
            .collect();

        Ok(users)
    }

    async fn update(&self, user: User) -> UserResult<()> {
        let mut table = self.table.write().await;

        tracing::info!(user_id = user.id, "Updated user");
        table.users.insert(user.id, user);
        Ok(())
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let mut table = self.table.write().await;

        if table.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(())
    }
}
