//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserChange, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage of user aggregates, including their recipe collection,
/// favourites and weekly menu.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert or replace the whole aggregate.
    async fn save(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Apply `change` to the stored user while holding it exclusively.
    ///
    /// Returns `None` when the user does not exist, otherwise the outcome
    /// reported by [`User::apply`].
    async fn apply(
        &self,
        id: &UserId,
        change: UserChange,
    ) -> Result<Option<bool>, UserPersistenceError>;
}
