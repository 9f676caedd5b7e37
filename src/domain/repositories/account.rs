use async_trait::async_trait;

use crate::domain::models::account::Account;

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn is_account(&self, email: &str) -> RepositoryResult<bool>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>>;
    /// Appends `account` and flushes the whole table.
    ///
    /// Fails with [`RepositoryError::Duplicate`](super::repository::RepositoryError::Duplicate)
    /// when the email is already taken; the table is unchanged on any error.
    async fn insert(&self, account: Account) -> RepositoryResult<Account>;
}
