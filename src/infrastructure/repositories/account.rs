use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::account::Account;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::StoredAccount;
use crate::infrastructure::stores::json_file::{JsonFileStore, StoreError};

/// Account table held in memory and flushed wholesale to a [`JsonFileStore`].
///
/// Writers hold the write lock across duplicate check, flush and commit, so two
/// concurrent signups can never overwrite each other's records. The guard is
/// owned by the blocking flush, so dropping the calling future cannot release
/// it before the commit.
pub struct AccountRepositoryImpl {
    store: Arc<JsonFileStore>,
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl AccountRepositoryImpl {
    pub fn open(store: JsonFileStore) -> Self {
        let accounts: Vec<Account> = store.load().into_iter().map(Into::into).collect();

        tracing::info!(
            path = %store.path().display(),
            accounts = accounts.len(),
            "credential store loaded"
        );

        Self {
            store: Arc::new(store),
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn is_account(&self, email: &str) -> RepositoryResult<bool> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().any(|a| a.email == email))
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn insert(&self, account: Account) -> RepositoryResult<Account> {
        let mut accounts = Arc::clone(&self.accounts).write_owned().await;

        if accounts.iter().any(|a| a.email == account.email) {
            return Err(RepositoryError::Duplicate(account.email));
        }

        let mut snapshot: Vec<StoredAccount> = accounts.iter().map(StoredAccount::from).collect();
        snapshot.push(StoredAccount::from(&account));

        let store = Arc::clone(&self.store);
        let account = web::block(move || {
            store.save(&snapshot)?;
            accounts.push(account.clone());
            Ok::<_, StoreError>(account)
        })
        .await??;

        Ok(account)
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;

    pub struct AccountRepositoryImpl {
        pub accounts: Mutex<Vec<Account>>,
    }

    #[async_trait]
    impl AccountRepository for AccountRepositoryImpl {
        async fn is_account(&self, email: &str) -> RepositoryResult<bool> {
            let accounts = self.accounts.lock().await;
            Ok(accounts.iter().any(|a| a.email == email))
        }

        async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
            let accounts = self.accounts.lock().await;
            Ok(accounts.iter().find(|a| a.email == email).cloned())
        }

        async fn insert(&self, account: Account) -> RepositoryResult<Account> {
            let mut accounts = self.accounts.lock().await;

            if accounts.iter().any(|a| a.email == account.email) {
                return Err(RepositoryError::Duplicate(account.email));
            }

            accounts.push(account.clone());

            Ok(account)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::Utc;
    use futures::FutureExt;
    use futures::future::join_all;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    fn account(email: &str) -> Account {
        Account {
            email: email.to_string(),
            password_hash: format!("hash-of-{email}"),
            timestamp: Utc::now(),
        }
    }

    #[fixture]
    fn dir() -> TempDir {
        TempDir::new().unwrap()
    }

    #[rstest]
    #[actix_web::test]
    async fn test_insert_persists_and_reopens(dir: TempDir) {
        let path = dir.path().join("users.json");
        let repository = AccountRepositoryImpl::open(JsonFileStore::new(&path));

        repository.insert(account("a@x.com")).await.unwrap();

        let reopened = AccountRepositoryImpl::open(JsonFileStore::new(&path));
        let found = reopened.find_by_email("a@x.com").await.unwrap().unwrap();

        assert_eq!(found.password_hash, "hash-of-a@x.com");
        assert!(reopened.is_account("a@x.com").await.unwrap());
        assert!(!reopened.is_account("A@x.com").await.unwrap());
    }

    #[rstest]
    #[actix_web::test]
    async fn test_duplicate_insert_is_rejected(dir: TempDir) {
        let store = JsonFileStore::new(dir.path().join("users.json"));
        let repository = AccountRepositoryImpl::open(store.clone());

        repository.insert(account("a@x.com")).await.unwrap();
        let result = repository.insert(account("a@x.com")).await;

        assert!(matches!(result, Err(RepositoryError::Duplicate(email)) if email == "a@x.com"));
        assert_eq!(store.load().len(), 1);
    }

    #[rstest]
    #[actix_web::test]
    async fn test_failed_flush_leaves_table_untouched(dir: TempDir) {
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let repository = AccountRepositoryImpl::open(JsonFileStore::new(blocker.join("users.json")));

        let result = repository.insert(account("a@x.com")).await;

        assert!(matches!(result, Err(RepositoryError::Store(_))));
        assert!(!repository.is_account("a@x.com").await.unwrap());
    }

    #[rstest]
    #[actix_web::test]
    async fn test_concurrent_inserts_are_all_kept(dir: TempDir) {
        let store = JsonFileStore::new(dir.path().join("users.json"));
        let repository = AccountRepositoryImpl::open(store.clone());

        let emails: Vec<String> = (0..16).map(|i| format!("user{i}@x.com")).collect();
        let results = join_all(emails.iter().map(|email| repository.insert(account(email)))).await;

        assert!(results.iter().all(Result::is_ok));

        let mut persisted: Vec<String> = store.load().into_iter().map(|a| a.email).collect();
        persisted.sort();
        let mut expected = emails.clone();
        expected.sort();

        assert_eq!(persisted, expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn test_dropped_insert_still_commits(dir: TempDir) {
        let store = JsonFileStore::new(dir.path().join("users.json"));
        let repository = AccountRepositoryImpl::open(store.clone());

        // One poll takes the lock and hands the flush to the blocking pool.
        let _ = repository.insert(account("a@x.com")).now_or_never();

        repository.insert(account("b@x.com")).await.unwrap();

        let mut persisted: Vec<String> = store.load().into_iter().map(|a| a.email).collect();
        persisted.sort();

        assert_eq!(persisted, ["a@x.com", "b@x.com"]);
        assert!(repository.is_account("a@x.com").await.unwrap());
        assert!(matches!(
            repository.insert(account("a@x.com")).await,
            Err(RepositoryError::Duplicate(_))
        ));
    }
}
