use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, Credentials};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn signup(&self, credentials: Credentials) -> AppResult<Account>;
    async fn login(&self, credentials: Credentials) -> AppResult<Account>;
}
