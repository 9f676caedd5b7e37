use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult, message},
    models::account::{Account, Credentials, EmailPolicy},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Result, SaltString, rand_core::OsRng,
    },
};

use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
    email_policy: EmailPolicy,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>, email_policy: EmailPolicy) -> Self {
        Self {
            repository,
            email_policy,
        }
    }

    fn normalize_email(&self, email: &str) -> AppResult<String> {
        let email = self.email_policy.normalize(email);

        if email.is_empty() {
            return Err(AppError::BadRequest(message::REQUIRED_FIELDS));
        }

        Ok(email)
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn signup(&self, credentials: Credentials) -> AppResult<Account> {
        let email = self.normalize_email(&credentials.email)?;

        if self.repository.is_account(&email).await? {
            return Err(AppError::Conflict());
        }

        let password = credentials.password;
        let password_hash = web::block(move || encrypt_password(&password)).await??;

        let account = Account {
            email,
            password_hash,
            timestamp: Utc::now(),
        };

        let account = self.repository.insert(account).await?;

        tracing::info!(email = %account.email, "New user signed up");

        Ok(account)
    }

    async fn login(&self, credentials: Credentials) -> AppResult<Account> {
        let email = self.normalize_email(&credentials.email)?;

        let account = match self.repository.find_by_email(&email).await? {
            Some(account) => account,
            None => return Err(AppError::NotFound()),
        };

        let password = credentials.password;
        let hash = account.password_hash.clone();
        web::block(move || verify_password(&password, &hash)).await??;

        tracing::info!(email = %account.email, "User logged in");

        Ok(account)
    }
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    let argon2 = Argon2::default();
    let hash = PasswordHash::new(hash);

    argon2.verify_password(password.as_bytes(), &hash?)
}
