use actix_web::error::BlockingError;
use thiserror::Error;

use crate::infrastructure::stores::json_file::StoreError;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("account `{0}` already exists")]
    Duplicate(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Blocking(#[from] BlockingError),
}
