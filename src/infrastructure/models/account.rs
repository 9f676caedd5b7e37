use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::models::account::Account;

/// One record of the persisted account document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAccount {
    pub email: String,
    pub password_hash: String,
    #[serde(serialize_with = "iso8601_millis")]
    pub timestamp: DateTime<Utc>,
}

fn iso8601_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl From<&Account> for StoredAccount {
    fn from(acc: &Account) -> Self {
        StoredAccount {
            email: acc.email.to_owned(),
            password_hash: acc.password_hash.to_owned(),
            timestamp: acc.timestamp,
        }
    }
}

impl From<StoredAccount> for Account {
    fn from(acc: StoredAccount) -> Self {
        Account {
            email: acc.email,
            password_hash: acc.password_hash,
            timestamp: acc.timestamp,
        }
    }
}
