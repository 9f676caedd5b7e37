use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    pub password_hash: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// How emails are compared when looking up or creating accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailPolicy {
    /// Byte-for-byte comparison.
    #[default]
    Exact,
    /// Surrounding whitespace is trimmed and the address is lowercased.
    CaseInsensitive,
}

impl EmailPolicy {
    pub fn normalize(self, email: &str) -> String {
        match self {
            Self::Exact => email.to_owned(),
            Self::CaseInsensitive => email.trim().to_lowercase(),
        }
    }
}
