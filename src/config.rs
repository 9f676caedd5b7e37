use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::domain::models::account::EmailPolicy;

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans over OTLP in addition to the JSON log output.
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    pub path: String,
    pub case_insensitive_email: bool,
}

impl StoreConfig {
    pub fn email_policy(&self) -> EmailPolicy {
        if self.case_insensitive_email {
            EmailPolicy::CaseInsensitive
        } else {
            EmailPolicy::Exact
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "credential-service".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                otlp: false,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            store: StoreConfig {
                path: "users.json".to_string(),
                case_insensitive_email: false,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}
