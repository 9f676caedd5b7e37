use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::{BlockingError, JsonPayloadError, UrlencodedError};

use validator::ValidationErrors;

use serde::Serialize;
use utoipa::ToSchema;

use serde_json::{Map, Value, to_string};

use argon2::password_hash::errors::Error::{self as Argon2Error, Password};

use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                message: message.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };

    ($name:ident, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                message: $default.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };
}

#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    pub message: String,
    pub code: u16,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static CONFLICT: &str = "User with this email already exists.";
    pub static NOT_FOUND: &str = "User not found.";
    pub static INVALID_PASSWORD: &str = "Invalid password.";
    pub static REQUIRED_FIELDS: &str = "Email and password are required.";
    pub static INTERNAL_ERROR: &str = "The server encountered an unexpected condition that prevented it from fulfilling the request";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(BadRequest, StatusCode::BAD_REQUEST);

    // 2. Errors with Default Message
    static_error!(Conflict, StatusCode::CONFLICT, message::CONFLICT);
    static_error!(NotFound, StatusCode::NOT_FOUND, message::NOT_FOUND);
    static_error!(Unauthorized, StatusCode::UNAUTHORIZED, message::INVALID_PASSWORD);
    static_error!(InternalError, StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR);

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            code: self.code,
            message: self.message,
            trace: Some(message.to_owned()),
        }
    }

    pub fn example_500() -> AppError {
        AppError::InternalError()
    }

    pub fn example_401() -> AppError {
        AppError::Unauthorized()
    }

    pub fn example_404() -> AppError {
        AppError::NotFound()
    }

    pub fn example_400() -> AppError {
        AppError::BadRequest(r#"{"email":"Email is required"}"#)
    }

    pub fn example_409() -> AppError {
        AppError::Conflict()
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        if let Some(trace) = &self.trace {
            tracing::error!(code = self.code, trace = %trace, "request failed");
        }

        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Duplicate(_) => AppError::Conflict(),
            _ => AppError::InternalError().trace(&error.to_string()),
        }
    }
}

impl From<Argon2Error> for AppError {
    fn from(error: Argon2Error) -> Self {
        match error {
            Password => AppError::Unauthorized(),
            _ => AppError::InternalError().trace(&error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let map: Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors
                    .iter()
                    .map(move |error| (field.to_string(), Value::String(error.to_string())))
            })
            .collect();

        match to_string(&map) {
            Ok(message) => AppError::BadRequest(message),
            Err(_) => AppError::BadRequest(message::REQUIRED_FIELDS),
        }
    }
}

impl From<BlockingError> for AppError {
    fn from(error: BlockingError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

impl From<UrlencodedError> for AppError {
    fn from(error: UrlencodedError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::stores::json_file::StoreError;

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let error: AppError = RepositoryError::Duplicate("a@x.com".to_string()).into();

        assert_eq!(error, AppError::Conflict());
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_storage_failure_is_internal_with_trace() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let error: AppError = RepositoryError::Store(StoreError::Io(io)).into();

        assert_eq!(error.code, 500);
        assert_eq!(error.message, message::INTERNAL_ERROR);
        assert!(error.trace.unwrap().contains("read-only"));
    }

    #[test]
    fn test_password_mismatch_is_unauthorized() {
        let error: AppError = Password.into();

        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.message, "Invalid password.");
    }
}
