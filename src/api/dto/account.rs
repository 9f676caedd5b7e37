use crate::domain::models::account::Credentials;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Body of both `/signup` and `/login`.
///
/// Absent fields deserialize as empty strings so that a missing field and an
/// empty one are reported the same way.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct CredentialsDTO {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use rstest::*;
    use serde_json::{Value, json};

    fn validation_message(dto: CredentialsDTO) -> Value {
        let error: AppError = dto.validate().unwrap_err().into();

        assert_eq!(error.code, 400);

        serde_json::from_str(&error.message).unwrap()
    }

    #[rstest]
    #[case::both("", "", json!({ "email": "Email is required", "password": "Password is required" }))]
    #[case::email("", "pw1", json!({ "email": "Email is required" }))]
    #[case::password("a@x.com", "", json!({ "password": "Password is required" }))]
    fn test_validation_messages(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: Value,
    ) {
        let dto = CredentialsDTO {
            email: email.to_string(),
            password: password.to_string(),
        };

        assert_eq!(validation_message(dto), expected);
    }

    #[test]
    fn test_absent_fields_default_to_empty() {
        let dto: CredentialsDTO = serde_json::from_str("{}").unwrap();

        assert_eq!(
            validation_message(dto),
            json!({ "email": "Email is required", "password": "Password is required" })
        );
    }
}
