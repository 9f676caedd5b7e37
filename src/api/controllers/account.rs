use std::sync::Arc;

use crate::api::dto::account::CredentialsDTO;
use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Validated;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use actix_web::{HttpResponse, http::header::ContentType, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub const SIGNUP_SUCCESS: &str = "Signup successful!";
pub const LOGIN_SUCCESS: &str = "Login successful!";

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup).service(login);
}

#[utoipa::path(
    responses(
        (status = 201, description = "Account Created", body = String, content_type = "text/plain", example = json!(SIGNUP_SUCCESS)),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body(content(
        (CredentialsDTO = "application/json"),
        (CredentialsDTO = "application/x-www-form-urlencoded")
    )),
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(
    payload: Validated<CredentialsDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let credentials_dto = payload.into_inner();

    account_service.signup(credentials_dto.into()).await?;

    Ok(HttpResponse::Created()
        .content_type(ContentType::plaintext())
        .body(SIGNUP_SUCCESS))
}

#[utoipa::path(
    responses(
        (status = 200, body = String, content_type = "text/plain", example = json!(LOGIN_SUCCESS)),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body(content(
        (CredentialsDTO = "application/json"),
        (CredentialsDTO = "application/x-www-form-urlencoded")
    )),
    tag = "Account"
)]
#[post("/login")]
pub async fn login(
    payload: Validated<CredentialsDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let credentials_dto = payload.into_inner();

    account_service.login(credentials_dto.into()).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(LOGIN_SUCCESS))
}
