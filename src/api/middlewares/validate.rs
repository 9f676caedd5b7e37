use core::fmt::Debug;
use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::dev::{JsonBody, Payload, UrlEncoded};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

const PAYLOAD_LIMIT: usize = 32768;

/// Request body decoded from JSON or an URL-encoded form, then validated.
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Validated<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

fn validate<T: Validate>(payload: T) -> Result<Validated<T>, AppError> {
    payload
        .validate()
        .map(|_| Validated(payload))
        .map_err(AppError::from)
}

impl<T> FromRequest for Validated<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() {
            return UrlEncoded::<T>::new(req, payload)
                .limit(PAYLOAD_LIMIT)
                .map(|res| match res {
                    Ok(payload) => validate(payload),
                    Err(err) => Err(AppError::from(err)),
                })
                .boxed_local();
        }

        JsonBody::new(
            req,
            payload,
            Some(&|mime| mime == mime::APPLICATION_JSON),
            true,
        )
        .limit(PAYLOAD_LIMIT)
        .map(|res: Result<T, _>| match res {
            Ok(payload) => validate(payload),
            Err(err) => Err(AppError::from(err)),
        })
        .boxed_local()
    }
}
