use std::future::{ready, Ready};

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};

use crate::{error::ApiError, middleware::auth::Claims};

/// The caller's identity as established by `AuthMiddleware`.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) if !claims.user_id.is_empty() => ready(Ok(AuthenticatedUser {
                user_id: claims.user_id.clone(),
                email: claims.sub.clone(),
            })),
            _ => ready(Err(ApiError::AuthenticationRequired.into())),
        }
    }
}
