use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::claims::AdminClaims;
use crate::error::AppError;

/// Identity of the authenticated administrator, resolved from the claims
/// the auth gate stored in request extensions. Requesting this extractor on
/// a route the gate never ran on yields a 401.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAdmin {
    pub employee_id: i64,
}

impl FromRequest for CurrentAdmin {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<AdminClaims>().cloned();

        ready(
            claims
                .map(|c| CurrentAdmin { employee_id: c.sub })
                .ok_or_else(AppError::unauthorized_missing_token),
        )
    }
}
