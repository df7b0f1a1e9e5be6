use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::auth::jwt::TokenError;
use crate::trace_ctx;

/// Stable error body returned for every failed request,
/// serialized as `application/problem+json`.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("UnauthorizedMissingToken")]
    UnauthorizedMissingToken,
    #[error("UnauthorizedMalformedToken")]
    UnauthorizedMalformedToken,
    #[error("UnauthorizedInvalidSignature")]
    UnauthorizedInvalidSignature,
    #[error("UnauthorizedExpiredToken")]
    UnauthorizedExpiredToken,
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for each variant. The four 401 codes are
    /// the only distinction a client sees between rejection reasons.
    fn code(&self) -> String {
        match self {
            AppError::UnauthorizedMissingToken => "MISSING_TOKEN".to_string(),
            AppError::UnauthorizedMalformedToken => "MALFORMED_TOKEN".to_string(),
            AppError::UnauthorizedInvalidSignature => "INVALID_SIGNATURE".to_string(),
            AppError::UnauthorizedExpiredToken => "EXPIRED_TOKEN".to_string(),
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
            AppError::Internal { .. } => "INTERNAL".to_string(),
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::UnauthorizedMissingToken => "Missing admin token".to_string(),
            AppError::UnauthorizedMalformedToken => "Malformed admin token".to_string(),
            AppError::UnauthorizedInvalidSignature => "Invalid token signature".to_string(),
            AppError::UnauthorizedExpiredToken => "Token expired".to_string(),
            AppError::Config { detail } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnauthorizedMissingToken
            | AppError::UnauthorizedMalformedToken
            | AppError::UnauthorizedInvalidSignature
            | AppError::UnauthorizedExpiredToken => StatusCode::UNAUTHORIZED,
            AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn unauthorized_missing_token() -> Self {
        Self::UnauthorizedMissingToken
    }

    pub fn unauthorized_malformed_token() -> Self {
        Self::UnauthorizedMalformedToken
    }

    pub fn unauthorized_invalid_signature() -> Self {
        Self::UnauthorizedInvalidSignature
    }

    pub fn unauthorized_expired_token() -> Self {
        Self::UnauthorizedExpiredToken
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            // A claim that cannot be encoded is a bug in the issuing code
            // path, not a client-correctable failure.
            TokenError::Encoding(detail) => AppError::internal(detail),
            TokenError::Malformed => AppError::unauthorized_malformed_token(),
            TokenError::InvalidSignature => AppError::unauthorized_invalid_signature(),
            TokenError::Expired => AppError::unauthorized_expired_token(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let detail = self.detail();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://savoro.app/errors/{}", code.to_uppercase()),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
