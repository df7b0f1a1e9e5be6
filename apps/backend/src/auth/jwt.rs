use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::auth::claims::AdminClaims;
use crate::state::security_config::SecurityConfig;

/// Failures of the token codec. The three decode-side variants map to the
/// 401 rejection codes; `Encoding` is a programming error on the issuing
/// side and never reaches the gate's request flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("claim cannot be encoded: {0}")]
    Encoding(String),
    #[error("malformed token")]
    Malformed,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
}

fn unix_seconds(t: SystemTime) -> Result<i64, TokenError> {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| TokenError::Encoding("system clock is before the unix epoch".to_string()))
}

/// Mint an HS256 admin token for the given employee id.
///
/// `iat` is taken from `now`, `exp` is `iat` plus the configured TTL, so the
/// expiry always lies strictly after the issue instant.
pub fn mint_admin_token(
    employee_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    if employee_id <= 0 {
        return Err(TokenError::Encoding(
            "employee id must be positive".to_string(),
        ));
    }

    let iat = unix_seconds(now)?;
    let exp = iat + security.token_ttl_secs as i64;

    let claims = AdminClaims {
        sub: employee_id,
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| TokenError::Encoding(e.to_string()))
}

/// Verify an admin token against the process-wide secret and the wall clock.
pub fn verify_admin_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<AdminClaims, TokenError> {
    verify_admin_token_at(token, security, SystemTime::now())
}

/// Verify an admin token at an explicit validation instant.
///
/// Structure and signature are checked by `jsonwebtoken` (constant-time
/// signature comparison; a tampered payload and a wrong secret are
/// indistinguishable). Expiry is checked here instead of through the
/// library's leeway-based validation so that the boundary instant
/// (`now == exp`) is already rejected. All-or-nothing: claims are returned
/// only when every check passes.
pub fn verify_admin_token_at(
    token: &str,
    security: &SecurityConfig,
    now: SystemTime,
) -> Result<AdminClaims, TokenError> {
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.leeway = 0;

    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        // Wrong segment count, undecodable base64, bad JSON, missing claim
        // fields, unexpected header algorithm.
        _ => TokenError::Malformed,
    })?;

    let claims = data.claims;
    let now_secs = unix_seconds(now)?;
    if now_secs >= claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
