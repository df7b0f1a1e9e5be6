//! Identity claims carried inside admin access tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in every admin token. The auth gate inserts the verified
/// claims into request extensions; handlers consume them through the
/// `CurrentAdmin` extractor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AdminClaims {
    /// Employee id of the authenticated administrator
    pub sub: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch); always strictly greater than `iat`
    pub exp: i64,
}
