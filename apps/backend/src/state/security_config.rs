use jsonwebtoken::Algorithm;

/// Token signing configuration, immutable after startup.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared secret for signing and verifying admin tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (pinned to HS256)
    pub algorithm: Algorithm,
    /// Token validity duration in seconds; must be at least 1 so that a
    /// minted claim's expiry lies strictly after its issue time
    pub token_ttl_secs: u64,
}

impl SecurityConfig {
    pub const DEFAULT_TOKEN_TTL_SECS: u64 = 7200;

    /// Create a new SecurityConfig with the given secret and the default TTL
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl_secs: Self::DEFAULT_TOKEN_TTL_SECS,
        }
    }

    pub fn with_token_ttl_secs(mut self, token_ttl_secs: u64) -> Self {
        self.token_ttl_secs = token_ttl_secs;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
