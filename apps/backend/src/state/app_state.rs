use super::security_config::SecurityConfig;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Security configuration including token signing settings
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }
}
