#![deny(clippy::wildcard_imports)]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod trace_ctx;

pub use auth::claims::AdminClaims;
pub use auth::jwt::{
    mint_admin_token, verify_admin_token, verify_admin_token_at, TokenError,
};
pub use config::gate::GateConfig;
pub use error::AppError;
pub use extractors::CurrentAdmin;
pub use middleware::auth_gate::AuthGate;
pub use middleware::path_scope::{GateScope, PathPattern, PathRules};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Initialize logging once for all unit tests in this crate.
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
