//! Admin gate configuration loaded from the environment at startup.
//!
//! - `BACKEND_ADMIN_TOKEN_HEADER` — header carrying the admin token
//!   (default `token`)
//! - `BACKEND_ADMIN_INCLUDE_PATHS` — comma-separated include patterns
//!   (default `/admin/**`)
//! - `BACKEND_ADMIN_EXCLUDE_PATHS` — comma-separated exclude patterns
//!   (default `/admin/employee/login`)

use std::env;

use crate::error::AppError;
use crate::middleware::path_scope::{PathPattern, PathRules};

pub const DEFAULT_TOKEN_HEADER: &str = "token";
pub const DEFAULT_INCLUDE_PATHS: &str = "/admin/**";
pub const DEFAULT_EXCLUDE_PATHS: &str = "/admin/employee/login";

/// Designated token header plus the path rules the gate enforces,
/// immutable after startup.
#[derive(Debug, Clone)]
pub struct GateConfig {
    pub header: String,
    pub rules: PathRules,
}

impl GateConfig {
    pub fn new(header: impl Into<String>, rules: PathRules) -> Self {
        Self {
            header: header.into(),
            rules,
        }
    }

    /// Load the gate configuration from the environment, falling back to the
    /// admin defaults. Startup fails on an empty header name or an empty
    /// include list, since either would silently disable the gate.
    pub fn from_env() -> Result<Self, AppError> {
        let header = env::var("BACKEND_ADMIN_TOKEN_HEADER")
            .unwrap_or_else(|_| DEFAULT_TOKEN_HEADER.to_string());
        let header = header.trim().to_ascii_lowercase();
        if header.is_empty() {
            return Err(AppError::config(
                "BACKEND_ADMIN_TOKEN_HEADER must not be empty",
            ));
        }

        let include = parse_patterns(
            &env::var("BACKEND_ADMIN_INCLUDE_PATHS")
                .unwrap_or_else(|_| DEFAULT_INCLUDE_PATHS.to_string()),
        );
        if include.is_empty() {
            return Err(AppError::config(
                "BACKEND_ADMIN_INCLUDE_PATHS must contain at least one pattern",
            ));
        }

        let exclude = parse_patterns(
            &env::var("BACKEND_ADMIN_EXCLUDE_PATHS")
                .unwrap_or_else(|_| DEFAULT_EXCLUDE_PATHS.to_string()),
        );

        Ok(Self::new(header, PathRules::new(include, exclude)))
    }
}

fn parse_patterns(raw: &str) -> Vec<PathPattern> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathPattern::parse)
        .collect()
}
