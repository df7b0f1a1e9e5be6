use actix_web::{web, HttpResponse, Responder};
use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::AppError;

pub async fn root() -> impl Responder {
    HttpResponse::Ok().body("Savoro admin backend is running 🍜")
}

/// Liveness probe. Reports the crate version and current server time.
pub async fn health() -> Result<web::Json<serde_json::Value>, AppError> {
    let now = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| AppError::internal(format!("failed to format timestamp: {e}")))?;

    Ok(web::Json(json!({
        "status": "ok",
        "app_version": env!("CARGO_PKG_VERSION"),
        "time": now,
    })))
}
