use actix_web::web;
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::CurrentAdmin;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub employee_id: i64,
}

/// Echo the authenticated employee id back to the caller. Useful for
/// admin-console session checks and as a smoke test that the gate attached
/// an identity to the request.
pub async fn session(admin: CurrentAdmin) -> Result<web::Json<SessionResponse>, AppError> {
    Ok(web::Json(SessionResponse {
        employee_id: admin.employee_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::get().to(session));
}
