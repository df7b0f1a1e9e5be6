use actix_web::web;

pub mod admin;
pub mod health;

/// Configure application routes for both the server and test harnesses.
///
/// The auth gate is not applied here; `main.rs` (and each test) wraps the
/// assembled `App` with `AuthGate` explicitly, so path-rule behavior stays
/// visible at the composition site.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    cfg.route("/health", web::get().to(health::health));

    // Admin routes: /admin/** (gated)
    cfg.service(web::scope("/admin").configure(admin::configure_routes));
}
