#![allow(dead_code)] // each test binary uses a different subset of helpers

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::web;

use backend::config::gate::GateConfig;
use backend::middleware::path_scope::{PathPattern, PathRules};
use backend::state::security_config::SecurityConfig;

// Initialize logging once for the whole integration test binary.
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Security config all gate tests share, so minted tokens verify against
/// the state the test app carries.
pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.to_vec())
}

/// Gate rules matching the production defaults: everything under /admin is
/// protected except the login endpoint, token travels in the `token` header.
pub fn test_gate() -> GateConfig {
    GateConfig::new(
        "token",
        PathRules::new(
            vec![PathPattern::parse("/admin/**")],
            vec![PathPattern::parse("/admin/employee/login")],
        ),
    )
}

/// Routes that exist only in tests: an ungated public endpoint and a stand-in
/// for the login endpoint the exclude rule points at.
pub fn test_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/public/menu",
        web::get().to(|| async { actix_web::HttpResponse::Ok().body("menu") }),
    );
    cfg.route(
        "/admin/employee/login",
        web::post().to(|| async { actix_web::HttpResponse::Ok().body("login") }),
    );
}

/// Assert the full rejection contract, including the Savoro type URI.
pub async fn assert_rejection<B: MessageBody>(
    resp: ServiceResponse<B>,
    expected_code: &str,
    expected_status: StatusCode,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    backend_test_support::problem_details::assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        None,
    );

    let parsed: serde_json::Value =
        serde_json::from_slice(&body).expect("rejection body should be JSON");
    assert_eq!(
        parsed["type"],
        format!("https://savoro.app/errors/{expected_code}"),
    );
}
