mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};

use backend::middleware::auth_gate::AuthGate;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;

use common::{test_gate, test_security};

#[actix_web::test]
async fn rejections_carry_the_full_problem_details_contract() {
    let app = test::init_service(
        App::new()
            .wrap(AuthGate::new(test_gate()))
            .wrap(RequestTrace)
            .app_data(web::Data::new(AppState::new(test_security())))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/admin/session").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/problem+json")
    );

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-trace-id header should be present");

    // The rejection must carry the id minted for this request, not a
    // fallback value.
    let request_id_header = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-request-id header should be present");
    assert_eq!(trace_header, request_id_header);
    assert_ne!(trace_header, "unknown");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "https://savoro.app/errors/MISSING_TOKEN");
    assert_eq!(body["title"], "Missing Token");
    assert_eq!(body["status"], 401);
    assert_eq!(body["detail"], "Missing admin token");
    assert_eq!(body["code"], "MISSING_TOKEN");
    assert_eq!(body["trace_id"], trace_header);
}

#[actix_web::test]
async fn each_request_gets_a_fresh_trace_id() {
    let app = test::init_service(
        App::new()
            .wrap(AuthGate::new(test_gate()))
            .wrap(RequestTrace)
            .app_data(web::Data::new(AppState::new(test_security())))
            .configure(routes::configure),
    )
    .await;

    let mut seen = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/admin/session").to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        seen.push(body["trace_id"].as_str().unwrap_or_default().to_owned());
    }

    assert_ne!(seen[0], seen[1]);
    assert!(seen.iter().all(|id| !id.is_empty() && id != "unknown"));
}
