mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};

use backend::middleware::auth_gate::AuthGate;
use backend::middleware::request_trace::RequestTrace;
use backend::routes;
use backend::state::app_state::AppState;

use common::{test_gate, test_security};

#[actix_web::test]
async fn health_endpoint_is_outside_the_gate() {
    let app = test::init_service(
        App::new()
            .wrap(AuthGate::new(test_gate()))
            .wrap(RequestTrace)
            .app_data(web::Data::new(AppState::new(test_security())))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));
}

#[actix_web::test]
async fn root_greets_without_a_token() {
    let app = test::init_service(
        App::new()
            .wrap(AuthGate::new(test_gate()))
            .wrap(RequestTrace)
            .app_data(web::Data::new(AppState::new(test_security())))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
