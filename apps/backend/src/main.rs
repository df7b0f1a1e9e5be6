mod telemetry;

use std::env;
use std::process;

use actix_web::{web, App, HttpServer};
use tracing::info;

use backend::config::gate::GateConfig;
use backend::middleware::auth_gate::AuthGate;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = match env::var("BACKEND_PORT") {
        Ok(raw) => match raw.parse() {
            Ok(p) => p,
            Err(_) => {
                eprintln!("❌ BACKEND_PORT must be a valid port number, got: {raw}");
                process::exit(1);
            }
        },
        Err(_) => 3001,
    };

    let jwt_secret = match env::var("BACKEND_JWT_SECRET") {
        Ok(s) if !s.trim().is_empty() => s,
        _ => {
            eprintln!("❌ BACKEND_JWT_SECRET must be set to a non-empty value");
            process::exit(1);
        }
    };

    let token_ttl_secs: u64 = match env::var("BACKEND_TOKEN_TTL_SECS") {
        Ok(raw) => match raw.parse() {
            Ok(0) | Err(_) => {
                eprintln!("❌ BACKEND_TOKEN_TTL_SECS must be a positive integer, got: {raw}");
                process::exit(1);
            }
            Ok(ttl) => ttl,
        },
        Err(_) => SecurityConfig::DEFAULT_TOKEN_TTL_SECS,
    };

    let gate_config = match GateConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("❌ Invalid auth gate configuration: {err}");
            process::exit(1);
        }
    };

    let security =
        SecurityConfig::new(jwt_secret.into_bytes()).with_token_ttl_secs(token_ttl_secs);
    let data = web::Data::new(AppState::new(security));
    let auth_gate = AuthGate::new(gate_config);

    info!("Starting Savoro admin backend on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            // Middleware executes bottom-up: RequestTrace first, then the
            // span and logger, CORS, and finally the auth gate ahead of the
            // routes it protects.
            .wrap(auth_gate.clone())
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
