//! Admin authentication gate.
//!
//! Sits in front of every route and decides, per request, between two
//! terminal outcomes: forward or reject.
//!
//! 1. Paths matching an exclude pattern are forwarded untouched (no token
//!    inspection at all).
//! 2. Paths matching no include pattern are outside the gate's jurisdiction
//!    and forwarded as well.
//! 3. For everything else the designated header must carry a valid admin
//!    token. The verified claims are stored in request extensions for the
//!    `CurrentAdmin` extractor; any failure short-circuits the chain and the
//!    gate writes the 401 problem response itself, so the downstream service
//!    never runs.
//!
//! The gate holds only immutable configuration shared across workers; all
//! per-request state lives in the request itself.

use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::{web, Error as ActixError, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::warn;

use crate::auth::jwt::verify_admin_token;
use crate::config::gate::GateConfig;
use crate::error::AppError;
use crate::middleware::path_scope::GateScope;
use crate::state::app_state::AppState;
use crate::trace_ctx;

#[derive(Clone)]
pub struct AuthGate {
    config: Arc<GateConfig>,
}

impl AuthGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service,
            config: Arc::clone(&self.config),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
    config: Arc<GateConfig>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.config.rules.scope(req.path()) {
            GateScope::Excluded | GateScope::Unmatched => return self.forward(req),
            GateScope::Included => {}
        }

        let token = req
            .headers()
            .get(self.config.header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned);

        let Some(token) = token else {
            warn!(path = %req.path(), "admin request rejected: token header absent");
            return reject(req, AppError::unauthorized_missing_token());
        };

        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            return reject(req, AppError::internal("AppState not available"));
        };

        match verify_admin_token(&token, &state.security) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                self.forward(req)
            }
            Err(err) => {
                // Log the specific reason; the client only sees the code.
                warn!(path = %req.path(), reason = %err, "admin request rejected");
                reject(req, AppError::from(err))
            }
        }
    }
}

impl<S> AuthGateMiddleware<S> {
    fn forward<B>(
        &self,
        req: ServiceRequest,
    ) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, ActixError>>
    where
        S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
        S::Future: 'static,
        B: 'static,
    {
        let fut = self.service.call(req);
        Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
    }
}

/// Write the terminal 401/500 response without invoking the inner service.
///
/// `RequestTrace` stores the trace id in request extensions before calling
/// downstream, but its task-local scope only exists once the request future
/// is polled. Rejection happens before that, so the error body is rendered
/// inside an explicit scope built from the stored id.
fn reject<B: 'static>(
    req: ServiceRequest,
    err: AppError,
) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, ActixError>> {
    let trace_id = req.extensions().get::<String>().cloned();
    let res: actix_web::HttpResponse<BoxBody> = match trace_id {
        Some(id) => trace_ctx::with_trace_id_sync(id, || err.error_response()),
        None => err.error_response(),
    };

    let (req, _payload) = req.into_parts();
    Box::pin(ready(Ok(ServiceResponse::new(
        req,
        res.map_into_right_body::<B>(),
    ))))
}
