use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::Clock;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::issue_token::issue_token;
use super::handlers::validate_token::validate_token;
use super::middleware::require_basic;
use super::middleware::require_bearer;
use crate::domain::user::ports::UserRepository;
use crate::outbound::directory::RepositoryDirectory;

pub type ServiceAuthenticator<UR, C> = Authenticator<RepositoryDirectory<UR>, C>;

pub struct AppState<UR, C>
where
    UR: UserRepository,
    C: Clock,
{
    pub authenticator: Arc<ServiceAuthenticator<UR, C>>,
}

impl<UR, C> Clone for AppState<UR, C>
where
    UR: UserRepository,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<UR, C>(authenticator: Arc<ServiceAuthenticator<UR, C>>) -> Router
where
    UR: UserRepository,
    C: Clock,
{
    let state = AppState { authenticator };

    let basic_routes = Router::new()
        .route("/user", get(issue_token::<UR, C>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic::<UR, C>,
        ));

    let bearer_routes = Router::new()
        .route("/user/validate_token", get(validate_token))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer::<UR, C>,
        ));

    // Headers are left out of the span: they carry credentials.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(basic_routes)
        .merge(bearer_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
