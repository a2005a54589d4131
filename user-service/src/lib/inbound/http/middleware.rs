use auth::Clock;
use auth::DesiredScheme;
use auth::ErrorCode;
use auth::Outcome;
use auth::Rejection;
use auth::Scheme;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware that only admits requests carrying valid Basic credentials
pub async fn require_basic<UR, C>(
    State(state): State<AppState<UR, C>>,
    req: Request,
    next: Next,
) -> Result<Response, Response>
where
    UR: UserRepository,
    C: Clock,
{
    authenticate(state, Scheme::Basic, req, next).await
}

/// Middleware that only admits requests carrying a valid bearer token
pub async fn require_bearer<UR, C>(
    State(state): State<AppState<UR, C>>,
    req: Request,
    next: Next,
) -> Result<Response, Response>
where
    UR: UserRepository,
    C: Clock,
{
    authenticate(state, Scheme::Bearer, req, next).await
}

async fn authenticate<UR, C>(
    state: AppState<UR, C>,
    scheme: Scheme,
    mut req: Request,
    next: Next,
) -> Result<Response, Response>
where
    UR: UserRepository,
    C: Clock,
{
    let header = extract_header(&req, scheme)?;

    let outcome = state
        .authenticator
        .authenticate(header.as_deref(), DesiredScheme::from(scheme), scheme)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    match outcome {
        Outcome::Authenticated(user) => {
            req.extensions_mut().insert(AuthenticatedUser { user });
            Ok(next.run(req).await)
        }
        Outcome::Rejected(rejection) => {
            tracing::warn!(
                code = %rejection.code,
                scheme = %rejection.scheme,
                uri = %req.uri(),
                "Authentication failed"
            );
            Err(ApiError::Unauthorized(rejection).into_response())
        }
    }
}

fn extract_header(req: &Request, scheme: Scheme) -> Result<Option<String>, Response> {
    match req.headers().get(header::AUTHORIZATION) {
        None => Ok(None),
        Some(value) => value.to_str().map(|v| Some(v.to_string())).map_err(|_| {
            tracing::warn!("Authorization header is not visible ASCII");
            ApiError::Unauthorized(Rejection::new(ErrorCode::InvalidRequest, scheme))
                .into_response()
        }),
    }
}
