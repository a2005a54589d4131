use auth::Clock;
use axum::extract::State;
use axum::Extension;

use super::ApiError;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Issue a fresh bearer token to a Basic-authenticated user.
///
/// The previous token, if any, stops validating once this returns.
pub async fn issue_token<UR, C>(
    State(state): State<AppState<UR, C>>,
    Extension(AuthenticatedUser { mut user }): Extension<AuthenticatedUser>,
) -> Result<String, ApiError>
where
    UR: UserRepository,
    C: Clock,
{
    let token = state.authenticator.bearer_token(&mut user).await?;
    Ok(token)
}
