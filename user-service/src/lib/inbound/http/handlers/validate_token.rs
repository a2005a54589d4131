use axum::Extension;

use crate::inbound::http::middleware::AuthenticatedUser;

pub const TOKEN_VALID: &str = "SUCCESS";

/// Reached only once the bearer middleware accepted the token.
pub async fn validate_token(
    Extension(AuthenticatedUser { user }): Extension<AuthenticatedUser>,
) -> &'static str {
    tracing::debug!(username = %user.username, "Bearer token validated");
    TOKEN_VALID
}
