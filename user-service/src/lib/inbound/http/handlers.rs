use auth::AuthenticationError;
use auth::Rejection;
use auth::TokenError;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

pub mod issue_token;
pub mod validate_token;

/// Body sent with every 401, whatever the rejection reason.
pub const UNAUTHORIZED_BODY: [&str; 1] = ["Unauthorized"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    Unauthorized(Rejection),
}

impl From<AuthenticationError> for ApiError {
    fn from(e: AuthenticationError) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                tracing::error!(error = %message, "Request failed");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, Json(ApiResponseBody::new_error(status, message))).into_response()
            }
            ApiError::Unauthorized(rejection) => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, rejection.challenge())],
                Json(UNAUTHORIZED_BODY),
            )
                .into_response(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
