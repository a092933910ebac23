use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization: Bearer` header.
    #[error("Access token is missing")]
    MissingToken,

    /// Token is malformed or its signature doesn't verify.
    #[error("Access token is invalid: {0}")]
    InvalidToken(String),

    /// Token verified but its `exp` claim is in the past.
    #[error("Access token has expired")]
    ExpiredToken,

    /// Token subject refers to a user that no longer exists.
    #[error("User {0} referenced by access token not found in database")]
    UserNotFound(i32),

    /// Unknown email or wrong password at login.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// User account has been deactivated.
    #[error("User {0} is inactive")]
    InactiveUser(i32),

    /// User is authenticated but their role lacks the required capability.
    ///
    /// # Fields
    /// - User ID
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `AccessDenied` → 403 Forbidden
/// - Every other variant → 401 Unauthorized with a message specific to the failure
///
/// All errors are logged at debug level, the reason for a denial included.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Access token is required"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid access token"),
            Self::ExpiredToken => (StatusCode::UNAUTHORIZED, "Access token has expired"),
            Self::UserNotFound(_) => (StatusCode::UNAUTHORIZED, "User not found"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::InactiveUser(_) => (StatusCode::UNAUTHORIZED, "This account has been deactivated"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
