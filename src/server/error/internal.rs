use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password with argon2.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(argon2::password_hash::Error),

    /// Failure to sign an access token.
    #[error("Failed to encode access token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// Token lifetime pushes the expiry past the representable date range.
    #[error("Access token lifetime {0} overflows the expiry timestamp")]
    TokenLifetime(chrono::TimeDelta),
}
