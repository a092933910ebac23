//! Bearer-token authentication and role capability checks.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::User,
        service::token::TokenKeys,
    },
};

/// A capability that only some roles hold.
///
/// Capabilities that depend on the record being touched, such as changing an appointment's
/// status, are checked by the service instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Create, edit and retire services.
    ManageCatalog,
    /// Create barber profiles.
    ManageBarbers,
    /// List appointments beyond one's own bookings.
    ViewAppointments,
}

impl Permission {
    pub fn granted_to(self, role: Role) -> bool {
        match self {
            Self::ManageCatalog | Self::ManageBarbers => role == Role::Admin,
            Self::ViewAppointments => matches!(role, Role::Admin | Role::Barber),
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request and checks `permissions`.
    ///
    /// Pass an empty slice to require authentication only.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated, active user holding every permission
    /// - `Err(AuthError::MissingToken | InvalidToken | ExpiredToken)` - Bad or absent token (401)
    /// - `Err(AuthError::UserNotFound | InactiveUser)` - Token subject unusable (401)
    /// - `Err(AuthError::AccessDenied)` - Role lacks a permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        if !user.active {
            return Err(AuthError::InactiveUser(user.id).into());
        }

        for permission in permissions {
            if !permission.granted_to(user.role) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("Role {} lacks permission {:?}", user.role, permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
