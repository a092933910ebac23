//! Registration, login and profile updates.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, RegisterParams, UpdateProfileParams, User},
        service::token::TokenKeys,
        util::password::{hash_password, verify_password},
    },
};

/// A freshly issued access token and the user it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Creates a client account and signs it in.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - New user with an access token
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::InternalErr)` - Password hashing or token signing failed
    pub async fn register(&self, params: RegisterParams) -> Result<AuthSession, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::BadRequest("Email is already in use".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let user = repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
                phone: params.phone,
                role: Role::Client,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        let token = self.tokens.issue(user.id)?;

        Ok(AuthSession { token, user })
    }

    /// Checks credentials and issues a token.
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let repo = UserRepository::new(self.db);

        let email = email.trim().to_lowercase();
        let Some(credentials) = repo.find_credentials_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !credentials.user.active {
            return Err(AuthError::InactiveUser(credentials.user.id).into());
        }

        let token = self.tokens.issue(credentials.user.id)?;

        Ok(AuthSession {
            token,
            user: credentials.user,
        })
    }

    /// Updates name and/or phone of the given user.
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        repo.update_profile(user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
