//! User domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::user::{normalize_phone, RegisterDto, Role, UpdateProfileDto, UserDto};

/// A registered account, without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Lower-cased
    pub email: String,
    /// Digits only
    pub phone: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity.role.parse::<Role>().map_err(|e| {
            DbErr::Custom(format!("Failed to parse role of user {}: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            role,
            active: entity.active,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// A user together with the hash needed to check their password.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Validated registration input, normalized for storage.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl RegisterParams {
    /// Trims the name, lower-cases the email and strips the phone down to digits.
    ///
    /// Expects a DTO that already passed validation; a phone that doesn't normalize is
    /// kept as its digits.
    pub fn from_dto(dto: RegisterDto) -> Self {
        let phone = normalize_phone(&dto.phone)
            .unwrap_or_else(|| dto.phone.chars().filter(char::is_ascii_digit).collect());

        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            phone,
        }
    }
}

/// Row values for a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub role: Role,
}

/// Profile fields to change; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            phone: dto.phone.as_deref().and_then(normalize_phone),
        }
    }
}
