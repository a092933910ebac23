use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Account role; decides which capabilities a user has.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Barber,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Barber => "barber",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "barber" => Ok(Self::Barber),
            "admin" => Ok(Self::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Strips everything but digits, returning the result if it has 10 or 11 digits.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    (10..=11).contains(&digits.len()).then_some(digits)
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    match normalize_phone(phone) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("phone")
            .with_message("Phone must have 10 or 11 digits".into())),
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let length = name.trim().chars().count();
    if (3..=50).contains(&length) {
        Ok(())
    } else {
        Err(ValidationError::new("name")
            .with_message("Name must have between 3 and 50 characters".into()))
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Registration always creates a client; roles are changed by an admin.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct RegisterDto {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    pub password: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct LoginDto {
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Partial profile update; absent fields are left unchanged.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
pub struct UpdateProfileDto {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AuthResponseDto {
    pub success: bool,
    pub token: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ProfileResponseDto {
    pub success: bool,
    pub user: UserDto,
}
