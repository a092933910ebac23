use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    #[default]
    Hair,
    Beard,
    Combo,
    Style,
}

impl ServiceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hair => "hair",
            Self::Beard => "beard",
            Self::Combo => "combo",
            Self::Style => "style",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hair" => Ok(Self::Hair),
            "beard" => Ok(Self::Beard),
            "combo" => Ok(Self::Combo),
            "style" => Ok(Self::Style),
            other => Err(format!("unknown service category '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Minutes
    pub duration: i32,
    pub price: f64,
    pub category: ServiceCategory,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceDto {
    #[validate(length(min = 3, max = 100, message = "Name must have between 3 and 100 characters"))]
    pub name: String,
    #[validate(length(
        min = 10,
        max = 500,
        message = "Description must have between 10 and 500 characters"
    ))]
    pub description: String,
    #[validate(range(min = 15, max = 180, message = "Duration must be between 15 and 180 minutes"))]
    pub duration: i32,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    /// Defaults to `hair`.
    pub category: Option<ServiceCategory>,
    /// Defaults to `true`.
    pub is_available: Option<bool>,
}

/// Partial update; each present field follows the same rules as on creation.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceDto {
    #[validate(length(min = 3, max = 100, message = "Name must have between 3 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(
        min = 10,
        max = 500,
        message = "Description must have between 10 and 500 characters"
    ))]
    pub description: Option<String>,
    #[validate(range(min = 15, max = 180, message = "Duration must be between 15 and 180 minutes"))]
    pub duration: Option<i32>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub category: Option<ServiceCategory>,
    pub is_available: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ServiceListDto {
    pub success: bool,
    pub count: usize,
    pub services: Vec<ServiceDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ServiceResponseDto {
    pub success: bool,
    pub service: ServiceDto,
}
