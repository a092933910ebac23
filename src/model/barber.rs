use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Specialty {
    Hair,
    Beard,
    #[default]
    Both,
}

impl Specialty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hair => "hair",
            Self::Beard => "beard",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hair" => Ok(Self::Hair),
            "beard" => Ok(Self::Beard),
            "both" => Ok(Self::Both),
            other => Err(format!("unknown specialty '{}'", other)),
        }
    }
}

/// Barber profile flattened with the linked user's contact details.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BarberDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: Specialty,
    /// Years of experience
    pub experience: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateBarberDto {
    /// Existing user who becomes a barber.
    pub user_id: i32,
    /// Defaults to `both`.
    pub specialty: Option<Specialty>,
    #[validate(range(min = 0, message = "Experience cannot be negative"))]
    pub experience: i32,
    #[validate(length(max = 500, message = "Description must have at most 500 characters"))]
    pub description: Option<String>,
}

#[derive(Deserialize, IntoParams, Validate, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailableBarbersQuery {
    /// Day to check, `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    /// Start time to check, `HH:MM`.
    pub time: Option<String>,
    /// Service whose duration is used; defaults to one slot.
    pub service_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailableBarberDto {
    pub id: i32,
    pub name: String,
    pub specialty: Specialty,
    pub available: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BarberListDto {
    pub success: bool,
    pub count: usize,
    pub barbers: Vec<BarberDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BarberResponseDto {
    pub success: bool,
    pub barber: BarberDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AvailableBarbersDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub count: usize,
    pub barbers: Vec<AvailableBarberDto>,
}
