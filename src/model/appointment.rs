use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::{barber::Specialty, catalog::ServiceCategory};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the appointment still holds its time slot.
    pub fn is_active(self) -> bool {
        self != Self::Cancelled
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown appointment status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentDto {
    #[serde(alias = "barber")]
    pub barber_id: i32,
    #[serde(alias = "service")]
    pub service_id: i32,
    /// `YYYY-MM-DD`
    pub date: NaiveDate,
    /// `HH:MM`
    pub start_time: String,
    #[validate(length(max = 500, message = "Notes must have at most 500 characters"))]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct UpdateStatusDto {
    pub status: AppointmentStatus,
}

#[derive(Deserialize, IntoParams, Validate, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct AppointmentListQuery {
    /// Only appointments on this day, `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
}

#[derive(Deserialize, IntoParams, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailableSlotsQuery {
    pub barber_id: i32,
    /// `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Service whose duration is used; defaults to one slot.
    pub service_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BarberSummaryDto {
    pub id: i32,
    pub name: String,
    pub specialty: Specialty,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummaryDto {
    pub id: i32,
    pub name: String,
    pub duration: i32,
    pub price: f64,
    pub category: ServiceCategory,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: i32,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Price of the service when the appointment was booked.
    pub price: f64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientSummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barber: Option<BarberSummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceSummaryDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AppointmentResponseDto {
    pub success: bool,
    pub appointment: AppointmentDto,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AppointmentListDto {
    pub success: bool,
    pub count: usize,
    pub appointments: Vec<AppointmentDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct SlotDto {
    /// `HH:MM`
    pub time: String,
    pub available: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlotsDto {
    pub success: bool,
    pub date: NaiveDate,
    pub barber_id: i32,
    /// Minutes each slot would be booked for.
    pub duration: u16,
    pub slots: Vec<SlotDto>,
    /// Why every slot is unavailable, when the date takes no bookings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
