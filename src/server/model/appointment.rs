//! Appointment domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::appointment::{
        AppointmentDto, AppointmentListQuery, AppointmentStatus, AvailableSlotsDto,
        ClientSummaryDto, CreateAppointmentDto, ServiceSummaryDto, SlotDto,
    },
    server::{
        error::validation::InvalidInput,
        model::{
            barber::Barber,
            catalog::Service,
            schedule::{TimeOfDay, TimeRange},
            user::User,
        },
        service::availability::Slot,
    },
};

/// A booking of one service with one barber for a time interval on one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub client_id: i32,
    pub barber_id: i32,
    pub service_id: i32,
    pub date: NaiveDate,
    pub time: TimeRange,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    /// Service price at booking time.
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored interval or status is invalid
    pub fn from_entity(entity: entity::appointment::Model) -> Result<Self, DbErr> {
        let time = TimeRange::from_stored(entity.start_minute, entity.end_minute).ok_or_else(
            || {
                DbErr::Custom(format!(
                    "Appointment {} has invalid interval {}..{}",
                    entity.id, entity.start_minute, entity.end_minute
                ))
            },
        )?;

        let status = entity.status.parse::<AppointmentStatus>().map_err(|e| {
            DbErr::Custom(format!(
                "Failed to parse status of appointment {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            client_id: entity.client_id,
            barber_id: entity.barber_id,
            service_id: entity.service_id,
            date: entity.date,
            time,
            status,
            notes: entity.notes,
            price: entity.price,
            created_at: entity.created_at,
        })
    }
}

/// An appointment with the related rows needed for display.
#[derive(Debug, Clone)]
pub struct AppointmentDetail {
    pub appointment: Appointment,
    /// Only loaded for staff listings.
    pub client: Option<User>,
    pub barber: Option<Barber>,
    pub service: Option<Service>,
}

impl AppointmentDetail {
    pub fn into_dto(self) -> AppointmentDto {
        let appointment = self.appointment;

        AppointmentDto {
            id: appointment.id,
            date: appointment.date,
            start_time: appointment.time.start.to_string(),
            end_time: appointment.time.end.to_string(),
            status: appointment.status,
            notes: appointment.notes,
            price: appointment.price,
            created_at: appointment.created_at,
            client: self.client.map(|client| ClientSummaryDto {
                id: client.id,
                name: client.name,
                email: client.email,
                phone: client.phone,
            }),
            barber: self.barber.as_ref().map(Barber::to_summary_dto),
            service: self.service.map(|service| ServiceSummaryDto {
                id: service.id,
                name: service.name,
                duration: service.duration,
                price: service.price,
                category: service.category,
            }),
        }
    }
}

/// Validated booking request.
#[derive(Debug, Clone)]
pub struct BookAppointmentParams {
    pub barber_id: i32,
    pub service_id: i32,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub notes: Option<String>,
}

impl BookAppointmentParams {
    /// Parses the start time; blank notes are dropped.
    ///
    /// # Returns
    /// - `Ok(BookAppointmentParams)` - Parsed parameters
    /// - `Err(InvalidInput)` - `startTime` is not a valid `HH:MM` time
    pub fn from_dto(dto: CreateAppointmentDto) -> Result<Self, InvalidInput> {
        let start = dto
            .start_time
            .parse::<TimeOfDay>()
            .map_err(|e| InvalidInput::field("startTime", e.to_string()))?;

        Ok(Self {
            barber_id: dto.barber_id,
            service_id: dto.service_id,
            date: dto.date,
            start,
            notes: dto
                .notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
        })
    }
}

/// Row values for a new appointment.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub client_id: i32,
    pub barber_id: i32,
    pub service_id: i32,
    pub date: NaiveDate,
    pub time: TimeRange,
    pub notes: Option<String>,
    pub price: f64,
}

/// Which appointments a caller may see or change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentScope {
    /// Every appointment.
    All,
    /// Appointments at this barber's chair.
    Chair(i32),
    /// Appointments booked by this user.
    Client(i32),
}

impl AppointmentScope {
    pub fn contains(&self, appointment: &Appointment) -> bool {
        match *self {
            Self::All => true,
            Self::Chair(barber_id) => appointment.barber_id == barber_id,
            Self::Client(user_id) => appointment.client_id == user_id,
        }
    }
}

/// Query filter for appointment listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppointmentFilter {
    pub barber_id: Option<i32>,
    pub client_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentFilter {
    /// Builds a filter from query parameters, restricted to `scope`.
    pub fn from_query(scope: AppointmentScope, query: AppointmentListQuery) -> Self {
        let mut filter = Self {
            date: query.date,
            status: query.status,
            ..Default::default()
        };

        match scope {
            AppointmentScope::All => {}
            AppointmentScope::Chair(barber_id) => filter.barber_id = Some(barber_id),
            AppointmentScope::Client(user_id) => filter.client_id = Some(user_id),
        }

        filter
    }
}

/// Slot listing for one barber and day.
#[derive(Debug, Clone)]
pub struct SlotReport {
    pub date: NaiveDate,
    pub barber_id: i32,
    pub duration: u16,
    pub slots: Vec<Slot>,
    /// Set when the whole day is closed for booking.
    pub reason: Option<String>,
}

impl SlotReport {
    pub fn into_dto(self) -> AvailableSlotsDto {
        AvailableSlotsDto {
            success: true,
            date: self.date,
            barber_id: self.barber_id,
            duration: self.duration,
            slots: self
                .slots
                .into_iter()
                .map(|slot| SlotDto {
                    time: slot.time.to_string(),
                    available: slot.available,
                })
                .collect(),
            reason: self.reason,
        }
    }
}
