//! Appointment factory for creating bookings directly, bypassing conflict checks.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating appointments.
///
/// Rows are inserted as-is, so tests can arrange overlapping or cancelled bookings that the
/// booking flow itself would reject.
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    barber_id: i32,
    service_id: i32,
    date: NaiveDate,
    start_minute: i32,
    end_minute: i32,
    status: String,
    notes: Option<String>,
    price: f64,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory.
    ///
    /// Defaults: tomorrow, 10:00 to 10:30, status `"pending"`, price 35.0.
    pub fn new(db: &'a DatabaseConnection, client_id: i32, barber_id: i32, service_id: i32) -> Self {
        Self {
            db,
            client_id,
            barber_id,
            service_id,
            date: Utc::now().date_naive() + Duration::days(1),
            start_minute: 10 * 60,
            end_minute: 10 * 60 + 30,
            status: "pending".to_string(),
            notes: None,
            price: 35.0,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the booked interval as minutes since midnight, end exclusive.
    pub fn window(mut self, start_minute: i32, end_minute: i32) -> Self {
        self.start_minute = start_minute;
        self.end_minute = end_minute;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds and inserts the appointment entity into the database.
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            client_id: ActiveValue::Set(self.client_id),
            barber_id: ActiveValue::Set(self.barber_id),
            service_id: ActiveValue::Set(self.service_id),
            date: ActiveValue::Set(self.date),
            start_minute: ActiveValue::Set(self.start_minute),
            end_minute: ActiveValue::Set(self.end_minute),
            status: ActiveValue::Set(self.status),
            notes: ActiveValue::Set(self.notes),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending appointment with default values.
pub async fn create_appointment(
    db: &DatabaseConnection,
    client_id: i32,
    barber_id: i32,
    service_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, client_id, barber_id, service_id)
        .build()
        .await
}
