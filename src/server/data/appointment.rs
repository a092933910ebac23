//! Appointment repository.
//!
//! Overlap queries treat every status except `cancelled` as holding its interval.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::appointment::AppointmentStatus,
    server::model::{
        appointment::{Appointment, AppointmentFilter, CreateAppointmentParams},
        schedule::TimeRange,
    },
};

pub struct AppointmentRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new appointment with status `pending`.
    ///
    /// Performs no conflict check; callers run `find_overlapping` in the same transaction.
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, DbErr> {
        let entity = entity::appointment::ActiveModel {
            client_id: ActiveValue::Set(params.client_id),
            barber_id: ActiveValue::Set(params.barber_id),
            service_id: ActiveValue::Set(params.service_id),
            date: ActiveValue::Set(params.date),
            start_minute: ActiveValue::Set(i32::from(params.time.start.minutes())),
            end_minute: ActiveValue::Set(i32::from(params.time.end.minutes())),
            status: ActiveValue::Set(AppointmentStatus::Pending.as_str().to_string()),
            notes: ActiveValue::Set(params.notes),
            price: ActiveValue::Set(params.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Appointment::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
            .map(Appointment::from_entity)
            .transpose()
    }

    /// Intervals held by a barber's non-cancelled appointments on `date`, ordered by start.
    pub async fn get_booked_ranges(
        &self,
        barber_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<TimeRange>, DbErr> {
        let appointments = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::BarberId.eq(barber_id))
            .filter(entity::appointment::Column::Date.eq(date))
            .filter(
                entity::appointment::Column::Status.ne(AppointmentStatus::Cancelled.as_str()),
            )
            .order_by_asc(entity::appointment::Column::StartMinute)
            .all(self.db)
            .await?;

        appointments
            .into_iter()
            .map(|entity| Appointment::from_entity(entity).map(|a| a.time))
            .collect()
    }

    /// First non-cancelled appointment of the barber on `date` whose interval overlaps `time`.
    ///
    /// # Arguments
    /// - `excluding` - Appointment to ignore, used when re-activating an existing booking
    pub async fn find_overlapping(
        &self,
        barber_id: i32,
        date: NaiveDate,
        time: TimeRange,
        excluding: Option<i32>,
    ) -> Result<Option<Appointment>, DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::BarberId.eq(barber_id))
            .filter(entity::appointment::Column::Date.eq(date))
            .filter(
                entity::appointment::Column::Status.ne(AppointmentStatus::Cancelled.as_str()),
            )
            .filter(entity::appointment::Column::StartMinute.lt(i32::from(time.end.minutes())))
            .filter(entity::appointment::Column::EndMinute.gt(i32::from(time.start.minutes())));

        if let Some(id) = excluding {
            query = query.filter(entity::appointment::Column::Id.ne(id));
        }

        query
            .order_by_asc(entity::appointment::Column::StartMinute)
            .one(self.db)
            .await?
            .map(Appointment::from_entity)
            .transpose()
    }

    /// Appointments booked by a client, latest date first, then latest start first.
    pub async fn get_by_client(&self, client_id: i32) -> Result<Vec<Appointment>, DbErr> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ClientId.eq(client_id))
            .order_by_desc(entity::appointment::Column::Date)
            .order_by_desc(entity::appointment::Column::StartMinute)
            .all(self.db)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect()
    }

    /// Appointments matching `filter`, ordered by date then start time.
    pub async fn get_filtered(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, DbErr> {
        let mut query = entity::prelude::Appointment::find();

        if let Some(barber_id) = filter.barber_id {
            query = query.filter(entity::appointment::Column::BarberId.eq(barber_id));
        }
        if let Some(client_id) = filter.client_id {
            query = query.filter(entity::appointment::Column::ClientId.eq(client_id));
        }
        if let Some(date) = filter.date {
            query = query.filter(entity::appointment::Column::Date.eq(date));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::appointment::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_asc(entity::appointment::Column::Date)
            .order_by_asc(entity::appointment::Column::StartMinute)
            .all(self.db)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect()
    }

    /// Sets the status, returning the updated appointment or `None` if it doesn't exist.
    pub async fn update_status(
        &self,
        id: i32,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, DbErr> {
        let Some(entity) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::appointment::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());

        let updated = active_model.update(self.db).await?;

        Appointment::from_entity(updated).map(Some)
    }
}
