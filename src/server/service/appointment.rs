//! Booking, listing and status changes for appointments.
//!
//! Conflict checks and the writes they guard run in one transaction so a booking either
//! lands on a free interval or leaves nothing behind.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        appointment::{AppointmentListQuery, AppointmentStatus},
        user::Role,
    },
    server::{
        data::{
            appointment::AppointmentRepository, barber::BarberRepository,
            catalog::CatalogRepository, user::UserRepository,
        },
        error::{auth::AuthError, validation::InvalidInput, AppError},
        model::{
            appointment::{
                Appointment, AppointmentDetail, AppointmentFilter, AppointmentScope,
                BookAppointmentParams, CreateAppointmentParams, SlotReport,
            },
            schedule::{SchedulePolicy, TimeRange},
            user::User,
        },
        service::availability,
    },
};

const SLOT_TAKEN: &str = "Time slot already reserved for this barber";

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a SchedulePolicy,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: &'a SchedulePolicy) -> Self {
        Self { db, policy }
    }

    /// Books an appointment for `client`.
    ///
    /// # Returns
    /// - `Ok(AppointmentDetail)` - The pending appointment with barber and service
    /// - `Err(AppError::Invalid)` - Past or closed date, start off the slot grid, interval
    ///   crossing midnight, or overlap
    /// - `Err(AppError::NotFound)` - Barber missing or inactive, service missing or unavailable
    pub async fn book(
        &self,
        client: &User,
        params: BookAppointmentParams,
        today: NaiveDate,
    ) -> Result<AppointmentDetail, AppError> {
        self.policy
            .check_date(params.date, today)
            .map_err(InvalidInput::from)?;

        if !self.policy.is_slot_start(params.start) {
            return Err(InvalidInput::field(
                "startTime",
                format!(
                    "Start time must be a {} minute slot between {} and {}",
                    self.policy.slot_minutes, self.policy.open, self.policy.close
                ),
            )
            .into());
        }

        let barber = BarberRepository::new(self.db)
            .get_by_id(params.barber_id)
            .await?
            .filter(|barber| barber.active)
            .ok_or_else(|| AppError::NotFound("Barber not found or inactive".to_string()))?;

        let service = CatalogRepository::new(self.db)
            .get_by_id(params.service_id)
            .await?
            .filter(|service| service.available)
            .ok_or_else(|| AppError::NotFound("Service not found or unavailable".to_string()))?;

        let time = TimeRange::starting_at(params.start, service.duration_minutes()).ok_or_else(
            || InvalidInput::field("startTime", "Appointment must end before midnight"),
        )?;

        let txn = self.db.begin().await?;
        let repo = AppointmentRepository::new(&txn);

        if let Some(existing) = repo
            .find_overlapping(barber.id, params.date, time, None)
            .await?
        {
            txn.rollback().await?;
            tracing::debug!(
                "Rejected booking for barber {} on {} at {}: overlaps appointment {}",
                barber.id,
                params.date,
                time.start,
                existing.id
            );
            return Err(InvalidInput::new(SLOT_TAKEN).into());
        }

        let appointment = repo
            .create(CreateAppointmentParams {
                client_id: client.id,
                barber_id: barber.id,
                service_id: service.id,
                date: params.date,
                time,
                notes: params.notes,
                price: service.price,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} booked appointment {} with barber {} on {} at {}",
            client.id,
            appointment.id,
            barber.id,
            appointment.date,
            appointment.time.start
        );

        Ok(AppointmentDetail {
            appointment,
            client: None,
            barber: Some(barber),
            service: Some(service),
        })
    }

    /// The caller's own bookings, newest first.
    pub async fn my_appointments(&self, user_id: i32) -> Result<Vec<AppointmentDetail>, AppError> {
        let appointments = AppointmentRepository::new(self.db)
            .get_by_client(user_id)
            .await?;

        self.with_details(appointments, false).await
    }

    /// Lists appointments visible to `user`, oldest first.
    ///
    /// Admins see every appointment and barbers their own chair. Clients are denied.
    pub async fn list(
        &self,
        user: &User,
        query: AppointmentListQuery,
    ) -> Result<Vec<AppointmentDetail>, AppError> {
        let scope = match self.scope_for(user).await? {
            AppointmentScope::Client(_) => {
                return Err(AuthError::AccessDenied(
                    user.id,
                    "Client attempted to list all appointments".to_string(),
                )
                .into())
            }
            scope => scope,
        };

        let appointments = AppointmentRepository::new(self.db)
            .get_filtered(AppointmentFilter::from_query(scope, query))
            .await?;

        self.with_details(appointments, true).await
    }

    /// Changes the status of an appointment.
    ///
    /// Admins may change any appointment and barbers those at their chair. Clients may only
    /// cancel their own. Moving an appointment out of `cancelled` re-checks its interval.
    ///
    /// # Returns
    /// - `Ok(AppointmentDetail)` - The updated appointment
    /// - `Err(AppError::NotFound)` - No appointment with this ID
    /// - `Err(AppError::AuthErr)` - Caller may not change this appointment (403)
    /// - `Err(AppError::Invalid)` - Re-activation would overlap another booking
    pub async fn update_status(
        &self,
        user: &User,
        id: i32,
        status: AppointmentStatus,
    ) -> Result<AppointmentDetail, AppError> {
        let appointment = AppointmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        let scope = self.scope_for(user).await?;
        if !scope.contains(&appointment) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("Appointment {} is outside the user's scope", id),
            )
            .into());
        }
        if matches!(scope, AppointmentScope::Client(_)) && status != AppointmentStatus::Cancelled
        {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("Client attempted to set appointment {} to {}", id, status),
            )
            .into());
        }

        let txn = self.db.begin().await?;
        let repo = AppointmentRepository::new(&txn);

        if !appointment.status.is_active() && status.is_active() {
            if let Some(existing) = repo
                .find_overlapping(
                    appointment.barber_id,
                    appointment.date,
                    appointment.time,
                    Some(appointment.id),
                )
                .await?
            {
                txn.rollback().await?;
                tracing::debug!(
                    "Rejected re-activation of appointment {}: overlaps appointment {}",
                    id,
                    existing.id
                );
                return Err(InvalidInput::new(SLOT_TAKEN).into());
            }
        }

        let updated = repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        txn.commit().await?;

        tracing::info!(
            "User {} set appointment {} from {} to {}",
            user.id,
            id,
            appointment.status,
            status
        );

        let mut details = self.with_details(vec![updated], false).await?;
        details
            .pop()
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))
    }

    /// Slot grid for one barber and day.
    ///
    /// Uses the service's duration when `service_id` is given, one slot otherwise. A date that
    /// takes no bookings yields all slots unavailable with the reason attached.
    pub async fn available_slots(
        &self,
        barber_id: i32,
        date: NaiveDate,
        service_id: Option<i32>,
        today: NaiveDate,
    ) -> Result<SlotReport, AppError> {
        BarberRepository::new(self.db)
            .get_by_id(barber_id)
            .await?
            .filter(|barber| barber.active)
            .ok_or_else(|| AppError::NotFound("Barber not found".to_string()))?;

        let duration = match service_id {
            Some(service_id) => CatalogRepository::new(self.db)
                .get_by_id(service_id)
                .await?
                .filter(|service| service.available)
                .ok_or_else(|| AppError::NotFound("Service not found or unavailable".to_string()))?
                .duration_minutes(),
            None => self.policy.slot_minutes,
        };

        if let Err(rejection) = self.policy.check_date(date, today) {
            return Ok(SlotReport {
                date,
                barber_id,
                duration,
                slots: availability::closed_slots(self.policy),
                reason: Some(rejection.to_string()),
            });
        }

        let booked = AppointmentRepository::new(self.db)
            .get_booked_ranges(barber_id, date)
            .await?;

        Ok(SlotReport {
            date,
            barber_id,
            duration,
            slots: availability::slots(self.policy, duration, &booked),
            reason: None,
        })
    }

    /// Resolves which appointments `user` may act on from their role.
    ///
    /// A barber without a profile has no chair and is denied.
    async fn scope_for(&self, user: &User) -> Result<AppointmentScope, AppError> {
        match user.role {
            Role::Admin => Ok(AppointmentScope::All),
            Role::Client => Ok(AppointmentScope::Client(user.id)),
            Role::Barber => BarberRepository::new(self.db)
                .find_by_user_id(user.id)
                .await?
                .map(|barber| AppointmentScope::Chair(barber.id))
                .ok_or_else(|| {
                    AuthError::AccessDenied(user.id, "Barber has no barber profile".to_string())
                        .into()
                }),
        }
    }

    /// Loads barber, service and optionally client for each appointment, preserving order.
    async fn with_details(
        &self,
        appointments: Vec<Appointment>,
        include_client: bool,
    ) -> Result<Vec<AppointmentDetail>, AppError> {
        let barber_ids = appointments.iter().map(|a| a.barber_id).collect();
        let service_ids = appointments.iter().map(|a| a.service_id).collect();

        let barbers = BarberRepository::new(self.db).get_by_ids(barber_ids).await?;
        let services = CatalogRepository::new(self.db)
            .get_by_ids(service_ids)
            .await?;
        let clients = if include_client {
            let client_ids = appointments.iter().map(|a| a.client_id).collect();
            UserRepository::new(self.db).get_by_ids(client_ids).await?
        } else {
            Default::default()
        };

        Ok(appointments
            .into_iter()
            .map(|appointment| AppointmentDetail {
                client: clients.get(&appointment.client_id).cloned(),
                barber: barbers.get(&appointment.barber_id).cloned(),
                service: services.get(&appointment.service_id).cloned(),
                appointment,
            })
            .collect())
    }
}
