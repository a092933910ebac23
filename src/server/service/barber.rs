use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::Role,
    server::{
        data::{
            appointment::AppointmentRepository, barber::BarberRepository,
            catalog::CatalogRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            barber::{Barber, BarberAvailability, CreateBarberParams},
            schedule::{SchedulePolicy, TimeOfDay, TimeRange},
        },
        service::availability,
    },
};

/// A specific date and start time to check barbers against.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityProbe {
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub service_id: Option<i32>,
}

pub struct BarberService<'a> {
    db: &'a DatabaseConnection,
    policy: &'a SchedulePolicy,
}

impl<'a> BarberService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: &'a SchedulePolicy) -> Self {
        Self { db, policy }
    }

    /// Lists active barbers, most experienced first
    pub async fn list_active(&self) -> Result<Vec<Barber>, AppError> {
        Ok(BarberRepository::new(self.db).get_active().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Barber, AppError> {
        BarberRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Barber not found".to_string()))
    }

    /// Lists active barbers with whether each can take a booking at `probe`.
    ///
    /// Without a probe every active barber is reported available. With one, a barber is
    /// available when the date takes bookings, the start is on the slot grid and the
    /// booking doesn't overlap anything on their chair.
    pub async fn list_available(
        &self,
        probe: Option<AvailabilityProbe>,
        today: NaiveDate,
    ) -> Result<Vec<BarberAvailability>, AppError> {
        let barbers = BarberRepository::new(self.db).get_active().await?;

        let Some(probe) = probe else {
            return Ok(barbers
                .into_iter()
                .map(|barber| BarberAvailability {
                    barber,
                    available: true,
                })
                .collect());
        };

        let duration = match probe.service_id {
            Some(service_id) => CatalogRepository::new(self.db)
                .get_by_id(service_id)
                .await?
                .filter(|service| service.available)
                .ok_or_else(|| AppError::NotFound("Service not found or unavailable".to_string()))?
                .duration_minutes(),
            None => self.policy.slot_minutes,
        };

        let bookable = self.policy.check_date(probe.date, today).is_ok()
            && self.policy.is_slot_start(probe.time);
        let candidate = TimeRange::starting_at(probe.time, duration).filter(|_| bookable);

        let appointment_repo = AppointmentRepository::new(self.db);
        let mut result = Vec::with_capacity(barbers.len());

        for barber in barbers {
            let available = match candidate {
                Some(candidate) => {
                    let booked = appointment_repo
                        .get_booked_ranges(barber.id, probe.date)
                        .await?;
                    availability::find_conflict(&candidate, &booked).is_none()
                }
                None => false,
            };

            result.push(BarberAvailability { barber, available });
        }

        Ok(result)
    }

    /// Creates a barber profile for an existing user and gives them the barber role.
    ///
    /// # Returns
    /// - `Ok(Barber)` - The new profile
    /// - `Err(AppError::NotFound)` - No user with `params.user_id`
    /// - `Err(AppError::BadRequest)` - The user already has a barber profile
    pub async fn create(&self, params: CreateBarberParams) -> Result<Barber, AppError> {
        let user_id = params.user_id;

        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if BarberRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "User already has a barber profile".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let barber = BarberRepository::new(&txn).create(params).await?;
        UserRepository::new(&txn).set_role(user_id, Role::Barber).await?;

        txn.commit().await?;

        tracing::info!("Created barber {} for user {}", barber.id, user_id);

        Ok(barber)
    }
}
