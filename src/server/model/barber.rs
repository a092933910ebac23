//! Barber domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::{
    appointment::BarberSummaryDto,
    barber::{AvailableBarberDto, BarberDto, CreateBarberDto, Specialty},
};

/// A barber profile joined with its linked user's contact details.
#[derive(Debug, Clone, PartialEq)]
pub struct Barber {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: Specialty,
    /// Years
    pub experience: i32,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Barber {
    /// Converts a barber row and its linked user row into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The barber entity from the database
    /// - `user` - The linked user, `None` if the join found nothing
    ///
    /// # Returns
    /// - `Ok(Barber)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Missing user or unknown stored specialty
    pub fn from_entity(
        entity: entity::barber::Model,
        user: Option<entity::user::Model>,
    ) -> Result<Self, DbErr> {
        let user = user.ok_or_else(|| {
            DbErr::Custom(format!("Barber {} has no linked user", entity.id))
        })?;

        let specialty = entity.specialty.parse::<Specialty>().map_err(|e| {
            DbErr::Custom(format!(
                "Failed to parse specialty of barber {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            specialty,
            experience: entity.experience,
            description: entity.description,
            active: entity.active,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> BarberDto {
        BarberDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            specialty: self.specialty,
            experience: self.experience,
            description: self.description,
            is_active: self.active,
        }
    }

    pub fn to_summary_dto(&self) -> BarberSummaryDto {
        BarberSummaryDto {
            id: self.id,
            name: self.name.clone(),
            specialty: self.specialty,
        }
    }
}

/// An active barber and whether they can take the requested booking.
#[derive(Debug, Clone)]
pub struct BarberAvailability {
    pub barber: Barber,
    pub available: bool,
}

impl BarberAvailability {
    pub fn into_dto(self) -> AvailableBarberDto {
        AvailableBarberDto {
            id: self.barber.id,
            name: self.barber.name,
            specialty: self.barber.specialty,
            available: self.available,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBarberParams {
    pub user_id: i32,
    pub specialty: Specialty,
    pub experience: i32,
    pub description: Option<String>,
}

impl CreateBarberParams {
    pub fn from_dto(dto: CreateBarberDto) -> Self {
        Self {
            user_id: dto.user_id,
            specialty: dto.specialty.unwrap_or_default(),
            experience: dto.experience,
            description: dto
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
        }
    }
}
