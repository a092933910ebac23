//! Service catalog domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::catalog::{CreateServiceDto, ServiceCategory, ServiceDto, UpdateServiceDto};

/// A bookable service offered by the shop.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Minutes
    pub duration: i32,
    pub price: f64,
    pub category: ServiceCategory,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl Service {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Service)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored category is unknown or duration isn't positive
    pub fn from_entity(entity: entity::service::Model) -> Result<Self, DbErr> {
        let category = entity.category.parse::<ServiceCategory>().map_err(|e| {
            DbErr::Custom(format!(
                "Failed to parse category of service {}: {}",
                entity.id, e
            ))
        })?;

        if entity.duration <= 0 || entity.duration > i32::from(u16::MAX) {
            return Err(DbErr::Custom(format!(
                "Service {} has invalid duration {}",
                entity.id, entity.duration
            )));
        }

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            duration: entity.duration,
            price: entity.price,
            category,
            available: entity.available,
            created_at: entity.created_at,
        })
    }

    /// Duration in minutes as used by the slot calculator.
    pub fn duration_minutes(&self) -> u16 {
        u16::try_from(self.duration).unwrap_or(u16::MAX)
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            name: self.name,
            description: self.description,
            duration: self.duration,
            price: self.price,
            category: self.category,
            is_available: self.available,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateServiceParams {
    pub name: String,
    pub description: String,
    pub duration: i32,
    pub price: f64,
    pub category: ServiceCategory,
    pub available: bool,
}

impl CreateServiceParams {
    /// Applies defaults: category `hair`, available.
    pub fn from_dto(dto: CreateServiceDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            duration: dto.duration,
            price: dto.price,
            category: dto.category.unwrap_or_default(),
            available: dto.is_available.unwrap_or(true),
        }
    }
}

/// Fields to change; `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct UpdateServiceParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub price: Option<f64>,
    pub category: Option<ServiceCategory>,
    pub available: Option<bool>,
}

impl UpdateServiceParams {
    pub fn from_dto(dto: UpdateServiceDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description.map(|d| d.trim().to_string()),
            duration: dto.duration,
            price: dto.price,
            category: dto.category,
            available: dto.is_available,
        }
    }
}
