//! Barber factory for creating barber profiles linked to existing users.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating barber profiles.
///
/// The linked user must already exist; see
/// [`create_barber_with_user`](crate::factory::helpers::create_barber_with_user) to create both.
pub struct BarberFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    specialty: String,
    experience: i32,
    description: Option<String>,
    active: bool,
}

impl<'a> BarberFactory<'a> {
    /// Creates a new BarberFactory for `user_id`.
    ///
    /// Defaults: specialty `"both"`, 3 years of experience, no description, active.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            specialty: "both".to_string(),
            experience: 3,
            description: None,
            active: true,
        }
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the barber entity into the database.
    pub async fn build(self) -> Result<entity::barber::Model, DbErr> {
        entity::barber::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            specialty: ActiveValue::Set(self.specialty),
            experience: ActiveValue::Set(self.experience),
            description: ActiveValue::Set(self.description),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active barber profile for `user_id` with default values.
pub async fn create_barber(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::barber::Model, DbErr> {
    BarberFactory::new(db, user_id).build().await
}
