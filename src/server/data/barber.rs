//! Barber profile repository.
//!
//! Every read joins the linked user so the returned `Barber` carries name and contact details.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::barber::{Barber, CreateBarberParams};

pub struct BarberRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BarberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets active barbers, most experienced first
    pub async fn get_active(&self) -> Result<Vec<Barber>, DbErr> {
        entity::prelude::Barber::find()
            .filter(entity::barber::Column::Active.eq(true))
            .order_by_desc(entity::barber::Column::Experience)
            .order_by_asc(entity::barber::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(barber, user)| Barber::from_entity(barber, user))
            .collect()
    }

    /// Gets a barber by ID, active or not
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Barber>, DbErr> {
        entity::prelude::Barber::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
            .map(|(barber, user)| Barber::from_entity(barber, user))
            .transpose()
    }

    /// Gets the barber profile linked to a user
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Barber>, DbErr> {
        entity::prelude::Barber::find()
            .filter(entity::barber::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?
            .map(|(barber, user)| Barber::from_entity(barber, user))
            .transpose()
    }

    /// Loads barbers by ID, keyed by ID
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Barber>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        entity::prelude::Barber::find()
            .filter(entity::barber::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(barber, user)| Barber::from_entity(barber, user).map(|b| (b.id, b)))
            .collect()
    }

    /// Creates an active barber profile and returns it joined with its user
    pub async fn create(&self, params: CreateBarberParams) -> Result<Barber, DbErr> {
        let entity = entity::barber::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            specialty: ActiveValue::Set(params.specialty.as_str().to_string()),
            experience: ActiveValue::Set(params.experience),
            description: ActiveValue::Set(params.description),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(entity.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Barber with id {} not found after creation",
            entity.id
        )))
    }
}
