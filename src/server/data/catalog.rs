//! Service catalog repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::catalog::{CreateServiceParams, Service, UpdateServiceParams};

pub struct CatalogRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all available services ordered by name
    pub async fn get_available(&self) -> Result<Vec<Service>, DbErr> {
        entity::prelude::Service::find()
            .filter(entity::service::Column::Available.eq(true))
            .order_by_asc(entity::service::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Service::from_entity)
            .collect()
    }

    /// Gets a service by ID whether or not it is available
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Service>, DbErr> {
        entity::prelude::Service::find_by_id(id)
            .one(self.db)
            .await?
            .map(Service::from_entity)
            .transpose()
    }

    /// Loads services by ID, keyed by ID
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Service>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        entity::prelude::Service::find()
            .filter(entity::service::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|entity| Service::from_entity(entity).map(|service| (service.id, service)))
            .collect()
    }

    /// Creates a new service
    pub async fn create(&self, params: CreateServiceParams) -> Result<Service, DbErr> {
        let entity = entity::service::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            duration: ActiveValue::Set(params.duration),
            price: ActiveValue::Set(params.price),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            available: ActiveValue::Set(params.available),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Service::from_entity(entity)
    }

    /// Applies a partial update, returning `None` if the service doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateServiceParams,
    ) -> Result<Option<Service>, DbErr> {
        let Some(entity) = entity::prelude::Service::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::service::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(duration) = params.duration {
            active_model.duration = ActiveValue::Set(duration);
        }
        if let Some(price) = params.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(category) = params.category {
            active_model.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(available) = params.available {
            active_model.available = ActiveValue::Set(available);
        }

        let updated = active_model.update(self.db).await?;

        Service::from_entity(updated).map(Some)
    }

    /// Sets the availability flag, returning whether the service exists
    pub async fn set_available(&self, id: i32, available: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Service::update_many()
            .col_expr(
                entity::service::Column::Available,
                sea_orm::sea_query::Expr::value(available),
            )
            .filter(entity::service::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
