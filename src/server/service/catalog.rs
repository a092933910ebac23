use sea_orm::DatabaseConnection;

use crate::server::{
    data::catalog::CatalogRepository,
    error::AppError,
    model::catalog::{CreateServiceParams, Service, UpdateServiceParams},
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists services that can currently be booked
    pub async fn list(&self) -> Result<Vec<Service>, AppError> {
        Ok(CatalogRepository::new(self.db).get_available().await?)
    }

    /// Gets a service by ID regardless of availability
    pub async fn get(&self, id: i32) -> Result<Service, AppError> {
        CatalogRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn create(&self, params: CreateServiceParams) -> Result<Service, AppError> {
        let service = CatalogRepository::new(self.db).create(params).await?;

        tracing::info!("Created service {} ({})", service.id, service.name);

        Ok(service)
    }

    pub async fn update(&self, id: i32, params: UpdateServiceParams) -> Result<Service, AppError> {
        CatalogRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    /// Soft-deletes a service by marking it unavailable
    pub async fn retire(&self, id: i32) -> Result<(), AppError> {
        let found = CatalogRepository::new(self.db)
            .set_available(id, false)
            .await?;

        if !found {
            return Err(AppError::NotFound("Service not found".to_string()));
        }

        tracing::info!("Retired service {}", id);

        Ok(())
    }
}
