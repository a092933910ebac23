use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        catalog::{
            CreateServiceDto, ServiceDto, ServiceListDto, ServiceResponseDto, UpdateServiceDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            validation::{ValidatedJson, ValidatedPath},
        },
        model::catalog::{CreateServiceParams, UpdateServiceParams},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping service catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "services";

/// List bookable services.
///
/// Returns every service whose availability flag is set, ordered by name.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Available services", body = ServiceListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_services(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let services = CatalogService::new(&state.db).list().await?;

    let services: Vec<ServiceDto> = services.into_iter().map(|s| s.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(ServiceListDto {
            success: true,
            count: services.len(),
            services,
        }),
    ))
}

/// Get a service by ID.
///
/// Retired services are still returned so existing bookings can show them.
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "The service", body = ServiceResponseDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db).get(id).await?;

    Ok((
        StatusCode::OK,
        Json(ServiceResponseDto {
            success: true,
            service: service.into_dto(),
        }),
    ))
}

/// Create a service.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
///
/// # Returns
/// - `201 Created` - The new service
/// - `400 Bad Request` - Invalid fields
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/services",
    tag = CATALOG_TAG,
    security(("bearer" = [])),
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created", body = ServiceResponseDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageCatalog])
        .await?;

    let service = CatalogService::new(&state.db)
        .create(CreateServiceParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ServiceResponseDto {
            success: true,
            service: service.into_dto(),
        }),
    ))
}

/// Update a service.
///
/// Applies only the fields present in the body.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = CATALOG_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponseDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageCatalog])
        .await?;

    let service = CatalogService::new(&state.db)
        .update(id, UpdateServiceParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ServiceResponseDto {
            success: true,
            service: service.into_dto(),
        }),
    ))
}

/// Retire a service.
///
/// Marks the service unavailable instead of deleting it; past appointments keep their
/// reference.
///
/// # Access Control
/// - `ManageCatalog` - Admins only
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = CATALOG_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service retired", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageCatalog])
        .await?;

    CatalogService::new(&state.db).retire(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            success: true,
            message: "Service removed from the catalog".to_string(),
        }),
    ))
}
