use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        barber::{
            AvailableBarbersDto, AvailableBarbersQuery, BarberDto, BarberListDto,
            BarberResponseDto, CreateBarberDto,
        },
    },
    server::{
        controller::today,
        error::{validation::InvalidInput, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            validation::{ValidatedJson, ValidatedPath, ValidatedQuery},
        },
        model::{barber::CreateBarberParams, schedule::TimeOfDay},
        service::barber::{AvailabilityProbe, BarberService},
        state::AppState,
    },
};

/// Tag for grouping barber endpoints in OpenAPI documentation
pub static BARBER_TAG: &str = "barbers";

/// List active barbers.
///
/// Ordered by years of experience, most experienced first.
#[utoipa::path(
    get,
    path = "/api/barbers",
    tag = BARBER_TAG,
    responses(
        (status = 200, description = "Active barbers", body = BarberListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_barbers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let barbers = BarberService::new(&state.db, &state.schedule)
        .list_active()
        .await?;

    let barbers: Vec<BarberDto> = barbers.into_iter().map(|b| b.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(BarberListDto {
            success: true,
            count: barbers.len(),
            barbers,
        }),
    ))
}

/// Get a barber by ID.
#[utoipa::path(
    get,
    path = "/api/barbers/{id}",
    tag = BARBER_TAG,
    params(("id" = i32, Path, description = "Barber ID")),
    responses(
        (status = 200, description = "The barber", body = BarberResponseDto),
        (status = 404, description = "Barber not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_barber(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let barber = BarberService::new(&state.db, &state.schedule).get(id).await?;

    Ok((
        StatusCode::OK,
        Json(BarberResponseDto {
            success: true,
            barber: barber.into_dto(),
        }),
    ))
}

/// List active barbers with their availability.
///
/// When both `date` and `time` are given, each barber's `available` flag says whether a
/// booking starting then fits their schedule (using the service's duration if `serviceId` is
/// given). Otherwise every active barber is reported available.
#[utoipa::path(
    get,
    path = "/api/barbers/available",
    tag = BARBER_TAG,
    params(AvailableBarbersQuery),
    responses(
        (status = 200, description = "Active barbers with availability", body = AvailableBarbersDto),
        (status = 400, description = "Malformed date or time", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn available_barbers(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AvailableBarbersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let time = query
        .time
        .as_deref()
        .map(|time| {
            time.parse::<TimeOfDay>()
                .map_err(|e| InvalidInput::field("time", e.to_string()))
        })
        .transpose()?;

    let probe = match (query.date, time) {
        (Some(date), Some(time)) => Some(AvailabilityProbe {
            date,
            time,
            service_id: query.service_id,
        }),
        _ => None,
    };

    let barbers = BarberService::new(&state.db, &state.schedule)
        .list_available(probe, today())
        .await?;

    let barbers: Vec<_> = barbers.into_iter().map(|b| b.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(AvailableBarbersDto {
            success: true,
            date: query.date,
            time: time.map(|t| t.to_string()),
            count: barbers.len(),
            barbers,
        }),
    ))
}

/// Create a barber profile for an existing user.
///
/// The user's role is switched to `barber`.
///
/// # Access Control
/// - `ManageBarbers` - Admins only
///
/// # Returns
/// - `201 Created` - The new barber profile
/// - `400 Bad Request` - Invalid fields or the user already has a profile
/// - `404 Not Found` - User does not exist
#[utoipa::path(
    post,
    path = "/api/barbers",
    tag = BARBER_TAG,
    security(("bearer" = [])),
    request_body = CreateBarberDto,
    responses(
        (status = 201, description = "Barber created", body = BarberResponseDto),
        (status = 400, description = "Invalid fields or profile already exists", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_barber(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateBarberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageBarbers])
        .await?;

    let barber = BarberService::new(&state.db, &state.schedule)
        .create(CreateBarberParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BarberResponseDto {
            success: true,
            barber: barber.into_dto(),
        }),
    ))
}
