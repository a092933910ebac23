use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AppointmentDto, AppointmentListDto, AppointmentListQuery, AppointmentResponseDto,
            AvailableSlotsDto, AvailableSlotsQuery, CreateAppointmentDto, UpdateStatusDto,
        },
    },
    server::{
        controller::today,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            validation::{ValidatedJson, ValidatedPath, ValidatedQuery},
        },
        model::appointment::{AppointmentDetail, BookAppointmentParams},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointments";

fn into_list_dto(details: Vec<AppointmentDetail>) -> AppointmentListDto {
    let appointments: Vec<AppointmentDto> =
        details.into_iter().map(AppointmentDetail::into_dto).collect();

    AppointmentListDto {
        success: true,
        count: appointments.len(),
        appointments,
    }
}

/// Book an appointment.
///
/// The end time is derived from the service's duration and the service's current price is
/// copied onto the appointment. Any authenticated user may book.
///
/// # Returns
/// - `201 Created` - The pending appointment
/// - `400 Bad Request` - Invalid fields, past date, closed day, or time slot already taken
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - Barber inactive/missing or service unavailable/missing
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentResponseDto),
        (status = 400, description = "Invalid booking or slot already reserved", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Barber or service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let params = BookAppointmentParams::from_dto(payload)?;

    let detail = AppointmentService::new(&state.db, &state.schedule)
        .book(&user, params, today())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AppointmentResponseDto {
            success: true,
            appointment: detail.into_dto(),
        }),
    ))
}

/// List the caller's own appointments.
///
/// Newest date first, then latest start time first.
#[utoipa::path(
    get,
    path = "/api/appointments/my",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's appointments", body = AppointmentListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn my_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let details = AppointmentService::new(&state.db, &state.schedule)
        .my_appointments(user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_list_dto(details))))
}

/// List appointments.
///
/// Admins see every appointment, barbers only those at their own chair. Ordered by date then
/// start time.
///
/// # Access Control
/// - `ViewAppointments` - Admins and barbers
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(AppointmentListQuery),
    responses(
        (status = 200, description = "Appointments", body = AppointmentListDto),
        (status = 400, description = "Malformed filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin or barber", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedQuery(query): ValidatedQuery<AppointmentListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ViewAppointments])
        .await?;

    let details = AppointmentService::new(&state.db, &state.schedule)
        .list(&user, query)
        .await?;

    Ok((StatusCode::OK, Json(into_list_dto(details))))
}

/// Change an appointment's status.
///
/// Admins may change any appointment and barbers those at their chair; clients may only
/// cancel their own. Re-activating a cancelled appointment fails if its slot was taken since.
#[utoipa::path(
    put,
    path = "/api/appointments/{id}/status",
    tag = APPOINTMENT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = AppointmentResponseDto),
        (status = 400, description = "Invalid status or slot already reserved", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to change this appointment", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let detail = AppointmentService::new(&state.db, &state.schedule)
        .update_status(&user, id, payload.status)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AppointmentResponseDto {
            success: true,
            appointment: detail.into_dto(),
        }),
    ))
}

/// Get the slot grid for a barber on a day.
///
/// Each slot says whether a booking starting then (for the service's duration, or one slot
/// without `serviceId`) would fit. Past dates and closed days return every slot unavailable
/// with a `reason`.
#[utoipa::path(
    get,
    path = "/api/appointments/available",
    tag = APPOINTMENT_TAG,
    params(AvailableSlotsQuery),
    responses(
        (status = 200, description = "Slot grid", body = AvailableSlotsDto),
        (status = 400, description = "Missing or malformed barberId or date", body = ErrorDto),
        (status = 404, description = "Barber or service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn available_slots(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<AvailableSlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let report = AppointmentService::new(&state.db, &state.schedule)
        .available_slots(query.barber_id, query.date, query.service_id, today())
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
