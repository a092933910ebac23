use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{
            AuthResponseDto, LoginDto, ProfileResponseDto, RegisterDto, UpdateProfileDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validation::ValidatedJson},
        model::user::{RegisterParams, UpdateProfileParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new client account.
///
/// Creates a user with the `client` role and returns an access token for it. The email is
/// stored lower-cased and the phone as digits only.
///
/// # Returns
/// - `201 Created` - Account created, token issued
/// - `400 Bad Request` - Invalid fields or email already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid fields or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service.register(RegisterParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            success: true,
            token: session.token,
            user: session.user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials valid, token issued
/// - `400 Bad Request` - Missing or malformed fields
/// - `401 Unauthorized` - Unknown email, wrong password or deactivated account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Missing or malformed fields", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service.login(&payload.email, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            success: true,
            token: session.token,
            user: session.user.into_dto(),
        }),
    ))
}

/// Get the authenticated user's profile.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = ProfileResponseDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProfileResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// Update the authenticated user's name and/or phone.
///
/// Absent fields are left unchanged; present fields that fail validation reject the whole
/// request.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Name shorter than 3 characters or phone without 10 or 11 digits
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    put,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponseDto),
        (status = 400, description = "Invalid fields", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(payload): ValidatedJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = AuthService::new(&state.db, &state.tokens);

    let user = service
        .update_profile(user.id, UpdateProfileParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ProfileResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}
