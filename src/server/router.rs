//! Route table, OpenAPI document and HTTP layers.

use axum::{
    middleware::map_response_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{appointment, auth, barber, catalog, meta},
    middleware::diagnostics::expose_internal_detail,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Barbershop API", description = "Booking backend for a barbershop"),
    paths(
        meta::index,
        meta::health,
        auth::register,
        auth::login,
        auth::get_me,
        auth::update_me,
        catalog::list_services,
        catalog::get_service,
        catalog::create_service,
        catalog::update_service,
        catalog::delete_service,
        barber::list_barbers,
        barber::get_barber,
        barber::available_barbers,
        barber::create_barber,
        appointment::create_appointment,
        appointment::my_appointments,
        appointment::list_appointments,
        appointment::update_appointment_status,
        appointment::available_slots,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "meta", description = "Service banner and health"),
        (name = "auth", description = "Registration, login and profile"),
        (name = "services", description = "Service catalog"),
        (name = "barbers", description = "Barber profiles and availability"),
        (name = "appointments", description = "Booking and appointment management"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` JWT security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::index))
        .route("/health", get(meta::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::get_me).put(auth::update_me))
        .route(
            "/api/services",
            get(catalog::list_services).post(catalog::create_service),
        )
        .route(
            "/api/services/{id}",
            get(catalog::get_service)
                .put(catalog::update_service)
                .delete(catalog::delete_service),
        )
        .route(
            "/api/barbers",
            get(barber::list_barbers).post(barber::create_barber),
        )
        .route("/api/barbers/available", get(barber::available_barbers))
        .route("/api/barbers/{id}", get(barber::get_barber))
        .route(
            "/api/appointments",
            get(appointment::list_appointments).post(appointment::create_appointment),
        )
        .route("/api/appointments/my", get(appointment::my_appointments))
        .route(
            "/api/appointments/available",
            get(appointment::available_slots),
        )
        .route(
            "/api/appointments/{id}/status",
            put(appointment::update_appointment_status),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(meta::not_found)
}

/// Builds the complete application with state, error detail, tracing and CORS applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state.clone())
        .layer(map_response_with_state(state, expose_internal_detail))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
