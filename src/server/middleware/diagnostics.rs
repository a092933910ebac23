//! Response layer that decides whether 500 responses carry their underlying error.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::{
        error::{InternalErrorDetail, INTERNAL_ERROR_MESSAGE},
        state::AppState,
    },
};

/// Removes the [`InternalErrorDetail`] extension from a response and, when
/// `AppState::expose_internal_details` is set, re-renders the body with it in `detail`.
///
/// Applied with `axum::middleware::map_response_with_state`.
pub async fn expose_internal_detail(
    State(state): State<AppState>,
    mut response: Response,
) -> Response {
    let Some(InternalErrorDetail(detail)) =
        response.extensions_mut().remove::<InternalErrorDetail>()
    else {
        return response;
    };

    if !state.expose_internal_details {
        return response;
    }

    let mut body = ErrorDto::new(INTERNAL_ERROR_MESSAGE);
    body.detail = Some(detail);

    (response.status(), Json(body)).into_response()
}
