//! Extractors that deserialize and validate request input in one step.
//!
//! All of them map deserialization failures and `validator` failures to the same 400 envelope as
//! every other validation error.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::error::{validation::InvalidInput, AppError};

/// JSON body that has passed its `validator` rules.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| InvalidInput::new(rejection.body_text()))?;

        value.validate().map_err(InvalidInput::from)?;

        Ok(Self(value))
    }
}

/// Query string that has passed its `validator` rules.
///
/// Malformed values, such as a date that isn't `YYYY-MM-DD`, are rejected the same way.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| InvalidInput::new(rejection.body_text()))?;

        value.validate().map_err(InvalidInput::from)?;

        Ok(Self(value))
    }
}

/// Path parameters, such as a numeric `{id}`.
///
/// A segment that doesn't parse is a 400 in the JSON envelope rather than axum's plain-text
/// rejection.
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| InvalidInput::new(rejection.body_text()))?;

        Ok(Self(value))
    }
}
