use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned by every failing request.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    pub error: String,
    /// Per-field validation failures, present for validation errors only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldErrorDto>,
    /// Diagnostic detail for unexpected failures, omitted in production.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: Vec::new(),
            detail: None,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Plain confirmation returned by operations without a resource body.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

/// 404 body for unmatched routes.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RouteNotFoundDto {
    pub success: bool,
    pub error: String,
    pub path: String,
    pub method: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    pub success: bool,
    /// `connected` or `disconnected`.
    pub database: String,
    /// `ok` or `degraded`.
    pub status: String,
    pub uptime_seconds: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct IndexDto {
    pub success: bool,
    pub message: String,
    pub version: String,
    /// Entry points grouped by resource, e.g. `"auth" -> "/api/auth"`.
    pub endpoints: std::collections::BTreeMap<String, String>,
}
