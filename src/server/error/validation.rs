use thiserror::Error;

use crate::{model::api::FieldErrorDto, server::model::schedule::DateRejection};

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Field name as it appears on the wire (camelCase).
    pub field: String,
    pub message: String,
}

/// Client input that fails validation or a booking rule.
///
/// Results in a 400 Bad Request whose `details` list holds `fields`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidInput {
    pub message: String,
    pub fields: Vec<FieldIssue>,
}

impl InvalidInput {
    /// Rejection not tied to a particular field.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Validation failure for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: "Validation failed".to_string(),
            fields: vec![FieldIssue {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    pub fn details(&self) -> Vec<FieldErrorDto> {
        self.fields
            .iter()
            .map(|issue| FieldErrorDto {
                field: issue.field.clone(),
                message: issue.message.clone(),
            })
            .collect()
    }
}

/// Flattens `validator` errors into one issue per failed rule, sorted by field name.
impl From<validator::ValidationErrors> for InvalidInput {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldIssue> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = camel_case(field.as_ref());
                errors.iter().map(move |error| FieldIssue {
                    field: field.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", error.code)),
                })
            })
            .collect();

        fields.sort_by(|a, b| a.field.cmp(&b.field));

        Self {
            message: "Validation failed".to_string(),
            fields,
        }
    }
}

impl From<DateRejection> for InvalidInput {
    fn from(rejection: DateRejection) -> Self {
        Self::field("date", rejection.to_string())
    }
}

/// `service_id` → `serviceId`, matching the serialized field names.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
