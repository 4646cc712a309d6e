//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejection is an [`ErrorCode::InvalidRequest`](crate::domain::ErrorCode)
//! with `{"field", "code"}` details, raised before any port is called.

use actix_web::error::UrlencodedError;
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, NameValidationError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyName,
    InvalidForm,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EmptyName => "empty_name",
            ErrorCode::InvalidForm => "invalid_form",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn name_error(field: FieldName, err: NameValidationError) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": field.as_str(),
        "code": ErrorCode::EmptyName.as_str(),
    }))
}

fn form_error(err: &UrlencodedError) -> Error {
    Error::invalid_request(format!("invalid form payload: {err}")).with_details(json!({
        "code": ErrorCode::InvalidForm.as_str(),
    }))
}

/// Form extractor configuration turning decode failures into domain errors.
///
/// Missing fields and values that fail type coercion (a non-numeric price, an
/// availability other than `true`/`false`) are rejected here, so the handler
/// never runs.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err: UrlencodedError, req: &HttpRequest| {
        debug!(error = %err, path = req.path(), "form payload rejected");
        form_error(&err).into()
    })
}
