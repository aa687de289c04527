//! Request body validation.
//!
//! DTOs declare their constraints with `validator` derives. [`ValidatedJson`]
//! deserializes the body, runs the validation and turns failures into
//! [`ApiError::Validation`] with one [`FieldError`] per failed constraint.
//! [`IdPath`] does the same for the `{id}` path segment.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::{ApiError, FieldError};

/// JSON body extractor that rejects invalid payloads with a 400
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(field_errors(&errors)))?;

        Ok(Self(value))
    }
}

/// `{id}` path extractor; ids that do not fit an `i32` are a malformed request
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;

        Ok(Self(id))
    }
}

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Flatten `validator` errors into a list sorted by property.
///
/// Properties use the camelCase names of the JSON body.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect_field_errors("", errors, &mut out);
    // Stable sort keeps the declaration order of several errors on one field
    out.sort_by(|a, b| a.property.cmp(&b.property));
    out
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let field = to_camel_case(field);
        let property = if prefix.is_empty() {
            field
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(errors) => {
                out.extend(errors.iter().map(|error| FieldError {
                    property: property.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(&property, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(&format!("{property}[{index}]"), nested, out);
                }
            }
        }
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
