//! Typed attribute construction
//!
//! Builds DynamoDB [`AttributeValue`]s from rendered scalar values. Exactly
//! one attribute variant is populated per build; validation failures
//! propagate as errors and are never swallowed.

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::error::AppenderError;

/// Build a string attribute
///
/// Fails with [`AppenderError::NullInput`] when the value is absent and
/// [`AppenderError::EmptyInput`] when it is empty or whitespace-only.
pub fn build_string(value: Option<&str>) -> Result<AttributeValue, AppenderError> {
    let value = value.ok_or(AppenderError::NullInput("value"))?;

    if value.trim().is_empty() {
        return Err(AppenderError::EmptyInput("value"));
    }

    Ok(AttributeValue::S(value.to_string()))
}

/// Build a numeric attribute holding the textual numeric form
///
/// Fails with [`AppenderError::NullInput`] when the value is absent and
/// [`AppenderError::NotNumeric`] when it does not parse as a finite number.
pub fn build_numeric(value: Option<&str>) -> Result<AttributeValue, AppenderError> {
    let value = value.ok_or(AppenderError::NullInput("value"))?;
    let text = value.trim();

    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(AttributeValue::N(text.to_string())),
        _ => Err(AppenderError::not_numeric(text)),
    }
}

/// Build a binary attribute wrapping the encoded bytes
///
/// Fails with [`AppenderError::NullInput`] when the value is absent.
pub fn build_binary(value: Option<&[u8]>) -> Result<AttributeValue, AppenderError> {
    let value = value.ok_or(AppenderError::NullInput("value"))?;

    Ok(AttributeValue::B(Blob::new(value)))
}

#[cfg(test)]
#[path = "attribute_test.rs"]
mod attribute_test;
