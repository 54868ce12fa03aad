//! Column parameters
//!
//! A [`Parameter`] binds a named output column to a rendering rule and an
//! attribute type. Applying a parameter renders the event, skips silently
//! when the rendered value is absent or empty, and otherwise inserts one
//! typed attribute into the item under the configured column name.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::Deserialize;

use crate::attribute;
use crate::error::AppenderError;
use crate::event::LogEvent;
use crate::layout::Layout;

/// Attribute type a parameter produces
///
/// The codes mirror the DynamoDB field type identifiers used in legacy
/// configuration files: string 0, numeric 2, binary 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ParameterKind {
    /// String attribute (the default)
    #[default]
    #[serde(alias = "S", alias = "string")]
    String,

    /// Numeric attribute
    #[serde(alias = "N", alias = "numeric")]
    Numeric,

    /// Binary attribute
    #[serde(alias = "B", alias = "binary")]
    Binary,
}

impl ParameterKind {
    /// Map a legacy numeric type code to a kind
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::String),
            2 => Some(Self::Numeric),
            4 => Some(Self::Binary),
            _ => None,
        }
    }

    /// Legacy numeric type code for this kind
    pub fn code(self) -> u8 {
        match self {
            Self::String => 0,
            Self::Numeric => 2,
            Self::Binary => 4,
        }
    }
}

/// A configured binding from a rendering rule to an output column
pub struct Parameter {
    name: String,
    kind: ParameterKind,
    layout: Box<dyn Layout>,
}

impl Parameter {
    /// Create a string parameter
    pub fn new(name: impl Into<String>, layout: impl Layout + 'static) -> Self {
        Self::with_kind(name, ParameterKind::String, layout)
    }

    /// Create a parameter with an explicit attribute type
    pub fn with_kind(
        name: impl Into<String>,
        kind: ParameterKind,
        layout: impl Layout + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            layout: Box::new(layout),
        }
    }

    /// Column name this parameter populates
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute type this parameter produces
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Render the event and insert the resulting attribute into the item
    ///
    /// Absent or empty rendered values contribute nothing. Later parameters
    /// sharing a column name overwrite earlier ones. Validation errors
    /// propagate.
    pub fn apply(
        &self,
        item: &mut HashMap<String, AttributeValue>,
        event: &LogEvent,
    ) -> Result<(), AppenderError> {
        let Some(rendered) = self.layout.format(event) else {
            return Ok(());
        };

        if rendered.is_empty() {
            return Ok(());
        }

        let attribute = match self.kind {
            ParameterKind::String => attribute::build_string(rendered.as_text())?,
            ParameterKind::Numeric => attribute::build_numeric(rendered.as_text())?,
            ParameterKind::Binary => attribute::build_binary(Some(rendered.as_bytes()))?,
        };

        item.insert(self.name.clone(), attribute);
        Ok(())
    }
}

impl std::fmt::Debug for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod parameter_test;
