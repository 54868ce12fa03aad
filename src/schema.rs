//! Fixed-schema column set
//!
//! The fixed record shape written per event, expressed as a canned
//! parameter list. `Id` and `TimeStamp` are always present; every other
//! column is included only when its source value is non-empty.

use crate::layout::EventField;
use crate::parameter::{Parameter, ParameterKind};

/// Column key names used in the DynamoDB table
pub mod columns {
    /// Generated unique id column
    pub const ID: &str = "Id";

    /// Timestamp column
    pub const TIMESTAMP: &str = "TimeStamp";

    /// Message column
    pub const MESSAGE: &str = "Message";

    /// Log level column
    pub const LEVEL: &str = "Level";

    /// Username column
    pub const USERNAME: &str = "Username";

    /// Machine name column
    pub const MACHINE_NAME: &str = "MachineName";

    /// Thread name column
    pub const THREAD_NAME: &str = "ThreadName";

    /// App domain column
    pub const APP_DOMAIN: &str = "AppDomain";

    /// Identity column
    pub const IDENTITY: &str = "Identity";

    /// Exception message column
    pub const EXCEPTION_MESSAGE: &str = "ExceptionMessage";

    /// Stack trace column
    pub const STACK_TRACE: &str = "StackTrace";

    /// Serialized exception column
    pub const EXCEPTION: &str = "Exception";
}

/// Build the fixed-schema parameter list
///
/// When `serialize_exceptions` is set, attached exceptions are additionally
/// persisted as a byte-encoded binary column.
pub fn default_parameters(serialize_exceptions: bool) -> Vec<Parameter> {
    let mut parameters = vec![
        Parameter::new(columns::ID, EventField::EventId),
        Parameter::new(columns::TIMESTAMP, EventField::Timestamp),
        Parameter::new(columns::MESSAGE, EventField::Message),
        Parameter::new(columns::LEVEL, EventField::Level),
        Parameter::new(columns::USERNAME, EventField::UserName),
        Parameter::new(columns::MACHINE_NAME, EventField::MachineName),
        Parameter::new(columns::THREAD_NAME, EventField::ThreadName),
        Parameter::new(columns::APP_DOMAIN, EventField::Domain),
        Parameter::new(columns::IDENTITY, EventField::Identity),
        Parameter::new(columns::EXCEPTION_MESSAGE, EventField::ExceptionMessage),
        Parameter::new(columns::STACK_TRACE, EventField::StackTrace),
    ];

    if serialize_exceptions {
        parameters.push(Parameter::with_kind(
            columns::EXCEPTION,
            ParameterKind::Binary,
            EventField::ExceptionPayload,
        ));
    }

    parameters
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;
