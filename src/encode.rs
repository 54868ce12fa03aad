//! Versioned byte-encoding contract for binary columns
//!
//! Binary attributes carry an explicit, versioned encoding instead of an
//! implicit reflection-based serialization: the first byte is the contract
//! version, the remainder is the payload. Decoders reject payloads whose
//! version byte they do not understand, so the stored bytes stay portable
//! across releases.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppenderError;
use crate::event::ExceptionInfo;

/// A value that can round-trip through a versioned byte encoding
pub trait ByteEncode: Sized {
    /// Encoding version written as the first byte of the payload
    const VERSION: u8;

    /// Encode the value to bytes
    fn to_bytes(&self) -> Result<Vec<u8>, AppenderError>;

    /// Decode a value from bytes produced by [`ByteEncode::to_bytes`]
    fn from_bytes(bytes: &[u8]) -> Result<Self, AppenderError>;
}

/// Encode a serde value as a version-prefixed JSON payload
pub(crate) fn encode_json<T: Serialize>(version: u8, value: &T) -> Result<Vec<u8>, AppenderError> {
    let mut buf = vec![version];
    serde_json::to_writer(&mut buf, value).map_err(|e| AppenderError::encode(e.to_string()))?;
    Ok(buf)
}

/// Decode a version-prefixed JSON payload
pub(crate) fn decode_json<T: DeserializeOwned>(
    version: u8,
    bytes: &[u8],
) -> Result<T, AppenderError> {
    let (&found, payload) = bytes
        .split_first()
        .ok_or_else(|| AppenderError::encode("empty payload"))?;

    if found != version {
        return Err(AppenderError::encode(format!(
            "unsupported encoding version {found}, expected {version}"
        )));
    }

    serde_json::from_slice(payload).map_err(|e| AppenderError::encode(e.to_string()))
}

impl ByteEncode for ExceptionInfo {
    const VERSION: u8 = 1;

    fn to_bytes(&self) -> Result<Vec<u8>, AppenderError> {
        encode_json(Self::VERSION, self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, AppenderError> {
        decode_json(Self::VERSION, bytes)
    }
}

#[cfg(test)]
#[path = "encode_test.rs"]
mod encode_test;
