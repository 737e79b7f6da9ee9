//! JSON encoding of whole protocol documents.
//!
//! One document is decoded per invocation and one is encoded. There is no
//! framing: the input buffer must hold exactly one JSON value, optionally
//! surrounded by whitespace. Every failure here is a transport failure.

use thiserror::Error;

use crate::envelope::{RequestEnvelope, Response};

/// Errors raised while decoding or encoding a protocol document.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input held nothing but whitespace.
    #[error("plugin request was empty")]
    EmptyInput,
    /// The input was not a well-formed request document.
    #[error("invalid plugin request JSON: {source}")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The response could not be serialised.
    #[error("failed to serialise plugin response: {source}")]
    Encode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Decodes one request document.
///
/// # Errors
///
/// Returns [`CodecError::EmptyInput`] for blank input and
/// [`CodecError::Decode`] for malformed JSON, type mismatches, or enum
/// tokens outside their permitted set.
pub fn decode_request(bytes: &[u8]) -> Result<RequestEnvelope, CodecError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(CodecError::EmptyInput);
    }
    serde_json::from_slice(bytes).map_err(|source| CodecError::Decode { source })
}

/// Encodes one response document.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialisation fails.
pub fn encode_response(response: &Response) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(response).map_err(|source| CodecError::Encode { source })
}
