//! Machine-checkable JSON Schema documents for the wire format.
//!
//! Both documents carry the protocol version under
//! [`VERSION_KEYWORD`]. Any change to a document shape or to a closed
//! enumeration must be accompanied by a bump of
//! [`PROTOCOL_VERSION`](crate::PROTOCOL_VERSION).

use schemars::{Schema, schema_for};

use crate::envelope::{PROTOCOL_VERSION, RequestEnvelope, Response};

/// Schema keyword under which the protocol version is recorded.
pub const VERSION_KEYWORD: &str = "x-protocol-version";

/// Returns the schema for request documents.
#[must_use]
pub fn request_schema() -> Schema {
    annotate(schema_for!(RequestEnvelope), "Request")
}

/// Returns the schema for response documents.
#[must_use]
pub fn response_schema() -> Schema {
    annotate(schema_for!(Response), "Response")
}

fn annotate(mut schema: Schema, title: &str) -> Schema {
    schema.insert(String::from("title"), title.into());
    schema.insert(
        String::from(VERSION_KEYWORD),
        PROTOCOL_VERSION.to_string().into(),
    );
    schema
}
