//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "msg": ... }` acknowledgement body.
///
/// Used by mutations whose public contract returns a confirmation
/// message rather than the affected row (favorites writes, deletes).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
