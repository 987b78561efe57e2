// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unwrapping of map-shaped RPC results.

use serde_json::Value;

use crate::error::ClientError;

/// Extract `field` from a map-shaped result. An absent map or key means
/// the object does not exist; that is not-found, not an error.
pub(crate) fn take_field(result: Value, field: &str) -> Option<Value> {
    match result {
        Value::Object(mut map) => map.remove(field),
        _ => None,
    }
}

/// Extract the list container from a list-shaped result. A missing
/// container is a structural fault in the reply, not an empty list.
pub(crate) fn require_list(result: Value) -> Result<Value, ClientError> {
    take_field(result, "list").ok_or(ClientError::MalformedResponse("list"))
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
