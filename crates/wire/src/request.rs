// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request-side envelope types.

use serde::Serialize;
use serde_json::Value;

/// Protocol version stamped on every request.
pub const PROTOCOL_VERSION: &str = "2.0";

/// One JSON-RPC request frame.
///
/// `params` is omitted from the wire entirely when absent; `id` is the
/// correlation key the daemon echoes back on the reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub jsonrpc: &'static str,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    pub id: u64,
}

impl RequestEnvelope {
    pub fn new(method: impl Into<String>, params: Option<Value>, id: u64) -> Self {
        Self { jsonrpc: PROTOCOL_VERSION, method: method.into(), params, id }
    }

    /// Serialize to the text frame put on the wire.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Payload for `rpc.add_timer`.
///
/// The daemon re-issues the embedded request every `every_msec`
/// milliseconds; its `id` must come from the reserved high range so the
/// recurring replies are distinguishable from direct call replies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerRegistration {
    pub timer_id: String,
    pub every_msec: u64,
    pub request: RequestEnvelope,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
