// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the session layer and handlers.

use thiserror::Error;
use uircd_wire::ProtocolError;

/// Errors surfaced by [`Connection`](crate::Connection) and the handlers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Dial, TLS negotiation, or WebSocket handshake failed. The session
    /// is unusable and must be recreated.
    #[error("connection failed: {0}")]
    Connect(String),

    /// No matching reply within the query deadline. The socket itself
    /// remains usable.
    #[error("RPC request timed out")]
    Timeout,

    /// The daemon reported an error object for this call.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    /// A frame that is neither a valid result nor a valid error envelope.
    #[error("invalid JSON-RPC data from UnrealIRCd: {0}")]
    Protocol(String),

    /// The socket failed mid-session (write error, read error, or EOF).
    #[error("transport error: {0}")]
    Transport(String),

    /// A list-shaped reply without its container field.
    #[error("malformed response: missing `{0}` field")]
    MalformedResponse(&'static str),

    /// A request envelope could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<ProtocolError> for ClientError {
    fn from(e: ProtocolError) -> Self {
        ClientError::Protocol(e.to_string())
    }
}
