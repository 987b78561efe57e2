// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reply-side frame decoding.
//!
//! Replies and push events share one shape: an optional integer `id` plus
//! either a `result` or an `error` member. Classification is by key
//! presence, so `"result": null` still counts as a result.

use serde_json::Value;
use thiserror::Error;

/// A frame that could not be decoded at all.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("invalid JSON frame: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame is not a JSON object")]
    NotAnObject,
}

/// Error object reported by the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcFault {
    pub code: i64,
    pub message: String,
}

/// What a decoded frame carries.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    /// The `result` member (possibly null).
    Result(Value),
    /// The `error` member.
    Error(RpcFault),
    /// Neither member present, or `error` is not an object.
    Neither,
}

/// A decoded reply or push frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyEnvelope {
    pub id: Option<u64>,
    pub body: ReplyBody,
}

impl ReplyEnvelope {
    /// Decode one text frame.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let raw: Value = serde_json::from_str(text)?;
        let obj = raw.as_object().ok_or(ProtocolError::NotAnObject)?;
        let id = obj.get("id").and_then(Value::as_u64);

        // `result` wins when a malformed frame carries both members.
        let body = if let Some(result) = obj.get("result") {
            ReplyBody::Result(result.clone())
        } else if let Some(fault) = obj.get("error").and_then(Value::as_object) {
            ReplyBody::Error(RpcFault {
                code: fault.get("code").and_then(Value::as_i64).unwrap_or(0),
                message: fault
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
        } else {
            ReplyBody::Neither
        };

        Ok(Self { id, body })
    }

    /// True when this frame answers the call with the given id.
    pub fn matches(&self, id: u64) -> bool {
        self.id == Some(id)
    }
}

#[cfg(test)]
#[path = "reply_tests.rs"]
mod tests;
