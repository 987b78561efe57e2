// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire format for the UnrealIRCd JSON-RPC API.
//!
//! Requests and replies travel as whole JSON text frames over one
//! WebSocket; there is no additional length framing. This crate holds the
//! envelope types and the frame decoder shared by the client session layer.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod reply;
mod request;

pub use reply::{ProtocolError, ReplyBody, ReplyEnvelope, RpcFault};
pub use request::{RequestEnvelope, TimerRegistration, PROTOCOL_VERSION};
