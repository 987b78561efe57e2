// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! uircd-client: session layer for the UnrealIRCd JSON-RPC control API.
//!
//! One [`Connection`] owns a persistent WebSocket to the daemon.
//! Synchronous calls go through [`Connection::query`]; asynchronous push
//! traffic (subscribed log lines, timer callbacks) is drained with
//! [`Connection::next_event`]. Per-resource handlers ([`User`],
//! [`Channel`], [`ServerBan`], ...) are borrowed from the connection and
//! translate typed operations into single queries.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod channel;
mod connection;
mod error;
mod fields;
mod log;
mod name_ban;
mod rpc;
mod server;
mod server_ban;
mod server_ban_exception;
mod spamfilter;
mod stats;
mod timer;
mod user;

#[cfg(test)]
mod test_support;

pub use channel::Channel;
pub use connection::{Connection, Options, Querier};
pub use error::ClientError;
pub use log::Log;
pub use name_ban::NameBan;
pub use rpc::Rpc;
pub use server::Server;
pub use server_ban::ServerBan;
pub use server_ban_exception::ServerBanException;
pub use spamfilter::Spamfilter;
pub use stats::Stats;
pub use timer::{TIMER_ID_MAX, TIMER_ID_MIN};
pub use user::User;
pub use uircd_wire::RpcFault;
