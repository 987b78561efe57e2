// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `rpc.*` meta operations: module info, issuer, timers.

use serde_json::{json, Value};
use uircd_wire::{RequestEnvelope, TimerRegistration};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::timer::random_timer_id;

/// Handler for RPC meta operations.
pub struct Rpc<'a> {
    querier: &'a dyn Querier,
}

impl<'a> Rpc<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// Information on all RPC modules loaded by the daemon.
    pub async fn info(&self) -> Result<Value, ClientError> {
        self.querier.query("rpc.info", None, false).await
    }

    /// Set the issuer name recorded in daemon-side audit logs
    /// (UnrealIRCd 6.0.8+).
    pub async fn set_issuer(&self, name: &str) -> Result<Value, ClientError> {
        self.querier.query("rpc.set_issuer", Some(json!({ "name": name })), false).await
    }

    /// Register a daemon-side timer that re-issues `method` every
    /// `every_msec` milliseconds (UnrealIRCd 6.1.0+).
    ///
    /// The registration itself is acknowledged synchronously; the recurring
    /// callbacks carry the embedded id and surface through
    /// [`Connection::next_event`](crate::Connection::next_event). Without an
    /// explicit `id` one is drawn from the reserved range
    /// [[`TIMER_ID_MIN`](crate::TIMER_ID_MIN), [`TIMER_ID_MAX`](crate::TIMER_ID_MAX)].
    pub async fn add_timer(
        &self,
        timer_id: &str,
        every_msec: u64,
        method: &str,
        params: Option<Value>,
        id: Option<u64>,
    ) -> Result<Value, ClientError> {
        let id = id.unwrap_or_else(random_timer_id);
        let registration = TimerRegistration {
            timer_id: timer_id.to_string(),
            every_msec,
            request: RequestEnvelope::new(method, params, id),
        };
        self.querier
            .query("rpc.add_timer", Some(serde_json::to_value(registration)?), false)
            .await
    }

    /// Delete a timer by its logical name.
    pub async fn del_timer(&self, timer_id: &str) -> Result<Value, ClientError> {
        self.querier.query("rpc.del_timer", Some(json!({ "timer_id": timer_id })), false).await
    }
}

#[cfg(test)]
#[path = "rpc_tests.rs"]
mod tests;
