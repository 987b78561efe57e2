// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `log.*`: server log subscription and retrieval.
//!
//! Subscribed log entries arrive as push frames; drain them with
//! [`Connection::next_event`](crate::Connection::next_event).

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::fields::take_field;

/// Handler for log operations.
pub struct Log<'a> {
    querier: &'a dyn Querier,
}

impl<'a> Log<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// Subscribe to log events. Replaces any previous subscription.
    pub async fn subscribe(&self, sources: &[&str]) -> Result<Value, ClientError> {
        self.querier.query("log.subscribe", Some(json!({ "sources": sources })), false).await
    }

    /// Unsubscribe from all log events.
    pub async fn unsubscribe(&self) -> Result<Value, ClientError> {
        self.querier.query("log.unsubscribe", None, false).await
    }

    /// Past log events, optionally filtered by source.
    pub async fn get_all(&self, sources: Option<&[&str]>) -> Result<Option<Value>, ClientError> {
        let mut params = json!({});
        if let Some(sources) = sources {
            params["sources"] = json!(sources);
        }
        let result = self.querier.query("log.list", Some(params), false).await?;
        Ok(take_field(result, "list"))
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
