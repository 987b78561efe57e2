// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `server.*`: linked servers.

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::fields::{require_list, take_field};

/// Handler for server operations.
pub struct Server<'a> {
    querier: &'a dyn Querier,
}

impl<'a> Server<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// All servers linked to the network.
    pub async fn get_all(&self) -> Result<Value, ClientError> {
        let result = self.querier.query("server.list", None, false).await?;
        require_list(result)
    }

    /// One server by name, or the daemon we are attached to when `None`;
    /// `Ok(None)` when no such server is linked.
    pub async fn get(&self, server: Option<&str>) -> Result<Option<Value>, ClientError> {
        let mut params = json!({});
        if let Some(server) = server {
            params["server"] = server.into();
        }
        let result = self.querier.query("server.get", Some(params), false).await?;
        Ok(take_field(result, "server"))
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
