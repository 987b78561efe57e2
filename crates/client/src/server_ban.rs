// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `server_ban.*`: TKL bans (G-lines, K-lines, Z-lines, shuns).

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::fields::{require_list, take_field};

/// Handler for server ban operations.
pub struct ServerBan<'a> {
    querier: &'a dyn Querier,
}

impl<'a> ServerBan<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// Place a ban; returns the created TKL entry.
    pub async fn add(
        &self,
        name: &str,
        ban_type: &str,
        duration: &str,
        reason: &str,
    ) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query(
                "server_ban.add",
                Some(json!({
                    "name": name,
                    "type": ban_type,
                    "reason": reason,
                    "duration_string": duration,
                })),
                false,
            )
            .await?;
        Ok(take_field(result, "tkl"))
    }

    /// Remove a ban; returns the removed TKL entry.
    pub async fn delete(&self, name: &str, ban_type: &str) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query("server_ban.del", Some(json!({ "name": name, "type": ban_type })), false)
            .await?;
        Ok(take_field(result, "tkl"))
    }

    /// All server bans.
    pub async fn get_all(&self) -> Result<Value, ClientError> {
        let result = self.querier.query("server_ban.list", None, false).await?;
        require_list(result)
    }

    /// One ban by mask and type; `None` when no such ban exists.
    pub async fn get(&self, name: &str, ban_type: &str) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query("server_ban.get", Some(json!({ "name": name, "type": ban_type })), false)
            .await?;
        Ok(take_field(result, "tkl"))
    }
}

#[cfg(test)]
#[path = "server_ban_tests.rs"]
mod tests;
