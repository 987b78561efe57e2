// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `server_ban_exception.*`: exceptions to server bans (E-lines).

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::fields::{require_list, take_field};

/// Handler for server ban exception operations.
pub struct ServerBanException<'a> {
    querier: &'a dyn Querier,
}

impl<'a> ServerBanException<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// Place a ban exception; returns the created TKL entry.
    pub async fn add(
        &self,
        name: &str,
        exception_types: &str,
        reason: &str,
        set_by: Option<&str>,
        duration: Option<&str>,
    ) -> Result<Option<Value>, ClientError> {
        let mut params = json!({
            "name": name,
            "exception_types": exception_types,
            "reason": reason,
        });
        if let Some(set_by) = set_by {
            params["set_by"] = set_by.into();
        }
        if let Some(duration) = duration {
            params["duration_string"] = duration.into();
        }
        let result =
            self.querier.query("server_ban_exception.add", Some(params), false).await?;
        Ok(take_field(result, "tkl"))
    }

    /// Remove a ban exception; returns the removed TKL entry.
    pub async fn delete(&self, name: &str) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query("server_ban_exception.del", Some(json!({ "name": name })), false)
            .await?;
        Ok(take_field(result, "tkl"))
    }

    /// All ban exceptions.
    pub async fn get_all(&self) -> Result<Value, ClientError> {
        let result = self.querier.query("server_ban_exception.list", None, false).await?;
        require_list(result)
    }

    /// One ban exception by mask; `None` when no such exception exists.
    pub async fn get(&self, name: &str) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query("server_ban_exception.get", Some(json!({ "name": name })), false)
            .await?;
        Ok(take_field(result, "tkl"))
    }
}

#[cfg(test)]
#[path = "server_ban_exception_tests.rs"]
mod tests;
