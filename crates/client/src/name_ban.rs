// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `name_ban.*`: banned nicks and channel names (Q-lines).

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::fields::{require_list, take_field};

/// Handler for name ban operations.
pub struct NameBan<'a> {
    querier: &'a dyn Querier,
}

impl<'a> NameBan<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// Place a name ban; returns the created TKL entry. Without a
    /// duration the ban is permanent.
    pub async fn add(
        &self,
        name: &str,
        reason: &str,
        duration: Option<&str>,
        set_by: Option<&str>,
    ) -> Result<Option<Value>, ClientError> {
        let mut params = json!({ "name": name, "reason": reason, "duration_string": "0" });
        if let Some(duration) = duration {
            params["duration_string"] = duration.into();
        }
        if let Some(set_by) = set_by {
            params["set_by"] = set_by.into();
        }
        let result = self.querier.query("name_ban.add", Some(params), false).await?;
        Ok(take_field(result, "tkl"))
    }

    /// Remove a name ban; returns the removed TKL entry.
    pub async fn delete(&self, name: &str) -> Result<Option<Value>, ClientError> {
        let result =
            self.querier.query("name_ban.del", Some(json!({ "name": name })), false).await?;
        Ok(take_field(result, "tkl"))
    }

    /// All name bans.
    pub async fn get_all(&self) -> Result<Value, ClientError> {
        let result = self.querier.query("name_ban.list", None, false).await?;
        require_list(result)
    }

    /// One name ban by mask; `None` when no such ban exists.
    pub async fn get(&self, name: &str) -> Result<Option<Value>, ClientError> {
        let result =
            self.querier.query("name_ban.get", Some(json!({ "name": name })), false).await?;
        Ok(take_field(result, "tkl"))
    }
}

#[cfg(test)]
#[path = "name_ban_tests.rs"]
mod tests;
