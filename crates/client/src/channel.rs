// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `channel.*`: inspect and manipulate channels.

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::fields::{require_list, take_field};

/// Handler for channel operations.
pub struct Channel<'a> {
    querier: &'a dyn Querier,
}

impl<'a> Channel<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// All channels on the network.
    pub async fn get_all(&self, object_detail_level: u8) -> Result<Value, ClientError> {
        let result = self
            .querier
            .query(
                "channel.list",
                Some(json!({ "object_detail_level": object_detail_level })),
                false,
            )
            .await?;
        require_list(result)
    }

    /// One channel by name; `None` when it does not exist.
    pub async fn get(
        &self,
        channel: &str,
        object_detail_level: u8,
    ) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query(
                "channel.get",
                Some(json!({ "channel": channel, "object_detail_level": object_detail_level })),
                false,
            )
            .await?;
        Ok(take_field(result, "channel"))
    }

    /// Set and unset channel modes.
    pub async fn set_mode(
        &self,
        channel: &str,
        modes: &str,
        parameters: &str,
    ) -> Result<Value, ClientError> {
        self.querier
            .query(
                "channel.set_mode",
                Some(json!({ "channel": channel, "modes": modes, "parameters": parameters })),
                false,
            )
            .await
    }

    /// Set the channel topic.
    pub async fn set_topic(
        &self,
        channel: &str,
        topic: &str,
        set_by: Option<&str>,
        set_at: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut params = json!({ "channel": channel, "topic": topic });
        if let Some(set_by) = set_by {
            params["set_by"] = set_by.into();
        }
        if let Some(set_at) = set_at {
            params["set_at"] = set_at.into();
        }
        self.querier.query("channel.set_topic", Some(params), false).await
    }

    /// Kick a user from the channel.
    pub async fn kick(
        &self,
        channel: &str,
        nick: &str,
        reason: &str,
    ) -> Result<Value, ClientError> {
        self.querier
            .query(
                "channel.kick",
                Some(json!({ "nick": nick, "channel": channel, "reason": reason })),
                false,
            )
            .await
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
