// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `user.*`: inspect and manipulate connected users.

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::fields::{require_list, take_field};

/// Handler for user operations.
pub struct User<'a> {
    querier: &'a dyn Querier,
}

impl<'a> User<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// All users on the network.
    pub async fn get_all(&self, object_detail_level: u8) -> Result<Value, ClientError> {
        let result = self
            .querier
            .query("user.list", Some(json!({ "object_detail_level": object_detail_level })), false)
            .await?;
        require_list(result)
    }

    /// One user by nick; `None` when no such nick is known.
    pub async fn get(
        &self,
        nick: &str,
        object_detail_level: u8,
    ) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query(
                "user.get",
                Some(json!({ "nick": nick, "object_detail_level": object_detail_level })),
                false,
            )
            .await?;
        Ok(take_field(result, "client"))
    }

    /// Change a user's nick.
    pub async fn set_nick(&self, nick: &str, newnick: &str) -> Result<Value, ClientError> {
        self.querier
            .query("user.set_nick", Some(json!({ "nick": nick, "newnick": newnick })), false)
            .await
    }

    /// Set the username/ident of a user.
    pub async fn set_username(&self, nick: &str, username: &str) -> Result<Value, ClientError> {
        self.querier
            .query("user.set_username", Some(json!({ "nick": nick, "username": username })), false)
            .await
    }

    /// Set the realname/gecos of a user.
    pub async fn set_realname(&self, nick: &str, realname: &str) -> Result<Value, ClientError> {
        self.querier
            .query("user.set_realname", Some(json!({ "nick": nick, "realname": realname })), false)
            .await
    }

    /// Set a virtual host on a user.
    pub async fn set_vhost(&self, nick: &str, vhost: &str) -> Result<Value, ClientError> {
        self.querier
            .query("user.set_vhost", Some(json!({ "nick": nick, "vhost": vhost })), false)
            .await
    }

    /// Change a user's modes. `hidden` suppresses the mode-change notice.
    pub async fn set_mode(
        &self,
        nick: &str,
        modes: &str,
        hidden: bool,
    ) -> Result<Value, ClientError> {
        self.querier
            .query(
                "user.set_mode",
                Some(json!({ "nick": nick, "modes": modes, "hidden": hidden })),
                false,
            )
            .await
    }

    /// Change the snomask of an oper.
    pub async fn set_snomask(
        &self,
        nick: &str,
        snomask: &str,
        hidden: bool,
    ) -> Result<Value, ClientError> {
        self.querier
            .query(
                "user.set_snomask",
                Some(json!({ "nick": nick, "snomask": snomask, "hidden": hidden })),
                false,
            )
            .await
    }

    /// Make a user an IRC operator.
    #[allow(clippy::too_many_arguments)]
    pub async fn set_oper(
        &self,
        nick: &str,
        oper_account: &str,
        oper_class: &str,
        class: Option<&str>,
        modes: Option<&str>,
        snomask: Option<&str>,
        vhost: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut params = json!({
            "nick": nick,
            "oper_account": oper_account,
            "oper_class": oper_class,
        });
        if let Some(class) = class {
            params["class"] = class.into();
        }
        if let Some(modes) = modes {
            params["modes"] = modes.into();
        }
        if let Some(snomask) = snomask {
            params["snomask"] = snomask.into();
        }
        if let Some(vhost) = vhost {
            params["vhost"] = vhost.into();
        }
        self.querier.query("user.set_oper", Some(params), false).await
    }

    /// Join a user to a channel. `force` bypasses bans, limits and keys.
    pub async fn join(
        &self,
        nick: &str,
        channel: &str,
        key: Option<&str>,
        force: bool,
    ) -> Result<Value, ClientError> {
        let mut params = json!({ "nick": nick, "channel": channel, "force": force });
        if let Some(key) = key {
            params["key"] = key.into();
        }
        self.querier.query("user.join", Some(params), false).await
    }

    /// Part a user from a channel.
    pub async fn part(&self, nick: &str, channel: &str, force: bool) -> Result<Value, ClientError> {
        self.querier
            .query(
                "user.part",
                Some(json!({ "nick": nick, "channel": channel, "force": force })),
                false,
            )
            .await
    }

    /// Disconnect a user as if they sent QUIT themselves.
    pub async fn quit(&self, nick: &str, reason: &str) -> Result<Value, ClientError> {
        self.querier
            .query("user.quit", Some(json!({ "nick": nick, "reason": reason })), false)
            .await
    }

    /// Forcefully remove a user from the network.
    pub async fn kill(&self, nick: &str, reason: &str) -> Result<Value, ClientError> {
        self.querier
            .query("user.kill", Some(json!({ "nick": nick, "reason": reason })), false)
            .await
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
