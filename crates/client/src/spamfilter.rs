// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `spamfilter.*`: content filters with ban actions.

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;
use crate::fields::{require_list, take_field};

/// Handler for spamfilter operations.
pub struct Spamfilter<'a> {
    querier: &'a dyn Querier,
}

impl<'a> Spamfilter<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// Add a spamfilter; returns the created TKL entry.
    pub async fn add(
        &self,
        name: &str,
        match_type: &str,
        spamfilter_targets: &str,
        ban_action: &str,
        ban_duration: &str,
        reason: &str,
    ) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query(
                "spamfilter.add",
                Some(json!({
                    "name": name,
                    "match_type": match_type,
                    "spamfilter_targets": spamfilter_targets,
                    "ban_action": ban_action,
                    "ban_duration": ban_duration,
                    "reason": reason,
                })),
                false,
            )
            .await?;
        Ok(take_field(result, "tkl"))
    }

    /// Remove a spamfilter; returns the removed TKL entry. The four
    /// arguments together identify one filter.
    pub async fn delete(
        &self,
        name: &str,
        match_type: &str,
        spamfilter_targets: &str,
        ban_action: &str,
    ) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query(
                "spamfilter.del",
                Some(json!({
                    "name": name,
                    "match_type": match_type,
                    "spamfilter_targets": spamfilter_targets,
                    "ban_action": ban_action,
                })),
                false,
            )
            .await?;
        Ok(take_field(result, "tkl"))
    }

    /// All spamfilters.
    pub async fn get_all(&self) -> Result<Value, ClientError> {
        let result = self.querier.query("spamfilter.list", None, false).await?;
        require_list(result)
    }

    /// One spamfilter; `None` when no such filter exists.
    pub async fn get(
        &self,
        name: &str,
        match_type: &str,
        spamfilter_targets: &str,
        ban_action: &str,
    ) -> Result<Option<Value>, ClientError> {
        let result = self
            .querier
            .query(
                "spamfilter.get",
                Some(json!({
                    "name": name,
                    "match_type": match_type,
                    "spamfilter_targets": spamfilter_targets,
                    "ban_action": ban_action,
                })),
                false,
            )
            .await?;
        Ok(take_field(result, "tkl"))
    }
}

#[cfg(test)]
#[path = "spamfilter_tests.rs"]
mod tests;
