// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `stats.*`: network-wide counters.

use serde_json::{json, Value};

use crate::connection::Querier;
use crate::error::ClientError;

/// Handler for statistical information.
pub struct Stats<'a> {
    querier: &'a dyn Querier,
}

impl<'a> Stats<'a> {
    pub(crate) fn new(querier: &'a dyn Querier) -> Self {
        Self { querier }
    }

    /// Basic statistics: user counts, channel counts, server counts.
    pub async fn get(&self, object_detail_level: u8) -> Result<Value, ClientError> {
        self.querier
            .query("stats.get", Some(json!({ "object_detail_level": object_detail_level })), false)
            .await
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
