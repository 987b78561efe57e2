// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles shared by the handler tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::connection::Querier;
use crate::error::ClientError;

/// Arguments recorded from one `query` call.
pub struct RecordedCall {
    pub method: String,
    pub params: Option<Value>,
    pub no_wait: bool,
}

/// Scripted `Querier`: returns a canned reply once and records every call.
pub struct MockQuerier {
    reply: Mutex<Option<Result<Value, ClientError>>>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl MockQuerier {
    /// Mock that answers the next call with `value`.
    pub fn replying(value: Value) -> Self {
        Self { reply: Mutex::new(Some(Ok(value))), calls: Mutex::new(Vec::new()) }
    }

    /// Mock that fails the next call with `error`.
    pub fn failing(error: ClientError) -> Self {
        Self { reply: Mutex::new(Some(Err(error))), calls: Mutex::new(Vec::new()) }
    }

    /// The single call recorded by this mock.
    pub fn single_call(&self) -> RecordedCall {
        let mut calls = self.calls.lock();
        assert_eq!(calls.len(), 1, "expected exactly one query");
        calls.remove(0)
    }
}

#[async_trait]
impl Querier for MockQuerier {
    async fn query(
        &self,
        method: &str,
        params: Option<Value>,
        no_wait: bool,
    ) -> Result<Value, ClientError> {
        self.calls.lock().push(RecordedCall { method: method.to_string(), params, no_wait });
        self.reply.lock().take().unwrap_or(Ok(Value::Null))
    }
}
