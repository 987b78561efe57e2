// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Streaming reads: push events and the benign poll timeout.

use std::time::Duration;

use serde_json::json;

use uircd_client::{ClientError, Connection};

use crate::support::{self, fast_options};

#[tokio::test]
async fn next_event_returns_a_pushed_result() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        support::send_json(&mut ws, json!({ "result": { "msg": "link up" } })).await;
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    let event = conn.next_event().await.unwrap();

    assert_eq!(event, Some(json!({ "msg": "link up" })));
    server.await.unwrap();
}

#[tokio::test]
async fn next_event_times_out_to_none_when_nothing_arrives() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        // Stay silent past the poll deadline, then shut down.
        tokio::time::sleep(Duration::from_millis(600)).await;
        let _ = ws.close(None).await;
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    let event = conn.next_event().await.unwrap();

    assert_eq!(event, None);
    server.await.unwrap();
}

#[tokio::test]
async fn next_event_surfaces_a_pushed_error_and_records_it() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        support::send_json(
            &mut ws,
            json!({ "error": { "code": 7, "message": "subscription lapsed" } }),
        )
        .await;
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    let err = conn.next_event().await.unwrap_err();

    assert!(matches!(err, ClientError::Rpc { code: 7, .. }));
    assert_eq!(conn.errno(), 7);
    server.await.unwrap();
}

#[tokio::test]
async fn a_frame_with_neither_member_is_a_protocol_error() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        support::send_json(&mut ws, json!({ "jsonrpc": "2.0", "id": 3 })).await;
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    let err = conn.next_event().await.unwrap_err();

    assert!(matches!(err, ClientError::Protocol(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn a_successful_event_clears_the_last_error() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        let request = support::read_request(&mut ws).await;
        support::reply_error(&mut ws, &request, 5, "no such nick").await;
        support::send_json(&mut ws, json!({ "result": { "msg": "log line" } })).await;
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    let _ = conn.query("user.get", Some(json!({ "nick": "ghost" })), false).await.unwrap_err();
    assert_eq!(conn.errno(), 5);

    let event = conn.next_event().await.unwrap();
    assert_eq!(event, Some(json!({ "msg": "log line" })));
    assert_eq!(conn.errno(), 0);
    server.await.unwrap();
}
