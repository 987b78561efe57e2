// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer registration and callback delivery.

use serde_json::json;

use uircd_client::{Connection, TIMER_ID_MAX, TIMER_ID_MIN};

use crate::support::{self, fast_options};

#[tokio::test]
async fn add_timer_registers_synchronously_and_callbacks_arrive_as_events() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        let request = support::read_request(&mut ws).await;
        assert_eq!(request["method"], "rpc.add_timer");
        assert_eq!(request["params"]["timer_id"], "stats-poll");
        assert_eq!(request["params"]["every_msec"], 1000);
        assert_eq!(request["params"]["request"]["jsonrpc"], "2.0");
        assert_eq!(request["params"]["request"]["method"], "stats.get");
        assert_eq!(request["params"]["request"]["id"], 123_456);
        support::reply_result(&mut ws, &request, json!(true)).await;
        // Fire the callback the way the daemon would.
        support::send_json(&mut ws, json!({ "id": 123_456, "result": { "users": 1 } })).await;
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    let ack = conn
        .rpc()
        .add_timer(
            "stats-poll",
            1000,
            "stats.get",
            Some(json!({ "object_detail_level": 1 })),
            Some(123_456),
        )
        .await
        .unwrap();
    assert_eq!(ack, json!(true));

    let event = conn.next_event().await.unwrap();
    assert_eq!(event, Some(json!({ "users": 1 })));
    server.await.unwrap();
}

#[tokio::test]
async fn generated_callback_ids_come_from_the_reserved_range() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        let request = support::read_request(&mut ws).await;
        let id = request["params"]["request"]["id"].as_u64().unwrap();
        assert!((TIMER_ID_MIN..=TIMER_ID_MAX).contains(&id), "id {id} outside reserved range");
        support::reply_result(&mut ws, &request, json!(true)).await;
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    conn.rpc().add_timer("poll", 500, "rpc.info", None, None).await.unwrap();
    server.await.unwrap();
}

#[tokio::test]
async fn del_timer_is_keyed_by_the_logical_name() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        let request = support::read_request(&mut ws).await;
        assert_eq!(request["method"], "rpc.del_timer");
        assert_eq!(request["params"], json!({ "timer_id": "stats-poll" }));
        support::reply_result(&mut ws, &request, json!(true)).await;
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    conn.rpc().del_timer("stats-poll").await.unwrap();
    server.await.unwrap();
}
