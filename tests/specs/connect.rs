// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Connection establishment behavior.

use serde_json::json;
use tokio_tungstenite::tungstenite::Message;

use uircd_client::{ClientError, Connection, Options};

use crate::support::{self, fast_options};

#[tokio::test]
async fn connect_without_an_issuer_sends_a_ping_probe() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        match support::next_frame(&mut ws).await {
            Message::Ping(_) => {}
            other => panic!("expected ping probe, got {other:?}"),
        }
    })
    .await;

    let _conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    server.await.unwrap();
}

#[tokio::test]
async fn connect_with_an_issuer_fires_rpc_set_issuer_without_waiting() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        let request = support::read_request(&mut ws).await;
        assert_eq!(request["method"], "rpc.set_issuer");
        assert_eq!(request["params"], json!({ "name": "specs-suite" }));
        // Never replied to: fire and forget.
    })
    .await;

    let options = Options { issuer: Some("specs-suite".to_string()), ..fast_options() };
    let _conn = Connection::connect(&uri, "admin:secret", options).await.unwrap();
    server.await.unwrap();
}

#[tokio::test]
async fn a_refused_dial_is_a_connection_error() {
    // Grab a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = Connection::connect(&format!("ws://{addr}"), "admin:secret", fast_options())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Connect(_)));
}

#[tokio::test]
async fn connect_with_stream_upgrades_the_predialed_socket() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        let request = support::read_request(&mut ws).await;
        support::reply_result(&mut ws, &request, json!("ok")).await;
    })
    .await;

    let addr = uri.trim_start_matches("ws://").to_string();
    let stream = tokio::net::TcpStream::connect(&addr).await.unwrap();
    let conn = Connection::connect_with_stream(&uri, "admin:secret", stream, fast_options())
        .await
        .unwrap();

    assert_eq!(conn.query("rpc.info", None, false).await.unwrap(), json!("ok"));
    server.await.unwrap();
}

#[tokio::test]
async fn close_sends_a_close_frame() {
    let (uri, server) = support::serve_once(|mut ws| async move {
        loop {
            match support::next_frame(&mut ws).await {
                Message::Close(_) => break,
                _ => continue,
            }
        }
    })
    .await;

    let conn = Connection::connect(&uri, "admin:secret", fast_options()).await.unwrap();
    conn.close().await.unwrap();
    server.await.unwrap();
}
