// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The session core: one persistent WebSocket, correlated synchronous
//! queries, and streamed push events.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::prelude::{Engine as _, BASE64_STANDARD};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{Connector, MaybeTlsStream, WebSocketStream};
use tracing::{debug, warn};

use uircd_wire::{ReplyBody, ReplyEnvelope, RequestEnvelope, RpcFault};

use crate::error::ClientError;
use crate::{
    Channel, Log, NameBan, Rpc, Server, ServerBan, ServerBanException, Spamfilter, Stats, User,
};

/// Bound on the dial plus WebSocket upgrade.
const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);
/// Default overall budget for one synchronous query.
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);
/// Default read deadline for a single event poll.
const DEFAULT_EVENT_TIMEOUT: Duration = Duration::from_secs(2);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connection options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Verify the daemon's TLS certificate. Disable for the self-signed
    /// certificates UnrealIRCd generates by default.
    pub tls_verify: bool,
    /// Name reported to the daemon via `rpc.set_issuer` right after the
    /// socket opens (shows up in daemon-side audit logs).
    pub issuer: Option<String>,
    /// Overall deadline for one synchronous query.
    pub query_timeout: Duration,
    /// Read deadline for a single [`Connection::next_event`] poll.
    pub event_timeout: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tls_verify: true,
            issuer: None,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            event_timeout: DEFAULT_EVENT_TIMEOUT,
        }
    }
}

/// Capability to issue one JSON-RPC call.
///
/// Handlers depend on this seam rather than on [`Connection`] so they can
/// be exercised without a socket.
#[async_trait::async_trait]
pub trait Querier: Send + Sync {
    /// Send `method` with `params`. With `no_wait` set the call returns
    /// `true` right after the write and no reply frame is consumed.
    async fn query(
        &self,
        method: &str,
        params: Option<Value>,
        no_wait: bool,
    ) -> Result<Value, ClientError>;
}

/// A session on one persistent WebSocket to the UnrealIRCd RPC endpoint.
///
/// Writes are serialized internally, so any number of tasks may issue
/// queries without interleaving frames. Reads are NOT demultiplexed: a
/// query in flight consumes and drops every frame whose id is not its own,
/// and [`Connection::next_event`] reads from the same cursor. Run either
/// synchronous queries or an event-polling loop at a time, not both.
pub struct Connection {
    writer: Mutex<SplitSink<WsStream, Message>>,
    reader: Mutex<SplitStream<WsStream>>,
    next_id: AtomicU64,
    last_fault: parking_lot::Mutex<Option<RpcFault>>,
    query_timeout: Duration,
    event_timeout: Duration,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("next_id", &self.next_id)
            .field("last_fault", &self.last_fault)
            .field("query_timeout", &self.query_timeout)
            .field("event_timeout", &self.event_timeout)
            .finish_non_exhaustive()
    }
}

impl Connection {
    /// Connect and authenticate against `uri` (`wss://host:port/`).
    ///
    /// `api_login` is the `user:password` pair from the daemon's rpc-user
    /// block, sent as a Basic Authorization header on the upgrade request.
    pub async fn connect(
        uri: &str,
        api_login: &str,
        options: Options,
    ) -> Result<Arc<Self>, ClientError> {
        let request = authorized_request(uri, api_login)?;
        let connector = tls_connector(options.tls_verify)?;

        let (stream, _) = timeout(
            HANDSHAKE_TIMEOUT,
            tokio_tungstenite::connect_async_tls_with_config(request, None, false, connector),
        )
        .await
        .map_err(|_| ClientError::Connect("handshake timed out".to_string()))?
        .map_err(|e| ClientError::Connect(e.to_string()))?;

        Self::start(stream, options).await
    }

    /// Connect over a caller-dialed TCP stream (e.g. through a proxy).
    ///
    /// TLS and the WebSocket upgrade still run against `uri`; only the
    /// dial itself is the caller's.
    pub async fn connect_with_stream(
        uri: &str,
        api_login: &str,
        stream: TcpStream,
        options: Options,
    ) -> Result<Arc<Self>, ClientError> {
        let request = authorized_request(uri, api_login)?;
        let connector = tls_connector(options.tls_verify)?;

        let (stream, _) = timeout(
            HANDSHAKE_TIMEOUT,
            tokio_tungstenite::client_async_tls_with_config(request, stream, None, connector),
        )
        .await
        .map_err(|_| ClientError::Connect("handshake timed out".to_string()))?
        .map_err(|e| ClientError::Connect(e.to_string()))?;

        Self::start(stream, options).await
    }

    async fn start(stream: WsStream, options: Options) -> Result<Arc<Self>, ClientError> {
        let (writer, reader) = stream.split();
        let conn = Arc::new(Self {
            writer: Mutex::new(writer),
            reader: Mutex::new(reader),
            next_id: AtomicU64::new(1),
            last_fault: parking_lot::Mutex::new(None),
            query_timeout: options.query_timeout,
            event_timeout: options.event_timeout,
        });

        match options.issuer {
            Some(name) => {
                // Identify ourselves without waiting for the reply.
                let issuer_conn = Arc::clone(&conn);
                tokio::spawn(async move {
                    if let Err(e) = issuer_conn
                        .query("rpc.set_issuer", Some(json!({ "name": name })), true)
                        .await
                    {
                        warn!(error = %e, "rpc.set_issuer failed");
                    }
                });
            }
            None => {
                // Liveness probe so the daemon sees traffic right away.
                conn.writer
                    .lock()
                    .await
                    .send(Message::Ping(Vec::new().into()))
                    .await
                    .map_err(|e| ClientError::Connect(e.to_string()))?;
            }
        }

        Ok(conn)
    }

    /// Issue one synchronous JSON-RPC call.
    ///
    /// Allocates the next call id, writes the frame under the write guard,
    /// then reads until the matching reply arrives or the query budget
    /// elapses. Frames carrying other ids are dropped; see the type-level
    /// note on read ownership.
    pub async fn query(
        &self,
        method: &str,
        params: Option<Value>,
        no_wait: bool,
    ) -> Result<Value, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let frame = RequestEnvelope::new(method, params, id).encode()?;

        {
            let mut writer = self.writer.lock().await;
            writer
                .send(Message::Text(frame.into()))
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;
        }

        if no_wait {
            return Ok(Value::Bool(true));
        }

        let deadline = Instant::now() + self.query_timeout;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Err(ClientError::Timeout);
            }
            // Rolling per-read deadline, capped by the overall budget.
            let read_deadline = self.query_timeout.min(deadline - now);
            let text = match self.read_text(read_deadline).await? {
                Some(text) => text,
                None => return Err(ClientError::Timeout),
            };

            let reply = ReplyEnvelope::decode(&text)?;
            if !reply.matches(id) {
                debug!(method, id, "dropping frame for another id");
                continue;
            }
            match reply.body {
                ReplyBody::Result(value) => {
                    self.last_fault.lock().take();
                    return Ok(value);
                }
                ReplyBody::Error(fault) => {
                    let code = fault.code;
                    let message = fault.message.clone();
                    *self.last_fault.lock() = Some(fault);
                    return Err(ClientError::Rpc { code, message });
                }
                // Matching id but no result and no error: keep waiting,
                // same as unmatched traffic.
                ReplyBody::Neither => continue,
            }
        }
    }

    /// Poll for one push event (subscribed log lines, timer callbacks).
    ///
    /// `Ok(None)` means nothing arrived within the poll deadline; callers
    /// loop on it. Must not run concurrently with [`Connection::query`]:
    /// both read from the same cursor.
    pub async fn next_event(&self) -> Result<Option<Value>, ClientError> {
        let text = match self.read_text(self.event_timeout).await? {
            Some(text) => text,
            None => return Ok(None),
        };

        let reply = ReplyEnvelope::decode(&text)?;
        match reply.body {
            ReplyBody::Result(value) => {
                self.last_fault.lock().take();
                Ok(Some(value))
            }
            ReplyBody::Error(fault) => {
                let code = fault.code;
                let message = fault.message.clone();
                *self.last_fault.lock() = Some(fault);
                Err(ClientError::Rpc { code, message })
            }
            ReplyBody::Neither => {
                Err(ClientError::Protocol("not an error and not a result".to_string()))
            }
        }
    }

    /// Send a Close frame. Best effort; the daemon drops the session when
    /// the socket goes away regardless.
    pub async fn close(&self) -> Result<(), ClientError> {
        self.writer
            .lock()
            .await
            .send(Message::Close(None))
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))
    }

    /// Code of the most recently recorded remote error (0 when clear).
    pub fn errno(&self) -> i64 {
        self.last_fault.lock().as_ref().map(|f| f.code).unwrap_or(0)
    }

    /// The most recently recorded remote error, if any.
    ///
    /// Last-writer-wins across tasks; only meaningful immediately after a
    /// call on the same task.
    pub fn last_error(&self) -> Option<RpcFault> {
        self.last_fault.lock().clone()
    }

    /// One read with a deadline. `Ok(None)` means the deadline elapsed.
    /// Ping/Pong/Binary frames are not part of the RPC protocol and are
    /// skipped.
    async fn read_text(&self, deadline: Duration) -> Result<Option<String>, ClientError> {
        let mut reader = self.reader.lock().await;
        loop {
            match timeout(deadline, reader.next()).await {
                Err(_) => return Ok(None),
                Ok(None) => return Err(ClientError::Transport("connection closed".to_string())),
                Ok(Some(Err(e))) => return Err(ClientError::Transport(e.to_string())),
                Ok(Some(Ok(Message::Text(text)))) => return Ok(Some(text.as_str().to_owned())),
                Ok(Some(Ok(Message::Close(_)))) => {
                    return Err(ClientError::Transport("connection closed".to_string()))
                }
                Ok(Some(Ok(_))) => continue,
            }
        }
    }

    /// Handler for `rpc.*` meta operations and timers.
    pub fn rpc(&self) -> Rpc<'_> {
        Rpc::new(self)
    }

    /// Handler for network statistics.
    pub fn stats(&self) -> Stats<'_> {
        Stats::new(self)
    }

    /// Handler for user operations.
    pub fn user(&self) -> User<'_> {
        User::new(self)
    }

    /// Handler for channel operations.
    pub fn channel(&self) -> Channel<'_> {
        Channel::new(self)
    }

    /// Handler for server bans (TKL G-lines, K-lines, ...).
    pub fn server_ban(&self) -> ServerBan<'_> {
        ServerBan::new(self)
    }

    /// Handler for server ban exceptions (E-lines).
    pub fn server_ban_exception(&self) -> ServerBanException<'_> {
        ServerBanException::new(self)
    }

    /// Handler for name bans (Q-lines).
    pub fn name_ban(&self) -> NameBan<'_> {
        NameBan::new(self)
    }

    /// Handler for spamfilter entries.
    pub fn spamfilter(&self) -> Spamfilter<'_> {
        Spamfilter::new(self)
    }

    /// Handler for server operations.
    pub fn server(&self) -> Server<'_> {
        Server::new(self)
    }

    /// Handler for log subscription and retrieval.
    pub fn log(&self) -> Log<'_> {
        Log::new(self)
    }
}

#[async_trait::async_trait]
impl Querier for Connection {
    async fn query(
        &self,
        method: &str,
        params: Option<Value>,
        no_wait: bool,
    ) -> Result<Value, ClientError> {
        Connection::query(self, method, params, no_wait).await
    }
}

/// Build the upgrade request for `uri` with the Basic credential attached.
fn authorized_request(uri: &str, api_login: &str) -> Result<Request, ClientError> {
    let mut request =
        uri.into_client_request().map_err(|e| ClientError::Connect(e.to_string()))?;
    let credential = format!("Basic {}", BASE64_STANDARD.encode(api_login));
    let value =
        HeaderValue::from_str(&credential).map_err(|e| ClientError::Connect(e.to_string()))?;
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(request)
}

/// TLS connector honoring `tls_verify`. `None` keeps tungstenite's default
/// verifying connector.
fn tls_connector(tls_verify: bool) -> Result<Option<Connector>, ClientError> {
    if tls_verify {
        return Ok(None);
    }
    let tls = native_tls::TlsConnector::builder()
        .danger_accept_invalid_certs(true)
        .danger_accept_invalid_hostnames(true)
        .build()
        .map_err(|e| ClientError::Connect(e.to_string()))?;
    Ok(Some(Connector::NativeTls(tls)))
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod tests;
