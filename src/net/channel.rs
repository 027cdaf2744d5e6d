//! Realtime channel manager for server-pushed events.
//!
//! One `RealtimeChannel` is spawned per mounted provider scope; it owns the
//! WebSocket lifecycle end to end. Consumers get a `ChannelHandle` — send
//! plus status, no close — so the connection can never outlive or be torn
//! down by anything but its owning scope. A server- or network-initiated
//! disconnect lands in `Closed` and stays there; re-establishing is a fresh
//! mount, which keeps the one-attempt-per-scope invariant observable.
//!
//! All WebSocket I/O is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::sync::Mutex;

use futures::channel::{mpsc, oneshot};
use leptos::prelude::{GetUntracked, RwSignal};

/// Connection lifecycle state. `Closed` is terminal for an instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelStatus {
    #[default]
    Connecting,
    Open,
    Closed,
}

impl ChannelStatus {
    pub fn label(self) -> &'static str {
        match self {
            ChannelStatus::Connecting => "connecting",
            ChannelStatus::Open => "open",
            ChannelStatus::Closed => "closed",
        }
    }
}

/// Sends are only meaningful on an open channel; anything else is quietly
/// unavailable, never an error.
pub(crate) fn can_send(status: ChannelStatus) -> bool {
    matches!(status, ChannelStatus::Open)
}

/// Consumer-facing view of the channel: send and observe, never close.
#[derive(Clone)]
pub struct ChannelHandle {
    tx: mpsc::UnboundedSender<String>,
    status: RwSignal<ChannelStatus>,
    last_event: RwSignal<Option<String>>,
}

impl ChannelHandle {
    /// Reactive connection status.
    pub fn status(&self) -> RwSignal<ChannelStatus> {
        self.status
    }

    /// Most recent server-pushed message, if any.
    pub fn last_event(&self) -> RwSignal<Option<String>> {
        self.last_event
    }

    /// Queue a text message for the server.
    ///
    /// Returns `false` when the channel is not open (still connecting, or
    /// closed) — unavailability, not failure.
    pub fn send(&self, text: &str) -> bool {
        if !can_send(self.status.get_untracked()) {
            return false;
        }
        self.tx.unbounded_send(text.to_owned()).is_ok()
    }
}

/// Owner-held close capability. The shutdown sender is consumed by the
/// first close, making every later close a no-op.
pub(crate) struct CloseGuard {
    shutdown: Option<oneshot::Sender<()>>,
}

impl CloseGuard {
    pub(crate) fn new(shutdown: oneshot::Sender<()>) -> Self {
        Self { shutdown: Some(shutdown) }
    }

    /// Request shutdown. Returns whether this call performed the close.
    pub(crate) fn close(&mut self) -> bool {
        match self.shutdown.take() {
            Some(tx) => {
                // The loop may already have ended on its own; a dead
                // receiver still counts as closed.
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.shutdown.is_none()
    }
}

/// The owning side of one realtime connection.
pub struct RealtimeChannel {
    handle: ChannelHandle,
    guard: Mutex<CloseGuard>,
}

impl RealtimeChannel {
    /// Shared handle for consumers.
    pub fn handle(&self) -> ChannelHandle {
        self.handle.clone()
    }

    /// Request a close, whatever state the connection is in. Idempotent.
    pub fn close(&self) {
        if let Ok(mut guard) = self.guard.lock() {
            if guard.close() {
                leptos::logging::log!("realtime: close requested");
            }
        }
    }
}

/// WebSocket URL on the current origin, so the browser forwards the same
/// session cookie it uses for HTTP.
#[cfg(feature = "hydrate")]
pub fn realtime_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:5000".to_owned());
    format!("{ws_proto}://{host}/ws")
}

/// Spawn the connection lifecycle for one scope. Issues exactly one
/// connection attempt; the returned owner must be closed on scope teardown.
#[cfg(feature = "hydrate")]
pub fn spawn_channel(url: &str) -> RealtimeChannel {
    let status = RwSignal::new(ChannelStatus::Connecting);
    let last_event = RwSignal::new(None);
    let (tx, rx) = mpsc::unbounded::<String>();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    leptos::task::spawn_local(channel_loop(url.to_owned(), status, last_event, rx, shutdown_rx));

    RealtimeChannel {
        handle: ChannelHandle { tx, status, last_event },
        guard: Mutex::new(CloseGuard::new(shutdown_tx)),
    }
}

/// Run one connection to completion: open, pump both directions, record
/// the terminal state.
#[cfg(feature = "hydrate")]
async fn channel_loop(
    url: String,
    status: RwSignal<ChannelStatus>,
    last_event: RwSignal<Option<String>>,
    mut rx: mpsc::UnboundedReceiver<String>,
    shutdown: oneshot::Receiver<()>,
) {
    use futures::future::{Either, select};
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Set;

    leptos::logging::log!("realtime: connecting to {url}");

    let ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("realtime: connect failed: {e}");
            status.set(ChannelStatus::Closed);
            return;
        }
    };

    status.set(ChannelStatus::Open);
    leptos::logging::log!("realtime: connected");

    let (mut ws_write, mut ws_read) = ws.split();

    // Forward outgoing messages from consumer handles to the socket.
    let send_task = async {
        while let Some(text) = rx.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    // Surface incoming events to consumers via the shared signal.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => last_event.set(Some(text)),
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("realtime: recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run until the socket drops on either side or the owner closes us.
    // Dropping the halves closes the underlying socket.
    let pump = select(Box::pin(send_task), Box::pin(recv_task));
    match select(pump, shutdown).await {
        Either::Left(_) => leptos::logging::log!("realtime: disconnected"),
        Either::Right(_) => leptos::logging::log!("realtime: closed by owner"),
    }

    status.set(ChannelStatus::Closed);
}
