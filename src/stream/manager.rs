//! Stream synchronization manager for the persistent feed connection.
//!
//! [`StreamSync`] is an owned handle over a single driver task that runs
//! the whole connection lifecycle: connect, read and route frames, publish
//! snapshots, and retry after a fixed delay when the connection drops.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──start()──▶ Connecting ──▶ Open ──▶ Closed ──(3s)──▶ Connecting …
//!   │                   │            │         │
//!   └────────────teardown()──────────┴─────────┴──▶ ShutDown (terminal)
//! ```
//!
//! One driver task owns all mutable dashboard state, so at most one live
//! connection and at most one pending retry sleep can exist, and frames
//! are applied in strict arrival order with no locking. Teardown signals
//! the driver and awaits its exit before returning, which guarantees no
//! state mutation after `teardown()` returns, even for a frame in flight.
//! Dropping the handle without teardown also stops the driver at its next
//! suspension point.

use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::config::StreamConfig;
use crate::domain::DashboardSnapshot;

use super::phase::ConnectionPhase;
use super::router::DashboardState;

type FeedSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Owned handle over the live feed synchronization core.
pub struct StreamSync {
    config: StreamConfig,
    snapshot_tx: Arc<watch::Sender<DashboardSnapshot>>,
    snapshot_rx: watch::Receiver<DashboardSnapshot>,
    phase_tx: Arc<watch::Sender<ConnectionPhase>>,
    phase_rx: watch::Receiver<ConnectionPhase>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
    connect_now: Arc<Notify>,
    driver: Option<JoinHandle<()>>,
}

impl StreamSync {
    /// Creates an idle handle; nothing runs until [`StreamSync::start`].
    pub fn new(config: StreamConfig) -> Self {
        let (snapshot_tx, snapshot_rx) = watch::channel(DashboardSnapshot::default());
        let (phase_tx, phase_rx) = watch::channel(ConnectionPhase::Idle);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            snapshot_tx: Arc::new(snapshot_tx),
            snapshot_rx,
            phase_tx: Arc::new(phase_tx),
            phase_rx,
            shutdown_tx,
            shutdown_rx,
            connect_now: Arc::new(Notify::new()),
            driver: None,
        }
    }

    /// Spawns the driver task and begins connecting.
    ///
    /// No-op while already `Connecting`/`Open` or after teardown. Called
    /// during a pending retry, it cancels the remaining delay and connects
    /// immediately.
    pub fn start(&mut self) {
        let phase = *self.phase_rx.borrow();
        if phase.is_terminal() {
            warn!("start() called after teardown, ignoring");
            return;
        }
        if self.driver.is_some() {
            if phase == ConnectionPhase::Closed {
                debug!("start() during pending retry, connecting immediately");
                self.connect_now.notify_one();
            } else {
                debug!(%phase, "stream sync already running");
            }
            return;
        }

        advance_phase(&self.phase_tx, ConnectionPhase::Connecting);

        let config = self.config.clone();
        let snapshot_tx = Arc::clone(&self.snapshot_tx);
        let phase_tx = Arc::clone(&self.phase_tx);
        let shutdown_rx = self.shutdown_rx.clone();
        let connect_now = Arc::clone(&self.connect_now);
        self.driver = Some(tokio::spawn(run_driver(
            config,
            snapshot_tx,
            phase_tx,
            shutdown_rx,
            connect_now,
        )));
    }

    /// Stops the driver: closes any live connection, cancels any pending
    /// retry sleep, and awaits driver exit.
    ///
    /// Idempotent; once it returns, the handle is in `ShutDown` and no
    /// further snapshot or phase update can occur.
    pub async fn teardown(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(driver) = self.driver.take() {
            if let Err(error) = driver.await {
                warn!(%error, "stream driver ended abnormally");
            }
        }
        advance_phase(&self.phase_tx, ConnectionPhase::ShutDown);
    }

    /// Current published snapshot.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// A receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Current connection phase.
    pub fn phase(&self) -> ConnectionPhase {
        *self.phase_rx.borrow()
    }

    pub fn is_connected(&self) -> bool {
        self.phase() == ConnectionPhase::Open
    }
}

/// Single task owning the connect, read, retry cycle and all state.
async fn run_driver(
    config: StreamConfig,
    snapshot_tx: Arc<watch::Sender<DashboardSnapshot>>,
    phase_tx: Arc<watch::Sender<ConnectionPhase>>,
    mut shutdown_rx: watch::Receiver<bool>,
    connect_now: Arc<Notify>,
) {
    let mut state = DashboardState::new();

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        advance_phase(&phase_tx, ConnectionPhase::Connecting);
        publish(&snapshot_tx, &state);
        info!(url = %config.url, "connecting to event feed");

        tokio::select! {
            biased;
            _ = shutdown_rx.changed() => break,
            connected = connect_async(config.url.as_str()) => match connected {
                Ok((socket, _response)) => {
                    info!(url = %config.url, "event feed connected");
                    advance_phase(&phase_tx, ConnectionPhase::Open);
                    state.set_connected(true);
                    publish(&snapshot_tx, &state);

                    let shut_down =
                        read_frames(socket, &mut state, &snapshot_tx, &mut shutdown_rx).await;
                    if shut_down {
                        break;
                    }
                    warn!(url = %config.url, "event feed connection lost");
                }
                Err(error) => {
                    warn!(url = %config.url, %error, "failed to connect to event feed");
                }
            }
        }

        advance_phase(&phase_tx, ConnectionPhase::Closed);
        state.set_connected(false);
        publish(&snapshot_tx, &state);

        tokio::select! {
            biased;
            _ = shutdown_rx.changed() => break,
            _ = connect_now.notified() => {}
            _ = sleep(config.reconnect_delay()) => {}
        }
    }

    advance_phase(&phase_tx, ConnectionPhase::ShutDown);
    state.set_connected(false);
    publish(&snapshot_tx, &state);
}

/// Reads frames until disconnect or shutdown.
///
/// Returns true when exiting because of shutdown, false on any transport
/// close or error (both take the retry path). The shutdown branch is
/// checked first on every iteration, so a frame racing teardown is never
/// applied.
async fn read_frames(
    socket: FeedSocket,
    state: &mut DashboardState,
    snapshot_tx: &watch::Sender<DashboardSnapshot>,
    shutdown_rx: &mut watch::Receiver<bool>,
) -> bool {
    let (mut sink, mut source) = socket.split();

    loop {
        tokio::select! {
            biased;
            _ = shutdown_rx.changed() => {
                let _ = sink.send(Message::Close(None)).await;
                return true;
            }
            inbound = source.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    if state.route_text(&text) {
                        publish(snapshot_tx, state);
                    }
                }
                Some(Ok(Message::Close(frame))) => {
                    debug!(?frame, "feed sent close frame");
                    return false;
                }
                Some(Ok(other)) => {
                    debug!("ignoring non-text feed message: {other:?}");
                }
                Some(Err(error)) => {
                    warn!(%error, "feed receive error");
                    return false;
                }
                None => return false,
            }
        }
    }
}

fn publish(snapshot_tx: &watch::Sender<DashboardSnapshot>, state: &DashboardState) {
    // Ignore send errors (no receivers is OK)
    let _ = snapshot_tx.send(state.snapshot());
}

fn advance_phase(phase_tx: &watch::Sender<ConnectionPhase>, next: ConnectionPhase) {
    let current = *phase_tx.borrow();
    if current == next {
        return;
    }
    if !current.can_transition_to(&next) {
        warn!(%current, %next, "invalid connection phase transition, ignoring");
        return;
    }
    let _ = phase_tx.send(next);
}
