//! # Dependency Wiring
//!
//! The only place concrete adapters meet the session. Everything above this
//! module sees ports; everything below it sees tokio.

use std::sync::Arc;

use ig_app::config::{configured_identity, poll_schedule};
use ig_app::{IglooSession, SessionCommand, SessionDeps, SessionError, SessionHandle, SessionRuntime};
use ig_core::ports::{Identity, IdentityPort};
use ig_core::AppConfig;
use ig_infra::{JsonLinesChannel, SharedIdentity, SystemClock, TokioTimer};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tracing::info;

const INBOUND_BUFFER: usize = 256;
const TIMER_BUFFER: usize = 16;
const COMMAND_BUFFER: usize = 32;

/// A wired but not yet running session.
pub struct WiredSession {
    pub runtime: SessionRuntime,
    pub handle: SessionHandle,
    pub identity: IdentitySwitch,
    pub channel: Arc<JsonLinesChannel>,
}

/// Host-facing control for the signed-in wallet.
///
/// Writing the identity slot alone leaves the session on the old wallet
/// until something asks it to look again; [`IdentitySwitch::switch`] does
/// both, so clearance is dropped and an armed poller is stopped on sign-out.
#[derive(Clone)]
pub struct IdentitySwitch {
    slot: Arc<SharedIdentity>,
    handle: SessionHandle,
}

impl IdentitySwitch {
    pub fn current(&self) -> Option<Identity> {
        self.slot.current()
    }

    pub async fn switch(&self, identity: Option<Identity>) -> Result<(), SessionError> {
        self.slot.set(identity);
        self.handle.send(SessionCommand::RefreshIdentity).await
    }
}

/// Wire the session onto a byte stream pair carrying line-delimited JSON.
///
/// Must be called inside a tokio runtime; the channel pumps are spawned here.
pub fn wire_session<R, W>(config: &AppConfig, reader: R, writer: W) -> WiredSession
where
    R: AsyncRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (inbound_tx, inbound_rx) = mpsc::channel(INBOUND_BUFFER);
    let (timer_tx, timer_rx) = mpsc::channel(TIMER_BUFFER);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);

    let channel = Arc::new(JsonLinesChannel::start(reader, writer, inbound_tx));
    let identity = Arc::new(SharedIdentity::new(configured_identity(config)));
    let schedule = poll_schedule(config);

    info!(
        signed_in = identity.current().is_some(),
        initial_delay_secs = schedule.initial_delay.as_secs(),
        interval_secs = schedule.interval.as_secs(),
        "wiring igloo session"
    );

    let session = IglooSession::new(SessionDeps {
        channel: channel.clone(),
        identity: identity.clone(),
        clock: Arc::new(SystemClock),
        timer: Box::new(TokioTimer::new(timer_tx)),
        schedule,
        // Headless hosts have no wallet; payment operations report
        // PaymentUnavailable and proofs can still be submitted directly.
        payment: None,
    });

    let handle = SessionHandle::new(command_tx);
    WiredSession {
        runtime: SessionRuntime::new(session, inbound_rx, timer_rx, command_rx),
        identity: IdentitySwitch {
            slot: identity,
            handle: handle.clone(),
        },
        handle,
        channel,
    }
}

