#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ig_app::{IglooSession, SessionDeps};
use ig_core::ports::{
    ChannelError, ClockPort, Identity, IdentityPort, MessageChannelPort, PaymentError,
    PaymentPort, PaymentReceipt, PaymentRequest, TimerPort,
};
use ig_core::{OutboundMessage, PollSchedule, TimerKey};
use mockall::mock;

pub const NOW_MS: i64 = 1_700_000_000_000;

/// Records every outbound message; can be flipped offline or made to fail.
#[derive(Default)]
pub struct FakeChannel {
    offline: AtomicBool,
    failing: AtomicBool,
    sent: Mutex<Vec<OutboundMessage>>,
}

impl FakeChannel {
    pub fn set_connected(&self, connected: bool) {
        self.offline.store(!connected, Ordering::SeqCst);
    }

    /// Connected, but every send errors.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_kinds(&self) -> Vec<&'static str> {
        self.sent().iter().map(OutboundMessage::kind).collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl MessageChannelPort for FakeChannel {
    fn is_connected(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }

    async fn send(&self, message: OutboundMessage) -> Result<(), ChannelError> {
        if !self.is_connected() {
            return Err(ChannelError::NotConnected);
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(ChannelError::Closed("socket reset".to_string()));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

#[derive(Default)]
pub struct TimerLedger {
    pub active: HashSet<TimerKey>,
    pub started: Vec<(TimerKey, PollSchedule)>,
    pub stopped: Vec<TimerKey>,
}

/// Timer port that only keeps books; tests fire ticks by hand.
#[derive(Clone, Default)]
pub struct FakeTimer {
    pub ledger: Arc<Mutex<TimerLedger>>,
    pub fail_start: Arc<AtomicBool>,
}

impl FakeTimer {
    pub fn active(&self) -> Vec<TimerKey> {
        self.ledger.lock().unwrap().active.iter().cloned().collect()
    }

    pub fn last_started(&self) -> Option<TimerKey> {
        self.ledger
            .lock()
            .unwrap()
            .started
            .last()
            .map(|(key, _)| key.clone())
    }
}

#[async_trait]
impl TimerPort for FakeTimer {
    async fn start(&mut self, key: &TimerKey, schedule: PollSchedule) -> anyhow::Result<()> {
        if self.fail_start.load(Ordering::SeqCst) {
            anyhow::bail!("timer backend unavailable");
        }
        let mut ledger = self.ledger.lock().unwrap();
        ledger.active.insert(key.clone());
        ledger.started.push((key.clone(), schedule));
        Ok(())
    }

    async fn stop(&mut self, key: &TimerKey) -> anyhow::Result<()> {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.active.remove(key);
        ledger.stopped.push(key.clone());
        Ok(())
    }

    async fn active_count(&self) -> usize {
        self.ledger.lock().unwrap().active.len()
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// Identity the test can swap at will.
#[derive(Default)]
pub struct SwitchableIdentity(Mutex<Option<Identity>>);

impl SwitchableIdentity {
    pub fn signed_in(wallet: &str) -> Self {
        Self(Mutex::new(Some(Identity::new(wallet, None))))
    }

    pub fn set(&self, identity: Option<Identity>) {
        *self.0.lock().unwrap() = identity;
    }
}

impl IdentityPort for SwitchableIdentity {
    fn current(&self) -> Option<Identity> {
        self.0.lock().unwrap().clone()
    }
}

mock! {
    pub IdentitySource {}

    impl IdentityPort for IdentitySource {
        fn current(&self) -> Option<Identity>;
    }
}

mock! {
    pub Payment {}

    #[async_trait]
    impl PaymentPort for Payment {
        async fn transfer(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
    }
}

pub fn session_with_identity(
    channel: Arc<FakeChannel>,
    identity: Arc<dyn IdentityPort>,
    timer: FakeTimer,
) -> IglooSession {
    IglooSession::new(SessionDeps {
        channel,
        identity,
        clock: Arc::new(FixedClock(NOW_MS)),
        timer: Box::new(timer),
        schedule: PollSchedule::default(),
        payment: None,
    })
}

pub struct Harness {
    pub session: IglooSession,
    pub channel: Arc<FakeChannel>,
    pub identity: Arc<SwitchableIdentity>,
    pub timer: FakeTimer,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_payment(None)
    }

    pub fn with_payment(payment: Option<MockPayment>) -> Self {
        let channel = Arc::new(FakeChannel::default());
        let identity = Arc::new(SwitchableIdentity::signed_in("wallet-me"));
        let timer = FakeTimer::default();
        let session = IglooSession::new(SessionDeps {
            channel: channel.clone(),
            identity: identity.clone(),
            clock: Arc::new(FixedClock(NOW_MS)),
            timer: Box::new(timer.clone()),
            schedule: PollSchedule::default(),
            payment: payment.map(|p| Arc::new(p) as Arc<dyn PaymentPort>),
        });

        Self {
            session,
            channel,
            identity,
            timer,
        }
    }

    pub async fn inbound(&mut self, value: serde_json::Value) {
        self.session.handle_inbound(&value.to_string()).await;
    }
}

/// Continuation that counts how often it ran and with which space.
#[derive(Clone, Default)]
pub struct Calls(pub Arc<Mutex<Vec<String>>>);

impl Calls {
    pub fn recorder(&self) -> impl FnOnce(ig_core::SpaceId) + Send + 'static {
        let calls = self.0.clone();
        move |space_id| calls.lock().unwrap().push(space_id.to_string())
    }

    pub fn taken(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
