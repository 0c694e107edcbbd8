//! The igloo session: one owner for the space store, the clearance cache,
//! the pending entry slot and the eligibility poller.
//!
//! Every operation takes `&mut self`, so callers (normally the
//! [`SessionRuntime`](crate::SessionRuntime) loop) interleave them one at a
//! time and no handler ever observes another half-applied.

mod dispatch;
mod entry_check;
mod occupancy;
mod workflows;

use std::sync::Arc;

use ig_core::occupancy::EvictionCause;
use ig_core::ports::{ClockPort, Identity, IdentityPort, MessageChannelPort, PaymentPort, TimerPort};
use ig_core::{
    ClearanceCache, ClearanceRecord, OccupancyState, OutboundMessage, PollSchedule, QuickAccess,
    RequestTicket, SpaceDisplay, SpaceId,
};
use tracing::{debug, info, warn};

use crate::deps::SessionDeps;
use crate::store::{Modal, SpaceStore};

pub use entry_check::EntryRequestStatus;

pub(crate) type EntryContinuation = Box<dyn FnOnce(SpaceId) + Send>;
pub(crate) type EvictionCallback = Box<dyn FnOnce(EvictionNotice) + Send>;

/// Delivered to the host when the player is removed from an occupied space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvictionNotice {
    pub space_id: SpaceId,
    pub cause: EvictionCause,
}

/// The one in-flight entry request. A newer request overwrites it.
struct PendingEntry {
    space_id: SpaceId,
    ticket: RequestTicket,
    on_granted: EntryContinuation,
}

pub struct IglooSession {
    channel: Arc<dyn MessageChannelPort>,
    identity: Arc<dyn IdentityPort>,
    clock: Arc<dyn ClockPort>,
    timer: Box<dyn TimerPort>,
    payment: Option<Arc<dyn PaymentPort>>,
    schedule: PollSchedule,

    store: SpaceStore,
    clearance: ClearanceCache,
    pending_entry: Option<PendingEntry>,
    occupancy: OccupancyState,
    on_evict: Option<EvictionCallback>,
    known_identity: Option<Identity>,
}

impl IglooSession {
    pub fn new(deps: SessionDeps) -> Self {
        let SessionDeps {
            channel,
            identity,
            clock,
            timer,
            schedule,
            payment,
        } = deps;
        let known_identity = identity.current();

        Self {
            channel,
            identity,
            clock,
            timer,
            payment,
            schedule,
            store: SpaceStore::new(),
            clearance: ClearanceCache::new(),
            pending_entry: None,
            occupancy: OccupancyState::Idle,
            on_evict: None,
            known_identity,
        }
    }

    pub fn store(&self) -> &SpaceStore {
        &self.store
    }

    pub fn display(&self, space_id: &SpaceId) -> Option<SpaceDisplay> {
        self.store.display(space_id)
    }

    pub fn select_space(&mut self, space_id: Option<SpaceId>) {
        self.store.select(space_id);
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.store.open_modal(modal);
    }

    pub fn close_modal(&mut self) {
        self.store.close_modal();
    }

    pub fn clearance(&self, space_id: &SpaceId) -> Option<&ClearanceRecord> {
        self.clearance.get(space_id)
    }

    pub fn clearance_count(&self) -> usize {
        self.clearance.len()
    }

    pub fn occupancy(&self) -> &OccupancyState {
        &self.occupancy
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.known_identity.as_ref()
    }

    /// Space of the entry request still waiting for an answer, if any.
    pub fn pending_entry(&self) -> Option<&SpaceId> {
        self.pending_entry.as_ref().map(|pending| &pending.space_id)
    }

    pub async fn active_timers(&self) -> usize {
        self.timer.active_count().await
    }

    /// Cheap pre-check from the clearance cache; never contacts the server.
    pub fn quick_access(&self, space_id: &SpaceId) -> QuickAccess {
        self.clearance.quick_access(space_id)
    }

    /// Re-read the identity port and react to a change of wallet.
    ///
    /// Any change drops every clearance record and the pending entry, since
    /// both were answered for someone else. Losing the identity while armed
    /// evicts immediately; gaining one fetches that player's rentals.
    pub async fn refresh_identity(&mut self) {
        let next = self.identity.current();
        let previous_wallet = self.known_identity.as_ref().map(|id| &id.wallet);
        let next_wallet = next.as_ref().map(|id| &id.wallet);
        if previous_wallet == next_wallet {
            self.known_identity = next;
            return;
        }

        info!(
            from = ?previous_wallet.map(|w| w.as_str()),
            to = ?next_wallet.map(|w| w.as_str()),
            "identity changed, dropping clearance"
        );
        self.known_identity = next;
        self.clearance.clear();
        self.store.clear_my_rentals();
        if let Some(pending) = self.pending_entry.take() {
            debug!(space_id = %pending.space_id, ticket = %pending.ticket, "pending entry dropped on identity change");
        }

        if self.known_identity.is_some() {
            if let Err(err) = self.channel.send(OutboundMessage::ListMyRentals).await {
                warn!(error = %err, "could not request rentals for new identity");
            }
        } else if self.occupancy.is_armed() {
            self.identity_lost().await;
        }
    }

    /// Stop the poller and forget the pending entry. Leaves no live timers.
    pub async fn shutdown(&mut self) {
        self.disarm().await;
        if let Some(pending) = self.pending_entry.take() {
            debug!(space_id = %pending.space_id, "pending entry abandoned at shutdown");
        }
        info!("igloo session shut down");
    }
}
