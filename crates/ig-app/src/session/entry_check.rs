use ig_core::network::protocol::{EntryCheckResult, EntryFeeResult, ProofSubmission, SpaceRef};
use ig_core::ports::PaymentRequest;
use ig_core::{ClearanceRecord, EntryRequirements, OutboundMessage, RequestTicket, SpaceId};
use tracing::{debug, info, info_span, warn, Instrument};

use super::{IglooSession, PendingEntry};
use crate::error::SessionError;

/// What `request_entry` did with the continuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRequestStatus {
    /// Sent; the continuation runs if a matching grant arrives.
    Pending(RequestTicket),
    /// The channel was unusable, so entry was granted locally and the
    /// continuation has already run.
    GrantedOffline,
}

impl IglooSession {
    /// Ask the server whether the player may enter `space_id`.
    ///
    /// Only one request is outstanding at a time; issuing another replaces
    /// the slot, and the superseded continuation never runs. When the
    /// channel is down or the send fails, the check fails open and
    /// `on_granted` runs immediately.
    pub async fn request_entry<F>(&mut self, space_id: SpaceId, on_granted: F) -> EntryRequestStatus
    where
        F: FnOnce(SpaceId) + Send + 'static,
    {
        let span = info_span!("usecase.request_entry", space_id = %space_id);

        async {
            if !self.channel.is_connected() {
                if let Some(previous) = self.pending_entry.take() {
                    debug!(previous = %previous.space_id, ticket = %previous.ticket, "entry request superseded");
                }
                warn!("channel not connected, granting entry without a server check");
                on_granted(space_id);
                return EntryRequestStatus::GrantedOffline;
            }

            let ticket = RequestTicket::new();
            let superseded = self.pending_entry.replace(PendingEntry {
                space_id: space_id.clone(),
                ticket: ticket.clone(),
                on_granted: Box::new(on_granted),
            });
            if let Some(previous) = superseded {
                debug!(previous = %previous.space_id, ticket = %previous.ticket, "entry request superseded");
            }

            let message = OutboundMessage::RequestEntry(SpaceRef::from(&space_id));
            match self.channel.send(message).await {
                Ok(()) => {
                    debug!(%ticket, "entry request sent");
                    EntryRequestStatus::Pending(ticket)
                }
                Err(err) => {
                    warn!(error = %err, "entry request not sent, granting entry");
                    if let Some(pending) = self.pending_entry.take() {
                        (pending.on_granted)(pending.space_id);
                    }
                    EntryRequestStatus::GrantedOffline
                }
            }
        }
        .instrument(span)
        .await
    }

    pub(super) fn on_entry_check_result(&mut self, result: EntryCheckResult) {
        let record = ClearanceRecord::from_entry_check(&result, self.clock.now_ms());
        self.clearance.write(result.space_id.clone(), record);

        let space_id = result.space_id.clone();
        let matching = |pending: &mut PendingEntry| pending.space_id == space_id;

        if result.can_enter {
            match self.pending_entry.take_if(matching) {
                Some(pending) => {
                    info!(space_id = %pending.space_id, ticket = %pending.ticket, "entry granted");
                    (pending.on_granted)(pending.space_id);
                }
                None => debug!(space_id = %result.space_id, "grant without a matching request, cached only"),
            }
            return;
        }

        info!(space_id = %result.space_id, reason = ?result.reason, "entry denied");
        let requirements = EntryRequirements::synthesize(self.store.find(&result.space_id), &result);
        self.store.surface_requirements(requirements);
        if let Some(pending) = self.pending_entry.take_if(matching) {
            debug!(ticket = %pending.ticket, "pending entry cleared by denial");
        }
    }

    /// Send a proof of entry-fee payment made outside the session.
    pub async fn submit_entry_fee_payment(
        &mut self,
        space_id: SpaceId,
        proof: String,
    ) -> Result<(), SessionError> {
        let span = info_span!("usecase.submit_entry_fee_payment", space_id = %space_id);
        let message = OutboundMessage::SubmitEntryFeePayment(ProofSubmission { space_id, proof });
        self.send_tracked(message).instrument(span).await
    }

    /// Pay the entry fee named by the open requirements, then submit the proof.
    pub async fn pay_entry_fee(&mut self, space_id: SpaceId) -> Result<(), SessionError> {
        let span = info_span!("usecase.pay_entry_fee", space_id = %space_id);

        async {
            let payment = self.payment.clone().ok_or(SessionError::PaymentUnavailable)?;
            let requirements = self
                .store
                .requirements()
                .filter(|r| r.space_id == space_id)
                .ok_or_else(|| SessionError::NothingToPay {
                    space_id: space_id.clone(),
                    detail: "no entry requirements for this space",
                })?;
            let amount = requirements
                .payment_amount
                .ok_or_else(|| SessionError::NothingToPay {
                    space_id: space_id.clone(),
                    detail: "no entry fee amount",
                })?;
            let destination = requirements
                .owner_wallet
                .clone()
                .or_else(|| self.store.find(&space_id).and_then(|s| s.owner_wallet.clone()))
                .ok_or_else(|| SessionError::NothingToPay {
                    space_id: space_id.clone(),
                    detail: "no owner wallet to pay",
                })?;
            let token_address = requirements
                .entry_fee
                .as_ref()
                .and_then(|fee| fee.token_address.clone());

            self.store.set_loading(true);
            let request = PaymentRequest {
                space_id: space_id.clone(),
                amount,
                destination,
                token_address,
            };
            let receipt = match payment.transfer(request).await {
                Ok(receipt) => receipt,
                Err(err) => {
                    self.store.set_loading(false);
                    warn!(error = %err, "entry fee payment failed");
                    return Err(err.into());
                }
            };
            match receipt.proof.filter(|_| receipt.success) {
                Some(proof) => self.submit_entry_fee_payment(space_id, proof).await,
                None => {
                    self.store.set_loading(false);
                    Err(SessionError::PaymentDeclined(space_id))
                }
            }
        }
        .instrument(span)
        .await
    }

    pub(super) fn on_entry_fee_result(&mut self, result: EntryFeeResult) {
        self.store.set_loading(false);
        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| "entry fee payment rejected".to_string());
            warn!(space_id = %result.space_id, %message, "entry fee not accepted");
            self.store.record_error(message);
            return;
        }

        info!(space_id = %result.space_id, can_enter = result.can_enter, "entry fee accepted");
        let record = ClearanceRecord::from_entry_fee_grant(&result, self.clock.now_ms());
        self.clearance.write(result.space_id.clone(), record);
        self.store.dismiss_requirements(&result.space_id);
    }
}
