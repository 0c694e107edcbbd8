//! Request/response flows for renting, settings, rent payment and owner
//! info. Each sets the loading flag while waiting; the matching result
//! clears it, and a success refreshes the lists.

use ig_core::network::protocol::{
    ProofSubmission, RentPaymentResult, RentalResult, SettingsSubmission, SettingsUpdated,
    SpaceRef,
};
use ig_core::ports::PaymentRequest;
use ig_core::space::{RentStatus, SpacePatch, SpaceSettings};
use ig_core::{OutboundMessage, SpaceId};
use tracing::{debug, info, info_span, warn, Instrument};

use super::IglooSession;
use crate::error::SessionError;
use crate::store::Modal;

impl IglooSession {
    /// Ask for the full space list and, when signed in, the player's rentals.
    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        self.channel.send(OutboundMessage::ListSpaces).await?;
        if self.known_identity.is_some() {
            self.channel.send(OutboundMessage::ListMyRentals).await?;
        }
        Ok(())
    }

    pub async fn request_rent_quote(&mut self, space_id: SpaceId) -> Result<(), SessionError> {
        let message = OutboundMessage::RequestRentQuote(SpaceRef::from(&space_id));
        self.send_tracked(message).await
    }

    pub async fn rent_space(&mut self, space_id: SpaceId) -> Result<(), SessionError> {
        let span = info_span!("usecase.rent_space", space_id = %space_id);
        let message = OutboundMessage::SubmitRental(SpaceRef::from(&space_id));
        self.send_tracked(message).instrument(span).await
    }

    pub async fn update_settings(
        &mut self,
        space_id: SpaceId,
        settings: SpaceSettings,
    ) -> Result<(), SessionError> {
        let span = info_span!("usecase.update_settings", space_id = %space_id);
        let message = OutboundMessage::SubmitSettings(SettingsSubmission { space_id, settings });
        self.send_tracked(message).instrument(span).await
    }

    pub async fn submit_rent_payment(
        &mut self,
        space_id: SpaceId,
        proof: String,
    ) -> Result<(), SessionError> {
        let span = info_span!("usecase.submit_rent_payment", space_id = %space_id);
        let message = OutboundMessage::SubmitRentPayment(ProofSubmission { space_id, proof });
        self.send_tracked(message).instrument(span).await
    }

    /// Pay rent against the last quote for `space_id`, then submit the proof.
    pub async fn pay_rent(&mut self, space_id: SpaceId) -> Result<(), SessionError> {
        let span = info_span!("usecase.pay_rent", space_id = %space_id);

        async {
            let payment = self.payment.clone().ok_or(SessionError::PaymentUnavailable)?;
            let quote = self
                .store
                .rent_quote()
                .filter(|quote| quote.space_id == space_id)
                .ok_or_else(|| SessionError::NothingToPay {
                    space_id: space_id.clone(),
                    detail: "no rent quote for this space",
                })?;
            let destination = quote
                .treasury_wallet
                .clone()
                .ok_or_else(|| SessionError::NothingToPay {
                    space_id: space_id.clone(),
                    detail: "quote names no treasury wallet",
                })?;
            let request = PaymentRequest {
                space_id: space_id.clone(),
                amount: quote.rent_amount,
                destination,
                token_address: quote.token_address.clone(),
            };

            self.store.set_loading(true);
            let receipt = match payment.transfer(request).await {
                Ok(receipt) => receipt,
                Err(err) => {
                    self.store.set_loading(false);
                    warn!(error = %err, "rent payment failed");
                    return Err(err.into());
                }
            };
            match receipt.proof.filter(|_| receipt.success) {
                Some(proof) => self.submit_rent_payment(space_id, proof).await,
                None => {
                    self.store.set_loading(false);
                    Err(SessionError::PaymentDeclined(space_id))
                }
            }
        }
        .instrument(span)
        .await
    }

    pub async fn request_owner_info(&mut self, space_id: SpaceId) -> Result<(), SessionError> {
        let message = OutboundMessage::RequestOwnerInfo(SpaceRef::from(&space_id));
        self.send_tracked(message).await
    }

    /// Send a request whose answer will clear the loading flag.
    pub(super) async fn send_tracked(&mut self, message: OutboundMessage) -> Result<(), SessionError> {
        self.store.set_loading(true);
        let kind = message.kind();
        if let Err(err) = self.channel.send(message).await {
            self.store.set_loading(false);
            warn!(%kind, error = %err, "request not sent");
            return Err(err.into());
        }
        debug!(%kind, "request sent");
        Ok(())
    }

    pub(super) async fn on_rental_result(&mut self, result: RentalResult) {
        self.store.set_loading(false);
        if !result.success {
            let message = result.error.unwrap_or_else(|| "rental failed".to_string());
            warn!(space_id = %result.space_id, %message, "rental rejected");
            self.store.record_error(message);
            return;
        }

        info!(space_id = %result.space_id, "space rented");
        if let Some(space) = result.space {
            self.store.upsert(space);
        }
        if self.store.modal() == Some(Modal::Rent) {
            self.store.close_modal();
        }
        self.refresh_after_success().await;
    }

    pub(super) async fn on_settings_updated(&mut self, result: SettingsUpdated) {
        self.store.set_loading(false);
        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| "settings update failed".to_string());
            warn!(space_id = %result.space_id, %message, "settings rejected");
            self.store.record_error(message);
            return;
        }

        info!(space_id = %result.space_id, "settings saved");
        if let Some(space) = result.space {
            self.store.upsert(space);
        }
        if self.store.modal() == Some(Modal::Settings) {
            self.store.close_modal();
        }
        self.refresh_after_success().await;
    }

    pub(super) async fn on_rent_payment_result(&mut self, result: RentPaymentResult) {
        self.store.set_loading(false);
        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| "rent payment failed".to_string());
            warn!(space_id = %result.space_id, %message, "rent payment rejected");
            self.store.record_error(message);
            return;
        }

        info!(space_id = %result.space_id, due = ?result.rent_due_date, "rent paid");
        let patch = SpacePatch {
            rent_due_date: result.rent_due_date,
            rent_status: Some(result.rent_status.unwrap_or(RentStatus::Current)),
            ..SpacePatch::default()
        };
        self.store.patch(&result.space_id, &patch);
        if self.store.modal() == Some(Modal::RentPayment) {
            self.store.close_modal();
        }
        self.refresh_after_success().await;
    }

    async fn refresh_after_success(&mut self) {
        if let Err(err) = self.refresh().await {
            warn!(error = %err, "refresh after success not sent");
        }
    }
}
