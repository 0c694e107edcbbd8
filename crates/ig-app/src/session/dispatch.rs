use ig_core::network::protocol::{ServerError, SpaceUpdated};
use ig_core::{InboundDecode, InboundMessage};
use tracing::{debug, info_span, trace, warn, Instrument};

use super::IglooSession;

impl IglooSession {
    /// Decode one raw envelope and route it. Unknown, foreign and malformed
    /// envelopes are dropped here with a log line and no state change.
    pub async fn handle_inbound(&mut self, raw: &str) {
        match InboundMessage::decode(raw) {
            InboundDecode::Message(message) => self.handle_message(*message).await,
            InboundDecode::Ignored { kind } => trace!(%kind, "envelope not for this session"),
            InboundDecode::Malformed { reason } => debug!(%reason, "dropping malformed envelope"),
        }
    }

    pub async fn handle_message(&mut self, message: InboundMessage) {
        let span = info_span!("session.inbound", kind = message.kind());

        async {
            match message {
                InboundMessage::SpaceList(list) => {
                    debug!(count = list.spaces.len(), "space list replaced");
                    self.store.replace_spaces(list.spaces);
                }
                InboundMessage::MyRentals(rentals) => {
                    debug!(count = rentals.spaces.len(), "rentals replaced");
                    self.store.replace_my_rentals(rentals.spaces);
                }
                InboundMessage::EntryCheckResult(result) => self.on_entry_check_result(result),
                InboundMessage::RentQuote(quote) => {
                    self.store.set_loading(false);
                    self.store.set_rent_quote(quote);
                }
                InboundMessage::RentalResult(result) => self.on_rental_result(result).await,
                InboundMessage::SettingsUpdated(result) => self.on_settings_updated(result).await,
                InboundMessage::RentPaymentResult(result) => {
                    self.on_rent_payment_result(result).await
                }
                InboundMessage::EntryFeeResult(result) => self.on_entry_fee_result(result),
                InboundMessage::OwnerInfo(info) => {
                    self.store.set_loading(false);
                    self.store.upsert(info.space.clone());
                    self.store.set_owner_info(info.space);
                }
                InboundMessage::EligibilityResult(result) => {
                    self.on_eligibility_result(result).await
                }
                InboundMessage::SpaceUpdated(update) => self.on_space_updated(update),
                InboundMessage::Evicted(message) => self.on_evicted(message).await,
                InboundMessage::Error(error) => self.on_server_error(error),
            }
        }
        .instrument(span)
        .await
    }

    fn on_space_updated(&mut self, update: SpaceUpdated) {
        if self.clearance.invalidate(&update.space_id) {
            debug!(space_id = %update.space_id, "clearance invalidated by space update");
        }
        if !self.store.patch(&update.space_id, &update.changes) {
            debug!(space_id = %update.space_id, "update for a space not in the list");
        }
    }

    fn on_server_error(&mut self, error: ServerError) {
        warn!(
            code = ?error.code,
            space_id = ?error.space_id.as_ref().map(|id| id.as_str()),
            message = %error.message,
            "server reported an error"
        );
        self.store.set_loading(false);
        self.store.record_error(error.message);
    }
}
