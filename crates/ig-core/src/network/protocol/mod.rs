mod access;
mod broadcast;
mod inbound;
mod listing;
mod outbound;
mod rental;

pub use access::{EligibilityResult, EntryCheckResult, EntryFeeResult};
pub use broadcast::{EvictedMessage, ServerError, SpaceUpdated};
pub use inbound::{InboundDecode, InboundMessage, HANDLED_INBOUND_TYPES};
pub use listing::{MyRentalsMessage, OwnerInfoMessage, SpaceListMessage};
pub use outbound::{OutboundMessage, ProofSubmission, SettingsSubmission, SpaceRef};
pub use rental::{RentPaymentResult, RentQuote, RentalResult, SettingsUpdated};

pub(crate) fn default_true() -> bool {
    true
}
