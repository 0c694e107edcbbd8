//! ID type wrappers for type safety.

pub(crate) mod id_macro;
mod request_ticket;
mod space_id;
mod timer_key;
mod wallet;

pub use request_ticket::RequestTicket;
pub use space_id::SpaceId;
pub use timer_key::TimerKey;
pub use wallet::WalletAddress;
