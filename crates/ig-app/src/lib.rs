//! igloo sync application layer
//!
//! The session service keeps the client's view of spaces in step with the
//! server and gates entry behind server-verified clearance. All state is
//! owned by one [`IglooSession`] and mutated through `&mut self`; the
//! [`SessionRuntime`] loop serialises inbound messages, timer ticks and host
//! commands onto it.

pub mod config;
pub mod deps;
pub mod error;
pub mod runtime;
pub mod session;
pub mod store;

pub use deps::SessionDeps;
pub use error::SessionError;
pub use runtime::{SessionCommand, SessionHandle, SessionRuntime};
pub use session::{EntryRequestStatus, EvictionNotice, IglooSession};
pub use store::{Modal, SpaceStore};
