//! Per-space memo of the last server entry decision.

mod cache;
mod record;

pub use cache::{ClearanceCache, QuickAccess};
pub use record::ClearanceRecord;
