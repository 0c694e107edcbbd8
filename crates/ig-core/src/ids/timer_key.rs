use serde::{Deserialize, Serialize};

use super::id_macro::{impl_generated_id, impl_id};

/// Identifies one armed eligibility timer; ticks carrying an old key are stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerKey(String);

impl_id!(TimerKey);
impl_generated_id!(TimerKey);
