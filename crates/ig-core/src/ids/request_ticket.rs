use serde::{Deserialize, Serialize};

use super::id_macro::{impl_generated_id, impl_id};

/// Local tag for an entry request, used for log correlation only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestTicket(String);

impl_id!(RequestTicket);
impl_generated_id!(RequestTicket);
