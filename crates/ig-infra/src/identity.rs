use std::sync::RwLock;

use ig_core::ports::{Identity, IdentityPort};
use tracing::debug;

/// In-memory identity slot the host updates when the wallet connects,
/// switches or signs out.
#[derive(Debug, Default)]
pub struct SharedIdentity {
    current: RwLock<Option<Identity>>,
}

impl SharedIdentity {
    pub fn new(initial: Option<Identity>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Replace the slot. The session only notices on its next identity
    /// refresh, so callers follow this with a refresh command.
    pub fn set(&self, identity: Option<Identity>) {
        debug!(wallet = ?identity.as_ref().map(|id| id.wallet.as_str()), "identity set");
        let mut slot = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = identity;
    }
}

impl IdentityPort for SharedIdentity {
    fn current(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_current_identity() {
        let identity = SharedIdentity::default();
        assert_eq!(identity.current(), None);

        identity.set(Some(Identity::new("wallet-1", Some("Penguin".into()))));
        assert_eq!(identity.current().map(|id| id.wallet), Some("wallet-1".into()));

        identity.set(None);
        assert_eq!(identity.current(), None);
    }
}
