use std::collections::HashMap;

use super::record::ClearanceRecord;
use crate::ids::SpaceId;

/// Cheap answer for the UI before (or instead of) a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAccess {
    Cleared,
    Blocked,
    Unknown,
}

/// Identity-scoped clearance cache. Later writes win; there is no merge.
#[derive(Debug, Default, Clone)]
pub struct ClearanceCache {
    records: HashMap<SpaceId, ClearanceRecord>,
}

impl ClearanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, space_id: &SpaceId) -> Option<&ClearanceRecord> {
        self.records.get(space_id)
    }

    pub fn write(&mut self, space_id: SpaceId, record: ClearanceRecord) {
        self.records.insert(space_id, record);
    }

    /// Returns whether an entry was removed. Safe on unknown ids.
    pub fn invalidate(&mut self, space_id: &SpaceId) -> bool {
        self.records.remove(space_id).is_some()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn quick_access(&self, space_id: &SpaceId) -> QuickAccess {
        match self.records.get(space_id) {
            Some(record) if record.can_enter() => QuickAccess::Cleared,
            Some(_) => QuickAccess::Blocked,
            None => QuickAccess::Unknown,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::protocol::EntryCheckResult;
    use serde_json::json;

    fn record(can_enter: bool) -> ClearanceRecord {
        let result: EntryCheckResult = serde_json::from_value(json!({
            "spaceId": "any",
            "canEnter": can_enter,
        }))
        .unwrap();
        ClearanceRecord::from_entry_check(&result, 1_000)
    }

    #[test]
    fn invalidate_is_idempotent() {
        let mut cache = ClearanceCache::new();
        let id = SpaceId::from("s1");
        cache.write(id.clone(), record(true));

        assert!(cache.invalidate(&id));
        assert!(!cache.invalidate(&id));
        assert!(!cache.invalidate(&SpaceId::from("never-seen")));
        assert!(cache.is_empty());
    }

    #[test]
    fn write_overwrites_previous_record() {
        let mut cache = ClearanceCache::new();
        let id = SpaceId::from("s1");
        cache.write(id.clone(), record(true));
        cache.write(id.clone(), record(false));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.quick_access(&id), QuickAccess::Blocked);
    }

    #[test]
    fn quick_access_reports_unknown_for_missing_entries() {
        let mut cache = ClearanceCache::new();
        cache.write("s1".into(), record(true));

        assert_eq!(cache.quick_access(&"s1".into()), QuickAccess::Cleared);
        assert_eq!(cache.quick_access(&"s2".into()), QuickAccess::Unknown);
    }

    #[test]
    fn server_timestamp_wins_over_receipt_time() {
        let result: EntryCheckResult = serde_json::from_value(json!({
            "spaceId": "s1",
            "canEnter": true,
            "checkedAt": 42,
        }))
        .unwrap();

        assert_eq!(ClearanceRecord::from_entry_check(&result, 1_000).checked_at(), 42);
        assert_eq!(record(true).checked_at(), 1_000);
    }
}
