mod common;

use common::{Calls, Harness, NOW_MS};
use ig_app::{EntryRequestStatus, Modal};
use ig_core::network::protocol::SpaceRef;
use ig_core::space::EntryDenyReason;
use ig_core::{OutboundMessage, QuickAccess, SpaceId};
use serde_json::json;

fn grant(space: &str) -> serde_json::Value {
    json!({
        "type": "entry_check_result",
        "spaceId": space,
        "canEnter": true,
        "tokenGateMet": true,
        "entryFeePaid": true,
        "checkedAt": 1_700_000_123_000_i64
    })
}

#[tokio::test]
async fn grant_for_pending_space_runs_continuation_once() {
    let mut h = Harness::new();
    let calls = Calls::default();

    let status = h
        .session
        .request_entry(SpaceId::from("s4"), calls.recorder())
        .await;
    assert!(matches!(status, EntryRequestStatus::Pending(_)));
    assert_eq!(
        h.channel.sent(),
        vec![OutboundMessage::RequestEntry(SpaceRef::from(&SpaceId::from("s4")))]
    );

    h.inbound(grant("s4")).await;
    h.inbound(grant("s4")).await;

    assert_eq!(calls.taken(), vec!["s4".to_string()]);
    assert_eq!(h.session.pending_entry(), None);
    let record = h.session.clearance(&SpaceId::from("s4")).unwrap();
    assert!(record.can_enter());
    assert_eq!(record.checked_at(), 1_700_000_123_000);
}

#[tokio::test]
async fn newer_request_supersedes_older_one() {
    let mut h = Harness::new();
    let first = Calls::default();
    let second = Calls::default();

    h.session
        .request_entry(SpaceId::from("s1"), first.recorder())
        .await;
    h.session
        .request_entry(SpaceId::from("s2"), second.recorder())
        .await;
    assert_eq!(h.session.pending_entry(), Some(&SpaceId::from("s2")));

    // Late answer for the superseded request only updates the cache.
    h.inbound(grant("s1")).await;
    assert!(first.taken().is_empty());
    assert!(second.taken().is_empty());
    assert_eq!(h.session.quick_access(&SpaceId::from("s1")), QuickAccess::Cleared);
    assert_eq!(h.session.pending_entry(), Some(&SpaceId::from("s2")));

    h.inbound(grant("s2")).await;
    assert!(first.taken().is_empty());
    assert_eq!(second.taken(), vec!["s2".to_string()]);
}

#[tokio::test]
async fn offline_channel_fails_open() {
    let mut h = Harness::new();
    h.channel.set_connected(false);
    let calls = Calls::default();

    let status = h
        .session
        .request_entry(SpaceId::from("s1"), calls.recorder())
        .await;

    assert_eq!(status, EntryRequestStatus::GrantedOffline);
    assert_eq!(calls.taken(), vec!["s1".to_string()]);
    assert!(h.channel.sent().is_empty());
    assert_eq!(h.session.pending_entry(), None);
    assert_eq!(h.session.clearance_count(), 0);
}

#[tokio::test]
async fn failed_send_fails_open() {
    let mut h = Harness::new();
    h.channel.set_failing(true);
    let calls = Calls::default();

    let status = h
        .session
        .request_entry(SpaceId::from("s1"), calls.recorder())
        .await;

    assert_eq!(status, EntryRequestStatus::GrantedOffline);
    assert_eq!(calls.taken(), vec!["s1".to_string()]);
    assert_eq!(h.session.pending_entry(), None);
}

#[tokio::test]
async fn offline_request_drops_earlier_pending_continuation() {
    let mut h = Harness::new();
    let first = Calls::default();
    let second = Calls::default();

    h.session
        .request_entry(SpaceId::from("s1"), first.recorder())
        .await;
    assert_eq!(h.session.pending_entry(), Some(&SpaceId::from("s1")));

    h.channel.set_connected(false);
    let status = h
        .session
        .request_entry(SpaceId::from("s2"), second.recorder())
        .await;
    assert_eq!(status, EntryRequestStatus::GrantedOffline);
    assert_eq!(second.taken(), vec!["s2".to_string()]);
    assert_eq!(h.session.pending_entry(), None);

    // The grant for the abandoned request arrives after reconnecting.
    h.channel.set_connected(true);
    h.inbound(grant("s1")).await;
    assert!(first.taken().is_empty());
    assert!(second.taken().is_empty());
    assert_eq!(h.session.quick_access(&SpaceId::from("s1")), QuickAccess::Cleared);
}

#[tokio::test]
async fn denial_surfaces_requirements_with_server_owner_fields() {
    let mut h = Harness::new();
    h.inbound(json!({
        "type": "space_list",
        "spaces": [{
            "id": "s7",
            "isRented": true,
            "ownerWallet": "wallet-old",
            "ownerUsername": "OldOwner",
            "accessType": "fee",
            "entryFee": { "enabled": true, "amount": 500.0, "tokenSymbol": "PEBL" },
            "banner": { "title": "Snow Club" }
        }]
    }))
    .await;

    let calls = Calls::default();
    h.session
        .request_entry(SpaceId::from("s7"), calls.recorder())
        .await;
    h.inbound(json!({
        "type": "entry_check_result",
        "spaceId": "s7",
        "canEnter": false,
        "reason": "ENTRY_FEE_REQUIRED",
        "entryFeePaid": false,
        "ownerWallet": "wallet-new",
        "ownerUsername": "NewOwner"
    }))
    .await;

    assert!(calls.taken().is_empty());
    assert_eq!(h.session.pending_entry(), None);

    let store = h.session.store();
    assert_eq!(store.modal(), Some(Modal::Requirements));
    let requirements = store.requirements().unwrap();
    assert_eq!(requirements.reason, Some(EntryDenyReason::EntryFeeRequired));
    assert_eq!(requirements.owner_username.as_deref(), Some("NewOwner"));
    assert_eq!(requirements.owner_wallet.as_ref().map(|w| w.as_str()), Some("wallet-new"));
    assert_eq!(requirements.payment_amount, Some(500.0));
    assert_eq!(requirements.banner.title.as_deref(), Some("Snow Club"));

    let record = h.session.clearance(&SpaceId::from("s7")).unwrap();
    assert!(!record.can_enter());
    assert_eq!(record.checked_at(), NOW_MS);
    assert_eq!(h.session.quick_access(&SpaceId::from("s7")), QuickAccess::Blocked);
}

#[tokio::test]
async fn denial_for_other_space_keeps_pending_slot() {
    let mut h = Harness::new();
    let calls = Calls::default();
    h.session
        .request_entry(SpaceId::from("s2"), calls.recorder())
        .await;

    h.inbound(json!({
        "type": "entry_check_result",
        "spaceId": "s1",
        "canEnter": false,
        "reason": "PRIVATE"
    }))
    .await;

    assert_eq!(h.session.pending_entry(), Some(&SpaceId::from("s2")));
    assert_eq!(h.session.quick_access(&SpaceId::from("s1")), QuickAccess::Blocked);
}

#[tokio::test]
async fn quick_access_is_unknown_without_a_record() {
    let h = Harness::new();
    assert_eq!(h.session.quick_access(&SpaceId::from("s1")), QuickAccess::Unknown);
}

#[tokio::test]
async fn fee_denial_reports_payment_amount_from_response() {
    let mut h = Harness::new();
    let calls = Calls::default();
    h.session
        .request_entry(SpaceId::from("s7"), calls.recorder())
        .await;

    h.inbound(json!({
        "type": "entry_check_result",
        "spaceId": "s7",
        "canEnter": false,
        "reason": "ENTRY_FEE_REQUIRED",
        "paymentAmount": 500
    }))
    .await;

    let requirements = h.session.store().requirements().unwrap();
    assert_eq!(requirements.payment_amount, Some(500.0));
    assert!(requirements.needs_fee_payment());
    assert!(calls.taken().is_empty());
}
