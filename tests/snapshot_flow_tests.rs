//! Integration tests for snapshot comparison across successive messages.
//!
//! Drives decoded lists through `unchanged_for_context` and the per-modem
//! `DataCallSnapshots` tracker, the way the daemon handles a stream of
//! data call list notifications.

mod common;
use common::{legacy_message, multi_message, quiet_decoder, scenario_message, wire_call};

use rilstar::{
    ContextId, DataCallList, DataCallSnapshots, DecodeError, changed_contexts,
    dispose_data_call_list, unchanged_for_context,
};

fn flip_active(list: &DataCallList, cid: i32, active: i32) -> DataCallList {
    let calls = list
        .calls()
        .iter()
        .cloned()
        .map(|mut call| {
            if call.cid == cid {
                call.active = active;
            }
            call
        })
        .collect();
    DataCallList::new(list.version(), list.num(), calls)
}

#[test]
fn scenario_reflexive_and_sensitive() {
    let list = quiet_decoder().decode(&scenario_message()).unwrap();
    assert!(unchanged_for_context(Some(&list), Some(&list), ContextId::new(1)));

    let copy = flip_active(&list, 2, 1);
    assert!(!unchanged_for_context(Some(&list), Some(&copy), ContextId::new(2)));
    assert!(unchanged_for_context(Some(&list), Some(&copy), ContextId::new(1)));

    dispose_data_call_list(Some(copy));
    dispose_data_call_list(Some(list));
}

#[test]
fn removed_record_counts_as_change() {
    let list = quiet_decoder().decode(&scenario_message()).unwrap();
    let without_cid_2: Vec<_> = list
        .calls()
        .iter()
        .filter(|call| call.cid != 2)
        .cloned()
        .collect();
    // Keep the declared count so the count fast-path does not decide the result.
    let removed = DataCallList::new(list.version(), list.num(), without_cid_2);

    assert!(!unchanged_for_context(Some(&list), Some(&removed), ContextId::new(2)));
    assert!(!unchanged_for_context(Some(&removed), Some(&list), ContextId::new(2)));
}

#[test]
fn count_change_marks_unrelated_context_changed() {
    let decoder = quiet_decoder();
    let one = decoder
        .decode(&multi_message(6, 1, &[wire_call(1, 1, "rmnet0")]))
        .unwrap();
    let two = decoder
        .decode(&multi_message(
            6,
            2,
            &[wire_call(1, 1, "rmnet0"), wire_call(2, 1, "rmnet1")],
        ))
        .unwrap();

    assert!(!unchanged_for_context(Some(&two), Some(&one), ContextId::new(1)));
}

#[test]
fn each_compared_field_is_detected() {
    let decoder = quiet_decoder();
    let base = wire_call(1, 1, "rmnet0");
    let old = decoder.decode(&multi_message(6, 1, &[base.clone()])).unwrap();

    let mut variants = Vec::new();
    let mut v = base.clone();
    v.active = 2;
    variants.push(("active", v));
    let mut v = base.clone();
    v.call_type = "IPV6";
    variants.push(("type", v));
    let mut v = base.clone();
    v.ifname = "rmnet9";
    variants.push(("ifname", v));
    let mut v = base.clone();
    v.addresses = "10.0.0.3";
    variants.push(("addresses", v));
    let mut v = base.clone();
    v.dnses = "1.1.1.1";
    variants.push(("dnses", v));
    let mut v = base.clone();
    v.gateways = "10.0.0.254";
    variants.push(("gateways", v));

    for (field, variant) in variants {
        let current = decoder.decode(&multi_message(6, 1, &[variant])).unwrap();
        assert!(
            !unchanged_for_context(Some(&current), Some(&old), ContextId::new(1)),
            "change of {field} not detected"
        );
    }

    let mut retry_only = base;
    retry_only.status = -1;
    retry_only.retry = 30;
    let current = decoder.decode(&multi_message(6, 1, &[retry_only])).unwrap();
    assert!(unchanged_for_context(Some(&current), Some(&old), ContextId::new(1)));
}

#[test]
fn legacy_and_multi_snapshots_compare_on_connection_fields() {
    let decoder = quiet_decoder();
    let legacy = decoder
        .decode(&legacy_message(4, 1, 1, 1, "IP", "10.0.0.2"))
        .unwrap();
    let mut modern_call = wire_call(1, 1, "rmnet0");
    modern_call.dnses = "";
    modern_call.gateways = "";
    let modern = decoder.decode(&multi_message(6, 1, &[modern_call])).unwrap();

    assert!(unchanged_for_context(Some(&modern), Some(&legacy), ContextId::new(1)));
}

#[test]
fn tracker_reports_only_real_changes() {
    let decoder = quiet_decoder();
    let mut snapshots = DataCallSnapshots::new();

    let first = snapshots
        .handle_unsolicited(&decoder, &scenario_message())
        .unwrap();
    assert_eq!(first, vec![ContextId::new(1), ContextId::new(2)]);

    let repeat = snapshots
        .handle_unsolicited(&decoder, &scenario_message())
        .unwrap();
    assert!(repeat.is_empty());

    let mut up = wire_call(2, 1, "rmnet1");
    up.addresses = "10.0.1.2";
    let next = multi_message(6, 2, &[wire_call(1, 1, "rmnet0"), up]);
    let changed = snapshots.handle_unsolicited(&decoder, &next).unwrap();
    assert_eq!(changed, vec![ContextId::new(2)]);
    assert!(snapshots.unchanged(ContextId::new(1)));
    assert!(!snapshots.unchanged(ContextId::new(2)));
}

#[test]
fn tracker_suppresses_changes_from_corrupt_messages() {
    let decoder = quiet_decoder();
    let mut snapshots = DataCallSnapshots::new();
    snapshots
        .handle_unsolicited(&decoder, &scenario_message())
        .unwrap();

    let message = scenario_message();
    let truncated = &message[..message.len() - 20];
    let err = snapshots.handle_unsolicited(&decoder, truncated).unwrap_err();
    assert!(err.is_corrupt());

    let err = snapshots.handle_unsolicited(&decoder, &[]).unwrap_err();
    assert!(matches!(err, DecodeError::MessageTooSmall { got: 0, .. }));

    // The earlier good list is still current and nothing was rotated.
    assert_eq!(snapshots.current().unwrap().len(), 2);
    assert!(snapshots.old().is_none());
}

#[test]
fn changed_contexts_covers_appearing_and_vanishing_calls() {
    let decoder = quiet_decoder();
    let old = decoder
        .decode(&multi_message(
            6,
            2,
            &[wire_call(1, 1, "rmnet0"), wire_call(3, 1, "rmnet2")],
        ))
        .unwrap();
    let current = decoder
        .decode(&multi_message(
            6,
            2,
            &[wire_call(1, 1, "rmnet0"), wire_call(4, 1, "rmnet3")],
        ))
        .unwrap();

    let changed: Vec<i32> = changed_contexts(Some(&current), Some(&old))
        .into_iter()
        .map(ContextId::value)
        .collect();
    assert_eq!(changed, vec![3, 4]);
}
