//! Change detection between two data call list snapshots.
//!
//! Upstream users only want to hear about a context when its connection
//! really changed, so each new list is compared against the previous one.

use crate::data_call::DataCallList;
use crate::types::ContextId;

/// Returns `true` if the call for `cid` is the same in `current` and `old`.
///
/// Anything other than a confirmed match counts as a change:
/// - either list absent,
/// - declared counts differ (even if the difference concerns another context),
/// - `cid` missing from either list,
/// - any of `active`, `type`, `ifname`, `addresses`, `dnses`, `gateways` differ.
///
/// When a list holds several calls with the same id, the first is compared.
pub fn unchanged_for_context(
    current: Option<&DataCallList>,
    old: Option<&DataCallList>,
    cid: ContextId,
) -> bool {
    let (Some(current), Some(old)) = (current, old) else {
        return false;
    };
    if current.num() != old.num() {
        return false;
    }

    match (current.find(cid), old.find(cid)) {
        (Some(new_call), Some(old_call)) => new_call.same_connection(old_call),
        _ => false,
    }
}

/// Every context id present in either list whose call changed, ascending.
pub fn changed_contexts(current: Option<&DataCallList>, old: Option<&DataCallList>) -> Vec<ContextId> {
    let mut cids: Vec<ContextId> = current
        .into_iter()
        .chain(old)
        .flat_map(|list| list.cids())
        .collect();
    cids.sort_unstable();
    cids.dedup();
    cids.retain(|&cid| !unchanged_for_context(current, old, cid));
    cids
}
