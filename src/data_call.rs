//! Decoded data call records and the list that owns them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{ContextId, ProtocolVersion};

/// One packet data call (bearer context) reported by the modem.
///
/// The string fields are opaque protocol text and are never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataCall {
    /// Failure cause; always 0 for legacy formats.
    pub status: i32,
    /// Suggested retry time; always 0 for legacy formats.
    pub retry: i32,
    pub cid: ContextId,
    /// 0 inactive, 1 active with link down, 2 active with link up.
    pub active: i32,
    #[serde(rename = "type")]
    pub call_type: String,
    pub ifname: String,
    pub addresses: String,
    pub dnses: String,
    pub gateways: String,
}

impl DataCall {
    /// Compares the fields that describe the connection itself.
    ///
    /// `status`, `retry` and `cid` are deliberately left out.
    pub fn same_connection(&self, other: &DataCall) -> bool {
        self.active == other.active
            && self.call_type == other.call_type
            && self.ifname == other.ifname
            && self.addresses == other.addresses
            && self.dnses == other.dnses
            && self.gateways == other.gateways
    }
}

impl fmt::Display for DataCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[status={},retry={},cid={},active={},type={},ifname={},address={},dns={},gateways={}]",
            self.status,
            self.retry,
            self.cid.value(),
            self.active,
            self.call_type,
            self.ifname,
            self.addresses,
            self.dnses,
            self.gateways
        )
    }
}

/// One decoded `DATA_CALL_LIST_CHANGED` snapshot.
///
/// Calls are kept ascending by context id; calls sharing an id stay in the
/// order they were inserted. The list is never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataCallList {
    version: ProtocolVersion,
    num: i32,
    calls: Vec<DataCall>,
}

impl DataCallList {
    /// Builds a list from calls in arbitrary order.
    ///
    /// `num` is the declared count as sent on the wire and need not match
    /// `calls.len()` (legacy formats always carry a single call).
    pub fn new(version: ProtocolVersion, num: i32, mut calls: Vec<DataCall>) -> Self {
        // Stable, so equal ids keep their relative order.
        calls.sort_by_key(|call| call.cid);
        Self {
            version,
            num,
            calls,
        }
    }

    /// Creates an empty list ready for [`insert_sorted`](Self::insert_sorted).
    pub(crate) fn with_capacity(version: ProtocolVersion, num: i32, capacity: usize) -> Self {
        Self {
            version,
            num,
            calls: Vec::with_capacity(capacity),
        }
    }

    /// Inserts after every call whose id is less than or equal to `call.cid`.
    pub(crate) fn insert_sorted(&mut self, call: DataCall) {
        let at = self.calls.partition_point(|existing| existing.cid <= call.cid);
        self.calls.insert(at, call);
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Declared record count from the wire.
    pub fn num(&self) -> i32 {
        self.num
    }

    pub fn calls(&self) -> &[DataCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// First call with the given context id.
    pub fn find(&self, cid: ContextId) -> Option<&DataCall> {
        let at = self.calls.partition_point(|call| call.cid < cid);
        self.calls.get(at).filter(|call| call.cid == cid)
    }

    /// Context ids in list order, duplicates included.
    pub fn cids(&self) -> impl Iterator<Item = ContextId> + '_ {
        self.calls.iter().map(|call| call.cid)
    }
}

impl<'a> IntoIterator for &'a DataCallList {
    type Item = &'a DataCall;
    type IntoIter = std::slice::Iter<'a, DataCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.iter()
    }
}

/// Releases a list that is no longer needed as "current" or "old".
///
/// Every call and its strings are owned by the list, so dropping it frees
/// everything. `None` is accepted and ignored.
pub fn dispose_data_call_list(list: Option<DataCallList>) {
    if let Some(list) = list {
        tracing::trace!(
            version = list.version.value(),
            calls = list.calls.len(),
            "disposing data call list"
        );
        drop(list);
    }
}
