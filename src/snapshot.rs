//! Per-modem tracking of the "current" and "old" data call lists.
//!
//! Each decoded message becomes the current list and the previous one is kept
//! as "old" for comparison; a message that fails to decode changes nothing.

use crate::comparator::{changed_contexts, unchanged_for_context};
use crate::data_call::{DataCallList, dispose_data_call_list};
use crate::decoder::DataCallListDecoder;
use crate::error::DecodeError;
use crate::types::ContextId;

/// Holds the "current" and "old" data call lists of one modem.
///
/// At most two lists are alive at any time. Pushing a new list retires the
/// current one to "old" and disposes the list that was "old" before.
///
/// For several modems, keep one `DataCallSnapshots` per modem.
#[derive(Debug, Default)]
pub struct DataCallSnapshots {
    /// Most recently decoded list.
    current: Option<DataCallList>,
    /// List that was current before the last push.
    old: Option<DataCallList>,
}

impl DataCallSnapshots {
    /// Creates an empty tracker; both snapshots are `None` initially.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&DataCallList> {
        self.current.as_ref()
    }

    pub fn old(&self) -> Option<&DataCallList> {
        self.old.as_ref()
    }

    /// Installs `list` as current, rotating the previous current to old.
    pub fn push(&mut self, list: DataCallList) {
        let retired = self.old.take();
        self.old = self.current.replace(list);
        dispose_data_call_list(retired);
    }

    /// Decodes an unsolicited message and records it.
    ///
    /// On success the new list becomes current and the context ids whose
    /// calls changed against the previous list are returned. On failure both
    /// snapshots are left untouched, so no change is ever derived from a
    /// message that did not decode.
    ///
    /// # Errors
    /// Propagates the [`DecodeError`] of the decoder.
    pub fn handle_unsolicited(
        &mut self,
        decoder: &DataCallListDecoder,
        buffer: &[u8],
    ) -> Result<Vec<ContextId>, DecodeError> {
        let list = decoder.decode(buffer)?;
        self.push(list);
        Ok(changed_contexts(self.current(), self.old()))
    }

    /// See [`unchanged_for_context`].
    pub fn unchanged(&self, cid: ContextId) -> bool {
        unchanged_for_context(self.current(), self.old(), cid)
    }

    /// Drops both snapshots, e.g. when the modem goes away.
    pub fn clear(&mut self) {
        dispose_data_call_list(self.current.take());
        dispose_data_call_list(self.old.take());
    }
}
