//! `rilstar`: decoding and change detection for RIL data call list notifications.
//!
//! A modem reports its active packet data calls with the unsolicited
//! `DATA_CALL_LIST_CHANGED` message. This library turns the raw RIL parcel into
//! a sorted [`DataCallList`] and tells whether the call for a given context id
//! changed between two such lists, so that only real changes are propagated.
//!
//! ## Core Concepts
//!
//! - **[`DataCallListDecoder`]**: validates and decodes a message, tolerating
//!   the three historical wire layouts (versions < 4, 4, and >= 5).
//! - **[`unchanged_for_context`]**: compares two snapshots for one context id.
//! - **[`DataCallSnapshots`]**: keeps the "current" and "old" lists of a modem
//!   and reports changed contexts for each new message.
//! - **[`ByteCursor`]**: the reader the decoder consumes; [`Parcel`] reads RIL
//!   parcels and [`ParcelWriter`](parcel::ParcelWriter) writes them.
//!
//! ## Quick Start
//!
//! ```rust
//! use rilstar::data_call::{DataCall, DataCallList};
//! use rilstar::encoder::encode_data_call_list;
//! use rilstar::{ContextId, DataCallSnapshots, DataCallListDecoder, ProtocolVersion};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let decoder = DataCallListDecoder::default();
//!     let mut snapshots = DataCallSnapshots::new();
//!
//!     // Simulate what the modem would send.
//!     let call = DataCall {
//!         cid: ContextId::new(1),
//!         active: 2,
//!         call_type: "IP".to_string(),
//!         ifname: "rmnet0".to_string(),
//!         addresses: "10.0.0.2".to_string(),
//!         ..Default::default()
//!     };
//!     let list = DataCallList::new(ProtocolVersion::new(6), 1, vec![call]);
//!     let message = encode_data_call_list(&list);
//!
//!     let changed = snapshots.handle_unsolicited(&decoder, &message)?;
//!     assert_eq!(changed, vec![ContextId::new(1)]);
//!
//!     // The same message again changes nothing.
//!     let changed = snapshots.handle_unsolicited(&decoder, &message)?;
//!     assert!(changed.is_empty());
//!     assert!(snapshots.unchanged(ContextId::new(1)));
//!
//!     Ok(())
//! }
//! ```

pub mod comparator;
pub mod config;
pub mod constants;
pub mod data_call;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod parcel;
pub mod snapshot;
pub mod trace;
pub mod types;

pub use comparator::{changed_contexts, unchanged_for_context};
pub use config::DecoderConfig;
pub use data_call::{DataCall, DataCallList, dispose_data_call_list};
pub use decoder::{DataCallListDecoder, decode_data_call_list};
pub use error::{DecodeError, ErrorClass, Field, ParcelError};
pub use parcel::{ByteCursor, Parcel};
pub use snapshot::DataCallSnapshots;
pub use trace::{CollectingSink, NullSink, TraceSink, TracingSink};
pub use types::{ContextId, ListFormat, ProtocolVersion};
pub mod fuzz_harnesses;
