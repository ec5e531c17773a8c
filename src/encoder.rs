//! Encoding of data call lists into RIL parcels.
//!
//! Produces the exact layout the decoder reads, for every list version. Used
//! to build simulated modem messages and fuzzing seeds.

use bytes::Bytes;

use crate::data_call::{DataCall, DataCallList};
use crate::parcel::ParcelWriter;
use crate::types::{ListFormat, ProtocolVersion};

/// Encodes a decoded list back into its wire form.
pub fn encode_data_call_list(list: &DataCallList) -> Bytes {
    encode_calls(list.version(), list.num(), list.calls())
}

/// Encodes `calls` using the layout of `version`.
///
/// Legacy layouts carry a single call: the first one is written, or a zeroed
/// call when `calls` is empty. Interface, DNS, gateway, status and retry are
/// not representable there and are dropped; the APN field of the oldest
/// layout is written empty.
///
/// # Panics
/// If a string field is too long for a parcel length prefix; see
/// [`ParcelWriter::write_string`].
pub fn encode_calls(version: ProtocolVersion, num: i32, calls: &[DataCall]) -> Bytes {
    let mut writer = ParcelWriter::new();
    writer.write_i32(version.value()).write_i32(num);

    match version.format() {
        ListFormat::Multi => {
            for call in calls {
                writer
                    .write_i32(call.status)
                    .write_i32(call.retry)
                    .write_i32(call.cid.value())
                    .write_i32(call.active)
                    .write_string(&call.call_type)
                    .write_string(&call.ifname)
                    .write_string(&call.addresses)
                    .write_string(&call.dnses)
                    .write_string(&call.gateways);
            }
        }
        format @ (ListFormat::Legacy | ListFormat::LegacyWithApn) => {
            let fallback = DataCall::default();
            let call = calls.first().unwrap_or(&fallback);
            writer
                .write_i32(call.cid.value())
                .write_i32(call.active)
                .write_string(&call.call_type);
            if format == ListFormat::LegacyWithApn {
                writer.write_string("");
            }
            writer.write_string(&call.addresses);
        }
    }

    writer.freeze()
}
