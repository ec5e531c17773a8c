//! Common test utilities for data call list integration tests.
//!
//! Helpers build raw modem messages directly with `ParcelWriter`, so the
//! tests exercise the decoder against hand-laid wire bytes rather than the
//! crate's own encoder.
#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;
use rilstar::parcel::ParcelWriter;
use rilstar::{DataCallListDecoder, DecoderConfig, NullSink};

/// Fields of one multi-layout record as written on the wire.
#[derive(Debug, Clone)]
pub struct WireCall {
    pub status: i32,
    pub retry: i32,
    pub cid: i32,
    pub active: i32,
    pub call_type: &'static str,
    pub ifname: &'static str,
    pub addresses: &'static str,
    pub dnses: &'static str,
    pub gateways: &'static str,
}

/// Creates an active IPv4 record with typical field values
///
/// # Default values
/// - status/retry: 0
/// - type: "IP"
/// - addresses: 10.0.0.2, dns: 8.8.8.8, gateway: 10.0.0.1
pub fn wire_call(cid: i32, active: i32, ifname: &'static str) -> WireCall {
    WireCall {
        status: 0,
        retry: 0,
        cid,
        active,
        call_type: "IP",
        ifname,
        addresses: "10.0.0.2",
        dnses: "8.8.8.8",
        gateways: "10.0.0.1",
    }
}

/// Writes a multi-record message (version >= 5) with `num` as declared count.
pub fn multi_message(version: i32, num: i32, calls: &[WireCall]) -> Bytes {
    let mut writer = ParcelWriter::new();
    writer.write_i32(version).write_i32(num);
    for call in calls {
        writer
            .write_i32(call.status)
            .write_i32(call.retry)
            .write_i32(call.cid)
            .write_i32(call.active)
            .write_string(call.call_type)
            .write_string(call.ifname)
            .write_string(call.addresses)
            .write_string(call.dnses)
            .write_string(call.gateways);
    }
    writer.freeze()
}

/// Writes a single-record legacy message (version < 5).
///
/// An APN is written only when `version < 4`.
pub fn legacy_message(
    version: i32,
    num: i32,
    cid: i32,
    active: i32,
    call_type: &str,
    addresses: &str,
) -> Bytes {
    let mut writer = ParcelWriter::new();
    writer
        .write_i32(version)
        .write_i32(num)
        .write_i32(cid)
        .write_i32(active)
        .write_string(call_type);
    if version < 4 {
        writer.write_string("internet.example");
    }
    writer.write_string(addresses);
    writer.freeze()
}

/// The two-call message used across the scenario tests.
///
/// cid 1 is up on rmnet0, cid 2 is down on rmnet1 with empty address fields.
pub fn scenario_message() -> Bytes {
    let mut down = wire_call(2, 0, "rmnet1");
    down.addresses = "";
    down.dnses = "";
    down.gateways = "";
    multi_message(6, 2, &[wire_call(1, 1, "rmnet0"), down])
}

/// Decoder that discards traces.
pub fn quiet_decoder() -> DataCallListDecoder {
    DataCallListDecoder::new(DecoderConfig::default(), Arc::new(NullSink))
}
