//! Fuzz testing harnesses for rilstar components.
//!
//! Targets here take arbitrary bytes and must never panic. They also check
//! the invariants that hold for every successfully decoded list.

use std::sync::Arc;

use crate::comparator::unchanged_for_context;
use crate::config::DecoderConfig;
use crate::data_call::{DataCall, DataCallList};
use crate::decoder::DataCallListDecoder;
use crate::encoder::encode_data_call_list;
use crate::trace::NullSink;
use crate::types::ProtocolVersion;

/// Fuzz tests the data call list decoder.
///
/// Any input either fails to decode or yields a list that is sorted by
/// context id and compares unchanged against itself for every id it holds.
///
/// # Panics
/// If a decoded list violates one of those invariants.
pub fn data_call_list_decoder_harness(data: &[u8]) {
    let decoder = DataCallListDecoder::new(DecoderConfig::default(), Arc::new(NullSink));
    let Ok(list) = decoder.decode(data) else {
        return;
    };

    assert!(
        list.calls().windows(2).all(|pair| pair[0].cid <= pair[1].cid),
        "decoded calls out of order: {:?}",
        list.cids().collect::<Vec<_>>()
    );
    for cid in list.cids() {
        assert!(
            unchanged_for_context(Some(&list), Some(&list), cid),
            "list not unchanged against itself for {}",
            cid
        );
    }
}

/// Fuzz tests the decoder with `data` spliced into a valid message.
///
/// Purely random bytes rarely get past the header, so this overwrites the
/// tail of a known-good two-call message and decodes the result.
pub fn data_call_list_mutation_harness(data: &[u8]) {
    let seed = DataCallList::new(
        ProtocolVersion::new(6),
        2,
        vec![
            DataCall {
                cid: 1.into(),
                active: 2,
                call_type: "IP".to_string(),
                ifname: "rmnet0".to_string(),
                addresses: "10.0.0.2".to_string(),
                dnses: "8.8.8.8".to_string(),
                gateways: "10.0.0.1".to_string(),
                ..Default::default()
            },
            DataCall {
                cid: 2.into(),
                call_type: "IPV6".to_string(),
                ifname: "rmnet1".to_string(),
                ..Default::default()
            },
        ],
    );
    let mut message = encode_data_call_list(&seed).to_vec();

    // Keep the header intact; splice the fuzz input over the records.
    let start = 8.min(message.len());
    let end = (start + data.len()).min(message.len());
    message[start..end].copy_from_slice(&data[..end - start]);
    message.extend_from_slice(&data[end - start..]);

    data_call_list_decoder_harness(&message);
}
