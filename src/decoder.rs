//! Decoding of the unsolicited data call list message.
//!
//! The message starts with a version and a record count. Versions below 5
//! carry exactly one short record (with an APN below version 4); later
//! versions carry `num` full records. The version and count always come first
//! and are not themselves versioned.
//!
//! A decode returns either a complete [`DataCallList`] or a [`DecodeError`].
//! Records read before a failure are dropped with the partially built list.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::config::DecoderConfig;
use crate::constants::{MIN_DATA_CALL_LIST_SIZE, MIN_MULTI_RECORD_SIZE};
use crate::data_call::{DataCall, DataCallList};
use crate::error::{DecodeError, Field, ParcelError};
use crate::parcel::{ByteCursor, Parcel};
use crate::trace::{TraceSink, TracingSink};
use crate::types::{ContextId, ListFormat, ProtocolVersion};

/// Message name handed to the trace sink.
pub const DATA_CALL_LIST_CHANGED: &str = "UNSOL_DATA_CALL_LIST_CHANGED";

/// Decodes data call list messages.
///
/// Holds the configuration and the injected trace sink; decoding itself keeps
/// no state between calls.
#[derive(Clone)]
pub struct DataCallListDecoder {
    config: DecoderConfig,
    sink: Arc<dyn TraceSink>,
}

impl std::fmt::Debug for DataCallListDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataCallListDecoder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for DataCallListDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default(), Arc::new(TracingSink))
    }
}

impl DataCallListDecoder {
    pub fn new(config: DecoderConfig, sink: Arc<dyn TraceSink>) -> Self {
        Self { config, sink }
    }

    /// Decoder with the given configuration tracing through `tracing`.
    pub fn with_config(config: DecoderConfig) -> Self {
        Self::new(config, Arc::new(TracingSink))
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes a raw message buffer.
    ///
    /// # Errors
    /// - [`DecodeError::MessageTooSmall`] if `buffer` cannot hold the header.
    /// - [`DecodeError::CorruptMessage`] if the records do not fit in `buffer`,
    ///   including a declared count too large for the remaining bytes.
    pub fn decode(&self, buffer: &[u8]) -> Result<DataCallList, DecodeError> {
        let mut parcel = Parcel::new(buffer);
        self.decode_from(&mut parcel)
    }

    /// Decodes a message from any [`ByteCursor`] positioned at its start.
    pub fn decode_from<C: ByteCursor>(&self, cursor: &mut C) -> Result<DataCallList, DecodeError> {
        let got = cursor.remaining();
        if got < MIN_DATA_CALL_LIST_SIZE {
            tracing::error!(got, "data call list message too small");
            return Err(DecodeError::MessageTooSmall {
                got,
                min: MIN_DATA_CALL_LIST_SIZE,
            });
        }

        let version = ProtocolVersion::new(read_int(cursor, Field::Version, 0)?);
        let num = read_int(cursor, Field::Num, 0)?;

        let mut trace = (self.config.trace && self.sink.enabled())
            .then(|| format!("{{version={},num={}", version.value(), num));

        let result = match version.format() {
            ListFormat::Multi => self.decode_multi(cursor, version, num, &mut trace),
            ListFormat::Legacy | ListFormat::LegacyWithApn => {
                self.decode_legacy(cursor, version, num, &mut trace)
            }
        };

        match result {
            Ok(list) => {
                if let Some(mut trace) = trace {
                    trace.push('}');
                    self.sink.print_unsol(DATA_CALL_LIST_CHANGED, &trace);
                }
                Ok(list)
            }
            Err(err) => {
                tracing::error!(version = version.value(), num, "{}", err);
                Err(err)
            }
        }
    }

    fn decode_legacy<C: ByteCursor>(
        &self,
        cursor: &mut C,
        version: ProtocolVersion,
        num: i32,
        trace: &mut Option<String>,
    ) -> Result<DataCallList, DecodeError> {
        // Only one call is ever valid in the short layout, whatever `num` says.
        let cid = ContextId::new(read_int(cursor, Field::Cid, 0)?);
        let active = read_int(cursor, Field::Active, 0)?;
        let call_type = read_str(cursor, Field::Type, 0)?;
        if version.format() == ListFormat::LegacyWithApn {
            read_str(cursor, Field::Apn, 0)?;
        }
        let addresses = read_str(cursor, Field::Addresses, 0)?;

        let call = DataCall {
            status: 0,
            retry: 0,
            cid,
            active,
            call_type,
            ifname: self.config.default_interface.clone(),
            addresses,
            dnses: String::new(),
            gateways: String::new(),
        };
        append_trace(trace, &call);

        let mut list = DataCallList::with_capacity(version, num, 1);
        list.insert_sorted(call);
        Ok(list)
    }

    fn decode_multi<C: ByteCursor>(
        &self,
        cursor: &mut C,
        version: ProtocolVersion,
        num: i32,
        trace: &mut Option<String>,
    ) -> Result<DataCallList, DecodeError> {
        // A negative count decodes to no calls; `num` is still kept as sent.
        let count = usize::try_from(num).unwrap_or(0);
        // Checked before allocating so a hostile count cannot reserve memory.
        let available = cursor.remaining();
        let needed = count.saturating_mul(MIN_MULTI_RECORD_SIZE);
        if needed > available {
            return Err(DecodeError::CorruptMessage {
                index: 0,
                source: ParcelError::Underrun {
                    needed,
                    available,
                    field: Field::Num,
                },
            });
        }

        let mut list = DataCallList::with_capacity(version, num, count);
        for index in 0..count {
            let call = DataCall {
                status: read_int(cursor, Field::Status, index)?,
                retry: read_int(cursor, Field::Retry, index)?,
                cid: ContextId::new(read_int(cursor, Field::Cid, index)?),
                active: read_int(cursor, Field::Active, index)?,
                call_type: read_str(cursor, Field::Type, index)?,
                ifname: read_str(cursor, Field::Ifname, index)?,
                addresses: read_str(cursor, Field::Addresses, index)?,
                dnses: read_str(cursor, Field::Dnses, index)?,
                gateways: read_str(cursor, Field::Gateways, index)?,
            };
            append_trace(trace, &call);
            list.insert_sorted(call);
        }
        Ok(list)
    }
}

/// Decodes `buffer` with the default configuration.
pub fn decode_data_call_list(buffer: &[u8]) -> Result<DataCallList, DecodeError> {
    DataCallListDecoder::default().decode(buffer)
}

fn read_int<C: ByteCursor>(cursor: &mut C, field: Field, index: usize) -> Result<i32, DecodeError> {
    cursor
        .read_i32()
        .map_err(|source| DecodeError::CorruptMessage {
            index,
            source: source.with_field(field),
        })
}

fn read_str<C: ByteCursor>(
    cursor: &mut C,
    field: Field,
    index: usize,
) -> Result<String, DecodeError> {
    cursor
        .read_string()
        .map_err(|source| DecodeError::CorruptMessage {
            index,
            source: source.with_field(field),
        })
}

fn append_trace(trace: &mut Option<String>, call: &DataCall) {
    if let Some(trace) = trace.as_mut() {
        // Writing into a String cannot fail.
        let _ = write!(trace, " {}", call);
    }
}
