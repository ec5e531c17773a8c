//! Error types for RIL parcel reading and data-call list decoding.
//!
//! Errors are layered the same way the decoder is: [`ParcelError`] covers the
//! byte cursor, [`DecodeError`] covers a whole unsolicited message. The
//! `thiserror` crate is used for the definitions.

use std::fmt;

use thiserror::Error;

/// Wire field being read when a parcel error occurred.
///
/// Kept as a small `Copy` enum so errors stay allocation-free on the hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Version,
    Num,
    Status,
    Retry,
    Cid,
    Active,
    Type,
    Apn,
    Ifname,
    Addresses,
    Dnses,
    Gateways,
    /// Field read through the cursor without a decoder-assigned name.
    Unnamed,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Version => "version",
            Field::Num => "num",
            Field::Status => "status",
            Field::Retry => "retry",
            Field::Cid => "cid",
            Field::Active => "active",
            Field::Type => "type",
            Field::Apn => "apn",
            Field::Ifname => "ifname",
            Field::Addresses => "addresses",
            Field::Dnses => "dnses",
            Field::Gateways => "gateways",
            Field::Unnamed => "field",
        };
        f.write_str(name)
    }
}

/// Errors raised by a [`ByteCursor`](crate::parcel::ByteCursor).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParcelError {
    /// A read would run past the end of the buffer.
    #[error("Parcel underrun reading {field}: needed {needed} bytes, {available} available")]
    Underrun {
        needed: usize,
        available: usize,
        field: Field,
    },

    /// A string header carried a negative length other than the null marker.
    #[error("Invalid string length {length} for {field}")]
    InvalidStringLength { length: i32, field: Field },
}

impl ParcelError {
    /// Rebinds the error to the wire field the decoder was reading.
    pub fn with_field(self, field: Field) -> Self {
        match self {
            ParcelError::Underrun {
                needed, available, ..
            } => ParcelError::Underrun {
                needed,
                available,
                field,
            },
            ParcelError::InvalidStringLength { length, .. } => {
                ParcelError::InvalidStringLength { length, field }
            }
        }
    }
}

/// Coarse error class reported to the daemon's error out-channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The caller handed over a message that cannot be a data-call list.
    InvalidArgument,
    /// The message looked plausible but its contents did not hold together.
    Failure,
}

/// Errors produced while decoding an unsolicited data-call list.
///
/// A decode either yields a complete list or one of these; partially decoded
/// records are never returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is shorter than the fixed version/count header.
    #[error("Data call list message too small: {got} bytes, need at least {min}")]
    MessageTooSmall { got: usize, min: usize },

    /// A record ran past the end of the buffer or carried a malformed field.
    #[error("Corrupt data call list at record {index}: {source}")]
    CorruptMessage {
        index: usize,
        #[source]
        source: ParcelError,
    },
}

impl DecodeError {
    /// Error class surfaced to the daemon, mirroring the RIL error convention.
    pub fn class(&self) -> ErrorClass {
        match self {
            DecodeError::MessageTooSmall { .. } => ErrorClass::InvalidArgument,
            DecodeError::CorruptMessage { .. } => ErrorClass::Failure,
        }
    }

    /// True for every error caused by contents inconsistent with the buffer size.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, DecodeError::CorruptMessage { .. })
    }
}
