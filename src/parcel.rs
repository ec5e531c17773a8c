//! RIL parcel reading and writing.
//!
//! A parcel is the flat buffer RIL uses for every message. Integers are int32
//! in host (little-endian) order. Strings are an int32 count of UTF-16 code
//! units followed by the NUL-terminated UTF-16LE text, padded to four bytes.
//! A count of -1 encodes a null string.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::constants::{PARCEL_CHAR16_SIZE, PARCEL_INT32_SIZE, PARCEL_NULL_STRING_LENGTH};
use crate::error::{Field, ParcelError};

/// Sequential reader over a message buffer.
///
/// The decoder only ever talks to this trait, so any transport that can hand
/// out int32s and length-prefixed strings can feed it.
pub trait ByteCursor {
    /// Reads one int32 and advances four bytes.
    fn read_i32(&mut self) -> Result<i32, ParcelError>;

    /// Reads one length-prefixed string and advances past it.
    ///
    /// Null and zero-length strings both come back as an empty `String`.
    fn read_string(&mut self) -> Result<String, ParcelError>;

    /// Number of unread bytes.
    fn remaining(&self) -> usize;
}

/// Rounds a byte count up to the parcel's four-byte alignment.
#[inline]
const fn pad_size(len: usize) -> usize {
    (len + 3) & !3
}

/// Length prefix for a string of `units` UTF-16 code units.
fn wire_string_length(units: usize) -> i32 {
    match i32::try_from(units) {
        Ok(length) => length,
        Err(_) => panic!("string of {units} UTF-16 units does not fit a parcel length prefix"),
    }
}

/// [`ByteCursor`] over a borrowed RIL parcel.
#[derive(Debug, Clone)]
pub struct Parcel<'a> {
    data: &'a [u8],
}

impl<'a> Parcel<'a> {
    /// Creates a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn ensure(&self, needed: usize) -> Result<(), ParcelError> {
        if self.data.remaining() < needed {
            return Err(ParcelError::Underrun {
                needed,
                available: self.data.remaining(),
                field: Field::Unnamed,
            });
        }
        Ok(())
    }
}

impl ByteCursor for Parcel<'_> {
    fn read_i32(&mut self) -> Result<i32, ParcelError> {
        self.ensure(PARCEL_INT32_SIZE)?;
        Ok(self.data.get_i32_le())
    }

    fn read_string(&mut self) -> Result<String, ParcelError> {
        let length = self.read_i32()?;
        if length == PARCEL_NULL_STRING_LENGTH {
            return Ok(String::new());
        }
        let units = usize::try_from(length).map_err(|_| ParcelError::InvalidStringLength {
            length,
            field: Field::Unnamed,
        })?;

        // Text plus the NUL terminator must be present; trailing padding may be cut short.
        let byte_len = units
            .checked_add(1)
            .and_then(|n| n.checked_mul(PARCEL_CHAR16_SIZE))
            .unwrap_or(usize::MAX);
        self.ensure(byte_len)?;

        let text: Vec<u16> = self.data[..units * PARCEL_CHAR16_SIZE]
            .chunks_exact(PARCEL_CHAR16_SIZE)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        let advance = pad_size(byte_len).min(self.data.remaining());
        self.data.advance(advance);

        Ok(String::from_utf16_lossy(&text))
    }

    fn remaining(&self) -> usize {
        self.data.remaining()
    }
}

/// Builds RIL parcels with the same encoding [`Parcel`] reads.
#[derive(Debug, Default, Clone)]
pub struct ParcelWriter {
    buf: BytesMut,
}

impl ParcelWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one int32.
    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        self.buf.put_i32_le(value);
        self
    }

    /// Appends a string as UTF-16 with terminator and padding.
    ///
    /// # Panics
    /// If `value` is longer than `i32::MAX` UTF-16 code units, which the
    /// length prefix cannot express.
    pub fn write_string(&mut self, value: &str) -> &mut Self {
        let units: Vec<u16> = value.encode_utf16().collect();
        self.buf.put_i32_le(wire_string_length(units.len()));
        for unit in &units {
            self.buf.put_u16_le(*unit);
        }
        self.buf.put_u16_le(0);
        while self.buf.len() % PARCEL_INT32_SIZE != 0 {
            self.buf.put_u8(0);
        }
        self
    }

    /// Appends a null string marker.
    pub fn write_null_string(&mut self) -> &mut Self {
        self.buf.put_i32_le(PARCEL_NULL_STRING_LENGTH);
        self
    }

    /// Current encoded length.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finishes the parcel.
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}
