//! Core type definitions for RIL data call handling.
//!
//! Newtypes keep context ids and protocol versions from being mixed up with
//! the many other int32 fields of a data call record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DATA_CALL_LIST_VERSION_MULTI, DATA_CALL_LIST_VERSION_NO_APN};

/// Macro to generate RIL newtype wrappers with common implementations
macro_rules! ril_newtype {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty) => $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Creates a new instance
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Raw value
            #[inline]
            pub const fn value(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<$inner> for $name {
            #[inline]
            fn eq(&self, other: &$inner) -> bool {
                self.0 == *other
            }
        }
    };
}

ril_newtype! {
    /// Modem-assigned identifier of a data call.
    ContextId(i32) => "cid:"
}

ril_newtype! {
    /// Data call list format version sent at the head of the message.
    ProtocolVersion(i32) => "v"
}

/// Wire layout of a data call list, selected by [`ProtocolVersion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// Single record carrying an APN field.
    LegacyWithApn,
    /// Single record without APN.
    Legacy,
    /// `num` full records with interface, DNS and gateway fields.
    Multi,
}

impl ProtocolVersion {
    /// Returns the wire layout used by this version.
    pub const fn format(self) -> ListFormat {
        if self.0 >= DATA_CALL_LIST_VERSION_MULTI {
            ListFormat::Multi
        } else if self.0 >= DATA_CALL_LIST_VERSION_NO_APN {
            ListFormat::Legacy
        } else {
            ListFormat::LegacyWithApn
        }
    }
}
