//! Decoder configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CALL_INTERFACE;

/// Options for [`DataCallListDecoder`](crate::decoder::DataCallListDecoder).
///
/// Every field has a default, so a partial (or empty) document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Interface name given to legacy calls, which do not carry one.
    pub default_interface: String,
    /// Build a per-message trace and hand it to the trace sink.
    pub trace: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            default_interface: DEFAULT_CALL_INTERFACE.to_string(),
            trace: true,
        }
    }
}
