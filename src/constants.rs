/// Minimum size of a data call list message: the version and count int32s.
pub const MIN_DATA_CALL_LIST_SIZE: usize = 8;
/// Interface name assumed for legacy data calls, which do not carry one.
pub const DEFAULT_CALL_INTERFACE: &str = "rmnet0";

/// First protocol version that drops the APN field from the legacy record.
pub const DATA_CALL_LIST_VERSION_NO_APN: i32 = 4;
/// First protocol version that carries `num` full records (RIL v6 response layout).
pub const DATA_CALL_LIST_VERSION_MULTI: i32 = 5;

/// Size in bytes of an int32 on the wire.
pub const PARCEL_INT32_SIZE: usize = 4;
/// Size in bytes of a UTF-16 code unit on the wire.
pub const PARCEL_CHAR16_SIZE: usize = 2;
/// String length value used by parcels to encode a null string.
pub const PARCEL_NULL_STRING_LENGTH: i32 = -1;

/// Smallest possible encoding of a multi-record entry: four int32s and five
/// null strings, each of which is a lone int32 length.
pub const MIN_MULTI_RECORD_SIZE: usize = 4 * PARCEL_INT32_SIZE + 5 * PARCEL_INT32_SIZE;
