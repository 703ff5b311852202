//! Protocol-level constants for PCF buffers
//!
//! Type tags and structure lengths are part of the wire format and MUST match
//! the values produced by the queue manager bit for bit.

/// Every element starts with Type, StrucLength and Parameter (3 x 32-bit)
pub const ELEMENT_HEADER_LENGTH: usize = 12;

/// MQCFH: Type, StrucLength, Version, Command, MsgSeqNumber, Control,
/// CompCode, Reason, ParameterCount
pub const MQCFH_STRUC_LENGTH: usize = 36;

pub const MQCFH_VERSION_1: i32 = 1;
pub const MQCFH_VERSION_2: i32 = 2;
pub const MQCFH_VERSION_3: i32 = 3;

// Structure type tags (MQCFT_*)
pub const MQCFT_NONE: i32 = 0;
pub const MQCFT_COMMAND: i32 = 1;
pub const MQCFT_RESPONSE: i32 = 2;
pub const MQCFT_INTEGER: i32 = 3;
pub const MQCFT_STRING: i32 = 4;
pub const MQCFT_INTEGER_LIST: i32 = 5;
pub const MQCFT_STRING_LIST: i32 = 6;
pub const MQCFT_EVENT: i32 = 7;
pub const MQCFT_USER: i32 = 8;
pub const MQCFT_BYTE_STRING: i32 = 9;
pub const MQCFT_TRACE_ROUTE: i32 = 10;
pub const MQCFT_REPORT: i32 = 12;
pub const MQCFT_INTEGER_FILTER: i32 = 13;
pub const MQCFT_STRING_FILTER: i32 = 14;
pub const MQCFT_BYTE_STRING_FILTER: i32 = 15;
pub const MQCFT_COMMAND_XR: i32 = 16;
pub const MQCFT_XR_MSG: i32 = 17;
pub const MQCFT_XR_ITEM: i32 = 18;
pub const MQCFT_XR_SUMMARY: i32 = 19;
pub const MQCFT_GROUP: i32 = 20;
pub const MQCFT_STATISTICS: i32 = 21;
pub const MQCFT_ACCOUNTING: i32 = 22;
pub const MQCFT_INTEGER64: i32 = 23;
pub const MQCFT_INTEGER64_LIST: i32 = 25;
pub const MQCFT_APP_ACTIVITY: i32 = 26;
pub const MQCFT_STATUS: i32 = 27;

// Fixed structure lengths (header plus fixed fields, before variable data)
pub const MQCFIN_STRUC_LENGTH: usize = 16;
pub const MQCFIN64_STRUC_LENGTH: usize = 24;
pub const MQCFST_STRUC_LENGTH_FIXED: usize = 20;
pub const MQCFIL_STRUC_LENGTH_FIXED: usize = 16;
pub const MQCFIL64_STRUC_LENGTH_FIXED: usize = 16;
pub const MQCFSL_STRUC_LENGTH_FIXED: usize = 24;
pub const MQCFBS_STRUC_LENGTH_FIXED: usize = 16;
pub const MQCFGR_STRUC_LENGTH: usize = 16;
pub const MQCFIF_STRUC_LENGTH: usize = 20;
pub const MQCFSF_STRUC_LENGTH_FIXED: usize = 24;
pub const MQCFBF_STRUC_LENGTH_FIXED: usize = 20;

// Control options (MQCFC_*)
pub const MQCFC_NOT_LAST: i32 = 0;
pub const MQCFC_LAST: i32 = 1;

// Encodings (MQENC_*) - only the integer byte-order nibble matters here
pub const MQENC_INTEGER_MASK: i32 = 0x0000_000F;
pub const MQENC_INTEGER_NORMAL: i32 = 0x0000_0001;
pub const MQENC_INTEGER_REVERSED: i32 = 0x0000_0002;

/// Variable-length payloads are padded to this boundary inside StrucLength
pub const STRUCT_ALIGNMENT: usize = 4;
