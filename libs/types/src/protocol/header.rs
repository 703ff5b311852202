//! PCF Message Header (MQCFH)
//!
//! The header is identical for all PCF messages: nine 32-bit fields, 36 bytes.
//!
//! ```text
//! ┌──────┬─────────────┬─────────┬─────────┬──────────────┬─────────┬──────────┬────────┬────────────────┐
//! │ Type │ StrucLength │ Version │ Command │ MsgSeqNumber │ Control │ CompCode │ Reason │ ParameterCount │
//! └──────┴─────────────┴─────────┴─────────┴──────────────┴─────────┴──────────┴────────┴────────────────┘
//! ```

use num_enum::TryFromPrimitive;

use super::constants::*;
use super::TypeError;

/// Message-level structure types that may appear in the MQCFH Type field
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub enum MessageType {
    Command = 1,
    Response = 2,
    Event = 7,
    User = 8,
    TraceRoute = 10,
    Report = 12,
    CommandXr = 16,
    XrMsg = 17,
    XrItem = 18,
    XrSummary = 19,
    Statistics = 21,
    Accounting = 22,
    AppActivity = 26,
    Status = 27,
}

impl MessageType {
    pub fn from_tag(tag: i32) -> Result<Self, TypeError> {
        Self::try_from(tag).map_err(|_| TypeError::UnknownMessageType(tag))
    }
}

/// Decoded MQCFH
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct PcfHeader {
    pub message_type: i32,
    pub struct_length: u32,
    pub version: i32,
    pub command: i32,
    pub msg_seq_number: i32,
    pub control: i32,
    pub comp_code: i32,
    pub reason: i32,
    pub parameter_count: u32,
}

impl PcfHeader {
    /// Header size in bytes
    pub const SIZE: usize = MQCFH_STRUC_LENGTH;

    /// A single-message header (sequence 1, last in set, no error)
    pub fn new(message_type: MessageType, command: i32) -> Self {
        Self {
            message_type: message_type as i32,
            struct_length: Self::SIZE as u32,
            version: MQCFH_VERSION_3,
            command,
            msg_seq_number: 1,
            control: MQCFC_LAST,
            comp_code: 0,
            reason: 0,
            parameter_count: 0,
        }
    }

    pub fn kind(&self) -> Option<MessageType> {
        MessageType::try_from(self.message_type).ok()
    }

    /// Last message of a multi-message response set
    pub fn is_last(&self) -> bool {
        self.control == MQCFC_LAST
    }
}
