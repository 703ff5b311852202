//! PCF protocol definitions
//!
//! Everything in this module mirrors the wire format exactly; nothing here
//! reads from a buffer on its own.

pub mod constants;
pub mod element;
pub mod encoding;
pub mod header;

use thiserror::Error;

/// Conversion errors for wire tags that fall outside the closed enumerations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Unknown element type tag {0}")]
    UnknownElementType(i32),

    #[error("Unknown message type tag {0}")]
    UnknownMessageType(i32),
}
