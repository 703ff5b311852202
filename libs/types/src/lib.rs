//! # PCF Wire Types
//!
//! Pure data definitions for PCF (Programmable Command Format) buffers: the
//! closed set of element type tags, the fixed structure sizes each kind
//! carries on the wire, the 36-byte message header, byte-order handling, and
//! the decoded [`Element`] sum type.
//!
//! ## What This Crate Contains
//! - `ElementType` tag registry with per-kind fixed header sizes
//! - `PcfHeader` message header and `MessageType` tags
//! - `Encoding` for explicit little/big-endian field access
//! - `Element` / `ElementValue` decoded representation
//!
//! ## What This Crate Does NOT Contain
//! - Cursor handling and bounds checking (belongs in pcf-codec)
//! - Symbolic name tables and rendering (belongs in pcf-codec)
//!
//! ## Architecture Role
//!
//! ```text
//! pcf-types → pcf-codec → host programs
//!     ↑           ↓             ↓
//! Wire tags   Cursor/decode   Text or JSON
//! Layouts     Name tables     output sinks
//! ```

pub mod protocol;

pub use protocol::constants::*;
pub use protocol::element::{trim_fixed, Element, ElementHeader, ElementType, ElementValue};
pub use protocol::encoding::Encoding;
pub use protocol::header::{MessageType, PcfHeader};
pub use protocol::TypeError;
