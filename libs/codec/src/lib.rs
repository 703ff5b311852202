//! # PCF Codec
//!
//! ## Purpose
//!
//! Decoding and rendering engine for PCF (Programmable Command Format)
//! messages. A host hands over one complete message buffer; this crate walks
//! it element by element, validates every length against what is actually
//! left in the buffer, and writes aligned human-readable lines to an output
//! sink with numeric constants replaced by symbolic names.
//!
//! ## Architecture Role
//!
//! ```text
//! pcf-types → [pcf-codec] → host programs (pcf-dump)
//!     ↑            ↓                 ↓
//! Wire tags    Cursor/parser     Text sink
//! Layouts      Name tables       JSON trees
//!              Skip/terse        Object filter
//! ```
//!
//! ## What This Crate Contains
//! - [`Cursor`]: bounds-checked reader with explicit byte order
//! - [`parser`]: per-kind element decoding and MQCFH parsing
//! - [`decode`] / [`decode_message`]: the recursive renderer
//! - [`skip()`], [`terse_line`], [`group_matches`]: alternate traversals
//! - [`names`] and [`fields`]: constant tables, label tables, name formatting
//! - [`tree`]: structured decode for JSON output
//! - [`PcfBuilder`]: fluent encoder used by tests, benches and fixtures
//!
//! ## What This Crate Does NOT Contain
//! - Message retrieval or queue connectivity
//! - Command-line handling (belongs in scripts/tools/pcf-dump)
//! - Character-set conversion beyond byte-faithful passthrough
//!
//! ## Example
//!
//! ```
//! use pcf_codec::{decode_message, PcfBuilder, RenderOptions, RenderState};
//! use pcf_types::{Encoding, MessageType, PcfHeader};
//!
//! let bytes = PcfBuilder::new(Encoding::Little)
//!     .string(2015, "QM1")
//!     .build_message(PcfHeader::new(MessageType::AppActivity, 209))
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! let decoded = decode_message(
//!     &bytes,
//!     Encoding::Little,
//!     &RenderOptions::default(),
//!     &mut RenderState::new(),
//!     &mut out,
//! )
//! .unwrap();
//! assert_eq!(decoded.summary.bytes_consumed, bytes.len());
//! ```

pub mod builder;
pub mod cursor;
pub mod decoder;
pub mod error;
pub mod fields;
pub mod format;
pub mod names;
pub mod options;
pub mod parser;
pub mod skip;
pub mod tree;

pub use builder::{BuildError, PcfBuilder};
pub use cursor::Cursor;
pub use decoder::{decode, decode_message, Anomaly, DecodeSummary, DecodedMessage};
pub use error::{DecodeError, DecodeResult};
pub use fields::{Application, FieldKind, FieldTable};
pub use format::Layout;
pub use names::{format_constant, lookup_name, resolve, Domain, NameStyle};
pub use options::{
    ByteStyle, NameFilter, RenderMode, RenderOptions, RenderState, DEFAULT_MAX_DEPTH,
};
pub use parser::{parse_message_header, read_element};
pub use skip::{group_matches, skip, skip_with_limit, terse_heading, terse_line};
pub use tree::{parse_message_tree, parse_tree, MessageTree, Node};

// Wire types used throughout the public API
pub use pcf_types::{Element, ElementType, ElementValue, Encoding, MessageType, PcfHeader};
