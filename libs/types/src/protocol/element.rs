//! # PCF Element Model
//!
//! ## Purpose
//!
//! Closed registry of element type tags and the decoded representation of a
//! single element. Decoders read the three-field header, pick the payload
//! layout from [`ElementType`], and produce an [`Element`] whose payload is an
//! explicit [`ElementValue`] variant instead of an overlaid raw struct.
//!
//! ## Wire Layout
//!
//! ```text
//! ┌──────────┬─────────────┬───────────┬──────────────────────────────┐
//! │ Type i32 │ StrucLength │ Parameter │ kind-specific payload        │
//! │          │ u32         │ i32       │ (padded to StrucLength)      │
//! └──────────┴─────────────┴───────────┴──────────────────────────────┘
//! ```
//!
//! A Group's StrucLength spans only its own 16-byte header; its
//! ParameterCount children follow it directly in the buffer.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::constants::*;
use super::TypeError;

/// Element type tags understood by the decoder
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub enum ElementType {
    Integer = 3,
    String = 4,
    IntegerList = 5,
    StringList = 6,
    ByteString = 9,
    IntegerFilter = 13,
    StringFilter = 14,
    ByteStringFilter = 15,
    Group = 20,
    Integer64 = 23,
    Integer64List = 25,
}

impl ElementType {
    /// Look up a wire tag, rejecting anything outside the closed set
    pub fn from_tag(tag: i32) -> Result<Self, TypeError> {
        Self::try_from(tag).map_err(|_| TypeError::UnknownElementType(tag))
    }

    /// Minimum StrucLength for this kind: header plus fixed fields
    pub const fn fixed_length(self) -> usize {
        match self {
            ElementType::Integer => MQCFIN_STRUC_LENGTH,
            ElementType::Integer64 => MQCFIN64_STRUC_LENGTH,
            ElementType::String => MQCFST_STRUC_LENGTH_FIXED,
            ElementType::IntegerList => MQCFIL_STRUC_LENGTH_FIXED,
            ElementType::Integer64List => MQCFIL64_STRUC_LENGTH_FIXED,
            ElementType::StringList => MQCFSL_STRUC_LENGTH_FIXED,
            ElementType::ByteString => MQCFBS_STRUC_LENGTH_FIXED,
            ElementType::Group => MQCFGR_STRUC_LENGTH,
            ElementType::IntegerFilter => MQCFIF_STRUC_LENGTH,
            ElementType::StringFilter => MQCFSF_STRUC_LENGTH_FIXED,
            ElementType::ByteStringFilter => MQCFBF_STRUC_LENGTH_FIXED,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ElementType::Integer => "MQCFIN",
            ElementType::Integer64 => "MQCFIN64",
            ElementType::String => "MQCFST",
            ElementType::IntegerList => "MQCFIL",
            ElementType::Integer64List => "MQCFIL64",
            ElementType::StringList => "MQCFSL",
            ElementType::ByteString => "MQCFBS",
            ElementType::Group => "MQCFGR",
            ElementType::IntegerFilter => "MQCFIF",
            ElementType::StringFilter => "MQCFSF",
            ElementType::ByteStringFilter => "MQCFBF",
        }
    }

    pub const fn is_filter(self) -> bool {
        matches!(
            self,
            ElementType::IntegerFilter | ElementType::StringFilter | ElementType::ByteStringFilter
        )
    }

    pub fn all() -> &'static [ElementType] {
        &[
            ElementType::Integer,
            ElementType::String,
            ElementType::IntegerList,
            ElementType::StringList,
            ElementType::ByteString,
            ElementType::IntegerFilter,
            ElementType::StringFilter,
            ElementType::ByteStringFilter,
            ElementType::Group,
            ElementType::Integer64,
            ElementType::Integer64List,
        ]
    }
}

/// The three fields every element starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct ElementHeader {
    pub element_type: i32,
    pub struct_length: u32,
    pub parameter: i32,
}

impl ElementHeader {
    /// `None` for tags outside the closed enumeration
    pub fn kind(&self) -> Option<ElementType> {
        ElementType::try_from(self.element_type).ok()
    }

    /// Smallest StrucLength that is structurally valid for this header
    pub fn minimum_length(&self) -> usize {
        self.kind()
            .map_or(ELEMENT_HEADER_LENGTH, ElementType::fixed_length)
    }
}

/// Kind-specific payload of a decoded element
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serialization",
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum ElementValue {
    Integer(i32),
    Integer64(i64),
    String {
        ccsid: i32,
        #[cfg_attr(feature = "serialization", serde(serialize_with = "serde_text::text"))]
        value: Vec<u8>,
    },
    IntegerList(Vec<i32>),
    Integer64List(Vec<i64>),
    StringList {
        ccsid: i32,
        #[cfg_attr(feature = "serialization", serde(serialize_with = "serde_text::text_list"))]
        values: Vec<Vec<u8>>,
    },
    ByteString(
        #[cfg_attr(feature = "serialization", serde(serialize_with = "serde_text::hex_upper"))]
        Vec<u8>,
    ),
    Group {
        parameter_count: u32,
    },
    IntegerFilter {
        operator: i32,
        value: i32,
    },
    StringFilter {
        operator: i32,
        ccsid: i32,
        #[cfg_attr(feature = "serialization", serde(serialize_with = "serde_text::text"))]
        value: Vec<u8>,
    },
    ByteStringFilter {
        operator: i32,
        #[cfg_attr(feature = "serialization", serde(serialize_with = "serde_text::hex_upper"))]
        value: Vec<u8>,
    },
    /// Tag outside the closed set; payload left uninterpreted
    Unknown {
        element_type: i32,
    },
}

/// One decoded element, positioned by its byte offset in the source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Element {
    pub header: ElementHeader,
    pub offset: usize,
    pub value: ElementValue,
}

impl Element {
    pub fn parameter(&self) -> i32 {
        self.header.parameter
    }

    pub fn struct_length(&self) -> usize {
        self.header.struct_length as usize
    }

    pub fn kind(&self) -> Option<ElementType> {
        self.header.kind()
    }

    /// Number of child elements that follow this one in the buffer
    pub fn child_count(&self) -> u32 {
        match self.value {
            ElementValue::Group { parameter_count } => parameter_count,
            _ => 0,
        }
    }
}

/// Strip trailing blanks and NULs from a fixed-width character field
pub fn trim_fixed(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != b' ' && b != 0)
        .map_or(0, |last| last + 1);
    &bytes[..end]
}

#[cfg(feature = "serialization")]
mod serde_text {
    use serde::ser::SerializeSeq;
    use serde::Serializer;

    use super::trim_fixed;

    pub fn text<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(trim_fixed(bytes)))
    }

    pub fn text_list<S: Serializer>(values: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&String::from_utf8_lossy(trim_fixed(value)))?;
        }
        seq.end()
    }

    pub fn hex_upper<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode_upper(bytes))
    }
}
