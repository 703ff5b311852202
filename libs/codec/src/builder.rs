//! # PCF Buffer Builder
//!
//! ## Purpose
//!
//! Typed construction of well-formed PCF buffers: one method per element
//! kind, groups with automatic child counting, and the 36-byte message
//! header on top. Used to compose command messages and to produce fixtures
//! for decoder tests and benchmarks.
//!
//! ## Architecture
//!
//! ```text
//! PcfBuilder::new(encoding)
//!     .integer(..).string(..)          element bytes appended in order
//!     .nested(param, |g| g...)         child builder, count filled in
//!     .build_message(header)  ──►  [MQCFH][element][group][child]...
//! ```
//!
//! Variable-length payloads are padded to a 4-byte boundary inside
//! StrucLength; the declared string or byte length stays exact.

use pcf_types::{
    Encoding, PcfHeader, ELEMENT_HEADER_LENGTH, MQCFBF_STRUC_LENGTH_FIXED,
    MQCFBS_STRUC_LENGTH_FIXED, MQCFGR_STRUC_LENGTH, MQCFH_STRUC_LENGTH, MQCFIF_STRUC_LENGTH,
    MQCFIL64_STRUC_LENGTH_FIXED, MQCFIL_STRUC_LENGTH_FIXED, MQCFIN64_STRUC_LENGTH,
    MQCFIN_STRUC_LENGTH, MQCFSF_STRUC_LENGTH_FIXED, MQCFSL_STRUC_LENGTH_FIXED,
    MQCFST_STRUC_LENGTH_FIXED, MQCFT_BYTE_STRING, MQCFT_BYTE_STRING_FILTER, MQCFT_GROUP,
    MQCFT_INTEGER, MQCFT_INTEGER64, MQCFT_INTEGER64_LIST, MQCFT_INTEGER_FILTER,
    MQCFT_INTEGER_LIST, MQCFT_STRING, MQCFT_STRING_FILTER, MQCFT_STRING_LIST, STRUCT_ALIGNMENT,
};
use thiserror::Error;

/// Default coded character set for strings written by the builder
pub const DEFAULT_CCSID: i32 = 1208;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Element for parameter {parameter} is {length} bytes, exceeding the 32-bit structure length")]
    TooLarge { parameter: i32, length: usize },

    #[error("{missing} child element(s) declared by open groups were never added")]
    IncompleteGroup { missing: u32 },
}

fn padded(len: usize) -> usize {
    len.div_ceil(STRUCT_ALIGNMENT) * STRUCT_ALIGNMENT
}

#[derive(Debug, Clone)]
pub struct PcfBuilder {
    encoding: Encoding,
    ccsid: i32,
    buffer: Vec<u8>,
    top_level: u32,
    /// Children still owed to each open `group`, innermost last
    pending: Vec<u32>,
    error: Option<BuildError>,
}

impl PcfBuilder {
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            ccsid: DEFAULT_CCSID,
            buffer: Vec::with_capacity(256),
            top_level: 0,
            pending: Vec::new(),
            error: None,
        }
    }

    pub fn with_ccsid(mut self, ccsid: i32) -> Self {
        self.ccsid = ccsid;
        self
    }

    /// Elements at the outermost level, the message header's ParameterCount
    pub fn element_count(&self) -> u32 {
        self.top_level
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn note_element(&mut self) {
        match self.pending.last_mut() {
            Some(owed) => *owed -= 1,
            None => self.top_level += 1,
        }
        while self.pending.last() == Some(&0) {
            self.pending.pop();
        }
    }

    /// Write the 12-byte element header, recording oversize elements
    fn header(&mut self, element_type: i32, struct_length: usize, parameter: i32) {
        let length = match u32::try_from(struct_length) {
            Ok(length) => length,
            Err(_) => {
                self.error.get_or_insert(BuildError::TooLarge {
                    parameter,
                    length: struct_length,
                });
                u32::MAX
            }
        };
        self.note_element();
        self.encoding.put_i32(&mut self.buffer, element_type);
        self.encoding.put_u32(&mut self.buffer, length);
        self.encoding.put_i32(&mut self.buffer, parameter);
    }

    fn put_i32(&mut self, value: i32) {
        self.encoding.put_i32(&mut self.buffer, value);
    }

    fn put_u32(&mut self, value: u32) {
        self.encoding.put_u32(&mut self.buffer, value);
    }

    fn put_len(&mut self, value: usize) {
        self.put_u32(u32::try_from(value).unwrap_or(u32::MAX));
    }

    /// Append `data` and zero-fill up to `width`
    fn put_padded(&mut self, data: &[u8], width: usize) {
        self.buffer.extend_from_slice(data);
        let fill = width.saturating_sub(data.len());
        self.buffer.resize(self.buffer.len() + fill, 0);
    }

    pub fn integer(mut self, parameter: i32, value: i32) -> Self {
        self.header(MQCFT_INTEGER, MQCFIN_STRUC_LENGTH, parameter);
        self.put_i32(value);
        self
    }

    pub fn integer64(mut self, parameter: i32, value: i64) -> Self {
        self.header(MQCFT_INTEGER64, MQCFIN64_STRUC_LENGTH, parameter);
        self.put_i32(0);
        self.encoding.put_i64(&mut self.buffer, value);
        self
    }

    pub fn string(mut self, parameter: i32, value: &str) -> Self {
        let data = value.as_bytes();
        let body = padded(data.len());
        self.header(MQCFT_STRING, MQCFST_STRUC_LENGTH_FIXED + body, parameter);
        self.put_i32(self.ccsid);
        self.put_len(data.len());
        self.put_padded(data, body);
        self
    }

    pub fn integer_list(mut self, parameter: i32, values: &[i32]) -> Self {
        self.header(
            MQCFT_INTEGER_LIST,
            MQCFIL_STRUC_LENGTH_FIXED + values.len() * 4,
            parameter,
        );
        self.put_len(values.len());
        for &value in values {
            self.put_i32(value);
        }
        self
    }

    pub fn integer64_list(mut self, parameter: i32, values: &[i64]) -> Self {
        self.header(
            MQCFT_INTEGER64_LIST,
            MQCFIL64_STRUC_LENGTH_FIXED + values.len() * 8,
            parameter,
        );
        self.put_len(values.len());
        for &value in values {
            self.encoding.put_i64(&mut self.buffer, value);
        }
        self
    }

    /// Every item is blank-padded or cut to `item_length`
    pub fn string_list(mut self, parameter: i32, values: &[&str], item_length: usize) -> Self {
        let items = values.len() * item_length;
        let body = padded(items);
        self.header(MQCFT_STRING_LIST, MQCFSL_STRUC_LENGTH_FIXED + body, parameter);
        self.put_i32(self.ccsid);
        self.put_len(values.len());
        self.put_len(item_length);
        for value in values {
            let data = value.as_bytes();
            let kept = &data[..data.len().min(item_length)];
            self.buffer.extend_from_slice(kept);
            let fill = item_length - kept.len();
            self.buffer.resize(self.buffer.len() + fill, b' ');
        }
        let fill = body - items;
        self.buffer.resize(self.buffer.len() + fill, 0);
        self
    }

    pub fn byte_string(mut self, parameter: i32, value: &[u8]) -> Self {
        let body = padded(value.len());
        self.header(MQCFT_BYTE_STRING, MQCFBS_STRUC_LENGTH_FIXED + body, parameter);
        self.put_len(value.len());
        self.put_padded(value, body);
        self
    }

    pub fn integer_filter(mut self, parameter: i32, operator: i32, value: i32) -> Self {
        self.header(MQCFT_INTEGER_FILTER, MQCFIF_STRUC_LENGTH, parameter);
        self.put_i32(operator);
        self.put_i32(value);
        self
    }

    pub fn string_filter(mut self, parameter: i32, operator: i32, value: &str) -> Self {
        let data = value.as_bytes();
        let body = padded(data.len());
        self.header(
            MQCFT_STRING_FILTER,
            MQCFSF_STRUC_LENGTH_FIXED + body,
            parameter,
        );
        self.put_i32(operator);
        self.put_i32(self.ccsid);
        self.put_len(data.len());
        self.put_padded(data, body);
        self
    }

    pub fn byte_string_filter(mut self, parameter: i32, operator: i32, value: &[u8]) -> Self {
        let body = padded(value.len());
        self.header(
            MQCFT_BYTE_STRING_FILTER,
            MQCFBF_STRUC_LENGTH_FIXED + body,
            parameter,
        );
        self.put_i32(operator);
        self.put_len(value.len());
        self.put_padded(value, body);
        self
    }

    /// Group header only; the next `parameter_count` elements become its children
    pub fn group(mut self, parameter: i32, parameter_count: u32) -> Self {
        self.header(MQCFT_GROUP, MQCFGR_STRUC_LENGTH, parameter);
        self.put_u32(parameter_count);
        if parameter_count > 0 {
            self.pending.push(parameter_count);
        }
        self
    }

    /// Group whose children are produced by `children`, counted automatically
    pub fn nested(mut self, parameter: i32, children: impl FnOnce(Self) -> Self) -> Self {
        let inner = children(PcfBuilder::new(self.encoding).with_ccsid(self.ccsid));
        if let Some(error) = inner.error.clone() {
            self.error.get_or_insert(error);
        }
        let missing: u32 = inner.pending.iter().sum();
        if missing > 0 {
            self.error
                .get_or_insert(BuildError::IncompleteGroup { missing });
        }

        self.header(MQCFT_GROUP, MQCFGR_STRUC_LENGTH, parameter);
        self.put_u32(inner.top_level);
        self.buffer.extend_from_slice(&inner.buffer);
        self
    }

    /// Element with an arbitrary type tag and opaque payload
    pub fn unknown(mut self, element_type: i32, parameter: i32, payload: &[u8]) -> Self {
        let body = padded(payload.len());
        self.header(element_type, ELEMENT_HEADER_LENGTH + body, parameter);
        self.put_padded(payload, body);
        self
    }

    /// Raw bytes, not counted as an element
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buffer.extend_from_slice(bytes);
        self
    }

    fn finish(self) -> Result<(Vec<u8>, u32), BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let missing: u32 = self.pending.iter().sum();
        if missing > 0 {
            return Err(BuildError::IncompleteGroup { missing });
        }
        Ok((self.buffer, self.top_level))
    }

    /// Element stream without a message header
    pub fn build(self) -> Result<Vec<u8>, BuildError> {
        self.finish().map(|(buffer, _)| buffer)
    }

    /// Header followed by the elements; ParameterCount and StrucLength are
    /// filled in from the builder
    pub fn build_message(self, mut header: PcfHeader) -> Result<Vec<u8>, BuildError> {
        let encoding = self.encoding;
        let (body, count) = self.finish()?;
        header.struct_length = MQCFH_STRUC_LENGTH as u32;
        header.parameter_count = count;

        let mut message = Vec::with_capacity(MQCFH_STRUC_LENGTH + body.len());
        for field in [
            header.message_type,
            header.struct_length as i32,
            header.version,
            header.command,
            header.msg_seq_number,
            header.control,
            header.comp_code,
            header.reason,
        ] {
            encoding.put_i32(&mut message, field);
        }
        encoding.put_u32(&mut message, header.parameter_count);
        message.extend_from_slice(&body);
        Ok(message)
    }
}
