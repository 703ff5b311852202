//! # PCF Element Parser
//!
//! ## Purpose
//!
//! Reads one self-describing element (or the 36-byte message header) from a
//! [`Cursor`] into the explicit [`Element`] representation. This is the only
//! place that knows the per-kind payload layouts; the renderer, the skip
//! path and the tree builder all go through it.
//!
//! ## Bounds Discipline
//!
//! 1. 12 header bytes must be available before anything is read
//! 2. StrucLength must fit in the remaining buffer
//! 3. StrucLength must cover the fixed part of the declared kind
//! 4. The payload is read from a sub-cursor limited to StrucLength, so a
//!    lying count or string length can never reach a sibling's bytes
//! 5. The caller's cursor advances by exactly StrucLength
//!
//! Unknown type tags are not an error here: the element comes back as
//! [`ElementValue::Unknown`] and the cursor is still correctly positioned.

use pcf_types::{
    Element, ElementHeader, ElementType, ElementValue, PcfHeader, ELEMENT_HEADER_LENGTH,
    MQCFH_STRUC_LENGTH,
};
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};

/// Read the element header at the cursor without advancing
pub fn peek_element_header(cursor: &Cursor<'_>) -> DecodeResult<ElementHeader> {
    cursor.ensure(ELEMENT_HEADER_LENGTH, "element header")?;
    Ok(ElementHeader {
        element_type: cursor.peek_i32_at(0, "element type")?,
        struct_length: cursor.peek_u32_at(4, "element structure length")?,
        parameter: cursor.peek_i32_at(8, "element parameter")?,
    })
}

/// Validate the header at the cursor and split off the element's bytes.
///
/// On success the caller's cursor has advanced by exactly StrucLength and the
/// returned sub-cursor is positioned just past the 12-byte header.
pub fn take_element<'a>(cursor: &mut Cursor<'a>) -> DecodeResult<(ElementHeader, Cursor<'a>)> {
    let offset = cursor.position();
    let header = peek_element_header(cursor)?;
    let struct_length = header.struct_length as usize;

    cursor.ensure(struct_length, "element structure length")?;

    let minimum = header.minimum_length();
    if struct_length < minimum {
        return Err(DecodeError::invalid_struct_length(
            struct_length,
            minimum,
            header.element_type,
            offset,
        ));
    }

    let mut body = cursor.take(struct_length, "element body")?;
    body.advance(ELEMENT_HEADER_LENGTH, "element header")?;
    Ok((header, body))
}

/// Read one complete element and advance past it
pub fn read_element(cursor: &mut Cursor<'_>) -> DecodeResult<Element> {
    let offset = cursor.position();
    let (header, mut body) = take_element(cursor)?;

    let value = match header.kind() {
        Some(kind) => read_payload(kind, &mut body)?,
        None => ElementValue::Unknown {
            element_type: header.element_type,
        },
    };

    trace!(
        offset,
        element_type = header.element_type,
        parameter = header.parameter,
        struct_length = header.struct_length,
        "read element"
    );

    Ok(Element {
        header,
        offset,
        value,
    })
}

fn read_payload(kind: ElementType, body: &mut Cursor<'_>) -> DecodeResult<ElementValue> {
    let value = match kind {
        ElementType::Integer => ElementValue::Integer(body.read_i32("integer value")?),
        ElementType::Integer64 => {
            body.advance(4, "integer64 reserved field")?;
            ElementValue::Integer64(body.read_i64("integer64 value")?)
        }
        ElementType::String => {
            let ccsid = body.read_i32("string CCSID")?;
            let len = body.read_u32("string length")? as usize;
            let value = read_owned_bytes(body, len, "string value")?;
            ElementValue::String { ccsid, value }
        }
        ElementType::IntegerList => {
            let count = body.read_u32("integer list count")? as usize;
            ElementValue::IntegerList(read_list(body, count, 4, "integer list", |c| {
                c.read_i32("integer list item")
            })?)
        }
        ElementType::Integer64List => {
            let count = body.read_u32("integer64 list count")? as usize;
            ElementValue::Integer64List(read_list(body, count, 8, "integer64 list", |c| {
                c.read_i64("integer64 list item")
            })?)
        }
        ElementType::StringList => {
            let ccsid = body.read_i32("string list CCSID")?;
            let count = body.read_u32("string list count")? as usize;
            let len = body.read_u32("string list item length")? as usize;
            let values = read_list(body, count, len, "string list", |c| {
                read_owned_bytes(c, len, "string list item")
            })?;
            ElementValue::StringList { ccsid, values }
        }
        ElementType::ByteString => {
            let len = body.read_u32("byte string length")? as usize;
            ElementValue::ByteString(read_owned_bytes(body, len, "byte string value")?)
        }
        ElementType::Group => ElementValue::Group {
            parameter_count: body.read_u32("group parameter count")?,
        },
        ElementType::IntegerFilter => ElementValue::IntegerFilter {
            operator: body.read_i32("filter operator")?,
            value: body.read_i32("integer filter value")?,
        },
        ElementType::StringFilter => {
            let operator = body.read_i32("filter operator")?;
            let ccsid = body.read_i32("string filter CCSID")?;
            let len = body.read_u32("string filter length")? as usize;
            let value = read_owned_bytes(body, len, "string filter value")?;
            ElementValue::StringFilter {
                operator,
                ccsid,
                value,
            }
        }
        ElementType::ByteStringFilter => {
            let operator = body.read_i32("filter operator")?;
            let len = body.read_u32("byte string filter length")? as usize;
            let value = read_owned_bytes(body, len, "byte string filter value")?;
            ElementValue::ByteStringFilter { operator, value }
        }
    };
    Ok(value)
}

fn read_owned_bytes(body: &mut Cursor<'_>, len: usize, context: &str) -> DecodeResult<Vec<u8>> {
    let bytes = body.read_bytes(len, context)?;
    let mut owned = Vec::new();
    owned
        .try_reserve_exact(bytes.len())
        .map_err(|_| DecodeError::allocation_failure(bytes.len(), context))?;
    owned.extend_from_slice(bytes);
    Ok(owned)
}

/// Read `count` items of `item_size` bytes, checking the whole run fits first
fn read_list<'a, T>(
    body: &mut Cursor<'a>,
    count: usize,
    item_size: usize,
    context: &str,
    mut read_item: impl FnMut(&mut Cursor<'a>) -> DecodeResult<T>,
) -> DecodeResult<Vec<T>> {
    let total = count.checked_mul(item_size).ok_or_else(|| {
        DecodeError::premature_end(usize::MAX, body.remaining(), body.position(), context)
    })?;
    body.ensure(total, context)?;

    let mut items = Vec::new();
    items
        .try_reserve_exact(count)
        .map_err(|_| DecodeError::allocation_failure(count.saturating_mul(std::mem::size_of::<T>()), context))?;
    for _ in 0..count {
        items.push(read_item(body)?);
    }
    Ok(items)
}

/// Parse the MQCFH message header and advance past StrucLength bytes
pub fn parse_message_header(cursor: &mut Cursor<'_>) -> DecodeResult<PcfHeader> {
    let offset = cursor.position();
    cursor.ensure(MQCFH_STRUC_LENGTH, "message header")?;

    let message_type = cursor.peek_i32_at(0, "message type")?;
    let struct_length = cursor.peek_u32_at(4, "message header length")?;
    let length = struct_length as usize;
    if length < MQCFH_STRUC_LENGTH {
        return Err(DecodeError::invalid_struct_length(
            length,
            MQCFH_STRUC_LENGTH,
            message_type,
            offset,
        ));
    }

    let mut body = cursor.take(length, "message header")?;
    body.advance(8, "message header")?;
    Ok(PcfHeader {
        message_type,
        struct_length,
        version: body.read_i32("header version")?,
        command: body.read_i32("header command")?,
        msg_seq_number: body.read_i32("header sequence number")?,
        control: body.read_i32("header control")?,
        comp_code: body.read_i32("header completion code")?,
        reason: body.read_i32("header reason")?,
        parameter_count: body.read_u32("header parameter count")?,
    })
}
