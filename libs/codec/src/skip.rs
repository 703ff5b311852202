//! # Skip and Terse Paths
//!
//! ## Purpose
//!
//! Alternate traversals over the same element stream as the renderer:
//!
//! - [`skip`] walks a subtree with identical bounds checks but renders
//!   nothing, leaving the cursor just past the subtree
//! - [`terse_line`] collapses one operation group into a fixed-column line
//! - [`group_matches`] peeks at a group's children to decide whether an
//!   object-name filter selects it, without moving the caller's cursor
//!
//! Nested groups met while summarising or matching are skipped, never
//! searched: only fields at the group's own level count.

use std::io::Write;

use pcf_types::{ElementType, ElementValue};

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use crate::fields::params::*;
use crate::format::{self, Layout};
use crate::names::{self, Domain, NameStyle};
use crate::options::{NameFilter, RenderOptions, RenderState, DEFAULT_MAX_DEPTH};
use crate::parser::{read_element, take_element};

/// String parameters that name the object a group refers to, in the order
/// they are looked for
pub const OBJECT_NAME_PARAMETERS: [i32; 2] = [MQCACF_OBJECT_NAME, MQCA_Q_NAME];

/// Skip `element_count` elements and every descendant.
///
/// Returns the number of elements passed over, descendants included.
pub fn skip(cursor: &mut Cursor<'_>, element_count: u32) -> DecodeResult<usize> {
    skip_with_limit(cursor, element_count, DEFAULT_MAX_DEPTH)
}

pub fn skip_with_limit(
    cursor: &mut Cursor<'_>,
    element_count: u32,
    max_depth: usize,
) -> DecodeResult<usize> {
    skip_level(cursor, element_count, 0, max_depth)
}

fn skip_level(
    cursor: &mut Cursor<'_>,
    element_count: u32,
    depth: usize,
    max_depth: usize,
) -> DecodeResult<usize> {
    let mut skipped = 0;
    for _ in 0..element_count {
        let offset = cursor.position();
        let (header, mut body) = take_element(cursor)?;
        skipped += 1;

        if header.kind() == Some(ElementType::Group) {
            let children = body.read_u32("group parameter count")?;
            if depth >= max_depth {
                return Err(DecodeError::nesting_too_deep(max_depth, offset));
            }
            skipped += skip_level(cursor, children, depth + 1, max_depth)?;
        }
    }
    Ok(skipped)
}

/// Whether the group whose children start at `cursor` passes `filter`.
///
/// The first object-name field at this level decides. A group without one
/// is selected. `max_depth` bounds the group levels passed over, as in
/// [`skip_with_limit`].
pub fn group_matches(
    cursor: &Cursor<'_>,
    element_count: u32,
    filter: &NameFilter,
    max_depth: usize,
) -> DecodeResult<bool> {
    let mut scan = cursor.clone();
    for _ in 0..element_count {
        let element = read_element(&mut scan)?;
        match &element.value {
            ElementValue::Group { parameter_count } => {
                if max_depth == 0 {
                    return Err(DecodeError::nesting_too_deep(max_depth, element.offset));
                }
                skip_with_limit(&mut scan, *parameter_count, max_depth - 1)?;
            }
            ElementValue::String { value, .. }
                if OBJECT_NAME_PARAMETERS.contains(&element.parameter()) =>
            {
                return Ok(filter.matches(value));
            }
            _ => {}
        }
    }
    Ok(true)
}

/// Fields collected from one operation group
#[derive(Debug, Default)]
struct TerseRecord {
    thread_id: Option<i32>,
    date: Option<String>,
    time: Option<String>,
    operation: Option<i32>,
    comp_code: Option<i32>,
    reason: Option<i32>,
    hobj: Option<i32>,
    object_name: Option<String>,
}

const MISSING: &str = "-";

#[allow(clippy::too_many_arguments)]
fn columns(
    tid: &str,
    date: &str,
    time: &str,
    operation: &str,
    comp_code: &str,
    reason: &str,
    hobj: &str,
    object: &str,
) -> String {
    format!(
        "{:<3} {:<10} {:<8} {:<14} {:<8} {:>4} {:>4} {}",
        tid, date, time, operation, comp_code, reason, hobj, object
    )
    .trim_end()
    .to_string()
}

/// Column heading printed once per output stream
pub fn terse_heading() -> String {
    columns(
        "Tid", "Date", "Time", "Operation", "CompCode", "MQRC", "HObj", "(ObjName)",
    )
}

impl TerseRecord {
    fn absorb(&mut self, parameter: i32, value: &ElementValue) {
        match (value, parameter) {
            (ElementValue::Integer(v), MQIACF_THREAD_ID) => self.thread_id = Some(*v),
            (ElementValue::Integer(v), MQIACF_OPERATION_ID) => self.operation = Some(*v),
            (ElementValue::Integer(v), MQIACF_COMP_CODE) => self.comp_code = Some(*v),
            (ElementValue::Integer(v), MQIACF_REASON_CODE) => self.reason = Some(*v),
            (ElementValue::Integer(v), MQIACF_HOBJ) => self.hobj = Some(*v),
            (ElementValue::String { value, .. }, MQCACF_OPERATION_DATE) => {
                self.date = Some(format::text(value))
            }
            (ElementValue::String { value, .. }, MQCACF_OPERATION_TIME) => {
                self.time = Some(format::text(value))
            }
            (ElementValue::String { value, .. }, p)
                if OBJECT_NAME_PARAMETERS.contains(&p) && self.object_name.is_none() =>
            {
                self.object_name = Some(format::text(value))
            }
            _ => {}
        }
    }

    fn render(&self, style: NameStyle) -> String {
        let tid = self
            .thread_id
            .map_or_else(|| MISSING.to_string(), |t| format!("{:03}", t));
        let operation = self.operation.map_or_else(
            || MISSING.to_string(),
            |op| names::resolve(op.into(), Domain::Operation, style),
        );
        let comp_code = self.comp_code.map_or_else(
            || MISSING.to_string(),
            |cc| names::resolve(cc.into(), Domain::CompletionCode, style),
        );
        let reason = self
            .reason
            .map_or_else(|| MISSING.to_string(), |rc| format!("{:04}", rc));
        let hobj = self
            .hobj
            .map_or_else(|| MISSING.to_string(), |h| h.to_string());
        let object = self
            .object_name
            .as_ref()
            .map_or_else(String::new, |name| format!("({})", name));

        columns(
            &tid,
            self.date.as_deref().unwrap_or(MISSING),
            self.time.as_deref().unwrap_or(MISSING),
            &operation,
            &comp_code,
            &reason,
            &hobj,
            &object,
        )
    }
}

/// Summarise a group's `element_count` children as one line.
///
/// Returns the number of elements consumed, descendants included.
pub fn terse_line<W: Write>(
    cursor: &mut Cursor<'_>,
    element_count: u32,
    indent: usize,
    options: &RenderOptions,
    state: &mut RenderState,
    out: &mut W,
) -> DecodeResult<usize> {
    let mut record = TerseRecord::default();
    let mut consumed = 0;

    for _ in 0..element_count {
        let element = read_element(cursor)?;
        consumed += 1;
        match element.value {
            ElementValue::Group { parameter_count } => {
                consumed += skip_with_limit(cursor, parameter_count, options.max_depth)?;
            }
            ref value => record.absorb(element.parameter(), value),
        }
    }

    let layout: &Layout = &options.layout;
    let prefix = layout.indent(indent);
    if !state.header_emitted {
        writeln!(out, "{}{}", prefix, terse_heading())?;
        state.header_emitted = true;
    }
    writeln!(out, "{}{}", prefix, record.render(options.name_style))?;
    Ok(consumed)
}
