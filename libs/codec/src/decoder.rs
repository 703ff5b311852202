//! # PCF Element Decoder
//!
//! ## Purpose
//!
//! Recursive-descent renderer over a PCF element stream. Each element is
//! read through the bounds-checked parser, labelled from the active
//! application's field tables, value-substituted through the name resolver
//! and written as one or more aligned text lines.
//!
//! ## Flow
//!
//! ```text
//! decode_message(bytes)
//!   └─ parse_message_header ─► header lines (verbose)
//!   └─ decode(cursor, ParameterCount, indent 0)
//!        ├─ scalar / list / string ─► "label: value"
//!        ├─ byte string ─► compact hex or dump rows
//!        ├─ filter ─► "Filter: WHERE 'field' op 'value'"
//!        ├─ group ─► object filter? skip() : verbose? recurse(indent + 1) : terse_line()
//!        └─ unknown tag ─► warning line + Anomaly, continue
//! ```
//!
//! ## Failure Model
//!
//! Malformed input aborts the current call with a [`DecodeError`]; the host
//! stops interpreting that message and nothing else is affected. Unknown
//! element types are recoverable and land in [`DecodeSummary::warnings`].

use std::fmt;
use std::io::Write;

use pcf_types::{Element, ElementValue, Encoding, PcfHeader};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cursor::Cursor;
use crate::error::{DecodeError, DecodeResult};
use crate::fields::{Application, FieldKind, FieldTable};
use crate::format;
use crate::names::{self, Domain};
use crate::options::{ByteStyle, RenderOptions, RenderState};
use crate::parser::{parse_message_header, read_element};
use crate::skip::{group_matches, skip_with_limit, terse_line};

/// Recoverable event met while decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "anomaly", rename_all = "snake_case")]
pub enum Anomaly {
    /// Type tag outside the known set; the element was stepped over
    UnknownElementType {
        element_type: i32,
        parameter: i32,
        offset: usize,
        struct_length: usize,
    },
    /// Bytes left after the header's ParameterCount elements
    TrailingBytes { count: usize, offset: usize },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnknownElementType {
                element_type,
                parameter,
                offset,
                struct_length,
            } => write!(
                f,
                "unknown element type {} for parameter {} at offset {} ({} bytes skipped)",
                element_type, parameter, offset, struct_length
            ),
            Anomaly::TrailingBytes { count, offset } => write!(
                f,
                "{} trailing bytes after last element at offset {}",
                count, offset
            ),
        }
    }
}

/// Outcome of a completed decode call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeSummary {
    /// Elements consumed, descendants and skipped subtrees included
    pub elements: usize,
    pub bytes_consumed: usize,
    pub warnings: Vec<Anomaly>,
}

/// Header plus summary from [`decode_message`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedMessage {
    pub header: PcfHeader,
    pub application: Application,
    pub summary: DecodeSummary,
}

struct Renderer<'o, 's, 'w, W: Write> {
    options: &'o RenderOptions,
    state: &'s mut RenderState,
    out: &'w mut W,
    fields: &'static FieldTable,
    summary: DecodeSummary,
}

impl<W: Write> Renderer<'_, '_, '_, W> {
    fn emit(&mut self, line: String) -> DecodeResult<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn line(&mut self, indent: usize, label: &str, value: &str) -> DecodeResult<()> {
        let line = self.options.layout.line(indent, label, value);
        self.emit(line)
    }

    fn label(&self, kind: FieldKind, parameter: i32) -> String {
        self.fields.label(kind, parameter, self.options.name_style)
    }

    fn integer_value(&self, kind: FieldKind, parameter: i32, value: i64) -> String {
        match self.fields.domain(kind, parameter) {
            Some(domain) => names::resolve(value, domain, self.options.name_style),
            None => value.to_string(),
        }
    }

    fn elements(
        &mut self,
        cursor: &mut Cursor<'_>,
        element_count: u32,
        indent: usize,
        depth: usize,
    ) -> DecodeResult<()> {
        for _ in 0..element_count {
            let element = read_element(cursor)?;
            self.summary.elements += 1;
            self.element(cursor, &element, indent, depth)?;
        }
        Ok(())
    }

    fn element(
        &mut self,
        cursor: &mut Cursor<'_>,
        element: &Element,
        indent: usize,
        depth: usize,
    ) -> DecodeResult<()> {
        let parameter = element.parameter();

        if let ElementValue::Group { parameter_count } = element.value {
            return self.group(cursor, element, parameter_count, indent, depth);
        }
        // Reported in every mode
        if let ElementValue::Unknown { element_type } = element.value {
            return self.unknown(indent, element, element_type);
        }
        if !self.options.is_verbose() {
            return Ok(());
        }

        match &element.value {
            ElementValue::Integer(value) => {
                let text = self.integer_value(FieldKind::Integer, parameter, (*value).into());
                let label = self.label(FieldKind::Integer, parameter);
                self.line(indent, &label, &text)
            }
            ElementValue::Integer64(value) => {
                let text = self.integer_value(FieldKind::Integer64, parameter, *value);
                let label = self.label(FieldKind::Integer64, parameter);
                self.line(indent, &label, &text)
            }
            ElementValue::String { value, .. } => {
                let label = self.label(FieldKind::String, parameter);
                self.line(indent, &label, &format::quoted(value))
            }
            ElementValue::IntegerList(values) => {
                let items = values
                    .iter()
                    .map(|v| self.integer_value(FieldKind::Integer, parameter, (*v).into()));
                let text = format::list(items);
                let label = self.label(FieldKind::Integer, parameter);
                self.line(indent, &label, &text)
            }
            ElementValue::Integer64List(values) => {
                let items = values
                    .iter()
                    .map(|v| self.integer_value(FieldKind::Integer64, parameter, *v));
                let text = format::list(items);
                let label = self.label(FieldKind::Integer64, parameter);
                self.line(indent, &label, &text)
            }
            ElementValue::StringList { values, .. } => {
                let text = format::list(values.iter().map(|v| format::quoted(v)));
                let label = self.label(FieldKind::String, parameter);
                self.line(indent, &label, &text)
            }
            ElementValue::ByteString(bytes) => {
                let label = self.label(FieldKind::ByteString, parameter);
                self.byte_string(indent, &label, bytes)
            }
            ElementValue::IntegerFilter { operator, value } => {
                let value = self.integer_value(FieldKind::Integer, parameter, (*value).into());
                self.filter(indent, FieldKind::Integer, parameter, *operator, &value)
            }
            ElementValue::StringFilter {
                operator, value, ..
            } => {
                let value = format::text(value);
                self.filter(indent, FieldKind::String, parameter, *operator, &value)
            }
            ElementValue::ByteStringFilter { operator, value } => {
                let value = format::hex_compact(value);
                self.filter(indent, FieldKind::ByteString, parameter, *operator, &value)
            }
            ElementValue::Group { .. } | ElementValue::Unknown { .. } => Ok(()),
        }
    }

    fn byte_string(&mut self, indent: usize, label: &str, bytes: &[u8]) -> DecodeResult<()> {
        match self.options.byte_style {
            ByteStyle::Compact => self.line(indent, label, &format::hex_compact(bytes)),
            ByteStyle::Dump => {
                let heading = self.options.layout.heading(indent, label);
                self.emit(heading)?;
                let prefix = self.options.layout.indent(indent + 1);
                for row in format::hex_dump(bytes) {
                    self.emit(format!("{}{}", prefix, row))?;
                }
                Ok(())
            }
        }
    }

    fn filter(
        &mut self,
        indent: usize,
        kind: FieldKind,
        parameter: i32,
        operator: i32,
        value: &str,
    ) -> DecodeResult<()> {
        let field = self.label(kind, parameter);
        let op = names::resolve(
            operator.into(),
            Domain::FilterOperator,
            self.options.name_style,
        );
        let text = format!("WHERE '{}' {} '{}'", field, op, value);
        self.line(indent, "Filter", &text)
    }

    fn unknown(&mut self, indent: usize, element: &Element, element_type: i32) -> DecodeResult<()> {
        let anomaly = Anomaly::UnknownElementType {
            element_type,
            parameter: element.parameter(),
            offset: element.offset,
            struct_length: element.struct_length(),
        };
        warn!(
            element_type,
            parameter = element.parameter(),
            offset = element.offset,
            "unknown PCF element type, skipping"
        );
        self.line(indent, "Warning", &anomaly.to_string())?;
        self.summary.warnings.push(anomaly);
        Ok(())
    }

    fn group(
        &mut self,
        cursor: &mut Cursor<'_>,
        element: &Element,
        parameter_count: u32,
        indent: usize,
        depth: usize,
    ) -> DecodeResult<()> {
        if depth >= self.options.max_depth {
            return Err(DecodeError::nesting_too_deep(
                self.options.max_depth,
                element.offset,
            ));
        }

        if let Some(filter) = &self.options.object_filter {
            let limit = self.options.max_depth - depth - 1;
            if !group_matches(cursor, parameter_count, filter, limit)? {
                let skipped = skip_with_limit(cursor, parameter_count, limit)?;
                debug!(
                    parameter = element.parameter(),
                    offset = element.offset,
                    skipped,
                    "group bypassed by object filter"
                );
                self.summary.elements += skipped;
                return Ok(());
            }
        }

        if self.options.is_verbose() {
            let sequence = self.state.next_group_sequence();
            let label = self.label(FieldKind::Group, element.parameter());
            debug!(
                parameter = element.parameter(),
                children = parameter_count,
                depth,
                "entering group"
            );
            self.line(indent, &label, &sequence.to_string())?;
            self.elements(cursor, parameter_count, indent + 1, depth + 1)
        } else {
            let consumed = terse_line(
                cursor,
                parameter_count,
                indent,
                self.options,
                &mut *self.state,
                &mut *self.out,
            )?;
            self.summary.elements += consumed;
            Ok(())
        }
    }

    fn message_header(&mut self, header: &PcfHeader) -> DecodeResult<()> {
        let style = self.options.name_style;
        let rows = [
            (
                "Type",
                names::resolve(header.message_type.into(), Domain::MessageType, style),
            ),
            (
                "Command",
                names::resolve(header.command.into(), Domain::Command, style),
            ),
            ("Message Sequence Number", header.msg_seq_number.to_string()),
            (
                "Control",
                names::resolve(header.control.into(), Domain::Control, style),
            ),
            (
                "Completion Code",
                names::resolve(header.comp_code.into(), Domain::CompletionCode, style),
            ),
            (
                "Reason Code",
                names::resolve(header.reason.into(), Domain::Reason, style),
            ),
            ("Parameter Count", header.parameter_count.to_string()),
        ];
        for (label, value) in rows {
            self.line(0, label, &value)?;
        }
        Ok(())
    }
}

/// Decode and render `element_count` sibling elements starting at the cursor.
///
/// On success the cursor sits just past the last element's subtree. The
/// field tables come from `options.application`, defaulting to activity
/// trace when unset.
pub fn decode<W: Write>(
    cursor: &mut Cursor<'_>,
    element_count: u32,
    indent: usize,
    options: &RenderOptions,
    state: &mut RenderState,
    out: &mut W,
) -> DecodeResult<DecodeSummary> {
    let fields = options.application.unwrap_or_default().fields();
    let start = cursor.position();
    let mut renderer = Renderer {
        options,
        state,
        out,
        fields,
        summary: DecodeSummary::default(),
    };
    renderer.elements(cursor, element_count, indent, 0)?;
    renderer.summary.bytes_consumed = cursor.position() - start;
    Ok(renderer.summary)
}

/// Decode a complete message: MQCFH header, then ParameterCount elements.
///
/// The application is taken from `options` or else inferred from the
/// header's message type. Bytes beyond the declared elements are reported
/// as an [`Anomaly::TrailingBytes`] warning.
pub fn decode_message<W: Write>(
    bytes: &[u8],
    encoding: Encoding,
    options: &RenderOptions,
    state: &mut RenderState,
    out: &mut W,
) -> DecodeResult<DecodedMessage> {
    let mut cursor = Cursor::new(bytes, encoding);
    let header = parse_message_header(&mut cursor)?;
    let application = options
        .application
        .unwrap_or_else(|| Application::for_header(&header));

    debug!(
        message_type = header.message_type,
        command = header.command,
        parameters = header.parameter_count,
        application = application.fields().name,
        "decoding PCF message"
    );

    let mut renderer = Renderer {
        options,
        state,
        out,
        fields: application.fields(),
        summary: DecodeSummary::default(),
    };
    if options.is_verbose() {
        renderer.message_header(&header)?;
    }
    renderer.elements(&mut cursor, header.parameter_count, 0, 0)?;

    if !cursor.is_empty() {
        let anomaly = Anomaly::TrailingBytes {
            count: cursor.remaining(),
            offset: cursor.position(),
        };
        warn!(%anomaly, "message longer than its declared parameters");
        if options.is_verbose() {
            renderer.line(0, "Warning", &anomaly.to_string())?;
        }
        renderer.summary.warnings.push(anomaly);
    }

    let mut summary = renderer.summary;
    summary.bytes_consumed = cursor.position();
    Ok(DecodedMessage {
        header,
        application,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PcfBuilder;
    use crate::fields::params::*;
    use crate::options::{NameStyle, RenderMode};
    use pcf_types::MessageType;

    fn render(bytes: &[u8], count: u32, options: &RenderOptions) -> (String, DecodeSummary) {
        let mut out = Vec::new();
        let mut state = RenderState::new();
        let mut cursor = Cursor::new(bytes, Encoding::Little);
        let summary = decode(&mut cursor, count, 0, options, &mut state, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_integer_with_domain() {
        let bytes = PcfBuilder::new(Encoding::Little)
            .integer(MQIACF_OPERATION_ID, 8)
            .build()
            .unwrap();
        let (text, summary) = render(&bytes, 1, &RenderOptions::default());
        assert_eq!(text.trim_end(), format!("{:<32}: Put1", "Operation"));
        assert_eq!(summary.elements, 1);
        assert_eq!(summary.bytes_consumed, bytes.len());
    }

    #[test]
    fn test_unformatted_names() {
        let bytes = PcfBuilder::new(Encoding::Little)
            .integer(MQIACF_OPERATION_ID, 8)
            .build()
            .unwrap();
        let options = RenderOptions::default().with_name_style(NameStyle::Unformatted);
        let (text, _) = render(&bytes, 1, &options);
        assert!(text.starts_with("MQIACF_OPERATION_ID"));
        assert!(text.trim_end().ends_with(": MQXF_PUT1"));
    }

    #[test]
    fn test_unknown_parameter_prints_raw_id() {
        let bytes = PcfBuilder::new(Encoding::Little)
            .integer(424242, -7)
            .build()
            .unwrap();
        let (text, _) = render(&bytes, 1, &RenderOptions::default());
        assert!(text.starts_with("424242 "));
        assert!(text.trim_end().ends_with(": -7"));
    }

    #[test]
    fn test_filter_line() {
        let bytes = PcfBuilder::new(Encoding::Little)
            .string_filter(MQCA_Q_MGR_NAME, 18, "QM*")
            .build()
            .unwrap();
        let (text, _) = render(&bytes, 1, &RenderOptions::default());
        assert!(text.starts_with("Filter"));
        assert!(text.contains(": WHERE 'Queue Manager' Like 'QM*'"));
    }

    #[test]
    fn test_terse_mode_suppresses_scalars() {
        let bytes = PcfBuilder::new(Encoding::Little)
            .string(MQCA_Q_MGR_NAME, "QM1")
            .nested(MQGACF_ACTIVITY_TRACE, |g| g.integer(MQIACF_OPERATION_ID, 9))
            .build()
            .unwrap();
        let options = RenderOptions::default().with_mode(RenderMode::Terse);
        let (text, summary) = render(&bytes, 2, &options);
        assert!(!text.contains("QM1"));
        assert_eq!(text.lines().count(), 2);
        assert_eq!(summary.elements, 3);
    }

    #[test]
    fn test_decode_message_renders_header() {
        let bytes = PcfBuilder::new(Encoding::Little)
            .string(MQCA_Q_MGR_NAME, "QM1")
            .build_message(PcfHeader::new(MessageType::Event, 44))
            .unwrap();
        let mut out = Vec::new();
        let mut state = RenderState::new();
        let decoded = decode_message(
            &bytes,
            Encoding::Little,
            &RenderOptions::default(),
            &mut state,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(decoded.application, Application::Events);
        assert!(text.lines().next().unwrap().ends_with(": Event"));
        assert!(text.contains(": Q Mgr Event"));
        assert!(text.contains(": 'QM1'"));
        assert!(decoded.summary.warnings.is_empty());
        assert_eq!(decoded.summary.bytes_consumed, bytes.len());
    }

    #[test]
    fn test_trailing_bytes_warning() {
        let bytes = PcfBuilder::new(Encoding::Little)
            .integer(1, 1)
            .raw(&[0, 0, 0, 0])
            .build_message(PcfHeader::new(MessageType::Statistics, 164))
            .unwrap();
        let mut out = Vec::new();
        let decoded = decode_message(
            &bytes,
            Encoding::Little,
            &RenderOptions::default(),
            &mut RenderState::new(),
            &mut out,
        )
        .unwrap();
        assert_eq!(
            decoded.summary.warnings,
            vec![Anomaly::TrailingBytes {
                count: 4,
                offset: 52
            }]
        );
    }
}
