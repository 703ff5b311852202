//! End-to-end rendering scenarios over built PCF buffers
//!
//! Every test builds its buffer with `PcfBuilder`, runs the public decode
//! entry points and checks both the rendered text and the cursor accounting.

use pcf_codec::fields::params::*;
use pcf_codec::{
    decode, decode_message, terse_heading, Anomaly, ByteStyle, Cursor, DecodeError, PcfBuilder,
    RenderMode, RenderOptions, RenderState,
};
use pcf_types::{Encoding, MessageType, PcfHeader};

fn render(
    bytes: &[u8],
    encoding: Encoding,
    count: u32,
    options: &RenderOptions,
) -> (Result<pcf_codec::DecodeSummary, DecodeError>, String, usize) {
    let mut out = Vec::new();
    let mut state = RenderState::new();
    let mut cursor = Cursor::new(bytes, encoding);
    let result = decode(&mut cursor, count, 0, options, &mut state, &mut out);
    (result, String::from_utf8(out).unwrap(), cursor.position())
}

#[test]
fn test_cursor_accounting_matches_buffer() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .integer(MQIACF_OPERATION_ID, 1)
        .integer64(MQIAMO64_PUT_BYTES, 1 << 40)
        .string(MQCA_Q_MGR_NAME, "QM1")
        .integer_list(424242, &[1, 2, 3])
        .byte_string(MQBACF_MSG_ID, &[1, 2, 3, 4, 5])
        .string_list(MQCA_Q_NAME, &["A", "B"], 48)
        .build()
        .unwrap();

    let (result, _, position) = render(&bytes, Encoding::Little, 6, &RenderOptions::default());
    let summary = result.unwrap();
    assert_eq!(summary.elements, 6);
    assert_eq!(summary.bytes_consumed, bytes.len());
    assert_eq!(position, bytes.len());
}

#[test]
fn test_group_nesting_indentation() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .nested(MQGACF_ACTIVITY_TRACE, |g| {
            g.integer(MQIACF_THREAD_ID, 7)
                .string(MQCACF_OBJECT_NAME, "APP.QUEUE")
                .nested(MQGACF_MQMD, |m| m.integer(MQIACF_HOBJ, 3))
        })
        .integer(MQIACF_COMP_CODE, 0)
        .build()
        .unwrap();

    let (result, text, position) =
        render(&bytes, Encoding::Little, 2, &RenderOptions::default());
    let summary = result.unwrap();
    assert_eq!(summary.elements, 6);
    assert_eq!(position, bytes.len());

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    let indents: Vec<usize> = lines
        .iter()
        .map(|line| line.len() - line.trim_start().len())
        .collect();
    assert_eq!(indents, vec![0, 2, 2, 2, 4, 0]);

    // Colon column is the same at every depth
    for line in &lines {
        assert_eq!(line.find(": "), Some(32), "{:?}", line);
    }
    assert!(lines[1].trim_end().ends_with(": 7"));
    assert!(lines[2].ends_with(": 'APP.QUEUE'"));
    assert!(lines[5].trim_end().ends_with(": Ok"));
}

#[test]
fn test_group_sequence_counter_runs_across_groups() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .nested(MQGACF_ACTIVITY_TRACE, |g| g.integer(1, 1))
        .nested(MQGACF_ACTIVITY_TRACE, |g| g.integer(1, 1))
        .build()
        .unwrap();
    let (_, text, _) = render(&bytes, Encoding::Little, 2, &RenderOptions::default());
    let groups: Vec<&str> = text.lines().filter(|l| !l.starts_with(' ')).collect();
    assert!(groups[0].ends_with(": 1"));
    assert!(groups[1].ends_with(": 2"));
}

#[test]
fn test_header_truncated_mid_read() {
    let bytes = [3u8, 0, 0, 0, 16, 0, 0, 0];
    let (result, text, position) =
        render(&bytes, Encoding::Little, 1, &RenderOptions::default());
    match result {
        Err(DecodeError::MalformedBuffer {
            need, remaining, ..
        }) => {
            assert_eq!(need, 12);
            assert_eq!(remaining, 8);
        }
        other => panic!("expected MalformedBuffer, got {:?}", other),
    }
    assert!(text.is_empty());
    assert_eq!(position, 0);
}

#[test]
fn test_declared_count_exceeds_elements() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .integer(1, 1)
        .build()
        .unwrap();
    let (result, text, _) = render(&bytes, Encoding::Little, 2, &RenderOptions::default());
    assert!(result.unwrap_err().is_malformed());
    // The first element was rendered before the buffer ran out
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_fixed_width_string_trimmed() {
    let bytes = PcfBuilder::new(Encoding::Big)
        .string(MQCA_Q_MGR_NAME, "QM1       ")
        .build()
        .unwrap();
    let (result, text, _) = render(&bytes, Encoding::Big, 1, &RenderOptions::default());
    result.unwrap();
    assert_eq!(text.trim_end(), format!("{:<32}: 'QM1'", "Queue Manager"));
}

#[test]
fn test_blank_string_renders_empty_quotes() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .string(MQCA_Q_MGR_NAME, "        ")
        .build()
        .unwrap();
    let (_, text, _) = render(&bytes, Encoding::Little, 1, &RenderOptions::default());
    assert!(text.trim_end().ends_with(": ''"));
}

#[test]
fn test_byte_string_compact_and_dump() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .byte_string(MQBACF_MSG_ID, &[0x41, 0x00, 0x5A])
        .build()
        .unwrap();

    let (_, compact, _) = render(&bytes, Encoding::Little, 1, &RenderOptions::default());
    assert!(compact.trim_end().ends_with(": 41005A"));

    let options = RenderOptions::default().with_byte_style(ByteStyle::Dump);
    let (result, dump, position) = render(&bytes, Encoding::Little, 1, &options);
    result.unwrap();
    assert_eq!(position, bytes.len());
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(':'));
    assert!(lines[1].trim_start().starts_with("00000000  41 00 5A"));
    assert!(lines[1].ends_with("|A.Z|"));
}

#[test]
fn test_integer_list_rendering() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .integer_list(424242, &[1, 2, 3])
        .build()
        .unwrap();
    let (_, text, _) = render(&bytes, Encoding::Little, 1, &RenderOptions::default());
    assert_eq!(text.trim_end(), format!("{:<32}: [1, 2, 3]", "424242"));
}

#[test]
fn test_unknown_type_tag_continues() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .unknown(99, 5, &[1, 2, 3, 4, 5, 6])
        .integer(MQIACF_THREAD_ID, 12)
        .build()
        .unwrap();
    let (result, text, position) =
        render(&bytes, Encoding::Little, 2, &RenderOptions::default());
    let summary = result.unwrap();
    assert_eq!(position, bytes.len());
    assert_eq!(summary.elements, 2);
    assert_eq!(
        summary.warnings,
        vec![Anomaly::UnknownElementType {
            element_type: 99,
            parameter: 5,
            offset: 0,
            struct_length: 20,
        }]
    );

    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("Warning"));
    assert!(lines[0].contains("unknown element type 99"));
    assert!(lines[1].starts_with("Thread ID"));
}

#[test]
fn test_unknown_type_tag_reported_in_terse_mode() {
    let bytes = PcfBuilder::new(Encoding::Little)
        .unknown(99, 5, &[1, 2, 3, 4])
        .nested(MQGACF_ACTIVITY_TRACE, |g| g.integer(MQIACF_OPERATION_ID, 9))
        .build()
        .unwrap();
    let options = RenderOptions::default().with_mode(RenderMode::Terse);
    let (result, text, position) = render(&bytes, Encoding::Little, 2, &options);
    let summary = result.unwrap();
    assert_eq!(position, bytes.len());
    assert_eq!(summary.warnings.len(), 1);
    assert!(matches!(
        summary.warnings[0],
        Anomaly::UnknownElementType {
            element_type: 99,
            parameter: 5,
            ..
        }
    ));

    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("Warning"));
    assert!(lines[0].contains("unknown element type 99"));
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], terse_heading());
    assert!(lines[2].contains("Put"));
}

#[test]
fn test_big_endian_message() {
    let bytes = PcfBuilder::new(Encoding::Big)
        .string(MQCA_Q_MGR_NAME, "QM2")
        .nested(MQGACF_ACTIVITY_TRACE, |g| g.integer(MQIACF_OPERATION_ID, 8))
        .build_message(PcfHeader::new(MessageType::AppActivity, 209))
        .unwrap();

    let mut out = Vec::new();
    let decoded = decode_message(
        &bytes,
        Encoding::Big,
        &RenderOptions::default(),
        &mut RenderState::new(),
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(decoded.header.parameter_count, 2);
    assert_eq!(decoded.summary.elements, 3);
    assert_eq!(decoded.summary.bytes_consumed, bytes.len());
    assert!(text.contains(": 'QM2'"));
    assert!(text.contains(": Put1"));
}

#[test]
fn test_wrong_byte_order_fails_cleanly() {
    let bytes = PcfBuilder::new(Encoding::Big)
        .string(MQCA_Q_MGR_NAME, "QM2")
        .build_message(PcfHeader::new(MessageType::AppActivity, 209))
        .unwrap();
    let mut out = Vec::new();
    let result = decode_message(
        &bytes,
        Encoding::Little,
        &RenderOptions::default(),
        &mut RenderState::new(),
        &mut out,
    );
    assert!(result.unwrap_err().is_malformed());
}

#[test]
fn test_decoders_share_no_state() {
    let good = PcfBuilder::new(Encoding::Little)
        .string(MQCA_Q_MGR_NAME, "QM1")
        .build()
        .unwrap();
    let bad = &good[..10];

    let options = RenderOptions::default();
    let (first, _, _) = render(bad, Encoding::Little, 1, &options);
    assert!(first.is_err());
    let (second, text, _) = render(&good, Encoding::Little, 1, &options);
    second.unwrap();
    assert!(text.contains("'QM1'"));
}
