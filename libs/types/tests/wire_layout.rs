//! Wire-level invariants of the PCF structure definitions

use pcf_types::*;

#[test]
fn test_fixed_lengths_match_structure_layouts() {
    // Header (12) plus the fixed fields of each kind
    let expected = [
        (ElementType::Integer, 12 + 4),
        (ElementType::Integer64, 12 + 4 + 8),
        (ElementType::String, 12 + 4 + 4),
        (ElementType::IntegerList, 12 + 4),
        (ElementType::Integer64List, 12 + 4),
        (ElementType::StringList, 12 + 4 + 4 + 4),
        (ElementType::ByteString, 12 + 4),
        (ElementType::Group, 12 + 4),
        (ElementType::IntegerFilter, 12 + 4 + 4),
        (ElementType::StringFilter, 12 + 4 + 4 + 4),
        (ElementType::ByteStringFilter, 12 + 4 + 4),
    ];
    assert_eq!(expected.len(), ElementType::all().len());
    for (kind, length) in expected {
        assert_eq!(kind.fixed_length(), length, "{}", kind.name());
        assert_eq!(kind.fixed_length() % STRUCT_ALIGNMENT, 0);
    }
}

#[test]
fn test_element_and_message_tags_disjoint() {
    for tag in [
        MQCFT_COMMAND,
        MQCFT_RESPONSE,
        MQCFT_EVENT,
        MQCFT_STATISTICS,
        MQCFT_ACCOUNTING,
        MQCFT_APP_ACTIVITY,
    ] {
        assert!(ElementType::from_tag(tag).is_err(), "{}", tag);
        assert!(MessageType::from_tag(tag).is_ok(), "{}", tag);
    }
    for kind in ElementType::all() {
        assert!(MessageType::from_tag((*kind).into()).is_err());
    }
}

#[test]
fn test_encoding_from_descriptor() {
    // MQENC_NATIVE on x86 is 0x222; the integer nibble decides
    assert_eq!(Encoding::from_mqenc(0x222), Encoding::Little);
    assert_eq!(Encoding::from_mqenc(0x111), Encoding::Big);
    assert_eq!(Encoding::from_mqenc(0x311), Encoding::Big);
}

#[test]
fn test_put_then_read_each_order() {
    for encoding in [Encoding::Little, Encoding::Big] {
        let mut buffer = Vec::new();
        encoding.put_i32(&mut buffer, -2);
        encoding.put_u32(&mut buffer, 36);
        encoding.put_i64(&mut buffer, i64::MIN + 7);
        assert_eq!(buffer.len(), 16);
        assert_eq!(encoding.read_i32(&buffer[0..4]), -2);
        assert_eq!(encoding.read_u32(&buffer[4..8]), 36);
        assert_eq!(encoding.read_i64(&buffer[8..16]), i64::MIN + 7);
    }

    let mut little = Vec::new();
    Encoding::Little.put_u32(&mut little, 20);
    assert_eq!(little, [20, 0, 0, 0]);
    let mut big = Vec::new();
    Encoding::Big.put_u32(&mut big, 20);
    assert_eq!(big, [0, 0, 0, 20]);
}

#[test]
fn test_type_error_messages() {
    assert_eq!(
        TypeError::UnknownElementType(77).to_string(),
        "Unknown element type tag 77"
    );
    assert_eq!(
        TypeError::UnknownMessageType(-1).to_string(),
        "Unknown message type tag -1"
    );
}

#[test]
fn test_header_serializes() {
    let header = PcfHeader::new(MessageType::Statistics, 164);
    let json = serde_json::to_value(header).unwrap();
    assert_eq!(json["message_type"], MQCFT_STATISTICS);
    assert_eq!(json["struct_length"], MQCFH_STRUC_LENGTH);
    assert_eq!(json["control"], MQCFC_LAST);
}
