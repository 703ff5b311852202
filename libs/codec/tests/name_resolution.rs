//! Name resolver and field-table behaviour through the public API

use pcf_codec::fields::params::*;
use pcf_codec::{
    decode, format_constant, lookup_name, resolve, Application, Cursor, Domain, FieldKind,
    NameStyle, PcfBuilder, RenderOptions, RenderState,
};
use pcf_types::Encoding;
use proptest::prelude::*;

#[test]
fn test_composite_domain_chains_tables() {
    // One id-space split across MQIA / MQIACF / MQIACH / MQIAMO
    assert_eq!(
        lookup_name(MQIACF_THREAD_ID.into(), Domain::IntegerParameter),
        Some("MQIACF_THREAD_ID")
    );
    assert_eq!(
        lookup_name(MQIAMO64_PUT_BYTES.into(), Domain::IntegerParameter),
        Some("MQIAMO64_PUT_BYTES")
    );
    assert_eq!(
        lookup_name(MQCACF_OBJECT_NAME.into(), Domain::StringParameter),
        Some("MQCACF_OBJECT_NAME")
    );
    assert_eq!(
        resolve(MQCA_Q_MGR_NAME.into(), Domain::StringParameter, NameStyle::Formatted),
        "Q Mgr Name"
    );
}

#[test]
fn test_platform_special_spelling() {
    assert_eq!(resolve(1, Domain::Platform, NameStyle::Formatted), "z/OS");
    assert_eq!(resolve(1, Domain::Platform, NameStyle::Unformatted), "MQPL_ZOS");
}

#[test]
fn test_unknown_value_sentinel() {
    let text = resolve(42, Domain::Operation, NameStyle::Formatted);
    assert!(text.starts_with("Unknown"));
    assert!(text.contains("42"));
}

#[test]
fn test_format_constant_keeps_acronyms() {
    assert_eq!(format_constant("MQIACF_THREAD_ID"), "Thread ID");
    assert_eq!(format_constant("MQCACH_SSL_CIPHER_SPEC"), "SSL Cipher Spec");
}

#[test]
fn test_field_labels_fall_back_to_raw_id() {
    let table = Application::ActivityTrace.fields();
    assert_eq!(
        table.label(FieldKind::Integer, 987654, NameStyle::Formatted),
        "987654"
    );
    assert_eq!(
        table.label(FieldKind::Integer, MQIACF_THREAD_ID, NameStyle::Unformatted),
        "MQIACF_THREAD_ID"
    );
}

#[test]
fn test_event_fields_use_parameter_names() {
    // Events render unlisted parameters by their formatted constant name
    let table = Application::Events.fields();
    let label = table.label(FieldKind::Integer, MQIACF_THREAD_ID, NameStyle::Formatted);
    assert!(!label.chars().all(|c| c.is_ascii_digit()), "{}", label);
}

#[test]
fn test_same_id_distinct_per_kind() {
    let table = Application::ActivityTrace.fields();
    let as_group = table.label(FieldKind::Group, MQGACF_ACTIVITY_TRACE, NameStyle::Formatted);
    let as_integer = table.label(FieldKind::Integer, MQGACF_ACTIVITY_TRACE, NameStyle::Formatted);
    assert_eq!(as_group, "MQI Operation");
    assert_eq!(as_integer, MQGACF_ACTIVITY_TRACE.to_string());
}

fn single_element(kind: usize, parameter: i32, value: i32) -> PcfBuilder {
    let builder = PcfBuilder::new(Encoding::Little);
    match kind {
        0 => builder.integer(parameter, value),
        1 => builder.integer64(parameter, value.into()),
        2 => builder.string(parameter, "VALUE"),
        3 => builder.integer_list(parameter, &[value, value]),
        4 => builder.integer64_list(parameter, &[value.into()]),
        5 => builder.string_list(parameter, &["A", "B"], 8),
        6 => builder.byte_string(parameter, &value.to_le_bytes()),
        7 => builder.group(parameter, 0),
        8 => builder.integer_filter(parameter, 1, value),
        9 => builder.string_filter(parameter, 1, "X*"),
        _ => builder.byte_string_filter(parameter, 1, &[0xAB]),
    }
}

proptest! {
    #[test]
    fn prop_resolve_is_idempotent(value in any::<i32>(), domain in 0usize..Domain::ALL.len()) {
        let domain = Domain::ALL[domain];
        let first = resolve(value.into(), domain, NameStyle::Formatted);
        let second = resolve(value.into(), domain, NameStyle::Formatted);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.is_empty());
    }

    #[test]
    fn prop_unknown_values_echo_input(value in 1_000_000i64..i64::MAX) {
        let text = resolve(value, Domain::Reason, NameStyle::Formatted);
        prop_assert!(text.contains(&value.to_string()));
    }

    #[test]
    fn prop_every_kind_renders_a_line(
        kind in 0usize..11,
        parameter in any::<i32>(),
        value in any::<i32>(),
        app in 0usize..4,
    ) {
        let application = [
            Application::ActivityTrace,
            Application::Accounting,
            Application::Events,
            Application::ResourceUsage,
        ][app];
        let bytes = single_element(kind, parameter, value).build().unwrap();
        let options = RenderOptions::default().with_application(application);

        let mut out = Vec::new();
        let mut cursor = Cursor::new(&bytes, Encoding::Little);
        let summary = decode(&mut cursor, 1, 0, &options, &mut RenderState::new(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        prop_assert_eq!(summary.bytes_consumed, bytes.len());
        prop_assert_eq!(text.lines().count(), 1);
        let line = text.lines().next().unwrap();
        prop_assert!(line.contains(": "));
        prop_assert!(line.split(": ").next().map_or(false, |label| !label.trim().is_empty()));
    }
}
