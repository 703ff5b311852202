//! # Name Resolver
//!
//! ## Purpose
//!
//! Maps a raw integer in a lookup [`Domain`] to a symbolic name, then
//! optionally rewrites it for display. Lookups never fail: a miss yields
//! `Unknown [value]` so every field can be printed.
//!
//! ## Architecture Role
//!
//! ```text
//! tables.rs (static slices) ──► INDEX (Lazy, built once) ──► resolve()
//!                                    │                         │
//!                     Domain ─► ordered table list     Formatted │ Unformatted
//!                     (composite domains: first hit)  "Q Mgr Name" │ "MQCA_Q_MGR_NAME"
//! ```
//!
//! The index is immutable after first use, so concurrent decoders share it
//! without locking.

pub mod tables;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use tables::ConstantTable;

/// A named id-space backed by one or more constant tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Platform,
    ChannelType,
    Operation,
    CompletionCode,
    Reason,
    Command,
    MessageType,
    Control,
    FilterOperator,
    ObjectType,
    Persistence,
    ApplType,
    QueueType,
    MonitorDatatype,
    /// MQIA, MQIACF, MQIACH, MQIAMO in that order
    IntegerParameter,
    /// MQCA, MQCACF, MQCACH, MQCAMO in that order
    StringParameter,
    GroupParameter,
    ByteParameter,
}

impl Domain {
    pub const ALL: [Domain; 18] = [
        Domain::Platform,
        Domain::ChannelType,
        Domain::Operation,
        Domain::CompletionCode,
        Domain::Reason,
        Domain::Command,
        Domain::MessageType,
        Domain::Control,
        Domain::FilterOperator,
        Domain::ObjectType,
        Domain::Persistence,
        Domain::ApplType,
        Domain::QueueType,
        Domain::MonitorDatatype,
        Domain::IntegerParameter,
        Domain::StringParameter,
        Domain::GroupParameter,
        Domain::ByteParameter,
    ];

    /// Tables searched for this domain, in priority order
    pub fn tables(self) -> &'static [&'static ConstantTable] {
        use tables::*;
        match self {
            Domain::Platform => &[&MQPL],
            Domain::ChannelType => &[&MQCHT],
            Domain::Operation => &[&MQXF],
            Domain::CompletionCode => &[&MQCC],
            Domain::Reason => &[&MQRC],
            Domain::Command => &[&MQCMD],
            Domain::MessageType => &[&MQCFT],
            Domain::Control => &[&MQCFC],
            Domain::FilterOperator => &[&MQCFOP],
            Domain::ObjectType => &[&MQOT],
            Domain::Persistence => &[&MQPER],
            Domain::ApplType => &[&MQAT],
            Domain::QueueType => &[&MQQT],
            Domain::MonitorDatatype => &[&MQIAMO_MONITOR],
            Domain::IntegerParameter => &[&MQIA, &MQIACF, &MQIACH, &MQIAMO],
            Domain::StringParameter => &[&MQCA, &MQCACF, &MQCACH, &MQCAMO],
            Domain::GroupParameter => &[&MQGACF],
            Domain::ByteParameter => &[&MQBACF],
        }
    }
}

/// Whether resolved names are rewritten for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// `MQCA_Q_MGR_NAME` becomes `Q Mgr Name`
    #[default]
    Formatted,
    /// Raw symbolic names
    Unformatted,
}

type TableIndex = HashMap<i64, &'static str>;

static INDEX: Lazy<HashMap<Domain, Vec<TableIndex>>> = Lazy::new(|| {
    Domain::ALL
        .iter()
        .map(|&domain| {
            let indexes = domain
                .tables()
                .iter()
                .map(|table| {
                    let mut index = TableIndex::with_capacity(table.entries.len());
                    for &(value, name) in table.entries {
                        // Aliases share a value; the preferred spelling is listed first
                        index.entry(value).or_insert(name);
                    }
                    index
                })
                .collect();
            (domain, indexes)
        })
        .collect()
});

/// Raw symbolic name for `value`, first matching table wins
pub fn lookup_name(value: i64, domain: Domain) -> Option<&'static str> {
    INDEX
        .get(&domain)?
        .iter()
        .find_map(|index| index.get(&value).copied())
}

/// Symbolic name for `value`, or `Unknown [value]` when no table has it
pub fn resolve(value: i64, domain: Domain, style: NameStyle) -> String {
    match lookup_name(value, domain) {
        Some(name) => match style {
            NameStyle::Formatted => format_constant(name),
            NameStyle::Unformatted => name.to_string(),
        },
        None => unknown(value),
    }
}

pub fn unknown(value: i64) -> String {
    format!("Unknown [{}]", value)
}

/// Words kept fully upper case after mixed-casing.
///
/// Matched against whole words only, so `IDENTIFIER` stays `Identifier`.
const ACRONYMS: &[&str] = &[
    "ACL", "AMQP", "CCSID", "CF", "CICS", "CLWL", "CRL", "DB2", "DLQ", "DNS", "ID", "IGQ", "IMS",
    "IP", "LDAP", "LU62", "MCA", "MQI", "MQMD", "MQSC", "MQTT", "MVS", "NSK", "NT", "OCSP", "OS2",
    "OS400", "PID", "QSG", "SPX", "SSL", "TCP", "TID", "TLS", "TPF", "URL", "VMS", "XA", "XCF",
    "XR",
];

/// Whole-word replacements applied last
const SPECIAL_CASES: &[(&str, &str)] = &[("Zos", "z/OS"), ("Hobj", "HObj"), ("Hconn", "HConn")];

/// Rewrite a symbolic constant name for display.
///
/// Drops the table prefix (everything up to the first underscore), splits
/// the rest into words, mixed-cases each word and restores acronyms.
pub fn format_constant(name: &str) -> String {
    let body = match name.split_once('_') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => name,
    };

    body.split('_')
        .filter(|word| !word.is_empty())
        .map(format_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(word: &str) -> String {
    let upper = word.to_ascii_uppercase();
    if ACRONYMS.contains(&upper.as_str()) {
        return upper;
    }

    let mut chars = word.chars();
    let mixed = match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    };

    SPECIAL_CASES
        .iter()
        .find(|(from, _)| *from == mixed)
        .map_or(mixed, |(_, to)| (*to).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_constant_rules() {
        assert_eq!(format_constant("MQCA_Q_MGR_NAME"), "Q Mgr Name");
        assert_eq!(format_constant("MQPL_ZOS"), "z/OS");
        assert_eq!(format_constant("MQIACF_HOBJ"), "HObj");
        assert_eq!(format_constant("MQCHT_CLNTCONN"), "Clntconn");
        assert_eq!(format_constant("MQAT_CICS_BRIDGE"), "CICS Bridge");
        assert_eq!(format_constant("MQBACF_CF_LEID"), "CF Leid");
        assert_eq!(format_constant("MQRC_COMMAND_MQSC"), "Command MQSC");
        assert_eq!(format_constant("MQIACF_THREAD_ID"), "Thread ID");
        assert_eq!(format_constant("MQXF_PUT1"), "Put1");
    }

    #[test]
    fn test_acronyms_anywhere_in_name() {
        assert_eq!(
            format_constant("MQRC_CHANNEL_SSL_ERROR"),
            "Channel SSL Error"
        );
        assert_eq!(format_constant("MQCACH_SSL_PEER_NAME"), "SSL Peer Name");
        assert_eq!(
            format_constant("MQBACF_XQH_CORREL_ID"),
            "Xqh Correl ID"
        );
    }

    #[test]
    fn test_name_without_prefix_separator() {
        assert_eq!(format_constant("PLAIN"), "Plain");
        assert_eq!(format_constant("TRAILING_"), "Trailing");
    }

    #[test]
    fn test_first_alias_wins() {
        assert_eq!(lookup_name(1, Domain::Platform), Some("MQPL_ZOS"));
        assert_eq!(lookup_name(3, Domain::Platform), Some("MQPL_UNIX"));
        assert_eq!(lookup_name(2, Domain::ApplType), Some("MQAT_ZOS"));
    }

    #[test]
    fn test_negative_values_are_ordinary_entries() {
        assert_eq!(
            resolve(-1, Domain::CompletionCode, NameStyle::Unformatted),
            "MQCC_UNKNOWN"
        );
        assert_eq!(resolve(-1, Domain::CompletionCode, NameStyle::Formatted), "Unknown");
    }

    #[test]
    fn test_composite_domain_order() {
        assert_eq!(lookup_name(2015, Domain::StringParameter), Some("MQCA_Q_MGR_NAME"));
        assert_eq!(lookup_name(3501, Domain::StringParameter), Some("MQCACH_CHANNEL_NAME"));
        assert_eq!(lookup_name(2701, Domain::StringParameter), Some("MQCAMO_CLOSE_DATE"));
        assert_eq!(lookup_name(1025, Domain::IntegerParameter), Some("MQIACF_THREAD_ID"));
        assert_eq!(lookup_name(745, Domain::IntegerParameter), Some("MQIAMO64_BROWSE_BYTES"));
    }

    #[test]
    fn test_miss_contains_value() {
        assert_eq!(resolve(42, Domain::Platform, NameStyle::Formatted), "Unknown [42]");
        assert_eq!(
            resolve(i64::MIN, Domain::Reason, NameStyle::Unformatted),
            format!("Unknown [{}]", i64::MIN)
        );
    }

    #[test]
    fn test_every_domain_has_entries() {
        for domain in Domain::ALL {
            let tables = domain.tables();
            assert!(!tables.is_empty(), "{:?}", domain);
            for table in tables {
                assert!(!table.entries.is_empty(), "{}", table.prefix);
            }
            // First table has priority for its own first entry
            let (value, name) = tables[0].entries[0];
            assert_eq!(lookup_name(value, domain), Some(name), "{:?}", domain);
        }
    }

    #[test]
    fn test_acronyms_match_whole_words_each_time() {
        assert_eq!(format_constant("MQXX_TCP_ID_TCP"), "TCP ID TCP");
        assert_eq!(format_constant("MQCACF_USER_IDENTIFIER"), "User Identifier");
        assert_eq!(format_constant("MQAT_CICS_BRIDGE"), "CICS Bridge");
    }
}
