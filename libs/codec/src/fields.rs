//! # Field-Lookup Tables
//!
//! ## Purpose
//!
//! Per-application tables binding a parameter id to a display label and an
//! optional [`Domain`] for value substitution. Tables are partitioned by
//! element kind: the same numeric id may carry different meanings for an
//! integer and a string field, and that ambiguity is preserved rather than
//! resolved here.
//!
//! Lookup is a linear scan; each table holds tens of entries.

use pcf_types::{MessageType, PcfHeader};
use serde::{Deserialize, Serialize};

use crate::names::{self, Domain, NameStyle};

/// Parameter ids referenced by the field tables and the terse renderer
pub mod params {
    pub const MQIA_APPL_TYPE: i32 = 1;
    pub const MQIA_CODED_CHAR_SET_ID: i32 = 2;
    pub const MQIA_CURRENT_Q_DEPTH: i32 = 3;
    pub const MQIA_DEF_PERSISTENCE: i32 = 5;
    pub const MQIA_Q_TYPE: i32 = 20;
    pub const MQIA_COMMAND_LEVEL: i32 = 31;
    pub const MQIA_PLATFORM: i32 = 32;
    pub const MQIA_Q_DEPTH_HIGH_LIMIT: i32 = 40;
    pub const MQIA_Q_DEPTH_LOW_LIMIT: i32 = 41;

    pub const MQIACF_EVENT_APPL_TYPE: i32 = 1010;
    pub const MQIACF_EVENT_ORIGIN: i32 = 1011;
    pub const MQIACF_PARAMETER_ID: i32 = 1012;
    pub const MQIACF_ERROR_IDENTIFIER: i32 = 1013;
    pub const MQIACF_OBJECT_TYPE: i32 = 1016;
    pub const MQIACF_REASON_QUALIFIER: i32 = 1020;
    pub const MQIACF_COMMAND: i32 = 1021;
    pub const MQIACF_OPEN_OPTIONS: i32 = 1022;
    pub const MQIACF_PROCESS_ID: i32 = 1024;
    pub const MQIACF_THREAD_ID: i32 = 1025;
    pub const MQIACF_SEQUENCE_NUMBER: i32 = 1079;
    pub const MQIACF_COMP_CODE: i32 = 1222;
    pub const MQIACF_REASON_CODE: i32 = 1223;
    pub const MQIACF_OPERATION_ID: i32 = 1339;
    pub const MQIACF_HOBJ: i32 = 1340;
    pub const MQIACF_MSG_LENGTH: i32 = 1341;
    pub const MQIACF_BUFFER_LENGTH: i32 = 1342;
    pub const MQIACF_GET_OPTIONS: i32 = 1343;
    pub const MQIACF_PUT_OPTIONS: i32 = 1344;
    pub const MQIACF_CLOSE_OPTIONS: i32 = 1345;
    pub const MQIACF_TRACE_DETAIL: i32 = 1346;
    pub const MQIACF_TRACE_DATA_LENGTH: i32 = 1347;
    pub const MQIACF_CTL_OPERATION: i32 = 1349;
    pub const MQIACF_APPL_FUNCTION_TYPE: i32 = 1351;
    pub const MQIACF_POINTER_SIZE: i32 = 1352;
    pub const MQIACF_PERSISTENCE: i32 = 1353;

    pub const MQIACH_CHANNEL_TYPE: i32 = 1511;
    pub const MQIACH_MSGS: i32 = 1534;
    pub const MQIACH_BYTES_SENT: i32 = 1535;
    pub const MQIACH_BYTES_RCVD: i32 = 1536;

    pub const MQIAMO_BROWSES: i32 = 704;
    pub const MQIAMO_CLOSES: i32 = 708;
    pub const MQIAMO_COMMITS: i32 = 709;
    pub const MQIAMO_CONNS: i32 = 711;
    pub const MQIAMO_DISCS: i32 = 713;
    pub const MQIAMO_GETS: i32 = 721;
    pub const MQIAMO_GETS_FAILED: i32 = 724;
    pub const MQIAMO_INQS: i32 = 726;
    pub const MQIAMO_OBJECT_COUNT: i32 = 731;
    pub const MQIAMO_OPENS: i32 = 732;
    pub const MQIAMO_PUT1S: i32 = 733;
    pub const MQIAMO_PUTS: i32 = 734;
    pub const MQIAMO_PUTS_FAILED: i32 = 754;
    pub const MQIAMO_Q_MAX_DEPTH: i32 = 738;
    pub const MQIAMO_Q_MIN_DEPTH: i32 = 739;
    pub const MQIAMO_MONITOR_CLASS: i32 = 839;
    pub const MQIAMO_MONITOR_TYPE: i32 = 840;
    pub const MQIAMO_MONITOR_ELEMENT: i32 = 841;
    pub const MQIAMO_MONITOR_DATATYPE: i32 = 842;
    pub const MQIAMO_MONITOR_FLAGS: i32 = 843;

    pub const MQIAMO64_BROWSE_BYTES: i32 = 745;
    pub const MQIAMO64_BYTES: i32 = 746;
    pub const MQIAMO64_GET_BYTES: i32 = 747;
    pub const MQIAMO64_PUT_BYTES: i32 = 748;
    pub const MQIAMO64_HIGHRES_TIME: i32 = 838;
    pub const MQIAMO64_QMGR_OP_DURATION: i32 = 844;
    pub const MQIAMO64_MONITOR_INTERVAL: i32 = 845;

    pub const MQCA_BASE_OBJECT_NAME: i32 = 2002;
    pub const MQCA_PROCESS_NAME: i32 = 2012;
    pub const MQCA_Q_MGR_NAME: i32 = 2015;
    pub const MQCA_Q_NAME: i32 = 2016;
    pub const MQCA_TOPIC_STRING: i32 = 2094;

    pub const MQCACF_OBJECT_Q_MGR_NAME: i32 = 3023;
    pub const MQCACF_APPL_NAME: i32 = 3024;
    pub const MQCACF_USER_IDENTIFIER: i32 = 3025;
    pub const MQCACF_EVENT_USER_ID: i32 = 3045;
    pub const MQCACF_EVENT_Q_MGR: i32 = 3047;
    pub const MQCACF_OBJECT_NAME: i32 = 3180;
    pub const MQCACF_RESOLVED_Q_NAME: i32 = 3181;
    pub const MQCACF_RESOLVED_Q_MGR: i32 = 3182;
    pub const MQCACF_OPERATION_DATE: i32 = 3183;
    pub const MQCACF_OPERATION_TIME: i32 = 3184;
    pub const MQCACF_HOST_NAME: i32 = 3185;
    pub const MQCACF_APPL_FUNCTION: i32 = 3186;

    pub const MQCACH_CHANNEL_NAME: i32 = 3501;
    pub const MQCACH_XMIT_Q_NAME: i32 = 3505;
    pub const MQCACH_CONNECTION_NAME: i32 = 3506;

    pub const MQCAMO_CONN_DATE: i32 = 2703;
    pub const MQCAMO_CONN_TIME: i32 = 2704;
    pub const MQCAMO_DISC_DATE: i32 = 2705;
    pub const MQCAMO_DISC_TIME: i32 = 2706;
    pub const MQCAMO_START_DATE: i32 = 2711;
    pub const MQCAMO_START_TIME: i32 = 2712;
    pub const MQCAMO_END_DATE: i32 = 2707;
    pub const MQCAMO_END_TIME: i32 = 2708;
    pub const MQCAMO_MONITOR_CLASS: i32 = 2713;
    pub const MQCAMO_MONITOR_TYPE: i32 = 2714;
    pub const MQCAMO_MONITOR_DESC: i32 = 2715;

    pub const MQGACF_OPERATION: i32 = 8004;
    pub const MQGACF_ACTIVITY: i32 = 8005;
    pub const MQGACF_MQMD: i32 = 8008;
    pub const MQGACF_Q_ACCOUNTING_DATA: i32 = 8010;
    pub const MQGACF_Q_STATISTICS_DATA: i32 = 8011;
    pub const MQGACF_CHL_STATISTICS_DATA: i32 = 8012;
    pub const MQGACF_ACTIVITY_TRACE: i32 = 8013;
    pub const MQGACF_MONITOR_CLASS: i32 = 8015;
    pub const MQGACF_MONITOR_TYPE: i32 = 8016;
    pub const MQGACF_MONITOR_ELEMENT: i32 = 8017;

    pub const MQBACF_CONNECTION_ID: i32 = 7006;
    pub const MQBACF_CORREL_ID: i32 = 7011;
    pub const MQBACF_MSG_ID: i32 = 7013;
    pub const MQBACF_MESSAGE_DATA: i32 = 7020;
    pub const MQBACF_XA_XID: i32 = 7033;
}

use params::*;

/// One row of a field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEntry {
    pub parameter: i32,
    pub label: &'static str,
    pub domain: Option<Domain>,
}

const fn field(parameter: i32, label: &'static str) -> FieldEntry {
    FieldEntry {
        parameter,
        label,
        domain: None,
    }
}

const fn named(parameter: i32, label: &'static str, domain: Domain) -> FieldEntry {
    FieldEntry {
        parameter,
        label,
        domain: Some(domain),
    }
}

/// Element kinds that have their own field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Integer64,
    String,
    ByteString,
    Group,
}

impl FieldKind {
    /// Composite domain used to name parameters of this kind
    pub fn parameter_domain(self) -> Domain {
        match self {
            FieldKind::Integer | FieldKind::Integer64 => Domain::IntegerParameter,
            FieldKind::String => Domain::StringParameter,
            FieldKind::ByteString => Domain::ByteParameter,
            FieldKind::Group => Domain::GroupParameter,
        }
    }
}

/// The field tables of one application
#[derive(Debug)]
pub struct FieldTable {
    pub name: &'static str,
    pub integers: &'static [FieldEntry],
    pub integers64: &'static [FieldEntry],
    pub strings: &'static [FieldEntry],
    pub byte_strings: &'static [FieldEntry],
    pub groups: &'static [FieldEntry],
    /// Name unmatched ids through the parameter-name domains instead of
    /// printing the raw id
    pub parameter_name_fallback: bool,
}

impl FieldTable {
    pub fn entries(&self, kind: FieldKind) -> &'static [FieldEntry] {
        match kind {
            FieldKind::Integer => self.integers,
            FieldKind::Integer64 => self.integers64,
            FieldKind::String => self.strings,
            FieldKind::ByteString => self.byte_strings,
            FieldKind::Group => self.groups,
        }
    }

    pub fn lookup(&self, kind: FieldKind, parameter: i32) -> Option<&'static FieldEntry> {
        self.entries(kind).iter().find(|e| e.parameter == parameter)
    }

    /// Label to print for `parameter`. Never empty.
    pub fn label(&self, kind: FieldKind, parameter: i32, style: NameStyle) -> String {
        let entry = self.lookup(kind, parameter);
        if style == NameStyle::Unformatted {
            if let Some(name) = names::lookup_name(parameter.into(), kind.parameter_domain()) {
                return name.to_string();
            }
        }
        if let Some(entry) = entry {
            return entry.label.to_string();
        }
        if self.parameter_name_fallback {
            if let Some(name) = names::lookup_name(parameter.into(), kind.parameter_domain()) {
                return names::format_constant(name);
            }
        }
        parameter.to_string()
    }

    pub fn domain(&self, kind: FieldKind, parameter: i32) -> Option<Domain> {
        self.lookup(kind, parameter).and_then(|e| e.domain)
    }
}

static ACTIVITY_TRACE: FieldTable = FieldTable {
    name: "activity-trace",
    integers: &[
        named(MQIA_APPL_TYPE, "Application Type", Domain::ApplType),
        named(MQIA_PLATFORM, "Platform", Domain::Platform),
        field(MQIA_CODED_CHAR_SET_ID, "CCSID"),
        field(MQIACF_PROCESS_ID, "Process ID"),
        field(MQIACF_THREAD_ID, "Thread ID"),
        named(MQIACF_OPERATION_ID, "Operation", Domain::Operation),
        named(MQIACF_COMP_CODE, "Completion Code", Domain::CompletionCode),
        named(MQIACF_REASON_CODE, "Reason Code", Domain::Reason),
        field(MQIACF_HOBJ, "Object Handle"),
        named(MQIACF_OBJECT_TYPE, "Object Type", Domain::ObjectType),
        field(MQIACF_OPEN_OPTIONS, "Open Options"),
        field(MQIACF_GET_OPTIONS, "Get Options"),
        field(MQIACF_PUT_OPTIONS, "Put Options"),
        field(MQIACF_CLOSE_OPTIONS, "Close Options"),
        field(MQIACF_MSG_LENGTH, "Message Length"),
        field(MQIACF_BUFFER_LENGTH, "Buffer Length"),
        field(MQIACF_TRACE_DETAIL, "Trace Detail"),
        field(MQIACF_TRACE_DATA_LENGTH, "Trace Data Length"),
        field(MQIACF_CTL_OPERATION, "Callback Operation"),
        field(MQIACF_APPL_FUNCTION_TYPE, "Function Type"),
        field(MQIACF_POINTER_SIZE, "Pointer Size"),
        named(MQIACF_PERSISTENCE, "Persistence", Domain::Persistence),
        named(MQIACF_COMMAND, "Command", Domain::Command),
    ],
    integers64: &[field(MQIAMO64_HIGHRES_TIME, "High Resolution Time")],
    strings: &[
        field(MQCA_Q_MGR_NAME, "Queue Manager"),
        field(MQCACF_HOST_NAME, "Host Name"),
        field(MQCACF_APPL_NAME, "Application Name"),
        field(MQCACF_APPL_FUNCTION, "Application Function"),
        field(MQCACF_USER_IDENTIFIER, "User ID"),
        field(MQCACF_OPERATION_DATE, "Operation Date"),
        field(MQCACF_OPERATION_TIME, "Operation Time"),
        field(MQCACF_OBJECT_NAME, "Object Name"),
        field(MQCACF_OBJECT_Q_MGR_NAME, "Object Queue Manager"),
        field(MQCACF_RESOLVED_Q_NAME, "Resolved Queue"),
        field(MQCACF_RESOLVED_Q_MGR, "Resolved Queue Manager"),
        field(MQCACH_CHANNEL_NAME, "Channel Name"),
        field(MQCACH_CONNECTION_NAME, "Connection Name"),
        field(MQCA_TOPIC_STRING, "Topic String"),
    ],
    byte_strings: &[
        field(MQBACF_CONNECTION_ID, "Connection ID"),
        field(MQBACF_MSG_ID, "Message ID"),
        field(MQBACF_CORREL_ID, "Correlation ID"),
        field(MQBACF_MESSAGE_DATA, "Message Data"),
        field(MQBACF_XA_XID, "XA XID"),
    ],
    groups: &[
        field(MQGACF_ACTIVITY_TRACE, "MQI Operation"),
        field(MQGACF_ACTIVITY, "Activity"),
        field(MQGACF_OPERATION, "Operation"),
        field(MQGACF_MQMD, "Message Descriptor"),
    ],
    parameter_name_fallback: false,
};

static ACCOUNTING: FieldTable = FieldTable {
    name: "accounting",
    integers: &[
        named(MQIA_PLATFORM, "Platform", Domain::Platform),
        named(MQIA_APPL_TYPE, "Application Type", Domain::ApplType),
        field(MQIACF_PROCESS_ID, "Process ID"),
        field(MQIACF_THREAD_ID, "Thread ID"),
        field(MQIACF_SEQUENCE_NUMBER, "Sequence Number"),
        named(MQIA_Q_TYPE, "Queue Type", Domain::QueueType),
        named(MQIA_DEF_PERSISTENCE, "Default Persistence", Domain::Persistence),
        named(MQIACH_CHANNEL_TYPE, "Channel Type", Domain::ChannelType),
        field(MQIACH_MSGS, "Messages"),
        field(MQIAMO_OBJECT_COUNT, "Object Count"),
        field(MQIAMO_CONNS, "Connects"),
        field(MQIAMO_DISCS, "Disconnects"),
        field(MQIAMO_OPENS, "Opens"),
        field(MQIAMO_CLOSES, "Closes"),
        field(MQIAMO_INQS, "Inquires"),
        field(MQIAMO_COMMITS, "Commits"),
        field(MQIAMO_Q_MAX_DEPTH, "Max Queue Depth"),
        field(MQIAMO_Q_MIN_DEPTH, "Min Queue Depth"),
    ],
    integers64: &[
        field(MQIAMO64_BYTES, "Bytes"),
        field(MQIAMO64_BROWSE_BYTES, "Browse Bytes"),
        field(MQIAMO64_GET_BYTES, "Get Bytes"),
        field(MQIAMO64_PUT_BYTES, "Put Bytes"),
        field(MQIACH_BYTES_SENT, "Bytes Sent"),
        field(MQIACH_BYTES_RCVD, "Bytes Received"),
    ],
    strings: &[
        field(MQCA_Q_MGR_NAME, "Queue Manager"),
        field(MQCA_Q_NAME, "Queue Name"),
        field(MQCACF_APPL_NAME, "Application Name"),
        field(MQCACF_USER_IDENTIFIER, "User ID"),
        field(MQCACH_CHANNEL_NAME, "Channel Name"),
        field(MQCACH_CONNECTION_NAME, "Connection Name"),
        field(MQCAMO_START_DATE, "Interval Start Date"),
        field(MQCAMO_START_TIME, "Interval Start Time"),
        field(MQCAMO_END_DATE, "Interval End Date"),
        field(MQCAMO_END_TIME, "Interval End Time"),
        field(MQCAMO_CONN_DATE, "Connect Date"),
        field(MQCAMO_CONN_TIME, "Connect Time"),
        field(MQCAMO_DISC_DATE, "Disconnect Date"),
        field(MQCAMO_DISC_TIME, "Disconnect Time"),
    ],
    byte_strings: &[field(MQBACF_CONNECTION_ID, "Connection ID")],
    groups: &[
        field(MQGACF_Q_ACCOUNTING_DATA, "Queue Accounting"),
        field(MQGACF_Q_STATISTICS_DATA, "Queue Statistics"),
        field(MQGACF_CHL_STATISTICS_DATA, "Channel Statistics"),
    ],
    parameter_name_fallback: false,
};

static EVENTS: FieldTable = FieldTable {
    name: "events",
    integers: &[
        named(MQIACF_REASON_QUALIFIER, "Reason Qualifier", Domain::Reason),
        named(MQIACF_OBJECT_TYPE, "Object Type", Domain::ObjectType),
        field(MQIACF_EVENT_ORIGIN, "Event Origin"),
        named(MQIACF_EVENT_APPL_TYPE, "Event Application Type", Domain::ApplType),
        named(MQIACF_COMMAND, "Command", Domain::Command),
        named(MQIACF_PARAMETER_ID, "Parameter ID", Domain::IntegerParameter),
        named(MQIACF_ERROR_IDENTIFIER, "Error Identifier", Domain::Reason),
        named(MQIA_APPL_TYPE, "Application Type", Domain::ApplType),
        named(MQIA_PLATFORM, "Platform", Domain::Platform),
        named(MQIA_Q_TYPE, "Queue Type", Domain::QueueType),
        named(MQIA_DEF_PERSISTENCE, "Default Persistence", Domain::Persistence),
        named(MQIACH_CHANNEL_TYPE, "Channel Type", Domain::ChannelType),
        field(MQIA_CURRENT_Q_DEPTH, "Current Queue Depth"),
        field(MQIA_Q_DEPTH_HIGH_LIMIT, "Queue Depth High Limit"),
        field(MQIA_Q_DEPTH_LOW_LIMIT, "Queue Depth Low Limit"),
        field(MQIA_COMMAND_LEVEL, "Command Level"),
    ],
    integers64: &[],
    strings: &[
        field(MQCA_Q_MGR_NAME, "Queue Manager"),
        field(MQCA_Q_NAME, "Queue Name"),
        field(MQCA_BASE_OBJECT_NAME, "Base Object Name"),
        field(MQCA_PROCESS_NAME, "Process Name"),
        field(MQCACF_EVENT_USER_ID, "Event User ID"),
        field(MQCACF_EVENT_Q_MGR, "Event Queue Manager"),
        field(MQCACH_CHANNEL_NAME, "Channel Name"),
        field(MQCACH_XMIT_Q_NAME, "Transmission Queue"),
        field(MQCACH_CONNECTION_NAME, "Connection Name"),
    ],
    byte_strings: &[],
    groups: &[],
    parameter_name_fallback: true,
};

static RESOURCE_USAGE: FieldTable = FieldTable {
    name: "resource-usage",
    integers: &[
        field(MQIAMO_MONITOR_CLASS, "Class"),
        field(MQIAMO_MONITOR_TYPE, "Type"),
        field(MQIAMO_MONITOR_ELEMENT, "Element"),
        named(MQIAMO_MONITOR_DATATYPE, "Datatype", Domain::MonitorDatatype),
        field(MQIAMO_MONITOR_FLAGS, "Flags"),
        field(MQIAMO_GETS, "Gets"),
        field(MQIAMO_GETS_FAILED, "Gets Failed"),
        field(MQIAMO_PUTS, "Puts"),
        field(MQIAMO_PUTS_FAILED, "Puts Failed"),
        field(MQIAMO_PUT1S, "Put1s"),
        field(MQIAMO_BROWSES, "Browses"),
    ],
    integers64: &[
        field(MQIAMO64_MONITOR_INTERVAL, "Interval"),
        field(MQIAMO64_HIGHRES_TIME, "High Resolution Time"),
        field(MQIAMO64_QMGR_OP_DURATION, "Operation Duration"),
    ],
    strings: &[
        field(MQCA_Q_MGR_NAME, "Queue Manager"),
        field(MQCA_TOPIC_STRING, "Topic"),
        field(MQCAMO_MONITOR_CLASS, "Class Name"),
        field(MQCAMO_MONITOR_TYPE, "Type Name"),
        field(MQCAMO_MONITOR_DESC, "Description"),
    ],
    byte_strings: &[],
    groups: &[
        field(MQGACF_MONITOR_CLASS, "Monitor Class"),
        field(MQGACF_MONITOR_TYPE, "Monitor Type"),
        field(MQGACF_MONITOR_ELEMENT, "Monitor Element"),
    ],
    parameter_name_fallback: false,
};

/// Which field-table set a message is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Application {
    #[default]
    ActivityTrace,
    /// Accounting and statistics share one table set
    Accounting,
    Events,
    ResourceUsage,
}

impl Application {
    pub fn fields(self) -> &'static FieldTable {
        match self {
            Application::ActivityTrace => &ACTIVITY_TRACE,
            Application::Accounting => &ACCOUNTING,
            Application::Events => &EVENTS,
            Application::ResourceUsage => &RESOURCE_USAGE,
        }
    }

    /// Pick the table set from the message header
    pub fn for_header(header: &PcfHeader) -> Self {
        match header.kind() {
            Some(MessageType::AppActivity) => Application::ActivityTrace,
            Some(MessageType::Accounting) | Some(MessageType::Statistics) => {
                Application::Accounting
            }
            Some(MessageType::Status) => Application::ResourceUsage,
            _ => Application::Events,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "activity-trace" | "activity" | "trace" => Some(Application::ActivityTrace),
            "accounting" | "statistics" => Some(Application::Accounting),
            "events" | "event" => Some(Application::Events),
            "resource-usage" | "resource" => Some(Application::ResourceUsage),
            _ => None,
        }
    }
}
