//! Static constant tables
//!
//! Each table is one physical id-space from the product headers. Entries are
//! in header order; when a value has aliases the preferred spelling comes
//! first because the first entry for a value wins.

/// One physical id-space: symbolic prefix plus (value, name) pairs
#[derive(Debug)]
pub struct ConstantTable {
    pub prefix: &'static str,
    pub entries: &'static [(i64, &'static str)],
}

pub const MQPL: ConstantTable = ConstantTable {
    prefix: "MQPL",
    entries: &[
        (1, "MQPL_ZOS"),
        (1, "MQPL_MVS"),
        (1, "MQPL_OS390"),
        (2, "MQPL_OS2"),
        (3, "MQPL_UNIX"),
        (3, "MQPL_AIX"),
        (4, "MQPL_OS400"),
        (5, "MQPL_WINDOWS"),
        (11, "MQPL_WINDOWS_NT"),
        (12, "MQPL_VMS"),
        (13, "MQPL_NSK"),
        (13, "MQPL_NSS"),
        (15, "MQPL_OPEN_TP1"),
        (18, "MQPL_VM"),
        (23, "MQPL_TPF"),
        (27, "MQPL_VSE"),
        (28, "MQPL_APPLIANCE"),
    ],
};

pub const MQCHT: ConstantTable = ConstantTable {
    prefix: "MQCHT",
    entries: &[
        (1, "MQCHT_SENDER"),
        (2, "MQCHT_SERVER"),
        (3, "MQCHT_RECEIVER"),
        (4, "MQCHT_REQUESTER"),
        (5, "MQCHT_ALL"),
        (6, "MQCHT_CLNTCONN"),
        (7, "MQCHT_SVRCONN"),
        (8, "MQCHT_CLUSRCVR"),
        (9, "MQCHT_CLUSSDR"),
        (10, "MQCHT_MQTT"),
        (11, "MQCHT_AMQP"),
    ],
};

pub const MQXF: ConstantTable = ConstantTable {
    prefix: "MQXF",
    entries: &[
        (1, "MQXF_INIT"),
        (2, "MQXF_TERM"),
        (3, "MQXF_CONN"),
        (4, "MQXF_CONNX"),
        (5, "MQXF_DISC"),
        (6, "MQXF_OPEN"),
        (7, "MQXF_CLOSE"),
        (8, "MQXF_PUT1"),
        (9, "MQXF_PUT"),
        (10, "MQXF_GET"),
        (11, "MQXF_DATA_CONV_ON_GET"),
        (12, "MQXF_INQ"),
        (13, "MQXF_SET"),
        (14, "MQXF_BEGIN"),
        (15, "MQXF_CMIT"),
        (16, "MQXF_BACK"),
        (18, "MQXF_STAT"),
        (19, "MQXF_CB"),
        (20, "MQXF_CTL"),
        (21, "MQXF_CALLBACK"),
        (22, "MQXF_SUB"),
        (23, "MQXF_SUBRQ"),
        (24, "MQXF_XACLOSE"),
        (25, "MQXF_XACOMMIT"),
        (26, "MQXF_XACOMPLETE"),
        (27, "MQXF_XAEND"),
        (28, "MQXF_XAFORGET"),
        (29, "MQXF_XAOPEN"),
        (30, "MQXF_XAPREPARE"),
        (31, "MQXF_XARECOVER"),
        (32, "MQXF_XAROLLBACK"),
        (33, "MQXF_XASTART"),
        (34, "MQXF_AXREG"),
        (35, "MQXF_AXUNREG"),
    ],
};

pub const MQCC: ConstantTable = ConstantTable {
    prefix: "MQCC",
    entries: &[
        (-1, "MQCC_UNKNOWN"),
        (0, "MQCC_OK"),
        (1, "MQCC_WARNING"),
        (2, "MQCC_FAILED"),
    ],
};

pub const MQRC: ConstantTable = ConstantTable {
    prefix: "MQRC",
    entries: &[
        (0, "MQRC_NONE"),
        (2001, "MQRC_ALIAS_BASE_Q_TYPE_ERROR"),
        (2002, "MQRC_ALREADY_CONNECTED"),
        (2003, "MQRC_BACKED_OUT"),
        (2004, "MQRC_BUFFER_ERROR"),
        (2005, "MQRC_BUFFER_LENGTH_ERROR"),
        (2009, "MQRC_CONNECTION_BROKEN"),
        (2012, "MQRC_ENVIRONMENT_ERROR"),
        (2016, "MQRC_GET_INHIBITED"),
        (2017, "MQRC_HANDLE_NOT_AVAILABLE"),
        (2018, "MQRC_HCONN_ERROR"),
        (2019, "MQRC_HOBJ_ERROR"),
        (2024, "MQRC_SYNCPOINT_LIMIT_REACHED"),
        (2030, "MQRC_MSG_TOO_BIG_FOR_Q"),
        (2033, "MQRC_NO_MSG_AVAILABLE"),
        (2035, "MQRC_NOT_AUTHORIZED"),
        (2037, "MQRC_NOT_OPEN_FOR_INPUT"),
        (2039, "MQRC_NOT_OPEN_FOR_OUTPUT"),
        (2042, "MQRC_OBJECT_IN_USE"),
        (2043, "MQRC_OBJECT_TYPE_ERROR"),
        (2046, "MQRC_OPTIONS_ERROR"),
        (2051, "MQRC_PUT_INHIBITED"),
        (2053, "MQRC_Q_FULL"),
        (2058, "MQRC_Q_MGR_NAME_ERROR"),
        (2059, "MQRC_Q_MGR_NOT_AVAILABLE"),
        (2063, "MQRC_SECURITY_ERROR"),
        (2071, "MQRC_STORAGE_NOT_AVAILABLE"),
        (2079, "MQRC_TRUNCATED_MSG_ACCEPTED"),
        (2080, "MQRC_TRUNCATED_MSG_FAILED"),
        (2082, "MQRC_UNKNOWN_ALIAS_BASE_Q"),
        (2085, "MQRC_UNKNOWN_OBJECT_NAME"),
        (2087, "MQRC_UNKNOWN_REMOTE_Q_MGR"),
        (2100, "MQRC_OBJECT_ALREADY_EXISTS"),
        (2101, "MQRC_OBJECT_DAMAGED"),
        (2110, "MQRC_FORMAT_ERROR"),
        (2119, "MQRC_NOT_CONVERTED"),
        (2161, "MQRC_Q_MGR_QUIESCING"),
        (2162, "MQRC_Q_MGR_STOPPING"),
        (2189, "MQRC_CLUSTER_RESOLUTION_ERROR"),
        (2195, "MQRC_UNEXPECTED_ERROR"),
        (2222, "MQRC_Q_MGR_ACTIVE"),
        (2223, "MQRC_Q_MGR_NOT_ACTIVE"),
        (2224, "MQRC_Q_DEPTH_HIGH"),
        (2225, "MQRC_Q_DEPTH_LOW"),
        (2226, "MQRC_Q_SERVICE_INTERVAL_HIGH"),
        (2227, "MQRC_Q_SERVICE_INTERVAL_OK"),
        (2233, "MQRC_CHANNEL_AUTO_DEF_OK"),
        (2234, "MQRC_CHANNEL_AUTO_DEF_ERROR"),
        (2279, "MQRC_CHANNEL_STOPPED_BY_USER"),
        (2282, "MQRC_CHANNEL_STARTED"),
        (2283, "MQRC_CHANNEL_STOPPED"),
        (2284, "MQRC_CHANNEL_CONV_ERROR"),
        (2295, "MQRC_CHANNEL_ACTIVATED"),
        (2296, "MQRC_CHANNEL_NOT_ACTIVATED"),
        (2367, "MQRC_CONFIG_CREATE_OBJECT"),
        (2368, "MQRC_CONFIG_CHANGE_OBJECT"),
        (2369, "MQRC_CONFIG_DELETE_OBJECT"),
        (2370, "MQRC_CONFIG_REFRESH_OBJECT"),
        (2371, "MQRC_CHANNEL_SSL_ERROR"),
        (2412, "MQRC_COMMAND_MQSC"),
        (2413, "MQRC_COMMAND_PCF"),
        (2537, "MQRC_CHANNEL_NOT_AVAILABLE"),
        (2538, "MQRC_HOST_NOT_AVAILABLE"),
        (2540, "MQRC_UNKNOWN_CHANNEL_NAME"),
    ],
};

pub const MQCMD: ConstantTable = ConstantTable {
    prefix: "MQCMD",
    entries: &[
        (0, "MQCMD_NONE"),
        (1, "MQCMD_CHANGE_Q_MGR"),
        (2, "MQCMD_INQUIRE_Q_MGR"),
        (3, "MQCMD_CHANGE_PROCESS"),
        (4, "MQCMD_COPY_PROCESS"),
        (5, "MQCMD_CREATE_PROCESS"),
        (6, "MQCMD_DELETE_PROCESS"),
        (7, "MQCMD_INQUIRE_PROCESS"),
        (8, "MQCMD_CHANGE_Q"),
        (9, "MQCMD_CLEAR_Q"),
        (10, "MQCMD_COPY_Q"),
        (11, "MQCMD_CREATE_Q"),
        (12, "MQCMD_DELETE_Q"),
        (13, "MQCMD_INQUIRE_Q"),
        (16, "MQCMD_REFRESH_Q_MGR"),
        (17, "MQCMD_RESET_Q_STATS"),
        (18, "MQCMD_INQUIRE_Q_NAMES"),
        (19, "MQCMD_INQUIRE_PROCESS_NAMES"),
        (20, "MQCMD_INQUIRE_CHANNEL_NAMES"),
        (21, "MQCMD_CHANGE_CHANNEL"),
        (22, "MQCMD_COPY_CHANNEL"),
        (23, "MQCMD_CREATE_CHANNEL"),
        (24, "MQCMD_DELETE_CHANNEL"),
        (25, "MQCMD_INQUIRE_CHANNEL"),
        (26, "MQCMD_PING_CHANNEL"),
        (27, "MQCMD_RESET_CHANNEL"),
        (28, "MQCMD_START_CHANNEL"),
        (29, "MQCMD_STOP_CHANNEL"),
        (30, "MQCMD_START_CHANNEL_INIT"),
        (31, "MQCMD_START_CHANNEL_LISTENER"),
        (38, "MQCMD_ESCAPE"),
        (39, "MQCMD_RESOLVE_CHANNEL"),
        (40, "MQCMD_PING_Q_MGR"),
        (41, "MQCMD_INQUIRE_Q_STATUS"),
        (42, "MQCMD_INQUIRE_CHANNEL_STATUS"),
        (43, "MQCMD_CONFIG_EVENT"),
        (44, "MQCMD_Q_MGR_EVENT"),
        (45, "MQCMD_PERFM_EVENT"),
        (46, "MQCMD_CHANNEL_EVENT"),
        (69, "MQCMD_ACTIVITY_MSG"),
        (75, "MQCMD_TRACE_ROUTE"),
        (91, "MQCMD_LOGGER_EVENT"),
        (99, "MQCMD_COMMAND_EVENT"),
        (161, "MQCMD_INQUIRE_Q_MGR_STATUS"),
        (164, "MQCMD_STATISTICS_MQI"),
        (165, "MQCMD_STATISTICS_Q"),
        (166, "MQCMD_STATISTICS_CHANNEL"),
        (167, "MQCMD_ACCOUNTING_MQI"),
        (168, "MQCMD_ACCOUNTING_Q"),
        (209, "MQCMD_ACTIVITY_TRACE"),
    ],
};

pub const MQCFT: ConstantTable = ConstantTable {
    prefix: "MQCFT",
    entries: &[
        (0, "MQCFT_NONE"),
        (1, "MQCFT_COMMAND"),
        (2, "MQCFT_RESPONSE"),
        (3, "MQCFT_INTEGER"),
        (4, "MQCFT_STRING"),
        (5, "MQCFT_INTEGER_LIST"),
        (6, "MQCFT_STRING_LIST"),
        (7, "MQCFT_EVENT"),
        (8, "MQCFT_USER"),
        (9, "MQCFT_BYTE_STRING"),
        (10, "MQCFT_TRACE_ROUTE"),
        (12, "MQCFT_REPORT"),
        (13, "MQCFT_INTEGER_FILTER"),
        (14, "MQCFT_STRING_FILTER"),
        (15, "MQCFT_BYTE_STRING_FILTER"),
        (16, "MQCFT_COMMAND_XR"),
        (17, "MQCFT_XR_MSG"),
        (18, "MQCFT_XR_ITEM"),
        (19, "MQCFT_XR_SUMMARY"),
        (20, "MQCFT_GROUP"),
        (21, "MQCFT_STATISTICS"),
        (22, "MQCFT_ACCOUNTING"),
        (23, "MQCFT_INTEGER64"),
        (25, "MQCFT_INTEGER64_LIST"),
        (26, "MQCFT_APP_ACTIVITY"),
        (27, "MQCFT_STATUS"),
    ],
};

pub const MQCFC: ConstantTable = ConstantTable {
    prefix: "MQCFC",
    entries: &[(0, "MQCFC_NOT_LAST"), (1, "MQCFC_LAST")],
};

pub const MQCFOP: ConstantTable = ConstantTable {
    prefix: "MQCFOP",
    entries: &[
        (1, "MQCFOP_LESS"),
        (2, "MQCFOP_EQUAL"),
        (3, "MQCFOP_NOT_GREATER"),
        (4, "MQCFOP_GREATER"),
        (5, "MQCFOP_NOT_EQUAL"),
        (6, "MQCFOP_NOT_LESS"),
        (10, "MQCFOP_CONTAINS"),
        (13, "MQCFOP_EXCLUDES"),
        (18, "MQCFOP_LIKE"),
        (21, "MQCFOP_NOT_LIKE"),
        (26, "MQCFOP_CONTAINS_GEN"),
        (29, "MQCFOP_EXCLUDES_GEN"),
    ],
};

pub const MQOT: ConstantTable = ConstantTable {
    prefix: "MQOT",
    entries: &[
        (1, "MQOT_Q"),
        (2, "MQOT_NAMELIST"),
        (3, "MQOT_PROCESS"),
        (4, "MQOT_STORAGE_CLASS"),
        (5, "MQOT_Q_MGR"),
        (6, "MQOT_CHANNEL"),
        (7, "MQOT_AUTH_INFO"),
        (8, "MQOT_TOPIC"),
        (9, "MQOT_COMM_INFO"),
        (10, "MQOT_CF_STRUC"),
        (11, "MQOT_LISTENER"),
        (12, "MQOT_SERVICE"),
        (1001, "MQOT_ALL"),
        (1002, "MQOT_ALIAS_Q"),
        (1003, "MQOT_MODEL_Q"),
        (1004, "MQOT_LOCAL_Q"),
        (1005, "MQOT_REMOTE_Q"),
        (1007, "MQOT_SENDER_CHANNEL"),
        (1008, "MQOT_SERVER_CHANNEL"),
        (1009, "MQOT_REQUESTER_CHANNEL"),
        (1010, "MQOT_RECEIVER_CHANNEL"),
        (1011, "MQOT_CURRENT_CHANNEL"),
        (1012, "MQOT_SAVED_CHANNEL"),
        (1013, "MQOT_SVRCONN_CHANNEL"),
        (1014, "MQOT_CLNTCONN_CHANNEL"),
        (1015, "MQOT_SHORT_CHANNEL"),
        (1016, "MQOT_CHLAUTH"),
        (1017, "MQOT_REMOTE_Q_MGR_NAME"),
        (1019, "MQOT_PROT_POLICY"),
        (1020, "MQOT_TT_CHANNEL"),
        (1021, "MQOT_AMQP_CHANNEL"),
        (1022, "MQOT_AUTH_REC"),
    ],
};

pub const MQPER: ConstantTable = ConstantTable {
    prefix: "MQPER",
    entries: &[
        (-1, "MQPER_PERSISTENCE_AS_PARENT"),
        (0, "MQPER_NOT_PERSISTENT"),
        (1, "MQPER_PERSISTENT"),
        (2, "MQPER_PERSISTENCE_AS_Q_DEF"),
    ],
};

pub const MQAT: ConstantTable = ConstantTable {
    prefix: "MQAT",
    entries: &[
        (-1, "MQAT_UNKNOWN"),
        (0, "MQAT_NO_CONTEXT"),
        (1, "MQAT_CICS"),
        (2, "MQAT_ZOS"),
        (2, "MQAT_MVS"),
        (3, "MQAT_IMS"),
        (4, "MQAT_OS2"),
        (5, "MQAT_DOS"),
        (6, "MQAT_UNIX"),
        (6, "MQAT_AIX"),
        (7, "MQAT_QMGR"),
        (8, "MQAT_OS400"),
        (9, "MQAT_WINDOWS"),
        (10, "MQAT_CICS_VSE"),
        (11, "MQAT_WINDOWS_NT"),
        (12, "MQAT_VMS"),
        (13, "MQAT_NSK"),
        (14, "MQAT_VOS"),
        (15, "MQAT_OPEN_TP1"),
        (18, "MQAT_VM"),
        (19, "MQAT_IMS_BRIDGE"),
        (20, "MQAT_XCF"),
        (21, "MQAT_CICS_BRIDGE"),
        (22, "MQAT_NOTES_AGENT"),
        (23, "MQAT_TPF"),
        (25, "MQAT_USER"),
        (26, "MQAT_BROKER"),
        (28, "MQAT_JAVA"),
        (29, "MQAT_DQM"),
        (30, "MQAT_CHANNEL_INITIATOR"),
        (31, "MQAT_WLM"),
        (32, "MQAT_BATCH"),
        (33, "MQAT_RRS_BATCH"),
        (34, "MQAT_SIB"),
        (35, "MQAT_SYSTEM_EXTENSION"),
        (36, "MQAT_MCAST_PUBLISH"),
        (37, "MQAT_AMQP"),
    ],
};

pub const MQQT: ConstantTable = ConstantTable {
    prefix: "MQQT",
    entries: &[
        (1, "MQQT_LOCAL"),
        (2, "MQQT_MODEL"),
        (3, "MQQT_ALIAS"),
        (6, "MQQT_REMOTE"),
        (7, "MQQT_CLUSTER"),
        (1001, "MQQT_ALL"),
    ],
};

pub const MQIAMO_MONITOR: ConstantTable = ConstantTable {
    prefix: "MQIAMO_MONITOR",
    entries: &[
        (1, "MQIAMO_MONITOR_UNIT"),
        (2, "MQIAMO_MONITOR_DELTA"),
        (100, "MQIAMO_MONITOR_HUNDREDTHS"),
        (1024, "MQIAMO_MONITOR_KB"),
        (10000, "MQIAMO_MONITOR_PERCENT"),
        (1_000_000, "MQIAMO_MONITOR_MICROSEC"),
        (1_048_576, "MQIAMO_MONITOR_MB"),
        (100_000_000, "MQIAMO_MONITOR_GB"),
    ],
};

// Parameter id-spaces. The integer, string, group and byte-string parameter
// domains are composites of these.

pub const MQIA: ConstantTable = ConstantTable {
    prefix: "MQIA",
    entries: &[
        (1, "MQIA_APPL_TYPE"),
        (2, "MQIA_CODED_CHAR_SET_ID"),
        (3, "MQIA_CURRENT_Q_DEPTH"),
        (4, "MQIA_DEF_INPUT_OPEN_OPTION"),
        (5, "MQIA_DEF_PERSISTENCE"),
        (6, "MQIA_DEF_PRIORITY"),
        (7, "MQIA_DEFINITION_TYPE"),
        (8, "MQIA_HARDEN_GET_BACKOUT"),
        (9, "MQIA_INHIBIT_GET"),
        (10, "MQIA_INHIBIT_PUT"),
        (11, "MQIA_MAX_HANDLES"),
        (12, "MQIA_USAGE"),
        (13, "MQIA_MAX_MSG_LENGTH"),
        (14, "MQIA_MAX_PRIORITY"),
        (15, "MQIA_MAX_Q_DEPTH"),
        (16, "MQIA_MSG_DELIVERY_SEQUENCE"),
        (17, "MQIA_OPEN_INPUT_COUNT"),
        (18, "MQIA_OPEN_OUTPUT_COUNT"),
        (19, "MQIA_NAME_COUNT"),
        (20, "MQIA_Q_TYPE"),
        (21, "MQIA_RETENTION_INTERVAL"),
        (22, "MQIA_BACKOUT_THRESHOLD"),
        (23, "MQIA_SHAREABILITY"),
        (24, "MQIA_TRIGGER_CONTROL"),
        (25, "MQIA_TRIGGER_INTERVAL"),
        (26, "MQIA_TRIGGER_MSG_PRIORITY"),
        (27, "MQIA_CPI_LEVEL"),
        (28, "MQIA_TRIGGER_TYPE"),
        (29, "MQIA_TRIGGER_DEPTH"),
        (30, "MQIA_SYNCPOINT"),
        (31, "MQIA_COMMAND_LEVEL"),
        (32, "MQIA_PLATFORM"),
        (33, "MQIA_MAX_UNCOMMITTED_MSGS"),
        (34, "MQIA_DIST_LISTS"),
        (35, "MQIA_TIME_SINCE_RESET"),
        (36, "MQIA_HIGH_Q_DEPTH"),
        (37, "MQIA_MSG_ENQ_COUNT"),
        (38, "MQIA_MSG_DEQ_COUNT"),
        (39, "MQIA_EXPIRY_INTERVAL"),
        (40, "MQIA_Q_DEPTH_HIGH_LIMIT"),
        (41, "MQIA_Q_DEPTH_LOW_LIMIT"),
        (42, "MQIA_Q_DEPTH_MAX_EVENT"),
        (43, "MQIA_Q_DEPTH_HIGH_EVENT"),
        (44, "MQIA_Q_DEPTH_LOW_EVENT"),
        (45, "MQIA_SCOPE"),
        (46, "MQIA_Q_SERVICE_INTERVAL_EVENT"),
        (47, "MQIA_AUTHORITY_EVENT"),
        (48, "MQIA_INHIBIT_EVENT"),
        (49, "MQIA_LOCAL_EVENT"),
        (50, "MQIA_REMOTE_EVENT"),
        (51, "MQIA_CONFIGURATION_EVENT"),
        (52, "MQIA_START_STOP_EVENT"),
        (53, "MQIA_PERFORMANCE_EVENT"),
        (54, "MQIA_Q_SERVICE_INTERVAL"),
        (55, "MQIA_CHANNEL_AUTO_DEF"),
    ],
};

pub const MQIACF: ConstantTable = ConstantTable {
    prefix: "MQIACF",
    entries: &[
        (1001, "MQIACF_Q_MGR_ATTRS"),
        (1002, "MQIACF_Q_ATTRS"),
        (1003, "MQIACF_PROCESS_ATTRS"),
        (1004, "MQIACF_NAMELIST_ATTRS"),
        (1005, "MQIACF_FORCE"),
        (1006, "MQIACF_REPLACE"),
        (1007, "MQIACF_PURGE"),
        (1008, "MQIACF_QUIESCE"),
        (1009, "MQIACF_ALL"),
        (1010, "MQIACF_EVENT_APPL_TYPE"),
        (1011, "MQIACF_EVENT_ORIGIN"),
        (1012, "MQIACF_PARAMETER_ID"),
        (1013, "MQIACF_ERROR_IDENTIFIER"),
        (1014, "MQIACF_SELECTOR"),
        (1015, "MQIACF_CHANNEL_ATTRS"),
        (1016, "MQIACF_OBJECT_TYPE"),
        (1017, "MQIACF_ESCAPE_TYPE"),
        (1018, "MQIACF_ERROR_OFFSET"),
        (1019, "MQIACF_AUTH_INFO_ATTRS"),
        (1020, "MQIACF_REASON_QUALIFIER"),
        (1021, "MQIACF_COMMAND"),
        (1022, "MQIACF_OPEN_OPTIONS"),
        (1023, "MQIACF_OPEN_TYPE"),
        (1024, "MQIACF_PROCESS_ID"),
        (1025, "MQIACF_THREAD_ID"),
        (1070, "MQIACF_AUX_ERROR_DATA_INT_1"),
        (1071, "MQIACF_AUX_ERROR_DATA_INT_2"),
        (1072, "MQIACF_CONV_REASON_CODE"),
        (1079, "MQIACF_SEQUENCE_NUMBER"),
        (1222, "MQIACF_COMP_CODE"),
        (1223, "MQIACF_REASON_CODE"),
        (1339, "MQIACF_OPERATION_ID"),
        (1340, "MQIACF_HOBJ"),
        (1341, "MQIACF_MSG_LENGTH"),
        (1342, "MQIACF_BUFFER_LENGTH"),
        (1343, "MQIACF_GET_OPTIONS"),
        (1344, "MQIACF_PUT_OPTIONS"),
        (1345, "MQIACF_CLOSE_OPTIONS"),
        (1346, "MQIACF_TRACE_DETAIL"),
        (1347, "MQIACF_TRACE_DATA_LENGTH"),
        (1348, "MQIACF_RECORDED_ACTIVITIES"),
        (1349, "MQIACF_CTL_OPERATION"),
        (1350, "MQIACF_SUB_OPTIONS"),
        (1351, "MQIACF_APPL_FUNCTION_TYPE"),
        (1352, "MQIACF_POINTER_SIZE"),
        (1353, "MQIACF_PERSISTENCE"),
    ],
};

pub const MQIACH: ConstantTable = ConstantTable {
    prefix: "MQIACH",
    entries: &[
        (1501, "MQIACH_XMIT_PROTOCOL_TYPE"),
        (1502, "MQIACH_BATCH_SIZE"),
        (1503, "MQIACH_DISC_INTERVAL"),
        (1504, "MQIACH_SHORT_TIMER"),
        (1505, "MQIACH_SHORT_RETRY"),
        (1506, "MQIACH_LONG_TIMER"),
        (1507, "MQIACH_LONG_RETRY"),
        (1508, "MQIACH_PUT_AUTHORITY"),
        (1509, "MQIACH_SEQUENCE_NUMBER_WRAP"),
        (1510, "MQIACH_MAX_MSG_LENGTH"),
        (1511, "MQIACH_CHANNEL_TYPE"),
        (1512, "MQIACH_DATA_COUNT"),
        (1513, "MQIACH_NAME_COUNT"),
        (1514, "MQIACH_MSG_SEQUENCE_NUMBER"),
        (1515, "MQIACH_DATA_CONVERSION"),
        (1516, "MQIACH_IN_DOUBT"),
        (1517, "MQIACH_MCA_TYPE"),
        (1518, "MQIACH_SESSION_COUNT"),
        (1519, "MQIACH_ADAPTER"),
        (1520, "MQIACH_COMMAND_COUNT"),
        (1521, "MQIACH_SOCKET"),
        (1522, "MQIACH_PORT"),
        (1523, "MQIACH_CHANNEL_INSTANCE_TYPE"),
        (1524, "MQIACH_CHANNEL_INSTANCE_ATTRS"),
        (1525, "MQIACH_CHANNEL_ERROR_DATA"),
        (1526, "MQIACH_CHANNEL_TABLE"),
        (1527, "MQIACH_CHANNEL_STATUS"),
        (1528, "MQIACH_INDOUBT_STATUS"),
        (1529, "MQIACH_LAST_SEQ_NUMBER"),
        (1531, "MQIACH_CURRENT_MSGS"),
        (1532, "MQIACH_CURRENT_SEQ_NUMBER"),
        (1533, "MQIACH_SSL_RETURN_CODE"),
        (1534, "MQIACH_MSGS"),
        (1535, "MQIACH_BYTES_SENT"),
        (1536, "MQIACH_BYTES_RCVD"),
        (1537, "MQIACH_BATCHES"),
        (1538, "MQIACH_BUFFERS_SENT"),
        (1539, "MQIACH_BUFFERS_RCVD"),
        (1540, "MQIACH_LONG_RETRIES_LEFT"),
        (1541, "MQIACH_SHORT_RETRIES_LEFT"),
        (1542, "MQIACH_MCA_STATUS"),
        (1543, "MQIACH_STOP_REQUESTED"),
        (1544, "MQIACH_MR_COUNT"),
        (1545, "MQIACH_MR_INTERVAL"),
        (1562, "MQIACH_NPM_SPEED"),
        (1563, "MQIACH_HB_INTERVAL"),
        (1564, "MQIACH_BATCH_INTERVAL"),
        (1565, "MQIACH_NETWORK_PRIORITY"),
        (1566, "MQIACH_KEEP_ALIVE_INTERVAL"),
    ],
};

pub const MQIAMO: ConstantTable = ConstantTable {
    prefix: "MQIAMO",
    entries: &[
        (701, "MQIAMO_AVG_BATCH_SIZE"),
        (702, "MQIAMO_AVG_Q_TIME"),
        (703, "MQIAMO_BACKOUTS"),
        (704, "MQIAMO_BROWSES"),
        (705, "MQIAMO_BROWSE_MAX_BYTES"),
        (706, "MQIAMO_BROWSE_MIN_BYTES"),
        (707, "MQIAMO_BROWSES_FAILED"),
        (708, "MQIAMO_CLOSES"),
        (709, "MQIAMO_COMMITS"),
        (710, "MQIAMO_COMMITS_FAILED"),
        (711, "MQIAMO_CONNS"),
        (712, "MQIAMO_CONNS_MAX"),
        (713, "MQIAMO_DISCS"),
        (714, "MQIAMO_DISCS_IMPLICIT"),
        (715, "MQIAMO_DISC_TYPE"),
        (716, "MQIAMO_EXIT_TIME_AVG"),
        (717, "MQIAMO_EXIT_TIME_MAX"),
        (718, "MQIAMO_EXIT_TIME_MIN"),
        (719, "MQIAMO_FULL_BATCHES"),
        (720, "MQIAMO_GENERATED_MSGS"),
        (721, "MQIAMO_GETS"),
        (722, "MQIAMO_GET_MAX_BYTES"),
        (723, "MQIAMO_GET_MIN_BYTES"),
        (724, "MQIAMO_GETS_FAILED"),
        (725, "MQIAMO_INCOMPLETE_BATCHES"),
        (726, "MQIAMO_INQS"),
        (727, "MQIAMO_MSGS"),
        (728, "MQIAMO_NET_TIME_AVG"),
        (729, "MQIAMO_NET_TIME_MAX"),
        (730, "MQIAMO_NET_TIME_MIN"),
        (731, "MQIAMO_OBJECT_COUNT"),
        (732, "MQIAMO_OPENS"),
        (733, "MQIAMO_PUT1S"),
        (734, "MQIAMO_PUTS"),
        (735, "MQIAMO_PUT_MAX_BYTES"),
        (736, "MQIAMO_PUT_MIN_BYTES"),
        (737, "MQIAMO_PUT_RETRIES"),
        (738, "MQIAMO_Q_MAX_DEPTH"),
        (739, "MQIAMO_Q_MIN_DEPTH"),
        (740, "MQIAMO_Q_TIME_AVG"),
        (741, "MQIAMO_Q_TIME_MAX"),
        (742, "MQIAMO_Q_TIME_MIN"),
        (743, "MQIAMO_SETS"),
        (745, "MQIAMO64_BROWSE_BYTES"),
        (746, "MQIAMO64_BYTES"),
        (747, "MQIAMO64_GET_BYTES"),
        (748, "MQIAMO64_PUT_BYTES"),
        (749, "MQIAMO_CONNS_FAILED"),
        (751, "MQIAMO_OPENS_FAILED"),
        (752, "MQIAMO_INQS_FAILED"),
        (753, "MQIAMO_SETS_FAILED"),
        (754, "MQIAMO_PUTS_FAILED"),
        (755, "MQIAMO_PUT1S_FAILED"),
        (757, "MQIAMO_CLOSES_FAILED"),
        (758, "MQIAMO_MSGS_EXPIRED"),
        (759, "MQIAMO_MSGS_NOT_QUEUED"),
        (760, "MQIAMO_MSGS_PURGED"),
        (838, "MQIAMO64_HIGHRES_TIME"),
        (839, "MQIAMO_MONITOR_CLASS"),
        (840, "MQIAMO_MONITOR_TYPE"),
        (841, "MQIAMO_MONITOR_ELEMENT"),
        (842, "MQIAMO_MONITOR_DATATYPE"),
        (843, "MQIAMO_MONITOR_FLAGS"),
        (844, "MQIAMO64_QMGR_OP_DURATION"),
        (845, "MQIAMO64_MONITOR_INTERVAL"),
    ],
};

pub const MQCA: ConstantTable = ConstantTable {
    prefix: "MQCA",
    entries: &[
        (2001, "MQCA_APPL_ID"),
        (2002, "MQCA_BASE_OBJECT_NAME"),
        (2004, "MQCA_COMMAND_INPUT_Q_NAME"),
        (2005, "MQCA_CREATION_DATE"),
        (2006, "MQCA_CREATION_TIME"),
        (2007, "MQCA_DEAD_LETTER_Q_NAME"),
        (2012, "MQCA_PROCESS_NAME"),
        (2013, "MQCA_Q_DESC"),
        (2015, "MQCA_Q_MGR_NAME"),
        (2016, "MQCA_Q_NAME"),
        (2017, "MQCA_REMOTE_Q_MGR_NAME"),
        (2018, "MQCA_REMOTE_Q_NAME"),
        (2024, "MQCA_XMIT_Q_NAME"),
        (2029, "MQCA_CLUSTER_NAME"),
        (2032, "MQCA_Q_MGR_IDENTIFIER"),
        (2092, "MQCA_TOPIC_NAME"),
        (2094, "MQCA_TOPIC_STRING"),
    ],
};

pub const MQCACF: ConstantTable = ConstantTable {
    prefix: "MQCACF",
    entries: &[
        (3001, "MQCACF_FROM_Q_NAME"),
        (3002, "MQCACF_TO_Q_NAME"),
        (3023, "MQCACF_OBJECT_Q_MGR_NAME"),
        (3024, "MQCACF_APPL_NAME"),
        (3025, "MQCACF_USER_IDENTIFIER"),
        (3026, "MQCACF_AUX_ERROR_DATA_STR_1"),
        (3027, "MQCACF_AUX_ERROR_DATA_STR_2"),
        (3028, "MQCACF_AUX_ERROR_DATA_STR_3"),
        (3045, "MQCACF_EVENT_USER_ID"),
        (3047, "MQCACF_EVENT_Q_MGR"),
        (3049, "MQCACF_EVENT_APPL_IDENTITY"),
        (3050, "MQCACF_EVENT_APPL_NAME"),
        (3051, "MQCACF_EVENT_APPL_ORIGIN"),
        (3180, "MQCACF_OBJECT_NAME"),
        (3181, "MQCACF_RESOLVED_Q_NAME"),
        (3182, "MQCACF_RESOLVED_Q_MGR"),
        (3183, "MQCACF_OPERATION_DATE"),
        (3184, "MQCACF_OPERATION_TIME"),
        (3185, "MQCACF_HOST_NAME"),
        (3186, "MQCACF_APPL_FUNCTION"),
        (3187, "MQCACF_SUB_NAME"),
    ],
};

pub const MQCACH: ConstantTable = ConstantTable {
    prefix: "MQCACH",
    entries: &[
        (3501, "MQCACH_CHANNEL_NAME"),
        (3502, "MQCACH_DESC"),
        (3503, "MQCACH_MODE_NAME"),
        (3504, "MQCACH_TP_NAME"),
        (3505, "MQCACH_XMIT_Q_NAME"),
        (3506, "MQCACH_CONNECTION_NAME"),
        (3507, "MQCACH_MCA_NAME"),
        (3508, "MQCACH_SEC_EXIT_NAME"),
        (3509, "MQCACH_MSG_EXIT_NAME"),
        (3510, "MQCACH_SEND_EXIT_NAME"),
        (3511, "MQCACH_RCV_EXIT_NAME"),
        (3512, "MQCACH_CHANNEL_NAMES"),
        (3527, "MQCACH_MCA_USER_ID"),
        (3544, "MQCACH_SSL_CIPHER_SPEC"),
        (3545, "MQCACH_SSL_PEER_NAME"),
    ],
};

pub const MQCAMO: ConstantTable = ConstantTable {
    prefix: "MQCAMO",
    entries: &[
        (2701, "MQCAMO_CLOSE_DATE"),
        (2702, "MQCAMO_CLOSE_TIME"),
        (2703, "MQCAMO_CONN_DATE"),
        (2704, "MQCAMO_CONN_TIME"),
        (2705, "MQCAMO_DISC_DATE"),
        (2706, "MQCAMO_DISC_TIME"),
        (2707, "MQCAMO_END_DATE"),
        (2708, "MQCAMO_END_TIME"),
        (2709, "MQCAMO_OPEN_DATE"),
        (2710, "MQCAMO_OPEN_TIME"),
        (2711, "MQCAMO_START_DATE"),
        (2712, "MQCAMO_START_TIME"),
        (2713, "MQCAMO_MONITOR_CLASS"),
        (2714, "MQCAMO_MONITOR_TYPE"),
        (2715, "MQCAMO_MONITOR_DESC"),
    ],
};

pub const MQGACF: ConstantTable = ConstantTable {
    prefix: "MQGACF",
    entries: &[
        (8001, "MQGACF_COMMAND_CONTEXT"),
        (8002, "MQGACF_COMMAND_DATA"),
        (8003, "MQGACF_TRACE_ROUTE"),
        (8004, "MQGACF_OPERATION"),
        (8005, "MQGACF_ACTIVITY"),
        (8006, "MQGACF_EMBEDDED_MQMD"),
        (8007, "MQGACF_MESSAGE"),
        (8008, "MQGACF_MQMD"),
        (8009, "MQGACF_VALUE_NAMING"),
        (8010, "MQGACF_Q_ACCOUNTING_DATA"),
        (8011, "MQGACF_Q_STATISTICS_DATA"),
        (8012, "MQGACF_CHL_STATISTICS_DATA"),
        (8013, "MQGACF_ACTIVITY_TRACE"),
        (8014, "MQGACF_APP_DIST_LIST"),
        (8015, "MQGACF_MONITOR_CLASS"),
        (8016, "MQGACF_MONITOR_TYPE"),
        (8017, "MQGACF_MONITOR_ELEMENT"),
    ],
};

pub const MQBACF: ConstantTable = ConstantTable {
    prefix: "MQBACF",
    entries: &[
        (7001, "MQBACF_EVENT_ACCOUNTING_TOKEN"),
        (7002, "MQBACF_EVENT_SECURITY_ID"),
        (7003, "MQBACF_RESPONSE_SET"),
        (7004, "MQBACF_RESPONSE_ID"),
        (7005, "MQBACF_EXTERNAL_UOW_ID"),
        (7006, "MQBACF_CONNECTION_ID"),
        (7007, "MQBACF_GENERIC_CONNECTION_ID"),
        (7008, "MQBACF_ORIGIN_UOW_ID"),
        (7009, "MQBACF_Q_MGR_UOW_ID"),
        (7010, "MQBACF_ACCOUNTING_TOKEN"),
        (7011, "MQBACF_CORREL_ID"),
        (7012, "MQBACF_GROUP_ID"),
        (7013, "MQBACF_MSG_ID"),
        (7014, "MQBACF_CF_LEID"),
        (7015, "MQBACF_DESTINATION_CORREL_ID"),
        (7016, "MQBACF_SUB_ID"),
        (7019, "MQBACF_ALTERNATE_SECURITYID"),
        (7020, "MQBACF_MESSAGE_DATA"),
        (7021, "MQBACF_MQBO_STRUCT"),
        (7022, "MQBACF_MQCB_FUNCTION"),
        (7023, "MQBACF_MQCBC_STRUCT"),
        (7024, "MQBACF_MQCBD_STRUCT"),
        (7025, "MQBACF_MQCD_STRUCT"),
        (7026, "MQBACF_MQCNO_STRUCT"),
        (7027, "MQBACF_MQGMO_STRUCT"),
        (7028, "MQBACF_MQMD_STRUCT"),
        (7029, "MQBACF_MQPMO_STRUCT"),
        (7030, "MQBACF_MQSD_STRUCT"),
        (7031, "MQBACF_MQSTS_STRUCT"),
        (7032, "MQBACF_SUB_CORREL_ID"),
        (7033, "MQBACF_XA_XID"),
        (7034, "MQBACF_XQH_CORREL_ID"),
        (7035, "MQBACF_XQH_MSG_ID"),
    ],
};
