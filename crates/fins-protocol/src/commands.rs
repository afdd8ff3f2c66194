//! Command catalog: code → display name → per-direction body shape
//!
//! The protocol defines a closed set of 16-bit command codes. Rather than a
//! per-command parsing routine, each code maps to a declarative
//! [`BodyShape`] for each direction; a handful of shared interpreters in
//! [`crate::body`] walk the shapes. Length expectations live in the shape
//! data (field widths), not in per-command code.

use crate::fields::{fields_width, FieldKind, FieldSpec};
use crate::fields::{
    CONTROLLER_STATUS, CPU_MODES, CYCLE_TIME_PARAMETERS, DAYS_OF_WEEK, DISK_NUMBERS,
    FAL_FALS_NUMBERS, FATAL_ERROR_LAYOUT, FILE_DATE_LAYOUT, FILE_MEMORY_TYPES,
    FILE_WRITE_PARAMETERS, FORCE_SPECIFICATIONS, MEMORY_AREAS, MEMORY_CARD_TYPES,
    MESSAGE_FLAGS_LAYOUT, NONFATAL_ERROR_LAYOUT, PARAMETER_AREAS, RESPONSE_CODES,
    TRANSFER_PARAMETERS, VOLUME_PARAMETERS,
};

/// How the body of one direction of one command is laid out.
#[derive(Debug, Clone, Copy)]
pub enum BodyShape {
    /// Body must be exactly zero bytes
    Empty,
    /// The protocol defines no message in this direction
    Absent,
    /// Exact sequence of fixed-width fields
    Fields(&'static [FieldSpec]),
    /// One of several exact layouts, selected by remaining length
    Choice(&'static [&'static [FieldSpec]]),
    /// Fixed fields, then an opaque tail of whatever remains
    FieldsThenData(&'static [FieldSpec], &'static str),
    /// Fixed fields, then repeated fixed-size records until the length
    /// budget is exhausted
    FieldsThenRecords(&'static [FieldSpec], &'static str, &'static [FieldSpec]),
    /// Multiple Memory Area Read response: records whose data width is
    /// keyed by an embedded memory-area code
    AreaData,
}

impl BodyShape {
    /// Minimum body length this shape accepts.
    pub fn min_len(&self) -> usize {
        match self {
            BodyShape::Empty | BodyShape::Absent => 0,
            BodyShape::Fields(fields) => fields_width(fields),
            BodyShape::Choice(alts) => alts
                .iter()
                .map(|fields| fields_width(fields))
                .min()
                .unwrap_or(0),
            BodyShape::FieldsThenData(fields, _) => fields_width(fields),
            BodyShape::FieldsThenRecords(fields, _, _) => fields_width(fields),
            BodyShape::AreaData => 2,
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub code: u16,
    pub name: &'static str,
    pub request: BodyShape,
    pub response: BodyShape,
}

/// Catalog lookup; `None` is the unknown-command outcome.
pub fn lookup(code: u16) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.code == code)
}

const fn field(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { name, kind }
}

// Fields shared across many layouts
pub(crate) const END_CODE: FieldSpec = field("Response code", FieldKind::Enum16(&RESPONSE_CODES));
const MEMORY_AREA_CODE: FieldSpec = field("Memory area code", FieldKind::Enum8(&MEMORY_AREAS));
const BEGIN_ADDRESS: FieldSpec = field("Beginning address", FieldKind::U16);
const BEGIN_ADDRESS_BITS: FieldSpec = field("Beginning address (bits)", FieldKind::U8);
const NUM_ITEMS: FieldSpec = field("Number of items", FieldKind::Dec16);
const PROGRAM_NUMBER: FieldSpec = field("Program number", FieldKind::U16);
const DISK_NUMBER: FieldSpec = field("Disk number", FieldKind::Enum16(&DISK_NUMBERS));
const FILE_NAME: FieldSpec = field("File name", FieldKind::Ascii(12));
const FILE_DATE: FieldSpec = field("Date", FieldKind::Bits32(&FILE_DATE_LAYOUT));
const PARAMETER_AREA_CODE: FieldSpec =
    field("Parameter area code", FieldKind::Enum16(&PARAMETER_AREAS));
const BEGIN_WORD: FieldSpec = field("Beginning word", FieldKind::U16);
const NUM_WORDS: FieldSpec = field("Number of words", FieldKind::Dec16);

static EMPTY_FIELDS: &[FieldSpec] = &[];
static END_ONLY: &[FieldSpec] = &[END_CODE];

static MEM_ADDR: &[FieldSpec] = &[MEMORY_AREA_CODE, BEGIN_ADDRESS, BEGIN_ADDRESS_BITS];
static MEM_ADDR_COUNT: &[FieldSpec] =
    &[MEMORY_AREA_CODE, BEGIN_ADDRESS, BEGIN_ADDRESS_BITS, NUM_ITEMS];
static MEM_FILL_C: &[FieldSpec] = &[
    MEMORY_AREA_CODE,
    BEGIN_ADDRESS,
    BEGIN_ADDRESS_BITS,
    NUM_ITEMS,
    field("Fill data", FieldKind::U16),
];
static MEM_TRANSFER_C: &[FieldSpec] = &[
    field("Source memory area code", FieldKind::Enum8(&MEMORY_AREAS)),
    field("Source beginning address", FieldKind::U16),
    field("Source beginning address (bits)", FieldKind::U8),
    field(
        "Destination memory area code",
        FieldKind::Enum8(&MEMORY_AREAS),
    ),
    field("Destination beginning address", FieldKind::U16),
    field("Destination beginning address (bits)", FieldKind::U8),
    NUM_ITEMS,
];

static PARAM_RANGE_C: &[FieldSpec] = &[PARAMETER_AREA_CODE, BEGIN_WORD, NUM_WORDS];
static PARAM_READ_R: &[FieldSpec] = &[END_CODE, PARAMETER_AREA_CODE, BEGIN_WORD, NUM_WORDS];
static PARAM_CLEAR_C: &[FieldSpec] = &[
    PARAMETER_AREA_CODE,
    BEGIN_WORD,
    NUM_WORDS,
    field("Clear data", FieldKind::U16),
];

static LINK_TABLE_R: &[FieldSpec] = &[END_CODE, field("Number of link nodes", FieldKind::Dec8)];
static LINK_TABLE_W_C: &[FieldSpec] = &[field("Number of link nodes", FieldKind::Dec8)];

static PROGRAM_PROTECT_C: &[FieldSpec] = &[
    PROGRAM_NUMBER,
    field("Protect code", FieldKind::U8),
    field("Beginning word", FieldKind::U32),
    field("Last word", FieldKind::U32),
    field("Password", FieldKind::U32),
];
static PROGRAM_RANGE_C: &[FieldSpec] = &[
    PROGRAM_NUMBER,
    field("Beginning word", FieldKind::U32),
    field("Number of bytes", FieldKind::Dec16),
];
static PROGRAM_RANGE_R: &[FieldSpec] = &[
    END_CODE,
    PROGRAM_NUMBER,
    field("Beginning word", FieldKind::U32),
    field("Number of bytes", FieldKind::Dec16),
];
static PROGRAM_CLEAR_C: &[FieldSpec] = &[PROGRAM_NUMBER, field("Clear code", FieldKind::U8)];

static PROGRAM_NO_ONLY: &[FieldSpec] = &[PROGRAM_NUMBER];
static RUN_FULL_C: &[FieldSpec] = &[PROGRAM_NUMBER, field("Mode", FieldKind::Enum8(&CPU_MODES))];
static RUN_CHOICES: &[&[FieldSpec]] = &[PROGRAM_NO_ONLY, RUN_FULL_C];

static CONTROLLER_DATA_SELECT: &[FieldSpec] = &[field("Data to read", FieldKind::U8)];
static CONTROLLER_DATA_CHOICES: &[&[FieldSpec]] = &[EMPTY_FIELDS, CONTROLLER_DATA_SELECT];
static CONTROLLER_DATA_R: &[FieldSpec] = &[
    END_CODE,
    field("Controller model", FieldKind::Ascii(20)),
    field("Controller version", FieldKind::Ascii(20)),
    field("For system use", FieldKind::Bytes(40)),
    field("Program area size", FieldKind::Dec16),
    field("IOM size", FieldKind::Dec8),
    field("Number of DM words", FieldKind::Dec16),
    field("Timer/counter size", FieldKind::Dec8),
    field("Expansion DM size", FieldKind::Dec8),
    field("Number of steps/transitions", FieldKind::Dec16),
    field("Kind of memory card", FieldKind::Enum8(&MEMORY_CARD_TYPES)),
    field("Memory card size", FieldKind::Dec16),
];

static CONNECTION_DATA_C: &[FieldSpec] = &[
    field("Unit address", FieldKind::U8),
    field("Number of units", FieldKind::Dec8),
];
static CONNECTION_DATA_R: &[FieldSpec] = &[END_CODE, field("Number of units", FieldKind::Dec8)];
static CONNECTION_RECORD: &[FieldSpec] = &[
    field("Unit address", FieldKind::U8),
    field("Model number", FieldKind::Ascii(20)),
];

static CONTROLLER_STATUS_R: &[FieldSpec] = &[
    END_CODE,
    field("Status", FieldKind::Enum8(&CONTROLLER_STATUS)),
    field("Mode", FieldKind::Enum8(&CPU_MODES)),
    field("Fatal error data", FieldKind::Bits16(&FATAL_ERROR_LAYOUT)),
    field(
        "Non-fatal error data",
        FieldKind::Bits16(&NONFATAL_ERROR_LAYOUT),
    ),
    field("Message", FieldKind::Bits16(&MESSAGE_FLAGS_LAYOUT)),
    field("FAL/FALS number", FieldKind::Range16(&FAL_FALS_NUMBERS)),
    field("Error message", FieldKind::Ascii(16)),
];

static NETWORK_STATUS_R: &[FieldSpec] = &[
    END_CODE,
    field("Network member data", FieldKind::Bytes(31)),
    field("Communication cycle time", FieldKind::Dec16),
    field("Current polling unit node number", FieldKind::U8),
    field("Cyclic operation", FieldKind::U8),
    field("Cyclic transmission status", FieldKind::U8),
];

static DATA_LINK_STATUS_R: &[FieldSpec] = &[
    END_CODE,
    field("Status flags", FieldKind::U8),
    field("Master node number", FieldKind::U8),
];

static CYCLE_TIME_C: &[FieldSpec] = &[field("Parameter", FieldKind::Enum8(&CYCLE_TIME_PARAMETERS))];
static CYCLE_TIME_R: &[FieldSpec] = &[
    END_CODE,
    field("Average cycle time", FieldKind::Dec32),
    field("Maximum cycle time", FieldKind::Dec32),
    field("Minimum cycle time", FieldKind::Dec32),
];
static CYCLE_TIME_R_CHOICES: &[&[FieldSpec]] = &[END_ONLY, CYCLE_TIME_R];

static CLOCK_R: &[FieldSpec] = &[
    END_CODE,
    field("Year", FieldKind::U8),
    field("Month", FieldKind::U8),
    field("Date", FieldKind::U8),
    field("Hour", FieldKind::U8),
    field("Minute", FieldKind::U8),
    field("Second", FieldKind::U8),
    field("Day", FieldKind::Enum8(&DAYS_OF_WEEK)),
];
static CLOCK_W_5: &[FieldSpec] = &[
    field("Year", FieldKind::U8),
    field("Month", FieldKind::U8),
    field("Date", FieldKind::U8),
    field("Hour", FieldKind::U8),
    field("Minute", FieldKind::U8),
];
static CLOCK_W_6: &[FieldSpec] = &[
    field("Year", FieldKind::U8),
    field("Month", FieldKind::U8),
    field("Date", FieldKind::U8),
    field("Hour", FieldKind::U8),
    field("Minute", FieldKind::U8),
    field("Second", FieldKind::U8),
];
static CLOCK_W_7: &[FieldSpec] = &[
    field("Year", FieldKind::U8),
    field("Month", FieldKind::U8),
    field("Date", FieldKind::U8),
    field("Hour", FieldKind::U8),
    field("Minute", FieldKind::U8),
    field("Second", FieldKind::U8),
    field("Day", FieldKind::Enum8(&DAYS_OF_WEEK)),
];
static CLOCK_W_CHOICES: &[&[FieldSpec]] = &[CLOCK_W_5, CLOCK_W_6, CLOCK_W_7];

static BROADCAST_RESULTS_R: &[FieldSpec] =
    &[END_CODE, field("Number of receptions", FieldKind::Dec16)];

static MESSAGE_C: &[FieldSpec] = &[field(
    "Message selector",
    FieldKind::Bits16(&MESSAGE_FLAGS_LAYOUT),
)];

static ERROR_CLEAR_C: &[FieldSpec] = &[field(
    "Error reset FAL number",
    FieldKind::Range16(&FAL_FALS_NUMBERS),
)];

static LOG_READ_C: &[FieldSpec] = &[
    field("Beginning record number", FieldKind::Dec16),
    field("Number of records", FieldKind::Dec16),
];
static LOG_READ_R: &[FieldSpec] = &[
    END_CODE,
    field("Maximum number of stored records", FieldKind::Dec16),
    field("Number of stored records", FieldKind::Dec16),
    field("Number of records", FieldKind::Dec16),
];
static ERROR_LOG_RECORD: &[FieldSpec] = &[
    field("Error code", FieldKind::U16),
    field("Error contents", FieldKind::U16),
    field("Minute", FieldKind::U8),
    field("Second", FieldKind::U8),
    field("Day", FieldKind::U8),
    field("Hour", FieldKind::U8),
    field("Year", FieldKind::U8),
    field("Month", FieldKind::U8),
];
static ACCESS_LOG_RECORD: &[FieldSpec] = &[
    field("Source network address", FieldKind::U8),
    field("Source node number", FieldKind::U8),
    field("Source unit address", FieldKind::U8),
    field("Command code", FieldKind::U16),
    field("Minute", FieldKind::U8),
    field("Second", FieldKind::U8),
    field("Day", FieldKind::U8),
    field("Hour", FieldKind::U8),
    field("Year", FieldKind::U8),
    field("Month", FieldKind::U8),
];

static FILE_NAME_READ_C: &[FieldSpec] = &[
    DISK_NUMBER,
    field("Beginning file position", FieldKind::Dec16),
    field("Number of files", FieldKind::Dec16),
];
static FILE_NAME_READ_R: &[FieldSpec] = &[
    END_CODE,
    field("Volume label", FieldKind::Ascii(12)),
    FILE_DATE,
    field("Total capacity", FieldKind::Dec32),
    field("Unused capacity", FieldKind::Dec32),
    field("Total number of files", FieldKind::Dec16),
    field("Number of files", FieldKind::Dec16),
];
static FILE_RECORD: &[FieldSpec] = &[
    FILE_NAME,
    FILE_DATE,
    field("File capacity", FieldKind::Dec32),
];

static FILE_READ_C: &[FieldSpec] = &[
    DISK_NUMBER,
    FILE_NAME,
    field("File position", FieldKind::Dec32),
    field("Data length", FieldKind::Dec16),
];
static FILE_READ_R: &[FieldSpec] = &[
    END_CODE,
    field("File position", FieldKind::Dec32),
    field("Data length", FieldKind::Dec16),
];
static FILE_WRITE_C: &[FieldSpec] = &[
    DISK_NUMBER,
    field("Parameter", FieldKind::Enum16(&FILE_WRITE_PARAMETERS)),
    FILE_NAME,
    field("File position", FieldKind::Dec32),
    field("Data length", FieldKind::Dec16),
];

static DISK_ONLY: &[FieldSpec] = &[DISK_NUMBER];

static FILE_DELETE_C: &[FieldSpec] = &[DISK_NUMBER, field("Number of files", FieldKind::Dec16)];
static FILE_NAME_RECORD: &[FieldSpec] = &[FILE_NAME];
static FILE_DELETE_R: &[FieldSpec] = &[END_CODE, field("Number of files", FieldKind::Dec16)];

static VOLUME_SHORT_C: &[FieldSpec] = &[
    DISK_NUMBER,
    field("Parameter", FieldKind::Enum16(&VOLUME_PARAMETERS)),
];
static VOLUME_FULL_C: &[FieldSpec] = &[
    DISK_NUMBER,
    field("Parameter", FieldKind::Enum16(&VOLUME_PARAMETERS)),
    field("Volume label", FieldKind::Ascii(12)),
];
static VOLUME_CHOICES: &[&[FieldSpec]] = &[VOLUME_SHORT_C, VOLUME_FULL_C];

static FILE_COPY_C: &[FieldSpec] = &[
    field("Source disk number", FieldKind::Enum16(&DISK_NUMBERS)),
    field("Source file name", FieldKind::Ascii(12)),
    field("Destination disk number", FieldKind::Enum16(&DISK_NUMBERS)),
    field("Destination file name", FieldKind::Ascii(12)),
];
static FILE_RENAME_C: &[FieldSpec] = &[
    DISK_NUMBER,
    field("New file name", FieldKind::Ascii(12)),
    field("Old file name", FieldKind::Ascii(12)),
];
static FILE_CHECK_C: &[FieldSpec] = &[DISK_NUMBER, FILE_NAME];

static MEM_FILE_XFER_C: &[FieldSpec] = &[
    field("Parameter", FieldKind::Enum16(&TRANSFER_PARAMETERS)),
    MEMORY_AREA_CODE,
    BEGIN_ADDRESS,
    BEGIN_ADDRESS_BITS,
    NUM_ITEMS,
    DISK_NUMBER,
    FILE_NAME,
];
static MEM_FILE_XFER_R: &[FieldSpec] = &[END_CODE, NUM_ITEMS];
static PARAM_FILE_XFER_C: &[FieldSpec] = &[
    field("Parameter", FieldKind::Enum16(&TRANSFER_PARAMETERS)),
    PARAMETER_AREA_CODE,
    BEGIN_WORD,
    NUM_WORDS,
    DISK_NUMBER,
    FILE_NAME,
];
static PARAM_FILE_XFER_R: &[FieldSpec] = &[END_CODE, NUM_WORDS];
static PROGRAM_FILE_XFER_C: &[FieldSpec] = &[
    field("Parameter", FieldKind::Enum16(&TRANSFER_PARAMETERS)),
    PROGRAM_NUMBER,
    field("Beginning word", FieldKind::U32),
    field("Number of bytes", FieldKind::Dec32),
    DISK_NUMBER,
    FILE_NAME,
];
static PROGRAM_FILE_XFER_R: &[FieldSpec] =
    &[END_CODE, field("Number of bytes", FieldKind::Dec32)];

static FM_INDEX_C: &[FieldSpec] = &[
    field("Beginning block number", FieldKind::Dec16),
    field("Number of blocks", FieldKind::Dec8),
];
static FM_INDEX_R: &[FieldSpec] = &[
    END_CODE,
    field("Number of blocks remaining", FieldKind::Dec16),
    field("Total number of blocks", FieldKind::Dec16),
    field("Type of memory", FieldKind::Enum8(&FILE_MEMORY_TYPES)),
];
static FM_BLOCK_RECORD: &[FieldSpec] = &[
    field("Data type", FieldKind::U8),
    field("Control data", FieldKind::U8),
];
static FM_READ_C: &[FieldSpec] = &[field("Block number", FieldKind::Dec16)];
static FM_READ_R: &[FieldSpec] = &[
    END_CODE,
    field("Data type", FieldKind::U8),
    field("Control data", FieldKind::U8),
];
static FM_WRITE_C: &[FieldSpec] = &[
    field("Data type", FieldKind::U8),
    field("Control data", FieldKind::U8),
    field("Block number", FieldKind::Dec16),
];

static FORCE_C: &[FieldSpec] = &[field("Number of bits/flags", FieldKind::Dec16)];
static FORCE_RECORD: &[FieldSpec] = &[
    field(
        "Set/reset specification",
        FieldKind::Enum16(&FORCE_SPECIFICATIONS),
    ),
    MEMORY_AREA_CODE,
    BEGIN_ADDRESS,
    BEGIN_ADDRESS_BITS,
];

/// The full command catalog, in code order.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        code: 0x0101,
        name: "Memory Area Read",
        request: BodyShape::Fields(MEM_ADDR_COUNT),
        response: BodyShape::FieldsThenData(END_ONLY, "Data"),
    },
    CommandSpec {
        code: 0x0102,
        name: "Memory Area Write",
        request: BodyShape::FieldsThenData(MEM_ADDR_COUNT, "Data"),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0103,
        name: "Memory Area Fill",
        request: BodyShape::Fields(MEM_FILL_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0104,
        name: "Multiple Memory Area Read",
        request: BodyShape::FieldsThenRecords(EMPTY_FIELDS, "Memory area", MEM_ADDR),
        response: BodyShape::AreaData,
    },
    CommandSpec {
        code: 0x0105,
        name: "Memory Area Transfer",
        request: BodyShape::Fields(MEM_TRANSFER_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0201,
        name: "Parameter Area Read",
        request: BodyShape::Fields(PARAM_RANGE_C),
        response: BodyShape::FieldsThenData(PARAM_READ_R, "Data"),
    },
    CommandSpec {
        code: 0x0202,
        name: "Parameter Area Write",
        request: BodyShape::FieldsThenData(PARAM_RANGE_C, "Data"),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0203,
        name: "Parameter Area Clear",
        request: BodyShape::Fields(PARAM_CLEAR_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0220,
        name: "Data Link Table Read",
        request: BodyShape::Empty,
        response: BodyShape::FieldsThenData(LINK_TABLE_R, "Table data"),
    },
    CommandSpec {
        code: 0x0221,
        name: "Data Link Table Write",
        request: BodyShape::FieldsThenData(LINK_TABLE_W_C, "Table data"),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0304,
        name: "Program Area Protect",
        request: BodyShape::Fields(PROGRAM_PROTECT_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0305,
        name: "Program Area Protect Clear",
        request: BodyShape::Fields(PROGRAM_PROTECT_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0306,
        name: "Program Area Read",
        request: BodyShape::Fields(PROGRAM_RANGE_C),
        response: BodyShape::FieldsThenData(PROGRAM_RANGE_R, "Data"),
    },
    CommandSpec {
        code: 0x0307,
        name: "Program Area Write",
        request: BodyShape::FieldsThenData(PROGRAM_RANGE_C, "Data"),
        response: BodyShape::Fields(PROGRAM_RANGE_R),
    },
    CommandSpec {
        code: 0x0308,
        name: "Program Area Clear",
        request: BodyShape::Fields(PROGRAM_CLEAR_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0401,
        name: "Run",
        request: BodyShape::Choice(RUN_CHOICES),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0402,
        name: "Stop",
        request: BodyShape::Empty,
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0501,
        name: "Controller Data Read",
        request: BodyShape::Choice(CONTROLLER_DATA_CHOICES),
        response: BodyShape::Fields(CONTROLLER_DATA_R),
    },
    CommandSpec {
        code: 0x0502,
        name: "Connection Data Read",
        request: BodyShape::Fields(CONNECTION_DATA_C),
        response: BodyShape::FieldsThenRecords(CONNECTION_DATA_R, "Unit", CONNECTION_RECORD),
    },
    CommandSpec {
        code: 0x0601,
        name: "Controller Status Read",
        request: BodyShape::Empty,
        response: BodyShape::Fields(CONTROLLER_STATUS_R),
    },
    CommandSpec {
        code: 0x0602,
        name: "Network Status Read",
        request: BodyShape::Empty,
        response: BodyShape::FieldsThenData(NETWORK_STATUS_R, "Cyclic error counters"),
    },
    CommandSpec {
        code: 0x0603,
        name: "Data Link Status Read",
        request: BodyShape::Empty,
        response: BodyShape::FieldsThenData(DATA_LINK_STATUS_R, "Status data"),
    },
    CommandSpec {
        code: 0x0620,
        name: "Cycle Time Read",
        request: BodyShape::Fields(CYCLE_TIME_C),
        response: BodyShape::Choice(CYCLE_TIME_R_CHOICES),
    },
    CommandSpec {
        code: 0x0701,
        name: "Clock Read",
        request: BodyShape::Empty,
        response: BodyShape::Fields(CLOCK_R),
    },
    CommandSpec {
        code: 0x0702,
        name: "Clock Write",
        request: BodyShape::Choice(CLOCK_W_CHOICES),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0801,
        name: "Loop-back Test",
        request: BodyShape::FieldsThenData(EMPTY_FIELDS, "Test data"),
        response: BodyShape::FieldsThenData(END_ONLY, "Test data"),
    },
    CommandSpec {
        code: 0x0802,
        name: "Broadcast Test Results Read",
        request: BodyShape::Empty,
        response: BodyShape::Fields(BROADCAST_RESULTS_R),
    },
    CommandSpec {
        code: 0x0803,
        name: "Broadcast Test Data Send",
        request: BodyShape::FieldsThenData(EMPTY_FIELDS, "Test data"),
        response: BodyShape::Absent,
    },
    CommandSpec {
        code: 0x0920,
        name: "Message Read/Clear",
        request: BodyShape::Fields(MESSAGE_C),
        response: BodyShape::FieldsThenData(END_ONLY, "Message data"),
    },
    CommandSpec {
        code: 0x0C01,
        name: "Access Right Acquire",
        request: BodyShape::Fields(PROGRAM_NO_ONLY),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0C02,
        name: "Access Right Forced Acquire",
        request: BodyShape::Fields(PROGRAM_NO_ONLY),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x0C03,
        name: "Access Right Release",
        request: BodyShape::Fields(PROGRAM_NO_ONLY),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2101,
        name: "Error Clear",
        request: BodyShape::Fields(ERROR_CLEAR_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2102,
        name: "Error Log Read",
        request: BodyShape::Fields(LOG_READ_C),
        response: BodyShape::FieldsThenRecords(LOG_READ_R, "Error log record", ERROR_LOG_RECORD),
    },
    CommandSpec {
        code: 0x2103,
        name: "Error Log Clear",
        request: BodyShape::Empty,
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2140,
        name: "FINS Write Access Log Read",
        request: BodyShape::Fields(LOG_READ_C),
        response: BodyShape::FieldsThenRecords(LOG_READ_R, "Access log record", ACCESS_LOG_RECORD),
    },
    CommandSpec {
        code: 0x2141,
        name: "FINS Write Access Log Clear",
        request: BodyShape::Empty,
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2201,
        name: "File Name Read",
        request: BodyShape::Fields(FILE_NAME_READ_C),
        response: BodyShape::FieldsThenRecords(FILE_NAME_READ_R, "File", FILE_RECORD),
    },
    CommandSpec {
        code: 0x2202,
        name: "Single File Read",
        request: BodyShape::Fields(FILE_READ_C),
        response: BodyShape::FieldsThenData(FILE_READ_R, "File data"),
    },
    CommandSpec {
        code: 0x2203,
        name: "Single File Write",
        request: BodyShape::FieldsThenData(FILE_WRITE_C, "File data"),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2204,
        name: "File Memory Format",
        request: BodyShape::Fields(DISK_ONLY),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2205,
        name: "File Delete",
        request: BodyShape::FieldsThenRecords(FILE_DELETE_C, "File name", FILE_NAME_RECORD),
        response: BodyShape::Fields(FILE_DELETE_R),
    },
    CommandSpec {
        code: 0x2206,
        name: "Volume Label Create/Delete",
        request: BodyShape::Choice(VOLUME_CHOICES),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2207,
        name: "File Copy",
        request: BodyShape::Fields(FILE_COPY_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2208,
        name: "File Name Change",
        request: BodyShape::Fields(FILE_RENAME_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2209,
        name: "File Data Check",
        request: BodyShape::Fields(FILE_CHECK_C),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x220A,
        name: "Memory Area File Transfer",
        request: BodyShape::Fields(MEM_FILE_XFER_C),
        response: BodyShape::Fields(MEM_FILE_XFER_R),
    },
    CommandSpec {
        code: 0x220B,
        name: "Parameter Area File Transfer",
        request: BodyShape::Fields(PARAM_FILE_XFER_C),
        response: BodyShape::Fields(PARAM_FILE_XFER_R),
    },
    CommandSpec {
        code: 0x220C,
        name: "Program Area File Transfer",
        request: BodyShape::Fields(PROGRAM_FILE_XFER_C),
        response: BodyShape::Fields(PROGRAM_FILE_XFER_R),
    },
    CommandSpec {
        code: 0x220F,
        name: "File Memory Index Read",
        request: BodyShape::Fields(FM_INDEX_C),
        response: BodyShape::FieldsThenRecords(FM_INDEX_R, "Block", FM_BLOCK_RECORD),
    },
    CommandSpec {
        code: 0x2210,
        name: "File Memory Read",
        request: BodyShape::Fields(FM_READ_C),
        response: BodyShape::FieldsThenData(FM_READ_R, "File memory data"),
    },
    CommandSpec {
        code: 0x2211,
        name: "File Memory Write",
        request: BodyShape::FieldsThenData(FM_WRITE_C, "File memory data"),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2301,
        name: "Forced Set/Reset",
        request: BodyShape::FieldsThenRecords(FORCE_C, "Forced bit", FORCE_RECORD),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2302,
        name: "Forced Set/Reset Cancel",
        request: BodyShape::Empty,
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x230A,
        name: "Multiple Forced Status Read",
        request: BodyShape::FieldsThenRecords(EMPTY_FIELDS, "Memory area", MEM_ADDR),
        response: BodyShape::FieldsThenData(END_ONLY, "Forced status data"),
    },
    CommandSpec {
        code: 0x2601,
        name: "Name Set",
        request: BodyShape::FieldsThenData(EMPTY_FIELDS, "Name"),
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2602,
        name: "Name Delete",
        request: BodyShape::Empty,
        response: BodyShape::Fields(END_ONLY),
    },
    CommandSpec {
        code: 0x2603,
        name: "Name Read",
        request: BodyShape::Empty,
        response: BodyShape::FieldsThenData(END_ONLY, "Name"),
    },
];
