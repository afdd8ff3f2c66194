//! Static field catalog and display tables for the FINS protocol
//!
//! Everything here is constructed at compile time and shared read-only by
//! every decode. A [`FieldSpec`] names one wire field and how to decode and
//! render it; the tables below give raw integers their protocol meaning
//! (memory areas, end codes, controller modes, and so on).

use crate::lookup::{BitField, BitKind, BitLayout, RangeTable, ValueTable};

/// Declarative descriptor for one wire field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Wire width plus decoded semantic of a field. Integer kinds are
/// big-endian; `U*` render hexadecimal, `Dec*` decimal.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    Dec8,
    Dec16,
    Dec32,
    /// 8-bit value rendered through a value table
    Enum8(&'static ValueTable),
    /// 16-bit value rendered through a value table
    Enum16(&'static ValueTable),
    /// 16-bit value rendered through a range table
    Range16(&'static RangeTable),
    /// 8-bit composite decomposed into bitmask sub-fields
    Bits8(&'static BitLayout),
    /// 16-bit composite decomposed into bitmask sub-fields
    Bits16(&'static BitLayout),
    /// 32-bit composite decomposed into bitmask sub-fields
    Bits32(&'static BitLayout),
    /// Fixed-length ASCII text
    Ascii(usize),
    /// Fixed-length opaque bytes
    Bytes(usize),
}

impl FieldKind {
    pub fn width(&self) -> usize {
        match self {
            FieldKind::U8 | FieldKind::Dec8 | FieldKind::Enum8(_) | FieldKind::Bits8(_) => 1,
            FieldKind::U16
            | FieldKind::Dec16
            | FieldKind::Enum16(_)
            | FieldKind::Range16(_)
            | FieldKind::Bits16(_) => 2,
            FieldKind::U32 | FieldKind::Dec32 | FieldKind::Bits32(_) => 4,
            FieldKind::Ascii(n) | FieldKind::Bytes(n) => *n,
        }
    }
}

/// Total wire width of a field sequence.
pub fn fields_width(fields: &[FieldSpec]) -> usize {
    fields.iter().map(|f| f.kind.width()).sum()
}

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// ICF (information control field) bit layout. Bit 6 carries the frame
/// direction; the dissector reads it through [`crate::header`], the layout
/// here only drives display.
pub static ICF_LAYOUT: BitLayout = BitLayout {
    fields: &[
        BitField {
            name: "Gateway",
            mask: 0x80,
            kind: BitKind::Flag {
                set: "Use gateway",
                clear: "Don't use gateway",
            },
        },
        BitField {
            name: "Data type",
            mask: 0x40,
            kind: BitKind::Flag {
                set: "Response",
                clear: "Command",
            },
        },
        BitField {
            name: "Reserved",
            mask: 0x3E,
            kind: BitKind::Plain,
        },
        BitField {
            name: "Response setting",
            mask: 0x01,
            kind: BitKind::Flag {
                set: "Response not required",
                clear: "Response required",
            },
        },
    ],
};

// ---------------------------------------------------------------------------
// Memory areas
// ---------------------------------------------------------------------------

/// Memory area designation codes. Bit-access areas carry one data byte per
/// item, word-access areas two, forced-status word areas and registers four.
pub static MEMORY_AREAS: ValueTable = ValueTable {
    entries: &[
        (0x00, "CIO area (bit)"),
        (0x01, "Work area (bit)"),
        (0x02, "Holding area (bit)"),
        (0x03, "Auxiliary area (bit)"),
        (0x04, "Timer completion flag"),
        (0x05, "Counter completion flag"),
        (0x06, "Task flag"),
        (0x07, "Step flag"),
        (0x09, "Condition flag"),
        (0x1B, "Transition flag"),
        (0x80, "CIO area (word)"),
        (0x81, "Work area (word)"),
        (0x82, "Holding area (word)"),
        (0x84, "Auxiliary area (word)"),
        (0x85, "Timer PV"),
        (0x89, "Counter PV"),
        (0x90, "DM area (word)"),
        (0x91, "EM area bank 0 (word)"),
        (0x92, "EM area bank 1 (word)"),
        (0x93, "EM area bank 2 (word)"),
        (0x94, "EM area bank 3 (word)"),
        (0x95, "EM area bank 4 (word)"),
        (0x96, "EM area bank 5 (word)"),
        (0x97, "EM area bank 6 (word)"),
        (0x98, "EM area bank 7 (word)"),
        (0x9C, "EM area current bank (word)"),
        (0xC0, "CIO area (word, with forced status)"),
        (0xC1, "Work area (word, with forced status)"),
        (0xC2, "Holding area (word, with forced status)"),
        (0xDC, "Index register"),
    ],
};

/// Per-area data width for Multiple Memory Area Read records. A closed
/// mapping with a defined "unknown" outcome: a code outside this table has
/// no known width and the record loop cannot safely continue.
pub static MEMORY_AREA_DATA_WIDTHS: &[(u8, usize)] = &[
    (0x00, 1),
    (0x01, 1),
    (0x02, 1),
    (0x03, 1),
    (0x04, 1),
    (0x05, 1),
    (0x06, 1),
    (0x07, 1),
    (0x09, 1),
    (0x1B, 1),
    (0x80, 2),
    (0x81, 2),
    (0x82, 2),
    (0x84, 2),
    (0x85, 2),
    (0x89, 2),
    (0x90, 2),
    (0x91, 2),
    (0x92, 2),
    (0x93, 2),
    (0x94, 2),
    (0x95, 2),
    (0x96, 2),
    (0x97, 2),
    (0x98, 2),
    (0x9C, 2),
    (0xC0, 4),
    (0xC1, 4),
    (0xC2, 4),
    (0xDC, 4),
];

/// Data width for one memory-area record, or `None` for unknown codes.
pub fn memory_area_data_width(code: u8) -> Option<usize> {
    MEMORY_AREA_DATA_WIDTHS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, w)| *w)
}

// ---------------------------------------------------------------------------
// Parameter areas
// ---------------------------------------------------------------------------

pub static PARAMETER_AREAS: ValueTable = ValueTable {
    entries: &[
        (0x8010, "PLC setup area"),
        (0x8012, "I/O table registration area"),
        (0x8013, "Routing table area"),
        (0x8002, "CPU bus unit settings area"),
    ],
};

// ---------------------------------------------------------------------------
// Controller status and modes
// ---------------------------------------------------------------------------

pub static CONTROLLER_STATUS: ValueTable = ValueTable {
    entries: &[
        (0x00, "Stop"),
        (0x01, "Run"),
        (0x80, "CPU on standby"),
    ],
};

pub static CPU_MODES: ValueTable = ValueTable {
    entries: &[
        (0x00, "PROGRAM mode"),
        (0x01, "DEBUG mode"),
        (0x02, "MONITOR mode"),
        (0x04, "RUN mode"),
    ],
};

pub static FATAL_ERROR_LAYOUT: BitLayout = BitLayout {
    fields: &[
        BitField {
            name: "Memory error",
            mask: 0x8000,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "I/O bus error",
            mask: 0x4000,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "Duplication error",
            mask: 0x2000,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "Inner board error",
            mask: 0x1000,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "I/O point overflow",
            mask: 0x0800,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "I/O setting error",
            mask: 0x0400,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "Program error",
            mask: 0x0200,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "Cycle time over",
            mask: 0x0100,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "FALS error",
            mask: 0x0040,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
    ],
};

pub static NONFATAL_ERROR_LAYOUT: BitLayout = BitLayout {
    fields: &[
        BitField {
            name: "FAL error",
            mask: 0x8000,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "Option board error",
            mask: 0x1000,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "Power supply error",
            mask: 0x0800,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "CPU bus unit error",
            mask: 0x0400,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "Battery error",
            mask: 0x0100,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "SYSMAC BUS error",
            mask: 0x0040,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
        BitField {
            name: "Special I/O unit error",
            mask: 0x0020,
            kind: BitKind::Flag {
                set: "Present",
                clear: "Absent",
            },
        },
    ],
};

/// Message-presence word of Controller Status Read and the selector word of
/// Message Read/Clear: one flag per message number.
pub static MESSAGE_FLAGS_LAYOUT: BitLayout = BitLayout {
    fields: &[
        BitField {
            name: "FAL/FALS read",
            mask: 0x8000,
            kind: BitKind::Flag {
                set: "Yes",
                clear: "No",
            },
        },
        BitField {
            name: "Message clear",
            mask: 0x4000,
            kind: BitKind::Flag {
                set: "Yes",
                clear: "No",
            },
        },
        BitField {
            name: "Message 7",
            mask: 0x0080,
            kind: BitKind::Flag {
                set: "Message",
                clear: "No message",
            },
        },
        BitField {
            name: "Message 6",
            mask: 0x0040,
            kind: BitKind::Flag {
                set: "Message",
                clear: "No message",
            },
        },
        BitField {
            name: "Message 5",
            mask: 0x0020,
            kind: BitKind::Flag {
                set: "Message",
                clear: "No message",
            },
        },
        BitField {
            name: "Message 4",
            mask: 0x0010,
            kind: BitKind::Flag {
                set: "Message",
                clear: "No message",
            },
        },
        BitField {
            name: "Message 3",
            mask: 0x0008,
            kind: BitKind::Flag {
                set: "Message",
                clear: "No message",
            },
        },
        BitField {
            name: "Message 2",
            mask: 0x0004,
            kind: BitKind::Flag {
                set: "Message",
                clear: "No message",
            },
        },
        BitField {
            name: "Message 1",
            mask: 0x0002,
            kind: BitKind::Flag {
                set: "Message",
                clear: "No message",
            },
        },
        BitField {
            name: "Message 0",
            mask: 0x0001,
            kind: BitKind::Flag {
                set: "Message",
                clear: "No message",
            },
        },
    ],
};

/// FAL/FALS numbers reported in Controller Status Read and targeted by
/// Error Clear. First containing range wins.
pub static FAL_FALS_NUMBERS: RangeTable = RangeTable {
    entries: &[
        (0x0000, 0x0000, "No FAL/FALS error"),
        (0x0001, 0x01FF, "FAL number"),
        (0x0201, 0x03FF, "FALS number"),
        (0xFFFE, 0xFFFE, "Clears the most recent error"),
        (0xFFFF, 0xFFFF, "Clears all errors"),
    ],
};

pub static DAYS_OF_WEEK: ValueTable = ValueTable {
    entries: &[
        (0x00, "Sunday"),
        (0x01, "Monday"),
        (0x02, "Tuesday"),
        (0x03, "Wednesday"),
        (0x04, "Thursday"),
        (0x05, "Friday"),
        (0x06, "Saturday"),
    ],
};

pub static CYCLE_TIME_PARAMETERS: ValueTable = ValueTable {
    entries: &[
        (0x00, "Initializes cycle time statistics"),
        (0x01, "Reads cycle time statistics"),
    ],
};

// ---------------------------------------------------------------------------
// File memory
// ---------------------------------------------------------------------------

pub static DISK_NUMBERS: ValueTable = ValueTable {
    entries: &[(0x8000, "Memory card"), (0x8001, "EM file memory")],
};

pub static TRANSFER_PARAMETERS: ValueTable = ValueTable {
    entries: &[
        (0x0000, "Data transfer from the memory area to the file"),
        (0x0001, "Data transfer from the file to the memory area"),
        (0x0002, "Data compared"),
    ],
};

pub static FILE_WRITE_PARAMETERS: ValueTable = ValueTable {
    entries: &[
        (0x0000, "Write (new file)"),
        (0x0001, "Overwrite"),
        (0x0002, "Append"),
    ],
};

pub static VOLUME_PARAMETERS: ValueTable = ValueTable {
    entries: &[
        (0x0000, "Create/overwrite volume label"),
        (0x0001, "Create volume label (no overwrite)"),
        (0xFFFF, "Delete volume label"),
    ],
};

pub static MEMORY_CARD_TYPES: ValueTable = ValueTable {
    entries: &[
        (0x00, "No memory card"),
        (0x01, "SPRAM"),
        (0x02, "EPROM"),
        (0x03, "EEPROM"),
    ],
};

pub static FILE_MEMORY_TYPES: ValueTable = ValueTable {
    entries: &[
        (0x00, "No file memory"),
        (0x01, "SRAM"),
        (0x02, "First half RAM, second half ROM"),
        (0x03, "ROM"),
    ],
};

/// Packed file timestamp: year/month/day/hour/minute/two-second units.
pub static FILE_DATE_LAYOUT: BitLayout = BitLayout {
    fields: &[
        BitField {
            name: "Year",
            mask: 0xFE00_0000,
            kind: BitKind::Plain,
        },
        BitField {
            name: "Month",
            mask: 0x01E0_0000,
            kind: BitKind::Plain,
        },
        BitField {
            name: "Day",
            mask: 0x001F_0000,
            kind: BitKind::Plain,
        },
        BitField {
            name: "Hour",
            mask: 0x0000_F800,
            kind: BitKind::Plain,
        },
        BitField {
            name: "Minute",
            mask: 0x0000_07E0,
            kind: BitKind::Plain,
        },
        BitField {
            name: "Second (x2)",
            mask: 0x0000_001F,
            kind: BitKind::Plain,
        },
    ],
};

// ---------------------------------------------------------------------------
// Forced set/reset
// ---------------------------------------------------------------------------

pub static FORCE_SPECIFICATIONS: ValueTable = ValueTable {
    entries: &[
        (0x0000, "Forced reset"),
        (0x0001, "Forced set"),
        (0x8000, "Forced status released, bit reset"),
        (0x8001, "Forced status released, bit set"),
        (0xFFFF, "Forced status released"),
    ],
};

// ---------------------------------------------------------------------------
// Response (end) codes
// ---------------------------------------------------------------------------

/// Main/sub end code pairs returned in every response body.
pub static RESPONSE_CODES: ValueTable = ValueTable {
    entries: &[
        (0x0000, "Normal completion"),
        (0x0001, "Service canceled"),
        (0x0101, "Local node not in network"),
        (0x0102, "Token timeout"),
        (0x0103, "Retries failed"),
        (0x0104, "Too many send frames"),
        (0x0105, "Node address range error"),
        (0x0106, "Node address duplication"),
        (0x0201, "Destination node not in network"),
        (0x0202, "Unit missing"),
        (0x0203, "Third node missing"),
        (0x0204, "Destination node busy"),
        (0x0205, "Response timeout"),
        (0x0301, "Communications controller error"),
        (0x0302, "CPU unit error"),
        (0x0303, "Controller error"),
        (0x0304, "Unit number error"),
        (0x0401, "Undefined command"),
        (0x0402, "Not supported by model/version"),
        (0x0501, "Destination address setting error"),
        (0x0502, "No routing tables"),
        (0x0503, "Routing table error"),
        (0x0504, "Too many relays"),
        (0x1001, "Command too long"),
        (0x1002, "Command too short"),
        (0x1003, "Elements/data don't match"),
        (0x1004, "Command format error"),
        (0x1005, "Header error"),
        (0x1101, "Area classification missing"),
        (0x1102, "Access size error"),
        (0x1103, "Address range error"),
        (0x1104, "Address range exceeded"),
        (0x1106, "Program missing"),
        (0x1109, "Relational error"),
        (0x110A, "Duplicate data access"),
        (0x110B, "Response too long"),
        (0x110C, "Parameter error"),
        (0x2002, "Protected"),
        (0x2003, "Table missing"),
        (0x2004, "Data missing"),
        (0x2005, "Program missing"),
        (0x2006, "File missing"),
        (0x2007, "Data mismatch"),
        (0x2101, "Read-only area"),
        (0x2102, "Protected area"),
        (0x2103, "Cannot register"),
        (0x2105, "Program missing"),
        (0x2106, "File missing"),
        (0x2107, "File name already exists"),
        (0x2108, "Cannot change"),
        (0x2201, "Not possible during execution"),
        (0x2202, "Not possible while running"),
        (0x2203, "Wrong PLC mode (PROGRAM)"),
        (0x2204, "Wrong PLC mode (DEBUG)"),
        (0x2205, "Wrong PLC mode (MONITOR)"),
        (0x2206, "Wrong PLC mode (RUN)"),
        (0x2207, "Specified node not polling node"),
        (0x2208, "Step cannot be executed"),
        (0x2301, "File device missing"),
        (0x2302, "Memory missing"),
        (0x2303, "Clock missing"),
        (0x2401, "Table missing"),
        (0x2502, "Memory error"),
        (0x2503, "I/O setting error"),
        (0x2504, "Too many I/O points"),
        (0x2505, "CPU bus error"),
        (0x2506, "I/O duplication"),
        (0x2507, "I/O bus error"),
        (0x2509, "SYSMAC BUS/2 error"),
        (0x250A, "CPU bus unit error"),
        (0x250D, "SYSMAC BUS number duplication"),
        (0x250F, "Memory error"),
        (0x2510, "SYSMAC BUS terminator missing"),
        (0x2601, "No protection"),
        (0x2602, "Incorrect password"),
        (0x2604, "Protected"),
        (0x2605, "Service already executing"),
        (0x2606, "Service stopped"),
        (0x2607, "No execution right"),
        (0x2608, "Settings not complete"),
        (0x2609, "Necessary items not set"),
        (0x260A, "Number already defined"),
        (0x260B, "Error will not clear"),
        (0x3001, "No access right"),
        (0x4001, "Service aborted"),
    ],
};
