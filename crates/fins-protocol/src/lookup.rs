//! Total lookup tables for field display
//!
//! Raw integers on the wire are rendered through three table shapes: exact
//! value tables, inclusive range tables, and bitmask layouts. Every lookup
//! is total: an unmatched value falls back to an `Unknown (0x..)` label
//! instead of failing, since the input is untrusted wire data.

use std::borrow::Cow;

/// Exact value → label table. The first entry with a matching value wins,
/// in declaration order.
#[derive(Debug)]
pub struct ValueTable {
    pub entries: &'static [(u32, &'static str)],
}

impl ValueTable {
    pub fn get(&self, value: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, label)| *label)
    }

    /// Label for `value`, falling back to `Unknown (0x..)`.
    pub fn label(&self, value: u32) -> Cow<'static, str> {
        match self.get(value) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!("Unknown (0x{value:02X})")),
        }
    }
}

/// Inclusive range → label table. The first entry whose range contains the
/// value wins, in declaration order. The shipped tables are disjoint, but
/// the contract does not rely on it.
#[derive(Debug)]
pub struct RangeTable {
    pub entries: &'static [(u32, u32, &'static str)],
}

impl RangeTable {
    pub fn get(&self, value: u32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(lo, hi, _)| *lo <= value && value <= *hi)
            .map(|(_, _, label)| *label)
    }

    pub fn label(&self, value: u32) -> Cow<'static, str> {
        match self.get(value) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!("Unknown (0x{value:02X})")),
        }
    }
}

/// How one bitmask sub-field renders.
#[derive(Debug)]
pub enum BitKind {
    /// Single-bit flag with distinct labels for each state
    Flag {
        set: &'static str,
        clear: &'static str,
    },
    /// Multi-bit value rendered through a value table
    Value(&'static ValueTable),
    /// Multi-bit value shown numerically
    Plain,
}

/// One named sub-field of a bitmask layout.
#[derive(Debug)]
pub struct BitField {
    pub name: &'static str,
    pub mask: u32,
    pub kind: BitKind,
}

impl BitField {
    /// Masked-and-shifted sub-value out of the shared word.
    pub fn extract(&self, word: u32) -> u32 {
        if self.mask == 0 {
            return 0;
        }
        (word & self.mask) >> self.mask.trailing_zeros()
    }

    /// Rendered `name: value` text for the sub-field.
    pub fn describe(&self, word: u32) -> String {
        let value = self.extract(word);
        match &self.kind {
            BitKind::Flag { set, clear } => {
                format!("{}: {}", self.name, if value != 0 { set } else { clear })
            }
            BitKind::Value(table) => format!("{}: {}", self.name, table.label(value)),
            BitKind::Plain => format!("{}: 0x{value:02X}", self.name),
        }
    }
}

/// Ordered decomposition of a shared 8/16/32-bit integer into sub-fields.
#[derive(Debug)]
pub struct BitLayout {
    pub fields: &'static [BitField],
}
