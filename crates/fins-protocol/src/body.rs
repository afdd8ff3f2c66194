//! Body shape interpreters
//!
//! One interpreter per [`BodyShape`] variant, shared by every command in the
//! catalog. Each branch validates the remaining length against the shape
//! before consuming anything; a mismatch annotates and stops that body
//! without rolling back fields already emitted. Read errors inside a branch
//! are downgraded to a `Truncated` annotation the same way; nothing in here
//! aborts the decode or panics on wire data.

use std::ops::Range;

use crate::commands::{BodyShape, END_CODE};
use crate::cursor::Cursor;
use crate::error::ReadError;
use crate::fields::{fields_width, memory_area_data_width, FieldKind, FieldSpec, MEMORY_AREAS};
use crate::lookup::BitLayout;
use crate::tree::{AnnotationKind, FieldTree, FieldValue, NodeId, Severity};
use crate::DissectorConfig;

/// Whether a body parse ran to the end of its shape.
///
/// `Stopped` suppresses the caller's trailing-length check: either the
/// mismatch was already annotated, or the legacy-compatibility mode chose to
/// stay silent about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyOutcome {
    Completed,
    Stopped,
}

/// Walk one body according to its shape.
pub(crate) fn parse_body(
    shape: &BodyShape,
    cur: &mut Cursor<'_>,
    tree: &mut FieldTree,
    parent: NodeId,
    config: &DissectorConfig,
) -> BodyOutcome {
    match shape {
        BodyShape::Empty => {
            if cur.remaining() != 0 {
                // The zero-length expectation predates dispatch and always
                // warns, legacy mode included
                tracing::warn!(
                    "Body expected to be empty carries {} bytes",
                    cur.remaining()
                );
                tree.annotate(
                    parent,
                    Severity::Warning,
                    AnnotationKind::MalformedLength,
                    "Unexpected Length (Should be 0)",
                );
                return BodyOutcome::Stopped;
            }
            BodyOutcome::Completed
        }
        BodyShape::Absent => {
            tracing::warn!("No message is defined for this direction of the command");
            tree.annotate(
                parent,
                Severity::Warning,
                AnnotationKind::MalformedLength,
                "Unexpected message (none is defined for this direction)",
            );
            BodyOutcome::Stopped
        }
        BodyShape::Fields(fields) => {
            let want = fields_width(fields);
            if cur.remaining() != want {
                return length_mismatch(
                    tree,
                    parent,
                    config,
                    format!("Unexpected Length (Should be {want})"),
                );
            }
            match emit_fields(fields, cur, tree, parent) {
                Ok(()) => BodyOutcome::Completed,
                Err(e) => truncated(tree, parent, e),
            }
        }
        BodyShape::Choice(alts) => {
            let Some(fields) = alts
                .iter()
                .find(|fields| fields_width(fields) == cur.remaining())
            else {
                return length_mismatch(tree, parent, config, "Unexpected Length".to_string());
            };
            match emit_fields(fields, cur, tree, parent) {
                Ok(()) => BodyOutcome::Completed,
                Err(e) => truncated(tree, parent, e),
            }
        }
        BodyShape::FieldsThenData(fields, tail_label) => {
            let min = fields_width(fields);
            if cur.remaining() < min {
                return length_mismatch(
                    tree,
                    parent,
                    config,
                    format!("Unexpected Length (Should be >= {min})"),
                );
            }
            let result = emit_fields(fields, cur, tree, parent)
                .and_then(|()| emit_tail(tail_label, cur, tree, parent));
            match result {
                Ok(()) => BodyOutcome::Completed,
                Err(e) => truncated(tree, parent, e),
            }
        }
        BodyShape::FieldsThenRecords(fields, record_label, record) => {
            let min = fields_width(fields);
            if cur.remaining() < min {
                return length_mismatch(
                    tree,
                    parent,
                    config,
                    format!("Unexpected Length (Should be >= {min})"),
                );
            }
            if let Err(e) = emit_fields(fields, cur, tree, parent) {
                return truncated(tree, parent, e);
            }
            let record_width = fields_width(record);
            if record_width == 0 {
                return BodyOutcome::Completed;
            }
            // Bytes smaller than one record are left unconsumed; the
            // trailing-length check flags them
            let mut index = 0usize;
            while cur.remaining() >= record_width {
                let at = cur.offset();
                let group = tree.add(
                    parent,
                    format!("{record_label} {index}"),
                    at..at + record_width,
                    None,
                );
                if let Err(e) = emit_fields(record, cur, tree, group) {
                    return truncated(tree, group, e);
                }
                index += 1;
            }
            BodyOutcome::Completed
        }
        BodyShape::AreaData => {
            if cur.remaining() < 2 {
                return length_mismatch(
                    tree,
                    parent,
                    config,
                    "Unexpected Length (Should be >= 2)".to_string(),
                );
            }
            if let Err(e) = emit_field(&END_CODE, cur, tree, parent) {
                return truncated(tree, parent, e);
            }
            parse_area_data(cur, tree, parent)
        }
    }
}

/// The Multiple Memory Area Read record loop: each record opens with a
/// memory-area code whose table entry fixes the data width that follows.
/// A code outside the width table is a hard stop, since there is no safe
/// way to skip an unknown record.
fn parse_area_data(cur: &mut Cursor<'_>, tree: &mut FieldTree, parent: NodeId) -> BodyOutcome {
    while cur.remaining() > 0 {
        let at = cur.offset();
        let code = match cur.read_u8() {
            Ok(code) => code,
            Err(e) => return truncated(tree, parent, e),
        };
        let Some(width) = memory_area_data_width(code) else {
            tracing::warn!("Unknown memory area code 0x{code:02X}");
            tree.annotate(
                parent,
                Severity::Warning,
                AnnotationKind::UnknownAreaCode,
                format!("Unknown Memory-Area-Code (0x{code:02X})"),
            );
            return BodyOutcome::Stopped;
        };
        if cur.remaining() < width {
            tree.annotate(
                parent,
                Severity::Warning,
                AnnotationKind::MalformedLength,
                "Unexpected Length",
            );
            return BodyOutcome::Stopped;
        }
        let group = tree.add(parent, "Memory area read data", at..at + 1 + width, None);
        tree.add(
            group,
            format!(
                "Memory area code: {} (0x{code:02X})",
                MEMORY_AREAS.label(code as u32)
            ),
            at..at + 1,
            Some(FieldValue::U8(code)),
        );
        let data_at = cur.offset();
        let (label, value) = match width {
            1 => match cur.read_u8() {
                Ok(v) => (format!("Data: 0x{v:02X}"), FieldValue::U8(v)),
                Err(e) => return truncated(tree, group, e),
            },
            2 => match cur.read_u16() {
                Ok(v) => (format!("Data: 0x{v:04X}"), FieldValue::U16(v)),
                Err(e) => return truncated(tree, group, e),
            },
            _ => match cur.read_u32() {
                Ok(v) => (format!("Data: 0x{v:08X}"), FieldValue::U32(v)),
                Err(e) => return truncated(tree, group, e),
            },
        };
        tree.add(group, label, data_at..data_at + width, Some(value));
    }
    BodyOutcome::Completed
}

fn length_mismatch(
    tree: &mut FieldTree,
    parent: NodeId,
    config: &DissectorConfig,
    message: String,
) -> BodyOutcome {
    if config.legacy_silent_mismatch {
        tracing::debug!("Length mismatch suppressed in legacy mode: {message}");
    } else {
        tracing::warn!("Body length does not fit any expected shape: {message}");
        tree.annotate(
            parent,
            Severity::Warning,
            AnnotationKind::MalformedLength,
            message,
        );
    }
    BodyOutcome::Stopped
}

fn truncated(tree: &mut FieldTree, parent: NodeId, err: ReadError) -> BodyOutcome {
    tracing::warn!("Read truncated inside a length-checked branch: {err}");
    tree.annotate(
        parent,
        Severity::Warning,
        AnnotationKind::Truncated,
        err.to_string(),
    );
    BodyOutcome::Stopped
}

fn emit_fields(
    fields: &[FieldSpec],
    cur: &mut Cursor<'_>,
    tree: &mut FieldTree,
    parent: NodeId,
) -> Result<(), ReadError> {
    for spec in fields {
        emit_field(spec, cur, tree, parent)?;
    }
    Ok(())
}

/// Decode one field and append its node (plus bitmask children) under
/// `parent`.
pub(crate) fn emit_field(
    spec: &FieldSpec,
    cur: &mut Cursor<'_>,
    tree: &mut FieldTree,
    parent: NodeId,
) -> Result<NodeId, ReadError> {
    let at = cur.offset();
    let name = spec.name;
    let width = spec.kind.width();
    let range = at..at + width;

    let id = match spec.kind {
        FieldKind::U8 => {
            let v = cur.read_u8()?;
            tree.add(
                parent,
                format!("{name}: 0x{v:02X}"),
                range,
                Some(FieldValue::U8(v)),
            )
        }
        FieldKind::U16 => {
            let v = cur.read_u16()?;
            tree.add(
                parent,
                format!("{name}: 0x{v:04X}"),
                range,
                Some(FieldValue::U16(v)),
            )
        }
        FieldKind::U32 => {
            let v = cur.read_u32()?;
            tree.add(
                parent,
                format!("{name}: 0x{v:08X}"),
                range,
                Some(FieldValue::U32(v)),
            )
        }
        FieldKind::Dec8 => {
            let v = cur.read_u8()?;
            tree.add(
                parent,
                format!("{name}: {v}"),
                range,
                Some(FieldValue::U8(v)),
            )
        }
        FieldKind::Dec16 => {
            let v = cur.read_u16()?;
            tree.add(
                parent,
                format!("{name}: {v}"),
                range,
                Some(FieldValue::U16(v)),
            )
        }
        FieldKind::Dec32 => {
            let v = cur.read_u32()?;
            tree.add(
                parent,
                format!("{name}: {v}"),
                range,
                Some(FieldValue::U32(v)),
            )
        }
        FieldKind::Enum8(table) => {
            let v = cur.read_u8()?;
            tree.add(
                parent,
                format!("{name}: {} (0x{v:02X})", table.label(v as u32)),
                range,
                Some(FieldValue::U8(v)),
            )
        }
        FieldKind::Enum16(table) => {
            let v = cur.read_u16()?;
            tree.add(
                parent,
                format!("{name}: {} (0x{v:04X})", table.label(v as u32)),
                range,
                Some(FieldValue::U16(v)),
            )
        }
        FieldKind::Range16(table) => {
            let v = cur.read_u16()?;
            tree.add(
                parent,
                format!("{name}: {} (0x{v:04X})", table.label(v as u32)),
                range,
                Some(FieldValue::U16(v)),
            )
        }
        FieldKind::Bits8(layout) => {
            let v = cur.read_u8()?;
            let id = tree.add(
                parent,
                format!("{name}: 0x{v:02X}"),
                range.clone(),
                Some(FieldValue::U8(v)),
            );
            add_bit_children(tree, id, range, v as u32, layout);
            id
        }
        FieldKind::Bits16(layout) => {
            let v = cur.read_u16()?;
            let id = tree.add(
                parent,
                format!("{name}: 0x{v:04X}"),
                range.clone(),
                Some(FieldValue::U16(v)),
            );
            add_bit_children(tree, id, range, v as u32, layout);
            id
        }
        FieldKind::Bits32(layout) => {
            let v = cur.read_u32()?;
            let id = tree.add(
                parent,
                format!("{name}: 0x{v:08X}"),
                range.clone(),
                Some(FieldValue::U32(v)),
            );
            add_bit_children(tree, id, range, v, layout);
            id
        }
        FieldKind::Ascii(n) => {
            let bytes = cur.read_bytes(n)?;
            let text = String::from_utf8_lossy(bytes);
            let trimmed = text.trim_end_matches(['\0', ' ']);
            tree.add(
                parent,
                format!("{name}: {trimmed}"),
                range,
                Some(FieldValue::Text(trimmed.to_string())),
            )
        }
        FieldKind::Bytes(n) => {
            let bytes = cur.read_bytes(n)?;
            tree.add(
                parent,
                format!("{name}: {n} bytes"),
                range,
                Some(FieldValue::Bytes(bytes.to_vec())),
            )
        }
    };
    Ok(id)
}

/// One child node per bitmask sub-field, in layout order.
pub(crate) fn add_bit_children(
    tree: &mut FieldTree,
    parent: NodeId,
    range: Range<usize>,
    word: u32,
    layout: &BitLayout,
) {
    for bit_field in layout.fields {
        tree.add(parent, bit_field.describe(word), range.clone(), None);
    }
}

/// Whatever remains becomes one opaque tail node.
fn emit_tail(
    label: &str,
    cur: &mut Cursor<'_>,
    tree: &mut FieldTree,
    parent: NodeId,
) -> Result<(), ReadError> {
    let rest = cur.remaining();
    if rest == 0 {
        return Ok(());
    }
    let at = cur.offset();
    let bytes = cur.read_bytes(rest)?;
    tree.add(
        parent,
        format!("{label} ({rest} bytes)"),
        at..at + rest,
        Some(FieldValue::Bytes(bytes.to_vec())),
    );
    Ok(())
}
