//! FINS header recognition and parsing
//!
//! Every frame opens with a fixed 12-byte header: an ICF flags byte (whose
//! bit 6 separates commands from responses), two marker bytes, six
//! addressing bytes, a service id, and the 16-bit command code. The marker
//! bytes double as the recognition heuristic: a payload that does not carry
//! them is declined as "not FINS" rather than reported as malformed.

use crate::body::add_bit_children;
use crate::commands;
use crate::cursor::Cursor;
use crate::error::ReadError;
use crate::fields::ICF_LAYOUT;
use crate::tree::{FieldTree, FieldValue, NodeId};

/// Fixed header size; also the recognition minimum.
pub const HEADER_LEN: usize = 12;

/// ICF bit 7: frame passes through a gateway.
pub const ICF_GATEWAY: u8 = 0x80;
/// ICF bit 6: set for responses, clear for commands.
pub const ICF_RESPONSE: u8 = 0x40;
/// ICF bit 0: set when the sender does not want a response.
pub const ICF_NO_RESPONSE_REQUIRED: u8 = 0x01;

/// Which half of the command/response exchange a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Command,
    Response,
}

/// Decoded fixed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    pub icf: u8,
    pub direction: Direction,
    pub gateway_count: u8,
    pub dest_network: u8,
    pub dest_node: u8,
    pub dest_unit: u8,
    pub src_network: u8,
    pub src_node: u8,
    pub src_unit: u8,
    pub service_id: u8,
    pub command_code: u16,
}

/// Header parse result plus the node ids later stages annotate.
pub(crate) struct ParsedHeader {
    pub header: Header,
    pub command_node: NodeId,
}

/// Recognition heuristic: reported length covers a header and the two
/// marker bytes hold their required constants. A `false` here means "not
/// ours": the caller declines the payload without producing any output.
pub fn looks_like_fins(data: &[u8], reported_len: usize) -> bool {
    reported_len >= HEADER_LEN && data.len() > 2 && data[1] == 0x00 && data[2] == 0x02
}

/// Decode the fixed header, populating a header subtree.
///
/// The recognition gate makes truncation here unreachable for honest
/// captures, but a capture that kept fewer bytes than it reported can still
/// trip it; the error is handled like any other truncated read.
pub(crate) fn parse(cur: &mut Cursor<'_>, tree: &mut FieldTree) -> Result<ParsedHeader, ReadError> {
    let start = cur.offset();
    let header_node = tree.add(tree.root(), "FINS header", start..start + HEADER_LEN, None);

    let icf = cur.read_u8()?;
    let icf_node = tree.add(
        header_node,
        format!("ICF: 0x{icf:02X}"),
        start..start + 1,
        Some(FieldValue::U8(icf)),
    );
    add_bit_children(tree, icf_node, start..start + 1, icf as u32, &ICF_LAYOUT);

    let byte = |cur: &mut Cursor<'_>, tree: &mut FieldTree, name: &str| {
        let at = cur.offset();
        let v = cur.read_u8()?;
        tree.add(
            header_node,
            format!("{name}: 0x{v:02X}"),
            at..at + 1,
            Some(FieldValue::U8(v)),
        );
        Ok::<u8, ReadError>(v)
    };

    let _reserved = byte(cur, tree, "Reserved")?;
    let gateway_count = byte(cur, tree, "Gateway count")?;
    let dest_network = byte(cur, tree, "Destination network address")?;
    let dest_node = byte(cur, tree, "Destination node number")?;
    let dest_unit = byte(cur, tree, "Destination unit address")?;
    let src_network = byte(cur, tree, "Source network address")?;
    let src_node = byte(cur, tree, "Source node number")?;
    let src_unit = byte(cur, tree, "Source unit address")?;
    let service_id = byte(cur, tree, "Service ID")?;

    let at = cur.offset();
    let command_code = cur.read_u16()?;
    let name = commands::lookup(command_code)
        .map(|spec| spec.name)
        .unwrap_or("Unknown");
    let command_node = tree.add(
        header_node,
        format!("Command code: {name} (0x{command_code:04X})"),
        at..at + 2,
        Some(FieldValue::U16(command_code)),
    );

    let direction = if icf & ICF_RESPONSE != 0 {
        Direction::Response
    } else {
        Direction::Command
    };

    Ok(ParsedHeader {
        header: Header {
            icf,
            direction,
            gateway_count,
            dest_network,
            dest_node,
            dest_unit,
            src_network,
            src_node,
            src_unit,
            service_id,
            command_code,
        },
        command_node,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [u8; 12] = [
        0x80, 0x00, 0x02, 0x00, 0x05, 0x00, 0x00, 0x22, 0x00, 0x07, 0x01, 0x01,
    ];

    #[test]
    fn recognition_gate() {
        assert!(looks_like_fins(&HEADER, HEADER.len()));
        // Too short
        assert!(!looks_like_fins(&HEADER, 11));
        // Marker bytes off
        let mut bad = HEADER;
        bad[1] = 0x01;
        assert!(!looks_like_fins(&bad, bad.len()));
        let mut bad = HEADER;
        bad[2] = 0x00;
        assert!(!looks_like_fins(&bad, bad.len()));
    }

    #[test]
    fn parses_addressing_and_command() {
        let mut cur = Cursor::new(&HEADER, HEADER.len());
        let mut tree = FieldTree::new("OMRON FINS", 0..HEADER.len());
        let parsed = parse(&mut cur, &mut tree).unwrap();

        let h = parsed.header;
        assert_eq!(h.direction, Direction::Command);
        assert_eq!(h.gateway_count, 0x02);
        assert_eq!(h.dest_node, 0x05);
        assert_eq!(h.src_node, 0x22);
        assert_eq!(h.service_id, 0x07);
        assert_eq!(h.command_code, 0x0101);
        assert_eq!(cur.offset(), HEADER_LEN);

        let code_label = &tree.node(parsed.command_node).label;
        assert!(code_label.contains("Memory Area Read"), "{code_label}");
    }

    #[test]
    fn response_bit_flips_direction() {
        let mut frame = HEADER;
        frame[0] = 0xC0;
        let mut cur = Cursor::new(&frame, frame.len());
        let mut tree = FieldTree::new("OMRON FINS", 0..frame.len());
        let parsed = parse(&mut cur, &mut tree).unwrap();
        assert_eq!(parsed.header.direction, Direction::Response);
    }

    #[test]
    fn icf_expands_into_bit_subtree() {
        let mut cur = Cursor::new(&HEADER, HEADER.len());
        let mut tree = FieldTree::new("OMRON FINS", 0..HEADER.len());
        parse(&mut cur, &mut tree).unwrap();

        let icf_node = tree.find_labeled("ICF:").unwrap();
        let children = &tree.node(icf_node).children;
        assert_eq!(children.len(), ICF_LAYOUT.fields.len());
        assert!(tree.node(children[0]).label.contains("Use gateway"));
        assert!(tree.node(children[1]).label.contains("Command"));
    }
}
