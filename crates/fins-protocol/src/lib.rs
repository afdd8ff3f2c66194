//! OMRON FINS Protocol Dissection Library
//!
//! This crate decodes single FINS/UDP payloads (the command/response
//! protocol spoken by OMRON PLCs) into a labeled field tree with byte
//! provenance, suitable for a traffic inspector or protocol analyzer front
//! end.
//!
//! # Frame Format
//! ```text
//! [ICF] [00] [02] [DNA] [DA1] [DA2] [SNA] [SA1] [SA2] [SID] [MRC SRC] [body...]
//! ```
//!
//! - `ICF`: flags byte; bit 6 separates commands from responses
//! - `00`, `02`: fixed marker bytes, used as the recognition heuristic
//! - `DNA/DA1/DA2`: destination network, node, unit
//! - `SNA/SA1/SA2`: source network, node, unit
//! - `SID`: service id, echoed by the responder
//! - `MRC SRC`: 16-bit command code, big-endian
//! - `body`: command-specific layout; responses open with a 2-byte end code
//!
//! # Architecture
//!
//! The decoder is a single pass: a bounds-checked [`Cursor`] walks the
//! payload, the fixed header classifies direction and command code, and a
//! static command catalog maps the code to a declarative body shape that a
//! shared interpreter executes. Output accumulates in a [`FieldTree`];
//! anything suspicious becomes an [`Annotation`] rather than an error. The
//! input is untrusted wire data, so the decode always terminates with a
//! (possibly partial) tree and never panics.
//!
//! The catalog and lookup tables are static and read-only, so any number of
//! payloads can be dissected concurrently.
//!
//! # Example
//!
//! ```rust
//! use fins_protocol::{Direction, Dissector};
//!
//! // Memory Area Read command: 10 words of DM starting at word 100
//! let frame = [
//!     0x80, 0x00, 0x02, 0x00, 0x05, 0x00, 0x00, 0x22, 0x00, 0x07, // header
//!     0x01, 0x01, // command code
//!     0x90, 0x00, 0x64, 0x00, 0x00, 0x0A, // body
//! ];
//!
//! let result = Dissector::new().dissect(&frame).expect("recognized as FINS");
//! assert_eq!(result.header.unwrap().direction, Direction::Command);
//! assert_eq!(result.command_name, Some("Memory Area Read"));
//! assert!(result.tree.annotations().is_empty());
//! ```

pub mod body;
pub mod commands;
pub mod cursor;
pub mod error;
pub mod fields;
pub mod frame;
pub mod header;
pub mod lookup;
pub mod tree;

pub use cursor::Cursor;
pub use error::ReadError;
pub use frame::FrameBuilder;
pub use header::{Direction, Header, HEADER_LEN};
pub use tree::{Annotation, AnnotationKind, FieldTree, FieldValue, NodeId, Severity};

/// Dissector options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DissectorConfig {
    /// Silently skip a body whose length fits no expected shape instead of
    /// attaching a `MalformedLength` annotation, for output parity with
    /// older releases. Zero-length expectations warn either way.
    pub legacy_silent_mismatch: bool,
}

/// Result of dissecting one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dissection {
    /// Decoded fixed header; `None` only when the capture kept fewer bytes
    /// than the recognition gate requires
    pub header: Option<Header>,
    /// Catalog name of the command code, if known
    pub command_name: Option<&'static str>,
    /// Bytes consumed by the decode; trailing bytes stay unconsumed
    pub consumed: usize,
    /// Field tree plus accumulated annotations
    pub tree: FieldTree,
}

/// Single-pass FINS payload decoder.
///
/// Stateless apart from its configuration; one instance can dissect any
/// number of payloads, concurrently if shared.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dissector {
    config: DissectorConfig,
}

impl Dissector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DissectorConfig) -> Self {
        Self { config }
    }

    /// Dissect a payload whose reported length equals its captured length.
    pub fn dissect(&self, payload: &[u8]) -> Option<Dissection> {
        self.dissect_reported(payload, payload.len())
    }

    /// Dissect a payload against a reported length that may differ from the
    /// captured buffer (a capture may truncate frames).
    ///
    /// Returns `None` when the payload is not recognized as FINS at all
    /// (too short, or marker bytes absent), so a caller multiplexing several
    /// protocols can try the next candidate. Every recognized payload
    /// produces a tree, however malformed the body turns out to be.
    pub fn dissect_reported(&self, payload: &[u8], reported_len: usize) -> Option<Dissection> {
        if !header::looks_like_fins(payload, reported_len) {
            return None;
        }

        let mut cur = Cursor::new(payload, reported_len);
        let mut tree = FieldTree::new("OMRON FINS", 0..reported_len);

        let parsed = match header::parse(&mut cur, &mut tree) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Unreachable for honest captures; the gate guarantees 12
                // reported bytes, not 12 captured ones
                tracing::warn!("Header truncated after recognition gate: {e}");
                let root = tree.root();
                tree.annotate(root, Severity::Warning, AnnotationKind::Truncated, e.to_string());
                return Some(Dissection {
                    header: None,
                    command_name: None,
                    consumed: cur.offset(),
                    tree,
                });
            }
        };

        let hdr = parsed.header;
        let Some(spec) = commands::lookup(hdr.command_code) else {
            tracing::warn!("Unknown command code 0x{:04X}", hdr.command_code);
            tree.annotate(
                parsed.command_node,
                Severity::Warning,
                AnnotationKind::UnknownCommand,
                "Unknown Command-Code",
            );
            return Some(Dissection {
                header: Some(hdr),
                command_name: None,
                consumed: cur.offset(),
                tree,
            });
        };

        let (shape, group_label) = match hdr.direction {
            Direction::Command => (&spec.request, "Command data"),
            Direction::Response => (&spec.response, "Response data"),
        };
        let body_node = tree.add(tree.root(), group_label, cur.offset()..reported_len, None);

        let outcome = body::parse_body(shape, &mut cur, &mut tree, body_node, &self.config);

        // Universal post-condition: a body that ran to completion must have
        // consumed the reported length exactly. Stops already carry their
        // own annotation (or chose silence), so they are not double-flagged.
        if outcome == body::BodyOutcome::Completed && cur.offset() != reported_len {
            let root = tree.root();
            tree.annotate(
                root,
                Severity::Warning,
                AnnotationKind::TrailingBytes,
                "Unexpected Length",
            );
        }

        Some(Dissection {
            header: Some(hdr),
            command_name: Some(spec.name),
            consumed: cur.offset(),
            tree,
        })
    }
}
