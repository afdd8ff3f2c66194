//! Field tree output and annotation sink
//!
//! Decoded fields accumulate into an ordered tree of labeled nodes, each
//! carrying its byte-range provenance so a front end can highlight the
//! originating bytes. The tree is an arena addressed by [`NodeId`]: parsers
//! append nodes and record the returned id as a child of their parent, so
//! nothing holds aliasing references into the tree while it grows. A node is
//! never mutated after creation except to receive children.
//!
//! Validation failures land here too, as [`Annotation`]s attached to the
//! offending node. Annotating never alters control flow by itself; callers
//! decide whether to stop parsing afterwards.

use std::ops::Range;

/// Index of a node inside its [`FieldTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

/// Raw decoded value attached to a leaf node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    Bytes(Vec<u8>),
    Text(String),
}

/// One labeled node: a field, a record group, or the frame root.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldNode {
    /// Rendered label, e.g. `Memory area code: CIO area (word) (0x80)`
    pub label: String,
    /// Raw value for leaf fields
    pub value: Option<FieldValue>,
    /// Byte range within the frame this node was decoded from
    pub range: Range<usize>,
    /// Ordered child nodes
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Note,
    Warning,
}

/// What went wrong, for callers that branch on the diagnostic rather than
/// its message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationKind {
    UnknownCommand,
    MalformedLength,
    UnknownAreaCode,
    TrailingBytes,
    Truncated,
}

/// Non-fatal diagnostic attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    pub node: NodeId,
    pub severity: Severity,
    pub kind: AnnotationKind,
    pub message: String,
}

/// Append-only arena of [`FieldNode`]s plus accumulated annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldTree {
    nodes: Vec<FieldNode>,
    annotations: Vec<Annotation>,
}

impl FieldTree {
    /// Create a tree with a single root node spanning the whole frame.
    pub fn new(label: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            nodes: vec![FieldNode {
                label: label.into(),
                value: None,
                range,
                children: Vec::new(),
            }],
            annotations: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node under `parent` and return its id.
    pub fn add(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        range: Range<usize>,
        value: Option<FieldValue>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(FieldNode {
            label: label.into(),
            value,
            range,
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Attach a diagnostic to `node`.
    pub fn annotate(
        &mut self,
        node: NodeId,
        severity: Severity,
        kind: AnnotationKind,
        message: impl Into<String>,
    ) {
        self.annotations.push(Annotation {
            node,
            severity,
            kind,
            message: message.into(),
        });
    }

    pub fn node(&self, id: NodeId) -> &FieldNode {
        &self.nodes[id.0]
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// All nodes in creation order (root first).
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &FieldNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node whose label starts with `prefix`, if any.
    pub fn find_labeled(&self, prefix: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, n)| n.label.starts_with(prefix))
            .map(|(id, _)| id)
    }

    /// Indented text rendering of the tree plus its annotations.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root(), 0, &mut out);
        for ann in &self.annotations {
            let sev = match ann.severity {
                Severity::Note => "note",
                Severity::Warning => "warning",
            };
            out.push_str(&format!(
                "[{sev}] {} (at \"{}\")\n",
                ann.message,
                self.node(ann.node).label
            ));
        }
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = self.node(id);
        out.push_str(&format!(
            "{:indent$}{} [{}..{}]\n",
            "",
            node.label,
            node.range.start,
            node.range.end,
            indent = depth * 2
        ));
        for &child in &node.children {
            self.render_node(child, depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnnotationKind, FieldTree, FieldValue, Severity};

    #[test]
    fn nodes_keep_insertion_order() {
        let mut tree = FieldTree::new("frame", 0..10);
        let group = tree.add(tree.root(), "header", 0..4, None);
        let a = tree.add(group, "first", 0..2, Some(FieldValue::U16(1)));
        let b = tree.add(group, "second", 2..4, Some(FieldValue::U16(2)));

        assert_eq!(tree.node(group).children, vec![a, b]);
        assert_eq!(tree.node(tree.root()).children, vec![group]);
        assert_eq!(tree.node(a).range, 0..2);
    }

    #[test]
    fn annotations_accumulate_without_altering_nodes() {
        let mut tree = FieldTree::new("frame", 0..4);
        let leaf = tree.add(tree.root(), "code", 0..2, Some(FieldValue::U16(0xFFFF)));
        let before = tree.len();

        tree.annotate(
            leaf,
            Severity::Warning,
            AnnotationKind::UnknownCommand,
            "Unknown Command-Code",
        );
        tree.annotate(
            tree.root(),
            Severity::Warning,
            AnnotationKind::TrailingBytes,
            "Unexpected Length",
        );

        assert_eq!(tree.len(), before);
        assert_eq!(tree.annotations().len(), 2);
        assert_eq!(tree.annotations()[0].kind, AnnotationKind::UnknownCommand);
    }

    #[test]
    fn render_shows_hierarchy_and_ranges() {
        let mut tree = FieldTree::new("frame", 0..4);
        let group = tree.add(tree.root(), "body", 0..4, None);
        tree.add(group, "leaf", 1..3, None);

        let text = tree.render();
        assert!(text.contains("frame [0..4]"));
        assert!(text.contains("  body [0..4]"));
        assert!(text.contains("    leaf [1..3]"));
    }

    #[test]
    fn find_labeled_matches_prefix() {
        let mut tree = FieldTree::new("frame", 0..4);
        tree.add(tree.root(), "Command code: Stop (0x0402)", 10..12, None);
        assert!(tree.find_labeled("Command code:").is_some());
        assert!(tree.find_labeled("Response code:").is_none());
    }
}
