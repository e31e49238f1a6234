//! Tree node types.

use std::fmt;

/// Role of a node within the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The single synthetic root above the first real decision.
    Root,
    /// An edge-holder: created when a partition branch is opened, before the
    /// node's own split (if any) has been computed. A node that terminates in
    /// a direct leaf child keeps this kind.
    Branch,
    /// A decision node testing `column` of the current record layout.
    ///
    /// The index is relative to the slice that produced this node's
    /// children: ancestors have already removed their split columns, so the
    /// same physical removal must be mirrored at classification time.
    Decision { column: usize },
    /// A terminal node holding a final class prediction.
    Leaf,
}

/// A node in a categorical decision tree.
///
/// `label` is overloaded the way the tree overloads it: the class value for
/// a leaf, the routing attribute value for a branch/decision node reached
/// via an edge, and the empty string for the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    label: String,
    children: Vec<Node>,
}

impl Node {
    /// Create the synthetic root node.
    pub fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            label: String::new(),
            children: Vec::new(),
        }
    }

    /// Create an edge-holder for the branch carrying `value`.
    ///
    /// First phase of two-phase construction; [`Node::finalize_split`]
    /// upgrades it to a decision node once its own split is known.
    pub fn branch(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Branch,
            label: value.into(),
            children: Vec::new(),
        }
    }

    /// Create a leaf predicting `class`.
    pub fn leaf(class: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Leaf,
            label: class.into(),
            children: Vec::new(),
        }
    }

    /// Record the split decision this node itself tests.
    ///
    /// Second phase of construction: the builder calls this on the node it
    /// is currently partitioning, which may already be attached to a parent.
    pub fn finalize_split(&mut self, column: usize) {
        self.kind = NodeKind::Decision { column };
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    /// Children in partition order (first-seen attribute values first).
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Find the child whose routing value equals `value`.
    pub fn child_for(&self, value: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.label == value)
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self.kind {
            NodeKind::Root => writeln!(f, "{pad}<root>")?,
            NodeKind::Branch => writeln!(f, "{pad}= {}", self.label)?,
            NodeKind::Decision { column } => writeln!(f, "{pad}= {} [col {column}]", self.label)?,
            NodeKind::Leaf => writeln!(f, "{pad}-> {}", self.label)?,
        }
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
