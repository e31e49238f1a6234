//! Decision-tree model and induction.

mod builder;
pub mod entropy;
mod node;

pub use builder::TreeBuilder;
pub use node::{Node, NodeKind};

use std::fmt;

/// An immutable trained decision tree.
///
/// Built in one recursive pass by [`TreeBuilder`] and only read afterwards.
/// The root is synthetic: its first (and only direct) child chain begins the
/// real decisions.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    pub(crate) fn new(root: Node) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Indented rendering of the whole tree, one node per line.
impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
