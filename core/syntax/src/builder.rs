//! Incremental construction of a [`SyntaxTree`].
//!
//! The builder is driven in pre-order: `start_node` opens a node as a child of
//! the innermost open node, `finish_node` closes it, and `token` adds a leaf in
//! one step. The first node started becomes the root.
//!
//! ```
//! use move_ide_syntax::builder::TreeBuilder;
//! use move_ide_syntax::tree::{Point, Position};
//!
//! let at = |byte| Position::new(byte, Point::new(0, byte));
//! let mut builder = TreeBuilder::new();
//! builder.start_node("source_file", true, at(0));
//! builder.token("module", false, at(0), at(6));
//! builder.finish_node(at(6)).unwrap();
//! let tree = builder.build().unwrap();
//! assert_eq!(tree.root_node().child_count(), 1);
//! ```

use crate::errors::SyntaxError;
use crate::tree::{NodeData, NodeId, Position, SyntaxTree};

#[derive(Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a node. Its end position is provisional until [`Self::finish_node`].
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `u32::MAX` nodes.
    pub fn start_node(&mut self, kind: &str, named: bool, start: Position) -> NodeId {
        let id = self.push(kind, named, start, start);
        self.open.push(id);
        id
    }

    /// Closes the innermost open node.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::NothingToFinish`] when no node is open.
    pub fn finish_node(&mut self, end: Position) -> Result<NodeId, SyntaxError> {
        let id = self.open.pop().ok_or(SyntaxError::NothingToFinish)?;
        self.nodes[id.index()].end = end;
        Ok(id)
    }

    /// Adds a leaf node under the innermost open node.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds `u32::MAX` nodes.
    pub fn token(&mut self, kind: &str, named: bool, start: Position, end: Position) -> NodeId {
        self.push(kind, named, start, end)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Finalises the tree.
    ///
    /// # Errors
    ///
    /// Fails when nodes are still open, nothing has been added, or more than one
    /// top-level node was started.
    pub fn build(self) -> Result<SyntaxTree, SyntaxError> {
        if !self.open.is_empty() {
            return Err(SyntaxError::Unbalanced {
                open: self.open.len(),
            });
        }
        if self.nodes.is_empty() {
            return Err(SyntaxError::Empty);
        }
        if self.nodes.iter().skip(1).any(|node| node.parent.is_none()) {
            return Err(SyntaxError::MultipleRoots);
        }
        Ok(SyntaxTree { nodes: self.nodes })
    }

    fn push(&mut self, kind: &str, named: bool, start: Position, end: Position) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("syntax tree exceeds u32 nodes"));
        let parent = self.open.last().copied();
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        self.nodes.push(NodeData {
            kind: kind.into(),
            named,
            start,
            end,
            parent,
            children: Vec::new(),
        });
        id
    }
}
