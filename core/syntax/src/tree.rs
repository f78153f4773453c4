//! Arena-backed concrete syntax tree.
//!
//! A [`SyntaxTree`] is an immutable snapshot of a parse. Nodes live in a flat
//! `Vec` and refer to each other by [`NodeId`], so parent links are plain
//! indices and the tree owns no cycles. Re-parsing always produces a brand-new
//! tree.
//!
//! Trees do not keep a copy of the source text. Text is sliced on demand with
//! [`Node::utf8_text`], the same way tree-sitter nodes are read.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Kind tag of the error nodes produced by error recovery.
pub const ERROR_KIND: &str = "ERROR";

/// Zero-based row/column position. Columns are byte offsets within the row.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    #[must_use]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

impl From<tree_sitter::Point> for Point {
    fn from(point: tree_sitter::Point) -> Self {
        Self::new(point.row, point.column)
    }
}

/// A byte offset paired with its row/column point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub byte: usize,
    pub point: Point,
}

impl Position {
    #[must_use]
    pub fn new(byte: usize, point: Point) -> Self {
        Self { byte, point }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeData {
    pub(crate) kind: Box<str>,
    pub(crate) named: bool,
    pub(crate) start: Position,
    pub(crate) end: Position,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<NodeData>,
}

impl SyntaxTree {
    #[must_use]
    pub fn root_node(&self) -> Node<'_> {
        self.node(NodeId::ROOT)
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Node<'_> {
        assert!(id.index() < self.nodes.len(), "node {id:?} is not in this tree");
        Node { tree: self, id }
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then_some(Node { tree: self, id })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.nodes.iter().any(|node| &*node.kind == ERROR_KIND)
    }

    /// Returns the deepest node whose range contains `point`.
    ///
    /// A child that strictly contains the point is preferred. When none does,
    /// a child ending exactly at the point is taken, so a cursor placed right
    /// after an identifier still lands on that identifier. Points outside the
    /// root resolve to the root.
    #[must_use]
    pub fn descendant_at(&self, point: Point) -> Node<'_> {
        let mut current = self.root_node();
        'descend: loop {
            let mut touching = None;
            for child in current.children() {
                if child.start_point() > point {
                    break;
                }
                if point < child.end_point() {
                    current = child;
                    continue 'descend;
                }
                if point == child.end_point() && touching.is_none() {
                    touching = Some(child);
                }
            }
            match touching {
                Some(child) if child.start_point() < child.end_point() => current = child,
                _ => return current,
            }
        }
    }
}

/// Cheap copyable handle to a node inside a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct Node<'tree> {
    tree: &'tree SyntaxTree,
    id: NodeId,
}

impl<'tree> Node<'tree> {
    fn data(&self) -> &'tree NodeData {
        &self.tree.nodes[self.id.index()]
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> &'tree str {
        &self.data().kind
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        self.data().named
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind() == ERROR_KIND
    }

    #[must_use]
    pub fn start_byte(&self) -> usize {
        self.data().start.byte
    }

    #[must_use]
    pub fn end_byte(&self) -> usize {
        self.data().end.byte
    }

    #[must_use]
    pub fn start_point(&self) -> Point {
        self.data().start.point
    }

    #[must_use]
    pub fn end_point(&self) -> Point {
        self.data().end.point
    }

    #[must_use]
    pub fn parent(&self) -> Option<Node<'tree>> {
        self.data().parent.map(|id| self.tree.node(id))
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.data().children.len()
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Option<Node<'tree>> {
        self.data()
            .children
            .get(index)
            .map(|&id| self.tree.node(id))
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'tree>> + 'tree {
        let tree = self.tree;
        self.data().children.iter().map(move |&id| tree.node(id))
    }

    #[must_use]
    pub fn next_sibling(&self) -> Option<Node<'tree>> {
        let parent = self.parent()?;
        let siblings = &parent.data().children;
        let position = siblings.iter().position(|&id| id == self.id)?;
        siblings.get(position + 1).map(|&id| self.tree.node(id))
    }

    /// Slices this node's text out of `source`.
    ///
    /// Returns an empty string when the node range does not fit `source`,
    /// which happens when a tree is paired with text it was not parsed from.
    #[must_use]
    pub fn utf8_text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start_byte()..self.end_byte()).unwrap_or("")
    }

    /// Pre-order iterator over this node and all of its descendants.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'tree> {
        Descendants {
            tree: self.tree,
            stack: vec![self.id],
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}..{}] ({} - {})",
            self.kind(),
            self.start_byte(),
            self.end_byte(),
            self.start_point(),
            self.end_point()
        )
    }
}

/// Depth-first, source-ordered walk produced by [`Node::descendants`].
pub struct Descendants<'tree> {
    tree: &'tree SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'tree> Iterator for Descendants<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        self.stack
            .extend(self.tree.nodes[id.index()].children.iter().rev().copied());
        Some(node)
    }
}
