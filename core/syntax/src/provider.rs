//! Tree providers: the "parse text into a tree" capability consumed by analysis.
//!
//! The analysis layer only needs [`TreeProvider`]. [`TreeSitterProvider`] is the
//! production implementation: it runs a tree-sitter parser for whatever grammar
//! the host loads and lowers the result into a [`SyntaxTree`].
//!
//! ```no_run
//! use move_ide_syntax::provider::{TreeProvider, TreeSitterProvider};
//!
//! # fn load_move_grammar() -> tree_sitter::Language { unimplemented!() }
//! let mut provider = TreeSitterProvider::new(&load_move_grammar())?;
//! let tree = provider.parse("module M { }")?;
//! assert_eq!(tree.root_node().kind(), "source_file");
//! # Ok::<(), move_ide_syntax::errors::SyntaxError>(())
//! ```

use tree_sitter::{Parser, Tree};

use crate::builder::TreeBuilder;
use crate::errors::SyntaxError;
use crate::tree::{Position, SyntaxTree};

pub trait TreeProvider {
    /// Parses `source` into a fresh tree.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying parser cannot produce a tree.
    fn parse(&mut self, source: &str) -> Result<SyntaxTree, SyntaxError>;
}

pub struct TreeSitterProvider {
    parser: Parser,
}

impl TreeSitterProvider {
    /// Creates a provider for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::GrammarLoad`] if the grammar is incompatible with
    /// the linked tree-sitter runtime.
    pub fn new(language: &tree_sitter::Language) -> Result<Self, SyntaxError> {
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .map_err(SyntaxError::GrammarLoad)?;
        Ok(Self { parser })
    }
}

impl TreeProvider for TreeSitterProvider {
    fn parse(&mut self, source: &str) -> Result<SyntaxTree, SyntaxError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or(SyntaxError::ParseFailed)?;
        lower(&tree)
    }
}

/// Copies a tree-sitter tree into the arena representation.
///
/// Every node is kept, anonymous tokens and `ERROR` nodes included, so kind
/// tags and child indices match what tree-sitter reports.
///
/// # Errors
///
/// Only fails if the walk leaves the builder unbalanced, which indicates a bug
/// in the cursor walk rather than in the input.
pub fn lower(tree: &Tree) -> Result<SyntaxTree, SyntaxError> {
    let mut builder = TreeBuilder::new();
    let mut cursor = tree.walk();
    'nodes: loop {
        let node = cursor.node();
        builder.start_node(
            node.kind(),
            node.is_named(),
            Position::new(node.start_byte(), node.start_position().into()),
        );
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            let node = cursor.node();
            builder.finish_node(Position::new(node.end_byte(), node.end_position().into()))?;
            if cursor.goto_next_sibling() {
                continue 'nodes;
            }
            if !cursor.goto_parent() {
                break 'nodes;
            }
        }
    }
    builder.build()
}
