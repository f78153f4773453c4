#![warn(clippy::pedantic)]
//! Syntax layer for Move IDE support.
//!
//! Source text is parsed by a tree-sitter grammar supplied by the host and
//! lowered into an arena-backed [`SyntaxTree`](tree::SyntaxTree). The analysis
//! crate walks that tree; it never talks to tree-sitter directly.
//!
//! ```text
//! text → TreeProvider::parse → tree_sitter::Tree → lower → SyntaxTree
//! ```
pub mod builder;
pub mod errors;
pub mod provider;
pub mod tree;
