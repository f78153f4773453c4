//! Error types for the syntax crate.

use thiserror::Error;

#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum SyntaxError {
    /// The grammar could not be installed into the parser.
    #[error("failed to load grammar: {0}")]
    GrammarLoad(#[source] tree_sitter::LanguageError),

    /// The parser returned no tree (no language set, or parsing was cancelled).
    #[error("parser produced no syntax tree")]
    ParseFailed,

    /// `TreeBuilder::build` was called while nodes were still open.
    #[error("syntax tree is unbalanced: {open} node(s) left open")]
    Unbalanced { open: usize },

    /// `TreeBuilder::build` was called before any node was started.
    #[error("syntax tree has no root node")]
    Empty,

    /// A second top-level node was started after the root was finished.
    #[error("syntax tree has more than one root node")]
    MultipleRoots,

    /// `TreeBuilder::finish_node` was called with nothing open.
    #[error("no open node to finish")]
    NothingToFinish,
}
