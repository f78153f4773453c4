#![warn(clippy::pedantic)]
//! Source analysis for Move IDE support.
//!
//! Two walks over a [`SyntaxTree`] make up the core:
//!
//! - [`extractor`]: collects modules, imports, constants, structs and function
//!   signatures of a file into plain [`declarations`] records.
//! - [`scope`]: classifies the lexical context around a cursor position, for
//!   completion and hover.
//!
//! [`registry::FileRegistry`] ties both to open editor documents, re-parsing
//! through a [`TreeProvider`](move_ide_syntax::provider::TreeProvider) on every
//! change.
//!
//! ## Error Handling
//!
//! Neither walk can fail. Unknown node kinds and missing children leave fields
//! at their defaults, so a half-typed file still produces whatever structure is
//! recognisable. Only the registry reports errors, and only for parse failures
//! and unknown documents.
//!
//! ## Logging
//!
//! Events are emitted through `tracing`; installing a subscriber is up to the
//! host.

use move_ide_syntax::tree::{Point, SyntaxTree};

pub(crate) mod budget;
pub mod config;
pub mod declarations;
pub mod errors;
pub mod extractor;
pub mod grammar;
pub mod registry;
pub mod scope;

use crate::declarations::ModuleDeclaration;
use crate::extractor::DeclarationExtractor;
use crate::scope::{ScopeQueryResult, ScopeResolver};

/// Extracts declarations from `source` with the default configuration.
#[must_use]
pub fn extract(tree: &SyntaxTree, source: &str) -> Vec<ModuleDeclaration> {
    DeclarationExtractor::default().extract(tree, source)
}

/// Resolves the scope at `point` with the default configuration.
#[must_use]
pub fn resolve_scope(tree: &SyntaxTree, source: &str, point: Point) -> ScopeQueryResult {
    ScopeResolver::default().resolve(tree, source, point)
}
