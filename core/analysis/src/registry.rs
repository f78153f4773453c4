//! Open-document registry.
//!
//! Maps document URIs to their latest parse: the text, the tree parsed from it,
//! and the declarations extracted from that tree. The three are always
//! replaced together, so readers never observe a tree from one edit paired with
//! declarations from another.
//!
//! Lifecycle follows the editor: `open` creates an entry, `change` replaces it,
//! `close` removes it. A failed re-parse keeps the previous entry, stale but
//! consistent data being more useful to completion than none.
//!
//! The registry is owned by the hosting process and driven from a single event
//! loop. A host that parses on worker threads must funnel writes for one URI
//! through one queue to keep "latest write wins".

use move_ide_syntax::provider::TreeProvider;
use move_ide_syntax::tree::{Point, SyntaxTree};
use rustc_hash::FxHashMap;

use crate::config::AnalysisConfig;
use crate::declarations::ModuleDeclaration;
use crate::errors::AnalysisError;
use crate::extractor::DeclarationExtractor;
use crate::scope::{ScopeQueryResult, ScopeResolver};

/// Latest analysis of one document.
#[derive(Clone, Debug)]
pub struct DocumentEntry {
    text: String,
    tree: Option<SyntaxTree>,
    modules: Vec<ModuleDeclaration>,
}

impl DocumentEntry {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `None` when the document has never been parsed successfully.
    #[must_use]
    pub fn tree(&self) -> Option<&SyntaxTree> {
        self.tree.as_ref()
    }

    #[must_use]
    pub fn modules(&self) -> &[ModuleDeclaration] {
        &self.modules
    }
}

pub struct FileRegistry<P> {
    provider: P,
    extractor: DeclarationExtractor,
    resolver: ScopeResolver,
    documents: FxHashMap<String, DocumentEntry>,
}

impl<P: TreeProvider> FileRegistry<P> {
    #[must_use]
    pub fn new(provider: P, config: AnalysisConfig) -> Self {
        Self {
            provider,
            extractor: DeclarationExtractor::new(config.clone()),
            resolver: ScopeResolver::new(config),
            documents: FxHashMap::default(),
        }
    }

    /// Starts tracking `uri` and analyses its initial text.
    ///
    /// Returns the number of modules found. Opening an already open document
    /// replaces its entry.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Parse`] when the text cannot be parsed. The
    /// document is still tracked, with no tree and no declarations, so a later
    /// `change` can recover it.
    pub fn open(&mut self, uri: &str, text: &str) -> Result<usize, AnalysisError> {
        tracing::debug!("Document opened: {uri}");
        match self.analyze(uri, text) {
            Ok(entry) => Ok(self.store(uri, entry)),
            Err(err) => {
                self.documents.insert(
                    uri.to_string(),
                    DocumentEntry {
                        text: text.to_string(),
                        tree: None,
                        modules: Vec::new(),
                    },
                );
                Err(err)
            }
        }
    }

    /// Re-analyses `uri` after an edit and returns the number of modules found.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::UnknownDocument`] when `uri` is not open, and
    /// [`AnalysisError::Parse`] when the new text cannot be parsed. In the
    /// latter case the previous entry is left untouched.
    pub fn change(&mut self, uri: &str, text: &str) -> Result<usize, AnalysisError> {
        tracing::debug!("Document changed: {uri}");
        if !self.documents.contains_key(uri) {
            return Err(AnalysisError::UnknownDocument {
                uri: uri.to_string(),
            });
        }
        let entry = self.analyze(uri, text)?;
        Ok(self.store(uri, entry))
    }

    /// Stops tracking `uri`. Returns whether it was open.
    pub fn close(&mut self, uri: &str) -> bool {
        tracing::debug!("Document closed: {uri}");
        self.documents.remove(uri).is_some()
    }

    /// Applies new settings and re-extracts every open document from its
    /// current tree. No document is re-parsed.
    pub fn reconfigure(&mut self, config: AnalysisConfig) {
        self.extractor = DeclarationExtractor::new(config.clone());
        self.resolver = ScopeResolver::new(config);
        for entry in self.documents.values_mut() {
            if let Some(tree) = &entry.tree {
                entry.modules = self.extractor.extract(tree, &entry.text);
            }
        }
        tracing::debug!("Re-extracted {} open document(s)", self.documents.len());
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn document(&self, uri: &str) -> Option<&DocumentEntry> {
        self.documents.get(uri)
    }

    #[must_use]
    pub fn modules(&self, uri: &str) -> Option<&[ModuleDeclaration]> {
        self.documents.get(uri).map(DocumentEntry::modules)
    }

    /// Resolves the scope at `point` against the latest successful parse.
    ///
    /// `None` when `uri` is not open. A document that never parsed yields an
    /// empty result.
    #[must_use]
    pub fn scope_at(&self, uri: &str, point: Point) -> Option<ScopeQueryResult> {
        let entry = self.documents.get(uri)?;
        Some(match &entry.tree {
            Some(tree) => self.resolver.resolve(tree, &entry.text, point),
            None => ScopeQueryResult::default(),
        })
    }

    #[must_use]
    pub fn contains(&self, uri: &str) -> bool {
        self.documents.contains_key(uri)
    }

    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn analyze(&mut self, uri: &str, text: &str) -> Result<DocumentEntry, AnalysisError> {
        let tree = self.provider.parse(text).map_err(|source| {
            tracing::warn!("Unable to parse {uri}: {source}");
            AnalysisError::Parse {
                uri: uri.to_string(),
                source,
            }
        })?;
        if tree.has_errors() {
            tracing::debug!("{uri} parsed with syntax errors");
        }
        let modules = self.extractor.extract(&tree, text);
        tracing::debug!("Extracted {} module(s) from {uri}", modules.len());
        Ok(DocumentEntry {
            text: text.to_string(),
            tree: Some(tree),
            modules,
        })
    }

    fn store(&mut self, uri: &str, entry: DocumentEntry) -> usize {
        let count = entry.modules.len();
        self.documents.insert(uri.to_string(), entry);
        count
    }
}
