//! Error types for the analysis crate.
//!
//! Extraction and scope resolution never fail; only registry operations that
//! need a fresh parse can.

use move_ide_syntax::errors::SyntaxError;
use thiserror::Error;

#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AnalysisError {
    /// The document was never opened, or has already been closed.
    #[error("document `{uri}` is not open")]
    UnknownDocument { uri: String },

    /// The tree provider could not parse the document.
    #[error("failed to parse `{uri}`: {source}")]
    Parse {
        uri: String,
        #[source]
        source: SyntaxError,
    },
}
