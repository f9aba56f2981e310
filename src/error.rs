//! Error types for parsing, editing and persisting INI documents

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::line::LineKind;

/// A physical line matched none of the empty / comment / section / setting rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected content {content:?}")]
pub struct ParseError {
    /// The offending raw text, as it appeared in the input
    pub content: String,
}

#[derive(Debug, Error)]
pub enum IniError {
    /// Document construction aborted on a malformed line (1-based)
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// Rendering produced a line that no longer parses (1-based)
    #[error("formatted output no longer parses, line {line}: {source}")]
    Unstable {
        line: usize,
        #[source]
        source: ParseError,
    },

    /// A line was built or edited in a way that breaks the key/kind invariant
    #[error("invalid {kind} line: {reason}")]
    InvalidLine { kind: LineKind, reason: &'static str },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
