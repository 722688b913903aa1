//! Lispy host errors.
//!
//! Language-level failures are values ([`crate::value::ErrorKind`]) and never
//! reach this module. Everything here is a failure *around* evaluation: text
//! that does not parse, files that cannot be read, suites that cannot be
//! loaded. They are reported through `miette`.

use std::ops::Range;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// Unified error type for all host-side failure modes.
#[derive(Debug, Error, Diagnostic)]
pub enum LispyError {
    #[error("Parse error: {message}")]
    #[diagnostic(
        code(lispy::parse),
        help("expressions are numbers, symbols, parenthesised s-expressions or braced q-expressions")
    )]
    Parse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("I/O error on '{path}'")]
    #[diagnostic(code(lispy::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Test suite error: {message}")]
    #[diagnostic(code(lispy::suite))]
    Suite { message: String },
}

impl LispyError {
    pub fn parse(
        message: impl Into<String>,
        source_name: &str,
        source: &str,
        span: Range<usize>,
    ) -> Self {
        LispyError::Parse {
            message: message.into(),
            src: NamedSource::new(source_name, source.to_string()),
            span: span.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        LispyError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn suite(message: impl Into<String>) -> Self {
        LispyError::Suite {
            message: message.into(),
        }
    }
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a LispyError with full miette diagnostics on stderr.
pub fn print_error(error: LispyError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
