//! lqp: parser for Lucene-style search queries.
//!
//! # Example
//!
//! ```
//! use lqp_lib::{Node, Query};
//!
//! let query = lqp_lib::parse("title:foo^2 bar").expect("valid query");
//! assert_eq!(query.len(), 2);
//! assert_eq!(query.clauses()[0].field(), Some("title"));
//!
//! let single = lqp_lib::parse("foo").expect("valid query");
//! assert_eq!(single, Query::Single(Box::new(Node::term("foo"))));
//!
//! let location = lqp_lib::error_location("invalid^ query").expect("invalid query");
//! assert_eq!((location.line, location.column), (1, 8));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod location;
pub mod parser;

#[cfg(test)]
mod lib_tests;

pub use ast::{Marker, Modifiers, Node, NodeKind, Operator, Query, Similarity};
pub use diagnostics::{Diagnostic, DiagnosticPrinter};
pub use location::ErrorLocation;
pub use parser::{ParserConfig, SyntaxError};

use location::line_column;

/// Errors that can occur during query parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input does not match the grammar.
    #[error("{0}")]
    Syntax(SyntaxError),

    /// Recursion fuel exhausted (groups nested too deeply).
    #[error("recursion limit exceeded: more than {limit} nested groups")]
    RecursionLimitExceeded { offset: usize, limit: u32 },

    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted { offset: usize },

    /// Input longer than byte offsets can address.
    #[error("input too large: {len} bytes (at most {max})", max = u32::MAX)]
    InputTooLarge { len: usize },
}

impl Error {
    /// Byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            Error::Syntax(err) => err.offset(),
            Error::RecursionLimitExceeded { offset, .. } | Error::ExecFuelExhausted { offset } => {
                *offset
            }
            Error::InputTooLarge { .. } => 0,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    /// Converts the error into a line/column report against `source`.
    pub fn location(&self, source: &str) -> ErrorLocation {
        match self {
            Error::Syntax(err) => ErrorLocation {
                line: err.line(),
                column: err.column(),
                message: err.to_string(),
            },
            _ => {
                let (line, column) = line_column(source, self.offset());
                ErrorLocation {
                    line,
                    column,
                    message: format!("{} at line {} column {}", self, line, column),
                }
            }
        }
    }

    /// Renders the error as an annotated snippet of `source`.
    pub fn render(&self, source: &str, colored: bool) -> String {
        Diagnostic::from(self)
            .printer()
            .source(source)
            .colored(colored)
            .render()
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source` with the default fuel limits.
pub fn parse(source: &str) -> Result<Query> {
    ParserConfig::default().parse(source)
}

/// `None` when `source` parses; otherwise the line, column, and message of the failure.
pub fn error_location(source: &str) -> Option<ErrorLocation> {
    ParserConfig::default().error_location(source)
}
