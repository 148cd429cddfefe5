mod printer;


use std::fmt;

use rowan::TextRange;

use crate::Error;
use crate::parser::lexer::text_size;

pub use printer::DiagnosticPrinter;

/// A reportable problem: a headline, the span it points at, and an optional
/// label printed under that span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: TextRange,
    pub message: String,
    pub label: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            range,
            message: message.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn printer(&self) -> DiagnosticPrinter<'_, '_> {
        DiagnosticPrinter::new(self)
    }
}

impl From<&Error> for Diagnostic {
    fn from(err: &Error) -> Self {
        match err {
            Error::Syntax(syntax) => {
                let diag = Diagnostic::new(format!("unexpected {}", syntax.found()), syntax.span());
                match syntax.expected_summary() {
                    Some(expected) => diag.with_label(format!("expected {}", expected)),
                    None => diag,
                }
            }
            Error::RecursionLimitExceeded { offset, .. } => {
                Diagnostic::new(err.to_string(), empty_at(*offset))
                    .with_label("nesting limit reached here")
            }
            Error::ExecFuelExhausted { offset } => Diagnostic::new(err.to_string(), empty_at(*offset)),
            Error::InputTooLarge { .. } => Diagnostic::new(err.to_string(), empty_at(0)),
        }
    }
}

fn empty_at(offset: usize) -> TextRange {
    TextRange::empty(text_size(offset))
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(label) = &self.label {
            write!(f, " ({})", label)?;
        }
        Ok(())
    }
}
