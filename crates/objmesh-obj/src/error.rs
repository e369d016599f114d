/// What went wrong while parsing an OBJ line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected {found}, expected {expected}")]
    Syntax { found: String, expected: String },

    #[error("malformed number {literal:?}")]
    NumericFormat { literal: String },

    #[error("face vertices must contain between 1 and 3 indices")]
    FaceGroupArity,
}

/// A parse failure, positioned at the offending token.
///
/// `line` and `column` are 1-based. `text` is the source line the error
/// occurred on, used to render a caret diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {kind}\n{}", snippet(.text, .column))]
pub struct ParseError {
    pub(crate) kind: ParseErrorKind,
    pub(crate) line: usize,
    pub(crate) column: usize,
    pub(crate) text: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: usize, column: usize, text: String) -> Self {
        Self {
            kind,
            line,
            column,
            text,
        }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The source line the error occurred on.
    pub fn text(&self) -> &str {
        &self.text
    }
}

fn snippet(text: &str, column: &usize) -> String {
    let pad = column.saturating_sub(1);
    format!("  | {}\n  | {:pad$}^", text, "", pad = pad)
}
