//! Line classification: splits the input into lines, dispatches on the
//! leading tag and hands the remaining fields to [`crate::fields`].

use tracing::debug;

use crate::error::{ParseError, ParseErrorKind};
use crate::fields;
use crate::record::LineRecord;

const DIRECTIVES: &str = "\"v\", \"vt\", \"vn\", \"f\" or \"#\"";

/// A whitespace-delimited token within a line.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Token<'a> {
    /// 1-based column of the first byte.
    pub column: usize,
    pub bytes: &'a [u8],
}

impl Token<'_> {
    pub fn text(&self) -> String {
        bytes_to_string(self.bytes)
    }

    /// The token quoted for use in diagnostics.
    pub fn describe(&self) -> String {
        format!("{:?}", self.text())
    }
}

/// Cursor over the bytes of a single line, newline excluded.
pub(crate) struct Line<'a> {
    bytes: &'a [u8],
    pos: usize,
    number: usize,
}

impl<'a> Line<'a> {
    fn new(bytes: &'a [u8], number: usize) -> Self {
        Self {
            bytes,
            pos: 0,
            number,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn column(&self) -> usize {
        self.pos + 1
    }

    /// Take the maximal run of non-separator bytes at the cursor.
    fn token(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        while self.peek().is_some_and(|b| !is_separator(b)) {
            self.pos += 1;
        }
        (self.pos > start).then(|| Token {
            column: start + 1,
            bytes: &self.bytes[start..self.pos],
        })
    }

    /// Skip separators, then take the next token. `None` at end of line.
    pub fn next_field(&mut self) -> Option<Token<'a>> {
        while self.peek().is_some_and(is_separator) {
            self.pos += 1;
        }
        self.token()
    }

    /// Succeeds only if nothing but separators remains.
    pub fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.next_field() {
            None => Ok(()),
            Some(token) => Err(self.syntax(token.column, token.describe(), "end of line")),
        }
    }

    pub fn error(&self, column: usize, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.number, column, bytes_to_string(self.bytes))
    }

    pub fn syntax(&self, column: usize, found: impl Into<String>, expected: &str) -> ParseError {
        self.error(
            column,
            ParseErrorKind::Syntax {
                found: found.into(),
                expected: expected.to_string(),
            },
        )
    }

    /// Syntax error for a field that is missing at the end of the line.
    pub fn missing(&self, expected: &str) -> ParseError {
        self.syntax(self.column(), "end of line", expected)
    }
}

/// Field separators. Newlines never reach a `Line`.
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
}

/// Bytes are taken as characters one-to-one, without charset decoding.
fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Split on `\n`. A trailing newline does not start another line.
fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    (!bytes.is_empty())
        .then(|| body.split(|&b| b == b'\n'))
        .into_iter()
        .flatten()
}

fn classify(line: &mut Line<'_>) -> Result<LineRecord, ParseError> {
    if line.peek() == Some(b'#') {
        let text = bytes_to_string(&line.bytes[1..]);
        return Ok(LineRecord::Comment { text });
    }

    let Some(tag) = line.token() else {
        let found = if line.peek().is_some() {
            "whitespace"
        } else {
            "end of line"
        };
        return Err(line.syntax(1, found, DIRECTIVES));
    };

    // The tag is the whole leading token, so "vt" can never be read as "v".
    match tag.bytes {
        b"v" => fields::vertex(line),
        b"vt" => fields::tex_coord(line),
        b"vn" => fields::normal(line),
        b"f" => fields::face(line),
        _ => Err(line.syntax(tag.column, tag.describe(), DIRECTIVES)),
    }
}

/// Classify every line of `bytes` into a [`LineRecord`], in file order.
///
/// Fails on the first line that is not a recognized directive or comment.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<LineRecord>, ParseError> {
    let mut records = Vec::new();
    for (index, raw) in split_lines(bytes).enumerate() {
        let mut line = Line::new(raw, index + 1);
        records.push(classify(&mut line)?);
    }

    debug!("Parsed {} OBJ records", records.len());
    Ok(records)
}
