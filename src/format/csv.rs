// One-hot CSV decoder (color profile only).
//
// No tag/version framing: the first physical line is a header and is read
// and discarded at construction. Every other line is a comma-separated row
// of per-column flags. Each call returns the column index of the leftmost
// remaining "1" cell and consumes it; an exhausted row yields a newline and
// the next call reads a fresh line.

use std::io::Read;

use super::token::Token;
use super::{FormatError, TokenDecoder, read_byte};

pub struct CsvDecoder<R> {
    reader: R,
    path: String,
    /// Cached flags of the current row; `None` between rows.
    row: Option<Vec<bool>>,
}

impl<R: Read> CsvDecoder<R> {
    /// Construct over the start of the file; reads and discards the header
    /// row.
    pub fn new(mut reader: R, path: impl Into<String>) -> Result<Self, FormatError> {
        let path = path.into();
        read_line(&mut reader, &path)?; // header
        Ok(Self {
            reader,
            path,
            row: None,
        })
    }
}

impl<R: Read> TokenDecoder for CsvDecoder<R> {
    fn next_token(&mut self) -> Result<Token, FormatError> {
        if self.row.is_none() {
            let Some(line) = read_line(&mut self.reader, &self.path)? else {
                return Ok(Token::Eof);
            };
            self.row = Some(parse_row(&line));
        }
        if let Some(row) = self.row.as_mut()
            && let Some(col) = row.iter().position(|&set| set)
        {
            row[col] = false;
            return Ok(Token::Value(col as u64));
        }
        self.row = None;
        Ok(Token::Newline)
    }
}

/// Read one physical line (terminator not included); `None` when the
/// source is exhausted before any byte is read.
fn read_line<R: Read>(reader: &mut R, path: &str) -> Result<Option<String>, FormatError> {
    let mut bytes = Vec::new();
    loop {
        match read_byte(reader)? {
            None if bytes.is_empty() => return Ok(None),
            None | Some(b'\n') => break,
            Some(byte) => bytes.push(byte),
        }
    }
    let line = String::from_utf8(bytes)
        .map_err(|_| FormatError::malformed(path, "CSV line is not valid UTF-8"))?;
    Ok(Some(line))
}

fn parse_row(line: &str) -> Vec<bool> {
    line.trim().split(',').map(|cell| cell == "1").collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
