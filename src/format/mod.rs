// Stream decoders for the supported on-disk result encodings.
//
// Every decoder consumes a `Read` source and emits `Token`s one at a time
// through the `TokenDecoder` trait. Decoding is strictly forward: each call
// consumes exactly the bytes needed for one token, and the only lookahead
// anywhere is a single buffered pending-newline token inside the text-like
// decoders.
//
// # Modules
//
// - `token`   — Token vocabulary and the index/color profile split
// - `framing` — Length-prefixed tag/version strings shared by tagged formats
// - `binary`  — Fixed-width 8-byte little-endian words
// - `ascii`   — Whitespace/newline-delimited decimal text
// - `csv`     — One-hot rows, header discarded (color profile only)
// - `packed`  — Variable-length base-128 integers with control bytes
// - `boolean` — One character per token (index profile only)

use std::io::{self, Read};

use thiserror::Error;

pub mod ascii;
pub mod binary;
pub mod boolean;
pub mod csv;
pub mod framing;
pub mod packed;
pub mod token;

pub use ascii::AsciiDecoder;
pub use binary::BinaryDecoder;
pub use boolean::BoolDecoder;
pub use csv::CsvDecoder;
pub use framing::Format;
pub use packed::PackedIntDecoder;
pub use token::{Profile, Token, TokenKind};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Fatal decoding/framing failure.
///
/// Every variant is unrecoverable at the point of detection: a comparison
/// oracle must never continue past an inconsistency it has already seen.
#[derive(Debug, Error)]
pub enum FormatError {
    /// I/O failure while reading a stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File could not be opened.
    #[error("{path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A versioned format carried the wrong version string.
    #[error("{path}: wrong version string: expected {expected:?}, got {found:?}")]
    VersionMismatch {
        path: String,
        expected: &'static str,
        found: String,
    },

    /// The format tag is not one this tool understands.
    #[error("{path}: unknown format tag {tag:?}")]
    UnknownFormat { path: String, tag: String },

    /// The byte stream violates its own encoding rules.
    #[error("{path}: malformed data: {detail}")]
    Malformed { path: String, detail: String },
}

impl FormatError {
    pub(crate) fn malformed(path: &str, detail: impl Into<String>) -> Self {
        FormatError::Malformed {
            path: path.to_string(),
            detail: detail.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Decoder contract
// ---------------------------------------------------------------------------

/// A stateful decoder bound to one open byte source.
///
/// `next_token` is the sole mutator of decoder state. After it returns
/// [`Token::Eof`] it keeps returning `Eof` on subsequent calls.
pub trait TokenDecoder {
    fn next_token(&mut self) -> Result<Token, FormatError>;
}

impl<D: TokenDecoder + ?Sized> TokenDecoder for Box<D> {
    fn next_token(&mut self) -> Result<Token, FormatError> {
        (**self).next_token()
    }
}

// ---------------------------------------------------------------------------
// Byte-level read helpers
// ---------------------------------------------------------------------------

/// Read one byte; `None` on end of stream.
pub(crate) fn read_byte<R: Read>(r: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match r.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Fill as much of `buf` as the stream allows; returns the byte count,
/// which is short only at end of stream.
pub(crate) fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_byte_sees_every_byte_then_none() {
        let mut cur = Cursor::new(vec![7u8, 8]);
        assert_eq!(read_byte(&mut cur).unwrap(), Some(7));
        assert_eq!(read_byte(&mut cur).unwrap(), Some(8));
        assert_eq!(read_byte(&mut cur).unwrap(), None);
        assert_eq!(read_byte(&mut cur).unwrap(), None);
    }

    #[test]
    fn read_full_reports_short_reads() {
        let mut cur = Cursor::new(vec![1u8, 2, 3]);
        let mut buf = [0u8; 8];
        assert_eq!(read_full(&mut cur, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
    }
}
