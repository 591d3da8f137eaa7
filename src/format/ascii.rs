// Decimal text decoder: whitespace/newline-delimited integers.
//
// Tokens are accumulated character by character. A newline that terminates
// a number doubles as a token boundary, so the newline itself is buffered
// and emitted on the following call. Index streams additionally encode the
// not-found/invalid sentinels as the literals `-1` and `-2`.

use std::io::Read;

use super::framing::{self, Format};
use super::token::{Profile, Token};
use super::{FormatError, TokenDecoder, read_byte};

pub struct AsciiDecoder<R> {
    reader: R,
    path: String,
    profile: Profile,
    /// Buffered token, emitted before any new input is consumed. Holds the
    /// newline implied by a `digits '\n'` sequence, or the trailing `Eof`
    /// after a final token with no terminator.
    pending: Option<Token>,
}

impl<R: Read> AsciiDecoder<R> {
    /// Construct over a source positioned just after the format tag; reads
    /// and validates the version string.
    pub fn new(
        mut reader: R,
        path: impl Into<String>,
        profile: Profile,
    ) -> Result<Self, FormatError> {
        let path = path.into();
        framing::expect_version(&mut reader, &path, Format::Ascii.version())?;
        Ok(Self {
            reader,
            path,
            profile,
            pending: None,
        })
    }

    fn parse_token(&self, text: &str) -> Result<Token, FormatError> {
        if let Some(magnitude) = text.strip_prefix('-') {
            if self.profile == Profile::Index {
                match magnitude {
                    "1" => return Ok(Token::NotFound),
                    "2" => return Ok(Token::Invalid),
                    _ => {}
                }
            }
            return Err(FormatError::malformed(
                &self.path,
                format!("negative value {text:?} in stream"),
            ));
        }
        text.parse::<u64>().map(Token::Value).map_err(|_| {
            FormatError::malformed(&self.path, format!("invalid decimal token {text:?}"))
        })
    }
}

impl<R: Read> TokenDecoder for AsciiDecoder<R> {
    fn next_token(&mut self) -> Result<Token, FormatError> {
        if let Some(token) = self.pending.take() {
            return Ok(token);
        }
        let mut text = String::new();
        loop {
            match read_byte(&mut self.reader)? {
                None => {
                    if text.is_empty() {
                        return Ok(Token::Eof);
                    }
                    // Final token with no terminator: emit it, then EOF.
                    self.pending = Some(Token::Eof);
                    return self.parse_token(&text);
                }
                Some(b'\n') => {
                    if text.is_empty() {
                        return Ok(Token::Newline);
                    }
                    self.pending = Some(Token::Newline);
                    return self.parse_token(&text);
                }
                Some(b' ') => {
                    if text.is_empty() {
                        return Err(FormatError::malformed(
                            &self.path,
                            "separator after newline or another separator",
                        ));
                    }
                    return self.parse_token(&text);
                }
                Some(byte) => text.push(byte as char),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
