// Boolean decoder: one character per token, versioned "v2.0".
//
// '0' is a present result, '1' is not-found, '2' is invalid. A comparison
// involving this format runs both sides through the boolean projection in
// the compare module, so '0' ultimately reads as "found" there.

use std::io::Read;

use super::framing::{self, Format};
use super::token::Token;
use super::{FormatError, TokenDecoder, read_byte};

#[derive(Debug)]
pub struct BoolDecoder<R> {
    reader: R,
    path: String,
}

impl<R: Read> BoolDecoder<R> {
    /// Construct over a source positioned just after the format tag; reads
    /// and validates the version string.
    pub fn new(mut reader: R, path: impl Into<String>) -> Result<Self, FormatError> {
        let path = path.into();
        framing::expect_version(&mut reader, &path, Format::Bool.version())?;
        Ok(Self { reader, path })
    }
}

impl<R: Read> TokenDecoder for BoolDecoder<R> {
    fn next_token(&mut self) -> Result<Token, FormatError> {
        let token = match read_byte(&mut self.reader)? {
            None => Token::Eof,
            Some(b'\n') => Token::Newline,
            Some(b'0') => Token::Value(0),
            Some(b'1') => Token::NotFound,
            Some(b'2') => Token::Invalid,
            Some(other) => {
                return Err(FormatError::malformed(
                    &self.path,
                    format!("invalid character {:?} in bool stream", other as char),
                ));
            }
        };
        Ok(token)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
