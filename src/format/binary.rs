// Fixed-width binary decoder: 8-byte little-endian unsigned words.
//
// The sentinel convention depends on the profile. Index streams reserve the
// top three values of the u64 range; color streams reserve only the top one:
//
//   index:  u64::MAX -> not-found, MAX-1 -> invalid, MAX-2 -> newline
//   color:  u64::MAX -> newline
//
// A zero-byte read is a clean EOF; a 1..=7 byte read is a truncated record.

use std::io::Read;

use super::framing::{self, Format};
use super::token::{Profile, Token};
use super::{FormatError, TokenDecoder, read_full};

const WORD: usize = 8;

#[derive(Debug)]
pub struct BinaryDecoder<R> {
    reader: R,
    path: String,
    profile: Profile,
}

impl<R: Read> BinaryDecoder<R> {
    /// Construct over a source positioned just after the format tag; reads
    /// and validates the version string.
    pub fn new(
        mut reader: R,
        path: impl Into<String>,
        profile: Profile,
    ) -> Result<Self, FormatError> {
        let path = path.into();
        framing::expect_version(&mut reader, &path, Format::Binary.version())?;
        Ok(Self {
            reader,
            path,
            profile,
        })
    }
}

impl<R: Read> TokenDecoder for BinaryDecoder<R> {
    fn next_token(&mut self) -> Result<Token, FormatError> {
        let mut word = [0u8; WORD];
        let n = read_full(&mut self.reader, &mut word)?;
        if n == 0 {
            return Ok(Token::Eof);
        }
        if n < WORD {
            return Err(FormatError::malformed(
                &self.path,
                format!("truncated record: expected {WORD} bytes, got {n}"),
            ));
        }
        let value = u64::from_le_bytes(word);
        let token = match self.profile {
            Profile::Index => match value {
                u64::MAX => Token::NotFound,
                v if v == u64::MAX - 1 => Token::Invalid,
                v if v == u64::MAX - 2 => Token::Newline,
                v => Token::Value(v),
            },
            Profile::Color => {
                if value == u64::MAX {
                    Token::Newline
                } else {
                    Token::Value(value)
                }
            }
        };
        Ok(token)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
