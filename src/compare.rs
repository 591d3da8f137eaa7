// Lockstep stream comparator.
//
// Drives two decoders one token at a time and stops at the first point of
// divergence. Coordinates are (line, position): `line` counts newline
// tokens seen so far, `position` is the 0-based index of the current token
// within its line and resets immediately after every newline. Both streams
// are advanced exactly once per step; no step is skipped or repeated.

use log::debug;
use thiserror::Error;

use crate::format::{FormatError, Token, TokenDecoder};

// ---------------------------------------------------------------------------
// Errors and stats
// ---------------------------------------------------------------------------

/// Why a comparison session stopped short of success.
#[derive(Debug, Error)]
pub enum CompareError {
    /// One of the streams failed to decode.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The streams disagree. A stream ending early surfaces here too, as an
    /// EOF-vs-other-kind divergence.
    #[error("streams differ at line {line}, position {position}: {left} != {right}")]
    Mismatch {
        line: u64,
        position: u64,
        left: Token,
        right: Token,
    },
}

/// Counters from a successful session.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareStats {
    /// Complete lines seen (newline tokens matched).
    pub lines: u64,
    /// Value-like tokens matched (values, not-founds, invalids).
    pub tokens: u64,
}

// ---------------------------------------------------------------------------
// Comparator
// ---------------------------------------------------------------------------

/// Compare two token streams in lockstep until both hit EOF (success) or
/// the first divergence (error).
pub fn compare_streams(
    left: &mut dyn TokenDecoder,
    right: &mut dyn TokenDecoder,
) -> Result<CompareStats, CompareError> {
    let mut line: u64 = 0;
    let mut position: u64 = 0;
    let mut tokens: u64 = 0;

    loop {
        let l = left.next_token()?;
        let r = right.next_token()?;
        match (l, r) {
            (Token::Eof, Token::Eof) => {
                debug!("streams match: {tokens} tokens across {line} lines");
                return Ok(CompareStats { lines: line, tokens });
            }
            (Token::Newline, Token::Newline) => {
                line += 1;
                position = 0;
            }
            (Token::Value(lv), Token::Value(rv)) => {
                if lv != rv {
                    return Err(CompareError::Mismatch {
                        line,
                        position,
                        left: l,
                        right: r,
                    });
                }
                position += 1;
                tokens += 1;
            }
            // Payload-free sentinels match on kind alone.
            (Token::NotFound, Token::NotFound) | (Token::Invalid, Token::Invalid) => {
                position += 1;
                tokens += 1;
            }
            _ => {
                return Err(CompareError::Mismatch {
                    line,
                    position,
                    left: l,
                    right: r,
                });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Boolean projection
// ---------------------------------------------------------------------------

/// Projects any token stream onto the boolean vocabulary: a value of any
/// magnitude reads as "found" (`Value(1)`), the not-found/invalid sentinels
/// read as "missing" (`Value(0)`), and line/stream structure passes
/// through. Applied to BOTH sides whenever either file is bool-encoded, so
/// a bool file can be compared against e.g. a binary file that still
/// carries full sentinels.
pub struct BoolLens<D> {
    inner: D,
}

impl<D: TokenDecoder> BoolLens<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: TokenDecoder> TokenDecoder for BoolLens<D> {
    fn next_token(&mut self) -> Result<Token, FormatError> {
        Ok(match self.inner.next_token()? {
            Token::Value(_) => Token::Value(1),
            Token::NotFound | Token::Invalid => Token::Value(0),
            passthrough => passthrough,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
