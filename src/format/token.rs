// Token vocabulary shared by every stream decoder.
//
// A decoder turns raw bytes into a flat sequence of tokens; lines are an
// implicit grouping (a maximal run of value-like tokens bounded by
// `Newline`, stream start, or `Eof`).

use std::fmt;

/// One decoded unit of a result stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// No more data in the stream.
    Eof,
    /// End of the current logical line.
    Newline,
    /// A decoded value at the current position within the current line.
    Value(u64),
    /// Value absent upstream (index profile only).
    NotFound,
    /// Value malformed/unavailable upstream (index profile only).
    Invalid,
}

/// The payload-free classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Newline,
    Value,
    NotFound,
    Invalid,
}

impl Token {
    /// The kind of this token, ignoring any payload.
    #[inline]
    pub fn kind(self) -> TokenKind {
        match self {
            Token::Eof => TokenKind::Eof,
            Token::Newline => TokenKind::Newline,
            Token::Value(_) => TokenKind::Value,
            Token::NotFound => TokenKind::NotFound,
            Token::Invalid => TokenKind::Invalid,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "EOF"),
            Token::Newline => write!(f, "newline"),
            Token::Value(v) => write!(f, "value {v}"),
            Token::NotFound => write!(f, "not-found"),
            Token::Invalid => write!(f, "invalid"),
        }
    }
}

/// Which sentinel vocabulary a stream uses.
///
/// Index streams may carry `NotFound`/`Invalid` sentinels alongside plain
/// values; color streams are values-only. The two profiles also disagree on
/// some byte-level conventions (see the binary and packed-int decoders).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Index,
    Color,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
