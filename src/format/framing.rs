// Length-prefixed string framing shared by the tagged formats.
//
// A framed string is an 8-byte little-endian unsigned length followed by
// that many bytes of UTF-8 text. Tagged files open with a framed format tag
// and then a framed version string; CSV files carry no framing at all.

use std::io::Read;

use log::debug;

use super::{FormatError, read_full};

/// Upper bound on a framed string length. Anything larger is taken as
/// evidence that the stream is not actually framed.
pub const MAX_STRING_LEN: u64 = 100_000;

/// Read one length-prefixed UTF-8 string.
pub fn read_string<R: Read>(r: &mut R, path: &str) -> Result<String, FormatError> {
    let mut len_buf = [0u8; 8];
    let n = read_full(r, &mut len_buf)?;
    if n < len_buf.len() {
        return Err(FormatError::malformed(
            path,
            "truncated length prefix in framed string",
        ));
    }
    let len = u64::from_le_bytes(len_buf);
    if len > MAX_STRING_LEN {
        return Err(FormatError::malformed(
            path,
            format!("framed string length {len} exceeds limit {MAX_STRING_LEN}"),
        ));
    }
    let mut bytes = vec![0u8; len as usize];
    let n = read_full(r, &mut bytes)?;
    if n < bytes.len() {
        return Err(FormatError::malformed(
            path,
            format!("framed string truncated: expected {len} bytes, got {n}"),
        ));
    }
    String::from_utf8(bytes)
        .map_err(|_| FormatError::malformed(path, "framed string is not valid UTF-8"))
}

/// Read the version string and check it against the format's constant.
pub fn expect_version<R: Read>(
    r: &mut R,
    path: &str,
    expected: &'static str,
) -> Result<(), FormatError> {
    let found = read_string(r, path)?;
    if found != expected {
        return Err(FormatError::VersionMismatch {
            path: path.to_string(),
            expected,
            found,
        });
    }
    debug!("{path}: version {found} ok");
    Ok(())
}

// ---------------------------------------------------------------------------
// Format tags
// ---------------------------------------------------------------------------

/// The tagged on-disk encodings. CSV is deliberately absent: it has no
/// tag/version framing and is recognized by file extension instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ascii,
    Binary,
    Bool,
    PackedInt,
}

impl Format {
    pub fn from_tag(tag: &str) -> Option<Format> {
        match tag {
            "ascii" => Some(Format::Ascii),
            "binary" => Some(Format::Binary),
            "bool" => Some(Format::Bool),
            "packedint" => Some(Format::PackedInt),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Format::Ascii => "ascii",
            Format::Binary => "binary",
            Format::Bool => "bool",
            Format::PackedInt => "packedint",
        }
    }

    /// Expected version string for this format.
    pub fn version(self) -> &'static str {
        match self {
            Format::Bool => "v2.0",
            _ => "v1.0",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
