// File-level comparison drivers.
//
// Opens the two files, identifies each one's encoding (framed format tag,
// or the `.csv` extension for the untagged one-hot format), builds the
// matching decoders, and runs a lockstep session. File handles are dropped
// on every exit path when the boxed decoders go out of scope.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::compare::{self, BoolLens, CompareError, CompareStats};
use crate::format::{
    AsciiDecoder, BinaryDecoder, BoolDecoder, CsvDecoder, Format, FormatError, PackedIntDecoder,
    Profile, TokenDecoder, framing,
};

const BUF_SIZE: usize = 64 * 1024; // 64 KiB

fn open_reader(path: &Path) -> Result<(BufReader<File>, String), FormatError> {
    let label = path.display().to_string();
    let file = File::open(path).map_err(|source| FormatError::Open {
        path: label.clone(),
        source,
    })?;
    Ok((BufReader::with_capacity(BUF_SIZE, file), label))
}

// ---------------------------------------------------------------------------
// Index profile
// ---------------------------------------------------------------------------

fn open_index_decoder(path: &Path) -> Result<(Box<dyn TokenDecoder>, Format), FormatError> {
    let (mut reader, label) = open_reader(path)?;
    let tag = framing::read_string(&mut reader, &label)?;
    let format = Format::from_tag(&tag).ok_or_else(|| FormatError::UnknownFormat {
        path: label.clone(),
        tag: tag.clone(),
    })?;
    debug!("{label}: index stream, format {tag}");
    let decoder: Box<dyn TokenDecoder> = match format {
        Format::Ascii => Box::new(AsciiDecoder::new(reader, label, Profile::Index)?),
        Format::Binary => Box::new(BinaryDecoder::new(reader, label, Profile::Index)?),
        Format::Bool => Box::new(BoolDecoder::new(reader, label)?),
        Format::PackedInt => Box::new(PackedIntDecoder::new(reader, label, Profile::Index)?),
    };
    Ok((decoder, format))
}

/// Compare two index result files (not-found/invalid sentinels allowed).
///
/// If either file is bool-encoded, both sides are run through the boolean
/// projection so full-sentinel streams compare meaningfully against the
/// boolean rendition.
pub fn compare_index_files(path1: &Path, path2: &Path) -> Result<CompareStats, CompareError> {
    let (decoder1, format1) = open_index_decoder(path1)?;
    let (decoder2, format2) = open_index_decoder(path2)?;

    if format1 == Format::Bool || format2 == Format::Bool {
        let mut left = BoolLens::new(decoder1);
        let mut right = BoolLens::new(decoder2);
        compare::compare_streams(&mut left, &mut right)
    } else {
        let mut left = decoder1;
        let mut right = decoder2;
        compare::compare_streams(&mut left, &mut right)
    }
}

// ---------------------------------------------------------------------------
// Color profile
// ---------------------------------------------------------------------------

fn open_color_decoder(path: &Path) -> Result<Box<dyn TokenDecoder>, FormatError> {
    let (mut reader, label) = open_reader(path)?;
    if path.extension().is_some_and(|ext| ext == "csv") {
        debug!("{label}: color stream, one-hot CSV");
        return Ok(Box::new(CsvDecoder::new(reader, label)?));
    }
    let tag = framing::read_string(&mut reader, &label)?;
    debug!("{label}: color stream, format {tag}");
    match Format::from_tag(&tag) {
        Some(Format::Ascii) => Ok(Box::new(AsciiDecoder::new(reader, label, Profile::Color)?)),
        Some(Format::Binary) => Ok(Box::new(BinaryDecoder::new(reader, label, Profile::Color)?)),
        Some(Format::PackedInt) => Ok(Box::new(PackedIntDecoder::new(
            reader,
            label,
            Profile::Color,
        )?)),
        // bool is not a color encoding.
        Some(Format::Bool) | None => Err(FormatError::UnknownFormat { path: label, tag }),
    }
}

/// Compare two color result files (plain values, no sentinels).
pub fn compare_color_files(path1: &Path, path2: &Path) -> Result<CompareStats, CompareError> {
    let mut left = open_color_decoder(path1)?;
    let mut right = open_color_decoder(path2)?;
    compare::compare_streams(&mut left, &mut right)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
