// Line-sorting text converter.
//
// Rewrites a text file of whitespace-separated integers line by line: the
// first token of each line is an index and stays put, the remaining tokens
// are sorted ascending. Lines with zero or one tokens pass through
// verbatim. Shares nothing with the decoder/comparator core.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}:{line_no}: {detail}")]
    BadLine {
        path: String,
        line_no: u64,
        detail: String,
    },

    #[error("file lists differ in length: {inputs} inputs, {outputs} outputs")]
    ListLengthMismatch { inputs: usize, outputs: usize },
}

fn open_error(path: &Path, source: io::Error) -> ConvertError {
    ConvertError::Open {
        path: path.display().to_string(),
        source,
    }
}

/// Sort the tail of every line of `input` into `output`; returns the number
/// of lines written.
pub fn sort_lines(input: &Path, output: &Path) -> Result<u64, ConvertError> {
    let reader = BufReader::new(File::open(input).map_err(|e| open_error(input, e))?);
    let mut writer = BufWriter::new(File::create(output).map_err(|e| open_error(output, e))?);
    let mut written: u64 = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut numbers = parse_line(&line, input, idx as u64)?;
        if numbers.len() > 1 {
            numbers[1..].sort_unstable();
            let mut rendered = String::with_capacity(line.len());
            for (i, n) in numbers.iter().enumerate() {
                if i > 0 {
                    rendered.push(' ');
                }
                rendered.push_str(&n.to_string());
            }
            writer.write_all(rendered.as_bytes())?;
        } else {
            writer.write_all(line.as_bytes())?;
        }
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

fn parse_line(line: &str, path: &Path, line_no: u64) -> Result<Vec<i64>, ConvertError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| ConvertError::BadLine {
                path: path.display().to_string(),
                line_no,
                detail: format!("invalid integer token {token:?}"),
            })
        })
        .collect()
}

/// Manifest mode: each line of `manifest_in` names a file to convert into
/// the file named on the corresponding line of `manifest_out`. Returns the
/// total number of lines written across all conversions.
pub fn sort_lines_listed(manifest_in: &Path, manifest_out: &Path) -> Result<u64, ConvertError> {
    let inputs = read_manifest(manifest_in)?;
    let outputs = read_manifest(manifest_out)?;
    if inputs.len() != outputs.len() {
        return Err(ConvertError::ListLengthMismatch {
            inputs: inputs.len(),
            outputs: outputs.len(),
        });
    }
    let mut total: u64 = 0;
    for (input, output) in inputs.iter().zip(&outputs) {
        total += sort_lines(Path::new(input), Path::new(output))?;
    }
    Ok(total)
}

fn read_manifest(path: &Path) -> Result<Vec<String>, ConvertError> {
    let reader = BufReader::new(File::open(path).map_err(|e| open_error(path, e))?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            entries.push(trimmed.to_string());
        }
    }
    Ok(entries)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
