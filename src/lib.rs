//! Resdiff: lockstep comparison of multi-format result files.
//!
//! The crate provides:
//! - Stream decoders for the supported on-disk encodings (`format`)
//! - The lockstep comparator and boolean projection (`compare`)
//! - File-oriented comparison drivers (`io`)
//! - The line-sorting text converter (`convert`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use resdiff::compare::CompareError;
//! use resdiff::io::compare_index_files;
//!
//! match compare_index_files(Path::new("reference.bin"), Path::new("candidate.txt")) {
//!     Ok(stats) => println!("match: {} tokens over {} lines", stats.tokens, stats.lines),
//!     Err(CompareError::Mismatch { line, position, left, right }) => {
//!         eprintln!("differ at line {line}, position {position}: {left} != {right}");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod compare;
pub mod convert;
pub mod format;
pub mod io;

#[cfg(feature = "cli")]
pub mod cli;
