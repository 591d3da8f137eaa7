// Idiomatic Rust CLI for Resdiff.
//
// Explicit subcommands, one per operation: the two comparison profiles and
// the line-sorting converter. The library core never terminates the
// process; this module is the only caller of `process::exit`.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::compare::{CompareError, CompareStats};
use crate::convert;
use crate::io::{compare_color_files, compare_index_files};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Multi-format result file comparison oracle.
#[derive(Parser, Debug)]
#[command(
    name = "resdiff",
    version,
    about = "Compare result files across on-disk encodings",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress the success message).
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Compare two index result files (not-found/invalid sentinels allowed).
    Index(CompareArgs),
    /// Compare two color result files (plain values only).
    Color(CompareArgs),
    /// Sort the tail of each whitespace-separated integer line.
    SortLines(SortLinesArgs),
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// First file to compare.
    #[arg(value_hint = ValueHint::FilePath)]
    file1: PathBuf,

    /// Second file to compare.
    #[arg(value_hint = ValueHint::FilePath)]
    file2: PathBuf,
}

#[derive(Args, Debug)]
struct SortLinesArgs {
    /// Input text file (or input manifest with --list).
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output text file (or output manifest with --list).
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Treat the two arguments as manifests listing one file per line.
    #[arg(long)]
    list: bool,
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Index,
    Color,
    SortLines,
}

struct Options {
    command: Command,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    file1: PathBuf,
    file2: PathBuf,
    list: bool,
}

fn resolve_options(cli: Cli) -> Options {
    let quiet = cli.quiet;
    let verbose = cli.verbose.min(2);
    let json_output = cli.json_output;

    match cli.command {
        Cmd::Index(args) => Options {
            command: Command::Index,
            quiet,
            verbose,
            json_output,
            file1: args.file1,
            file2: args.file2,
            list: false,
        },
        Cmd::Color(args) => Options {
            command: Command::Color,
            quiet,
            verbose,
            json_output,
            file1: args.file1,
            file2: args.file2,
            list: false,
        },
        Cmd::SortLines(args) => Options {
            command: Command::SortLines,
            quiet,
            verbose,
            json_output,
            file1: args.input,
            file2: args.output,
            list: args.list,
        },
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("resdiff".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Compare commands
// ---------------------------------------------------------------------------

fn report_match(opts: &Options, stats: CompareStats, profile: &str) {
    if !opts.quiet {
        println!("resdiff: files match");
    }
    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "resdiff: {profile}: {} tokens compared across {} lines",
            stats.tokens, stats.lines
        );
    }
    if opts.json_output {
        let json = serde_json::json!({
            "command": profile,
            "matched": true,
            "lines": stats.lines,
            "tokens": stats.tokens,
        });
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }
}

fn report_divergence(opts: &Options, err: &CompareError, profile: &str) {
    eprintln!("resdiff: {err}");
    if opts.json_output {
        let json = match err {
            CompareError::Mismatch {
                line,
                position,
                left,
                right,
            } => serde_json::json!({
                "command": profile,
                "matched": false,
                "line": line,
                "position": position,
                "left": left.to_string(),
                "right": right.to_string(),
            }),
            other => serde_json::json!({
                "command": profile,
                "matched": false,
                "error": other.to_string(),
            }),
        };
        eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
    }
}

fn cmd_compare(opts: &Options, profile: &str) -> i32 {
    let result = if opts.command == Command::Index {
        compare_index_files(&opts.file1, &opts.file2)
    } else {
        compare_color_files(&opts.file1, &opts.file2)
    };
    match result {
        Ok(stats) => {
            report_match(opts, stats, profile);
            0
        }
        Err(err) => {
            report_divergence(opts, &err, profile);
            1
        }
    }
}

// ---------------------------------------------------------------------------
// Sort-lines command
// ---------------------------------------------------------------------------

fn cmd_sort_lines(opts: &Options) -> i32 {
    let result = if opts.list {
        convert::sort_lines_listed(&opts.file1, &opts.file2)
    } else {
        convert::sort_lines(&opts.file1, &opts.file2)
    };
    match result {
        Ok(lines) => {
            if opts.verbose > 0 && !opts.quiet {
                eprintln!("resdiff: sort-lines: {lines} lines written");
            }
            if opts.json_output {
                let json = serde_json::json!({
                    "command": "sort-lines",
                    "lines": lines,
                });
                eprintln!("{}", serde_json::to_string_pretty(&json).unwrap());
            }
            0
        }
        Err(err) => {
            eprintln!("resdiff: {err}");
            1
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let opts = resolve_options(cli);

    let exit_code = match opts.command {
        Command::Index => cmd_compare(&opts, "index"),
        Command::Color => cmd_compare(&opts, "color"),
        Command::SortLines => cmd_sort_lines(&opts),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
