use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glob::glob;

use brscan_core::{FormatError, Record, decode, hex_dump};

/// Data was present but structurally invalid.
const EXIT_INVALID_DATA: u8 = 2;
/// The input could not be read far enough (truncated file, I/O failure).
const EXIT_TRUNCATED: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "brscan")]
#[command(version)]
#[command(
    about = "Decoder for BOSS BR-series recorder metadata files.",
    long_about = None,
    after_help = "Examples:\n  brscan decode DISKINFO.BR0\n  brscan decode --json 'ROOT/*.BR0'\n  brscan dump SONG0001.BR0"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode metadata files and print their records.
    Decode {
        /// Files to decode; glob patterns are expanded
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Print records as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,

        /// Suppress file and record-type headings
        #[arg(long)]
        quiet: bool,
    },
    /// Print a hex dump of a file's raw contents.
    Dump {
        /// File to dump
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            inputs,
            json,
            pretty,
            quiet,
        } => cmd_decode(inputs, json, pretty, quiet),
        Commands::Dump { input } => cmd_dump(input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(err.code)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
    code: u8,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
            code: EXIT_INVALID_DATA,
        }
    }

    fn unreadable(err: anyhow::Error) -> Self {
        Self {
            message: format!("{err:#}"),
            hint: None,
            code: EXIT_TRUNCATED,
        }
    }

    fn from_format(err: FormatError) -> Self {
        let code = if err.is_truncation() {
            EXIT_TRUNCATED
        } else {
            EXIT_INVALID_DATA
        };
        let hint = match err {
            FormatError::AudioDataFile => {
                Some("audio payloads are not decodable; use `brscan dump` to inspect".to_string())
            }
            _ => None,
        };
        Self {
            message: err.to_string(),
            hint,
            code,
        }
    }

    fn with_path(mut self, path: &Path) -> Self {
        self.message = format!("{}: {}", path.display(), self.message);
        self
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(inputs: Vec<PathBuf>, json: bool, pretty: bool, quiet: bool) -> Result<(), CliError> {
    let files = resolve_inputs(&inputs)?;

    if let [file] = files.as_slice() {
        return decode_one(file, json, pretty, quiet).map_err(|err| err.with_path(file));
    }

    // Batch mode: every file is attempted; placeholder records are successes
    // and never abort the run.
    let mut failures = 0usize;
    let mut exit = 0u8;
    for file in &files {
        if !quiet {
            println!("== {}", file.display());
        }
        if let Err(err) = decode_one(file, json, pretty, quiet) {
            failures += 1;
            eprintln!("error: {}: {}", file.display(), err.message);
            if let Some(hint) = &err.hint {
                eprintln!("hint: {}", hint);
            }
            if exit == 0 {
                exit = err.code;
            }
        }
    }

    if failures > 0 {
        let mut summary = CliError::new(
            format!("{failures} of {} files failed to decode", files.len()),
            None,
        );
        summary.code = exit;
        return Err(summary);
    }
    Ok(())
}

// Errors come back without the path; callers prefix it.
fn decode_one(path: &Path, json: bool, pretty: bool, quiet: bool) -> Result<(), CliError> {
    let data = fs::read(path)
        .context("failed to read input")
        .map_err(CliError::unreadable)?;
    let record = decode(&data).map_err(CliError::from_format)?;
    print_record(&record, json, pretty, quiet)
}

fn print_record(record: &Record, json: bool, pretty: bool, quiet: bool) -> Result<(), CliError> {
    if json {
        let text = if pretty {
            serde_json::to_string_pretty(record)
        } else {
            serde_json::to_string(record)
        }
        .context("JSON serialization failed")?;
        println!("{text}");
        return Ok(());
    }

    if !quiet {
        println!("File type: {}", record.file_type());
    }
    match record {
        Record::DiskInfo(info) => println!("DISKINFO: song_count={}", info.song_count),
        Record::SongInfo(info) => println!("SONGINFO: song_name={}", info.song_name),
        Record::Unimplemented(placeholder) => {
            println!("{}: no decoder implemented", placeholder.file_type)
        }
    }
    Ok(())
}

fn cmd_dump(input: PathBuf) -> Result<(), CliError> {
    let data = fs::read(&input)
        .with_context(|| format!("failed to read input: {}", input.display()))
        .map_err(CliError::unreadable)?;
    print!("{}", hex_dump(&input.display().to_string(), &data));
    Ok(())
}

fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for input in inputs {
        let pattern = input.to_string_lossy();
        if !is_glob_pattern(&pattern) {
            files.push(input.clone());
            continue;
        }

        let paths = glob(&pattern).map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err.msg)),
            )
        })?;
        let mut matched = 0usize;
        for entry in paths {
            let path = entry.map_err(|err| {
                CliError::new(
                    format!("invalid input pattern '{}'", pattern),
                    Some(format!("pattern error: {}", err)),
                )
            })?;
            if path.is_file() {
                files.push(path);
                matched += 1;
            }
        }
        if matched == 0 {
            return Err(CliError::new(
                format!("no files match pattern '{}'", pattern),
                Some("check the path or quote the pattern".to_string()),
            ));
        }
    }
    Ok(files)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
