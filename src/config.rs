//! Runtime configuration built from the CLI, plus the stderr messaging
//! helpers used across the run. There is no global logger; every component
//! that wants to talk to the user borrows the config.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::DiffError;

/// Default destination when -o/--out is not given.
pub const RESULT_FILE_NAME: &str = "result_diff.csv";

#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub out: PathBuf,
    pub exclude: Vec<String>,
    pub queue_size: usize,
    pub quiet: bool,
    pub verbose: bool,
}

impl DiffConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, DiffError> {
        if cli.queue_size == 0 {
            return Err(DiffError::Argument(
                "queue size must be greater than 0".to_string(),
            ));
        }

        let mut exclude = cli.exclude.clone();
        exclude.dedup();

        Ok(Self {
            file_a: PathBuf::from(&cli.files[0]),
            file_b: PathBuf::from(&cli.files[1]),
            out: PathBuf::from(&cli.out),
            exclude,
            queue_size: cli.queue_size,
            quiet: cli.quiet,
            verbose: cli.verbose,
        })
    }

    pub fn format_error_message(&self, msg: &str) -> String {
        format!("csvdiff: error: {}", msg)
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("csvdiff: warning: {}", msg);
    }

    pub fn note(&self, msg: &str) {
        if !self.quiet {
            eprintln!("csvdiff: {}", msg);
        }
    }

    /// Per-row trace for emitted diff rows, enabled with -v.
    /// `side` is "target" or "index", matching the glossary.
    pub fn trace_row(&self, side: &str, fields: &[String]) {
        if self.verbose {
            eprintln!("csvdiff: [{}] {}", side, fields.join(","));
        }
    }
}
