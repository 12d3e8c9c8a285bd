// CLI-specific types and structures
// This module contains the command-line interface definitions.

use clap::Parser;

use crate::config::RESULT_FILE_NAME;

// CLI structure - contains all command-line arguments and options
#[derive(Parser)]
#[command(name = "csvdiff")]
#[command(about = "Compare two CSV files by primary key and write the rows that differ")]
#[command(
    long_about = "Compare two CSV files by primary key and write the rows that differ\n\nThe first column of the header is the primary key. The smaller input (by byte\nsize) is indexed in memory; the larger one is streamed against it. The result\nfile contains the shared header followed by every row that exists in only one\nfile, plus both versions of every row whose non-key fields disagree.\n\nCOMMON EXAMPLES:\n  csvdiff before.csv after.csv\n  csvdiff before.csv after.csv -o changes.csv\n  csvdiff before.csv after.csv -x updated_at -x etag"
)]
#[command(version)]
pub struct Cli {
    /// CSV files to compare (the smaller becomes the index side)
    #[arg(num_args = 2, value_names = ["FILE_A", "FILE_B"], required = true)]
    pub files: Vec<String>,

    /// Destination file for the diff rows
    #[arg(
        short = 'o',
        long = "out",
        default_value = RESULT_FILE_NAME,
        help_heading = "Output Options"
    )]
    pub out: String,

    /// Exclude a column from the comparison (repeatable; the key column cannot be excluded)
    #[arg(
        short = 'x',
        long = "exclude",
        value_name = "COLUMN",
        help_heading = "Comparison Options"
    )]
    pub exclude: Vec<String>,

    /// Capacity of each writer queue before a submission blocks
    #[arg(
        long = "queue-size",
        default_value_t = 1024,
        help_heading = "Performance Options"
    )]
    pub queue_size: usize,

    /// Suppress the end-of-run summary
    #[arg(short = 'q', long = "quiet", help_heading = "Display Options")]
    pub quiet: bool,

    /// Log every emitted diff row to stderr
    #[arg(
        short = 'v',
        long = "verbose",
        conflicts_with = "quiet",
        help_heading = "Display Options"
    )]
    pub verbose: bool,
}
