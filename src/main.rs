use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod config;
mod error;
mod index;
mod inputs;
mod reconcile;
mod row;
mod scan;
mod sink;

use cli::Cli;
use config::DiffConfig;
use inputs::InputPair;
use row::Projection;
use sink::{ResultSink, SideBufferSink, SinkConfig};

/// Process exit codes
#[derive(Debug, Clone, Copy)]
enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidUsage = 2,
}

impl ExitCode {
    fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}

/// What the run found, for the end-of-run summary and the identity check.
#[derive(Debug)]
struct RunSummary {
    exclusive_target: usize,
    mismatched: usize,
    exclusive_index: usize,
}

impl RunSummary {
    /// True iff no difference row was emitted (files identical after
    /// projection).
    fn identical(&self) -> bool {
        self.exclusive_target == 0 && self.mismatched == 0 && self.exclusive_index == 0
    }

    fn describe(&self) -> String {
        if self.identical() {
            "files are identical".to_string()
        } else {
            format!(
                "{} mismatched, {} only in target, {} only in index",
                self.mismatched, self.exclusive_target, self.exclusive_index
            )
        }
    }
}

/// The three-phase diff run: build the index over the smaller file,
/// stream the larger file against it, then reconcile the common rows and
/// flush whatever the index still owes the result.
fn run(config: &DiffConfig) -> Result<RunSummary> {
    let pair = InputPair::resolve(config);

    // Phase 1 setup: read the header and resolve the projection before
    // the result file is created.
    let mut index_reader = pair.open_index()?;
    let header = index_reader
        .headers()
        .map_err(|e| error::from_read(pair.index_path(), e))?
        .clone();
    let projection = Projection::from_header(pair.index_path(), &header, &config.exclude)?;

    let sink_config = SinkConfig {
        queue_size: config.queue_size,
    };
    let result = ResultSink::spawn(&config.out, &sink_config)?;
    let summary = run_phases(config, &pair, &projection, index_reader, &result, &sink_config);

    // Join the writer even when a phase failed: when a submit dies of a
    // broken pipe, the join holds the write error that actually killed
    // the thread.
    match result.finish() {
        Ok(()) => summary,
        Err(write_err) => Err(write_err.into()),
    }
}

fn run_phases(
    config: &DiffConfig,
    pair: &InputPair,
    projection: &Projection,
    mut index_reader: csv::Reader<std::fs::File>,
    result: &ResultSink,
    sink_config: &SinkConfig,
) -> Result<RunSummary> {
    // Phase 1: index the smaller file; the header reaches the result
    // before any data row.
    let row_index = index::build(&mut index_reader, pair.index_path(), projection, result)
        .with_context(|| format!("indexing {}", pair.index_path().display()))?;
    drop(index_reader);

    config.note(&format!(
        "indexed {} rows from {}",
        row_index.len(),
        pair.index_path().display()
    ));
    if row_index.is_empty() {
        config.warn(&format!(
            "{} has no data rows",
            pair.index_path().display()
        ));
    }

    // Phase 2: stream the target file. The side buffer is drained before
    // the reconciler may look at it.
    let mut target_reader = pair.open_target()?;
    let side_target = SideBufferSink::spawn("common_rows_target", sink_config)?;
    let outcome = scan::scan(
        &mut target_reader,
        pair.target_path(),
        projection,
        &row_index,
        result,
        &side_target,
        config,
    )
    .with_context(|| format!("scanning {}", pair.target_path().display()))?;
    let target_rows = side_target.finish()?;
    drop(target_reader);

    // Phase 3: second pass over the index file, then the comparison and
    // the flush of index rows that never matched.
    let mut index_reader = pair.open_index()?;
    let side_index = SideBufferSink::spawn("common_rows_index", sink_config)?;
    reconcile::stage(
        &mut index_reader,
        pair.index_path(),
        projection,
        &outcome.common_ids,
        &side_index,
    )
    .with_context(|| format!("re-reading {}", pair.index_path().display()))?;
    let index_rows = side_index.finish()?;

    let reconciled = reconcile::diff(target_rows, index_rows, result, config)?;
    let flushed = reconcile::flush_unmatched(row_index, &outcome.common_ids, result, config)?;

    Ok(RunSummary {
        exclusive_target: outcome.exclusive_rows + reconciled.one_sided_target,
        mismatched: reconciled.mismatched,
        exclusive_index: flushed + reconciled.one_sided_index,
    })
}

fn main() {
    let cli = Cli::parse();

    let config = match DiffConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("csvdiff: error: {}", e);
            ExitCode::InvalidUsage.exit();
        }
    };

    match run(&config) {
        Ok(summary) => {
            config.note(&format!(
                "{} -> {}",
                summary.describe(),
                config.out.display()
            ));
            ExitCode::Success.exit();
        }
        Err(e) => {
            eprintln!("{}", config.format_error_message(&format!("{:#}", e)));
            ExitCode::GeneralError.exit();
        }
    }
}
