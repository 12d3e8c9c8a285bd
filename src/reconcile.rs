//! CommonReconciler: second pass over the index file to stage its common
//! rows, then a key-based comparison of the two side buffers, and finally
//! the flush of index rows that never matched anything.
//!
//! The comparison is by key, not by buffer position: a positional zip is
//! only correct when both files visit the common keys in the same
//! relative order, and nothing guarantees that. Matching by key makes
//! reordered inputs compare exactly.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use indexmap::IndexMap;

use crate::config::DiffConfig;
use crate::error::{self, DiffError};
use crate::index::RowIndex;
use crate::row::Projection;
use crate::sink::{ResultSink, SideBufferSink, SideRow};

#[derive(Debug, Default)]
pub struct ReconcileOutcome {
    /// Common keys whose rows differ; both versions were emitted.
    pub mismatched: usize,
    /// Target rows whose key had no index-side partner, emitted verbatim.
    pub one_sided_target: usize,
    /// Index rows whose key had no target-side partner, emitted verbatim.
    pub one_sided_index: usize,
}

/// Re-read the index file and stage its common rows, in file order, into
/// the index-side buffer. Non-common rows are left for `flush_unmatched`.
pub fn stage<R: Read>(
    reader: &mut Reader<R>,
    path: &Path,
    projection: &Projection,
    common_ids: &HashSet<String>,
    side_buffer: &SideBufferSink,
) -> Result<(), DiffError> {
    for record in reader.records() {
        let record = record.map_err(|e| error::from_read(path, e))?;
        let fields = projection.apply(&record);
        if common_ids.contains(&fields[0]) {
            side_buffer.submit(SideRow {
                key: fields[0].clone(),
                fields,
            })?;
        }
    }
    Ok(())
}

/// Compare the two side buffers and emit every discrepancy. `target_rows`
/// is walked in its scan order; each row is matched against the index
/// side by key. Equal pairs emit nothing, unequal pairs emit both
/// versions (target first), and anything left on either side is emitted
/// verbatim.
pub fn diff(
    target_rows: Vec<SideRow>,
    index_rows: Vec<SideRow>,
    result: &ResultSink,
    config: &DiffConfig,
) -> Result<ReconcileOutcome, DiffError> {
    let mut by_key: IndexMap<String, Vec<String>> = index_rows
        .into_iter()
        .map(|row| (row.key, row.fields))
        .collect();

    let mut outcome = ReconcileOutcome::default();

    for row in target_rows {
        // swap_remove keeps every removal O(1). The leftover walk below
        // loses the index file's relative order, which no output row
        // depends on.
        match by_key.swap_remove(&row.key) {
            Some(index_fields) if index_fields == row.fields => {}
            Some(index_fields) => {
                config.trace_row("target", &row.fields);
                config.trace_row("index", &index_fields);
                result.submit(row.fields)?;
                result.submit(index_fields)?;
                outcome.mismatched += 1;
            }
            // Unreachable when both buffers were built from the same
            // CommonIdSet, but a one-sided row is a difference either way.
            None => {
                config.trace_row("target", &row.fields);
                result.submit(row.fields)?;
                outcome.one_sided_target += 1;
            }
        }
    }

    for (_, leftover) in by_key {
        config.trace_row("index", &leftover);
        result.submit(leftover)?;
        outcome.one_sided_index += 1;
    }

    Ok(outcome)
}

/// Emit every index row whose key never appeared in the target file.
/// Rows come out in the index file's original order.
pub fn flush_unmatched(
    index: RowIndex,
    common_ids: &HashSet<String>,
    result: &ResultSink,
    config: &DiffConfig,
) -> Result<usize, DiffError> {
    let mut flushed = 0usize;
    for (key, fields) in index.into_rows() {
        if !common_ids.contains(&key) {
            config.trace_row("index", &fields);
            result.submit(fields)?;
            flushed += 1;
        }
    }
    Ok(flushed)
}
