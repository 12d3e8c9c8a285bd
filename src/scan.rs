//! PartitionScanner: one streaming pass over the larger file, splitting
//! its rows into "exclusive to the target" (straight to the result) and
//! "common to both" (key recorded, row staged in the target side buffer).

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::Reader;

use crate::config::DiffConfig;
use crate::error::{self, DiffError};
use crate::index::RowIndex;
use crate::row::Projection;
use crate::sink::{ResultSink, SideBufferSink, SideRow};

#[derive(Debug)]
pub struct ScanOutcome {
    /// Keys present in both files.
    pub common_ids: HashSet<String>,
    /// Rows that exist only in the target file, already emitted.
    pub exclusive_rows: usize,
}

/// Stream the target file against the index. No field comparison happens
/// here; common rows are only staged so both sides later go through one
/// identical comparison path. The caller drains the side buffer before
/// the reconciler runs.
pub fn scan<R: Read>(
    reader: &mut Reader<R>,
    path: &Path,
    projection: &Projection,
    index: &RowIndex,
    result: &ResultSink,
    side_buffer: &SideBufferSink,
    config: &DiffConfig,
) -> Result<ScanOutcome, DiffError> {
    let mut common_ids = HashSet::new();
    let mut exclusive_rows = 0usize;

    for record in reader.records() {
        let record = record.map_err(|e| error::from_read(path, e))?;
        let fields = projection.apply(&record);
        let key = fields[0].clone();

        if index.contains(&key) {
            // Append order must match scan order here; the dedicated
            // writer thread guarantees it.
            common_ids.insert(key.clone());
            side_buffer.submit(SideRow { key, fields })?;
        } else {
            config.trace_row("target", &fields);
            result.submit(fields)?;
            exclusive_rows += 1;
        }
    }

    Ok(ScanOutcome {
        common_ids,
        exclusive_rows,
    })
}
