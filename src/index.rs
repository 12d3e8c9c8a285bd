//! KeyIndexer: one pass over the smaller file, producing the key→row
//! index and emitting the (projected) header to the result sink.

use std::io::Read;
use std::path::Path;

use csv::Reader;
use indexmap::IndexMap;

use crate::error::{self, DiffError};
use crate::row::Projection;
use crate::sink::ResultSink;

/// Key→row mapping over the index file. Insertion order is the file's
/// row order, which the end-of-run flush of unmatched rows relies on.
#[derive(Debug)]
pub struct RowIndex {
    map: IndexMap<String, Vec<String>>,
}

impl RowIndex {
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rows in original file order, consuming the index. The index is
    /// owned by a single run and discarded afterwards.
    pub fn into_rows(self) -> impl Iterator<Item = (String, Vec<String>)> {
        self.map.into_iter()
    }
}

/// Build the index from an already-open reader. The header goes to the
/// result sink before any data row is touched. Duplicate keys are
/// last-write-wins: a later row with the same key replaces the earlier
/// one, matching the map-insert semantics the tool has always had.
pub fn build<R: Read>(
    reader: &mut Reader<R>,
    path: &Path,
    projection: &Projection,
    result: &ResultSink,
) -> Result<RowIndex, DiffError> {
    result.submit(projection.header().to_vec())?;

    let mut map = IndexMap::new();
    for record in reader.records() {
        let record = record.map_err(|e| error::from_read(path, e))?;
        let fields = projection.apply(&record);
        map.insert(fields[0].clone(), fields);
    }

    Ok(RowIndex { map })
}
