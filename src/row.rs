//! Row projection: maps a parsed CSV record to the ordered field list the
//! comparison actually sees, with excluded columns dropped. Both input
//! files go through the same projection, so the two sides can never drift
//! in representation.

use std::path::Path;

use csv::StringRecord;

use crate::error::DiffError;

/// Column projection derived from the index file's header and the
/// -x/--exclude arguments. Field 0 of the projected row is always the
/// primary key.
#[derive(Debug, Clone)]
pub struct Projection {
    header: Vec<String>,
    keep: Vec<usize>,
}

impl Projection {
    pub fn from_header(
        path: &Path,
        header: &StringRecord,
        exclude: &[String],
    ) -> Result<Self, DiffError> {
        let names: Vec<String> = header.iter().map(str::to_string).collect();
        if names.is_empty() {
            return Err(DiffError::Parse {
                path: path.display().to_string(),
                line: 1,
                message: "input file has no header row".to_string(),
            });
        }

        for column in exclude {
            if column == &names[0] {
                return Err(DiffError::Argument(format!(
                    "the key column '{}' cannot be excluded",
                    column
                )));
            }
            if !names.contains(column) {
                return Err(DiffError::Argument(format!(
                    "unknown column '{}' (header: {})",
                    column,
                    names.join(",")
                )));
            }
        }

        let keep: Vec<usize> = names
            .iter()
            .enumerate()
            .filter(|(_, name)| !exclude.contains(name))
            .map(|(i, _)| i)
            .collect();
        let header = keep.iter().map(|&i| names[i].clone()).collect();

        Ok(Self { header, keep })
    }

    /// The projected header row, written once to the result file.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Project a data record. The csv reader already enforces that every
    /// record matches the header's field count, so the indices are in
    /// range; a missing field maps to the empty string.
    pub fn apply(&self, record: &StringRecord) -> Vec<String> {
        self.keep
            .iter()
            .map(|&i| record.get(i).unwrap_or("").to_string())
            .collect()
    }
}
