//! Input file handling: decides which file is indexed and which is
//! streamed, and builds the csv readers with one shared configuration.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder};

use crate::config::DiffConfig;
use crate::error::{self, DiffError};

/// The two inputs after side selection. The index file is the smaller of
/// the pair by byte size and is the one materialized in memory; the
/// target file is streamed.
#[derive(Debug)]
pub struct InputPair {
    index_path: PathBuf,
    target_path: PathBuf,
}

impl InputPair {
    /// Pick the index side by byte size. When a size cannot be determined
    /// the first argument becomes the index side with a warning; opening
    /// the file will surface the real error if there is one.
    pub fn resolve(config: &DiffConfig) -> Self {
        let (index_path, target_path) =
            match (file_size(&config.file_a), file_size(&config.file_b)) {
                (Ok(a), Ok(b)) if a <= b => (config.file_a.clone(), config.file_b.clone()),
                (Ok(_), Ok(_)) => (config.file_b.clone(), config.file_a.clone()),
                (Err(e), _) | (_, Err(e)) => {
                    config.warn(&format!(
                        "cannot determine input sizes ({}); indexing the first file",
                        e
                    ));
                    (config.file_a.clone(), config.file_b.clone())
                }
            };

        Self {
            index_path,
            target_path,
        }
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn open_index(&self) -> Result<Reader<File>, DiffError> {
        open_reader(&self.index_path)
    }

    pub fn open_target(&self) -> Result<Reader<File>, DiffError> {
        open_reader(&self.target_path)
    }
}

fn file_size(path: &Path) -> std::io::Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}

/// One reader configuration for every pass over every input: headers on,
/// strict field counts. A row whose length disagrees with the header is a
/// parse error, not a shrug.
fn open_reader(path: &Path) -> Result<Reader<File>, DiffError> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_path(path)
        .map_err(|e| error::from_read(path, e))
}
