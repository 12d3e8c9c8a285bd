use std::io;
use std::path::Path;

use thiserror::Error;

/// Failure taxonomy for a diff run. Any variant aborts the whole run;
/// there is no partial-success mode and no retry.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: line {line}: {message}")]
    Parse {
        path: String,
        line: u64,
        message: String,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Argument(String),
}

/// Classify a csv crate error raised while reading `path`: I/O failures
/// become `Read`, everything else (ragged rows, invalid UTF-8) becomes
/// `Parse` with the source line number when the parser knows it.
pub fn from_read(path: &Path, err: csv::Error) -> DiffError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DiffError::Read {
            path: path.display().to_string(),
            source,
        },
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => DiffError::Parse {
            path: path.display().to_string(),
            line,
            message: format!(
                "row has {} fields, expected {} from the header",
                len, expected_len
            ),
        },
        other => DiffError::Parse {
            path: path.display().to_string(),
            line,
            message: format!("{:?}", other),
        },
    }
}

/// Wrap a csv crate error raised while writing `path`.
pub fn from_write(path: &Path, err: csv::Error) -> DiffError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        other => io::Error::other(format!("{:?}", other)),
    };
    DiffError::Write {
        path: path.display().to_string(),
        source,
    }
}

pub fn write_io(path: &Path, source: io::Error) -> DiffError {
    DiffError::Write {
        path: path.display().to_string(),
        source,
    }
}
