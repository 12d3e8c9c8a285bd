//! Concurrent output sinks for the diff run.
//!
//! Every sink is a single dedicated writer thread fed by a bounded
//! channel: submissions block when the queue is full, per-sink ordering
//! is submission order by construction, and nothing ever locks the I/O
//! object itself.
//!
//! # Module Structure
//!
//! - `types`: side-buffer row type and sink configuration
//! - `writer`: the writer-thread bodies

mod types;
mod writer;

pub use types::{SideRow, SinkConfig};

use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Sender};
use csv::WriterBuilder;

use crate::error::{self, DiffError};

/// Handle to the result-file writer thread. Rows reach the file in
/// submission order; `finish` drains the queue and surfaces any write
/// failure. Fail-fast: a write error terminates the run, nothing is
/// retried.
#[derive(Debug)]
pub struct ResultSink {
    sender: Sender<Vec<String>>,
    handle: JoinHandle<Result<(), DiffError>>,
    path: PathBuf,
}

impl ResultSink {
    pub fn spawn(path: &Path, config: &SinkConfig) -> Result<Self, DiffError> {
        // Create the writer eagerly so an unwritable destination fails
        // before any input is read.
        let writer = WriterBuilder::new()
            .from_path(path)
            .map_err(|e| error::from_write(path, e))?;

        let (sender, receiver) = bounded::<Vec<String>>(config.queue_size);
        let thread_path = path.to_path_buf();
        let handle = thread::Builder::new()
            .name("result-writer".to_string())
            .spawn(move || writer::result_writer_thread(writer, &thread_path, receiver))
            .map_err(|e| error::write_io(path, e))?;

        Ok(Self {
            sender,
            handle,
            path: path.to_path_buf(),
        })
    }

    /// Queue one row for the result file. Blocks while the queue is
    /// saturated; errors only if the writer thread already died, in
    /// which case `finish` reports the underlying cause.
    pub fn submit(&self, row: Vec<String>) -> Result<(), DiffError> {
        self.sender.send(row).map_err(|_| DiffError::Write {
            path: self.path.display().to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "result writer stopped"),
        })
    }

    /// Blocking join: waits until every queued row is on disk.
    pub fn finish(self) -> Result<(), DiffError> {
        let Self { sender, handle, path } = self;
        drop(sender);
        handle
            .join()
            .map_err(|_| error::write_io(&path, io::Error::other("result writer panicked")))?
    }
}

/// Handle to an in-memory side buffer populated by its own writer thread.
/// Append order equals submission order, which is what the reconciler's
/// correctness rests on. The buffer contents are returned by `finish`.
pub struct SideBufferSink {
    sender: Sender<SideRow>,
    handle: JoinHandle<Vec<SideRow>>,
    name: &'static str,
}

impl SideBufferSink {
    pub fn spawn(name: &'static str, config: &SinkConfig) -> Result<Self, DiffError> {
        let (sender, receiver) = bounded::<SideRow>(config.queue_size);
        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || writer::side_buffer_thread(receiver))
            .map_err(|e| error::write_io(Path::new(name), e))?;

        Ok(Self {
            sender,
            handle,
            name,
        })
    }

    pub fn submit(&self, row: SideRow) -> Result<(), DiffError> {
        self.sender.send(row).map_err(|_| DiffError::Write {
            path: self.name.to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "side buffer writer stopped"),
        })
    }

    /// Drain the queue and hand back the buffer. Called at the end of a
    /// scan phase so the reconciler never sees a partial buffer.
    pub fn finish(self) -> Result<Vec<SideRow>, DiffError> {
        let Self { sender, handle, name } = self;
        drop(sender);
        handle.join().map_err(|_| {
            error::write_io(
                Path::new(name),
                io::Error::other("side buffer writer panicked"),
            )
        })
    }
}
