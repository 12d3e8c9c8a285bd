//! Writer-thread bodies: each sink owns exactly one of these.

use std::fs::File;
use std::path::Path;

use crossbeam_channel::Receiver;
use csv::Writer;

use crate::error::{self, DiffError};

use super::types::SideRow;

/// Consumes rows until every sender is dropped, then flushes. The first
/// write failure stops the thread; the cause reaches the caller at join
/// time.
pub(crate) fn result_writer_thread(
    mut writer: Writer<File>,
    path: &Path,
    receiver: Receiver<Vec<String>>,
) -> Result<(), DiffError> {
    for row in receiver {
        writer
            .write_record(&row)
            .map_err(|e| error::from_write(path, e))?;
    }
    writer.flush().map_err(|e| error::write_io(path, e))?;
    Ok(())
}

/// Appends rows in channel order; infallible since the buffer is memory.
pub(crate) fn side_buffer_thread(receiver: Receiver<SideRow>) -> Vec<SideRow> {
    receiver.into_iter().collect()
}
