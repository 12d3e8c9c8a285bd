//! Type definitions for the output sinks.

/// One common row staged in a side buffer: the primary key plus the
/// projected fields. Both files stage their common rows through the same
/// projection, so field-wise equality here is exactly row equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideRow {
    pub key: String,
    pub fields: Vec<String>,
}

/// Configuration shared by every sink.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Bound of the channel feeding a writer thread; a full queue blocks
    /// the producer (backpressure, not loss).
    pub queue_size: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self { queue_size: 1024 }
    }
}
