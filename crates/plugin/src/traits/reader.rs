//! Input reader trait

use crate::{InputSource, PluginError, Record, RecordStream};

/// Reader that turns an input source into a uniform record sequence
pub trait InputReader: Send + Sync {
    /// Name of the format this reader handles (e.g. `CsvInput`)
    fn format_name(&self) -> &str;

    /// Open a source and return a lazy stream of its records
    fn open(&self, source: InputSource) -> Result<RecordStream, PluginError>;

    /// Open a source and collect every record, stopping at the first error
    fn read_all(&self, source: InputSource) -> Result<Vec<Record>, PluginError> {
        self.open(source)?.collect()
    }
}
