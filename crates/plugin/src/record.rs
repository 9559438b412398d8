//! Record types

use indexmap::IndexMap;
use serde_json::Value;

use crate::PluginError;

/// One row or object of input data, keyed by field name in source order
pub type Record = IndexMap<String, Value>;

/// Lazy sequence of records produced by an opened reader.
///
/// Reading stops at the first error; readers never yield records after one.
pub type RecordStream = Box<dyn Iterator<Item = Result<Record, PluginError>> + Send>;

/// Field names of a record, in order
pub fn field_names(record: &Record) -> Vec<String> {
    record.keys().cloned().collect()
}
