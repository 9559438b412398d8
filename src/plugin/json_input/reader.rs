//! JSON reader implementation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::PLUGIN_NAME;
use crate::plugin::*;

const FORMAT: &str = "JSON";

/// JSON reader options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// JSON Pointer (RFC 6901) to the records inside the document, e.g. `/data/items`
    pub pointer: Option<String>,
}

impl JsonOptions {
    pub fn validate(&self) -> Result<(), PluginError> {
        match &self.pointer {
            Some(pointer) if !pointer.is_empty() && !pointer.starts_with('/') => {
                Err(PluginError::InvalidConfig {
                    plugin: PLUGIN_NAME.to_string(),
                    message: format!("pointer must be empty or start with '/', got {pointer:?}"),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Reader for a JSON array of objects, or a single object
#[derive(Debug, Clone, Default)]
pub struct JsonReader {
    options: JsonOptions,
}

impl JsonReader {
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &JsonOptions {
        &self.options
    }

    fn select(&self, mut document: Value) -> Result<Vec<Value>, PluginError> {
        let selected = match &self.options.pointer {
            Some(pointer) => document.pointer_mut(pointer).map(Value::take).ok_or_else(|| {
                PluginError::parse(FORMAT, format!("pointer {pointer:?} does not match any value"))
            })?,
            None => document,
        };

        match selected {
            Value::Array(items) => Ok(items),
            Value::Object(_) => Ok(vec![selected]),
            other => Err(PluginError::parse(
                FORMAT,
                format!(
                    "expected an array of objects or a single object, found {}",
                    kind(&other)
                ),
            )),
        }
    }
}

impl InputReader for JsonReader {
    fn format_name(&self) -> &str {
        PLUGIN_NAME
    }

    fn open(&self, source: InputSource) -> Result<RecordStream, PluginError> {
        debug!("Opening JSON source: {}", source);

        let document: Value = serde_json::from_reader(source.into_reader()?)
            .map_err(|e| PluginError::parse(FORMAT, e))?;
        let items = self.select(document)?;

        Ok(Box::new(JsonRecords {
            items: items.into_iter(),
            expected: None,
            index: 0,
            done: false,
        }))
    }
}

/// Lazy record stream over the selected JSON values
struct JsonRecords {
    items: std::vec::IntoIter<Value>,
    /// Field names of the first record
    expected: Option<Vec<String>>,
    index: usize,
    done: bool,
}

impl Iterator for JsonRecords {
    type Item = Result<Record, PluginError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.items.next()?;
        let index = self.index;
        self.index += 1;

        let record: Record = match item {
            Value::Object(map) => map.into_iter().collect(),
            other => {
                self.done = true;
                return Some(Err(PluginError::InvalidRecord {
                    record: index,
                    message: format!("expected an object, found {}", kind(&other)),
                }));
            }
        };

        let expected = self
            .expected
            .get_or_insert_with(|| field_names(&record));
        let uniform = expected.len() == record.len()
            && expected.iter().all(|field| record.contains_key(field));
        if !uniform {
            let expected = expected.clone();
            self.done = true;
            return Some(Err(PluginError::FieldMismatch {
                record: index,
                expected,
                found: field_names(&record),
            }));
        }

        Some(Ok(record))
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
