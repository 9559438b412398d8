//! CSV reader implementation

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::PLUGIN_NAME;
use crate::plugin::*;

const FORMAT: &str = "CSV";

/// CSV reader options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: char,

    /// Quote character
    pub quote: char,

    /// Trim whitespace around headers and fields
    pub trim: bool,

    /// Lines starting with this character are skipped
    pub comment: Option<char>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            trim: false,
            comment: None,
        }
    }
}

impl CsvOptions {
    /// The csv parser works on bytes, so every special character must be ASCII
    pub fn validate(&self) -> Result<(), PluginError> {
        let special = [
            ("delimiter", Some(self.delimiter)),
            ("quote", Some(self.quote)),
            ("comment", self.comment),
        ];

        for (option, value) in special {
            if let Some(c) = value {
                if !c.is_ascii() {
                    return Err(PluginError::InvalidConfig {
                        plugin: PLUGIN_NAME.to_string(),
                        message: format!("{option} must be a single ASCII character, got {c:?}"),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Reader for comma-separated input; the first row names the fields
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    options: CsvOptions,
}

impl CsvReader {
    /// Create a reader, rejecting options the byte-oriented parser can't use
    pub fn new(options: CsvOptions) -> Result<Self, PluginError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    fn builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        // ASCII was checked in `new`, so the byte casts are lossless
        builder
            .delimiter(self.options.delimiter as u8)
            .quote(self.options.quote as u8)
            .comment(self.options.comment.map(|c| c as u8))
            .trim(if self.options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            // Ragged rows are reported by CsvRecords as FieldMismatch
            .flexible(true);
        builder
    }
}

impl InputReader for CsvReader {
    fn format_name(&self) -> &str {
        PLUGIN_NAME
    }

    fn open(&self, source: InputSource) -> Result<RecordStream, PluginError> {
        debug!("Opening CSV source: {}", source);

        let mut reader = self.builder().from_reader(source.into_reader()?);
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| PluginError::parse(FORMAT, e))?
            .iter()
            .map(str::to_string)
            .collect();

        if let Some(duplicate) = find_duplicate(&headers) {
            return Err(PluginError::parse(
                FORMAT,
                format!("duplicate header {duplicate:?}"),
            ));
        }

        Ok(Box::new(CsvRecords {
            rows: reader.into_records(),
            headers,
            index: 0,
            done: false,
        }))
    }
}

fn find_duplicate(headers: &[String]) -> Option<&String> {
    let mut seen = HashSet::new();
    headers.iter().find(|h| !seen.insert(h.as_str()))
}

/// Lazy record stream over CSV rows
struct CsvRecords {
    rows: csv::StringRecordsIntoIter<Box<dyn Read + Send>>,
    headers: Vec<String>,
    index: usize,
    done: bool,
}

impl CsvRecords {
    fn column_name(&self, position: usize) -> String {
        self.headers
            .get(position)
            .cloned()
            .unwrap_or_else(|| format!("column_{}", position + 1))
    }
}

impl Iterator for CsvRecords {
    type Item = Result<Record, PluginError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.headers.is_empty() {
            return None;
        }

        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(e) => {
                self.done = true;
                return Some(Err(PluginError::parse(FORMAT, e)));
            }
        };

        let index = self.index;
        self.index += 1;

        if row.len() != self.headers.len() {
            self.done = true;
            return Some(Err(PluginError::FieldMismatch {
                record: index,
                expected: self.headers.clone(),
                found: (0..row.len()).map(|i| self.column_name(i)).collect(),
            }));
        }

        let record = self
            .headers
            .iter()
            .zip(row.iter())
            .map(|(field, value)| (field.clone(), Value::String(value.to_string())))
            .collect();

        Some(Ok(record))
    }
}
