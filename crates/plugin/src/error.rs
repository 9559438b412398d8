//! Errors raised by input readers

use thiserror::Error;

/// Error raised while building a reader or reading records from a source
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("I/O error reading {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{format} parse error: {message}")]
    Parse { format: String, message: String },

    #[error("record {record}: expected fields {expected:?}, found {found:?}")]
    FieldMismatch {
        record: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("record {record}: {message}")]
    InvalidRecord { record: usize, message: String },

    #[error("invalid options for plugin {plugin}: {message}")]
    InvalidConfig { plugin: String, message: String },
}

impl PluginError {
    pub fn parse(format: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            format: format.into(),
            message: message.to_string(),
        }
    }
}
