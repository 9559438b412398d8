//! Input sources

use std::fmt;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use tracing::debug;

use crate::PluginError;

/// Where a reader pulls its bytes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),

    /// Standard input
    Stdin,

    /// In-memory text
    Text(String),
}

impl InputSource {
    /// Interpret a command-line argument, where `-` means stdin
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Open the source for reading
    pub fn into_reader(self) -> Result<Box<dyn Read + Send>, PluginError> {
        debug!("Opening input source: {}", self);
        match self {
            Self::File(path) => {
                let file = std::fs::File::open(&path).map_err(|source| PluginError::Io {
                    origin: path.display().to_string(),
                    source,
                })?;
                Ok(Box::new(std::io::BufReader::new(file)))
            }
            Self::Stdin => Ok(Box::new(std::io::stdin())),
            Self::Text(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
            Self::Text(_) => f.write_str("<inline>"),
        }
    }
}
