//! Input plugin contract for helm
//!
//! Shared types for input readers: the [`Record`] they produce, the
//! [`InputSource`] they consume, and the [`InputReader`] / [`InputReaderFactory`]
//! traits the registry dispatches through.

pub mod error;
pub mod record;
pub mod source;
pub mod traits;

pub use error::PluginError;
pub use record::{field_names, Record, RecordStream};
pub use source::InputSource;
pub use traits::*;
