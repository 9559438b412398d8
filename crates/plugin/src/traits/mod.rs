//! Plugin traits and interfaces

pub mod factory;
pub mod reader;


// Re-export main types for convenience
pub use factory::*;
pub use reader::*;
