//! CLI command modules

pub mod info;
pub mod init;
pub mod plugins;
pub mod records;
pub mod render;
pub mod validate;
