//! Configuration sources, each adding one layer to the builder.

pub mod env;
pub mod global_file;
pub mod workspace_file;
