//! CLI domain: parse, route and output only.
//! No domain orchestration; a single route table dispatches to the ingestor
//! and tree operations.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::RunContext;
