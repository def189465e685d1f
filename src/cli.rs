//! CLI domain: parse, route, and output only.
//! No domain orchestration; single route table dispatches to the baseline API.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::RunContext;
