//! CLI domain: parse, route, output, and presentation only.
//! No resolution logic; the route table dispatches to the catalog and settings.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_cache_list, format_resolution, format_strategies};
pub use route::RunContext;
