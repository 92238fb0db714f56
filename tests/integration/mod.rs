//! Integration tests for per-cache configuration resolution

mod catalog;
mod cli_routing;
mod overlay_resolution;
mod settings_loading;
mod test_utils;

pub use test_utils::{with_isolated_home, write_file};
