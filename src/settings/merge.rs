//! Layering of settings sources.

mod merge_policy;

pub use merge_policy::{builder_with_defaults, environment, ENV_PREFIX};
