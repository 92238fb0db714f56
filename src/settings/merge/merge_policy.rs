//! Merge rules: defaults and override order.

use crate::catalog::DEFAULT_SCOPE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix of environment variables overriding settings, e.g. `CACHECONF__CATALOG__SCOPE`
pub const ENV_PREFIX: &str = "CACHECONF";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("catalog.scope", DEFAULT_SCOPE)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")
}

/// Environment layer, applied last so it wins over every file.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}
