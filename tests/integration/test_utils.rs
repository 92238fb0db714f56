//! Shared test utilities for integration tests
//!
//! Serializes access to HOME and XDG_CONFIG_HOME so settings tests never pick
//! up the developer's global settings file.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: [&str; 6] = [
    "HOME",
    "XDG_CONFIG_HOME",
    "CACHECONF__CATALOG__SCOPE",
    "CACHECONF__LOGGING__LEVEL",
    "CACHECONF__LOGGING__FORMAT",
    "CACHECONF__STRATEGIES__ALIASES__SHARED",
];

struct EnvState {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            saved: ISOLATED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.saved {
            match value {
                Some(orig) => std::env::set_var(name, orig),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `test_dir`
///
/// `CACHECONF__*` overrides used by the tests are cleared first and every
/// variable is restored afterwards.
pub fn with_isolated_home<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    for name in ISOLATED_VARS.iter().skip(2) {
        std::env::remove_var(name);
    }

    let home = test_dir.path().join("home");
    let config_home = test_dir.path().join("config");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&config_home).unwrap();
    std::env::set_var("HOME", home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", config_home.to_str().unwrap());

    let result = f();

    env_state.restore();
    result
}

/// Write `contents` to `dir/name`, creating parent directories
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}
