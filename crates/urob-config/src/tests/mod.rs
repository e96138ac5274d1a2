
use crate::CONFIG_DIR_ENV_VAR;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Guards returned by `setup_config_dir`, kept alive for the whole test
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestEnv {
    pub(crate) fn path(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub(crate) fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join("config.toml"), contents).unwrap();
    }
}

/// Create a temp config directory, point UROB_CONFIG_DIR at it and clear
/// any UROB_* overrides inherited from the shell
pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set(CONFIG_DIR_ENV_VAR, dir.path().to_str().unwrap()),
        EnvGuard::remove("UROB_API_URL"),
        EnvGuard::remove("UROB_LOG_LEVEL"),
        EnvGuard::remove("UROB_LOG_COLORED"),
        EnvGuard::remove("UROB_LOG_FILE"),
    ];
    TestEnv {
        dir,
        _guards: guards,
    }
}
