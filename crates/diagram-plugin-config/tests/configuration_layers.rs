use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::sync::{Mutex, MutexGuard, PoisonError};

use diagram_plugin_config::{Config, LogFormat, default_log_filter, default_log_format};
use once_cell::sync::Lazy;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const MANAGED_KEYS: [&str; 3] = [
    "DIAGRAM_PLUGIN_CONFIG_PATH",
    "DIAGRAM_PLUGIN_LOG_FILTER",
    "DIAGRAM_PLUGIN_LOG_FORMAT",
];

/// Holds the environment lock and restores every touched variable on drop.
struct Harness {
    temp_dir: TempDir,
    previous: RefCell<Vec<(String, Option<OsString>)>>,
    loaded: RefCell<Option<Result<Config, String>>>,
    _guard: MutexGuard<'static, ()>,
}

impl Harness {
    fn new() -> Self {
        let guard = ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner);
        let temp_dir = TempDir::new().expect("create temp dir");
        let harness = Self {
            temp_dir,
            previous: RefCell::new(Vec::new()),
            loaded: RefCell::new(None),
            _guard: guard,
        };
        for key in MANAGED_KEYS {
            harness.remove_env(key);
        }
        harness
    }

    fn remember(&self, key: &str) {
        let previous = std::env::var_os(key);
        self.previous.borrow_mut().push((key.to_owned(), previous));
    }

    fn set_env(&self, key: &str, value: impl Into<OsString>) {
        self.remember(key);
        // Environment mutation is serialised through `ENV_MUTEX`.
        unsafe { std::env::set_var(key, value.into()) };
    }

    fn remove_env(&self, key: &str) {
        self.remember(key);
        unsafe { std::env::remove_var(key) };
    }

    fn write_config(&self, contents: &str) {
        let path = self.temp_dir.path().join("diagram-plugin.toml");
        fs::write(&path, contents).expect("write configuration");
        self.set_env("DIAGRAM_PLUGIN_CONFIG_PATH", path.into_os_string());
    }

    fn load(&self) {
        if self.loaded.borrow().is_some() {
            return;
        }
        let outcome =
            Config::load_for_program("diagram-plugin-example").map_err(|err| err.to_string());
        *self.loaded.borrow_mut() = Some(outcome);
    }

    fn config(&self) -> Config {
        self.load();
        match self.loaded.borrow().as_ref() {
            Some(Ok(config)) => config.clone(),
            Some(Err(error)) => panic!("configuration failed to load: {error}"),
            None => panic!("configuration was not loaded"),
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let mut previous = self.previous.borrow_mut();
        while let Some((key, value)) = previous.pop() {
            match value {
                Some(os_value) => unsafe { std::env::set_var(&key, os_value) },
                None => unsafe { std::env::remove_var(&key) },
            }
        }
    }
}

#[fixture]
fn harness() -> Harness {
    Harness::new()
}

#[given("a configuration file setting the log filter to \"{filter}\"")]
fn given_config_file(harness: &Harness, filter: String) {
    harness.write_config(&format!("log_filter = \"{filter}\"\n"));
}

#[given("the environment sets {key} to \"{value}\"")]
fn given_environment(harness: &Harness, key: String, value: String) {
    harness.set_env(&key, value);
}

#[when("the configuration loads without overrides")]
fn when_load(harness: &Harness) {
    harness.load();
}

#[then("the log filter is \"{filter}\"")]
fn then_log_filter(harness: &Harness, filter: String) {
    assert_eq!(harness.config().log_filter(), filter);
}

#[then("the log format is \"{format}\"")]
fn then_log_format(harness: &Harness, format: String) {
    let expected: LogFormat = format.parse().expect("known log format");
    assert_eq!(harness.config().log_format(), expected);
}

#[then("loading the configuration fails")]
fn then_load_fails(harness: &Harness) {
    harness.load();
    let loaded = harness.loaded.borrow();
    assert!(
        matches!(loaded.as_ref(), Some(Err(_))),
        "expected a load failure, got {loaded:?}"
    );
}

#[scenario(path = "tests/features/configuration_layers.feature")]
fn configuration_layers(#[from(harness)] harness: Harness) {
    let _ = harness;
}

#[test]
fn clean_environment_loads_built_in_defaults() {
    let harness = Harness::new();
    let config = harness.config();
    assert_eq!(config.log_filter(), default_log_filter());
    assert_eq!(config.log_format(), default_log_format());
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let harness = Harness::new();
    harness.write_config("log_format = \"json\"\n");
    let config = harness.config();
    assert_eq!(config.log_format(), LogFormat::Json);
    assert_eq!(config.log_filter(), default_log_filter());
}
