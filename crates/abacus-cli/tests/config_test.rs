use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use abacus_cli::{AbacusConfig, ConfigSource};

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Run `source.report()` under a subscriber that records WARN and above
fn reported_logs(source: &ConfigSource) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || source.report());
    logs.contents()
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("abacus-{}-{name}", std::process::id()))
}

#[test]
fn loads_settings_from_file() {
    let path = scratch_path("full.toml");
    std::fs::write(&path, "[logging]\nlevel = \"info\"\njson = true\n\n[repl]\nprompt = \"calc> \"\n")
        .unwrap();

    let (config, source) = AbacusConfig::load(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.json);
    assert_eq!(config.repl.prompt, "calc> ");
    assert!(config.repl.banner);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = scratch_path("missing.toml");
    let (config, source) = AbacusConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(config, AbacusConfig::default());
    assert_eq!(source, ConfigSource::Defaults(path));
    assert!(source.to_string().starts_with("defaults ("));
}

#[test]
fn malformed_file_is_an_error() {
    let path = scratch_path("broken.toml");
    std::fs::write(&path, "[repl\nprompt = ").unwrap();
    let result = AbacusConfig::load(Some(path.as_path()));
    std::fs::remove_file(&path).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse"));
}

#[test]
fn missing_file_is_reported_as_warning() {
    let path = scratch_path("absent.toml");
    let (_, source) = AbacusConfig::load(Some(path.as_path())).unwrap();

    let logs = reported_logs(&source);
    assert!(logs.contains("WARN"), "no warning in {logs:?}");
    assert!(logs.contains("Configuration file not found, using defaults"));
    assert!(logs.contains("absent.toml"));
}

#[test]
fn loaded_file_is_not_a_warning() {
    let logs = reported_logs(&ConfigSource::File(PathBuf::from("abacus.toml")));
    assert!(logs.is_empty(), "unexpected output {logs:?}");
}
