//! Shared fixtures and helper functions for config tests.

use std::sync::Arc;

use mockable::MockEnv;
use ortho_config::MergeComposer;
use rstest::fixture;

use crate::config::{AppConfig, Cli, LogFormat};

/// Outcome of building a composer from JSON layers.
pub type ComposerResult = Result<MergeComposer, ortho_config::serde_json::Error>;

/// Fixture providing an `AppConfig` parsed from a full TOML example.
#[fixture]
pub fn app_config_from_full_toml() -> AppConfig {
    let toml = r#"
        engine_socket = "unix:///run/podman/podman.sock"

        [engine]
        verify_on_startup = false

        [logging]
        filter = "dockhand=debug"
        format = "json"
    "#;

    ortho_config::toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Fixture providing an `AppConfig` parsed from a minimal TOML example.
#[fixture]
pub fn app_config_from_partial_toml() -> AppConfig {
    let toml = r#"
        engine_socket = "unix:///tmp/docker.sock"
    "#;

    ortho_config::toml::from_str(toml).expect("TOML parsing should succeed")
}

/// Helper: Creates a `MergeComposer` with defaults layer already pushed.
pub fn create_composer_with_defaults() -> ComposerResult {
    let mut composer = MergeComposer::new();
    let defaults = ortho_config::serde_json::to_value(AppConfig::default())?;
    composer.push_defaults(defaults);
    Ok(composer)
}

/// Helper: Merges layers from a composer into `AppConfig`.
pub fn merge_config(composer: MergeComposer) -> Result<AppConfig, Arc<ortho_config::OrthoError>> {
    AppConfig::merge_from_layers(composer.layers())
}

/// Helper: Asserts that a config has all default values.
pub fn assert_config_has_defaults(config: &AppConfig) {
    assert!(
        config.engine_socket.is_none(),
        "engine_socket should be None"
    );
    assert!(
        config.engine.verify_on_startup,
        "engine.verify_on_startup should be true"
    );
    assert_eq!(config.logging.filter, "info", "logging.filter should be info");
    assert_eq!(
        config.logging.format,
        LogFormat::Text,
        "logging.format should be text"
    );
}

/// Helper: Creates a `MergeComposer` with defaults, file, and env layers.
pub fn create_composer_with_file_and_env() -> ComposerResult {
    use ortho_config::serde_json::json;

    let mut composer = create_composer_with_defaults()?;

    composer.push_file(
        json!({
            "engine_socket": "unix:///from/file.sock",
            "logging": { "filter": "warn" }
        }),
        None,
    );

    composer.push_environment(json!({
        "engine_socket": "unix:///from/env.sock"
    }));

    Ok(composer)
}

/// Helper: A `MockEnv` answering from a fixed table of variables.
pub fn env_with(vars: &[(&str, &str)]) -> MockEnv {
    let owned: Vec<(String, String)> = vars
        .iter()
        .map(|(key, value)| (String::from(*key), String::from(*value)))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string().returning(move |key| {
        owned
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    });
    env
}

/// Helper: A `Cli` with no subcommand and the given global options.
pub fn cli_with(
    config: Option<&camino::Utf8Path>,
    engine_socket: Option<&str>,
    log_filter: Option<&str>,
) -> Cli {
    Cli {
        command: None,
        config: config.map(camino::Utf8Path::to_path_buf),
        engine_socket: engine_socket.map(String::from),
        log_filter: log_filter.map(String::from),
    }
}
