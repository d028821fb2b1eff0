//! Configuration data types for dockhand.

use clap::ValueEnum;
use ortho_config::{OrthoConfig, OrthoResult, PostMergeContext, PostMergeHook};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// Output format of the diagnostic log written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Accepted spellings, as used in configuration files and variables.
    pub const VARIANTS: &'static [&'static str] = &["text", "json"];
}

/// Container engine behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, SmartDefault)]
#[serde(default)]
pub struct EngineConfig {
    /// Ping the engine before serving and refuse to start if it does not answer.
    #[default = true]
    pub verify_on_startup: bool,
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, SmartDefault)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `dockhand=debug`.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[default = "info"]
    pub filter: String,

    /// Output format.
    pub format: LogFormat,
}

/// Root application configuration.
///
/// Loaded from configuration files, environment variables, and command-line
/// arguments with layered precedence. The precedence order (lowest to
/// highest) is: defaults, configuration file, environment variables,
/// command-line arguments.
///
/// Configuration files are discovered in this order:
/// 1. Path given with `--config`
/// 2. Path specified via `DOCKHAND_CONFIG_PATH` environment variable
/// 3. `.dockhand.toml` in the current working directory
/// 4. `.dockhand.toml` in the home directory
/// 5. `~/.config/dockhand/config.toml` (XDG default)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(
    prefix = "DOCKHAND",
    post_merge_hook,
    discovery(
        app_name = "dockhand",
        env_var = "DOCKHAND_CONFIG_PATH",
        config_file_name = "config.toml",
        dotfile_name = ".dockhand.toml",
        config_cli_long = "config",
        config_cli_visible = true,
    )
)]
pub struct AppConfig {
    /// The container engine socket path or URL.
    pub engine_socket: Option<String>,

    /// Container engine behaviour.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub engine: EngineConfig,

    /// Diagnostic logging.
    #[serde(default)]
    #[ortho_config(skip_cli)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Treat blank values as unset: a blank socket falls back to endpoint
    /// discovery and a blank filter to `info`.
    pub(crate) fn normalise(&mut self) {
        if self
            .engine_socket
            .as_deref()
            .is_some_and(|socket| socket.trim().is_empty())
        {
            self.engine_socket = None;
        }
        if self.logging.filter.trim().is_empty() {
            self.logging.filter = LoggingConfig::default().filter;
        }
    }
}

impl PostMergeHook for AppConfig {
    fn post_merge(&mut self, _ctx: &PostMergeContext) -> OrthoResult<()> {
        self.normalise();
        Ok(())
    }
}
