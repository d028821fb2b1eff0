//! Configuration system for dockhand.
//!
//! Configuration structures, CLI definitions, and the layered loader.
//! Precedence: CLI flags override environment variables, which override
//! configuration files, which override defaults.
//!
//! The configuration file is expected at `~/.config/dockhand/config.toml` by
//! default.
//!
//! # Example Configuration
//!
//! ```toml
//! engine_socket = "unix:///run/user/1000/podman/podman.sock"
//!
//! [engine]
//! verify_on_startup = true
//!
//! [logging]
//! filter = "info,dockhand=debug"
//! format = "json"
//! ```

mod cli;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use cli::{Cli, Commands};
pub use loader::{CONFIG_PATH_ENV, env_var_names, load_config, load_config_with_env};
pub use types::{AppConfig, EngineConfig, LogFormat, LoggingConfig};
