//! Diagnostic logging.
//!
//! All diagnostics go to stderr: stdout carries the protocol stream and must
//! never see a stray log line. `RUST_LOG`, when set and non-blank, replaces
//! the configured filter.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{ConfigError, Result, ServerError};


/// Environment variable whose directives override the configured filter.
pub const FILTER_OVERRIDE_ENV: &str = "RUST_LOG";

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an unparseable filter directive
/// and `ServerError::LoggingInit` if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    init_with_env(config, &mockable::DefaultEnv::new())
}

/// Install the global subscriber, reading `RUST_LOG` from `env`.
///
/// # Errors
///
/// See [`init`].
pub fn init_with_env<E: mockable::Env>(config: &LoggingConfig, env: &E) -> Result<()> {
    let filter = build_filter(config, env)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| ServerError::LoggingInit {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Resolve the effective filter: a non-blank `RUST_LOG` wins over `config`.
pub(crate) fn build_filter<E: mockable::Env>(
    config: &LoggingConfig,
    env: &E,
) -> Result<EnvFilter> {
    let (field, directives) = match env
        .string(FILTER_OVERRIDE_ENV)
        .filter(|value| !value.trim().is_empty())
    {
        Some(value) => (FILTER_OVERRIDE_ENV, value),
        None => ("logging.filter", config.filter.clone()),
    };

    EnvFilter::try_new(&directives).map_err(|e| {
        ConfigError::InvalidValue {
            field: field.to_owned(),
            reason: format!("invalid filter directive '{directives}': {e}"),
        }
        .into()
    })
}
