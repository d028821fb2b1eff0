//! Semantic error types for the dockhand application.
//!
//! This module defines the error hierarchy for dockhand, following the principle
//! of using semantic error enums (via `thiserror`) for conditions the caller might
//! inspect or map to a protocol response, while reserving opaque errors
//! (`eyre::Report`) for the application boundary.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file was not found at the expected path.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// The path where the configuration file was expected.
        path: PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration file: {message}")]
    ParseError {
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value failed validation.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// The name of the invalid field.
        field: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// The `OrthoConfig` library returned an error during configuration loading.
    #[error("configuration loading failed: {0}")]
    OrthoConfig(Arc<ortho_config::OrthoError>),
}

/// Errors that can occur during container engine operations.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Failed to connect to the container engine socket.
    #[error("failed to connect to container engine: {message}")]
    ConnectionFailed {
        /// A description of the connection failure.
        message: String,
    },

    /// The container engine socket was not found.
    #[error("container engine socket not found: {path}")]
    SocketNotFound {
        /// The path where the socket was expected.
        path: PathBuf,
    },

    /// Permission denied when accessing the container engine socket.
    #[error("permission denied accessing container socket: {path}")]
    PermissionDenied {
        /// The path to the socket.
        path: PathBuf,
    },

    /// The engine does not know the requested container or image.
    #[error("no such container or image '{id}': {message}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
        /// The engine's description of the failure.
        message: String,
    },

    /// The requested action conflicts with the resource's current state.
    #[error("cannot {action} '{id}': {message}")]
    Conflict {
        /// The action that was attempted, e.g. `stop`.
        action: String,
        /// The identifier of the resource.
        id: String,
        /// The engine's description of the conflict.
        message: String,
    },

    /// Any other engine failure while performing an action.
    #[error("failed to {action} '{id}': {message}")]
    OperationFailed {
        /// The action that was attempted.
        action: String,
        /// The identifier of the resource.
        id: String,
        /// A description of the failure.
        message: String,
    },

    /// Failed to execute a command in a container.
    #[error("failed to execute command in container '{container_id}': {message}")]
    ExecFailed {
        /// The ID of the container.
        container_id: String,
        /// A description of the execution failure.
        message: String,
    },

    /// The engine answered a stats request without a sample.
    #[error("no resource statistics reported for container '{container_id}'")]
    StatsUnavailable {
        /// The ID of the container.
        container_id: String,
    },

    /// Health check failed - engine did not respond correctly.
    #[error("container engine health check failed: {message}")]
    HealthCheckFailed {
        /// A description of the health check failure.
        message: String,
    },

    /// Health check timed out.
    #[error("container engine health check timed out after {seconds} seconds")]
    HealthCheckTimeout {
        /// The timeout duration in seconds.
        seconds: u64,
    },
}

/// Errors raised at the tool boundary before any engine call is made.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool is registered under the requested name.
    #[error("unknown tool: {name}")]
    UnknownTool {
        /// The requested tool name.
        name: String,
    },

    /// The supplied arguments do not match the tool's input schema.
    #[error("invalid arguments for '{tool}': {reason}")]
    InvalidArguments {
        /// The tool being invoked.
        tool: String,
        /// Why the arguments were rejected.
        reason: String,
    },
}

/// Errors from the protocol transport.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The stdio transport could not be established or terminated abnormally.
    #[error("protocol transport failed: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// The diagnostic log subscriber could not be installed.
    #[error("failed to initialise logging: {message}")]
    LoggingInit {
        /// A description of the failure.
        message: String,
    },
}

/// Top-level error type for the dockhand application.
///
/// This enum aggregates all domain-specific errors into a single type that can
/// be used throughout the application. At the application boundary (main.rs),
/// these errors are converted to `eyre::Report` for human-readable reporting.
#[derive(Debug, Error)]
pub enum DockhandError {
    /// An error occurred during configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An error occurred during container engine operations.
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// A tool invocation was rejected.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The protocol server failed.
    #[error(transparent)]
    Server(#[from] ServerError),
}

/// A specialised `Result` type for dockhand operations.
pub type Result<T> = std::result::Result<T, DockhandError>;
