//! Engine endpoint resolution and connection.
//!
//! Resolves the container engine endpoint from configuration, the usual
//! `*_HOST` environment variables, or the platform default, then builds a
//! `Bollard` client for it.

mod error_classification;
mod health_check;

use bollard::Docker;
use tracing::debug;

pub(crate) use self::error_classification::classify_operation_error;
use self::error_classification::classify_connection_error;
use crate::error::DockhandError;

/// Environment variables consulted, in order, when no endpoint is configured.
const FALLBACK_ENV_VARS: &[&str] = &["DOCKER_HOST", "CONTAINER_HOST", "PODMAN_HOST"];

/// Request timeout in seconds applied by the `Bollard` client.
const CONNECTION_TIMEOUT_SECS: u64 = 120;

/// Timeout in seconds for the startup ping.
pub(crate) const HEALTH_CHECK_TIMEOUT_SECS: u64 = 10;

#[cfg(unix)]
const DEFAULT_SOCKET: &str = "unix:///var/run/docker.sock";

#[cfg(windows)]
const DEFAULT_SOCKET: &str = "npipe:////./pipe/docker_engine";

/// Looks up an engine endpoint in the process environment.
///
/// Generic over `mockable::Env` so resolution can be tested without touching
/// real environment variables.
pub struct SocketResolver<'a, E: mockable::Env> {
    env: &'a E,
}

impl<'a, E: mockable::Env> SocketResolver<'a, E> {
    /// Create a resolver reading from `env`.
    #[must_use]
    pub const fn new(env: &'a E) -> Self {
        Self { env }
    }

    /// First non-empty value of `DOCKER_HOST`, `CONTAINER_HOST` or
    /// `PODMAN_HOST`.
    #[must_use]
    pub fn resolve_from_env(&self) -> Option<String> {
        FALLBACK_ENV_VARS
            .iter()
            .filter_map(|var_name| self.env.string(var_name))
            .find(|value| !value.is_empty())
    }

    /// Endpoint used when nothing else is configured.
    #[must_use]
    pub const fn default_socket() -> &'static str {
        DEFAULT_SOCKET
    }
}

/// How an endpoint string should be handed to `Bollard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndpointKind {
    /// `unix://` or `npipe://` URI.
    Socket,
    /// `tcp://`, `http://` or `https://` URI.
    Http,
    /// Filesystem path without a scheme.
    BarePath,
}

impl EndpointKind {
    fn classify(endpoint: &str) -> Self {
        if endpoint.starts_with("unix://") || endpoint.starts_with("npipe://") {
            Self::Socket
        } else if ["tcp://", "http://", "https://"]
            .iter()
            .any(|scheme| endpoint.starts_with(scheme))
        {
            Self::Http
        } else {
            Self::BarePath
        }
    }
}

/// Builds `Bollard` clients for Docker or Podman endpoints.
pub struct EngineConnector;

impl EngineConnector {
    /// Create a client for `endpoint`.
    ///
    /// Accepts `unix://` and `npipe://` sockets, `tcp://` (treated as HTTP),
    /// `http://`, `https://`, and bare paths. Bare paths beginning with `//`
    /// or `\\` are treated as named pipes, anything else as a Unix socket.
    ///
    /// # Errors
    ///
    /// Returns a connectivity `ContainerError` (`ConnectionFailed`,
    /// `SocketNotFound` or `PermissionDenied`) when the client cannot be built.
    pub fn connect(endpoint: &str) -> Result<Docker, DockhandError> {
        let kind = EndpointKind::classify(endpoint);
        debug!(endpoint, ?kind, "connecting to container engine");

        let result = match kind {
            EndpointKind::Socket => Docker::connect_with_socket(
                endpoint,
                CONNECTION_TIMEOUT_SECS,
                bollard::API_DEFAULT_VERSION,
            ),
            EndpointKind::Http => {
                let http_endpoint = endpoint
                    .strip_prefix("tcp://")
                    .map_or_else(|| endpoint.to_owned(), |rest| format!("http://{rest}"));
                Docker::connect_with_http(
                    &http_endpoint,
                    CONNECTION_TIMEOUT_SECS,
                    bollard::API_DEFAULT_VERSION,
                )
            }
            EndpointKind::BarePath => Docker::connect_with_socket(
                &Self::socket_uri_for_path(endpoint),
                CONNECTION_TIMEOUT_SECS,
                bollard::API_DEFAULT_VERSION,
            ),
        };

        result.map_err(|error| DockhandError::from(classify_connection_error(&error, endpoint)))
    }

    /// Resolve the endpoint and create a client for it.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::connect`].
    pub fn connect_with_fallback<E: mockable::Env>(
        config_socket: Option<&str>,
        resolver: &SocketResolver<'_, E>,
    ) -> Result<Docker, DockhandError> {
        Self::connect(&Self::resolve_socket(config_socket, resolver))
    }

    /// Resolve the endpoint without connecting.
    ///
    /// Order: a non-empty configured socket, then the environment fallbacks,
    /// then the platform default.
    #[must_use]
    pub fn resolve_socket<E: mockable::Env>(
        config_socket: Option<&str>,
        resolver: &SocketResolver<'_, E>,
    ) -> String {
        config_socket
            .filter(|socket| !socket.is_empty())
            .map(String::from)
            .or_else(|| resolver.resolve_from_env())
            .unwrap_or_else(|| SocketResolver::<E>::default_socket().to_owned())
    }

    fn socket_uri_for_path(path: &str) -> String {
        if path.starts_with("\\\\") || path.starts_with("//") {
            format!("npipe://{path}")
        } else {
            format!("unix://{path}")
        }
    }
}
