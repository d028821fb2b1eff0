//! Engine liveness checks.

use std::time::Duration;

use bollard::Docker;
use tracing::debug;

use super::{EngineConnector, HEALTH_CHECK_TIMEOUT_SECS, SocketResolver};
use crate::error::{ContainerError, DockhandError};

impl EngineConnector {
    /// Ping the engine, failing if it does not answer in time.
    ///
    /// A successful ping confirms the engine is serving requests, not merely
    /// that the socket exists.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::HealthCheckFailed` if the ping is rejected and
    /// `ContainerError::HealthCheckTimeout` if no answer arrives within
    /// ten seconds.
    pub async fn health_check(docker: &Docker) -> Result<(), DockhandError> {
        let timeout = Duration::from_secs(HEALTH_CHECK_TIMEOUT_SECS);

        tokio::time::timeout(timeout, docker.ping())
            .await
            .map_err(|_| {
                DockhandError::from(ContainerError::HealthCheckTimeout {
                    seconds: HEALTH_CHECK_TIMEOUT_SECS,
                })
            })?
            .map_err(|e| {
                DockhandError::from(ContainerError::HealthCheckFailed {
                    message: e.to_string(),
                })
            })?;
        debug!("container engine answered ping");
        Ok(())
    }

    /// Resolve the endpoint, connect, and ping the engine.
    ///
    /// # Errors
    ///
    /// Returns connectivity errors from [`Self::connect`] or health-check
    /// errors from [`Self::health_check`].
    pub async fn connect_with_fallback_and_verify<E: mockable::Env>(
        config_socket: Option<&str>,
        resolver: &SocketResolver<'_, E>,
    ) -> Result<Docker, DockhandError> {
        let docker = Self::connect_with_fallback(config_socket, resolver)?;
        Self::health_check(&docker).await?;
        Ok(docker)
    }
}
