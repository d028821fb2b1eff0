//! Container engine connection and the engine operation seam.
//!
//! The socket endpoint is resolved through a priority-based fallback chain:
//!
//! 1. CLI argument (`--engine-socket`)
//! 2. `DOCKHAND_ENGINE_SOCKET` environment variable
//! 3. Config file (`engine_socket` in TOML)
//! 4. `DOCKER_HOST` environment variable
//! 5. `CONTAINER_HOST` environment variable
//! 6. `PODMAN_HOST` environment variable
//! 7. Platform default (`/var/run/docker.sock` on Unix)

mod client;
mod connection;

pub use client::{ContainerEngine, ContainerRecord, EngineFuture, ImageRecord, OutputStream};
#[cfg(test)]
pub(crate) use client::MockEngine;
pub(crate) use connection::classify_operation_error;
pub use connection::{EngineConnector, SocketResolver};
