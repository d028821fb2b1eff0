//! The container-engine seam used by the tool facade.
//!
//! [`ContainerEngine`] has one method per engine call the tools need. The
//! `Bollard` client implements it in [`docker`]; tests substitute a `mockall`
//! double returning fixed records. Snapshot calls return the crate's own raw
//! records so only the `Bollard` implementation reads engine model shapes.

mod docker;

use std::future::Future;
use std::pin::Pin;

use bollard::container::LogOutput;
use bollard::errors::Error as BollardError;
use bollard::exec::{CreateExecOptions, CreateExecResults, StartExecOptions, StartExecResults};
use futures_util::Stream;

use crate::format::PortMapping;
use crate::stats::UsageSnapshot;

#[cfg(test)]
pub(crate) use self::mock::MockEngine;

/// Boxed future returned by [`ContainerEngine`] methods.
pub type EngineFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, BollardError>> + Send + 'a>>;

/// Boxed stream of demultiplexed output frames.
pub type OutputStream<'a> =
    Pin<Box<dyn Stream<Item = Result<LogOutput, BollardError>> + Send + 'a>>;

/// A container as listed by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRecord {
    /// Full container identifier.
    pub id: String,
    /// Registered names, each with a leading `/`.
    pub names: Vec<String>,
    /// Image reference the container was created from.
    pub image: String,
    /// Lifecycle state, e.g. `running`.
    pub state: String,
    /// Human-readable status, e.g. `Up 2 hours`.
    pub status: String,
    /// Exposed and published ports.
    pub ports: Vec<PortMapping>,
    /// Creation time in Unix epoch seconds.
    pub created: i64,
}

/// An image as listed by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRecord {
    /// Content digest, usually prefixed with `sha256:`.
    pub id: String,
    /// Repository tags; empty for dangling images.
    pub repo_tags: Vec<String>,
    /// Size in bytes.
    pub size: u64,
    /// Creation time in Unix epoch seconds.
    pub created: i64,
}

/// Engine operations required by the tool facade.
pub trait ContainerEngine: Send + Sync {
    /// List containers, including stopped ones when `include_stopped` is set.
    fn list_containers(&self, include_stopped: bool) -> EngineFuture<'_, Vec<ContainerRecord>>;

    /// Stream the last `tail` lines of stdout and stderr without following.
    fn container_logs(&self, container_id: &str, tail: u32) -> OutputStream<'_>;

    /// Start a stopped container.
    fn start_container(&self, container_id: &str) -> EngineFuture<'_, ()>;

    /// Stop a running container.
    fn stop_container(&self, container_id: &str) -> EngineFuture<'_, ()>;

    /// Restart a container.
    fn restart_container(&self, container_id: &str) -> EngineFuture<'_, ()>;

    /// Remove a container, killing it first when `force` is set.
    fn remove_container(&self, container_id: &str, force: bool) -> EngineFuture<'_, ()>;

    /// Create an exec session in a running container.
    fn create_exec(
        &self,
        container_id: &str,
        options: CreateExecOptions<String>,
    ) -> EngineFuture<'_, CreateExecResults>;

    /// Start a previously created exec session.
    fn start_exec(
        &self,
        exec_id: &str,
        options: Option<StartExecOptions>,
    ) -> EngineFuture<'_, StartExecResults>;

    /// Take one non-streaming stats reading; `None` if the engine sent none.
    fn container_stats(&self, container_id: &str) -> EngineFuture<'_, Option<UsageSnapshot>>;

    /// List images on the host.
    fn list_images(&self) -> EngineFuture<'_, Vec<ImageRecord>>;

    /// Remove an image, even if in use when `force` is set.
    fn remove_image(&self, image: &str, force: bool) -> EngineFuture<'_, ()>;
}
