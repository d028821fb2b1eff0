//! Engine-operation facade for the dockhand tools.
//!
//! One async function per supported action. Each function makes its engine
//! calls through a [`ContainerEngine`] and reshapes the raw records into the
//! stable view models below, so callers never see engine model shapes. The
//! functions do not print and hold no state between calls.
//!
//! Engine failures are classified into [`crate::error::ContainerError`]
//! variants and returned without retrying.

mod containers;
mod exec;
mod images;
mod logs;
mod stats;

pub use containers::{
    list_containers, remove_container, restart_container, start_container, stop_container,
};
pub use exec::exec_command;
pub use images::{list_images, remove_image};
pub use logs::container_logs;
pub use stats::container_stats;

pub use crate::stats::ResourceStats;

use bollard::errors::Error as BollardError;
use tracing::debug;

use crate::engine::classify_operation_error;
use crate::error::DockhandError;

/// A container as presented to tool callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    /// The first twelve characters of the engine identifier.
    pub id: String,
    /// The first registered name without its leading `/`.
    pub name: String,
    /// Image reference.
    pub image: String,
    /// Lifecycle state such as `running` or `exited`.
    pub state: String,
    /// Status description such as `Up 2 hours`.
    pub status: String,
    /// Port mappings rendered by [`crate::format::format_ports`].
    pub ports: String,
    /// Creation time as an ISO-8601 timestamp.
    pub created: String,
}

/// An image as presented to tool callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    /// The digest without its algorithm prefix, cut to twelve characters.
    pub id: String,
    /// Repository tags, or `["<none>"]` for untagged images.
    pub tags: Vec<String>,
    /// Size rendered by [`crate::format::format_bytes`].
    pub size: String,
    /// Creation time as an ISO-8601 timestamp.
    pub created: String,
}

/// Build a mapper that classifies an engine failure for `action` on `id`.
fn engine_error<'a>(
    action: &'a str,
    id: &'a str,
) -> impl FnOnce(BollardError) -> DockhandError + 'a {
    move |error| {
        debug!(action, id, error = %error, "engine call failed");
        DockhandError::from(classify_operation_error(&error, action, id))
    }
}
