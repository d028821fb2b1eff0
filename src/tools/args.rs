//! Typed tool arguments.
//!
//! Field doc comments double as the descriptions in the generated JSON
//! schemas, so they are written for the calling agent.

use schemars::JsonSchema;
use serde::Deserialize;

/// Lines of log output returned when `tail` is omitted.
pub const DEFAULT_TAIL: u32 = 100;

const fn default_tail() -> u32 {
    DEFAULT_TAIL
}

/// Arguments for `list_containers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ListContainersArgs {
    /// Include stopped containers
    #[serde(default)]
    pub all: bool,
}

/// Arguments for `container_logs`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ContainerLogsArgs {
    /// Container ID or name
    pub id: String,
    /// Number of lines from the end
    #[serde(default = "default_tail")]
    pub tail: u32,
}

/// Arguments for tools that act on a single container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ContainerIdArgs {
    /// Container ID or name
    pub id: String,
}

/// Arguments for `remove_container`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct RemoveContainerArgs {
    /// Container ID or name
    pub id: String,
    /// Force remove running container
    #[serde(default)]
    pub force: bool,
}

/// Arguments for `exec_command`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ExecCommandArgs {
    /// Container ID or name
    pub id: String,
    /// Command and arguments, e.g. ['ls', '-la']
    pub command: Vec<String>,
}

/// Arguments for `list_images`, which takes none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct ListImagesArgs {}

/// Arguments for `remove_image`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct RemoveImageArgs {
    /// Image ID or tag
    pub id: String,
    /// Force remove
    #[serde(default)]
    pub force: bool,
}
