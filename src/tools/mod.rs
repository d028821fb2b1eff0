//! Tool catalogue, argument validation and dispatch.
//!
//! Each tool has a stable name, a description for discovery, and a JSON
//! schema derived from its argument struct. A call is first parsed into a
//! [`ToolCall`], which rejects malformed arguments with
//! [`ToolError::InvalidArguments`] before any engine call is made, and then
//! executed against the facade and rendered to text.

mod args;
pub mod render;

pub use args::{
    ContainerIdArgs, ContainerLogsArgs, DEFAULT_TAIL, ExecCommandArgs, ListContainersArgs,
    ListImagesArgs, RemoveContainerArgs, RemoveImageArgs,
};

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use self::render::{
    NO_LOGS, NO_OUTPUT, container_table, image_table, or_placeholder, resource_report,
};
use crate::api;
use crate::engine::ContainerEngine;
use crate::error::{Result as DockhandResult, ToolError};

/// A JSON object, as used for tool arguments and input schemas.
pub type JsonObject = Map<String, Value>;

/// The tools served by dockhand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// List containers.
    ListContainers,
    /// Fetch recent container logs.
    ContainerLogs,
    /// Start a container.
    StartContainer,
    /// Stop a container.
    StopContainer,
    /// Restart a container.
    RestartContainer,
    /// Remove a container.
    RemoveContainer,
    /// Run a command inside a container.
    ExecCommand,
    /// Take a resource usage snapshot.
    ContainerStats,
    /// List images.
    ListImages,
    /// Remove an image.
    RemoveImage,
}

impl ToolName {
    /// Every tool, in catalogue order.
    pub const ALL: [Self; 10] = [
        Self::ListContainers,
        Self::ContainerLogs,
        Self::StartContainer,
        Self::StopContainer,
        Self::RestartContainer,
        Self::RemoveContainer,
        Self::ExecCommand,
        Self::ContainerStats,
        Self::ListImages,
        Self::RemoveImage,
    ];

    /// The protocol name of the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListContainers => "list_containers",
            Self::ContainerLogs => "container_logs",
            Self::StartContainer => "start_container",
            Self::StopContainer => "stop_container",
            Self::RestartContainer => "restart_container",
            Self::RemoveContainer => "remove_container",
            Self::ExecCommand => "exec_command",
            Self::ContainerStats => "container_stats",
            Self::ListImages => "list_images",
            Self::RemoveImage => "remove_image",
        }
    }

    /// Human-readable description advertised to callers.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ListContainers => {
                "List Docker containers. Set all=true to include stopped containers."
            }
            Self::ContainerLogs => "Get logs from a Docker container.",
            Self::StartContainer => "Start a stopped Docker container.",
            Self::StopContainer => "Stop a running Docker container.",
            Self::RestartContainer => "Restart a Docker container.",
            Self::RemoveContainer => {
                "Remove a Docker container. Use force=true to remove running containers."
            }
            Self::ExecCommand => "Execute a command inside a running Docker container.",
            Self::ContainerStats => {
                "Get CPU, memory, and network stats for a running Docker container."
            }
            Self::ListImages => "List Docker images on the host.",
            Self::RemoveImage => "Remove a Docker image. Use force=true to force removal.",
        }
    }

    /// Look up a tool by its protocol name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    /// JSON schema of the tool's arguments.
    #[must_use]
    pub fn input_schema(self) -> JsonObject {
        match self {
            Self::ListContainers => schema_object::<ListContainersArgs>(),
            Self::ContainerLogs => schema_object::<ContainerLogsArgs>(),
            Self::StartContainer
            | Self::StopContainer
            | Self::RestartContainer
            | Self::ContainerStats => schema_object::<ContainerIdArgs>(),
            Self::RemoveContainer => schema_object::<RemoveContainerArgs>(),
            Self::ExecCommand => schema_object::<ExecCommandArgs>(),
            Self::ListImages => schema_object::<ListImagesArgs>(),
            Self::RemoveImage => schema_object::<RemoveImageArgs>(),
        }
    }
}

fn schema_object<T: JsonSchema>() -> JsonObject {
    schemars::schema_for!(T)
        .as_object()
        .cloned()
        .unwrap_or_default()
}

/// A validated tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    /// `list_containers`
    ListContainers(ListContainersArgs),
    /// `container_logs`
    ContainerLogs(ContainerLogsArgs),
    /// `start_container`
    StartContainer(ContainerIdArgs),
    /// `stop_container`
    StopContainer(ContainerIdArgs),
    /// `restart_container`
    RestartContainer(ContainerIdArgs),
    /// `remove_container`
    RemoveContainer(RemoveContainerArgs),
    /// `exec_command`
    ExecCommand(ExecCommandArgs),
    /// `container_stats`
    ContainerStats(ContainerIdArgs),
    /// `list_images`
    ListImages,
    /// `remove_image`
    RemoveImage(RemoveImageArgs),
}

impl ToolCall {
    /// Parse and validate a call to `name` with optional `arguments`.
    ///
    /// Missing arguments are treated as an empty object, so tools whose
    /// fields all have defaults can be called bare.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTool`] for an unregistered name and
    /// [`ToolError::InvalidArguments`] when the arguments do not match the
    /// schema, an identifier is empty, or a command has no tokens.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> Result<Self, ToolError> {
        let tool = ToolName::from_name(name).ok_or_else(|| ToolError::UnknownTool {
            name: String::from(name),
        })?;
        let object = arguments.unwrap_or_default();

        let call = match tool {
            ToolName::ListContainers => Self::ListContainers(parse_args(tool, object)?),
            ToolName::ContainerLogs => {
                let parsed: ContainerLogsArgs = parse_args(tool, object)?;
                require_id(tool, &parsed.id)?;
                Self::ContainerLogs(parsed)
            }
            ToolName::StartContainer => Self::StartContainer(container_id_args(tool, object)?),
            ToolName::StopContainer => Self::StopContainer(container_id_args(tool, object)?),
            ToolName::RestartContainer => {
                Self::RestartContainer(container_id_args(tool, object)?)
            }
            ToolName::RemoveContainer => {
                let parsed: RemoveContainerArgs = parse_args(tool, object)?;
                require_id(tool, &parsed.id)?;
                Self::RemoveContainer(parsed)
            }
            ToolName::ExecCommand => {
                let parsed: ExecCommandArgs = parse_args(tool, object)?;
                require_id(tool, &parsed.id)?;
                if parsed.command.is_empty() {
                    return Err(invalid_arguments(tool, "command must not be empty"));
                }
                Self::ExecCommand(parsed)
            }
            ToolName::ContainerStats => Self::ContainerStats(container_id_args(tool, object)?),
            ToolName::ListImages => {
                let _: ListImagesArgs = parse_args(tool, object)?;
                Self::ListImages
            }
            ToolName::RemoveImage => {
                let parsed: RemoveImageArgs = parse_args(tool, object)?;
                require_id(tool, &parsed.id)?;
                Self::RemoveImage(parsed)
            }
        };
        Ok(call)
    }

    /// The tool this call invokes.
    #[must_use]
    pub const fn tool(&self) -> ToolName {
        match self {
            Self::ListContainers(_) => ToolName::ListContainers,
            Self::ContainerLogs(_) => ToolName::ContainerLogs,
            Self::StartContainer(_) => ToolName::StartContainer,
            Self::StopContainer(_) => ToolName::StopContainer,
            Self::RestartContainer(_) => ToolName::RestartContainer,
            Self::RemoveContainer(_) => ToolName::RemoveContainer,
            Self::ExecCommand(_) => ToolName::ExecCommand,
            Self::ContainerStats(_) => ToolName::ContainerStats,
            Self::ListImages => ToolName::ListImages,
            Self::RemoveImage(_) => ToolName::RemoveImage,
        }
    }

    /// Run the call against `engine` and render the result as text.
    ///
    /// # Errors
    ///
    /// Propagates the facade's engine errors unchanged.
    pub async fn execute<E: ContainerEngine + ?Sized>(self, engine: &E) -> DockhandResult<String> {
        debug!(tool = self.tool().as_str(), "executing tool call");
        match self {
            Self::ListContainers(ListContainersArgs { all }) => {
                let containers = api::list_containers(engine, all).await?;
                Ok(container_table(&containers))
            }
            Self::ContainerLogs(ContainerLogsArgs { id, tail }) => {
                let logs = api::container_logs(engine, &id, tail).await?;
                Ok(or_placeholder(logs, NO_LOGS))
            }
            Self::StartContainer(ContainerIdArgs { id }) => api::start_container(engine, &id).await,
            Self::StopContainer(ContainerIdArgs { id }) => api::stop_container(engine, &id).await,
            Self::RestartContainer(ContainerIdArgs { id }) => {
                api::restart_container(engine, &id).await
            }
            Self::RemoveContainer(RemoveContainerArgs { id, force }) => {
                api::remove_container(engine, &id, force).await
            }
            Self::ExecCommand(ExecCommandArgs { id, command }) => {
                let output = api::exec_command(engine, &id, command).await?;
                Ok(or_placeholder(output, NO_OUTPUT))
            }
            Self::ContainerStats(ContainerIdArgs { id }) => {
                let stats = api::container_stats(engine, &id).await?;
                Ok(resource_report(&stats))
            }
            Self::ListImages => {
                let images = api::list_images(engine).await?;
                Ok(image_table(&images))
            }
            Self::RemoveImage(RemoveImageArgs { id, force }) => {
                api::remove_image(engine, &id, force).await
            }
        }
    }
}

/// Parse, validate and execute a tool call in one step.
///
/// # Errors
///
/// Returns a [`ToolError`] for unknown tools or malformed arguments, without
/// contacting the engine, and otherwise propagates engine errors.
pub async fn dispatch<E: ContainerEngine + ?Sized>(
    engine: &E,
    name: &str,
    arguments: Option<JsonObject>,
) -> DockhandResult<String> {
    let call = ToolCall::parse(name, arguments)?;
    call.execute(engine).await
}

fn parse_args<T: DeserializeOwned>(tool: ToolName, object: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(object))
        .map_err(|error| invalid_arguments(tool, &error.to_string()))
}

fn container_id_args(tool: ToolName, object: JsonObject) -> Result<ContainerIdArgs, ToolError> {
    let parsed: ContainerIdArgs = parse_args(tool, object)?;
    require_id(tool, &parsed.id)?;
    Ok(parsed)
}

fn require_id(tool: ToolName, id: &str) -> Result<(), ToolError> {
    if id.trim().is_empty() {
        return Err(invalid_arguments(tool, "id must not be empty"));
    }
    Ok(())
}

fn invalid_arguments(tool: ToolName, reason: &str) -> ToolError {
    ToolError::InvalidArguments {
        tool: String::from(tool.as_str()),
        reason: String::from(reason),
    }
}
