//! Model Context Protocol server exposing the dockhand tools.
//!
//! [`DockhandServer`] advertises the tool catalogue and routes `tools/call`
//! requests through [`crate::tools::ToolCall`]. Malformed calls are answered
//! with a JSON-RPC `invalid_params` error; engine failures become tool
//! results flagged as errors so the calling agent sees the engine's message.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use tracing::{info, warn};

use crate::engine::ContainerEngine;
use crate::error::{Result as DockhandResult, ServerError};
use crate::tools::{ToolCall, ToolName};

/// Name reported to clients during initialisation.
pub const SERVER_NAME: &str = "dockhand";

const INSTRUCTIONS: &str = "Manage containers and images on the local container engine: \
list, inspect logs and stats, start, stop, restart, remove, and run commands.";

/// Protocol handler backed by a container engine.
#[derive(Debug)]
pub struct DockhandServer<E> {
    engine: Arc<E>,
}

impl<E> Clone for DockhandServer<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<E: ContainerEngine + 'static> DockhandServer<E> {
    /// Create a server that executes tool calls against `engine`.
    pub fn new(engine: E) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// The catalogue entries advertised by `tools/list`.
    #[must_use]
    pub fn tools() -> Vec<Tool> {
        ToolName::ALL
            .into_iter()
            .map(|tool| Tool::new(tool.as_str(), tool.description(), tool.input_schema()))
            .collect()
    }

    /// Handle a single tool call.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for unknown tools and malformed arguments.
    /// Engine failures are reported inside the returned result.
    pub async fn handle_call(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, ErrorData> {
        let call = ToolCall::parse(&request.name, request.arguments).map_err(|error| {
            warn!(tool = %request.name, error = %error, "rejected tool call");
            ErrorData::invalid_params(error.to_string(), None)
        })?;

        let tool = call.tool();
        match call.execute(self.engine.as_ref()).await {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(error) => {
                warn!(tool = tool.as_str(), error = %error, "tool call failed");
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }

    /// Serve the protocol on stdin and stdout until the client disconnects.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Transport` if the session cannot be initialised
    /// or ends abnormally.
    pub async fn serve_stdio(self) -> DockhandResult<()> {
        let running = self
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|error| ServerError::Transport {
                message: error.to_string(),
            })?;
        info!("protocol session established on stdio");

        let reason = running.waiting().await.map_err(|error| ServerError::Transport {
            message: error.to_string(),
        })?;
        info!(?reason, "protocol session ended");
        Ok(())
    }
}

impl<E: ContainerEngine + 'static> ServerHandler for DockhandServer<E> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: String::from(SERVER_NAME),
                version: String::from(env!("CARGO_PKG_VERSION")),
                ..Implementation::default()
            },
            instructions: Some(String::from(INSTRUCTIONS)),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(Self::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.handle_call(request).await
    }
}
