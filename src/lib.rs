//! Container and image management tools for AI agents.
//!
//! `dockhand` exposes a fixed set of Docker or Podman operations as Model
//! Context Protocol tools: listing, inspecting logs, starting, stopping,
//! restarting and removing containers, running commands inside them, taking
//! resource-usage snapshots, and listing or removing images. Each tool
//! forwards to the container engine's API and renders the result as text
//! for the calling agent.
//!
//! # Architecture
//!
//! Requests flow through four layers. The [`server`] receives protocol calls
//! and hands them to [`tools`], which validates arguments against the
//! catalogue and renders results. [`tools`] calls the [`api`] facade, which
//! reshapes engine records into stable view models. The facade reaches the
//! engine only through the [`engine::ContainerEngine`] seam, implemented for
//! `bollard::Docker`. No state is held between calls.
//!
//! # Modules
//!
//! - [`api`]: Engine-operation facade returning view models
//! - [`config`]: Configuration system with layered precedence (CLI > env > file > defaults)
//! - [`engine`]: Container engine connection and the `ContainerEngine` seam
//! - [`error`]: Semantic error types for the application
//! - [`format`]: Byte, port, identifier and timestamp formatting
//! - [`logging`]: Diagnostic logging to stderr
//! - [`server`]: Model Context Protocol server over stdio
//! - [`stats`]: Resource-usage derivation from engine samples
//! - [`tools`]: Tool catalogue, argument validation and text rendering

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod server;
pub mod stats;
pub mod tools;
