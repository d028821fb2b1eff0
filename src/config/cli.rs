//! Command-line argument definitions for dockhand.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Command-line interface for dockhand.
#[derive(Debug, Parser)]
#[command(name = "dockhand")]
#[command(
    author,
    version,
    about = "Container and image management tools served over the Model Context Protocol"
)]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file.
    #[arg(long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Container engine socket path or URL.
    #[arg(long, global = true)]
    pub engine_socket: Option<String>,

    /// Log filter directive, e.g. `debug` or `dockhand=trace`.
    #[arg(long, global = true)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// The subcommand to run, falling back to [`Commands::Serve`].
    #[must_use]
    pub fn subcommand(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}

/// Available subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Serve the tools over stdio until the client disconnects.
    Serve,

    /// Connect to the container engine and report whether it answers.
    Check,

    /// Print the tool catalogue.
    Tools,
}
