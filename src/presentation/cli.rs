//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --root, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mfd - fetch, build, activate and roll back deployments on one host
#[derive(Parser, Debug)]
#[command(name = "mfd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events and machine-readable listings
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Working root holding the deployments (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (default: <root>/mfd.toml)
    #[arg(long, global = true, env = "MFD_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List available deployments
    #[command(visible_alias = "ls")]
    List,

    /// Resolve, fetch, build, and activate a revision
    Deploy {
        /// Branch, tag, or commit to deploy
        #[arg(default_value = "HEAD")]
        revision: String,
    },

    /// Resolve a revision to a full commit hash
    Resolve {
        /// Branch, tag, or commit to resolve
        #[arg(default_value = "HEAD")]
        revision: String,
    },

    /// Activate the deployment before the active one
    Rollback {
        /// Also restart the configured systemd unit
        #[arg(long)]
        restart: bool,
    },

    /// Remove old deployments
    Clean,

    /// Restart the configured systemd unit
    Restart,

    /// Activate a deployment
    Activate {
        /// Deployment name or full commit hash
        deployment: String,
    },

    /// Remove a deployment
    #[command(visible_aliases = ["rm", "delete"])]
    Remove {
        /// Deployment name or full commit hash
        deployment: String,
    },
}
