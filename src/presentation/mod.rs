//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the lifecycle with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates the lifecycle with proper dependencies
//! - `output` - Listing and summary renderers

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_event_sink, create_lifecycle, ConcreteLifecycle};
pub use output::{deploy_to_json, list_to_json, render_list};
