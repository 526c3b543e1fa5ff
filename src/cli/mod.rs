//! CLI command handlers
//!
//! This module contains the argument structures, help utilities and the
//! command router.

pub mod args;
pub mod help;
pub mod router;

pub use args::{Cli, Commands, SourceArgs};
pub use help::get_log_level;
pub use router::{execute_command, load_config};
