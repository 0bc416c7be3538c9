//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the main application runners.

pub mod app;
pub mod args;
pub mod bridge_app;
pub mod config_cmd;
pub mod pid_file;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{
    bridge_options, load_merged_config, resolve_credentials, run_send, EXIT_ERROR, EXIT_SUCCESS,
    EXIT_USAGE_ERROR,
};
pub use args::{BridgeOptions, Cli, Commands, ConfigAction};
pub use bridge_app::run_bridge;
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;
