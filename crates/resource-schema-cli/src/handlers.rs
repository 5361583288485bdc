//! Command handlers for CLI subcommands
//!
//! Each handler resolves the asset provider from the configuration, loads
//! schemas through `resource_schema`, and writes results via `OutputWriter`.

pub mod check;
mod completions;
mod list;
mod show;
mod utils;

pub use check::handle_check;
pub use completions::handle_completions;
pub use list::handle_list;
pub use show::handle_show;
