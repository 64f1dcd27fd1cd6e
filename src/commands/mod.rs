//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod infographic;
pub mod list;
pub mod models;
pub mod stats;
pub mod utils;

// Re-export main command functions
pub use infographic::execute_infographic;
pub use list::execute_list;
pub use models::{InfographicArgs, ListArgs, StatsArgs};
pub use stats::execute_stats;
pub use utils::{display_version, validate_report_file};
