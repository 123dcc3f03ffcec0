//! CLI command handlers, one per file.

mod classify;
mod completions;
mod config;
mod invoke;
mod open;
mod prefs;
mod report;
mod route;

pub use classify::run_classify;
pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use invoke::run_invoke;
pub use open::run_open;
pub use prefs::run_prefs;
pub use route::{run_route, RouteOptions};
