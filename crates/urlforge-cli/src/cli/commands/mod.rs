//! CLI command handlers. Each command is in its own file; shared input and output helpers alongside.

mod build_query;
mod build_url;
mod input;
mod output;

pub use build_query::run_build_query;
pub use build_url::run_build_url;
