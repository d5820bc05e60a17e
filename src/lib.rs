pub mod app;
pub mod loader;

pub use app::{apply_cli_overrides, build_associator, build_cli, ComparisonApp};
pub use loader::load_outcome_set;
