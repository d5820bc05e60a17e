pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod traits;

pub use self::config::*;
pub use errors::*;
pub use logging::{init_logging, LogConfig, LogLevel, OutputFormat};
pub use models::{
    AssociatedOutcomes, AssociationType, BuildOutcome, BuildOutcomeSet, OutcomeAssociations,
};
pub use traits::BuildOutcomeAssociator;

/// 统一的Result类型
pub type CompareResult<T> = std::result::Result<T, CompareError>;
