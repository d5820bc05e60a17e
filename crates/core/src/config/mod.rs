//! 配置管理
//!
//! 配置来源按优先级从低到高依次为：内置默认值、TOML配置文件、
//! `OUTCOME_COMPARE_` 前缀的环境变量。

pub mod compare_config;

pub use compare_config::{
    CompareConfig, ComparisonConfig, RenameRule, ReportConfig, ReportFormat, ENV_PREFIX,
};
