use std::path::Path;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::logging::LogConfig;
use crate::{CompareError, CompareResult};

/// 环境变量前缀，例如 `OUTCOME_COMPARE_REPORT__FORMAT=json`
pub const ENV_PREFIX: &str = "OUTCOME_COMPARE";

/// 比对工具配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub comparison: ComparisonConfig,
    pub report: ReportConfig,
    pub logging: LogConfig,
}

/// 产出物关联规则
///
/// 关联器按以下顺序组合：先是 `renames` 中的每条重命名规则，
/// 然后是 `outcome_types` 中每种类型的按类型与名称关联。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub outcome_types: Vec<String>,
    pub renames: Vec<RenameRule>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            outcome_types: vec!["archive".to_string(), "file".to_string()],
            renames: Vec::new(),
        }
    }
}

/// 重命名规则：源构建中的 `from_name` 对应目标构建中的 `to_name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRule {
    pub outcome_type: String,
    pub from_name: String,
    pub to_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub include_unassociated: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            include_unassociated: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ReportFormat {
    Json,
    Text,
}

impl std::str::FromStr for ReportFormat {
    type Err = CompareError;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "text" => Ok(ReportFormat::Text),
            _ => Err(CompareError::Configuration(format!(
                "不支持的报告格式: {format}"
            ))),
        }
    }
}

impl TryFrom<String> for ReportFormat {
    type Error = CompareError;

    fn try_from(format: String) -> Result<Self, Self::Error> {
        format.parse()
    }
}

impl CompareConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序:
    /// 1. 默认配置，日志部分取自 `LOG_LEVEL` / `LOG_FORMAT` / `LOG_TARGET`
    /// 2. 配置文件（TOML格式，若提供）
    /// 3. 环境变量覆盖（前缀: OUTCOME_COMPARE_，层级分隔符: __）
    pub fn load(config_path: Option<&Path>) -> CompareResult<Self> {
        let log_defaults = LogConfig::from_env();
        let mut builder = ConfigBuilder::builder()
            .set_default("logging.level", log_defaults.level.as_filter_directive())
            .and_then(|b| b.set_default("logging.format", log_defaults.format.as_str()))
            .and_then(|b| b.set_default("logging.include_target", log_defaults.include_target))
            .map_err(|e| CompareError::Configuration(format!("设置默认日志配置失败: {e}")))?;

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(CompareError::Configuration(format!(
                    "配置文件不存在: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("comparison.outcome_types")
                .try_parsing(true),
        );

        let config: CompareConfig = builder
            .build()
            .map_err(|e| CompareError::Configuration(format!("构建配置失败: {e}")))?
            .try_deserialize()
            .map_err(|e| CompareError::Configuration(format!("反序列化配置失败: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// 从TOML字符串加载配置
    pub fn from_toml(toml_str: &str) -> CompareResult<Self> {
        let config: CompareConfig = toml::from_str(toml_str)
            .map_err(|e| CompareError::Configuration(format!("解析TOML配置失败: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// 序列化配置为TOML字符串
    pub fn to_toml(&self) -> CompareResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CompareError::Serialization(format!("序列化配置为TOML失败: {e}")))
    }

    pub fn validate(&self) -> CompareResult<()> {
        self.comparison.validate()
    }
}

impl ComparisonConfig {
    pub fn validate(&self) -> CompareResult<()> {
        if self.outcome_types.iter().any(|t| t.trim().is_empty()) {
            return Err(CompareError::Configuration(
                "outcome_types 不能包含空的类型名".to_string(),
            ));
        }

        for rule in &self.renames {
            if rule.outcome_type.trim().is_empty()
                || rule.from_name.trim().is_empty()
                || rule.to_name.trim().is_empty()
            {
                return Err(CompareError::Configuration(format!(
                    "无效的重命名规则: {rule:?}"
                )));
            }
        }

        Ok(())
    }
}
