use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use outcome_association::{
    associate_outcomes, ByTypeAndNameAssociator, ComparisonReport, CompositeAssociator,
    RenameAssociator,
};
use outcome_core::{
    BuildOutcomeAssociator, CompareConfig, ComparisonConfig, LogLevel, OutputFormat, ReportFormat,
};
use tracing::info;

use crate::loader::load_outcome_set;

/// 命令行参数定义
pub fn build_cli() -> Command {
    Command::new("outcome-compare")
        .version("1.0.0")
        .about("比对两次构建的产出物")
        .arg(
            Arg::new("from")
                .long("from")
                .value_name("FILE")
                .help("源构建产出物文件 (.json/.toml)")
                .required(true),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FILE")
                .help("目标构建产出物文件 (.json/.toml)")
                .required(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("配置文件路径"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("日志级别")
                .value_parser(["trace", "debug", "info", "warn", "error"]),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .value_name("FORMAT")
                .help("日志格式")
                .value_parser(["json", "pretty", "text"]),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("报告格式，覆盖配置文件")
                .value_parser(["json", "text"]),
        )
}

/// 命令行参数覆盖配置中的日志级别、日志格式和报告格式
pub fn apply_cli_overrides(config: &mut CompareConfig, matches: &ArgMatches) -> Result<()> {
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.parse::<LogLevel>()?;
    }
    if let Some(format) = matches.get_one::<String>("log-format") {
        config.logging.format = format.parse::<OutputFormat>()?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        config.report.format = format.parse::<ReportFormat>()?;
    }
    Ok(())
}

/// 根据配置组装组合关联器
///
/// 顺序：先是各条重命名规则，然后是每种产出物类型的按类型与名称关联。
pub fn build_associator(config: &ComparisonConfig) -> CompositeAssociator {
    let mut associators: Vec<Arc<dyn BuildOutcomeAssociator>> =
        Vec::with_capacity(config.renames.len() + config.outcome_types.len());

    for rule in &config.renames {
        associators.push(Arc::new(RenameAssociator::new(
            rule.outcome_type.as_str(),
            rule.from_name.as_str(),
            rule.to_name.as_str(),
        )));
    }
    for outcome_type in &config.outcome_types {
        associators.push(Arc::new(ByTypeAndNameAssociator::new(outcome_type.as_str())));
    }

    CompositeAssociator::new(associators)
}

/// 比对应用
pub struct ComparisonApp {
    config: CompareConfig,
    associator: CompositeAssociator,
}

impl ComparisonApp {
    pub fn new(config: CompareConfig) -> Self {
        let associator = build_associator(&config.comparison);
        info!(
            "初始化比对应用，关联器顺序: {:?}",
            associator.associator_names()
        );
        Self { config, associator }
    }

    /// 加载两次构建的产出物，配对并生成报告
    pub async fn run(&self, from_path: &Path, to_path: &Path) -> Result<ComparisonReport> {
        let from = load_outcome_set(from_path)
            .await
            .with_context(|| format!("加载源构建产出物失败: {}", from_path.display()))?;
        let to = load_outcome_set(to_path)
            .await
            .with_context(|| format!("加载目标构建产出物失败: {}", to_path.display()))?;

        info!("比对构建 {} 与 {}", from.build, to.build);

        let associations = associate_outcomes(&self.associator, &from.outcomes, &to.outcomes)
            .context("产出物配对失败")?;

        let report = ComparisonReport::new(from.build, to.build, &associations);
        if self.config.report.include_unassociated {
            Ok(report)
        } else {
            Ok(report.without_unassociated())
        }
    }
}
