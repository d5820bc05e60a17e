use std::path::PathBuf;

use anyhow::{Context, Result};
use outcome_compare::{apply_cli_overrides, build_cli, ComparisonApp};
use outcome_core::{init_logging, CompareConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数
    let matches = build_cli().get_matches();

    let from_path = matches
        .get_one::<String>("from")
        .map(PathBuf::from)
        .context("缺少 --from 参数")?;
    let to_path = matches
        .get_one::<String>("to")
        .map(PathBuf::from)
        .context("缺少 --to 参数")?;
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);

    // 加载配置
    let mut config = CompareConfig::load(config_path.as_deref()).with_context(|| {
        format!(
            "加载配置失败: {}",
            config_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<默认配置>".to_string())
        )
    })?;

    // 命令行参数覆盖配置
    apply_cli_overrides(&mut config, &matches)?;

    // 初始化日志系统
    init_logging(&config.logging).context("初始化日志系统失败")?;

    info!("源构建产出物: {}", from_path.display());
    info!("目标构建产出物: {}", to_path.display());

    let report_format = config.report.format;
    let app = ComparisonApp::new(config);
    let report = app.run(&from_path, &to_path).await?;

    println!("{}", report.render(report_format)?);

    info!(
        "比对完成: 已关联 {}, 摘要不一致 {}",
        report.associations.len(),
        report.mismatched_count()
    );
    Ok(())
}
