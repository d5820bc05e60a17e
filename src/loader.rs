use std::path::Path;

use outcome_core::{BuildOutcomeSet, CompareError, CompareResult};
use tracing::debug;

/// 从文件加载一次构建的产出物
///
/// 按扩展名选择格式：`.json` 使用 JSON，`.toml` 使用 TOML。
pub async fn load_outcome_set(path: &Path) -> CompareResult<BuildOutcomeSet> {
    let path_str = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CompareError::outcome_load(&path_str, format!("读取文件失败: {e}")))?;

    let outcome_set: BuildOutcomeSet = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| CompareError::outcome_load(&path_str, format!("JSON解析失败: {e}")))?,
        Some("toml") => toml::from_str(&content)
            .map_err(|e| CompareError::outcome_load(&path_str, format!("TOML解析失败: {e}")))?,
        _ => {
            return Err(CompareError::outcome_load(
                &path_str,
                "不支持的文件格式，仅支持 .json 和 .toml",
            ))
        }
    };

    debug!(
        "已加载构建 {} 的 {} 个产出物: {}",
        outcome_set.build,
        outcome_set.len(),
        path_str
    );

    Ok(outcome_set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_json_outcome_set() {
        let file = write_temp(
            ".json",
            r#"{"build": "ant", "outcomes": [{"name": "app.jar", "outcome_type": "archive", "checksum": "aa"}]}"#,
        );

        let set = load_outcome_set(file.path()).await.unwrap();
        assert_eq!(set.build, "ant");
        assert_eq!(set.outcomes[0].checksum.as_deref(), Some("aa"));
    }

    #[tokio::test]
    async fn test_load_toml_outcome_set() {
        let file = write_temp(
            ".toml",
            r#"build = "gradle"

[[outcomes]]
name = "app.jar"
outcome_type = "archive"
"#,
        );

        let set = load_outcome_set(file.path()).await.unwrap();
        assert_eq!(set.build, "gradle");
        assert_eq!(set.len(), 1);
    }

    #[tokio::test]
    async fn test_load_unsupported_extension() {
        let file = write_temp(".yaml", "build: ant\n");

        let err = load_outcome_set(file.path()).await.unwrap_err();
        assert!(matches!(err, CompareError::OutcomeLoad { .. }));
    }

    #[tokio::test]
    async fn test_load_invalid_json() {
        let file = write_temp(".json", "{not json");

        let err = load_outcome_set(file.path()).await.unwrap_err();
        assert!(matches!(err, CompareError::OutcomeLoad { .. }));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_outcome_set(Path::new("/nonexistent/outcomes.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CompareError::OutcomeLoad { .. }));
    }
}
