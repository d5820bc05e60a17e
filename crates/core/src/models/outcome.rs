use serde::{Deserialize, Serialize};

/// 构建产出物
///
/// 表示一次构建所产生的单个结果（归档文件、生成的文件等），是比对的最小单元。
///
/// # 字段说明
///
/// - `name`: 产出物名称，在同一次构建内通常唯一
/// - `outcome_type`: 产出物类型，如 "archive"、"file"
/// - `description`: 人类可读的描述
/// - `task_path`: 产生该产出物的任务路径，如 ":jar"
/// - `archive_path`: 产出物在构建目录中的相对路径
/// - `checksum`: 产出物内容摘要，用于判断两侧是否一致
///
/// # 使用示例
///
/// ```rust
/// use outcome_core::models::BuildOutcome;
///
/// let outcome = BuildOutcome::new("app.jar", "archive")
///     .with_task_path(":jar")
///     .with_checksum("9f2c");
///
/// assert_eq!(outcome.name, "app.jar");
/// assert_eq!(outcome.task_path.as_deref(), Some(":jar"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    pub name: String,
    pub outcome_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub task_path: Option<String>,
    #[serde(default)]
    pub archive_path: Option<String>,
    #[serde(default)]
    pub checksum: Option<String>,
}

impl BuildOutcome {
    pub fn new(name: impl Into<String>, outcome_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome_type: outcome_type.into(),
            description: String::new(),
            task_path: None,
            archive_path: None,
            checksum: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_task_path(mut self, task_path: impl Into<String>) -> Self {
        self.task_path = Some(task_path.into());
        self
    }

    pub fn with_archive_path(mut self, archive_path: impl Into<String>) -> Self {
        self.archive_path = Some(archive_path.into());
        self
    }

    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }

    /// 判断产出物是否属于给定类型
    pub fn is_type(&self, outcome_type: &str) -> bool {
        self.outcome_type == outcome_type
    }
}

/// 一次构建的全部产出物
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcomeSet {
    pub build: String,
    #[serde(default)]
    pub outcomes: Vec<BuildOutcome>,
}

impl BuildOutcomeSet {
    pub fn new(build: impl Into<String>, outcomes: Vec<BuildOutcome>) -> Self {
        Self {
            build: build.into(),
            outcomes,
        }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
