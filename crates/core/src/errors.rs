use thiserror::Error;

/// 产出物比对错误类型定义
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("配置错误: {0}")]
    Configuration(String),

    #[error("产出物文件加载失败: {path} - {message}")]
    OutcomeLoad { path: String, message: String },

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("关联器 {associator} 执行失败: {message}")]
    Association { associator: String, message: String },

    #[error("内部错误: {0}")]
    Internal(String),
}

impl CompareError {
    pub fn association(associator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Association {
            associator: associator.into(),
            message: message.into(),
        }
    }

    pub fn outcome_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutcomeLoad {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CompareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// 统一的Result类型
pub type Result<T> = std::result::Result<T, CompareError>;
