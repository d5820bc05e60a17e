use std::fmt;

use serde::{Deserialize, Serialize};

use super::BuildOutcome;

/// 关联类型
///
/// 描述两个产出物之间关系的不透明标识，由关联器给出。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociationType(String);

impl AssociationType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssociationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssociationType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// 已关联的一对产出物
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedOutcomes {
    pub from: BuildOutcome,
    pub to: BuildOutcome,
    pub association_type: AssociationType,
}

impl AssociatedOutcomes {
    pub fn new(from: BuildOutcome, to: BuildOutcome, association_type: AssociationType) -> Self {
        Self {
            from,
            to,
            association_type,
        }
    }

    /// 两侧都有摘要时返回是否一致，否则无法判断
    pub fn checksums_match(&self) -> Option<bool> {
        match (&self.from.checksum, &self.to.checksum) {
            (Some(a), Some(b)) => Some(a == b),
            _ => None,
        }
    }
}

/// 两次构建产出物的配对结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeAssociations {
    pub associated: Vec<AssociatedOutcomes>,
    pub unassociated_from: Vec<BuildOutcome>,
    pub unassociated_to: Vec<BuildOutcome>,
}

impl OutcomeAssociations {
    pub fn is_complete(&self) -> bool {
        self.unassociated_from.is_empty() && self.unassociated_to.is_empty()
    }
}
