use std::sync::Arc;

use outcome_core::{AssociationType, BuildOutcome, BuildOutcomeAssociator, CompareResult};

/// 按类型与名称关联：两侧产出物同为指定类型且名称相同
pub struct ByTypeAndNameAssociator {
    outcome_type: String,
}

/// 按重命名规则关联：源构建中的 `from_name` 对应目标构建中的 `to_name`
pub struct RenameAssociator {
    outcome_type: String,
    from_name: String,
    to_name: String,
}

type AssociationFn =
    dyn Fn(&BuildOutcome, &BuildOutcome) -> CompareResult<Option<AssociationType>> + Send + Sync;

/// 以闭包实现的关联器
pub struct FnAssociator {
    name: String,
    f: Box<AssociationFn>,
}

impl ByTypeAndNameAssociator {
    pub fn new(outcome_type: impl Into<String>) -> Self {
        Self {
            outcome_type: outcome_type.into(),
        }
    }
}

impl BuildOutcomeAssociator for ByTypeAndNameAssociator {
    fn find_association_type(
        &self,
        from: &BuildOutcome,
        to: &BuildOutcome,
    ) -> CompareResult<Option<AssociationType>> {
        if from.is_type(&self.outcome_type)
            && to.is_type(&self.outcome_type)
            && from.name == to.name
        {
            return Ok(Some(AssociationType::new(self.outcome_type.as_str())));
        }
        Ok(None)
    }

    fn name(&self) -> &str {
        "ByTypeAndName"
    }
}

impl RenameAssociator {
    pub fn new(
        outcome_type: impl Into<String>,
        from_name: impl Into<String>,
        to_name: impl Into<String>,
    ) -> Self {
        Self {
            outcome_type: outcome_type.into(),
            from_name: from_name.into(),
            to_name: to_name.into(),
        }
    }
}

impl BuildOutcomeAssociator for RenameAssociator {
    fn find_association_type(
        &self,
        from: &BuildOutcome,
        to: &BuildOutcome,
    ) -> CompareResult<Option<AssociationType>> {
        if from.is_type(&self.outcome_type)
            && to.is_type(&self.outcome_type)
            && from.name == self.from_name
            && to.name == self.to_name
        {
            return Ok(Some(AssociationType::new(self.outcome_type.as_str())));
        }
        Ok(None)
    }

    fn name(&self) -> &str {
        "Rename"
    }
}

impl FnAssociator {
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&BuildOutcome, &BuildOutcome) -> CompareResult<Option<AssociationType>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            f: Box::new(f),
        }
    }
}

impl BuildOutcomeAssociator for FnAssociator {
    fn find_association_type(
        &self,
        from: &BuildOutcome,
        to: &BuildOutcome,
    ) -> CompareResult<Option<AssociationType>> {
        (self.f)(from, to)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// 组合关联器
///
/// 按构造时给定的顺序依次询问各个关联器，返回第一个非空结果。
/// 所有关联器都没有结果（包括没有任何关联器）时返回 `None`。
/// 关联器返回的错误原样向上传递，其后的关联器不再被调用。
pub struct CompositeAssociator {
    associators: Vec<Arc<dyn BuildOutcomeAssociator>>,
}

impl CompositeAssociator {
    pub fn new(associators: Vec<Arc<dyn BuildOutcomeAssociator>>) -> Self {
        Self { associators }
    }

    pub fn len(&self) -> usize {
        self.associators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.associators.is_empty()
    }

    /// 按求值顺序列出各关联器名称
    pub fn associator_names(&self) -> Vec<&str> {
        self.associators.iter().map(|a| a.name()).collect()
    }
}

impl Default for CompositeAssociator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl BuildOutcomeAssociator for CompositeAssociator {
    fn find_association_type(
        &self,
        from: &BuildOutcome,
        to: &BuildOutcome,
    ) -> CompareResult<Option<AssociationType>> {
        for associator in &self.associators {
            if let Some(association_type) = associator.find_association_type(from, to)? {
                return Ok(Some(association_type));
            }
        }

        Ok(None)
    }

    fn name(&self) -> &str {
        "Composite"
    }
}
