use crate::{
    models::{AssociationType, BuildOutcome},
    CompareResult,
};

/// 产出物关联器接口
///
/// 给定源构建和目标构建中的两个产出物，判断它们之间的关联类型。
/// 返回 `Ok(None)` 表示两者没有关联，这不是错误。
pub trait BuildOutcomeAssociator: Send + Sync {
    /// 查找两个产出物之间的关联类型
    fn find_association_type(
        &self,
        from: &BuildOutcome,
        to: &BuildOutcome,
    ) -> CompareResult<Option<AssociationType>>;

    /// 获取关联器名称
    fn name(&self) -> &str;
}
