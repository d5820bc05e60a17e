//! # 数据模型
//!
//! 定义产出物比对所需的核心数据结构。
//!
//! ## 核心模型
//!
//! ### BuildOutcome - 构建产出物
//! 一次构建产生的单个结果，比对的最小单元。
//!
//! ### BuildOutcomeSet - 构建产出物集合
//! 一次构建的全部产出物，由外部以 JSON 或 TOML 文件提供。
//!
//! ### AssociationType - 关联类型
//! 关联器对两个产出物关系的判断结果，不透明的字符串标识。
//!
//! ### OutcomeAssociations - 配对结果
//! 源构建与目标构建产出物的配对情况，包括已配对和未配对的产出物。

pub mod association;
pub mod outcome;

pub use association::{AssociatedOutcomes, AssociationType, OutcomeAssociations};
pub use outcome::{BuildOutcome, BuildOutcomeSet};
