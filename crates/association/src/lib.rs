//! 产出物关联
//!
//! 提供组合关联器及具体的关联器实现，以及基于关联器的产出物配对和比对报告。

pub mod associators;
pub mod pairing;
pub mod report;

#[cfg(test)]
pub mod test_utils;

pub use associators::*;
pub use pairing::associate_outcomes;
pub use report::{AssociationEntry, ComparisonReport};
