use tracing::{debug, info};

use outcome_core::{
    AssociatedOutcomes, BuildOutcome, BuildOutcomeAssociator, CompareResult, OutcomeAssociations,
};

/// 将源构建与目标构建的产出物配对
///
/// 按源产出物的顺序，依次在尚未配对的目标产出物中查找第一个存在关联的产出物，
/// 配对成功后该目标产出物不再参与后续匹配。两侧未配对的产出物保持输入顺序。
/// 关联器的错误原样返回。
pub fn associate_outcomes(
    associator: &dyn BuildOutcomeAssociator,
    from: &[BuildOutcome],
    to: &[BuildOutcome],
) -> CompareResult<OutcomeAssociations> {
    let mut remaining: Vec<&BuildOutcome> = to.iter().collect();
    let mut associations = OutcomeAssociations::default();

    for from_outcome in from {
        let mut matched = None;
        for (index, to_outcome) in remaining.iter().enumerate() {
            if let Some(association_type) =
                associator.find_association_type(from_outcome, to_outcome)?
            {
                matched = Some((index, association_type));
                break;
            }
        }

        match matched {
            Some((index, association_type)) => {
                let to_outcome = remaining.remove(index);
                debug!(
                    "关联器 {} 将 {} 与 {} 关联为 {}",
                    associator.name(),
                    from_outcome.name,
                    to_outcome.name,
                    association_type
                );
                associations.associated.push(AssociatedOutcomes::new(
                    from_outcome.clone(),
                    to_outcome.clone(),
                    association_type,
                ));
            }
            None => {
                debug!("源产出物 {} 在目标构建中没有对应项", from_outcome.name);
                associations.unassociated_from.push(from_outcome.clone());
            }
        }
    }

    associations.unassociated_to = remaining.into_iter().cloned().collect();

    info!(
        "产出物配对完成: 已关联 {}, 源构建未关联 {}, 目标构建未关联 {}",
        associations.associated.len(),
        associations.unassociated_from.len(),
        associations.unassociated_to.len()
    );

    Ok(associations)
}
