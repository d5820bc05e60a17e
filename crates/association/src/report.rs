use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use outcome_core::{CompareError, CompareResult, OutcomeAssociations, ReportFormat};

/// 单个已关联产出物对的报告条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationEntry {
    pub from: String,
    pub to: String,
    pub association_type: String,
    pub checksums_match: Option<bool>,
}

/// 比对报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub from_build: String,
    pub to_build: String,
    pub generated_at: DateTime<Utc>,
    pub associations: Vec<AssociationEntry>,
    pub unassociated_from: Vec<String>,
    pub unassociated_to: Vec<String>,
}

impl ComparisonReport {
    pub fn new(
        from_build: impl Into<String>,
        to_build: impl Into<String>,
        associations: &OutcomeAssociations,
    ) -> Self {
        Self {
            from_build: from_build.into(),
            to_build: to_build.into(),
            generated_at: Utc::now(),
            associations: associations
                .associated
                .iter()
                .map(|pair| AssociationEntry {
                    from: pair.from.name.clone(),
                    to: pair.to.name.clone(),
                    association_type: pair.association_type.to_string(),
                    checksums_match: pair.checksums_match(),
                })
                .collect(),
            unassociated_from: associations
                .unassociated_from
                .iter()
                .map(|o| o.name.clone())
                .collect(),
            unassociated_to: associations
                .unassociated_to
                .iter()
                .map(|o| o.name.clone())
                .collect(),
        }
    }

    /// 不包含未关联产出物的副本
    pub fn without_unassociated(mut self) -> Self {
        self.unassociated_from.clear();
        self.unassociated_to.clear();
        self
    }

    /// 已关联但摘要不一致的产出物对数量
    pub fn mismatched_count(&self) -> usize {
        self.associations
            .iter()
            .filter(|entry| entry.checksums_match == Some(false))
            .count()
    }

    pub fn render(&self, format: ReportFormat) -> CompareResult<String> {
        match format {
            ReportFormat::Json => serde_json::to_string_pretty(self).map_err(CompareError::from),
            ReportFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} -> {}", self.from_build, self.to_build);
        let _ = writeln!(out, "Associated outcomes: {}", self.associations.len());
        for entry in &self.associations {
            let status = match entry.checksums_match {
                Some(true) => "identical",
                Some(false) => "different",
                None => "unknown",
            };
            let _ = writeln!(
                out,
                "  {} -> {} [{}] {}",
                entry.from, entry.to, entry.association_type, status
            );
        }

        if !self.unassociated_from.is_empty() {
            let _ = writeln!(out, "Only in {}: {}", self.from_build, self.unassociated_from.len());
            for name in &self.unassociated_from {
                let _ = writeln!(out, "  {name}");
            }
        }
        if !self.unassociated_to.is_empty() {
            let _ = writeln!(out, "Only in {}: {}", self.to_build, self.unassociated_to.len());
            for name in &self.unassociated_to {
                let _ = writeln!(out, "  {name}");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outcome_core::{AssociatedOutcomes, AssociationType, BuildOutcome};

    fn sample_associations() -> OutcomeAssociations {
        OutcomeAssociations {
            associated: vec![
                AssociatedOutcomes::new(
                    BuildOutcome::new("app.jar", "archive").with_checksum("1"),
                    BuildOutcome::new("app.jar", "archive").with_checksum("1"),
                    AssociationType::new("archive"),
                ),
                AssociatedOutcomes::new(
                    BuildOutcome::new("lib.jar", "archive").with_checksum("1"),
                    BuildOutcome::new("lib.jar", "archive").with_checksum("2"),
                    AssociationType::new("archive"),
                ),
            ],
            unassociated_from: vec![BuildOutcome::new("notes.txt", "file")],
            unassociated_to: vec![],
        }
    }

    #[test]
    fn test_report_from_associations() {
        let report = ComparisonReport::new("ant", "gradle", &sample_associations());

        assert_eq!(report.associations.len(), 2);
        assert_eq!(report.associations[0].checksums_match, Some(true));
        assert_eq!(report.mismatched_count(), 1);
        assert_eq!(report.unassociated_from, vec!["notes.txt"]);
        assert!(report.unassociated_to.is_empty());
    }

    #[test]
    fn test_render_text() {
        let text = ComparisonReport::new("ant", "gradle", &sample_associations())
            .render(ReportFormat::Text)
            .unwrap();

        assert!(text.starts_with("ant -> gradle\n"));
        assert!(text.contains("Associated outcomes: 2"));
        assert!(text.contains("  lib.jar -> lib.jar [archive] different"));
        assert!(text.contains("Only in ant: 1"));
        assert!(!text.contains("Only in gradle"));
    }

    #[test]
    fn test_render_json() {
        let report = ComparisonReport::new("ant", "gradle", &sample_associations());
        let json = report.render(ReportFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["from_build"], "ant");
        assert_eq!(parsed["associations"][1]["checksums_match"], false);
        assert_eq!(parsed["unassociated_from"][0], "notes.txt");
    }

    #[test]
    fn test_without_unassociated() {
        let report =
            ComparisonReport::new("ant", "gradle", &sample_associations()).without_unassociated();
        assert!(report.unassociated_from.is_empty());
        assert_eq!(report.associations.len(), 2);
    }
}
