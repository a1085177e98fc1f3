//! Result aggregation and statistics.
//!
//! This module combines the results of several analyzers over the same
//! input, and rolls per-file results up into project-level figures.

use crate::models::{
    AggregatedResult, AnalysisResult, AnalyzedFile, AttributedIssue, IssueSummary, Severity,
    MAX_SCORE,
};
use std::collections::HashMap;

/// Merge results from several analyzers into one response.
///
/// Issues are concatenated in result order and attributed to the analyzer
/// that found them, without deduplication. The score is the minimum of the
/// constituent scores, and 100 when `results` is empty.
pub fn aggregate(results: &[AnalysisResult]) -> AggregatedResult {
    let agents = results.iter().map(|r| r.agent.clone()).collect();

    let issues: Vec<AttributedIssue> = results
        .iter()
        .flat_map(|r| {
            r.issues.iter().map(move |issue| AttributedIssue {
                agent: r.agent.clone(),
                issue: issue.clone(),
            })
        })
        .collect();

    let recommendations = dedup_in_order(results.iter().flat_map(|r| r.recommendations.iter()));
    let score = results.iter().map(|r| r.score).min().unwrap_or(MAX_SCORE);
    let summary = IssueSummary::from_issues(issues.iter().map(|a| &a.issue));

    AggregatedResult {
        agents,
        issues,
        recommendations,
        score,
        summary,
    }
}

/// Project-level figures rolled up from analyzed files.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRollup {
    pub summary: IssueSummary,
    /// Minimum file score, 100 when no file was analyzed.
    pub score: u8,
    pub recommendations: Vec<String>,
}

/// Roll file results up the same way [`aggregate`] merges analyzers.
pub fn aggregate_files(files: &[AnalyzedFile]) -> ProjectRollup {
    let summary =
        IssueSummary::from_issues(files.iter().flat_map(|f| f.result.issues.iter().map(|a| &a.issue)));
    let score = files
        .iter()
        .map(|f| f.result.score)
        .min()
        .unwrap_or(MAX_SCORE);
    let recommendations =
        dedup_in_order(files.iter().flat_map(|f| f.result.recommendations.iter()));

    ProjectRollup {
        summary,
        score,
        recommendations,
    }
}

fn dedup_in_order<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Sort issues by severity (critical first). Stable, so equal severities
/// keep detection order.
pub fn sort_issues_by_severity(issues: &mut [AttributedIssue]) {
    issues.sort_by(|a, b| b.issue.severity.cmp(&a.issue.severity));
}

/// Group issues by severity.
pub fn group_by_severity(issues: &[AttributedIssue]) -> HashMap<Severity, Vec<AttributedIssue>> {
    let mut grouped: HashMap<Severity, Vec<AttributedIssue>> = HashMap::new();

    for issue in issues {
        grouped
            .entry(issue.issue.severity)
            .or_default()
            .push(issue.clone());
    }

    grouped
}

/// The `n` lowest-scoring files that have at least one issue, worst first.
pub fn worst_files(files: &[AnalyzedFile], n: usize) -> Vec<&AnalyzedFile> {
    let mut flagged: Vec<&AnalyzedFile> = files
        .iter()
        .filter(|f| !f.result.issues.is_empty())
        .collect();

    flagged.sort_by_key(|f| (f.result.score, std::cmp::Reverse(f.result.issues.len())));
    flagged.truncate(n);

    flagged
}

/// Generate a text summary of issue statistics.
pub fn generate_summary_text(summary: &IssueSummary) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Total Issues: {}", summary.total));
    lines.push(format!(
        "- {} Critical: {}",
        Severity::Critical.emoji(),
        summary.critical
    ));
    lines.push(format!("- {} High: {}", Severity::High.emoji(), summary.high));
    lines.push(format!(
        "- {} Medium: {}",
        Severity::Medium.emoji(),
        summary.medium
    ));
    lines.push(format!("- {} Low: {}", Severity::Low.emoji(), summary.low));

    if !summary.by_type.is_empty() {
        lines.push(String::new());
        lines.push("By Type:".to_string());

        let mut types: Vec<_> = summary.by_type.iter().collect();
        types.sort_by_key(|(_, count)| std::cmp::Reverse(**count));

        for (kind, count) in types {
            lines.push(format!("- {}: {}", kind, count));
        }
    }

    lines.join("\n")
}
