//! Markdown and JSON report generation.
//!
//! This module assembles a project [`Report`] from analyzed files and
//! renders it for humans (Markdown) or tools (JSON).

use crate::analysis::{aggregate_files, sort_issues_by_severity, worst_files};
use crate::config::ReportConfig;
use crate::models::{
    AnalyzedFile, AttributedIssue, Grade, IssueSummary, Report, ReportMetadata, Severity,
    PASS_THRESHOLD,
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

/// Assemble a report, rolling file results up into project figures.
pub fn build_report(
    root: &str,
    files: Vec<AnalyzedFile>,
    files_failed: usize,
    duration_seconds: f64,
) -> Report {
    let rollup = aggregate_files(&files);

    let metadata = ReportMetadata {
        root: root.to_string(),
        analysis_date: Utc::now(),
        files_analyzed: files.len(),
        files_failed,
        total_issues: rollup.summary.total,
        duration_seconds,
    };

    Report {
        metadata,
        files,
        summary: rollup.summary,
        score: rollup.score,
        grade: Grade::from_score(rollup.score),
        recommendations: rollup.recommendations,
    }
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &Report, config: &ReportConfig) -> String {
    let mut output = String::new();

    output.push_str("# MasterCheck Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata, report.score));
    output.push_str(&generate_summary_section(
        &report.summary,
        &report.files,
        config.worst_files,
    ));
    output.push_str(&generate_issues_section(&report.files));

    if config.include_recommendations {
        output.push_str(&generate_recommendations_section(&report.recommendations));
    }

    output.push_str(&generate_footer());

    output
}

fn generate_metadata_section(metadata: &ReportMetadata, score: u8) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Project:** `{}`\n", metadata.root));
    section.push_str(&format!(
        "- **Analysis Date:** {}\n",
        metadata.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Files Analyzed:** {}\n", metadata.files_analyzed));
    if metadata.files_failed > 0 {
        section.push_str(&format!("- **Files Failed:** {}\n", metadata.files_failed));
    }
    section.push_str(&format!("- **Total Issues:** {}\n", metadata.total_issues));

    let verdict = if score > PASS_THRESHOLD { "pass" } else { "fail" };
    section.push_str(&format!("- **Score:** {}/100 ({})\n", score, verdict));
    let grade = Grade::from_score(score);
    section.push_str(&format!("- **Grade:** {} {}\n", grade, grade.emoji()));
    section.push_str(&format!(
        "- **Analysis Duration:** {:.1}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

fn generate_summary_section(summary: &IssueSummary, files: &[AnalyzedFile], worst: usize) -> String {
    let mut section = String::new();

    section.push_str("## Summary\n\n");

    section.push_str("### Issue Severity Breakdown\n\n");
    section.push_str(&format!(
        "| {} Critical | {} High | {} Medium | {} Low | **Total** |\n",
        Severity::Critical.emoji(),
        Severity::High.emoji(),
        Severity::Medium.emoji(),
        Severity::Low.emoji(),
    ));
    section.push_str("|:---:|:---:|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| {} | {} | {} | {} | **{}** |\n\n",
        summary.critical, summary.high, summary.medium, summary.low, summary.total
    ));

    if !summary.by_type.is_empty() {
        section.push_str("### Issues by Type\n\n");
        section.push_str("| Type | Count |\n");
        section.push_str("|:---|:---:|\n");

        let mut types: Vec<_> = summary.by_type.iter().collect();
        types.sort_by_key(|(_, count)| std::cmp::Reverse(**count));

        for (kind, count) in types {
            section.push_str(&format!("| `{}` | {} |\n", kind, count));
        }
        section.push('\n');
    }

    let lowest = worst_files(files, worst);
    if !lowest.is_empty() {
        section.push_str("### Lowest Scoring Files\n\n");
        section.push_str("| File | Score | Issues |\n");
        section.push_str("|:---|:---:|:---:|\n");

        for file in lowest {
            section.push_str(&format!(
                "| `{}` | {} | {} |\n",
                file.path,
                file.result.score,
                file.result.issues.len()
            ));
        }
        section.push('\n');
    }

    section
}

fn generate_issues_section(files: &[AnalyzedFile]) -> String {
    let mut section = String::new();

    section.push_str("## Issues by File\n\n");

    let files_with_issues: Vec<_> = files
        .iter()
        .filter(|f| !f.result.issues.is_empty())
        .collect();

    if files_with_issues.is_empty() {
        section.push_str("No issues were found in the analyzed files. 🎉\n\n");
        return section;
    }

    for file in files_with_issues {
        section.push_str(&generate_file_issues_section(file));
    }

    section
}

fn generate_file_issues_section(file: &AnalyzedFile) -> String {
    let mut section = String::new();

    section.push_str(&format!("### {}\n\n", file.path));
    section.push_str(&format!(
        "*Analyzers: {} | Score: {} | Issues: {}*\n\n",
        file.analyzers.join(", "),
        file.result.score,
        file.result.issues.len()
    ));

    let mut issues = file.result.issues.clone();
    sort_issues_by_severity(&mut issues);

    for issue in &issues {
        section.push_str(&generate_issue_line(issue));
    }
    section.push('\n');

    section
}

fn generate_issue_line(attributed: &AttributedIssue) -> String {
    let issue = &attributed.issue;
    let location = issue
        .line
        .map(|line| format!("line {}", line))
        .unwrap_or_else(|| "file".to_string());

    format!(
        "- {} **{}** `{}` ({}, {}): {}\n",
        issue.severity.emoji(),
        issue.severity.to_string().to_uppercase(),
        issue.kind,
        location,
        attributed.agent,
        issue.message
    )
}

fn generate_recommendations_section(recommendations: &[String]) -> String {
    if recommendations.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Recommendations\n\n");
    for (i, rec) in recommendations.iter().enumerate() {
        section.push_str(&format!("{}. {}\n", i + 1, rec));
    }
    section.push('\n');

    section
}

fn generate_footer() -> String {
    format!(
        "---\n\n*Report generated by MasterCheck v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Output format of a saved report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
}

/// Render and write the report.
pub fn write_report(
    report: &Report,
    path: &Path,
    format: ReportFormat,
    config: &ReportConfig,
) -> Result<()> {
    let content = match format {
        ReportFormat::Markdown => generate_markdown_report(report, config),
        ReportFormat::Json => generate_json_report(report)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate;
    use crate::models::{AnalysisResult, Classification, Issue, IssueKind};

    fn analyzed(path: &str, kinds: &[IssueKind], score: u8) -> AnalyzedFile {
        let result = AnalysisResult {
            agent: "JavaScript Master".to_string(),
            classification: Classification::Language("javascript".to_string()),
            issues: kinds
                .iter()
                .enumerate()
                .map(|(i, k)| Issue::new(*k, Some(i + 1)))
                .collect(),
            recommendations: vec!["Use strict equality".to_string()],
            score,
        };

        AnalyzedFile {
            path: path.to_string(),
            analyzers: vec!["javascript".to_string()],
            result: aggregate(&[result]),
        }
    }

    fn create_test_report() -> Report {
        build_report(
            "./demo",
            vec![
                analyzed("src/index.js", &[IssueKind::EvalUsage, IssueKind::VarUsage], 30),
                analyzed("src/clean.js", &[], 100),
            ],
            1,
            2.5,
        )
    }

    #[test]
    fn test_build_report_rolls_up() {
        let report = create_test_report();
        assert_eq!(report.score, 30);
        assert_eq!(report.metadata.files_analyzed, 2);
        assert_eq!(report.metadata.files_failed, 1);
        assert_eq!(report.metadata.total_issues, 2);
        assert_eq!(report.summary.critical, 1);
    }

    #[test]
    fn test_generate_markdown_report() {
        let report = create_test_report();
        let markdown = generate_markdown_report(&report, &ReportConfig::default());

        assert!(markdown.contains("# MasterCheck Report"));
        assert!(markdown.contains("## Metadata"));
        assert!(markdown.contains("Files Failed:"));
        assert!(markdown.contains("30/100 (fail)"));
        assert!(markdown.contains("**Grade:** PENDING ⏳"));
        assert!(markdown.contains("## Issues by File"));
        assert!(markdown.contains("### src/index.js"));
        assert!(!markdown.contains("### src/clean.js"));
        assert!(markdown.contains("`eval_usage`"));
        assert!(markdown.contains("## Recommendations"));
    }

    #[test]
    fn test_critical_issues_listed_first() {
        let file = analyzed("a.js", &[IssueKind::VarUsage, IssueKind::EvalUsage], 30);
        let section = generate_file_issues_section(&file);
        let eval = section.find("eval_usage").unwrap();
        let var = section.find("var_usage").unwrap();
        assert!(eval < var);
    }

    #[test]
    fn test_recommendations_can_be_disabled() {
        let config = ReportConfig {
            include_recommendations: false,
            ..ReportConfig::default()
        };
        let markdown = generate_markdown_report(&create_test_report(), &config);
        assert!(!markdown.contains("## Recommendations"));
    }

    #[test]
    fn test_clean_report() {
        let report = build_report(".", vec![analyzed("a.js", &[], 100)], 0, 0.1);
        let markdown = generate_markdown_report(&report, &ReportConfig::default());
        assert!(markdown.contains("No issues were found"));
        assert!(markdown.contains("100/100 (pass)"));
        assert!(markdown.contains("**Grade:** PLATINUM 💎"));
        assert_eq!(report.grade, Grade::Platinum);
    }

    #[test]
    fn test_generate_json_report() {
        let report = create_test_report();
        let json = generate_json_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["score"], 30);
        assert_eq!(value["grade"], "PENDING");
        assert_eq!(value["files"][0]["result"]["issues"][0]["type"], "eval_usage");
        assert_eq!(value["files"][0]["result"]["issues"][0]["agent"], "JavaScript Master");
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out/report.json");

        write_report(
            &create_test_report(),
            &path,
            ReportFormat::Json,
            &ReportConfig::default(),
        )
        .unwrap();

        assert!(std::fs::read_to_string(path).unwrap().contains("\"metadata\""));
    }
}
