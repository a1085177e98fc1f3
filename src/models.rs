//! Data models shared by analyzers, the registry and reports.
//!
//! Everything here is plain data: analyzers build these values fresh on
//! every call and never mutate them after returning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Highest possible score; also the score of an analyzer with no findings.
pub const MAX_SCORE: u8 = 100;

/// Scores strictly above this pass validation.
pub const PASS_THRESHOLD: u8 = 50;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Low severity - style nits
    Low,
    /// Medium severity - outdated idioms, maintainability
    Medium,
    /// High severity - likely bugs
    High,
    /// Critical severity - security risks
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
            Severity::Critical => write!(f, "Critical"),
        }
    }
}

impl Severity {
    /// Returns an emoji representation of the severity.
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Low => "🟢",
            Severity::Medium => "🟡",
            Severity::High => "🟠",
            Severity::Critical => "🔴",
        }
    }
}

/// Quality grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    /// Below 70
    Pending,
    /// 70 or more
    Bronze,
    /// 80 or more
    Silver,
    /// 90 or more
    Gold,
    /// 95 or more
    Platinum,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            95.. => Grade::Platinum,
            90..=94 => Grade::Gold,
            80..=89 => Grade::Silver,
            70..=79 => Grade::Bronze,
            _ => Grade::Pending,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Grade::Platinum => "💎",
            Grade::Gold => "🥇",
            Grade::Silver => "🥈",
            Grade::Bronze => "🥉",
            Grade::Pending => "⏳",
        }
    }

    /// Badge color, hex without `#`.
    pub fn color(&self) -> &'static str {
        match self {
            Grade::Platinum => "9333ea",
            Grade::Gold => "fbbf24",
            Grade::Silver => "d1d5db",
            Grade::Bronze => "f97316",
            Grade::Pending => "6b7280",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::Platinum => "PLATINUM",
            Grade::Gold => "GOLD",
            Grade::Silver => "SILVER",
            Grade::Bronze => "BRONZE",
            Grade::Pending => "PENDING",
        };
        f.write_str(label)
    }
}

/// Fixed taxonomy of issues the rule-based analyzers can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    VarUsage,
    LooseEquality,
    EvalUsage,
    PrototypeModification,
    SyncInAsync,
    ClassComponent,
}

impl IssueKind {
    /// Wire tag, e.g. `var_usage`.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::VarUsage => "var_usage",
            IssueKind::LooseEquality => "loose_equality",
            IssueKind::EvalUsage => "eval_usage",
            IssueKind::PrototypeModification => "prototype_modification",
            IssueKind::SyncInAsync => "sync_in_async",
            IssueKind::ClassComponent => "class_component",
        }
    }

    /// Severity is a property of the issue type, not of the occurrence.
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::VarUsage => Severity::Medium,
            IssueKind::LooseEquality => Severity::High,
            IssueKind::EvalUsage => Severity::Critical,
            IssueKind::PrototypeModification => Severity::Medium,
            IssueKind::SyncInAsync => Severity::Medium,
            IssueKind::ClassComponent => Severity::High,
        }
    }

    /// Points subtracted from the score for each occurrence.
    ///
    /// Eval and class components alone must push a clean file below the
    /// validation threshold.
    pub fn penalty(&self) -> u8 {
        match self {
            IssueKind::VarUsage => 10,
            IssueKind::LooseEquality => 20,
            IssueKind::EvalUsage => 60,
            IssueKind::PrototypeModification => 10,
            IssueKind::SyncInAsync => 10,
            IssueKind::ClassComponent => 60,
        }
    }

    /// Default human-readable message.
    pub fn message(&self) -> &'static str {
        match self {
            IssueKind::VarUsage => "Use const or let instead of var",
            IssueKind::LooseEquality => {
                "Use strict equality (===) instead of loose equality (==)"
            }
            IssueKind::EvalUsage => "Never use eval(), it's a security risk",
            IssueKind::PrototypeModification => "Avoid modifying built-in prototypes",
            IssueKind::SyncInAsync => {
                "Use async file operations (fs.promises) in async functions"
            }
            IssueKind::ClassComponent => {
                "Prefer functional components with hooks over class components"
            }
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single finding in a piece of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Taxonomy tag.
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Severity, derived from the kind.
    pub severity: Severity,
    /// 1-indexed line of the match, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Explanation shown to the user.
    pub message: String,
}

impl Issue {
    /// Creates an issue of the given kind with its default message.
    pub fn new(kind: IssueKind, line: Option<usize>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            line,
            message: kind.message().to_string(),
        }
    }
}

/// The one classification field an analyzer stamps on its results.
///
/// Serialized flattened, so a JavaScript result carries
/// `"language": "javascript"` and a Docker result `"category": "devops"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Language(String),
    Framework(String),
    Platform(String),
    Category(String),
}

impl Classification {
    /// Field name, e.g. `language`.
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Language(_) => "language",
            Classification::Framework(_) => "framework",
            Classification::Platform(_) => "platform",
            Classification::Category(_) => "category",
        }
    }

    /// Field value, e.g. `javascript`.
    pub fn value(&self) -> &str {
        match self {
            Classification::Language(v)
            | Classification::Framework(v)
            | Classification::Platform(v)
            | Classification::Category(v) => v,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind(), self.value())
    }
}

/// Output of a single `analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Name of the analyzer that produced the result.
    pub agent: String,
    #[serde(flatten)]
    pub classification: Classification,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
    /// 0-100, 100 meaning no findings.
    pub score: u8,
}

impl AnalysisResult {
    /// The fixed answer of analyzers without rules.
    pub fn empty(agent: &str, classification: Classification) -> Self {
        Self {
            agent: agent.to_string(),
            classification,
            issues: Vec::new(),
            recommendations: Vec::new(),
            score: MAX_SCORE,
        }
    }

    /// Whether the score clears the validation threshold.
    pub fn passes(&self) -> bool {
        self.score > PASS_THRESHOLD
    }
}

/// Output of `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub score: u8,
    /// Named checks and whether each passed.
    pub checks: BTreeMap<String, bool>,
}

/// Output of `optimize`. The input code is returned untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    pub code: String,
    pub optimizations: Vec<String>,
    pub improved: bool,
}

/// Files generated by `scaffold`, keyed by relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldResult {
    /// Template the files were rendered from.
    pub template: String,
    /// Name of the analyzer that rendered them.
    pub generator: String,
    pub files: BTreeMap<String, String>,
}

/// A static guidance article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceEntry {
    pub title: String,
    pub content: String,
}

/// An issue tagged with the analyzer that found it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributedIssue {
    pub agent: String,
    #[serde(flatten)]
    pub issue: Issue,
}

/// Summary of issues found during analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    /// Total number of issues.
    pub total: usize,
    /// Number of critical issues.
    pub critical: usize,
    /// Number of high severity issues.
    pub high: usize,
    /// Number of medium severity issues.
    pub medium: usize,
    /// Number of low severity issues.
    pub low: usize,
    /// Issues counted by taxonomy tag.
    pub by_type: BTreeMap<String, usize>,
}

impl IssueSummary {
    /// Creates a summary from a list of issues.
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        let mut summary = Self::default();

        for issue in issues {
            summary.total += 1;
            match issue.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }

            *summary
                .by_type
                .entry(issue.kind.as_str().to_string())
                .or_insert(0) += 1;
        }

        summary
    }
}

/// Combined output of several analyzers over the same input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// Analyzer names, in the order their results were merged.
    pub agents: Vec<String>,
    pub issues: Vec<AttributedIssue>,
    pub recommendations: Vec<String>,
    /// Minimum of the constituent scores.
    pub score: u8,
    pub summary: IssueSummary,
}

/// One file of a project scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedFile {
    /// Path relative to the project root.
    pub path: String,
    /// Registry ids that were run on the file.
    pub analyzers: Vec<String>,
    pub result: AggregatedResult,
}

/// Metadata about a project report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Root directory that was scanned.
    pub root: String,
    /// Date and time of the analysis.
    pub analysis_date: DateTime<Utc>,
    /// Number of files analyzed.
    pub files_analyzed: usize,
    /// Number of files that could not be read.
    pub files_failed: usize,
    /// Total number of issues found.
    pub total_issues: usize,
    /// Duration of the analysis in seconds.
    pub duration_seconds: f64,
}

/// The complete project report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub files: Vec<AnalyzedFile>,
    pub summary: IssueSummary,
    /// Minimum score over all files.
    pub score: u8,
    pub grade: Grade,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::Platinum);
        assert_eq!(Grade::from_score(95), Grade::Platinum);
        assert_eq!(Grade::from_score(94), Grade::Gold);
        assert_eq!(Grade::from_score(90), Grade::Gold);
        assert_eq!(Grade::from_score(80), Grade::Silver);
        assert_eq!(Grade::from_score(79), Grade::Bronze);
        assert_eq!(Grade::from_score(70), Grade::Bronze);
        assert_eq!(Grade::from_score(69), Grade::Pending);
        assert_eq!(Grade::from_score(0), Grade::Pending);
    }

    #[test]
    fn test_grade_serializes_uppercase() {
        assert_eq!(Grade::Gold.to_string(), "GOLD");
        assert_eq!(serde_json::to_value(Grade::Platinum).unwrap(), "PLATINUM");
        assert_eq!(Grade::Silver.emoji(), "🥈");
    }

    #[test]
    fn test_major_kinds_fail_threshold_alone() {
        for kind in [IssueKind::EvalUsage, IssueKind::ClassComponent] {
            assert!(MAX_SCORE - kind.penalty() <= PASS_THRESHOLD);
        }
        assert!(MAX_SCORE - IssueKind::VarUsage.penalty() > PASS_THRESHOLD);
    }

    #[test]
    fn test_issue_serializes_type_tag() {
        let issue = Issue::new(IssueKind::LooseEquality, Some(3));
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["type"], "loose_equality");
        assert_eq!(json["severity"], "high");
        assert_eq!(json["line"], 3);
    }

    #[test]
    fn test_classification_is_flattened() {
        let result = AnalysisResult::empty(
            "Docker Master",
            Classification::Category("devops".to_string()),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["agent"], "Docker Master");
        assert_eq!(json["category"], "devops");
        assert_eq!(json["score"], 100);
        assert!(json["issues"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_issue_summary() {
        let issues = vec![
            Issue::new(IssueKind::EvalUsage, Some(1)),
            Issue::new(IssueKind::VarUsage, Some(2)),
            Issue::new(IssueKind::VarUsage, Some(5)),
        ];

        let summary = IssueSummary::from_issues(&issues);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.medium, 2);
        assert_eq!(summary.by_type.get("var_usage"), Some(&2));
        assert_eq!(summary.by_type.get("eval_usage"), Some(&1));
    }
}
