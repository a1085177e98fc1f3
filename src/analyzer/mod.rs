//! The analyzer contract and its implementations.
//!
//! Every technology domain is an [`Analyzer`]. Most are [`StubAnalyzer`]s
//! that answer with fixed data; JavaScript and React are
//! [`RuleBasedAnalyzer`]s that scan source text against a rule table.

mod catalog;
pub mod javascript;
pub mod react;
mod rule_based;
pub mod rules;
mod stub;

pub use catalog::{stub_profiles, StubProfile};
pub use rule_based::{Definition, RuleBasedAnalyzer};
pub use stub::StubAnalyzer;

use crate::config::AnalyzerConfig;
use crate::error::{MasterError, Result};
use crate::models::{
    AnalysisResult, Classification, GuidanceEntry, Issue, Optimization, ScaffoldResult, Validation,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input accepted by [`Analyzer::validate`].
///
/// Rule-based analyzers validate source text; stubs validate only that a
/// structured parameters object was supplied.
#[derive(Debug, Clone, Copy)]
pub enum ValidationInput<'a> {
    Source(&'a str),
    Params(&'a serde_json::Value),
}

/// Options for [`Analyzer::scaffold`]. `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldOptions {
    #[serde(default)]
    pub name: Option<String>,
    /// Template-specific options, ignored by the built-in templates.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ScaffoldOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            extra: BTreeMap::new(),
        }
    }

    /// The project name, or `InvalidArgument` when missing or blank.
    pub fn require_name(&self) -> Result<&str> {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(MasterError::InvalidArgument(
                "scaffold options must include a non-empty 'name'".to_string(),
            )),
        }
    }
}

/// Listing shape for an analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    pub group: String,
    #[serde(flatten)]
    pub classification: Classification,
    pub specializations: Vec<String>,
    pub best_practices: Vec<String>,
    pub templates: Vec<String>,
    pub topics: Vec<String>,
}

/// Contract implemented by every technology analyzer.
///
/// All operations are pure with respect to the analyzer: they read the
/// input and the analyzer's immutable tables and build a fresh result.
pub trait Analyzer: Send + Sync {
    /// Registry id, e.g. `javascript`.
    fn id(&self) -> &str;

    /// Display name, e.g. `JavaScript Master`.
    fn name(&self) -> &str;

    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Catalog group, e.g. `languages` or `cloud`.
    fn group(&self) -> &str;

    fn classification(&self) -> &Classification;

    /// Fixed capability tags, in declaration order.
    fn specializations(&self) -> &[&'static str];

    fn best_practices(&self) -> &[&'static str] {
        &[]
    }

    /// Template ids accepted by [`Analyzer::scaffold`].
    fn templates(&self) -> Vec<&str>;

    /// Topic ids answered by [`Analyzer::guidance`].
    fn topics(&self) -> Vec<&str>;

    fn config(&self) -> &AnalyzerConfig;

    /// Scan `code` and report findings. Never fails.
    fn analyze(&self, code: &str) -> AnalysisResult;

    fn validate(&self, input: ValidationInput<'_>) -> Result<Validation>;

    /// List rewrites that would improve `code` without changing it.
    fn optimize(&self, code: &str) -> Optimization;

    fn scaffold(&self, template: &str, options: &ScaffoldOptions) -> Result<ScaffoldResult>;

    fn guidance(&self, topic: &str) -> Result<GuidanceEntry>;

    /// Just the issues of [`Analyzer::analyze`].
    fn detect_issues(&self, code: &str) -> Vec<Issue> {
        self.analyze(code).issues
    }

    fn info(&self) -> AnalyzerInfo {
        AnalyzerInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
            version: self.version().to_string(),
            group: self.group().to_string(),
            classification: self.classification().clone(),
            specializations: to_strings(self.specializations()),
            best_practices: to_strings(self.best_practices()),
            templates: self.templates().into_iter().map(String::from).collect(),
            topics: self.topics().into_iter().map(String::from).collect(),
        }
    }
}

/// A scaffold template: files whose contents may reference `{{name}}`.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub id: &'static str,
    pub files: &'static [(&'static str, &'static str)],
}

impl Template {
    /// Render every file with the project name interpolated.
    pub fn render(&self, generator: &str, name: &str) -> ScaffoldResult {
        let files = self
            .files
            .iter()
            .map(|(path, body)| (path.to_string(), body.replace("{{name}}", name)))
            .collect();

        ScaffoldResult {
            template: self.id.to_string(),
            generator: generator.to_string(),
            files,
        }
    }
}

/// A guidance article keyed by topic.
#[derive(Debug, Clone, Copy)]
pub struct Guide {
    pub topic: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

impl Guide {
    pub fn entry(&self) -> GuidanceEntry {
        GuidanceEntry {
            title: self.title.to_string(),
            content: self.content.to_string(),
        }
    }
}

/// Pick a template, honoring strict mode. The first template is the
/// fallback in lenient mode.
pub(crate) fn select_template<'t>(
    agent: &str,
    templates: &'t [Template],
    requested: &str,
    config: &AnalyzerConfig,
) -> Result<&'t Template> {
    if let Some(template) = templates.iter().find(|t| t.id == requested) {
        return Ok(template);
    }

    match templates.first() {
        Some(fallback) if !config.strict_mode => {
            tracing::debug!(
                "{}: unknown template '{}', using '{}'",
                agent,
                requested,
                fallback.id
            );
            Ok(fallback)
        }
        _ => Err(MasterError::UnknownTemplate {
            agent: agent.to_string(),
            template: requested.to_string(),
        }),
    }
}

/// Look up a guide, honoring strict mode. `general` answers unknown
/// topics in lenient mode.
pub(crate) fn select_guide(
    agent: &str,
    guides: &[Guide],
    general: &Guide,
    requested: &str,
    config: &AnalyzerConfig,
) -> Result<GuidanceEntry> {
    if requested == general.topic {
        return Ok(general.entry());
    }

    if let Some(guide) = guides.iter().find(|g| g.topic == requested) {
        return Ok(guide.entry());
    }

    if config.strict_mode {
        Err(MasterError::UnknownTopic {
            agent: agent.to_string(),
            topic: requested.to_string(),
        })
    } else {
        Ok(general.entry())
    }
}

/// Log a call at info when the analyzer is verbose, debug otherwise.
pub(crate) fn trace_call(config: &AnalyzerConfig, agent: &str, operation: &str, detail: &str) {
    if config.verbose {
        tracing::info!("[{}] {} {}", agent, operation, detail);
    } else {
        tracing::debug!("[{}] {} {}", agent, operation, detail);
    }
}

fn to_strings(items: &[&'static str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
