//! Analyzer driven by a text rule table.

use super::rules::{self, Hint, HintSpec, RuleSet, RuleSpec};
use super::{
    select_guide, select_template, trace_call, Analyzer, Guide, ScaffoldOptions, Template,
    ValidationInput,
};
use crate::config::AnalyzerConfig;
use crate::error::{MasterError, Result};
use crate::models::{
    AnalysisResult, Classification, GuidanceEntry, Optimization, ScaffoldResult, Validation,
};
use std::collections::BTreeMap;

/// Static tables describing one rule-based analyzer.
pub struct Definition {
    pub id: &'static str,
    pub name: &'static str,
    pub group: &'static str,
    pub classification: (fn(String) -> Classification, &'static str),
    pub specializations: &'static [&'static str],
    pub best_practices: &'static [&'static str],
    pub rules: &'static [RuleSpec],
    /// The first template is the lenient-mode fallback.
    pub templates: &'static [Template],
    pub guides: &'static [Guide],
    pub general_guide: Guide,
    /// Reported by every `optimize` call.
    pub standing_optimizations: &'static [&'static str],
    /// Extra recommendations derived from the whole source.
    pub recommendations: &'static [HintSpec],
    /// Extra rewrites derived from the whole source.
    pub suggestions: &'static [HintSpec],
}

/// Analyzer that scans source text against a fixed rule table.
pub struct RuleBasedAnalyzer {
    def: &'static Definition,
    classification: Classification,
    rules: RuleSet,
    recommendations: Vec<Hint>,
    suggestions: Vec<Hint>,
    config: AnalyzerConfig,
}

impl RuleBasedAnalyzer {
    /// Compile the definition's rules. Fails only on a bad pattern.
    pub fn new(def: &'static Definition, config: AnalyzerConfig) -> Result<Self> {
        let (make, value) = def.classification;
        Ok(Self {
            def,
            classification: make(value.to_string()),
            rules: RuleSet::compile(def.rules)?,
            recommendations: Hint::compile_all(def.recommendations)?,
            suggestions: Hint::compile_all(def.suggestions)?,
            config,
        })
    }

    fn source_of<'a>(&self, input: ValidationInput<'a>) -> Result<&'a str> {
        match input {
            ValidationInput::Source(code) => Ok(code),
            ValidationInput::Params(params) => params
                .get("code")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    MasterError::InvalidArgument(format!(
                        "{} validates source text or an object with a 'code' string",
                        self.def.name
                    ))
                }),
        }
    }
}

impl Analyzer for RuleBasedAnalyzer {
    fn id(&self) -> &str {
        self.def.id
    }

    fn name(&self) -> &str {
        self.def.name
    }

    fn group(&self) -> &str {
        self.def.group
    }

    fn classification(&self) -> &Classification {
        &self.classification
    }

    fn specializations(&self) -> &[&'static str] {
        self.def.specializations
    }

    fn best_practices(&self) -> &[&'static str] {
        self.def.best_practices
    }

    fn templates(&self) -> Vec<&str> {
        self.def.templates.iter().map(|t| t.id).collect()
    }

    fn topics(&self) -> Vec<&str> {
        std::iter::once(self.def.general_guide.topic)
            .chain(self.def.guides.iter().map(|g| g.topic))
            .collect()
    }

    fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn analyze(&self, code: &str) -> AnalysisResult {
        let issues = self.rules.scan(code);
        let score = rules::score(&issues);

        let mut recommendations: Vec<String> = Vec::new();
        let fixes = self.rules.fired(&issues).map(|r| r.fix);
        let hints = self
            .recommendations
            .iter()
            .filter(|h| h.fires(code))
            .map(|h| h.text);
        for rec in fixes.chain(hints) {
            if !recommendations.iter().any(|r| r == rec) {
                recommendations.push(rec.to_string());
            }
        }

        trace_call(
            &self.config,
            self.def.name,
            "analyze",
            &format!("{} issue(s), score {}", issues.len(), score),
        );

        AnalysisResult {
            agent: self.def.name.to_string(),
            classification: self.classification.clone(),
            issues,
            recommendations,
            score,
        }
    }

    fn validate(&self, input: ValidationInput<'_>) -> Result<Validation> {
        let code = self.source_of(input)?;
        let result = self.analyze(code);

        let mut checks = BTreeMap::new();
        for rule in self.rules.rules() {
            let clean = !result.issues.iter().any(|i| i.kind == rule.kind);
            checks.insert(format!("no_{}", rule.kind), clean);
        }

        Ok(Validation {
            valid: result.passes(),
            score: result.score,
            checks,
        })
    }

    fn optimize(&self, code: &str) -> Optimization {
        let issues = self.rules.scan(code);

        let mut optimizations: Vec<String> = Vec::new();
        let rewrites = self.rules.fired(&issues).filter_map(|r| r.rewrite);
        for item in rewrites
            .chain(self.suggestions.iter().filter(|h| h.fires(code)).map(|h| h.text))
            .chain(self.def.standing_optimizations.iter().copied())
        {
            if !optimizations.iter().any(|o| o == item) {
                optimizations.push(item.to_string());
            }
        }

        trace_call(
            &self.config,
            self.def.name,
            "optimize",
            &format!("{} suggestion(s)", optimizations.len()),
        );

        Optimization {
            code: code.to_string(),
            improved: !optimizations.is_empty(),
            optimizations,
        }
    }

    fn scaffold(&self, template: &str, options: &ScaffoldOptions) -> Result<ScaffoldResult> {
        let name = options.require_name()?;
        let selected = select_template(self.def.name, self.def.templates, template, &self.config)?;
        trace_call(&self.config, self.def.name, "scaffold", selected.id);
        Ok(selected.render(self.def.name, name))
    }

    fn guidance(&self, topic: &str) -> Result<GuidanceEntry> {
        select_guide(
            self.def.name,
            self.def.guides,
            &self.def.general_guide,
            topic,
            &self.config,
        )
    }
}
