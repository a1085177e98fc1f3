//! Analyzers that answer with fixed data.
//!
//! A stub's `analyze` always reports no issues and a full score. That
//! means "no rules yet", not "clean code"; callers aggregating results
//! should not read a stub's 100 as a verdict.

use super::catalog::StubProfile;
use super::{
    select_guide, select_template, trace_call, Analyzer, ScaffoldOptions, ValidationInput,
};
use crate::config::AnalyzerConfig;
use crate::error::{MasterError, Result};
use crate::models::{
    AnalysisResult, Classification, GuidanceEntry, Optimization, ScaffoldResult, Validation,
    MAX_SCORE,
};
use std::collections::BTreeMap;

/// Placeholder analyzer for a technology domain without rules.
pub struct StubAnalyzer {
    profile: &'static StubProfile,
    classification: Classification,
    config: AnalyzerConfig,
}

impl StubAnalyzer {
    pub fn new(profile: &'static StubProfile, config: AnalyzerConfig) -> Self {
        let (make, value) = profile.classification;
        Self {
            profile,
            classification: make(value.to_string()),
            config,
        }
    }
}

impl Analyzer for StubAnalyzer {
    fn id(&self) -> &str {
        self.profile.id
    }

    fn name(&self) -> &str {
        self.profile.name
    }

    fn group(&self) -> &str {
        self.profile.group
    }

    fn classification(&self) -> &Classification {
        &self.classification
    }

    fn specializations(&self) -> &[&'static str] {
        self.profile.specializations
    }

    fn best_practices(&self) -> &[&'static str] {
        self.profile.best_practices
    }

    fn templates(&self) -> Vec<&str> {
        vec![self.profile.template.id]
    }

    fn topics(&self) -> Vec<&str> {
        vec![self.profile.guide.topic]
    }

    fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    fn analyze(&self, code: &str) -> AnalysisResult {
        trace_call(
            &self.config,
            self.profile.name,
            "analyze",
            &format!("{} byte(s), no rules", code.len()),
        );
        AnalysisResult::empty(self.profile.name, self.classification.clone())
    }

    fn validate(&self, input: ValidationInput<'_>) -> Result<Validation> {
        match input {
            ValidationInput::Params(serde_json::Value::Object(_)) => {
                let mut checks = BTreeMap::new();
                checks.insert("params_object".to_string(), true);
                Ok(Validation {
                    valid: true,
                    score: MAX_SCORE,
                    checks,
                })
            }
            _ => Err(MasterError::InvalidArgument(format!(
                "{} expects a parameters object",
                self.profile.name
            ))),
        }
    }

    fn optimize(&self, code: &str) -> Optimization {
        let optimizations: Vec<String> = self
            .profile
            .optimizations
            .iter()
            .map(|s| s.to_string())
            .collect();

        Optimization {
            code: code.to_string(),
            improved: !optimizations.is_empty(),
            optimizations,
        }
    }

    fn scaffold(&self, template: &str, options: &ScaffoldOptions) -> Result<ScaffoldResult> {
        let name = options.require_name()?;
        let selected = select_template(
            self.profile.name,
            std::slice::from_ref(&self.profile.template),
            template,
            &self.config,
        )?;
        trace_call(&self.config, self.profile.name, "scaffold", selected.id);
        Ok(selected.render(self.profile.name, name))
    }

    fn guidance(&self, topic: &str) -> Result<GuidanceEntry> {
        select_guide(
            self.profile.name,
            &[],
            &self.profile.guide,
            topic,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::stub_profiles;
    use serde_json::json;

    fn stub(id: &str) -> StubAnalyzer {
        let profile = stub_profiles()
            .iter()
            .find(|p| p.id == id)
            .expect("profile exists");
        StubAnalyzer::new(profile, AnalyzerConfig::default())
    }

    #[test]
    fn test_every_stub_returns_fixed_result() {
        let inputs = ["", "print('x')", "}{ not even code", "var x = eval(y) == 1;"];
        for profile in stub_profiles() {
            let analyzer = StubAnalyzer::new(profile, AnalyzerConfig::default());
            for input in inputs {
                let result = analyzer.analyze(input);
                assert!(result.issues.is_empty(), "{} reported issues", profile.id);
                assert_eq!(result.score, 100, "{} score", profile.id);
                assert_eq!(result.agent, profile.name);
            }
            assert!(analyzer.detect_issues("eval(x)").is_empty());
        }
    }

    #[test]
    fn test_classification_fields() {
        assert_eq!(
            stub("python").analyze("print('x')").classification,
            Classification::Language("python".into())
        );
        assert_eq!(
            stub("docker").analyze("FROM node:18").classification,
            Classification::Category("devops".into())
        );
        assert_eq!(
            stub("aws").analyze("{}").classification,
            Classification::Category("cloud".into())
        );
        assert_eq!(
            stub("testing").analyze("test()").classification,
            Classification::Category("quality".into())
        );
    }

    #[test]
    fn test_validate_requires_object() {
        let python = stub("python");
        assert!(python.validate(ValidationInput::Params(&json!({}))).unwrap().valid);
        assert!(python
            .validate(ValidationInput::Params(&json!({ "test": true })))
            .unwrap()
            .valid);

        for bad in [json!(null), json!("invalid"), json!([1, 2]), json!(42)] {
            assert!(matches!(
                python.validate(ValidationInput::Params(&bad)),
                Err(MasterError::InvalidArgument(_))
            ));
        }
        assert!(python.validate(ValidationInput::Source("x = 1")).is_err());
    }

    #[test]
    fn test_specializations() {
        assert!(stub("python").specializations().contains(&"FastAPI"));
        assert!(stub("python").specializations().contains(&"Django"));
        assert!(stub("aws").specializations().contains(&"Lambda"));
        assert!(stub("security").specializations().contains(&"OWASP"));
    }

    #[test]
    fn test_scaffold_uses_profile_template() {
        let aws = stub("aws");
        let result = aws.scaffold("lambda", &ScaffoldOptions::named("orders")).unwrap();
        assert!(result.files.contains_key("lambda.js"));
        assert!(result.files.contains_key("template.yaml"));

        assert!(matches!(
            aws.scaffold("express", &ScaffoldOptions::named("orders")),
            Err(MasterError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn test_guidance_policy() {
        let css = stub("css");
        assert_eq!(css.guidance("best-practices").unwrap().title, "CSS Best Practices");
        assert!(css.guidance("grid").is_err());

        let lenient = StubAnalyzer::new(
            stub_profiles().iter().find(|p| p.id == "css").unwrap(),
            AnalyzerConfig {
                strict_mode: false,
                ..AnalyzerConfig::default()
            },
        );
        assert_eq!(lenient.guidance("grid").unwrap().title, "CSS Best Practices");
    }

    #[test]
    fn test_optimize_lists_profile_hints() {
        let result = stub("docker").optimize("FROM node");
        assert!(result.improved);
        assert_eq!(result.code, "FROM node");
        assert!(!result.optimizations.is_empty());

        let json = stub("json").optimize("{}");
        assert!(json.improved);
        assert_eq!(json.optimizations, vec!["Minimize whitespace"]);

        for profile in stub_profiles() {
            let result = stub(profile.id).optimize("");
            assert_eq!(result.improved, !result.optimizations.is_empty(), "{}", profile.id);
        }
    }
}
