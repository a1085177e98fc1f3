//! Text rules and the scoring policy shared by rule-based analyzers.

use crate::error::Result;
use crate::models::{Issue, IssueKind, MAX_SCORE};
use regex::Regex;

/// Static description of a rule, compiled into a [`Rule`].
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub kind: IssueKind,
    /// Matched against each line.
    pub pattern: &'static str,
    /// When set, the rule only applies if the whole source matches it.
    pub requires: Option<&'static str>,
    /// Recommendation added once when the rule fires.
    pub fix: &'static str,
    /// Rewrite reported by `optimize` when the rule fires.
    pub rewrite: Option<&'static str>,
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: IssueKind,
    pattern: Regex,
    requires: Option<Regex>,
    pub fix: &'static str,
    pub rewrite: Option<&'static str>,
}

impl Rule {
    fn compile(spec: &RuleSpec) -> Result<Self> {
        Ok(Self {
            kind: spec.kind,
            pattern: Regex::new(spec.pattern)?,
            requires: spec.requires.map(Regex::new).transpose()?,
            fix: spec.fix,
            rewrite: spec.rewrite,
        })
    }

    fn applies_to(&self, code: &str) -> bool {
        self.requires.as_ref().map_or(true, |gate| gate.is_match(code))
    }
}

/// An ordered rule table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs.iter().map(Rule::compile).collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// One issue per matching line per rule, ordered by line and then by
    /// rule table order.
    pub fn scan(&self, code: &str) -> Vec<Issue> {
        let active: Vec<&Rule> = self.rules.iter().filter(|r| r.applies_to(code)).collect();
        if active.is_empty() {
            return Vec::new();
        }

        let mut issues = Vec::new();
        for (idx, line) in code.lines().enumerate() {
            for rule in &active {
                if rule.pattern.is_match(line) {
                    issues.push(Issue::new(rule.kind, Some(idx + 1)));
                }
            }
        }

        issues
    }

    /// Rules that produced at least one of `issues`, in table order.
    pub fn fired<'a>(&'a self, issues: &[Issue]) -> impl Iterator<Item = &'a Rule> + 'a {
        let kinds: Vec<IssueKind> = issues.iter().map(|i| i.kind).collect();
        self.rules.iter().filter(move |r| kinds.contains(&r.kind))
    }
}

/// A whole-source heuristic that fires when its pattern matches more
/// than `more_than` times.
#[derive(Debug, Clone, Copy)]
pub struct HintSpec {
    pub pattern: &'static str,
    pub more_than: usize,
    pub text: &'static str,
}

/// A compiled [`HintSpec`].
#[derive(Debug, Clone)]
pub struct Hint {
    pattern: Regex,
    more_than: usize,
    pub text: &'static str,
}

impl Hint {
    pub fn compile_all(specs: &[HintSpec]) -> Result<Vec<Self>> {
        specs
            .iter()
            .map(|spec| {
                Ok(Self {
                    pattern: Regex::new(spec.pattern)?,
                    more_than: spec.more_than,
                    text: spec.text,
                })
            })
            .collect()
    }

    pub fn fires(&self, code: &str) -> bool {
        self.pattern.find_iter(code).take(self.more_than + 1).count() > self.more_than
    }
}

/// Start at 100 and subtract each issue's penalty, bottoming out at 0.
///
/// Adding issues can only lower the score.
pub fn score(issues: &[Issue]) -> u8 {
    let penalty = issues
        .iter()
        .map(|i| u32::from(i.kind.penalty()))
        .fold(0u32, |acc, p| acc.saturating_add(p));
    u32::from(MAX_SCORE).saturating_sub(penalty) as u8
}
