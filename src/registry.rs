//! Technology id to analyzer dispatch.
//!
//! The registry is built once at startup and then passed by reference.
//! Entries are kept in registration order, which is also the order of
//! every listing and of aggregated results.

use crate::analysis::aggregate;
use crate::analyzer::{javascript, react, stub_profiles, Analyzer, AnalyzerInfo, StubAnalyzer};
use crate::config::AnalyzerConfig;
use crate::error::{MasterError, Result};
use crate::models::AggregatedResult;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Analyzer counts, overall and per catalog group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub groups: usize,
    /// Group to analyzer count, in order of first registration.
    pub by_group: IndexMap<String, usize>,
}

/// Maps technology ids to shared analyzer instances.
#[derive(Default, Clone)]
pub struct Registry {
    entries: IndexMap<String, Arc<dyn Analyzer>>,
}

type Constructor = fn(AnalyzerConfig) -> Result<Arc<dyn Analyzer>>;

fn build_javascript(config: AnalyzerConfig) -> Result<Arc<dyn Analyzer>> {
    Ok(Arc::new(javascript::analyzer(config)?))
}

fn build_react(config: AnalyzerConfig) -> Result<Arc<dyn Analyzer>> {
    Ok(Arc::new(react::analyzer(config)?))
}

/// Rule-based analyzers with the group each one leads.
const RULE_BASED: &[(&str, &str, Constructor)] = &[
    (javascript::ID, "languages", build_javascript),
    (react::ID, "frontend", build_react),
];

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full built-in catalog, every analyzer sharing `config`.
    ///
    /// Fails only if a rule pattern does not compile.
    pub fn builtin(config: &AnalyzerConfig) -> Result<Self> {
        let mut registry = Self::new();

        for profile in stub_profiles() {
            // Rule-based analyzers lead their group.
            for &(id, group, build) in RULE_BASED {
                if group == profile.group && !registry.contains(id) {
                    registry.register(id, build(config.clone())?);
                }
            }
            registry.register(
                profile.id,
                Arc::new(StubAnalyzer::new(profile, config.clone())),
            );
        }

        debug!("Registered {} built-in analyzers", registry.len());
        Ok(registry)
    }

    /// Insert or replace. A replaced id keeps its original position.
    pub fn register(&mut self, id: impl Into<String>, analyzer: Arc<dyn Analyzer>) {
        let id = id.into();
        if self.entries.insert(id.clone(), analyzer).is_some() {
            debug!("Replaced analyzer '{}'", id);
        }
    }

    /// Look up an analyzer by id.
    pub fn resolve(&self, id: &str) -> Result<&Arc<dyn Analyzer>> {
        self.entries
            .get(id)
            .ok_or_else(|| MasterError::UnknownAnalyzer(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Id to specializations, in registration order.
    pub fn list_capabilities(&self) -> IndexMap<String, Vec<String>> {
        self.entries
            .iter()
            .map(|(id, analyzer)| {
                let specs = analyzer
                    .specializations()
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                (id.clone(), specs)
            })
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Listing shapes for every analyzer, in registration order.
    pub fn infos(&self) -> Vec<AnalyzerInfo> {
        self.entries.values().map(|a| a.info()).collect()
    }

    /// Analyzers whose catalog group is `group`.
    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Arc<dyn Analyzer>> {
        self.entries.values().filter(move |a| a.group() == group)
    }

    pub fn stats(&self) -> RegistryStats {
        let mut by_group: IndexMap<String, usize> = IndexMap::new();
        for analyzer in self.entries.values() {
            *by_group.entry(analyzer.group().to_string()).or_insert(0) += 1;
        }

        RegistryStats {
            total: self.entries.len(),
            groups: by_group.len(),
            by_group,
        }
    }

    /// Run `analyze` with each listed analyzer and merge the results.
    ///
    /// Every id is resolved before anything runs, so an unknown id fails
    /// the whole call. Analyzers run once each, in registration order,
    /// whatever order `ids` lists them in.
    pub fn analyze_with<S: AsRef<str>>(&self, ids: &[S], code: &str) -> Result<AggregatedResult> {
        let mut positions = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                self.entries
                    .get_index_of(id)
                    .ok_or_else(|| MasterError::UnknownAnalyzer(id.to_string()))
            })
            .collect::<Result<Vec<usize>>>()?;
        positions.sort_unstable();
        positions.dedup();

        let results: Vec<_> = positions
            .into_iter()
            .filter_map(|i| self.entries.get_index(i))
            .map(|(_, analyzer)| analyzer.analyze(code))
            .collect();
        Ok(aggregate(&results))
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::StubProfile;
    use crate::models::IssueKind;

    fn builtin() -> Registry {
        Registry::builtin(&AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_builtin_catalog() {
        let registry = builtin();
        assert_eq!(registry.len(), 35);

        let ids: Vec<&str> = registry.ids().collect();
        assert_eq!(ids[0], "javascript");
        assert_eq!(ids[1], "python");
        assert!(ids.contains(&"react"));
        assert!(ids.contains(&"security"));
    }

    #[test]
    fn test_group_counts() {
        let registry = builtin();
        let counts = [
            ("languages", 7),
            ("frontend", 3),
            ("mobile", 4),
            ("devops", 5),
            ("cloud", 4),
            ("database", 3),
            ("design", 3),
            ("formats", 4),
            ("quality", 2),
        ];
        for (group, expected) in counts {
            assert_eq!(registry.in_group(group).count(), expected, "{}", group);
        }
    }

    #[test]
    fn test_stats_count_groups() {
        let stats = builtin().stats();
        assert_eq!(stats.total, 35);
        assert_eq!(stats.groups, 9);
        assert_eq!(stats.by_group.get_index(0), Some((&"languages".to_string(), &7)));
        assert_eq!(stats.by_group["quality"], 2);
        assert_eq!(stats.by_group.values().sum::<usize>(), stats.total);

        assert_eq!(Registry::new().stats().groups, 0);
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = builtin();
        assert!(matches!(
            registry.resolve("nonexistent-id"),
            Err(MasterError::UnknownAnalyzer(id)) if id == "nonexistent-id"
        ));
    }

    #[test]
    fn test_capabilities_cover_every_id() {
        let registry = builtin();
        let caps = registry.list_capabilities();
        assert_eq!(caps.len(), registry.len());
        for (id, specs) in &caps {
            assert!(!specs.is_empty(), "{} has no specializations", id);
            assert!(registry.resolve(id).is_ok());
        }
        assert!(caps["docker"].contains(&"Multi-stage Builds".to_string()));
        assert!(caps["typescript"].contains(&"NestJS".to_string()));
    }

    #[test]
    fn test_specializations_are_stable() {
        let registry = builtin();
        for id in registry.ids() {
            let analyzer = registry.resolve(id).unwrap();
            assert_eq!(analyzer.specializations(), analyzer.specializations());
        }
    }

    #[test]
    fn test_register_replaces_in_place() {
        static CUSTOM: StubProfile = StubProfile {
            id: "python",
            name: "Custom Python",
            group: "languages",
            classification: (crate::models::Classification::Language, "python"),
            specializations: &["Custom"],
            best_practices: &[],
            template: crate::analyzer::Template {
                id: "basic",
                files: &[("main.py", "# {{name}}\n")],
            },
            guide: crate::analyzer::Guide {
                topic: "best-practices",
                title: "Custom",
                content: "",
            },
            optimizations: &[],
        };

        let mut registry = builtin();
        let position = registry.ids().position(|id| id == "python");
        registry.register(
            "python",
            Arc::new(StubAnalyzer::new(&CUSTOM, AnalyzerConfig::default())),
        );

        assert_eq!(registry.len(), 35);
        assert_eq!(registry.ids().position(|id| id == "python"), position);
        assert_eq!(registry.resolve("python").unwrap().name(), "Custom Python");
    }

    #[test]
    fn test_analyze_with_aggregates() {
        let registry = builtin();
        let code = "var x = 1;\nclass App extends React.Component {}";

        let agg = registry
            .analyze_with(&["javascript", "react", "docker"], code)
            .unwrap();

        assert_eq!(agg.agents, vec!["JavaScript Master", "React Master", "Docker Master"]);
        assert_eq!(agg.issues.len(), 2);
        assert_eq!(agg.issues[0].issue.kind, IssueKind::VarUsage);
        assert_eq!(agg.issues[1].agent, "React Master");

        let js = registry.resolve("javascript").unwrap().analyze(code).score;
        let react = registry.resolve("react").unwrap().analyze(code).score;
        assert_eq!(agg.score, js.min(react));
    }

    #[test]
    fn test_analyze_with_unknown_id_fails() {
        let registry = builtin();
        assert!(registry.analyze_with(&["javascript", "cobol"], "").is_err());
    }

    #[test]
    fn test_analyze_with_follows_registration_order() {
        let registry = builtin();
        let code = "class App extends React.Component {}\nvar x = 1;";

        let agg = registry.analyze_with(&["react", "javascript"], code).unwrap();
        assert_eq!(agg.agents, vec!["JavaScript Master", "React Master"]);
        let kinds: Vec<IssueKind> = agg.issues.iter().map(|a| a.issue.kind).collect();
        assert_eq!(kinds, vec![IssueKind::VarUsage, IssueKind::ClassComponent]);

        let mixed = registry
            .analyze_with(&["cicd", "kubernetes", "yaml"], "kind: Deployment")
            .unwrap();
        assert_eq!(
            mixed.agents,
            vec!["Kubernetes Master", "CI/CD Master", "YAML Master"]
        );
    }

    #[test]
    fn test_analyze_with_runs_repeated_id_once() {
        let registry = builtin();
        let agg = registry
            .analyze_with(&["javascript", "javascript"], "var x = 1;")
            .unwrap();
        assert_eq!(agg.agents, vec!["JavaScript Master"]);
        assert_eq!(agg.issues.len(), 1);
    }

    #[test]
    fn test_registry_is_shareable_across_threads() {
        let registry = Arc::new(builtin());
        let handles: Vec<_> = ["javascript", "react", "python"]
            .into_iter()
            .map(|id| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.resolve(id).map(|a| a.analyze("").score))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), 100);
        }
    }
}
