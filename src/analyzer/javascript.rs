//! JavaScript / Node.js analyzer.

use super::rule_based::Definition;
use super::rules::{HintSpec, RuleSpec};
use super::{Guide, RuleBasedAnalyzer, Template};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::models::{Classification, IssueKind};

pub const ID: &str = "javascript";

/// Build the JavaScript analyzer.
pub fn analyzer(config: AnalyzerConfig) -> Result<RuleBasedAnalyzer> {
    RuleBasedAnalyzer::new(&DEFINITION, config)
}

static DEFINITION: Definition = Definition {
    id: ID,
    name: "JavaScript Master",
    group: "languages",
    classification: (Classification::Language, "javascript"),
    specializations: &[
        "ES6+",
        "Node.js",
        "Express",
        "Async/Await",
        "NPM & Package Management",
        "Jest Testing",
        "ESLint & Prettier",
        "Module Systems (ESM/CJS)",
    ],
    best_practices: &[
        "Use const and let, avoid var",
        "Prefer arrow functions for callbacks",
        "Use async/await over callbacks",
        "Implement proper error handling",
        "Use ES6 modules (import/export)",
    ],
    rules: RULES,
    templates: TEMPLATES,
    guides: GUIDES,
    general_guide: Guide {
        topic: "best-practices",
        title: "JavaScript Best Practices",
        content: "Use modern ES6+ syntax, async/await, and proper error handling",
    },
    standing_optimizations: &[],
    recommendations: &[HintSpec {
        pattern: r"function\s*\(",
        more_than: 3,
        text: "Consider using async/await to avoid callback hell",
    }],
    suggestions: &[HintSpec {
        pattern: r#"["'`]\s*\+|\+\s*["'`]"#,
        more_than: 0,
        text: "Use template literals instead of string concatenation",
    }],
};

const RULES: &[RuleSpec] = &[
    RuleSpec {
        kind: IssueKind::VarUsage,
        pattern: r"var\s",
        requires: None,
        fix: "Declare bindings with const, or let when reassigned",
        rewrite: Some("Convert var to const/let"),
    },
    RuleSpec {
        kind: IssueKind::LooseEquality,
        pattern: r"(?:^|[^=!])(?:==|!=)(?:[^=]|$)",
        requires: None,
        fix: "Compare with === and !== to avoid type coercion",
        rewrite: Some("Replace == / != with === / !=="),
    },
    RuleSpec {
        kind: IssueKind::EvalUsage,
        pattern: r"eval\s*\(",
        requires: None,
        fix: "Remove eval(); parse data with JSON.parse or use a lookup table",
        rewrite: None,
    },
    RuleSpec {
        kind: IssueKind::PrototypeModification,
        pattern: r"\.prototype\.",
        requires: None,
        fix: "Use helper functions or subclasses instead of patching prototypes",
        rewrite: None,
    },
    RuleSpec {
        kind: IssueKind::SyncInAsync,
        pattern: r"\b(?:readFileSync|writeFileSync)\s*\(",
        requires: Some(r"\basync\b"),
        fix: "Use fs.promises inside async code",
        rewrite: Some("Replace fs.*Sync calls with fs.promises"),
    },
];

const TEMPLATES: &[Template] = &[
    Template {
        id: "express",
        files: EXPRESS_FILES,
    },
    Template {
        id: "api",
        files: EXPRESS_FILES,
    },
    Template {
        id: "library",
        files: &[(
            "index.js",
            r#"/**
 * {{name}}
 */

class Library {
  constructor(config = {}) {
    this.config = config;
  }
}

module.exports = Library;
"#,
        )],
    },
    Template {
        id: "cli",
        files: &[(
            "cli.js",
            r#"#!/usr/bin/env node

/**
 * {{name}} command line entry point
 */

const args = process.argv.slice(2);

console.log('{{name}} started with args:', args);
"#,
        )],
    },
];

const EXPRESS_FILES: &[(&str, &str)] = &[
    (
        "index.js",
        r#"/**
 * Express Server - {{name}}
 */

const express = require('express');
const app = express();

app.use(express.json());
app.use(express.urlencoded({ extended: true }));

app.get('/', (req, res) => {
  res.json({ message: 'Welcome to {{name}}' });
});

app.get('/api/health', (req, res) => {
  res.json({ status: 'healthy', timestamp: new Date().toISOString() });
});

app.use((err, req, res, next) => {
  console.error(err.stack);
  res.status(500).json({ error: 'Something went wrong!' });
});

const PORT = process.env.PORT || 3000;
app.listen(PORT, () => {
  console.log(`Server running on port ${PORT}`);
});

module.exports = app;
"#,
    ),
    (
        "package.json",
        r#"{
  "name": "{{name}}",
  "version": "1.0.0",
  "main": "index.js",
  "scripts": {
    "start": "node index.js",
    "dev": "nodemon index.js",
    "test": "jest",
    "lint": "eslint ."
  },
  "license": "MIT",
  "dependencies": {
    "express": "^4.18.2"
  },
  "devDependencies": {
    "eslint": "^8.50.0",
    "jest": "^29.7.0",
    "nodemon": "^3.0.1",
    "supertest": "^6.3.3"
  }
}
"#,
    ),
    (
        "tests/index.test.js",
        r#"const request = require('supertest');
const app = require('../index');

describe('{{name}}', () => {
  test('GET /api/health reports healthy', async () => {
    const response = await request(app).get('/api/health');
    expect(response.status).toBe(200);
    expect(response.body.status).toBe('healthy');
  });
});
"#,
    ),
];

const GUIDES: &[Guide] = &[
    Guide {
        topic: "modern-js",
        title: "Modern JavaScript Best Practices",
        content: r#"# Modern JavaScript (ES6+)

## Variable Declaration
```javascript
// const for bindings that never change
const API_URL = 'https://api.example.com';

// let for bindings that do
let count = 0;
count++;

// never var
```

## Arrow Functions
```javascript
const double = x => x * 2;
const add = (a, b) => a + b;
```

## Destructuring
```javascript
const { name, age } = user;
const [first, second] = items;
```
"#,
    },
    Guide {
        topic: "async",
        title: "Async/Await Best Practices",
        content: r#"# Async/Await

```javascript
async function fetchData() {
  try {
    const response = await fetch('https://api.example.com/data');
    return await response.json();
  } catch (error) {
    console.error('Error fetching data:', error);
    throw error;
  }
}

// independent requests in parallel
const [users, posts] = await Promise.all([fetchUsers(), fetchPosts()]);
```
"#,
    },
    Guide {
        topic: "error-handling",
        title: "Error Handling",
        content: r#"# Error Handling

```javascript
class ValidationError extends Error {
  constructor(message) {
    super(message);
    this.name = 'ValidationError';
  }
}

app.use((err, req, res, next) => {
  res.status(err.status || 500).json({ error: err.message });
});
```
"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Analyzer, ScaffoldOptions, ValidationInput};
    use crate::error::MasterError;

    fn master() -> RuleBasedAnalyzer {
        analyzer(AnalyzerConfig::default()).unwrap()
    }

    fn kinds(code: &str) -> Vec<IssueKind> {
        master().analyze(code).issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_identity() {
        let js = master();
        assert_eq!(js.name(), "JavaScript Master");
        assert_eq!(js.version(), "1.0.0");
        assert!(js.specializations().contains(&"Node.js"));
        assert!(js.specializations().contains(&"Express"));
        assert!(js.specializations().contains(&"ES6+"));
    }

    #[test]
    fn test_detects_var_usage() {
        let result = master().analyze("var x = 10;");
        assert_eq!(result.issues[0].kind, IssueKind::VarUsage);
        assert_eq!(result.issues[0].line, Some(1));
        assert!(result.score < 100);
        assert_eq!(result.classification, Classification::Language("javascript".into()));
    }

    #[test]
    fn test_loose_equality() {
        assert!(kinds("if (x == 10) { }").contains(&IssueKind::LooseEquality));
        assert!(kinds("if (x != null) { }").contains(&IssueKind::LooseEquality));
        assert!(kinds("if (x == y)").contains(&IssueKind::LooseEquality));
        assert!(kinds("if (x === 10 && y !== 2) { }").is_empty());
        assert!(kinds("const f = (a) => a;").is_empty());
    }

    #[test]
    fn test_strict_and_loose_on_same_line() {
        let found = kinds("if (a === b || c == d) {}");
        assert_eq!(found, vec![IssueKind::LooseEquality]);
    }

    #[test]
    fn test_eval_usage_fails_validation() {
        let js = master();
        let issues = js.detect_issues("eval(userInput);");
        assert!(issues.iter().any(|i| i.kind == IssueKind::EvalUsage));

        let validation = js.validate(ValidationInput::Source("eval(userInput);")).unwrap();
        assert!(!validation.valid);
        assert!(validation.score <= 50);
        assert!(!validation.checks["no_eval_usage"]);
    }

    #[test]
    fn test_sync_in_async_needs_async_context() {
        assert!(kinds("const data = fs.readFileSync(path);").is_empty());
        assert_eq!(
            kinds("async function load() {\n  return fs.readFileSync(path);\n}"),
            vec![IssueKind::SyncInAsync]
        );
    }

    #[test]
    fn test_clean_code_scores_full() {
        let result = master().analyze("const greet = (name) => `Hello, ${name}`;");
        assert!(result.issues.is_empty());
        assert_eq!(result.score, 100);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_issue_order_is_line_then_rule() {
        let code = "var a = b == c;\neval(a);";
        assert_eq!(
            kinds(code),
            vec![IssueKind::VarUsage, IssueKind::LooseEquality, IssueKind::EvalUsage]
        );
    }

    #[test]
    fn test_callback_hell_recommendation() {
        let code = "a(function() { b(function() { c(function() { d(function() {}); }); }); });";
        let result = master().analyze(code);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("callback hell")));
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_validate_modern_code() {
        let code = "const greet = (name) => {\n  return `Hello, ${name}`;\n};\n";
        let result = master().validate(ValidationInput::Source(code)).unwrap();
        assert!(result.valid);
        assert!(result.score > 50);
    }

    #[test]
    fn test_validate_threshold_is_exclusive() {
        let at_threshold = master()
            .validate(ValidationInput::Source("a == b\nc == d\nvar x = 1;"))
            .unwrap();
        assert_eq!(at_threshold.score, 50);
        assert!(!at_threshold.valid);
        assert!(!at_threshold.checks["no_loose_equality"]);
        assert!(!at_threshold.checks["no_var_usage"]);

        let above = master()
            .validate(ValidationInput::Source("a == b\nc == d"))
            .unwrap();
        assert_eq!(above.score, 60);
        assert!(above.valid);
        assert!(above.checks["no_var_usage"]);
    }

    #[test]
    fn test_validate_params_object_with_code() {
        let params = serde_json::json!({ "code": "var a = 1;" });
        let result = master().validate(ValidationInput::Params(&params)).unwrap();
        assert!(result.valid);
        assert_eq!(result.score, 90);

        let bad = serde_json::json!({ "file": "a.js" });
        assert!(matches!(
            master().validate(ValidationInput::Params(&bad)),
            Err(MasterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_optimize_does_not_modify_input() {
        let code = "var name = \"test\" + suffix;";
        let result = master().optimize(code);
        assert_eq!(result.code, code);
        assert!(result.improved);
        assert!(result.optimizations.contains(&"Convert var to const/let".to_string()));
        assert!(result
            .optimizations
            .contains(&"Use template literals instead of string concatenation".to_string()));
    }

    #[test]
    fn test_optimize_clean_code_not_improved() {
        let result = master().optimize("const x = 1;");
        assert!(!result.improved);
        assert!(result.optimizations.is_empty());
    }

    #[test]
    fn test_scaffold_express() {
        let result = master()
            .scaffold("express", &ScaffoldOptions::named("test-api"))
            .unwrap();
        assert!(result.files["index.js"].contains("express"));
        assert!(result.files["package.json"].contains("\"name\": \"test-api\""));
        assert!(result.files.contains_key("tests/index.test.js"));
    }

    #[test]
    fn test_scaffold_errors() {
        let js = master();
        assert!(matches!(
            js.scaffold("rails", &ScaffoldOptions::named("x")),
            Err(MasterError::UnknownTemplate { .. })
        ));
        assert!(matches!(
            js.scaffold("express", &ScaffoldOptions::default()),
            Err(MasterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_guidance() {
        let js = master();
        let guide = js.guidance("modern-js").unwrap();
        assert!(guide.content.contains("const"));
        assert!(matches!(
            js.guidance("cobol"),
            Err(MasterError::UnknownTopic { .. })
        ));

        let lenient = analyzer(AnalyzerConfig {
            strict_mode: false,
            ..AnalyzerConfig::default()
        })
        .unwrap();
        assert_eq!(
            lenient.guidance("cobol").unwrap().title,
            "JavaScript Best Practices"
        );
    }
}
