//! React analyzer.

use super::rule_based::Definition;
use super::rules::RuleSpec;
use super::{Guide, RuleBasedAnalyzer, Template};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::models::{Classification, IssueKind};

pub const ID: &str = "react";

/// Build the React analyzer.
pub fn analyzer(config: AnalyzerConfig) -> Result<RuleBasedAnalyzer> {
    RuleBasedAnalyzer::new(&DEFINITION, config)
}

static DEFINITION: Definition = Definition {
    id: ID,
    name: "React Master",
    group: "frontend",
    classification: (Classification::Framework, "react"),
    specializations: &[
        "React 18+",
        "Hooks",
        "Next.js",
        "Redux",
        "Server Components",
        "TypeScript Integration",
        "Performance Optimization",
        "Testing Library",
    ],
    best_practices: &[
        "Use functional components with hooks",
        "Leverage React 18 features (Suspense, Transitions)",
        "Implement proper state management",
        "Optimize with React.memo and useMemo",
        "Write tests with Testing Library",
    ],
    rules: RULES,
    templates: TEMPLATES,
    guides: GUIDES,
    general_guide: Guide {
        topic: "best-practices",
        title: "React Best Practices",
        content: "Use hooks, functional components, TypeScript, and proper state management",
    },
    standing_optimizations: &[
        "Use React.memo for expensive components",
        "Implement code splitting with React.lazy",
    ],
    recommendations: &[],
    suggestions: &[],
};

const RULES: &[RuleSpec] = &[RuleSpec {
    kind: IssueKind::ClassComponent,
    pattern: r"class\s+[A-Za-z_$][\w$]*\s+extends\s+React\.(?:Pure)?Component\b",
    requires: None,
    fix: "Rewrite class components as function components using hooks",
    rewrite: Some("Convert class components to function components with hooks"),
}];

const TEMPLATES: &[Template] = &[
    Template {
        id: "app",
        files: &[
            (
                "App.tsx",
                r#"import React, { useState } from 'react';

function App() {
  const [count, setCount] = useState(0);

  return (
    <div>
      <h1>{{name}}</h1>
      <p>Count: {count}</p>
      <button onClick={() => setCount(count + 1)}>Increment</button>
    </div>
  );
}

export default App;
"#,
            ),
            (
                "package.json",
                r#"{
  "name": "{{name}}",
  "version": "1.0.0",
  "private": true,
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  }
}
"#,
            ),
        ],
    },
    Template {
        id: "next",
        files: &[
            (
                "app/page.tsx",
                r#"export default function Home() {
  return (
    <main>
      <h1>{{name}}</h1>
    </main>
  );
}
"#,
            ),
            (
                "app/layout.tsx",
                r#"export const metadata = { title: '{{name}}' };

export default function RootLayout({ children }: { children: React.ReactNode }) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  );
}
"#,
            ),
            (
                "package.json",
                r#"{
  "name": "{{name}}",
  "version": "1.0.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start"
  },
  "dependencies": {
    "next": "^14.0.0",
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  }
}
"#,
            ),
        ],
    },
];

const GUIDES: &[Guide] = &[
    Guide {
        topic: "hooks",
        title: "React Hooks",
        content: r#"# Hooks

- Call hooks at the top level of function components, never in loops or conditions.
- Keep `useEffect` dependency arrays complete.
- Extract reusable stateful logic into custom `use*` hooks.

```tsx
function Counter() {
  const [count, setCount] = useState(0);
  useEffect(() => {
    document.title = `Count: ${count}`;
  }, [count]);
  return <button onClick={() => setCount(c => c + 1)}>{count}</button>;
}
```
"#,
    },
    Guide {
        topic: "performance",
        title: "React Performance",
        content: r#"# Performance

- Wrap expensive pure components in `React.memo`.
- Memoize derived values with `useMemo` and callbacks with `useCallback`.
- Split routes with `React.lazy` and `Suspense`.
"#,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Analyzer, ScaffoldOptions, ValidationInput};

    fn master() -> RuleBasedAnalyzer {
        analyzer(AnalyzerConfig::default()).unwrap()
    }

    const CLASS_COMPONENT: &str = r#"
class MyComponent extends React.Component {
  render() {
    return <div>Hello</div>;
  }
}
"#;

    #[test]
    fn test_identity() {
        let react = master();
        assert_eq!(react.name(), "React Master");
        for tag in ["Hooks", "Next.js", "Redux"] {
            assert!(react.specializations().contains(&tag));
        }
    }

    #[test]
    fn test_detects_class_components() {
        let result = master().analyze(CLASS_COMPONENT);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::ClassComponent);
        assert_eq!(result.issues[0].line, Some(2));
        assert_eq!(result.classification, Classification::Framework("react".into()));
        assert!(!result.passes());
    }

    #[test]
    fn test_pure_component_is_a_class_component() {
        let code = "export class List extends React.PureComponent {}";
        assert_eq!(master().analyze(code).issues.len(), 1);
    }

    #[test]
    fn test_validate_functional_component() {
        let code = r#"
import React, { useState } from 'react';

function MyComponent() {
  const [count, setCount] = useState(0);
  return <div>{count}</div>;
}
"#;
        let result = master().validate(ValidationInput::Source(code)).unwrap();
        assert!(result.valid);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_validate_class_component_fails() {
        let result = master()
            .validate(ValidationInput::Source(CLASS_COMPONENT))
            .unwrap();
        assert!(!result.valid);
    }

    #[test]
    fn test_empty_code() {
        let result = master().analyze("");
        assert!(result.issues.is_empty());
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_optimize_always_suggests() {
        let code = "function Component() { return <div>Test</div>; }";
        let result = master().optimize(code);
        assert!(result.improved);
        assert_eq!(result.code, code);

        let class_result = master().optimize(CLASS_COMPONENT);
        assert_eq!(
            class_result.optimizations[0],
            "Convert class components to function components with hooks"
        );
    }

    #[test]
    fn test_scaffold_app() {
        let result = master()
            .scaffold("app", &ScaffoldOptions::named("test-app"))
            .unwrap();
        assert!(result.files["App.tsx"].contains("useState"));
        assert!(result.files["App.tsx"].contains("<h1>test-app</h1>"));
        assert!(result.files.contains_key("package.json"));
    }

    #[test]
    fn test_guidance() {
        let guide = master().guidance("hooks").unwrap();
        assert!(guide.title.contains("React"));
    }
}
