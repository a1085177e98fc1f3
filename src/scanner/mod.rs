//! File scanner for discovering source files and the analyzers that apply.
//!
//! This module walks a project directory, respects the configured excludes
//! and size limits, and maps every file it keeps to a list of registry ids.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Configuration for file scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory or file names to skip (e.g., ["node_modules", ".git"])
    pub excludes: Vec<String>,
    /// Maximum file size in bytes
    pub max_file_size: usize,
    /// Maximum number of files to keep
    pub max_files: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::from(&crate::config::ScannerConfig::default())
    }
}

impl From<&crate::config::ScannerConfig> for ScanConfig {
    fn from(config: &crate::config::ScannerConfig) -> Self {
        Self {
            excludes: config.excludes.clone(),
            max_file_size: config.max_file_size,
            max_files: Some(config.max_files),
        }
    }
}

/// A file selected for analysis.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Relative path from the project root
    pub path: String,
    pub content: String,
    /// Registry ids to run, in detection order
    pub analyzers: Vec<&'static str>,
}

/// Everything [`FileScanner::collect_files`] found.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files: Vec<SourceFile>,
    /// Files that matched but could not be read as text.
    pub failed: usize,
}

/// File scanner for discovering source files.
pub struct FileScanner {
    config: ScanConfig,
    root: PathBuf,
}

impl FileScanner {
    /// Create a new file scanner.
    pub fn new(root: PathBuf, config: ScanConfig) -> Self {
        Self { config, root }
    }

    /// Relative paths of files some analyzer applies to, sorted.
    pub fn scan(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            anyhow::bail!("Not a directory: {}", self.root.display());
        }

        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_excluded(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(max) = self.config.max_files {
                if paths.len() >= max {
                    warn!("Reached file limit of {}, stopping scan", max);
                    break;
                }
            }

            let path = entry.path();
            if !self.within_size_limit(&entry) {
                debug!("Skipping large file: {}", path.display());
                continue;
            }

            if detect_analyzers(path, "").is_empty() {
                continue;
            }

            let rel_path = path.strip_prefix(&self.root).unwrap_or(path);
            paths.push(rel_path.to_string_lossy().replace('\\', "/"));
        }

        debug!("Scanner kept {} file(s) under {}", paths.len(), self.root.display());
        Ok(paths)
    }

    /// Read every scanned file and detect its analyzers.
    pub fn collect_files(&self) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome::default();

        for rel_path in self
            .scan()
            .with_context(|| format!("Failed to scan {}", self.root.display()))?
        {
            let full_path = self.root.join(&rel_path);
            match fs::read_to_string(&full_path) {
                Ok(content) => {
                    let analyzers = detect_analyzers(&full_path, &content);
                    if analyzers.is_empty() {
                        continue;
                    }
                    outcome.files.push(SourceFile {
                        path: rel_path,
                        content,
                        analyzers,
                    });
                }
                Err(e) => {
                    warn!("Failed to read {}: {}", rel_path, e);
                    outcome.failed += 1;
                }
            }
        }

        Ok(outcome)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.config.excludes.iter().any(|pattern| name == pattern.as_str())
    }

    fn within_size_limit(&self, entry: &DirEntry) -> bool {
        entry
            .metadata()
            .map(|m| m.len() <= self.config.max_file_size as u64)
            .unwrap_or(false)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Registry ids that apply to a file, from its path and a light sniff of
/// its content. Pass an empty `content` to use the path alone.
pub fn detect_analyzers(path: &Path, content: &str) -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = Vec::new();
    let mut push = |id: &'static str| {
        if !ids.contains(&id) {
            ids.push(id);
        }
    };

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let in_workflows = path
        .components()
        .any(|c| c.as_os_str() == "workflows" || c.as_os_str() == ".circleci");

    match extension(path).as_deref() {
        Some("js" | "mjs" | "cjs") => {
            push("javascript");
            if imports_react(content) {
                push("react");
            }
        }
        Some("jsx") => {
            push("javascript");
            push("react");
        }
        Some("ts" | "mts" | "cts") => {
            push("typescript");
            if imports_react(content) {
                push("react");
            }
            if name.ends_with(".component.ts") {
                push("angular");
            }
        }
        Some("tsx") => {
            push("typescript");
            push("react");
        }
        Some("py") => push("python"),
        Some("java") => push("java"),
        Some("go") => push("go"),
        Some("rs") => push("rust"),
        Some("php") => push("php"),
        Some("vue") => push("vue"),
        Some("dart") => push("flutter"),
        Some("swift") => push("ios"),
        Some("kt" | "kts") => push("android"),
        Some("tf" | "tfvars") => push("terraform"),
        Some("sh" | "bash") => push("linux"),
        Some("sql") => push("sql"),
        Some("graphql" | "gql") => push("graphql"),
        Some("css" | "scss" | "sass" | "less") => push("css"),
        Some("svg") => push("svg"),
        Some("json") => {
            if name == "vercel.json" {
                push("vercel");
            }
            push("json");
        }
        Some("md" | "mdx") => push("markdown"),
        Some("xml") => push("xml"),
        Some("yml" | "yaml") => {
            if name.starts_with("docker-compose") || name.starts_with("compose.") {
                push("docker");
            }
            if content.contains("apiVersion:") && content.contains("kind:") {
                push("kubernetes");
            }
            if in_workflows || name == ".gitlab-ci.yml" {
                push("cicd");
            }
            if content.contains("AWSTemplateFormatVersion") {
                push("aws");
            }
            push("yaml");
        }
        _ => {}
    }

    if name == "dockerfile" || name.starts_with("dockerfile.") || name.ends_with(".dockerfile") {
        push("docker");
    }
    if name == "jenkinsfile" {
        push("cicd");
    }
    if is_test_file(&name) {
        push("testing");
    }

    ids
}

fn imports_react(content: &str) -> bool {
    content.contains("from 'react'")
        || content.contains("from \"react\"")
        || content.contains("require('react')")
        || content.contains("React.Component")
}

fn is_test_file(name: &str) -> bool {
    name.contains(".test.")
        || name.contains(".spec.")
        || (name.starts_with("test_") && name.ends_with(".py"))
        || name.ends_with("_test.go")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_analyzers(Path::new("src/app.js"), ""), vec!["javascript"]);
        assert_eq!(
            detect_analyzers(Path::new("src/App.tsx"), ""),
            vec!["typescript", "react"]
        );
        assert_eq!(detect_analyzers(Path::new("main.py"), ""), vec!["python"]);
        assert_eq!(detect_analyzers(Path::new("infra/main.tf"), ""), vec!["terraform"]);
        assert!(detect_analyzers(Path::new("LICENSE"), "").is_empty());
    }

    #[test]
    fn test_detect_by_file_name() {
        assert_eq!(detect_analyzers(Path::new("Dockerfile"), ""), vec!["docker"]);
        assert_eq!(
            detect_analyzers(Path::new("docker-compose.yml"), ""),
            vec!["docker", "yaml"]
        );
        assert_eq!(
            detect_analyzers(Path::new(".github/workflows/ci.yml"), ""),
            vec!["cicd", "yaml"]
        );
        assert_eq!(
            detect_analyzers(Path::new("src/sum.test.js"), ""),
            vec!["javascript", "testing"]
        );
        assert_eq!(detect_analyzers(Path::new("vercel.json"), ""), vec!["vercel", "json"]);
    }

    #[test]
    fn test_content_sniffing() {
        let code = "import React, { useState } from 'react';";
        assert_eq!(
            detect_analyzers(Path::new("src/App.js"), code),
            vec!["javascript", "react"]
        );

        let manifest = "apiVersion: apps/v1\nkind: Deployment\n";
        assert_eq!(
            detect_analyzers(Path::new("k8s/app.yaml"), manifest),
            vec!["kubernetes", "yaml"]
        );
    }

    #[test]
    fn test_detection_follows_registry_order() {
        let registry =
            crate::registry::Registry::builtin(&crate::config::AnalyzerConfig::default()).unwrap();
        let order: Vec<&str> = registry.ids().collect();

        let manifest = "apiVersion: v1\nkind: Pod\nAWSTemplateFormatVersion";
        let cases = [
            (".github/workflows/deploy.yml", manifest),
            ("docker-compose.yml", manifest),
            ("src/app.component.ts", "import { useState } from 'react';"),
            ("src/App.test.tsx", ""),
            ("vercel.json", ""),
        ];

        for (path, content) in cases {
            let ids = detect_analyzers(Path::new(path), content);
            let positions: Vec<usize> = ids
                .iter()
                .map(|id| order.iter().position(|o| o == id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}: {:?}", path, ids);
        }

        assert_eq!(
            detect_analyzers(Path::new(".github/workflows/deploy.yml"), manifest),
            vec!["kubernetes", "cicd", "aws", "yaml"]
        );
    }

    #[test]
    fn test_scan_respects_excludes_and_sorts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/b.js", "let b = 1;");
        write(dir.path(), "src/a.py", "a = 1");
        write(dir.path(), "node_modules/lib/index.js", "var x;");
        write(dir.path(), "README", "no extension");

        let scanner = FileScanner::new(dir.path().to_path_buf(), ScanConfig::default());
        let paths = scanner.scan().unwrap();

        assert_eq!(paths, vec!["src/a.py", "src/b.js"]);
    }

    #[test]
    fn test_scan_limits() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.js", "let a;");
        write(dir.path(), "b.js", "let b;");
        write(dir.path(), "big.js", &"x".repeat(2048));

        let config = ScanConfig {
            excludes: Vec::new(),
            max_file_size: 1024,
            max_files: Some(1),
        };
        let paths = FileScanner::new(dir.path().to_path_buf(), config).scan().unwrap();
        assert_eq!(paths, vec!["a.js"]);
    }

    #[test]
    fn test_collect_files_reads_content() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app.js", "import React from 'react';\nvar x = 1;");
        write(dir.path(), "notes.yaml", "key: value\n");

        let outcome = FileScanner::new(dir.path().to_path_buf(), ScanConfig::default())
            .collect_files()
            .unwrap();

        assert_eq!(outcome.failed, 0);
        assert_eq!(outcome.files.len(), 2);
        assert_eq!(outcome.files[0].path, "app.js");
        assert_eq!(outcome.files[0].analyzers, vec!["javascript", "react"]);
        assert_eq!(outcome.files[1].analyzers, vec!["yaml"]);
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let scanner = FileScanner::new(PathBuf::from("/definitely/not/here"), ScanConfig::default());
        assert!(scanner.scan().is_err());
    }
}
