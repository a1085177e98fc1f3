//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.mastercheck.toml` files, and defines the options every analyzer
//! is constructed with.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Default configuration file name.
pub const CONFIG_FILE: &str = ".mastercheck.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Options passed to every analyzer.
    #[serde(default)]
    pub analyzers: AnalyzerConfig,

    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default report path for `scan`.
    #[serde(default = "default_output")]
    pub output: String,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,

    /// Number of files analyzed in parallel.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            verbose: false,
            concurrency: default_concurrency(),
        }
    }
}

fn default_output() -> String {
    "mastercheck_report.md".to_string()
}

fn default_concurrency() -> usize {
    4
}

/// Options every analyzer is constructed with.
///
/// `verbose` and `strict_mode` are recognized; any other key is kept
/// verbatim in `extra` so callers can round-trip their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Log every analyzer call at info level.
    #[serde(default)]
    pub verbose: bool,

    /// Fail on unknown guidance topics and scaffold templates instead of
    /// falling back to the analyzer's defaults.
    #[serde(default = "default_true", alias = "strictMode")]
    pub strict_mode: bool,

    /// Unrecognized options, passed through unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            strict_mode: true,
            extra: BTreeMap::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Build from a JSON options object as received at the invocation
    /// boundary. Missing keys take their defaults.
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Look up a pass-through option.
    pub fn extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

/// File scanner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Maximum files to analyze.
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Directory and file names to skip.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,

    /// Maximum file size in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            excludes: default_excludes(),
            max_file_size: default_max_file_size(),
        }
    }
}

fn default_max_files() -> usize {
    500
}

fn default_excludes() -> Vec<String> {
    vec![
        ".git",
        "target",
        "node_modules",
        "vendor",
        "dist",
        "build",
        "coverage",
        "__pycache__",
        ".venv",
        "venv",
        ".next",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_max_file_size() -> usize {
    512 * 1024
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the recommendations section.
    #[serde(default = "default_true")]
    pub include_recommendations: bool,

    /// How many files to list under "lowest scores".
    #[serde(default = "default_worst_files")]
    pub worst_files: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_recommendations: true,
            worst_files: default_worst_files(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_worst_files() -> usize {
    5
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load configuration from a project directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Resolve configuration in priority order: an explicit file, the
    /// scanned project's directory, the current directory, then defaults.
    ///
    /// An explicit file must load. A broken file found by lookup is logged
    /// and skipped.
    pub fn resolve(explicit: Option<&Path>, project_dir: Option<&Path>) -> Result<Self> {
        Self::resolve_in(explicit, project_dir, Path::new("."))
    }

    fn resolve_in(explicit: Option<&Path>, project_dir: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            info!("Loading config from: {}", path.display());
            return Self::load(path);
        }

        for dir in project_dir.into_iter().chain(std::iter::once(cwd)) {
            match Self::load_from_dir(dir) {
                Ok(Some(config)) => {
                    info!("Loaded {} from {}", CONFIG_FILE, dir.display());
                    return Ok(config);
                }
                Ok(None) => {}
                Err(e) => warn!("Ignoring {} in {}: {:#}", CONFIG_FILE, dir.display(), e),
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence, but only when explicitly given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if args.verbose {
            self.general.verbose = true;
            self.analyzers.verbose = true;
        }

        if args.lenient {
            self.analyzers.strict_mode = false;
        }

        if let crate::cli::Command::Scan(scan) = &args.command {
            if let Some(max_files) = scan.max_files {
                self.scanner.max_files = max_files;
            }
            if let Some(ref excludes) = scan.exclude {
                self.scanner.excludes = excludes.clone();
            }
            if let Some(concurrency) = scan.concurrency {
                self.general.concurrency = concurrency;
            }
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
