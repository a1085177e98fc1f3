//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::report::{BadgeFormat, BadgeStyle};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MasterCheck - per-technology code analyzers behind one interface
///
/// Run rule-based checks, validation, optimization hints, scaffolds and
/// guidance for 35 technologies, or scan a whole project.
///
/// Examples:
///   mastercheck list --group cloud
///   mastercheck analyze --agent javascript,react --file src/App.jsx
///   mastercheck scaffold --agent javascript --template express --name my-api
///   mastercheck scan ./my-project --format json --fail-under 60
///   mastercheck badge --score 92 --format shields
///   mastercheck init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to configuration file
    ///
    /// If not specified, looks for .mastercheck.toml in the current directory
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Fall back to default templates and guides instead of failing on
    /// unknown names
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List analyzers and their specializations
    List(ListArgs),

    /// Analyze source text with one or more analyzers
    Analyze(AnalyzeArgs),

    /// Validate source text or a parameters object
    Validate(ValidateArgs),

    /// Show optimization hints for source text
    Optimize(SourceArgs),

    /// Generate a project skeleton from an analyzer template
    Scaffold(ScaffoldArgs),

    /// Print a guidance article
    Guide(GuideArgs),

    /// Analyze every recognized file in a project and write a report
    Scan(ScanArgs),

    /// Render a quality badge for a score
    Badge(BadgeArgs),

    /// Generate a default .mastercheck.toml configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Only list analyzers in this group (e.g. languages, cloud)
    #[arg(short, long)]
    pub group: Option<String>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Analyzer ids to run (comma-separated)
    #[arg(short, long = "agent", value_name = "IDS", value_delimiter = ',', required = true)]
    pub agents: Vec<String>,

    /// Source file to read; stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,
}

/// One analyzer plus a source file.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Analyzer id
    #[arg(short, long, value_name = "ID")]
    pub agent: String,

    /// Source file to read; stdin when omitted
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// JSON parameters object to validate instead of source text
    #[arg(long, value_name = "JSON", conflicts_with = "file")]
    pub params: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScaffoldArgs {
    /// Analyzer id
    #[arg(short, long, value_name = "ID")]
    pub agent: String,

    /// Template id (see `list`)
    #[arg(short, long)]
    pub template: String,

    /// Project name interpolated into the files
    #[arg(short, long)]
    pub name: String,

    /// Directory to write the files into
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub out: PathBuf,

    /// Overwrite files that already exist
    #[arg(long)]
    pub force: bool,

    /// Print the files that would be written and exit
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GuideArgs {
    /// Analyzer id
    #[arg(short, long, value_name = "ID")]
    pub agent: String,

    /// Topic id (see `list`)
    #[arg(default_value = "best-practices")]
    pub topic: String,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScanArgs {
    /// Project directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output file path for the report
    ///
    /// Defaults to `general.output` from the config file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Fail if the project score is below this value
    ///
    /// Useful for CI pipelines. Exit code 2 when the score is lower.
    #[arg(long, value_name = "SCORE")]
    pub fail_under: Option<u8>,

    /// Maximum number of files to analyze
    #[arg(long, value_name = "COUNT")]
    pub max_files: Option<usize>,

    /// Directory or file names to exclude (comma-separated)
    ///
    /// Example: --exclude "node_modules,dist"
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Number of files analyzed in parallel
    #[arg(long, value_name = "NUM")]
    pub concurrency: Option<usize>,

    /// Show which files would be analyzed, and by which analyzers, then exit
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct BadgeArgs {
    /// Score (0-100) the badge shows
    #[arg(short, long, value_name = "SCORE")]
    pub score: u8,

    /// Badge format
    #[arg(short, long, default_value = "markdown", value_name = "FORMAT")]
    pub format: BadgeFormat,

    /// shields.io style
    #[arg(long, default_value = "for-the-badge")]
    pub style: BadgeStyle,

    /// Write the badge to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output format for reports and command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        match &self.command {
            Command::Scaffold(scaffold) => {
                if scaffold.name.trim().is_empty() {
                    return Err("Project name must not be empty".to_string());
                }
            }
            Command::Badge(badge) => {
                if badge.score > 100 {
                    return Err("Score must be between 0 and 100".to_string());
                }
            }
            Command::Scan(scan) => {
                if scan.concurrency == Some(0) {
                    return Err("Concurrency must be at least 1".to_string());
                }

                if scan.max_files == Some(0) {
                    return Err("Max files must be at least 1".to_string());
                }

                if let Some(score) = scan.fail_under {
                    if score > 100 {
                        return Err("--fail-under must be between 0 and 100".to_string());
                    }
                }

                if !scan.path.exists() {
                    return Err(format!("Directory does not exist: {}", scan.path.display()));
                }
                if !scan.path.is_dir() {
                    return Err(format!("Path is not a directory: {}", scan.path.display()));
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mastercheck").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_analyze_splits_agent_list() {
        let args = parse(&["analyze", "--agent", "javascript,react", "-f", "app.js"]);
        match args.command {
            Command::Analyze(analyze) => {
                assert_eq!(analyze.agents, vec!["javascript", "react"]);
                assert_eq!(analyze.file, Some(PathBuf::from("app.js")));
                assert_eq!(analyze.format, OutputFormat::Markdown);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["guide", "-a", "react", "hooks", "--lenient", "-v"]);
        assert!(args.lenient);
        assert!(args.verbose);
        match args.command {
            Command::Guide(guide) => assert_eq!(guide.topic, "hooks"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_guide_topic_defaults() {
        let args = parse(&["guide", "--agent", "docker"]);
        match args.command {
            Command::Guide(guide) => assert_eq!(guide.topic, "best-practices"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_validate_params_conflicts_with_file() {
        let result = Args::try_parse_from([
            "mastercheck",
            "validate",
            "--agent",
            "python",
            "--file",
            "x.py",
            "--params",
            "{}",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = parse(&["list"]);
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_scan_limits() {
        let args = parse(&["scan", ".", "--concurrency", "0"]);
        assert!(args.validate().is_err());

        let args = parse(&["scan", ".", "--fail-under", "101"]);
        assert!(args.validate().is_err());

        let args = parse(&["scan", "/definitely/not/here"]);
        assert!(args.validate().is_err());

        let args = parse(&["scan", ".", "--fail-under", "60", "--exclude", "dist,build"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_blank_scaffold_name() {
        let args = parse(&["scaffold", "-a", "react", "-t", "app", "-n", "  "]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_badge_args() {
        let args = parse(&["badge", "--score", "92", "-f", "shields", "--style", "flat-square"]);
        assert!(args.validate().is_ok());
        match args.command {
            Command::Badge(badge) => {
                assert_eq!(badge.score, 92);
                assert_eq!(badge.format, BadgeFormat::Shields);
                assert_eq!(badge.style, BadgeStyle::FlatSquare);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let args = parse(&["badge", "--score", "150"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = parse(&["list"]);
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
