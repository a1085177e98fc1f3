//! MasterCheck command-line front end.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (unknown analyzer, bad input, config failure, etc.)
//!   2 - Validation failed, or the scan score is below --fail-under

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use mastercheck::analysis::{analyze_project, generate_summary_text, sort_issues_by_severity};
use mastercheck::cli::{
    AnalyzeArgs, Args, BadgeArgs, Command, GuideArgs, ListArgs, OutputFormat, ScaffoldArgs, ScanArgs,
    SourceArgs, ValidateArgs,
};
use mastercheck::config::{Config, CONFIG_FILE};
use mastercheck::models::{Grade, ScaffoldResult};
use mastercheck::report::{build_report, write_report, Badge, ReportFormat};
use mastercheck::scanner::{FileScanner, ScanConfig};
use mastercheck::{Registry, ScaffoldOptions, ValidationInput};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_args();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // No logging needed to write the config template
    if let Command::InitConfig { force } = args.command {
        return handle_init_config(force);
    }

    init_logging(&args);

    info!("MasterCheck v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle `init-config`: generate a default .mastercheck.toml.
fn handle_init_config(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        eprintln!(
            "⚠️  {} already exists. Pass --force to overwrite it.",
            CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE);
    println!("   Edit it to customize strict mode, excludes, concurrency, and more.");
    Ok(())
}

/// Initialize logging. `RUST_LOG` overrides the verbosity flags.
fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Dispatch the subcommand. Returns the process exit code.
async fn run(args: Args) -> Result<i32> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let registry =
        Registry::builtin(&config.analyzers).context("Failed to build analyzer registry")?;
    debug!("Registered {} analyzers", registry.len());

    match &args.command {
        Command::List(list) => handle_list(&registry, list),
        Command::Analyze(analyze) => handle_analyze(&registry, analyze),
        Command::Validate(validate) => handle_validate(&registry, validate),
        Command::Optimize(optimize) => handle_optimize(&registry, optimize),
        Command::Scaffold(scaffold) => handle_scaffold(&registry, scaffold),
        Command::Guide(guide) => handle_guide(&registry, guide),
        Command::Scan(scan) => handle_scan(registry, &config, scan, args.quiet).await,
        Command::Badge(badge) => handle_badge(badge),
        Command::InitConfig { .. } => Ok(0),
    }
}

fn handle_list(registry: &Registry, list: &ListArgs) -> Result<i32> {
    let infos: Vec<_> = registry
        .infos()
        .into_iter()
        .filter(|info| list.group.as_deref().map_or(true, |g| info.group == g))
        .collect();

    if infos.is_empty() {
        anyhow::bail!(
            "No analyzers in group '{}'",
            list.group.as_deref().unwrap_or_default()
        );
    }

    if list.format == OutputFormat::Json {
        print_json(&infos)?;
        return Ok(0);
    }

    let stats = registry.stats();
    println!("🧩 Total Analyzers: {}", stats.total);
    println!("   Groups: {}", stats.groups);
    if list.group.is_some() {
        println!("   Showing: {}", infos.len());
    }
    println!();

    let mut current_group = "";
    for info in &infos {
        if info.group != current_group {
            let count = stats.by_group.get(&info.group).copied().unwrap_or_default();
            println!("## {} ({})\n", info.group, count);
            current_group = info.group.as_str();
        }
        println!(
            "- `{}` {} v{} ({})",
            info.id, info.name, info.version, info.classification
        );
        println!("    specializations: {}", info.specializations.join(", "));
        println!(
            "    templates: {} | topics: {}",
            info.templates.join(", "),
            info.topics.join(", ")
        );
    }

    Ok(0)
}

fn handle_analyze(registry: &Registry, analyze: &AnalyzeArgs) -> Result<i32> {
    let code = read_source(analyze.file.as_deref())?;
    let result = registry.analyze_with(&analyze.agents, &code)?;

    if analyze.format == OutputFormat::Json {
        print_json(&result)?;
        return Ok(0);
    }

    println!("🔬 Analyzed with: {}\n", result.agents.join(", "));

    let mut issues = result.issues.clone();
    sort_issues_by_severity(&mut issues);

    if issues.is_empty() {
        println!("✅ No issues found.");
    } else {
        for attributed in &issues {
            let issue = &attributed.issue;
            let location = issue
                .line
                .map(|line| format!("line {}", line))
                .unwrap_or_else(|| "file".to_string());
            println!(
                "{} [{}] {} ({}, {}): {}",
                issue.severity.emoji(),
                issue.severity,
                issue.kind,
                location,
                attributed.agent,
                issue.message
            );
        }
    }

    println!("\n{}", generate_summary_text(&result.summary));
    print_recommendations(&result.recommendations);
    let grade = Grade::from_score(result.score);
    println!("\n📊 Score: {}/100 | Grade: {} {}", result.score, grade, grade.emoji());

    Ok(0)
}

fn handle_validate(registry: &Registry, validate: &ValidateArgs) -> Result<i32> {
    let analyzer = registry.resolve(&validate.source.agent)?;

    let validation = match &validate.params {
        Some(raw) => {
            let params: serde_json::Value =
                serde_json::from_str(raw).context("--params is not valid JSON")?;
            analyzer.validate(ValidationInput::Params(&params))?
        }
        None => {
            let code = read_source(validate.source.file.as_deref())?;
            analyzer.validate(ValidationInput::Source(&code))?
        }
    };

    if validate.source.format == OutputFormat::Json {
        print_json(&validation)?;
    } else {
        for (check, passed) in &validation.checks {
            println!("   {} {}", if *passed { "✅" } else { "❌" }, check);
        }
        println!("\n📊 Score: {}/100", validation.score);
        if validation.valid {
            println!("✅ Valid");
        } else {
            println!("⛔ Invalid");
        }
    }

    Ok(if validation.valid { 0 } else { 2 })
}

fn handle_optimize(registry: &Registry, optimize: &SourceArgs) -> Result<i32> {
    let analyzer = registry.resolve(&optimize.agent)?;
    let code = read_source(optimize.file.as_deref())?;
    let optimization = analyzer.optimize(&code);

    if optimize.format == OutputFormat::Json {
        print_json(&optimization)?;
        return Ok(0);
    }

    if optimization.optimizations.is_empty() {
        println!("✅ Nothing to optimize.");
    } else {
        println!("💡 {} suggestion(s):", optimization.optimizations.len());
        for suggestion in &optimization.optimizations {
            println!("   - {}", suggestion);
        }
    }

    Ok(0)
}

fn handle_scaffold(registry: &Registry, scaffold: &ScaffoldArgs) -> Result<i32> {
    let analyzer = registry.resolve(&scaffold.agent)?;
    let result = analyzer.scaffold(&scaffold.template, &ScaffoldOptions::named(&scaffold.name))?;

    println!(
        "🏗️  {} template '{}' for '{}'",
        result.generator, result.template, scaffold.name
    );

    if scaffold.dry_run {
        for (path, content) in &result.files {
            println!("     📄 {} ({} bytes)", path, content.len());
        }
        println!("\n✅ Dry run complete. No files were written.");
        return Ok(0);
    }

    let written = write_scaffold(&scaffold.out, &result, scaffold.force)?;
    for path in &written {
        println!("     📄 {}", path.display());
    }
    println!("\n✅ Wrote {} file(s) to {}", written.len(), scaffold.out.display());

    Ok(0)
}

/// Write scaffold files under `out`. Existing files are left alone unless
/// `force` is set, and nothing is written if any would be overwritten.
fn write_scaffold(out: &Path, result: &ScaffoldResult, force: bool) -> Result<Vec<PathBuf>> {
    let targets: Vec<(PathBuf, &String)> = result
        .files
        .iter()
        .map(|(path, content)| (out.join(path), content))
        .collect();

    if !force {
        let existing: Vec<String> = targets
            .iter()
            .filter(|(path, _)| path.exists())
            .map(|(path, _)| path.display().to_string())
            .collect();
        if !existing.is_empty() {
            anyhow::bail!(
                "Refusing to overwrite existing files (use --force): {}",
                existing.join(", ")
            );
        }
    }

    let mut written = Vec::with_capacity(targets.len());
    for (path, content) in targets {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}

fn handle_guide(registry: &Registry, guide: &GuideArgs) -> Result<i32> {
    let analyzer = registry.resolve(&guide.agent)?;
    let entry = analyzer.guidance(&guide.topic)?;

    if guide.format == OutputFormat::Json {
        print_json(&entry)?;
    } else {
        println!("# {}\n\n{}", entry.title, entry.content);
    }

    Ok(0)
}

/// Scan a project, analyze every recognized file, and write the report.
async fn handle_scan(
    registry: Registry,
    config: &Config,
    scan: &ScanArgs,
    quiet: bool,
) -> Result<i32> {
    let start_time = Instant::now();
    let scanner = FileScanner::new(scan.path.clone(), ScanConfig::from(&config.scanner));

    if scan.dry_run {
        return handle_dry_run(&scanner);
    }

    println!("🔍 Scanning {}", scan.path.display());
    let outcome = tokio::task::spawn_blocking(move || scanner.collect_files())
        .await
        .context("Scan task panicked")??;

    if outcome.files.is_empty() {
        println!("   No files matched any analyzer.");
    } else {
        println!("   Found {} file(s) to analyze", outcome.files.len());
    }
    if outcome.failed > 0 {
        warn!("{} file(s) could not be read", outcome.failed);
    }

    println!("\n🔬 Running analyzers...");
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(outcome.files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .context("Invalid progress template")?
                .progress_chars("#>-"),
        );
        pb
    };

    let analyzed = analyze_project(
        Arc::new(registry),
        outcome.files,
        config.general.concurrency,
        &progress,
    )
    .await?;
    progress.finish_and_clear();

    println!("\n📝 Generating report...");
    let report = build_report(
        &scan.path.display().to_string(),
        analyzed,
        outcome.failed,
        start_time.elapsed().as_secs_f64(),
    );

    let format = match scan.format {
        OutputFormat::Markdown => ReportFormat::Markdown,
        OutputFormat::Json => ReportFormat::Json,
    };
    let output = scan
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(&config.general.output, format));
    write_report(&report, &output, format, &config.report)?;

    println!("\n📊 Analysis Summary:");
    println!("   Files analyzed: {}", report.metadata.files_analyzed);
    for line in generate_summary_text(&report.summary).lines() {
        println!("   {}", line);
    }
    println!("   Score: {}/100", report.score);
    println!("   Grade: {} {}", report.grade, report.grade.emoji());
    println!("   Duration: {:.1}s", report.metadata.duration_seconds);
    println!("\n✅ Scan complete! Report saved to: {}", output.display());

    if let Some(threshold) = scan.fail_under {
        if report.score < threshold {
            eprintln!(
                "\n⛔ Score {} is below --fail-under {}. Failing (exit code 2).",
                report.score, threshold
            );
            return Ok(2);
        }
    }

    Ok(0)
}

/// Render a badge to stdout or a file.
fn handle_badge(badge: &BadgeArgs) -> Result<i32> {
    let rendered = Badge::new(badge.score).render(badge.format, badge.style)?;

    match &badge.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write badge: {}", path.display()))?;
            println!("✅ Badge saved to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(0)
}

/// Handle `scan --dry-run`: list what would be analyzed, and by what.
fn handle_dry_run(scanner: &FileScanner) -> Result<i32> {
    println!("\n🔍 Dry run: scanning files (no analysis)...\n");

    let outcome = scanner.collect_files()?;

    if outcome.files.is_empty() {
        println!("   No files matched any analyzer.");
    } else {
        println!("   Found {} files that would be analyzed:\n", outcome.files.len());
        for file in &outcome.files {
            println!("     📄 {} [{}]", file.path, file.analyzers.join(", "));
        }
        println!("\n   Total: {} files", outcome.files.len());
    }

    println!("\n✅ Dry run complete.");
    Ok(0)
}

/// The configured report path, with a `.json` extension for JSON output.
fn default_report_path(configured: &str, format: ReportFormat) -> PathBuf {
    let path = PathBuf::from(configured);
    match format {
        ReportFormat::Markdown => path,
        ReportFormat::Json => path.with_extension("json"),
    }
}

/// Load configuration, looking next to the scanned project for `scan`.
fn load_config(args: &Args) -> Result<Config> {
    let project_dir = match &args.command {
        Command::Scan(scan) => Some(scan.path.as_path()),
        _ => None,
    };
    Config::resolve(args.config.as_deref(), project_dir)
}

/// Read source text from a file, or from stdin when no file is given.
fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read source from stdin")?;
            Ok(code)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

fn print_recommendations(recommendations: &[String]) {
    if recommendations.is_empty() {
        return;
    }

    println!("\n💡 Recommendations:");
    for (i, rec) in recommendations.iter().enumerate() {
        println!("   {}. {}", i + 1, rec);
    }
}
