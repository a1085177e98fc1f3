//! Parallel analysis of scanned project files.

use crate::models::AnalyzedFile;
use crate::registry::Registry;
use crate::scanner::SourceFile;
use anyhow::{Context, Result};
use futures::future::join_all;
use indicatif::ProgressBar;
use std::sync::Arc;
use tracing::debug;

/// Run each file's analyzers on a blocking thread, at most `concurrency`
/// files at a time. Results keep the input order.
pub async fn analyze_project(
    registry: Arc<Registry>,
    files: Vec<SourceFile>,
    concurrency: usize,
    progress: &ProgressBar,
) -> Result<Vec<AnalyzedFile>> {
    let batch_size = concurrency.max(1);
    let mut analyzed = Vec::with_capacity(files.len());
    let mut pending = files.into_iter().peekable();

    while pending.peek().is_some() {
        let tasks = pending.by_ref().take(batch_size).map(|file| {
            let registry = Arc::clone(&registry);
            tokio::task::spawn_blocking(move || analyze_file(&registry, file))
        });

        for joined in join_all(tasks).await {
            let file = joined.context("Analysis task panicked")??;
            debug!("{}: score {}", file.path, file.result.score);
            progress.inc(1);
            analyzed.push(file);
        }
    }

    Ok(analyzed)
}

/// Run every detected analyzer on one file and merge the results.
pub fn analyze_file(registry: &Registry, file: SourceFile) -> Result<AnalyzedFile> {
    let result = registry
        .analyze_with(&file.analyzers, &file.content)
        .with_context(|| format!("Failed to analyze {}", file.path))?;

    Ok(AnalyzedFile {
        path: file.path,
        analyzers: file.analyzers.iter().map(|id| id.to_string()).collect(),
        result,
    })
}
