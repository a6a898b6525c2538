//! Report pipeline orchestration.
//!
//! Discovers `*.log` files, parses each into a [`ProjectResult`],
//! sorts the results by project name, and hands them to the renderer.
//! This is the only module that walks the filesystem.

use crate::config::ProjectUrls;
use crate::model::ProjectResult;
use crate::parser::parse_log_file;
use crate::render::write_report;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// What the pipeline did, for exit-code purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Report rendered and written
    Written,
    /// Log directory existed but held no log files; nothing written
    NoLogs,
}

/// Run the full report pipeline.
///
/// A missing log directory is the one fatal condition. An empty
/// directory is a clean no-op; unreadable individual logs degrade to
/// empty results inside the parser and never abort the run.
pub fn generate_report(log_dir: &Path, output: &Path, urls: &ProjectUrls) -> Result<ReportOutcome, String> {
    if !log_dir.is_dir() {
        return Err(format!("Log directory '{}' not found.", log_dir.display()));
    }

    let log_files = find_log_files(log_dir)
        .map_err(|e| format!("Cannot list log directory '{}': {}", log_dir.display(), e))?;

    if log_files.is_empty() {
        eprintln!("No log files found in '{}'.", log_dir.display());
        return Ok(ReportOutcome::NoLogs);
    }

    debug!("found {} log files in {}", log_files.len(), log_dir.display());

    let mut results: Vec<ProjectResult> = log_files.iter().map(|p| parse_log_file(p)).collect();
    results.sort_by(|a, b| a.name.cmp(&b.name));

    write_report(&results, urls, output);
    Ok(ReportOutcome::Written)
}

/// All `*.log` files directly inside `log_dir`
fn find_log_files(log_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "log") {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
