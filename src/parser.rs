//! Log-file parsing.
//!
//! Turns the raw text of one `<project>.log` file into a
//! [`ProjectResult`]. Tool logs are noisy: diagnostics are interleaved
//! with build progress, banners, and the occasional crash backtrace,
//! and may contain invalid UTF-8. The parser scans line by line,
//! matching a single anchored pattern for diagnostics and a pair of
//! literal markers for crashes; everything else is skipped.

use crate::model::{Issue, ProjectResult, Severity};
use crate::paths::relative_display_path;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    /// Standard clang-tidy diagnostic format:
    /// /path/to/file.cpp:10:5: warning: message [check-name]
    static ref ISSUE_PATTERN: Regex =
        Regex::new(r"^(.+):(\d+):(\d+): (warning|error): (.+) \[(.+)\]$").unwrap();
}

/// Substrings that indicate the tool itself died rather than reporting
const CRASH_MARKERS: [&str; 2] = ["Segmentation fault", "Stack dump:"];

/// Parse a single tool log file into a project result.
///
/// The project name is the file name minus its `.log` extension. A log
/// that cannot be read is reported to stderr and yields an empty
/// result so one bad file never blocks the rest of the report.
pub fn parse_log_file(log_path: &Path) -> ProjectResult {
    let project_name = log_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let raw = match fs::read(log_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {}", log_path.display(), e);
            return ProjectResult::empty(project_name);
        }
    };

    // Logs routinely mix encodings; replace bad bytes rather than fail.
    let text = String::from_utf8_lossy(&raw);
    let result = parse_log_text(&text, &project_name);
    debug!(
        "parsed {}: {} warnings, {} errors, crash={}",
        project_name, result.warnings_count, result.errors_count, result.has_crash
    );
    result
}

/// Parse log text that has already been read and decoded.
pub fn parse_log_text(text: &str, project_name: &str) -> ProjectResult {
    let lines: Vec<&str> = text.lines().collect();
    let mut issues: Vec<Issue> = Vec::new();
    let mut has_crash = false;

    for (i, raw_line) in lines.iter().enumerate() {
        let line = raw_line.trim();

        if CRASH_MARKERS.iter().any(|m| line.contains(m)) {
            if !has_crash {
                warn!("crash marker found in {} log", project_name);
            }
            has_crash = true;
            continue;
        }

        let Some(caps) = ISSUE_PATTERN.captures(line) else {
            continue;
        };

        let raw_path = &caps[1];
        let severity = match Severity::from_token(&caps[4]) {
            Some(s) => s,
            None => continue,
        };
        // \d+ matched, but the value may still overflow u32
        let (Ok(line_num), Ok(col_num)) = (caps[2].parse::<u32>(), caps[3].parse::<u32>()) else {
            continue;
        };

        issues.push(Issue {
            file_path: relative_display_path(raw_path, project_name),
            line: line_num,
            col: col_num,
            severity,
            message: caps[5].to_string(),
            check_name: caps[6].to_string(),
            context: extract_context(&lines, i),
        });
    }

    ProjectResult::from_parse(project_name.to_string(), issues, has_crash)
}

/// Grab the source line the tool prints directly below a diagnostic.
///
/// Heuristic: the next line, trimmed, counts as context unless it is
/// empty or starts with `/` (which usually means it is the path of the
/// next diagnostic, not source code). A source line that legitimately
/// begins with `/` is lost to this check; accepted approximation.
fn extract_context(lines: &[&str], issue_index: usize) -> Option<String> {
    let next = lines.get(issue_index + 1)?.trim();
    if next.is_empty() || next.starts_with('/') {
        None
    } else {
        Some(next.to_string())
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod parser_test;
