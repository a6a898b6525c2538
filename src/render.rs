//! Markdown report rendering.
//!
//! Converts an ordered list of [`ProjectResult`]s into the two-tier
//! report document: a summary table with one row per project, then a
//! collapsible `<details>` section for every project that has findings.
//! The whole document is built in memory and written to disk once.

use crate::config::ProjectUrls;
use crate::model::{Issue, ProjectResult};
use log::debug;
use std::fs;
use std::path::Path;

/// Render the complete report document.
///
/// Callers are responsible for ordering; rows and detail sections
/// appear exactly in the order given.
pub fn render_report(results: &[ProjectResult], urls: &ProjectUrls) -> String {
    let mut out = String::new();
    write_summary_table(&mut out, results);
    for result in results {
        write_project_details(&mut out, result, urls);
    }
    out
}

/// Render the report and write it to `output_path`, overwriting any
/// existing file. A write failure is reported to stderr; the report
/// run itself is already over at this point, so nothing propagates.
pub fn write_report(results: &[ProjectResult], urls: &ProjectUrls, output_path: &Path) {
    let content = render_report(results, urls);
    debug!("report is {} bytes for {} projects", content.len(), results.len());

    match fs::write(output_path, &content) {
        Ok(()) => println!("Report generated: {}", output_path.display()),
        Err(e) => eprintln!("Error writing report to {}: {}", output_path.display(), e),
    }
}

/// The high-level pass/fail table, one row per project
fn write_summary_table(out: &mut String, results: &[ProjectResult]) {
    out.push_str("### 🧪 Clang-Tidy Integration Test Results\n\n");
    out.push_str("| Project | Status | Warnings | Errors | Crash |\n");
    out.push_str("| :--- | :--- | :--- | :--- | :--- |\n");

    for res in results {
        let crash_mark = if res.has_crash { "YES" } else { "-" };
        out.push_str(&format!(
            "| **{}** | {} {} | {} | {} | {} |\n",
            res.name,
            res.status_emoji(),
            res.status_text(),
            res.warnings_count,
            res.errors_count,
            crash_mark
        ));
    }

    out.push_str("\n---\n");
}

/// The collapsible per-project breakdown. Projects with nothing to
/// show produce no output at all.
fn write_project_details(out: &mut String, result: &ProjectResult, urls: &ProjectUrls) {
    if result.is_clean() {
        return;
    }

    out.push_str(&format!(
        "\n<details>\n<summary><strong>🔍 {} Details ({} warnings, {} errors)</strong></summary>\n\n",
        result.name, result.warnings_count, result.errors_count
    ));

    if result.has_crash {
        out.push_str("🚨 **CRASH DETECTED** in this project!\n\n");
    }

    let base_url = urls.get(&result.name).map(String::as_str);

    for (file_path, issues) in group_by_file(&result.issues) {
        out.push_str(&format!("#### 📄 `{}`\n", file_path));
        for issue in issues {
            write_issue_line(out, issue, base_url);
        }
    }

    out.push_str("\n</details>\n");
}

fn write_issue_line(out: &mut String, issue: &Issue, base_url: Option<&str>) {
    let loc_text = match base_url {
        Some(base) => {
            let link = format!("{}/{}#L{}", base, issue.file_path, issue.line);
            format!("[{}:{}]({})", issue.line, issue.col, link)
        }
        None => format!("{}:{}", issue.line, issue.col),
    };

    out.push_str(&format!(
        "- {} **{}**: {} `[{}]`\n",
        issue.severity.icon(),
        loc_text,
        issue.message,
        issue.check_name
    ));

    if let Some(ref context) = issue.context {
        out.push_str(&format!("  ```cpp\n  {}\n  ```\n", context));
    }
}

/// Group issues by file path, keeping file groups in the order the
/// paths first appear and issues in their original order within each.
fn group_by_file(issues: &[Issue]) -> Vec<(&str, Vec<&Issue>)> {
    let mut groups: Vec<(&str, Vec<&Issue>)> = Vec::new();
    for issue in issues {
        match groups.iter_mut().find(|(path, _)| *path == issue.file_path) {
            Some((_, group)) => group.push(issue),
            None => groups.push((issue.file_path.as_str(), vec![issue])),
        }
    }
    groups
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
