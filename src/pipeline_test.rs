use super::*;
use crate::config::default_project_urls;

fn urls() -> ProjectUrls {
    default_project_urls()
}

#[test]
fn test_missing_log_dir_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let err = generate_report(&tmp.path().join("missing"), &tmp.path().join("issue.md"), &urls()).unwrap_err();
    assert!(err.contains("not found"));
}

#[test]
fn test_empty_log_dir_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let log_dir = tmp.path().join("logs");
    fs::create_dir(&log_dir).unwrap();
    let output = tmp.path().join("issue.md");

    let outcome = generate_report(&log_dir, &output, &urls()).unwrap();
    assert_eq!(outcome, ReportOutcome::NoLogs);
    assert!(!output.exists());
}

#[test]
fn test_non_log_files_ignored() {
    let tmp = tempfile::tempdir().unwrap();
    let log_dir = tmp.path().join("logs");
    fs::create_dir(&log_dir).unwrap();
    fs::write(log_dir.join("notes.txt"), "not a log").unwrap();

    let outcome = generate_report(&log_dir, &tmp.path().join("issue.md"), &urls()).unwrap();
    assert_eq!(outcome, ReportOutcome::NoLogs);
}

#[test]
fn test_results_sorted_by_project_name() {
    let tmp = tempfile::tempdir().unwrap();
    let log_dir = tmp.path().join("logs");
    fs::create_dir(&log_dir).unwrap();
    fs::write(log_dir.join("zebra.log"), "").unwrap();
    fs::write(log_dir.join("alpha.log"), "").unwrap();
    let output = tmp.path().join("issue.md");

    let outcome = generate_report(&log_dir, &output, &urls()).unwrap();
    assert_eq!(outcome, ReportOutcome::Written);

    let content = fs::read_to_string(&output).unwrap();
    let alpha = content.find("| **alpha** |").unwrap();
    let zebra = content.find("| **zebra** |").unwrap();
    assert!(alpha < zebra);
}

#[test]
fn test_report_written_for_single_log() {
    let tmp = tempfile::tempdir().unwrap();
    let log_dir = tmp.path().join("logs");
    fs::create_dir(&log_dir).unwrap();
    fs::write(log_dir.join("proj.log"), "/path/file.cpp:10:5: warning: msg [check-a]\n").unwrap();
    let output = tmp.path().join("issue.md");

    generate_report(&log_dir, &output, &urls()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("| **proj** | ⚠️ Warnings | 1 | 0 | - |"));
}
