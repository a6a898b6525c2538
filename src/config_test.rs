use super::*;
use std::io::Write;

fn entry(url: &str, commit: &str) -> ProjectEntry {
    ProjectEntry { url: url.to_string(), commit: commit.to_string() }
}

#[test]
fn test_browse_url_with_commit() {
    let e = entry("https://github.com/org/proj.git", "abc123");
    assert_eq!(e.browse_url(), "https://github.com/org/proj/blob/abc123");
}

#[test]
fn test_browse_url_without_git_suffix() {
    let e = entry("https://example.com/proj", "abc123");
    assert_eq!(e.browse_url(), "https://example.com/proj/blob/abc123");
}

#[test]
fn test_browse_url_falls_back_to_main() {
    let e = entry("https://example.com/proj.git", "");
    assert_eq!(e.browse_url(), "https://example.com/proj/blob/main");
}

#[test]
fn test_default_urls_include_cppcheck() {
    let urls = default_project_urls();
    assert_eq!(urls.get("cppcheck").map(String::as_str), Some("https://github.com/danmar/cppcheck/blob/main"));
}

#[test]
fn test_loads_single_project() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("projects.json");
    let mut f = fs::File::create(&config_path).unwrap();
    write!(
        f,
        r#"{{"projects": {{"project": {{"url": "https://github.com/project1/project.git", "commit": "abc123"}}}}}}"#
    )
    .unwrap();

    let urls = load_project_urls(&config_path).unwrap();
    assert_eq!(urls.len(), 1);
    assert_eq!(urls.get("project").map(String::as_str), Some("https://github.com/project1/project/blob/abc123"));
}

#[test]
fn test_loads_multiple_projects() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("projects.json");
    fs::write(
        &config_path,
        r#"{"projects": {
            "a": {"url": "https://example.com/a.git", "commit": "aaa"},
            "b": {"url": "https://example.com/b.git", "commit": "bbb"}
        }}"#,
    )
    .unwrap();

    let urls = load_project_urls(&config_path).unwrap();
    assert_eq!(urls.len(), 2);
    assert_eq!(urls.get("a").map(String::as_str), Some("https://example.com/a/blob/aaa"));
    assert_eq!(urls.get("b").map(String::as_str), Some("https://example.com/b/blob/bbb"));
}

#[test]
fn test_missing_commit_field_defaults_to_main() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("projects.json");
    fs::write(&config_path, r#"{"projects": {"a": {"url": "https://example.com/a.git"}}}"#).unwrap();

    let urls = load_project_urls(&config_path).unwrap();
    assert_eq!(urls.get("a").map(String::as_str), Some("https://example.com/a/blob/main"));
}

#[test]
fn test_missing_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_project_urls(&tmp.path().join("nope.json")).unwrap_err();
    assert!(err.contains("Cannot read"));
}

#[test]
fn test_malformed_json_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp.path().join("projects.json");
    fs::write(&config_path, "{not json").unwrap();
    let err = load_project_urls(&config_path).unwrap_err();
    assert!(err.contains("Invalid project config"));
}
