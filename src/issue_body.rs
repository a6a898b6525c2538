//! GitHub issue-body parsing for CI-triggered check runs.
//!
//! An issue body requests a run with a first line of
//! `<PR_URL> <CHECK_NAME>` followed by optional `key: value` check
//! options. The extracted fields are appended to a GitHub env file in
//! multi-line `NAME<<EOF` syntax so a workflow can pick them up.

use serde_json::json;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Fields extracted from an issue body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBody {
    pub pr_link: String,
    pub check_name: String,
    /// clang-tidy `CheckOptions` config as a JSON string, or empty
    /// when the body carried no options
    pub tidy_config: String,
}

/// Parse an issue body into PR link, check name, and tidy configuration.
pub fn parse_body(body: &str) -> Result<ParsedBody, String> {
    let body = body.trim();
    if body.is_empty() {
        return Err("Empty body".to_string());
    }

    let lines: Vec<&str> = body.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let Some(first_line) = lines.first() else {
        return Err("No valid lines found".to_string());
    };

    let mut parts = first_line.split_whitespace();
    let (Some(pr_link), Some(check_name)) = (parts.next(), parts.next()) else {
        return Err("First line must contain PR_URL and CHECK_NAME".to_string());
    };

    // Remaining lines are simple key/value check options. BTreeMap
    // keeps the emitted JSON deterministic.
    let mut check_options: BTreeMap<String, String> = BTreeMap::new();
    for line in &lines[1..] {
        let Some((key_raw, value_raw)) = line.split_once(':') else {
            continue;
        };
        let key = key_raw.trim();
        let value = value_raw.trim();

        // Keys are qualified with the check name; fix up mismatched prefixes.
        let full_key = match key.split_once('.') {
            Some((prefix, actual_key)) => {
                if prefix != check_name {
                    eprintln!(
                        "Warning: Prefix mismatch. Expected '{}', got '{}'. Overriding to '{}.{}'",
                        check_name, prefix, check_name, actual_key
                    );
                }
                format!("{}.{}", check_name, actual_key)
            }
            None => format!("{}.{}", check_name, key),
        };

        check_options.insert(full_key, value.to_string());
    }

    let tidy_config = if check_options.is_empty() {
        String::new()
    } else {
        json!({ "CheckOptions": check_options }).to_string()
    };

    Ok(ParsedBody {
        pr_link: pr_link.to_string(),
        check_name: check_name.to_string(),
        tidy_config,
    })
}

/// Append the parsed fields to a GitHub env file.
pub fn write_env_file(parsed: &ParsedBody, env_path: &Path) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(env_path)?;
    write!(file, "PR_LINK<<EOF\n{}\nEOF\n", parsed.pr_link)?;
    write!(file, "CHECK_NAME<<EOF\n{}\nEOF\n", parsed.check_name)?;
    write!(file, "TIDY_CONFIG<<EOF\n{}\nEOF\n", parsed.tidy_config)?;
    Ok(())
}

#[cfg(test)]
#[path = "issue_body_test.rs"]
mod issue_body_test;
