//! Known-project configuration.
//!
//! Maps project names to source-browse base URLs so the renderer can
//! hyperlink `line:col` references. A built-in table covers the stock
//! projects; a `projects.json` file can replace it when the set of
//! analyzed projects differs.

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Project name -> base URL for linking into the source tree
pub type ProjectUrls = HashMap<String, String>;

/// One project entry in `projects.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    pub url: String,
    #[serde(default)]
    pub commit: String,
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: HashMap<String, ProjectEntry>,
}

impl ProjectEntry {
    /// Derive the web base URL for browsing files at the pinned commit.
    /// Falls back to `main` when no commit is recorded.
    pub fn browse_url(&self) -> String {
        let base = self.url.strip_suffix(".git").unwrap_or(&self.url);
        let reference = if self.commit.is_empty() { "main" } else { &self.commit };
        format!("{}/blob/{}", base, reference)
    }
}

/// Built-in project links used when no config file is given.
// TODO: resolve the commit hash from the checkout instead of linking main.
pub fn default_project_urls() -> ProjectUrls {
    let mut urls = ProjectUrls::new();
    urls.insert("cppcheck".to_string(), "https://github.com/danmar/cppcheck/blob/main".to_string());
    urls
}

/// Load the project URL table from a `projects.json` config file.
///
/// Expected shape: `{"projects": {"<name>": {"url": ..., "commit": ...}}}`.
pub fn load_project_urls(config_path: &Path) -> Result<ProjectUrls, String> {
    let text = fs::read_to_string(config_path)
        .map_err(|e| format!("Cannot read {}: {}", config_path.display(), e))?;
    let parsed: ProjectsFile = serde_json::from_str(&text)
        .map_err(|e| format!("Invalid project config {}: {}", config_path.display(), e))?;

    debug!("loaded {} project entries from {}", parsed.projects.len(), config_path.display());

    Ok(parsed.projects.into_iter().map(|(name, entry)| (name, entry.browse_url())).collect())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
