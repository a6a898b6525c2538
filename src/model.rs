/// Core data structures for parsed analysis results
///
/// This module defines the primary data structures used throughout
/// tidy-report for representing diagnostics and per-project outcomes.

/// Severity of a single diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Parse the severity token from a diagnostic line.
    /// Only the exact strings "warning" and "error" are recognized;
    /// anything else means the line is not a diagnostic.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Icon used for issue lines in the detail sections
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Error => "🛑",
            Severity::Warning => "⚠️",
        }
    }
}

/// A single static-analysis finding extracted from a log line
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    /// Project-relative display path (see paths::relative_display_path)
    pub file_path: String,
    pub line: u32,
    pub col: u32,
    pub severity: Severity,
    pub message: String,
    /// The bracketed rule name at the end of the line, e.g. "bugprone-unused"
    pub check_name: String,
    /// Source line printed by the tool directly below the diagnostic, if any
    pub context: Option<String>,
}

/// Aggregated analysis results for a single project
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectResult {
    pub name: String,
    pub warnings_count: usize,
    pub errors_count: usize,
    pub has_crash: bool,
    pub issues: Vec<Issue>,
}

impl ProjectResult {
    /// Build a result from the flat parse output. Counts are derived
    /// from the issue list here, so they can never drift from it.
    pub fn from_parse(name: String, issues: Vec<Issue>, has_crash: bool) -> Self {
        let warnings_count = issues.iter().filter(|i| !i.severity.is_error()).count();
        let errors_count = issues.iter().filter(|i| i.severity.is_error()).count();
        ProjectResult { name, warnings_count, errors_count, has_crash, issues }
    }

    /// An empty pass-like result, used when a log file cannot be read
    pub fn empty(name: String) -> Self {
        Self::from_parse(name, Vec::new(), false)
    }

    /// Status emoji, crash-first priority: crash > error > warning > pass
    pub fn status_emoji(&self) -> &'static str {
        if self.has_crash {
            "💥"
        } else if self.errors_count > 0 {
            "❌"
        } else if self.warnings_count > 0 {
            "⚠️"
        } else {
            "✅"
        }
    }

    /// Human-readable status label, same priority order as the emoji
    pub fn status_text(&self) -> &'static str {
        if self.has_crash {
            "CRASH"
        } else if self.errors_count > 0 {
            "Fail"
        } else if self.warnings_count > 0 {
            "Warnings"
        } else {
            "Pass"
        }
    }

    /// True when the detail section for this project would be empty
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && !self.has_crash
    }
}
