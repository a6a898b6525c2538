/// Display-path helpers for tool-emitted file paths

/// Reduce a tool-emitted path to a project-relative display path.
///
/// Logs contain absolute paths into the checkout. If the path goes
/// through `test-projects/<project>/`, everything after that marker is
/// the path inside the project; otherwise fall back to the basename so
/// unexpected layouts still render something readable.
pub fn relative_display_path(full_path: &str, project_name: &str) -> String {
    let marker = format!("test-projects/{}/", project_name);
    if let Some(pos) = full_path.find(&marker) {
        return full_path[pos + marker.len()..].to_string();
    }
    full_path.rsplit('/').next().unwrap_or(full_path).to_string()
}
