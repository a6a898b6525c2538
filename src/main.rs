mod cli;
mod config;
mod issue_body;
mod model;
mod parser;
mod paths;
mod pipeline;
mod render;
mod ui;

use cli::Command;
use std::io::Read;
use std::path::Path;

fn main() {
    env_logger::init();

    let args = cli::CliArgs::parse_args();

    let exit_code = match args.command {
        Command::Report { log_dir, output, projects } => run_report(&log_dir, &output, projects.as_deref()),
        Command::ParseIssue { output_env_file } => run_parse_issue(&output_env_file),
    };

    std::process::exit(exit_code);
}

fn run_report(log_dir: &Path, output: &Path, projects: Option<&Path>) -> i32 {
    let urls = match projects {
        Some(path) => match config::load_project_urls(path) {
            Ok(urls) => {
                ui::status(&format!("using project links from {}", path.display()));
                urls
            }
            Err(e) => {
                ui::print_error(&format!("Configuration error: {}", e));
                return 1;
            }
        },
        None => config::default_project_urls(),
    };

    match pipeline::generate_report(log_dir, output, &urls) {
        Ok(_) => 0,
        Err(e) => {
            ui::print_error(&e);
            1
        }
    }
}

fn run_parse_issue(output_env_file: &Path) -> i32 {
    let mut body = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut body) {
        ui::print_error(&format!("Cannot read issue body from stdin: {}", e));
        return 1;
    }

    let parsed = match issue_body::parse_body(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            ui::print_error(&e);
            return 1;
        }
    };

    if let Err(e) = issue_body::write_env_file(&parsed, output_env_file) {
        ui::print_error(&format!("Cannot write {}: {}", output_env_file.display(), e));
        return 1;
    }

    0
}
