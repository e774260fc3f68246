//! Plan CLI - Local-first project scheduling

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = plan_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
