// src/main.rs
use std::process::ExitCode;

use vault_password_client::cli;

fn main() -> ExitCode {
    match cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            ExitCode::FAILURE
        }
    }
}
