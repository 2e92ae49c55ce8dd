//! Command-line surface of the vault password client.
//!
//! Parses the single optional `--vault-id` argument, wires the prompt log and
//! the input source together, and prints the resolved secret on stdout.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use crate::logging::PromptLog;
use crate::resolver::{detect_source, format_secret, resolve_secret};

/// Prompt shown when the secret is collected interactively.
const PROMPT: &str = "Vault password";

#[derive(Parser)]
#[command(
    name = "vault-password-client",
    about = "Resolve a vault secret from the environment, a masked prompt, or stdin",
    version
)]
pub struct Cli {
    /// Vault identity to prefix the secret with, as `<id>/<secret>`.
    #[arg(long, value_name = "VAULT_ID")]
    pub vault_id: Option<String>,
}

/// Parse the command line and run the client.
pub fn run_cli() -> Result<()> {
    run(Cli::parse())
}

/// Resolve the secret and write it to stdout.
///
/// # Arguments
///
/// * `cli` - Parsed command-line arguments.
pub fn run(cli: Cli) -> Result<()> {
    let log = PromptLog::from_env()?;
    let mut source = detect_source(PROMPT);
    let secret = resolve_secret(&log, cli.vault_id.as_deref(), source.as_mut())?;

    let mut out = io::stdout().lock();
    writeln!(out, "{}", format_secret(cli.vault_id.as_deref(), &secret))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn vault_id_is_optional() {
        let cli = Cli::try_parse_from(["vault-password-client"]).expect("parse");
        assert_eq!(cli.vault_id, None);
    }

    #[test]
    fn vault_id_is_captured() {
        let cli =
            Cli::try_parse_from(["vault-password-client", "--vault-id", "prod"]).expect("parse");
        assert_eq!(cli.vault_id.as_deref(), Some("prod"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = Cli::try_parse_from(["vault-password-client", "--frobnicate"])
            .err()
            .expect("unknown flag must fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
