//! Secret resolution pipeline.
//!
//! One secret per invocation, sourced in priority order: the
//! `VAULT_ID_SECRET` environment variable, then whatever the selected input
//! backend reads (masked prompt or piped line). The pipeline is linear; every
//! stage either hands off to the next or terminates the resolution.

use std::env;

use tracing::info;

use crate::logging::PromptLog;
use crate::resolver::{ResolveError, SecretSource};

/// Environment variable consulted before any prompting.
pub const SECRET_ENV_VAR: &str = "VAULT_ID_SECRET";

/// Resolve one secret for this invocation.
///
/// The prompt-log line is emitted first, once per invocation, so an external
/// watcher tailing the log knows the client may be about to block on input.
/// The environment is consulted next; only when it has no usable value is the
/// input backend asked for a line. An empty result is an error, never an
/// empty secret.
///
/// # Arguments
///
/// * `log` - Prompt-log handle built at startup; inert when `LOG_PATH` was
///   not set.
/// * `vault_id` - Optional vault identity, recorded in the log line.
/// * `source` - Input backend selected by the startup interactivity check.
pub fn resolve_secret(
    log: &PromptLog,
    vault_id: Option<&str>,
    source: &mut dyn SecretSource,
) -> Result<String, ResolveError> {
    log.scope(|| match vault_id {
        Some(id) => info!("requesting vault secret for vault-id {}", id),
        None => info!("requesting vault secret"),
    });

    if let Some(secret) = env_secret() {
        return Ok(secret);
    }

    let secret = source.read_secret()?;
    if secret.is_empty() {
        return Err(ResolveError::Unresolved);
    }
    Ok(secret)
}

/// `VAULT_ID_SECRET` when set to a non-empty UTF-8 value. Unset, empty, and
/// non-UTF-8 values all count as absent.
fn env_secret() -> Option<String> {
    env::var(SECRET_ENV_VAR)
        .ok()
        .filter(|secret| !secret.is_empty())
}

/// Format the resolved secret for stdout: `vault_id/secret` when a vault id
/// was supplied, the bare secret otherwise.
pub fn format_secret(vault_id: Option<&str>, secret: &str) -> String {
    match vault_id {
        Some(id) => format!("{}/{}", id, secret),
        None => secret.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use serial_test::serial;

    use super::*;
    use crate::logging::PromptLog;

    /// Backend that fails the test if the pipeline consults it.
    struct UntouchableSource;

    impl SecretSource for UntouchableSource {
        fn read_secret(&mut self) -> Result<String, ResolveError> {
            panic!("input backend consulted although the environment had a value");
        }
    }

    /// Backend returning a fixed, already-trimmed line.
    struct FixedSource(&'static str);

    impl SecretSource for FixedSource {
        fn read_secret(&mut self) -> Result<String, ResolveError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    #[serial]
    fn env_value_wins_without_consulting_the_source() {
        crate::init_logging();
        env::set_var(SECRET_ENV_VAR, "hunter2");
        let result = resolve_secret(&PromptLog::disabled(), Some("prod"), &mut UntouchableSource);
        env::remove_var(SECRET_ENV_VAR);
        assert_eq!(result.expect("resolved"), "hunter2");
    }

    #[test]
    #[serial]
    fn empty_env_value_falls_through_to_the_source() {
        env::set_var(SECRET_ENV_VAR, "");
        let result = resolve_secret(&PromptLog::disabled(), None, &mut FixedSource("fallback"));
        env::remove_var(SECRET_ENV_VAR);
        assert_eq!(result.expect("resolved"), "fallback");
    }

    #[test]
    #[serial]
    fn absent_env_uses_the_source_line() {
        env::remove_var(SECRET_ENV_VAR);
        let result = resolve_secret(&PromptLog::disabled(), None, &mut FixedSource("s3cr3t"));
        assert_eq!(result.expect("resolved"), "s3cr3t");
    }

    #[test]
    #[serial]
    fn empty_source_line_is_unresolved() {
        env::remove_var(SECRET_ENV_VAR);
        let err = resolve_secret(&PromptLog::disabled(), None, &mut FixedSource(""))
            .expect_err("empty line must not resolve");
        assert!(matches!(err, ResolveError::Unresolved));
        assert_eq!(err.to_string(), "secret is not set");
    }

    #[test]
    #[serial]
    fn prompt_log_line_is_emitted_even_when_env_short_circuits() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vault-prompt.log");
        let log = PromptLog::attach(&path).expect("attach");

        env::set_var(SECRET_ENV_VAR, "hunter2");
        let result = resolve_secret(&log, Some("dev"), &mut UntouchableSource);
        env::remove_var(SECRET_ENV_VAR);

        assert_eq!(result.expect("resolved"), "hunter2");
        let contents = fs::read_to_string(&path).expect("log written");
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("dev"));
    }

    #[test]
    fn format_prefixes_only_when_vault_id_is_present() {
        assert_eq!(format_secret(Some("prod"), "hunter2"), "prod/hunter2");
        assert_eq!(format_secret(None, "hunter2"), "hunter2");
    }

    #[test]
    fn format_does_not_validate_the_vault_id() {
        assert_eq!(format_secret(Some(""), "s3cr3t"), "/s3cr3t");
    }
}
