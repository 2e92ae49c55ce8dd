//! Secret resolution for the vault password client.
//!
//! This module implements the core of the client: deciding where the secret
//! comes from and reading it.
//!
//! ## Architectural role:
//! - Owns the resolution priority (environment, then terminal or stdin)
//! - Owns the input backends behind the [`SecretSource`] trait
//! - Validates the resolved value and formats it for stdout
//! - Receives the prompt-log handle from the CLI layer; it never installs
//!   global logging state itself
//!
//! ## Testing strategy:
//! - Backends and the pipeline carry unit tests in `#[cfg(test)] mod tests`
//! - Tests touching `VAULT_ID_SECRET` are serialized with `serial_test`
//! - The full binary contract is exercised in `tests/resolver_cli.rs`

pub mod error;
pub mod resolve;
pub mod source;

pub use error::ResolveError;
pub use resolve::{format_secret, resolve_secret, SECRET_ENV_VAR};
pub use source::{detect_source, LineSource, SecretSource, TerminalPrompt};
