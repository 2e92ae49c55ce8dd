//! vault-password-client - Vault secret resolution library
//!
//! This crate backs two binaries: `vault-password-client`, which resolves an
//! Ansible vault secret from the environment, an interactive prompt, or a
//! piped stdin line, and `inventory-fixture`, which generates a large static
//! inventory for scale testing.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture with the following dependencies:
//!
//! - `cli` module - Command-line interface (wires logging and resolution)
//! - `resolver` module - Secret resolution (core functionality)
//! - `logging` module - Rotating prompt log behind an explicit handle
//! - `inventory` module - Static inventory generation (standalone)
//!
//! Resolution never touches global state: the command layer builds a
//! [`PromptLog`] and an input source and hands both to the resolver, which
//! keeps the priority order and the output format in one place.

pub mod cli;
pub mod inventory;
pub mod logging;
pub mod resolver;

// Re-export public types for convenience
pub use logging::PromptLog;
pub use resolver::{resolve_secret, ResolveError, SecretSource};

/// Initialize logging for the application
#[allow(dead_code)]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer() // This ensures output goes to both stdout and test output
        .try_init();
}
